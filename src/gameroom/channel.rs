use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;

/// Coupled sender/receiver pair for one-way delivery.
/// Ensures the channel endpoints stay together and share the same type.
/// Unbounded so that a sender never waits on the receiver.
#[derive(Debug)]
pub struct Channel<T> {
    tx: UnboundedSender<T>,
    rx: UnboundedReceiver<T>,
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        Self { tx, rx }
    }
}

impl<T> Channel<T> {
    pub fn rx(&mut self) -> &mut UnboundedReceiver<T> {
        &mut self.rx
    }

    /// Fresh handle to the sending end.
    pub fn sender(&self) -> UnboundedSender<T> {
        self.tx.clone()
    }
}
