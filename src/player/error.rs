use crate::Chips;
use crate::ID;
use crate::gameplay::Action;
use crate::gameroom::Turn;
use thiserror::Error;

/// Reasons a player refuses an operation. None of them change player state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The call carries a token from a stale or foreign turn.
    #[error("unmatched turn token, expected: {expected}; actual: {actual}")]
    Mismatch { expected: ID<Turn>, actual: ID<Turn> },
    /// No turn is pending: never activated, or already resolved.
    #[error("no pending turn for token {0}")]
    Inactive(ID<Turn>),
    /// Activation offered no legal action at all.
    #[error("activation without any legal action")]
    Empty,
    #[error("disallowed action type: {0}")]
    Disallowed(Action),
    #[error("negative wager: {0}")]
    Negative(Chips),
    #[error("wager {requested} below minimum {minimum}")]
    Undersized { requested: Chips, minimum: Chips },
    /// Crediting the stack would exceed the chip range.
    #[error("stack {stack} cannot take {amount} more chips")]
    Overflow { stack: Chips, amount: Chips },
    /// A third hole card was dealt.
    #[error("too many cards taken")]
    Capacity,
    /// Cancellation found neither check nor fold among the legal actions.
    #[error("cannot cancel turn {0}: neither check nor fold is legal")]
    Unreachable(ID<Turn>),
}

impl BetError {
    /// Errors that mean the hand itself is broken rather than the request.
    /// These are upstream bugs and must not be retried.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Capacity | Self::Unreachable(_))
    }
    /// Errors the caller can fix by retrying with a different amount.
    pub fn is_sizing(&self) -> bool {
        matches!(self, Self::Negative(_) | Self::Undersized { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_errors() {
        assert!(BetError::Capacity.is_fatal());
        assert!(BetError::Unreachable(ID::default()).is_fatal());
        assert!(!BetError::Disallowed(Action::Raise).is_fatal());
        assert!(BetError::Negative(-5).is_sizing());
        assert!(!BetError::Empty.is_sizing());
        assert!(!BetError::Overflow { stack: 1, amount: 1 }.is_fatal());
    }

    #[test]
    fn messages() {
        let err = BetError::Undersized {
            requested: 50,
            minimum: 100,
        };
        assert_eq!(err.to_string(), "wager 50 below minimum 100");
        assert_eq!(
            BetError::Disallowed(Action::Check).to_string(),
            "disallowed action type: CHECK"
        );
    }
}
