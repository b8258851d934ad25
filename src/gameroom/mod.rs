//! Orchestrator side of a single player's turn.
//!
//! The table orchestrator owns turn order and timeouts; these helpers pair a
//! fresh turn token with its result channel and implement the timeout
//! fallback against [`Player::cancel_betting`](crate::Player::cancel_betting).
//!
//! - [`Turn`] — Token plus receiving end for one activation
//! - [`Channel`] — Coupled sender/receiver pair
//! - [`TimerConfig`] — How long a player may think
mod channel;
mod timer;
mod turn;

pub use channel::*;
pub use timer::*;
pub use turn::*;
