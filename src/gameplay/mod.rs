//! Vocabulary of a single player's turn.
//!
//! - [`Action`] — The kind of move a player may make
//! - [`Policy`] — The sizing rule for one legal action on one turn
//! - [`State`] — Betting status a player ends up in after acting
//! - [`Position`] — Seat role around the table
//! - [`Attributes`] — Immutable snapshot of a player
//! - [`Event`] — The outcome of a resolved turn
mod action;
mod attributes;
mod event;
mod policy;
mod position;
mod state;

pub use action::*;
pub use attributes::*;
pub use event::*;
pub use policy::*;
pub use position::*;
pub use state::*;
