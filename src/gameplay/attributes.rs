use super::position::Position;
use super::state::State;
use crate::Chips;
use crate::ID;
use crate::player::Player;
use serde::Serialize;

/// Point-in-time copy of a player's public attributes.
///
/// Detached from the live [`Player`]: later mutation of the player is never
/// visible through a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Attributes {
    id: ID<Player>,
    chips: Chips,
    position: Position,
    state: State,
}

impl Attributes {
    pub fn new(id: ID<Player>, chips: Chips, position: Position, state: State) -> Self {
        Self {
            id,
            chips,
            position,
            state,
        }
    }
    pub fn id(&self) -> ID<Player> {
        self.id
    }
    /// Chips behind at the time of the snapshot.
    pub fn chips(&self) -> Chips {
        self.chips
    }
    pub fn position(&self) -> Position {
        self.position
    }
    pub fn state(&self) -> State {
        self.state
    }
}

impl std::fmt::Display for Attributes {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} ${:>6}", self.position, self.state, self.chips)
    }
}
