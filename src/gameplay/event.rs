use super::action::Action;
use super::attributes::Attributes;
use crate::Chips;
use serde::Serialize;

/// Outcome of one resolved turn, delivered to the orchestrator.
/// Carries the player's attributes as they stood after the action applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Event {
    player: Attributes,
    action: Action,
    amount: Chips,
}

impl Event {
    pub fn new(player: Attributes, action: Action, amount: Chips) -> Self {
        Self {
            player,
            action,
            amount,
        }
    }
    pub fn player(&self) -> Attributes {
        self.player
    }
    pub fn action(&self) -> Action {
        self.action
    }
    /// Settled wager moved from the stack into the pot.
    pub fn amount(&self) -> Chips {
        self.amount
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.action {
            a if a.is_passive() => write!(f, "{} {}", self.player.position(), a),
            a => write!(f, "{} {:<5} {}", self.player.position(), a, self.amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ID;
    use crate::gameplay::*;

    #[test]
    fn serializes_snapshot_and_amount() {
        let id = ID::default();
        let attributes = Attributes::new(id, 0, Position::Button, State::AllIn);
        let event = Event::new(attributes, Action::Raise, 500);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["action"], "Raise");
        assert_eq!(json["amount"], 500);
        assert_eq!(json["player"]["state"], "AllIn");
        assert_eq!(json["player"]["position"], "Button");
        assert_eq!(json["player"]["id"], id.inner().to_string());
    }

    #[test]
    fn display_hides_zero_wagers() {
        let attributes = Attributes::new(ID::default(), 900, Position::BigBlind, State::Checked);
        assert_eq!(Event::new(attributes, Action::Check, 0).to_string(), "BB CHECK");
        assert_eq!(
            Event::new(attributes, Action::Call, 100).to_string(),
            "BB CALL  100"
        );
    }
}
