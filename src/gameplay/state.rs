use super::action::Action;
use serde::Serialize;

/// Player betting status within a hand.
///
/// - `Joined` — Seated and dealt in, no action taken yet
/// - `Checked`, `Betted`, `Called`, `Raised` — Last voluntary action
/// - `AllIn` — Whole stack committed, no more decisions but still in the pot
/// - `Folded` — Out of the hand
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum State {
    #[default]
    Joined,
    Checked,
    Betted,
    Called,
    Raised,
    AllIn,
    Folded,
}

impl State {
    /// State a player moves to after taking `action`.
    /// Forced wagers have no entry and leave the state untouched.
    pub const fn after(action: Action) -> Option<Self> {
        match action {
            Action::Check => Some(Self::Checked),
            Action::Bet => Some(Self::Betted),
            Action::Call => Some(Self::Called),
            Action::Raise => Some(Self::Raised),
            Action::Fold => Some(Self::Folded),
            Action::Blind => None,
        }
    }
    /// No further voluntary action is possible this hand.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::AllIn | Self::Folded)
    }
    /// True if player is still competing for the pot.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Folded)
    }
}

impl TryFrom<&str> for State {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_uppercase().as_str() {
            "J" => Ok(State::Joined),
            "X" => Ok(State::Checked),
            "B" => Ok(State::Betted),
            "C" => Ok(State::Called),
            "R" => Ok(State::Raised),
            "S" => Ok(State::AllIn),
            "F" => Ok(State::Folded),
            _ => Err(anyhow::anyhow!("invalid state string")),
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            State::Joined => write!(f, "J"),
            State::Checked => write!(f, "X"),
            State::Betted => write!(f, "B"),
            State::Called => write!(f, "C"),
            State::Raised => write!(f, "R"),
            State::AllIn => write!(f, "S"),
            State::Folded => write!(f, "F"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blinds_keep_state() {
        assert_eq!(State::after(Action::Blind), None);
        assert_eq!(State::after(Action::Raise), Some(State::Raised));
        assert_eq!(State::after(Action::Fold), Some(State::Folded));
    }

    #[test]
    fn terminal_states() {
        assert!(State::AllIn.is_terminal());
        assert!(State::Folded.is_terminal());
        assert!(!State::Called.is_terminal());
        assert!(State::AllIn.is_active());
        assert!(!State::Folded.is_active());
    }

    #[test]
    fn parse_display() {
        for s in ["J", "X", "B", "C", "R", "S", "F"] {
            assert_eq!(State::try_from(s).unwrap().to_string(), s);
        }
    }
}
