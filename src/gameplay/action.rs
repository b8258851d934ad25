use serde::Serialize;

/// The kind of move a player may make on their turn.
///
/// Amounts are not part of an action: the size of a wager is settled by the
/// [`Policy`](super::Policy) that made the action legal. `Blind` covers every
/// forced wager (small blind, big blind, ante, straddle).
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize)]
pub enum Action {
    Check,
    Fold,
    Bet,
    Call,
    Raise,
    Blind,
}

impl Action {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Check,
            Self::Fold,
            Self::Bet,
            Self::Call,
            Self::Raise,
            Self::Blind,
        ]
    }
    /// True if this is a fold or check (no chips added).
    pub fn is_passive(&self) -> bool {
        matches!(self, Action::Fold | Action::Check)
    }
    pub fn label(&self) -> &'static str {
        match self {
            Action::Check => "Check",
            Action::Fold => "Fold",
            Action::Bet => "Bet",
            Action::Call => "Call",
            Action::Raise => "Raise",
            Action::Blind => "Blind",
        }
    }
}

impl TryFrom<&str> for Action {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "CHECK" => Ok(Action::Check),
            "FOLD" => Ok(Action::Fold),
            "BET" => Ok(Action::Bet),
            "CALL" => Ok(Action::Call),
            "RAISE" => Ok(Action::Raise),
            "BLIND" | "ANTE" | "STRADDLE" => Ok(Action::Blind),
            _ => Err(anyhow::anyhow!("invalid action type: {}", s)),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(&self.label().to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_display() {
        for action in Action::all() {
            assert_eq!(*action, Action::try_from(action.to_string().as_str()).unwrap());
        }
        assert_eq!(Action::try_from("ante").unwrap(), Action::Blind);
        assert!(Action::try_from("shove").is_err());
        assert!(Action::Fold.is_passive());
        assert!(!Action::Blind.is_passive());
    }
}
