use super::action::Action;
use crate::Chips;
use crate::player::BetError;

/// Sizing rule for one legal action on one turn.
///
/// The orchestrator knows the table-wide context (amount owed, minimum raise,
/// blind sizes) and hands the player one policy per legal action. The player
/// never sizes a wager itself; it asks the policy through [`Policy::accept`].
///
/// Wager amounts are always chips moved from the stack on this action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    Check,
    Fold,
    /// Opening wager of at least `min`.
    Bet { min: Chips },
    /// Match the `owed` amount, or as much of it as the stack covers.
    Call { owed: Chips },
    /// Raise by putting in at least `min`.
    Raise { min: Chips },
    /// Forced wager of `size`, or the whole stack if shorter.
    Blind { size: Chips },
}

impl Policy {
    /// Action this policy makes legal.
    pub fn action(&self) -> Action {
        match self {
            Self::Check => Action::Check,
            Self::Fold => Action::Fold,
            Self::Bet { .. } => Action::Bet,
            Self::Call { .. } => Action::Call,
            Self::Raise { .. } => Action::Raise,
            Self::Blind { .. } => Action::Blind,
        }
    }
    pub fn description(&self) -> String {
        match self {
            Self::Check => "check".to_string(),
            Self::Fold => "fold".to_string(),
            Self::Bet { min } => format!("bet at least {}", min),
            Self::Call { owed } => format!("call {}", owed),
            Self::Raise { min } => format!("raise by at least {}", min),
            Self::Blind { size } => format!("post {}", size),
        }
    }
    /// Default wager, used when the turn resolves without a decision.
    pub fn suggest(&self) -> Chips {
        match *self {
            Self::Check | Self::Fold => 0,
            Self::Bet { min } | Self::Raise { min } => min,
            Self::Call { owed } => owed,
            Self::Blind { size } => size,
        }
    }
    /// Settles a `requested` wager against the `remaining` stack.
    ///
    /// Requests at or above the stack clamp to an all-in. An all-in is legal
    /// even when it falls short of a bet or raise minimum; anything else under
    /// the minimum is rejected. Passive actions ignore the request.
    pub fn accept(&self, requested: Chips, remaining: Chips) -> Result<Chips, BetError> {
        let remaining = remaining.max(0);
        match *self {
            Self::Check | Self::Fold => Ok(0),
            Self::Call { owed } => Ok(owed.clamp(0, remaining)),
            Self::Blind { size } => Ok(size.clamp(0, remaining)),
            Self::Bet { min } | Self::Raise { min } => match requested {
                r if r < 0 => Err(BetError::Negative(r)),
                r if r >= remaining => Ok(remaining),
                r if r < min => Err(BetError::Undersized {
                    requested: r,
                    minimum: min,
                }),
                r => Ok(r),
            },
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
