use serde::Serialize;

/// Named seat role at a full-ring table, reassigned every hand.
/// Ordered by preflop posting: blinds first, then the early to late seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Position {
    SmallBlind,
    BigBlind,
    UnderTheGun,
    UnderTheGun1,
    UnderTheGun2,
    LoJack,
    Hijack,
    CutOff,
    Button,
    Straddle,
}

impl Position {
    pub const fn all() -> &'static [Self] {
        &[
            Self::SmallBlind,
            Self::BigBlind,
            Self::UnderTheGun,
            Self::UnderTheGun1,
            Self::UnderTheGun2,
            Self::LoJack,
            Self::Hijack,
            Self::CutOff,
            Self::Button,
            Self::Straddle,
        ]
    }
    /// Seats that post a forced wager before cards are seen.
    pub fn is_forced(&self) -> bool {
        matches!(self, Self::SmallBlind | Self::BigBlind | Self::Straddle)
    }
}

impl crate::Arbitrary for Position {
    fn random() -> Self {
        Self::all()[rand::random_range(0..Self::all().len())]
    }
}

impl TryFrom<&str> for Position {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_uppercase().as_str() {
            "SB" => Ok(Self::SmallBlind),
            "BB" => Ok(Self::BigBlind),
            "UTG" => Ok(Self::UnderTheGun),
            "UTG+1" => Ok(Self::UnderTheGun1),
            "UTG+2" => Ok(Self::UnderTheGun2),
            "LJ" => Ok(Self::LoJack),
            "HJ" => Ok(Self::Hijack),
            "CO" => Ok(Self::CutOff),
            "BTN" => Ok(Self::Button),
            "STR" => Ok(Self::Straddle),
            _ => Err(anyhow::anyhow!("invalid position: {}", s)),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SmallBlind => write!(f, "SB"),
            Self::BigBlind => write!(f, "BB"),
            Self::UnderTheGun => write!(f, "UTG"),
            Self::UnderTheGun1 => write!(f, "UTG+1"),
            Self::UnderTheGun2 => write!(f, "UTG+2"),
            Self::LoJack => write!(f, "LJ"),
            Self::Hijack => write!(f, "HJ"),
            Self::CutOff => write!(f, "CO"),
            Self::Button => write!(f, "BTN"),
            Self::Straddle => write!(f, "STR"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_display() {
        for position in Position::all() {
            assert_eq!(
                *position,
                Position::try_from(position.to_string().as_str()).unwrap()
            );
        }
        assert_eq!(Position::all().len(), 10);
    }

    #[test]
    fn forced_seats() {
        assert!(Position::SmallBlind.is_forced());
        assert!(Position::Straddle.is_forced());
        assert!(!Position::Button.is_forced());
        assert_eq!(Position::all().iter().filter(|p| p.is_forced()).count(), 3);
    }
}
