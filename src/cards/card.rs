use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// A single playing card, dealt face down to a player as a hole card.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 34
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) + u8::from(c.rank) * 4
    }
}
impl TryFrom<u8> for Card {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> std::result::Result<Self, Self::Error> {
        Ok(Self {
            rank: Rank::try_from(n / 4)?,
            suit: Suit::try_from(n % 4)?,
        })
    }
}

/// str isomorphism
/// "Ts", "2c", "Ah"
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(u), None) => Ok(Self {
                rank: Rank::try_from(r)?,
                suit: Suit::try_from(u)?,
            }),
            _ => Err(anyhow::anyhow!("invalid card str: {}", s)),
        }
    }
}

impl Arbitrary for Card {
    fn random() -> Self {
        Self {
            rank: Rank::random(),
            suit: Suit::random(),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for n in 0..52u8 {
            let card = Card::try_from(n).unwrap();
            assert_eq!(n, u8::from(card));
        }
        assert!(Card::try_from(52u8).is_err());
    }

    #[test]
    fn parse_str() {
        let card = Card::try_from("Ts").unwrap();
        assert_eq!(card.rank(), Rank::Ten);
        assert_eq!(card.suit(), Suit::Spade);
        assert_eq!(card.to_string(), "Ts");
        assert!(Card::try_from("T").is_err());
        assert!(Card::try_from("Tsx").is_err());
        assert!(Card::try_from("1s").is_err());
    }
}
