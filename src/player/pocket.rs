use super::error::BetError;
use crate::HOLE_CARDS;
use crate::cards::Card;

/// Hole cards held by one player, at most [`HOLE_CARDS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pocket(Vec<Card>);

impl Pocket {
    pub fn empty() -> Self {
        Self(Vec::with_capacity(HOLE_CARDS))
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn is_full(&self) -> bool {
        self.size() >= HOLE_CARDS
    }
    /// Takes a card unless the pocket is already full.
    pub fn add(&mut self, card: Card) -> Result<(), BetError> {
        if self.is_full() {
            Err(BetError::Capacity)
        } else {
            self.0.push(card);
            Ok(())
        }
    }
    /// Owned copy of the held cards.
    pub fn cards(&self) -> Vec<Card> {
        self.0.clone()
    }
}

/// Rebuilds a pocket from shown cards, refusing more than [`HOLE_CARDS`].
impl TryFrom<Vec<Card>> for Pocket {
    type Error = BetError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        cards.into_iter().try_fold(Self::empty(), |mut pocket, card| {
            pocket.add(card)?;
            Ok(pocket)
        })
    }
}

impl std::fmt::Display for Pocket {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self
            .0
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", cards)
    }
}
