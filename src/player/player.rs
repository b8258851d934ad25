use super::error::BetError;
use super::pocket::Pocket;
use crate::Chips;
use crate::ID;
use crate::cards::Card;
use crate::gameplay::*;
use crate::gameroom::Turn;
use std::collections::BTreeMap;
use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;
use tokio::sync::mpsc::UnboundedSender;

/// One seated player's betting state machine.
///
/// The orchestrator drives a turn with [`Player::activate`], then the player's
/// agent (or a timeout via [`Player::cancel_betting`]) resolves it with
/// [`Player::bet`]. Every resolved turn emits exactly one [`Event`] on the
/// channel supplied at activation.
///
/// All state sits behind one lock. Reads share it, mutations hold it
/// exclusively, and event delivery happens only after the lock is released,
/// so a slow receiver never stalls the player.
#[derive(Debug)]
pub struct Player {
    id: ID<Player>,
    seat: RwLock<Seat>,
}

/// Mutable state guarded by the player's lock.
#[derive(Debug)]
struct Seat {
    chips: Chips,
    state: State,
    position: Position,
    pocket: Pocket,
    pending: Option<Pending>,
}

/// A turn that was activated and not yet resolved.
#[derive(Debug)]
struct Pending {
    token: ID<Turn>,
    sender: UnboundedSender<Event>,
    legal: BTreeMap<Action, Policy>,
}

impl Player {
    pub fn new(id: ID<Player>, position: Position, chips: Chips) -> Self {
        Self {
            id,
            seat: RwLock::new(Seat {
                chips: chips.max(0),
                state: State::Joined,
                position,
                pocket: Pocket::empty(),
                pending: None,
            }),
        }
    }
}

impl Player {
    pub fn id(&self) -> ID<Player> {
        self.id
    }
    pub fn chips(&self) -> Chips {
        self.read().chips
    }
    pub fn position(&self) -> Position {
        self.read().position
    }
    pub fn state(&self) -> State {
        self.read().state
    }
    /// Consistent snapshot of all public attributes under one lock.
    pub fn attributes(&self) -> Attributes {
        self.read().snapshot(self.id)
    }
}

impl Player {
    pub fn take_position(&self, position: Position) {
        self.write().position = position;
        log::info!("[player {}] takes {}", self.id, position);
    }

    /// Starts a turn, replacing whatever turn was pending.
    ///
    /// With a single legal policy the turn resolves immediately at that
    /// policy's suggested size, which is how forced bets and single-move
    /// spots are played. Returns the emitted event in that case.
    pub fn activate<I>(
        &self,
        token: ID<Turn>,
        sender: UnboundedSender<Event>,
        policies: I,
    ) -> Result<Option<Event>, BetError>
    where
        I: IntoIterator<Item = Policy>,
    {
        let policies = policies.into_iter().collect::<Vec<Policy>>();
        let forced = match policies.as_slice() {
            [] => return Err(BetError::Empty),
            [only] => Some(*only),
            _ => None,
        };
        let mut seat = self.write();
        seat.pending = Some(Pending {
            token,
            sender,
            legal: policies.iter().map(|p| (p.action(), *p)).collect(),
        });
        log::debug!(
            "[player {}] activated {} with {}",
            self.id,
            token,
            policies
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        match forced {
            None => Ok(None),
            Some(policy) => {
                let (event, sender) = seat
                    .settle(self.id, token, policy.action(), policy.suggest())
                    .inspect_err(|e| log::warn!("[player {}] forced {}: {}", self.id, policy, e))?;
                drop(seat);
                self.deliver(sender, event);
                Ok(Some(event))
            }
        }
    }

    /// Resolves the pending turn with `action` sized at `amount`.
    pub fn bet(&self, token: ID<Turn>, action: Action, amount: Chips) -> Result<Event, BetError> {
        let (event, sender) = self.write().settle(self.id, token, action, amount)?;
        self.deliver(sender, event);
        Ok(event)
    }

    /// Timeout fallback: checks when checking is legal, folds otherwise.
    pub fn cancel_betting(&self, token: ID<Turn>) -> Result<Event, BetError> {
        let mut seat = self.write();
        let policy = seat.fallback(token)?;
        log::debug!("[player {}] cancelled {}, falls back to {}", self.id, token, policy);
        let (event, sender) = seat.settle(self.id, token, policy.action(), policy.suggest())?;
        drop(seat);
        self.deliver(sender, event);
        Ok(event)
    }

    pub fn add_card(&self, card: Card) -> Result<(), BetError> {
        self.write()
            .pocket
            .add(card)
            .inspect_err(|e| log::warn!("[player {}] refused {}: {}", self.id, card, e))
    }

    /// Hole cards held right now, as an owned copy.
    pub fn show_down(&self) -> Vec<Card> {
        self.write().pocket.cards()
    }

    /// Credits winnings. The betting state is left as it is.
    pub fn win_pot(&self, amount: Chips) -> Result<(), BetError> {
        if amount < 0 {
            return Err(BetError::Negative(amount));
        }
        let mut seat = self.write();
        let stack = seat.chips;
        seat.chips = stack
            .checked_add(amount)
            .ok_or(BetError::Overflow { stack, amount })?;
        log::info!("[player {}] wins {}, stack {}", self.id, amount, seat.chips);
        Ok(())
    }
}

impl Player {
    fn read(&self) -> RwLockReadGuard<'_, Seat> {
        self.seat.read().unwrap_or_else(PoisonError::into_inner)
    }
    fn write(&self) -> RwLockWriteGuard<'_, Seat> {
        self.seat.write().unwrap_or_else(PoisonError::into_inner)
    }
    fn deliver(&self, sender: UnboundedSender<Event>, event: Event) {
        log::debug!("[player {}] {}", self.id, event);
        let _ = sender
            .send(event)
            .inspect_err(|e| log::warn!("[player {}] undelivered {}", self.id, e.0));
    }
}

impl Seat {
    fn snapshot(&self, id: ID<Player>) -> Attributes {
        Attributes::new(id, self.chips, self.position, self.state)
    }

    fn pending(&self, token: ID<Turn>) -> Result<&Pending, BetError> {
        match self.pending {
            None => Err(BetError::Inactive(token)),
            Some(ref p) if p.token != token => Err(BetError::Mismatch {
                expected: p.token,
                actual: token,
            }),
            Some(ref p) => Ok(p),
        }
    }

    fn fallback(&self, token: ID<Turn>) -> Result<Policy, BetError> {
        let legal = &self.pending(token)?.legal;
        legal
            .get(&Action::Check)
            .or_else(|| legal.get(&Action::Fold))
            .copied()
            .ok_or(BetError::Unreachable(token))
    }

    /// Validates and applies one action. Consumes the pending turn on success
    /// and hands back the event with the channel it must be delivered on.
    fn settle(
        &mut self,
        id: ID<Player>,
        token: ID<Turn>,
        action: Action,
        amount: Chips,
    ) -> Result<(Event, UnboundedSender<Event>), BetError> {
        let policy = self
            .pending(token)?
            .legal
            .get(&action)
            .copied()
            .ok_or(BetError::Disallowed(action))?;
        let wager = policy.accept(amount, self.chips)?;
        let pending = self.pending.take().ok_or(BetError::Inactive(token))?;
        self.chips -= wager;
        if let Some(state) = State::after(action) {
            self.state = state;
        }
        if self.chips == 0 && action != Action::Fold {
            self.state = State::AllIn;
        }
        Ok((Event::new(self.snapshot(id), action, wager), pending.sender))
    }
}
