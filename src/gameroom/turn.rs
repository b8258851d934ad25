use super::channel::Channel;
use super::timer::TimerConfig;
use crate::ID;
use crate::gameplay::Event;
use crate::gameplay::Policy;
use crate::player::BetError;
use crate::player::Player;
use tokio::sync::mpsc::UnboundedSender;

/// One activation of one player: the token that authorizes it and the
/// receiving end of the channel its single [`Event`] arrives on.
///
/// A turn is consumed by [`Turn::resolve`], so a token is never reused.
#[derive(Debug, Default)]
pub struct Turn {
    token: ID<Turn>,
    channel: Channel<Event>,
}

impl Turn {
    pub fn token(&self) -> ID<Self> {
        self.token
    }
    pub fn sender(&self) -> UnboundedSender<Event> {
        self.channel.sender()
    }
    /// Hands this turn to `player` with the given legal policies.
    pub fn activate<I>(&self, player: &Player, policies: I) -> Result<Option<Event>, BetError>
    where
        I: IntoIterator<Item = Policy>,
    {
        player.activate(self.token, self.sender(), policies)
    }
    /// Waits for the player to act. Past the decision timeout the turn is
    /// cancelled and the check-or-fold fallback event is returned instead.
    /// A decision that settles while the timeout fires still wins.
    pub async fn resolve(mut self, player: &Player, timer: TimerConfig) -> anyhow::Result<Event> {
        match tokio::time::timeout(timer.decision, self.channel.rx().recv()).await {
            Ok(Some(event)) => Ok(event),
            Ok(None) => Err(anyhow::anyhow!("turn {} channel closed", self.token)),
            Err(_) => {
                log::warn!("[turn {}] no decision after {:?}", self.token, timer.decision);
                match player.cancel_betting(self.token) {
                    Ok(event) => Ok(event),
                    // a late decision already settled; its event is on the way
                    Err(BetError::Inactive(_)) => {
                        tokio::time::timeout(timer.decision, self.channel.rx().recv())
                            .await
                            .ok()
                            .flatten()
                            .ok_or(BetError::Inactive(self.token))
                            .map_err(anyhow::Error::from)
                    }
                    Err(e) => Err(e.into()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::*;
    use std::sync::Arc;
    use std::time::Duration;

    fn quick() -> TimerConfig {
        TimerConfig::new(Duration::from_millis(20))
    }

    fn seated(chips: crate::Chips) -> Arc<Player> {
        Arc::new(Player::new(ID::default(), Position::BigBlind, chips))
    }

    #[tokio::test]
    async fn returns_the_players_decision() {
        let player = seated(1000);
        let turn = Turn::default();
        let token = turn.token();
        turn.activate(&player, [Policy::Call { owed: 40 }, Policy::Fold])
            .unwrap();
        let agent = player.clone();
        tokio::spawn(async move { agent.bet(token, Action::Call, 40) });
        let event = turn.resolve(&player, TimerConfig::default()).await.unwrap();
        assert_eq!(event.action(), Action::Call);
        assert_eq!(event.amount(), 40);
        assert_eq!(player.chips(), 960);
    }

    #[tokio::test]
    async fn forced_turns_resolve_immediately() {
        let player = seated(1000);
        let turn = Turn::default();
        let auto = turn.activate(&player, [Policy::Blind { size: 10 }]).unwrap();
        let event = turn.resolve(&player, quick()).await.unwrap();
        assert_eq!(auto, Some(event));
        assert_eq!(event.amount(), 10);
    }

    #[tokio::test]
    async fn timeout_checks_when_possible() {
        let player = seated(1000);
        let turn = Turn::default();
        turn.activate(&player, [Policy::Check, Policy::Bet { min: 10 }, Policy::Fold])
            .unwrap();
        let event = turn.resolve(&player, quick()).await.unwrap();
        assert_eq!(event.action(), Action::Check);
        assert_eq!(player.state(), State::Checked);
    }

    #[tokio::test]
    async fn timeout_folds_facing_a_bet() {
        let player = seated(1000);
        let turn = Turn::default();
        turn.activate(&player, [Policy::Call { owed: 50 }, Policy::Fold])
            .unwrap();
        let event = turn.resolve(&player, quick()).await.unwrap();
        assert_eq!(event.action(), Action::Fold);
        assert_eq!(player.state(), State::Folded);
        assert_eq!(player.chips(), 1000);
    }

    #[tokio::test]
    async fn decision_settled_at_the_deadline_wins() {
        let player = seated(1000);
        let turn = Turn::default();
        let (relay, mut delayed) = tokio::sync::mpsc::unbounded_channel();
        player
            .activate(turn.token(), relay, [Policy::Call { owed: 50 }, Policy::Fold])
            .unwrap();
        player.bet(turn.token(), Action::Call, 50).unwrap();
        let sender = turn.sender();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(75)).await;
            if let Some(event) = delayed.recv().await {
                let _ = sender.send(event);
            }
        });
        let timer = TimerConfig::new(Duration::from_millis(50));
        let event = turn.resolve(&player, timer).await.unwrap();
        assert_eq!(event.action(), Action::Call);
        assert_eq!(event.amount(), 50);
        assert_eq!(player.state(), State::Called);
    }

    #[tokio::test]
    async fn never_activated_turn_gives_up() {
        let player = seated(1000);
        let turn = Turn::default();
        let token = turn.token();
        let err = turn.resolve(&player, quick()).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<BetError>(),
            Some(&BetError::Inactive(token))
        );
    }

    #[tokio::test]
    async fn timeout_without_fallback_surfaces_error() {
        let player = seated(1000);
        let turn = Turn::default();
        let token = turn.token();
        turn.activate(&player, [Policy::Call { owed: 50 }, Policy::Raise { min: 100 }])
            .unwrap();
        let err = turn.resolve(&player, quick()).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<BetError>(),
            Some(&BetError::Unreachable(token))
        );
        assert_eq!(player.state(), State::Joined);
    }
}
