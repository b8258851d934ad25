//! Heads-up Table Binary
//!
//! Plays preflop-only heads-up hands between two random agents, driving each
//! seat through the betting engine with the decision timeout from the
//! environment. Hands that reach showdown go to the higher hole card.
//!
//! Options: --stack, --hands, --think

use clap::Parser;
use holdem_betting::cards::*;
use holdem_betting::gameroom::*;
use holdem_betting::*;
use rand::seq::SliceRandom;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(about = "heads-up betting engine demo")]
struct Args {
    /// Starting stack for both seats.
    #[arg(long, default_value_t = STACK)]
    stack: Chips,
    /// Number of hands to play.
    #[arg(long, default_value_t = 10)]
    hands: usize,
    /// Upper bound on an agent's thinking time, in milliseconds.
    #[arg(long, default_value_t = 50)]
    think: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log()?;
    let args = Args::parse();
    let timer = TimerConfig::from_env()?;
    let ids = [ID::<Player>::default(), ID::<Player>::default()];
    let mut stacks = [args.stack, args.stack];
    for hand in 0..args.hands {
        if stacks.iter().any(|s| *s < B_BLIND) {
            log::info!("stacks {:?} too short, table closes", stacks);
            break;
        }
        // the button posts the small blind heads-up
        let button = hand % 2;
        let players = [0usize, 1].map(|i| {
            let position = if i == button {
                Position::SmallBlind
            } else {
                Position::BigBlind
            };
            Arc::new(Player::new(ids[i], position, stacks[i]))
        });
        log::info!("hand {} {}", hand + 1, Street::Pref);
        stacks = play(&players, button, args.think, timer).await?;
        log::info!("stacks {} / {}", stacks[0], stacks[1]);
    }
    Ok(())
}

/// Runs one preflop-only hand and returns both stacks after settlement.
async fn play(
    players: &[Arc<Player>; 2],
    sb: usize,
    think: u64,
    timer: TimerConfig,
) -> anyhow::Result<[Chips; 2]> {
    deal(players)?;
    let mut put = [0; 2];
    for (i, player) in players.iter().enumerate() {
        if player.position().is_forced() {
            put[i] += force(player, player.position(), timer).await?;
        }
    }
    // small blind opens; the hand closes once both have acted at equal stakes
    let mut acted = [false; 2];
    let mut actor = sb;
    loop {
        let owed = put[1 - actor] - put[actor];
        let shoved = players[1 - actor].state() == State::AllIn;
        let policies = match (owed > 0, shoved) {
            (true, true) => vec![Policy::Fold, Policy::Call { owed }],
            (true, false) => vec![
                Policy::Fold,
                Policy::Call { owed },
                Policy::Raise { min: owed + B_BLIND },
            ],
            (false, true) => vec![Policy::Check],
            (false, false) => vec![Policy::Check, Policy::Raise { min: B_BLIND }],
        };
        let event = decide(&players[actor], policies, think, timer).await?;
        put[actor] += event.amount();
        acted[actor] = true;
        log::info!("{}", event);
        if event.action() == Action::Fold {
            return settle(players, put, Some(1 - actor));
        }
        let level = put[0] == put[1] && acted.iter().all(|a| *a);
        let stuck = players.iter().any(|p| p.state() == State::AllIn)
            && put[actor] <= put[1 - actor];
        if level || stuck {
            return settle(players, put, None);
        }
        actor = 1 - actor;
    }
}

fn deal(players: &[Arc<Player>; 2]) -> anyhow::Result<()> {
    let mut deck = (0..52u8)
        .map(Card::try_from)
        .collect::<anyhow::Result<Vec<Card>>>()?;
    deck.shuffle(&mut rand::rng());
    for _ in 0..HOLE_CARDS {
        for player in players {
            let card = deck.pop().ok_or_else(|| anyhow::anyhow!("deck ran out"))?;
            player.add_card(card)?;
        }
    }
    Ok(())
}

async fn force(player: &Player, position: Position, timer: TimerConfig) -> anyhow::Result<Chips> {
    let size = match position {
        Position::SmallBlind => S_BLIND,
        _ => B_BLIND,
    };
    let turn = Turn::default();
    turn.activate(player, [Policy::Blind { size }])?;
    let event = turn.resolve(player, timer).await?;
    log::info!("{}", event);
    Ok(event.amount())
}

/// Hands the turn to a random agent and waits for its decision.
async fn decide(
    player: &Arc<Player>,
    policies: Vec<Policy>,
    think: u64,
    timer: TimerConfig,
) -> anyhow::Result<Event> {
    let turn = Turn::default();
    let token = turn.token();
    if let Some(event) = turn.activate(player, policies.clone())? {
        return Ok(event);
    }
    let agent = player.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(rand::random_range(0..=think))).await;
        let policy = policies[rand::random_range(0..policies.len())];
        let amount = policy.suggest() + rand::random_range(0..=B_BLIND * 4);
        let _ = agent
            .bet(token, policy.action(), amount)
            .inspect_err(|e| log::debug!("agent {} lost its turn: {}", agent.id(), e));
    });
    turn.resolve(player, timer).await
}

/// Pays the pot to `winner`, or to the higher hole card at showdown.
fn settle(
    players: &[Arc<Player>; 2],
    put: [Chips; 2],
    winner: Option<usize>,
) -> anyhow::Result<[Chips; 2]> {
    // an all-in short stack can only win what it matched
    let matched = put[0].min(put[1]);
    for (i, player) in players.iter().enumerate() {
        player.win_pot(put[i] - matched)?;
    }
    let pot = matched * 2;
    let winner = match winner {
        Some(i) => Some(i),
        None => showdown(players)?,
    };
    match winner {
        Some(i) => players[i].win_pot(pot)?,
        None => {
            players[0].win_pot(pot / 2)?;
            players[1].win_pot(pot - pot / 2)?;
        }
    }
    Ok(players.each_ref().map(|p| p.chips()))
}

/// Higher hole card wins; None splits the pot.
fn showdown(players: &[Arc<Player>; 2]) -> anyhow::Result<Option<usize>> {
    let mut high = [None; 2];
    for (i, player) in players.iter().enumerate() {
        let pocket = Pocket::try_from(player.show_down())?;
        log::info!("{} shows {}", player.position(), pocket);
        high[i] = pocket.cards().iter().map(Card::rank).max();
    }
    Ok(match high[0].cmp(&high[1]) {
        std::cmp::Ordering::Greater => Some(0),
        std::cmp::Ordering::Less => Some(1),
        std::cmp::Ordering::Equal => None,
    })
}
