//! Match lifecycle management and turn coordination.
//!
//! This module contains the [`Orchestrator`], which plays one game of Isolation
//! between two players. It manages:
//! - Turn order and the shared game state
//! - The per-turn time limit and the announce slot
//! - Forfeits (no announcement in time, illegal announcement, agent failure)
//! - The move history of the match
//!
//! # Example Flow
//!
//! ```text
//! [New slot] -> [Run get_action on worker] -> [Wait up to time_limit]
//!   -> [Close slot] -> [Read latest()] -> [Validate + apply]
//!   -> [Check terminal] -> [Next turn] ...
//! ```
//!
//! The worker is a scoped thread. An agent that overruns the limit has its
//! slot closed under it, so anything it announces afterwards is ignored; the
//! runner still joins it before starting the next turn.

use std::fmt;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use log::{debug, info};

use crate::agent::ai::BoxedPlayer;
use crate::agent::{ActionSlot, GameResult};
use crate::error::{AgentError, RulesError};
use crate::game_repr::{Action, GameState, Isolation, PlayerId};

/// Limit the runner enforces per turn
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_millis(150);

/// How a match was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The loser ran out of liberties
    Isolated,

    /// The loser announced nothing before the time limit
    Timeout,

    /// The loser announced an action the rules rejected
    IllegalMove(RulesError),

    /// The loser reported an error without announcing anything
    AgentFailure(AgentError),
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndReason::Isolated => write!(f, "isolation"),
            EndReason::Timeout => write!(f, "timeout"),
            EndReason::IllegalMove(err) => write!(f, "illegal move ({})", err),
            EndReason::AgentFailure(err) => write!(f, "agent failure ({})", err),
        }
    }
}

/// Everything needed to inspect or replay a finished match
#[derive(Debug, Clone)]
pub struct MatchRecord {
    pub result: GameResult,
    pub reason: EndReason,
    /// Applied actions in order, starting from the configured initial state
    pub history: Vec<Action>,
    pub final_state: Isolation,
}

impl MatchRecord {
    pub fn winner(&self) -> PlayerId {
        self.result.winner()
    }
}

/// Runner settings
#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub time_limit: Duration,
    /// Position to start from, normally the empty board
    pub initial_state: Isolation,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            initial_state: Isolation::new(),
        }
    }
}

impl MatchConfig {
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    pub fn with_initial_state(mut self, initial_state: Isolation) -> Self {
        self.initial_state = initial_state;
        self
    }
}

/// Outcome of one turn
enum TurnOutcome {
    Played(Isolation, Action),
    Forfeit(EndReason),
}

/// Root component coordinating one match.
///
/// `players` is indexed by [`PlayerId::index`]; each player must report the
/// seat it is placed in.
pub struct Orchestrator {
    players: [BoxedPlayer; 2],
    config: MatchConfig,
    state: Isolation,
    history: Vec<Action>,
}

impl Orchestrator {
    pub fn new(first: BoxedPlayer, second: BoxedPlayer, config: MatchConfig) -> Self {
        debug_assert_eq!(first.player_id(), PlayerId::First);
        debug_assert_eq!(second.player_id(), PlayerId::Second);

        Self {
            players: [first, second],
            config,
            state: config.initial_state,
            history: Vec::new(),
        }
    }

    /// Play until the game is decided.
    ///
    /// # Returns
    ///
    /// A [`MatchRecord`] with the winner, how it won, and the full history
    pub fn run(mut self) -> MatchRecord {
        info!(
            "Match started: {} vs {}",
            self.players[0].name(),
            self.players[1].name()
        );

        loop {
            let mover = self.state.player();

            if self.state.terminal_test() {
                // Either side can be the stuck one: a player may jump into a
                // dead end while the opponent still has moves.
                let winner = if self.state.utility(mover) > 0.0 {
                    mover
                } else {
                    mover.opponent()
                };
                return self.finish(winner, EndReason::Isolated);
            }

            match self.request_move(mover) {
                TurnOutcome::Played(next, action) => {
                    debug!(
                        "ply {}: {} ({}) plays {}",
                        self.state.ply_count(),
                        self.players[mover.index()].name(),
                        mover,
                        action
                    );
                    self.state = next;
                    self.history.push(action);
                }
                TurnOutcome::Forfeit(reason) => {
                    debug!(
                        "ply {}: {} ({}) forfeits by {}",
                        self.state.ply_count(),
                        self.players[mover.index()].name(),
                        mover,
                        reason
                    );
                    return self.finish(mover.opponent(), reason);
                }
            }
        }
    }

    /// Run one turn for `mover` under the time limit and validate its announcement
    fn request_move(&mut self, mover: PlayerId) -> TurnOutcome {
        let state = self.state;
        let slot = ActionSlot::new();
        let time_limit = self.config.time_limit;
        let player = &mut self.players[mover.index()];

        let returned = thread::scope(|scope| {
            let (tx, rx) = mpsc::channel();
            let worker_slot = slot.clone();

            scope.spawn(move || {
                let outcome = player.get_action(&state, &worker_slot);
                // The receiver is gone if the turn already timed out
                let _ = tx.send(outcome);
            });

            let returned = rx.recv_timeout(time_limit).ok();
            slot.close();
            returned
        });

        match (slot.latest(), returned) {
            (Some(action), _) => match state.try_result(action) {
                Ok(next) => TurnOutcome::Played(next, action),
                Err(err) => TurnOutcome::Forfeit(EndReason::IllegalMove(err)),
            },
            (None, Some(Err(err))) => TurnOutcome::Forfeit(EndReason::AgentFailure(err)),
            (None, _) => TurnOutcome::Forfeit(EndReason::Timeout),
        }
    }

    fn finish(mut self, winner: PlayerId, reason: EndReason) -> MatchRecord {
        let result = GameResult::from_winner(winner);
        info!(
            "Match over after {} plies: {} ({}) wins by {}",
            self.state.ply_count(),
            self.players[winner.index()].name(),
            winner,
            reason
        );

        for player in self.players.iter_mut() {
            player.game_ended(result);
        }

        MatchRecord {
            result,
            reason,
            history: self.history,
            final_state: self.state,
        }
    }
}

/// Play one match from the empty board
pub fn play_match(first: BoxedPlayer, second: BoxedPlayer, time_limit: Duration) -> MatchRecord {
    let config = MatchConfig::default().with_time_limit(time_limit);
    Orchestrator::new(first, second, config).run()
}
