//! Parallel series of matches between two agent configurations.
//!
//! Games run on a dedicated rayon pool. Seats alternate: agent A moves first
//! in even-numbered games and second in odd-numbered ones. Every game builds
//! fresh players, seeded from the tournament seed and the game index, so no
//! search state is shared between games or threads.

use std::fmt;
use std::time::Duration;

use log::info;
use rayon::prelude::*;

use crate::agent::ai::AIConfig;
use crate::error::TournamentError;
use crate::game_repr::PlayerId;
use crate::orchestrator::{EndReason, MatchConfig, MatchRecord, Orchestrator, DEFAULT_TIME_LIMIT};

/// Mixes the game index into the tournament seed
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug, Clone, Copy)]
pub struct TournamentConfig {
    /// Agent A
    pub first: AIConfig,
    /// Agent B
    pub second: AIConfig,
    pub games: usize,
    /// Enforced per-turn limit
    pub time_limit: Duration,
    /// Worker threads; the number of CPUs when `None`
    pub threads: Option<usize>,
    pub seed: u64,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            first: AIConfig::default(),
            second: AIConfig::default(),
            games: 10,
            time_limit: DEFAULT_TIME_LIMIT,
            threads: None,
            seed: 0,
        }
    }
}

impl TournamentConfig {
    pub fn new(first: AIConfig, second: AIConfig) -> Self {
        Self {
            first,
            second,
            ..Self::default()
        }
    }

    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Seat agent A occupies in game `game`
    pub fn seat_of_a(game: usize) -> PlayerId {
        if game % 2 == 0 {
            PlayerId::First
        } else {
            PlayerId::Second
        }
    }

    fn game_seed(&self, game: usize) -> u64 {
        self.seed ^ (game as u64 + 1).wrapping_mul(SEED_STRIDE)
    }
}

/// One finished game of a tournament
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub game: usize,
    pub a_seat: PlayerId,
    pub record: MatchRecord,
}

impl GameOutcome {
    pub fn a_won(&self) -> bool {
        self.record.winner() == self.a_seat
    }
}

#[derive(Debug, Clone)]
pub struct TournamentReport {
    pub first: AIConfig,
    pub second: AIConfig,
    /// Ordered by game index
    pub outcomes: Vec<GameOutcome>,
}

impl TournamentReport {
    pub fn games(&self) -> usize {
        self.outcomes.len()
    }

    /// Wins of agent A and agent B
    pub fn wins(&self) -> [usize; 2] {
        let a = self.outcomes.iter().filter(|o| o.a_won()).count();
        [a, self.games() - a]
    }

    /// Fraction of games agent A won
    pub fn win_rate(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        self.wins()[0] as f64 / self.games() as f64
    }

    /// Games won by whoever moved first
    pub fn first_mover_wins(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.record.winner() == PlayerId::First)
            .count()
    }

    /// Games not decided by isolation
    pub fn forfeits(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.record.reason != EndReason::Isolated)
            .count()
    }
}

impl fmt::Display for TournamentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.wins();
        writeln!(f, "{} games", self.games())?;
        writeln!(f, "  A {:<24} {:>4} wins ({:.1}%)", self.first.display_string(), a, self.win_rate() * 100.0)?;
        writeln!(f, "  B {:<24} {:>4} wins", self.second.display_string(), b)?;
        write!(
            f,
            "  first mover won {}, forfeits {}",
            self.first_mover_wins(),
            self.forfeits()
        )
    }
}

/// Play `config.games` matches in parallel and collect the results
pub fn run_tournament(config: &TournamentConfig) -> Result<TournamentReport, TournamentError> {
    if config.games == 0 {
        return Err(TournamentError::NoGames);
    }

    let threads = config.threads.unwrap_or_else(num_cpus::get).max(1);
    let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;

    info!(
        "Tournament: {} vs {}, {} games on {} threads",
        config.first.display_string(),
        config.second.display_string(),
        config.games,
        threads
    );

    let outcomes: Vec<GameOutcome> = pool.install(|| {
        (0..config.games)
            .into_par_iter()
            .map(|game| play_game(config, game))
            .collect()
    });

    let report = TournamentReport {
        first: config.first,
        second: config.second,
        outcomes,
    };

    let [a, b] = report.wins();
    info!("Tournament finished: A {} - {} B (win rate {:.3})", a, b, report.win_rate());

    Ok(report)
}

fn play_game(config: &TournamentConfig, game: usize) -> GameOutcome {
    let a_seat = TournamentConfig::seat_of_a(game);
    let seed = config.game_seed(game);

    let a = config.first.create_player(a_seat, seed);
    let b = config.second.create_player(a_seat.opponent(), seed.wrapping_add(1));
    let (first, second) = match a_seat {
        PlayerId::First => (a, b),
        PlayerId::Second => (b, a),
    };

    let match_config = MatchConfig::default().with_time_limit(config.time_limit);
    let record = Orchestrator::new(first, second, match_config).run();

    GameOutcome { game, a_seat, record }
}
