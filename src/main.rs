//! Isolation agent CLI - pit two agents against each other
//!
//! ```text
//! isolation-agent --first alpha-beta --second greedy --games 20
//! RUST_LOG=debug isolation-agent --games 1 --show-board
//! ```

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use isolation_agent::agent::ai::{AIConfig, AIType, DEFAULT_TIME_BUDGET};
use isolation_agent::agent::Difficulty;
use isolation_agent::game_repr::{GameState, PlayerId};
use isolation_agent::orchestrator::DEFAULT_TIME_LIMIT;
use isolation_agent::tournament::{run_tournament, TournamentConfig};

#[derive(Parser, Debug)]
#[command(name = "isolation-agent")]
#[command(version, about = "Play knight's Isolation matches between search agents", long_about = None)]
struct Cli {
    /// Agent A (alpha-beta, greedy or random)
    #[arg(long, default_value = "alpha-beta")]
    first: AIType,

    /// Agent B (alpha-beta, greedy or random)
    #[arg(long, default_value = "greedy")]
    second: AIType,

    /// Search depth ceiling for alpha-beta agents (easy, medium, hard, expert)
    #[arg(long, short = 'd', default_value = "expert")]
    difficulty: Difficulty,

    /// Number of games; agents swap seats every game
    #[arg(long, short = 'g', default_value_t = 10)]
    games: usize,

    /// Per-turn limit the runner enforces
    #[arg(long, default_value_t = DEFAULT_TIME_LIMIT.as_millis() as u64)]
    time_limit_ms: u64,

    /// Internal search budget per move
    #[arg(long, default_value_t = DEFAULT_TIME_BUDGET.as_millis() as u64)]
    budget_ms: u64,

    /// Worker threads (defaults to the number of CPUs)
    #[arg(long, short = 'j')]
    threads: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print the final board of every game
    #[arg(long)]
    show_board: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.budget_ms >= cli.time_limit_ms {
        log::warn!(
            "search budget {}ms is not below the time limit {}ms; agents may time out",
            cli.budget_ms,
            cli.time_limit_ms
        );
    }
    if cli.threads == Some(0) {
        return Err(anyhow!("--threads must be at least 1"));
    }

    let budget = Duration::from_millis(cli.budget_ms);
    let first = AIConfig::new(cli.first, cli.difficulty).with_time_budget(budget);
    let second = AIConfig::new(cli.second, cli.difficulty).with_time_budget(budget);

    let mut config = TournamentConfig::new(first, second)
        .with_games(cli.games)
        .with_time_limit(Duration::from_millis(cli.time_limit_ms))
        .with_seed(cli.seed);
    if let Some(threads) = cli.threads {
        config = config.with_threads(threads);
    }

    let report = run_tournament(&config).context("tournament failed")?;

    if cli.show_board {
        for outcome in &report.outcomes {
            println!(
                "Game {} (A moved {}): {} by {} after {} plies",
                outcome.game + 1,
                if outcome.a_seat == PlayerId::First { "first" } else { "second" },
                outcome.record.result,
                outcome.record.reason,
                outcome.record.final_state.ply_count()
            );
            println!("{}", outcome.record.final_state);
        }
    }

    println!("{}", report);
    Ok(())
}
