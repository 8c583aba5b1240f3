//! Command-line surface of the `drawpoker` binary.

use clap::{Parser, Subcommand};
use drawpoker_engine::session::{MAX_BET, MIN_BET};

#[derive(Parser, Debug)]
#[command(
    name = "drawpoker",
    version,
    about = "Jacks-or-Better draw poker in the terminal"
)]
pub struct DrawPokerCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

fn parse_bet(s: &str) -> Result<u32, String> {
    let bet: u32 = s.parse().map_err(|_| format!("not a number: {}", s))?;
    if (MIN_BET..=MAX_BET).contains(&bet) {
        Ok(bet)
    } else {
        Err(format!("bet must be between {} and {}", MIN_BET, MAX_BET))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactively: bet, deal, hold, draw
    Play {
        /// Starting credits (default from configuration)
        #[arg(long)]
        credits: Option<u32>,
        /// RNG seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
        /// Append settled rounds to this JSONL file
        #[arg(long)]
        log: Option<String>,
        /// Pause before revealing a freshly dealt hand
        #[arg(long, default_value_t = 0)]
        reveal_ms: u64,
    },
    /// Auto-play rounds with a hold policy and report the return
    Sim {
        #[arg(long)]
        rounds: u32,
        /// Hold policy (baseline, hold_none)
        #[arg(long)]
        policy: Option<String>,
        #[arg(long, value_parser = parse_bet)]
        bet: Option<u32>,
        #[arg(long)]
        credits: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Write every round to this JSONL file
        #[arg(long)]
        output: Option<String>,
    },
    /// Aggregate a JSONL round log (file or directory)
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Classify five cards, e.g. --cards "As Ks Qs Js Ts"
    Eval {
        #[arg(long)]
        cards: String,
    },
    /// Shuffle and show a single five-card hand
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the pay schedule
    Paytable,
    /// Show the resolved configuration and where each value came from
    Cfg,
    /// Print a sample from the seeded RNG
    Rng {
        #[arg(long)]
        seed: Option<u64>,
    },
}
