//! # Sim Command
//!
//! Plays rounds unattended with a hold policy and reports the return to player.
//! The policy only picks holds; every deal, draw and payout goes through the
//! same session the interactive command uses.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::format_rank_payout;
use crate::ui;
use drawpoker_ai::create_policy;
use drawpoker_engine::hand::PAY_TABLE;
use drawpoker_engine::logger::{RoundLogger, RoundRecord};
use drawpoker_engine::session::{MAX_BET, MIN_BET, Session, SessionConfig};
use std::io::Write;

/// Flags of the sim command; unset values fall back to [`Config`].
#[derive(Debug, Clone, Default)]
pub struct SimOptions {
    pub rounds: u32,
    pub policy: Option<String>,
    pub bet: Option<u32>,
    pub credits: Option<u32>,
    pub seed: Option<u64>,
    pub output: Option<String>,
}

/// Handle the sim command.
///
/// Stops early, with a warning, once the bankroll can no longer cover the bet.
///
/// # Errors
///
/// `CliError::InvalidInput` for zero rounds, zero credits, a bet outside the
/// table limits or an unknown policy; `CliError::Io` for output failures.
pub fn handle_sim_command(
    opts: SimOptions,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let credits = opts.credits.unwrap_or(config.starting_credits);
    if credits == 0 {
        ui::write_error(err, "credits must be >= 1")?;
        return Err(CliError::InvalidInput("credits must be >= 1".to_string()));
    }
    let bet = opts.bet.unwrap_or(config.bet);
    if !(MIN_BET..=MAX_BET).contains(&bet) {
        let msg = format!("bet must be between {} and {}", MIN_BET, MAX_BET);
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }
    let policy_name = opts.policy.as_deref().unwrap_or(&config.policy);
    let policy = match create_policy(policy_name) {
        Ok(p) => p,
        Err(msg) => {
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        }
    };
    let seed = opts.seed.or(config.seed).unwrap_or_else(rand::random);

    let mut logger = match &opts.output {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    let mut session = Session::from_seed(SessionConfig { credits, bet }, seed);
    tracing::info!(rounds = opts.rounds, policy = policy.name(), seed, "simulation started");

    let mut played = 0u32;
    for _ in 0..opts.rounds {
        if !session.can_deal() {
            ui::display_warning(
                err,
                &format!(
                    "Bankroll exhausted after {} rounds ({} credits left)",
                    played,
                    session.credits()
                ),
            )?;
            break;
        }
        session.deal()?;
        let Some(hand) = session.hand().copied() else {
            break;
        };
        for slot in policy.choose_holds(&hand).indices() {
            session.toggle_hold(slot)?;
        }
        let outcome = session.draw()?;
        if let Some(logger) = logger.as_mut() {
            let record = RoundRecord::from_outcome(logger.next_id(), Some(seed), &outcome);
            logger.write(&record)?;
        }
        played += 1;
    }

    let stats = session.stats();
    writeln!(
        out,
        "sim: policy={} bet={} seed={}",
        policy.name(),
        bet,
        seed
    )?;
    writeln!(out, "Rounds: {}/{}", stats.rounds, opts.rounds)?;
    writeln!(out, "Wagered: {}", stats.wagered)?;
    writeln!(out, "Won: {}", stats.won)?;
    writeln!(out, "Final credits: {}", session.credits())?;
    writeln!(out, "RTP: {:.2}%", stats.rtp())?;
    for rank in PAY_TABLE {
        let count = stats.by_rank.get(&rank).copied().unwrap_or(0);
        if count > 0 {
            writeln!(out, "  {:<22} {}", format_rank_payout(rank), count)?;
        }
    }
    Ok(())
}
