//! Deal command: one hand off a fresh shuffle, no draw.
//!
//! Useful for checking what a seed deals before playing it.

use crate::error::CliError;
use crate::formatters::{format_hand, format_rank_payout};
use drawpoker_engine::hand::evaluate;
use drawpoker_engine::session::{Session, SessionConfig};
use std::io::Write;

pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut session = Session::from_seed(SessionConfig::default(), seed);
    let snap = session.deal()?;
    let Some(hand) = snap.hand else {
        return Err(CliError::InvalidInput("no hand was dealt".to_string()));
    };
    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Hand: {}", format_hand(&hand, &[]))?;
    writeln!(out, "Evaluation: {}", format_rank_payout(evaluate(&hand)))?;
    Ok(())
}
