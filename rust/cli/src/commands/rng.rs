//! Random number generator verification command.
//!
//! Shows a few raw ChaCha20 outputs and the top of the deck the same seed
//! shuffles, so a seed quoted in a round log can be checked by hand.

use crate::error::CliError;
use crate::formatters::format_hand;
use drawpoker_engine::deck::Deck;
use drawpoker_engine::session::HAND_SIZE;
use rand::{RngCore, SeedableRng};
use std::io::Write;

/// Handle the rng command.
///
/// # Example
///
/// ```ignore
/// # use drawpoker_cli::commands::handle_rng_command;
/// let mut out = std::io::stdout();
/// handle_rng_command(Some(12345), &mut out)?;
/// ```
pub fn handle_rng_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let s = seed.unwrap_or_else(rand::random);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(s);
    let vals: Vec<u64> = (0..5).map(|_| rng.next_u64()).collect();
    writeln!(out, "Seed: {}", s)?;
    writeln!(out, "RNG sample: {:?}", vals)?;

    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(s);
    let mut deck = Deck::new_shuffled(&mut rng)?;
    let top = deck.draw(HAND_SIZE)?;
    writeln!(out, "Top of deck: {}", format_hand(&top, &[]))?;
    Ok(())
}
