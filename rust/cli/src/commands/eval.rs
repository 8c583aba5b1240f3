//! Eval command: rank a hand given as text.

use crate::error::CliError;
use crate::formatters::{format_hand, format_rank_payout};
use crate::ui;
use crate::validation::parse_hand;
use drawpoker_engine::hand::evaluate;
use std::io::Write;

/// Handle the eval command.
///
/// `cards` is five distinct codes separated by spaces or commas, e.g.
/// `"As Ks Qs Js Ts"`.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` when the hand cannot be parsed.
pub fn handle_eval_command(
    cards: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let hand = match parse_hand(cards) {
        Ok(h) => h,
        Err(msg) => {
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        }
    };
    let rank = evaluate(&hand);
    writeln!(out, "Hand: {}", format_hand(&hand, &[]))?;
    writeln!(out, "Rank: {}", format_rank_payout(rank))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(cards: &str) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let r = handle_eval_command(cards, &mut out, &mut err);
        (
            r,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn ranks_royal_flush() {
        let (r, out, _) = eval("As Ks Qs Js Ts");
        assert!(r.is_ok());
        assert!(out.contains("Rank: Royal Flush (x800)"));
    }

    #[test]
    fn ranks_low_pair_as_no_win() {
        let (_, out, _) = eval("Td,Th,2c,5s,8d");
        assert!(out.contains("Rank: No Win (x0)"));
    }

    #[test]
    fn rejects_duplicates_and_bad_codes() {
        let (r, _, err) = eval("As As Kd Qh Jc");
        assert!(matches!(r, Err(CliError::InvalidInput(_))));
        assert!(err.starts_with("Error: "));

        let (r, _, _) = eval("As Kd Qh");
        assert!(matches!(r, Err(CliError::InvalidInput(_))));
    }
}
