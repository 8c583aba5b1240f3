//! # Stats Command
//!
//! Aggregates round logs written by `play --log` or `sim --output`.
//! Accepts a single `.jsonl` / `.jsonl.zst` file or a directory of them.
//! Every record's payout is checked against the pay table; a mismatch is an
//! integrity failure.

use crate::error::CliError;
use crate::formatters::format_rank_payout;
use crate::io_utils::{collect_round_logs, read_text_auto};
use crate::ui;
use drawpoker_engine::hand::{HandRank, PAY_TABLE};
use drawpoker_engine::logger::RoundRecord;
use drawpoker_engine::session::{MAX_BET, MIN_BET, RoundResult, SessionStats};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Default)]
struct StatsState {
    totals: SessionStats,
    corrupted: u64,
    mismatches: u64,
}

/// Why a record disagrees with the table limits or the pay schedule, if it does.
fn check_record(rec: &RoundRecord) -> Option<String> {
    if !(MIN_BET..=MAX_BET).contains(&rec.bet) {
        return Some(format!(
            "Round {}: bet {} outside {}..={}",
            rec.round_id, rec.bet, MIN_BET, MAX_BET
        ));
    }
    let expected = u64::from(rec.rank.multiplier()) * u64::from(rec.bet);
    if u64::from(rec.amount_won) != expected {
        return Some(format!(
            "Round {}: {} at bet {} paid {}, expected {}",
            rec.round_id,
            rec.rank.name(),
            rec.bet,
            rec.amount_won,
            expected
        ));
    }
    None
}

/// Handle the stats command.
///
/// Unparsable lines are skipped and counted. Payout mismatches are reported
/// per record and fail the command after the summary is printed.
pub fn handle_stats_command(
    input: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let files = match collect_round_logs(Path::new(input)) {
        Ok(files) => files,
        Err(msg) => {
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        }
    };

    let mut state = StatsState::default();
    for file in &files {
        let content = match read_text_auto(file) {
            Ok(c) => c,
            Err(msg) => {
                ui::write_error(err, &format!("Failed to read {}: {}", file.display(), msg))?;
                return Err(CliError::InvalidInput(msg));
            }
        };
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let rec: RoundRecord = crate::parse_json_or_continue!(line, state.corrupted);
            if let Some(msg) = check_record(&rec) {
                ui::write_error(err, &msg)?;
                state.mismatches += 1;
            }
            state.totals.record(
                rec.bet,
                RoundResult {
                    rank: rec.rank,
                    amount_won: rec.amount_won,
                },
            );
        }
    }

    if state.corrupted > 0 {
        ui::display_warning(
            err,
            &format!("Skipped {} corrupted record(s)", state.corrupted),
        )?;
    }

    writeln!(out, "Files: {}", files.len())?;
    let totals = &state.totals;
    writeln!(out, "Rounds: {}", totals.rounds)?;
    writeln!(out, "Wagered: {}", totals.wagered)?;
    writeln!(out, "Won: {}", totals.won)?;
    writeln!(out, "Net: {}", totals.won as i64 - totals.wagered as i64)?;
    writeln!(out, "RTP: {:.2}%", totals.rtp())?;
    for rank in PAY_TABLE {
        if let Some(count) = totals.by_rank.get(&rank) {
            writeln!(out, "  {:<22} {}", format_rank_payout(rank), count)?;
        }
    }
    if let Some(count) = totals.by_rank.get(&HandRank::NoWin) {
        writeln!(out, "  {:<22} {}", HandRank::NoWin.name(), count)?;
    }

    if state.mismatches > 0 {
        return Err(CliError::Integrity(format!(
            "{} record(s) not matching the table limits or pay schedule",
            state.mismatches
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: u32, bet: u32, rank: &str, won: u32) -> String {
        format!(
            concat!(
                r#"{{"round_id":"20250101-{:06}","seed":1,"bet":{},"#,
                r#""dealt":[{{"suit":"Spades","rank":"Ace"}},{{"suit":"Hearts","rank":"Ace"}},"#,
                r#"{{"suit":"Clubs","rank":"Two"}},{{"suit":"Clubs","rank":"Five"}},{{"suit":"Diamonds","rank":"Nine"}}],"#,
                r#""held":[0,1],"#,
                r#""final_hand":[{{"suit":"Spades","rank":"Ace"}},{{"suit":"Hearts","rank":"Ace"}},"#,
                r#"{{"suit":"Clubs","rank":"Two"}},{{"suit":"Clubs","rank":"Five"}},{{"suit":"Diamonds","rank":"Nine"}}],"#,
                r#""rank":"{}","amount_won":{},"credits_after":100}}"#
            ),
            id, bet, rank, won
        )
    }

    fn stats(content: &str) -> (Result<(), CliError>, String, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rounds.jsonl");
        std::fs::write(&path, content).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let r = handle_stats_command(path.to_str().unwrap(), &mut out, &mut err);
        (
            r,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn aggregates_valid_records() {
        let content = format!(
            "{}\n{}\n",
            line(1, 2, "JacksOrBetter", 2),
            line(2, 1, "NoWin", 0)
        );
        let (r, out, err) = stats(&content);
        assert!(r.is_ok(), "{err}");
        assert!(out.contains("Rounds: 2"));
        assert!(out.contains("Wagered: 3"));
        assert!(out.contains("Won: 2"));
        assert!(out.contains("Net: -1"));
        assert!(out.contains("Jacks or Better (x1)"));
    }

    #[test]
    fn counts_corrupted_lines() {
        let content = format!("{}\nnot json\n{{\"round_id\":1}}\n", line(1, 1, "NoWin", 0));
        let (r, out, err) = stats(&content);
        assert!(r.is_ok());
        assert!(out.contains("Rounds: 1"));
        assert!(err.contains("Skipped 2 corrupted record(s)"));
    }

    #[test]
    fn payout_mismatch_fails_integrity() {
        let content = format!("{}\n", line(7, 3, "TwoPair", 3));
        let (r, out, err) = stats(&content);
        assert!(matches!(r, Err(CliError::Integrity(_))));
        assert!(err.contains("20250101-000007"));
        assert!(err.contains("expected 6"));
        assert!(out.contains("Rounds: 1"));
    }

    #[test]
    fn reports_return_as_percentage() {
        let content = format!(
            "{}\n{}\n",
            line(1, 2, "TwoPair", 4),
            line(2, 2, "NoWin", 0)
        );
        let (r, out, _) = stats(&content);
        assert!(r.is_ok());
        assert!(out.contains("RTP: 100.00%"), "{out}");
    }

    #[test]
    fn bet_outside_table_limits_fails_integrity() {
        let content = format!("{}\n", line(3, 10_000_000, "RoyalFlush", 0));
        let (r, _, err) = stats(&content);
        assert!(matches!(r, Err(CliError::Integrity(_))));
        assert!(err.contains("bet 10000000 outside 1..=5"));

        let content = format!("{}\n", line(4, 0, "NoWin", 0));
        let (r, _, _) = stats(&content);
        assert!(matches!(r, Err(CliError::Integrity(_))));
    }

    #[test]
    fn extreme_values_are_rejected_without_panicking() {
        let rec: RoundRecord =
            serde_json::from_str(&line(5, u32::MAX, "RoyalFlush", u32::MAX)).unwrap();
        let msg = check_record(&rec).unwrap();
        assert!(msg.contains("outside"));
    }

    #[test]
    fn missing_input_is_invalid() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let r = handle_stats_command("/definitely/not/here", &mut out, &mut err);
        assert!(matches!(r, Err(CliError::InvalidInput(_))));
    }
}
