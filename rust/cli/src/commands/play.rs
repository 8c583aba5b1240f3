//! # Play Command
//!
//! Interactive draw poker over stdin/stdout. This is the presentation adapter:
//! it turns typed intents into session commands and renders the snapshot the
//! session hands back. All game rules stay in the engine.
//!
//! ## Features
//!
//! - Bet changes between rounds (`+` / `-`)
//! - Deal, toggle holds by slot number, draw
//! - Optional reveal delay after a deal, applied after the engine has finished
//! - Optional JSONL round log
//! - Graceful quit on `q` or end of input

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_snapshot, format_state};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{Intent, ParseResult, parse_intent};
use drawpoker_engine::errors::GameError;
use drawpoker_engine::logger::{RoundLogger, RoundRecord};
use drawpoker_engine::session::{GameState, Session, SessionConfig};
use rand_chacha::ChaCha20Rng;
use std::io::{BufRead, Write};
use std::time::Duration;

/// Flags of the play command; unset values fall back to [`Config`].
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub credits: Option<u32>,
    pub seed: Option<u64>,
    pub log: Option<String>,
    pub reveal_ms: u64,
}

/// Handle the play command: interactive session until quit or end of input.
///
/// # Errors
///
/// `CliError::InvalidInput` for zero starting credits, `CliError::Io` for stream
/// or log failures, `CliError::Engine` only for engine invariant faults. Ordinary
/// game conditions (not enough credits, wrong phase) are reported and play goes on.
///
/// # Examples
///
/// ```ignore
/// use drawpoker_cli::commands::{handle_play_command, PlayOptions};
/// use std::io::Cursor;
///
/// let mut input = Cursor::new(b"deal\nhold 1 2\ndraw\nq\n");
/// handle_play_command(PlayOptions::default(), &Config::default(), &mut out, &mut err, &mut input)?;
/// ```
pub fn handle_play_command(
    opts: PlayOptions,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let credits = opts.credits.unwrap_or(config.starting_credits);
    if credits == 0 {
        ui::write_error(err, "credits must be >= 1")?;
        return Err(CliError::InvalidInput("credits must be >= 1".to_string()));
    }
    let seed = opts.seed.or(config.seed).unwrap_or_else(rand::random);

    let mut logger = match &opts.log {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    writeln!(
        out,
        "play: credits={} bet={} seed={}",
        credits, config.bet, seed
    )?;
    let mut table = Table {
        session: Session::from_seed(
            SessionConfig {
                credits,
                bet: config.bet,
            },
            seed,
        ),
        logger: logger.as_mut(),
        seed,
        reveal: Duration::from_millis(opts.reveal_ms),
    };
    writeln!(out, "{}", format_snapshot(&table.session.snapshot()))?;

    loop {
        write!(out, "{}", prompt(table.session.state()))?;
        out.flush()?;
        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            break;
        };
        match parse_intent(&line) {
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            ParseResult::Intent(intent) => table.apply(intent, out, err)?,
        }
    }

    let stats = table.session.stats();
    writeln!(out, "Rounds played: {}", stats.rounds)?;
    writeln!(out, "Final credits: {}", table.session.credits())?;
    Ok(())
}

fn prompt(state: GameState) -> String {
    let hint = match state {
        GameState::Betting => "+/- bet, deal, q",
        GameState::Drawing => "hold N.., draw, q",
    };
    format!("[{}] {} > ", format_state(state), hint)
}

/// Session plus the adapter-side resources that go with it.
struct Table<'a> {
    session: Session<ChaCha20Rng>,
    logger: Option<&'a mut RoundLogger>,
    seed: u64,
    reveal: Duration,
}

impl Table<'_> {
    fn apply(
        &mut self,
        intent: Intent,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<(), CliError> {
        match intent {
            Intent::BetUp => self.change_bet(1, out)?,
            Intent::BetDown => self.change_bet(-1, out)?,
            Intent::Deal => match self.session.deal() {
                Ok(snap) => {
                    if !self.reveal.is_zero() {
                        std::thread::sleep(self.reveal);
                    }
                    writeln!(out, "{}", format_snapshot(&snap))?;
                }
                Err(e) => report(e, out, err)?,
            },
            Intent::Hold(slots) => {
                for slot in slots {
                    if let Err(e) = self.session.toggle_hold(slot) {
                        report(e, out, err)?;
                        return Ok(());
                    }
                }
                writeln!(out, "{}", format_snapshot(&self.session.snapshot()))?;
            }
            Intent::Draw => match self.session.draw() {
                Ok(outcome) => {
                    ui::write_message(out, &format!("{}!", outcome.result.rank))?;
                    writeln!(out, "{}", format_snapshot(&outcome.snapshot))?;
                    if let Some(logger) = self.logger.as_deref_mut() {
                        let record =
                            RoundRecord::from_outcome(logger.next_id(), Some(self.seed), &outcome);
                        logger.write(&record)?;
                    }
                }
                Err(e) => report(e, out, err)?,
            },
        }
        Ok(())
    }

    fn change_bet(&mut self, delta: i32, out: &mut dyn Write) -> Result<(), CliError> {
        let before = self.session.bet();
        let snap = self.session.adjust_bet(delta);
        if snap.state != GameState::Betting {
            ui::write_message(out, "Bet can only change between rounds")?;
        } else if snap.bet == before {
            ui::write_message(out, "Bet must stay between 1 and 5")?;
        }
        writeln!(out, "{}", format_snapshot(&snap))?;
        Ok(())
    }
}

/// Player-facing conditions are shown and play continues; engine faults abort.
fn report(e: GameError, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    match e {
        GameError::InsufficientCredits { .. } => {
            ui::write_message(out, "Not enough credits!")?;
            Ok(())
        }
        GameError::WrongState { expected, .. } => {
            let msg = match expected {
                GameState::Betting => "Finish the hand with draw first",
                GameState::Drawing => "Deal a hand first",
            };
            ui::write_error(err, msg)?;
            Ok(())
        }
        e if !e.is_invariant_violation() => {
            ui::write_error(err, &e.to_string())?;
            Ok(())
        }
        e => {
            tracing::error!(error = %e, "engine invariant violated");
            Err(e.into())
        }
    }
}
