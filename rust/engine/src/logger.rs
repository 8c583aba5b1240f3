use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::HandRank;
use crate::session::{DrawOutcome, HAND_SIZE};

/// One settled round, serialized as a single JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Identifier of the form YYYYMMDD-NNNNNN
    pub round_id: String,
    /// Session seed, when the session was seeded
    pub seed: Option<u64>,
    pub bet: u32,
    pub dealt: [Card; HAND_SIZE],
    pub held: Vec<usize>,
    pub final_hand: [Card; HAND_SIZE],
    pub rank: HandRank,
    pub amount_won: u32,
    pub credits_after: u32,
    /// RFC3339 timestamp, filled in by [`RoundLogger::write`] when absent
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    pub fn from_outcome(round_id: String, seed: Option<u64>, outcome: &DrawOutcome) -> Self {
        Self {
            round_id,
            seed,
            bet: outcome.bet,
            dealt: outcome.dealt,
            held: outcome.held.clone(),
            final_hand: outcome.final_hand,
            rank: outcome.result.rank,
            amount_won: outcome.result.amount_won,
            credits_after: outcome.snapshot.credits,
            ts: None,
        }
    }

    /// Net credit change of the round.
    pub fn net(&self) -> i64 {
        i64::from(self.amount_won) - i64::from(self.bet)
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger that only hands out ids; writes are discarded.
    pub fn in_memory(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
