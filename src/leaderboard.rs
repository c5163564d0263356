//! Leaderboard: one best record per username
//!
//! Persisted as a JSON array under the `leaderboard` collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::persistence::{LEADERBOARD, Store, StoreError};

/// A single leaderboard entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub username: String,
    pub score: u64,
    /// Seconds of game time when the score was reached
    #[serde(default)]
    pub time: f32,
    /// When the record was saved
    pub date: DateTime<Utc>,
}

impl ScoreRecord {
    pub fn new(username: impl Into<String>, score: u64, time: f32, date: DateTime<Utc>) -> Self {
        Self {
            username: username.into(),
            score,
            time,
            date,
        }
    }

    /// Strictly higher score, or the same score in strictly less time
    pub fn beats(&self, other: &ScoreRecord) -> bool {
        self.score > other.score || (self.score == other.score && self.time < other.time)
    }
}

/// Best score per user, backed by an injected store
#[derive(Debug, Clone)]
pub struct Leaderboard<S: Store> {
    store: S,
}

impl<S: Store> Leaderboard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All records as stored. Unreadable or malformed data loads as empty;
    /// individually malformed entries are skipped.
    pub fn load(&self) -> Vec<ScoreRecord> {
        let raw = match self.store.get(LEADERBOARD) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("Could not read leaderboard: {e}");
                return Vec::new();
            }
        };

        let entries = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Leaderboard is not a JSON array ({e}), starting fresh");
                return Vec::new();
            }
        };

        entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<ScoreRecord>(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("Skipping malformed leaderboard entry: {e}");
                    None
                }
            })
            .collect()
    }

    /// Best stored record for a user
    pub fn best_for(&self, username: &str) -> Option<ScoreRecord> {
        best_of(self.load().into_iter().filter(|r| r.username == username))
    }

    /// Insert the record, or replace the user's existing one if the new
    /// record beats it. Returns whether anything was written.
    pub fn upsert_if_better(&mut self, record: ScoreRecord) -> Result<bool, StoreError> {
        let mut records = self.load();

        let mine = records.iter().filter(|r| r.username == record.username).cloned();
        if let Some(existing) = best_of(mine)
            && !record.beats(&existing)
        {
            return Ok(false);
        }

        log::debug!(
            "Leaderboard: {} -> {} ({:.1}s)",
            record.username,
            record.score,
            record.time
        );
        records.retain(|r| r.username != record.username);
        records.push(record);

        let json = serde_json::to_string(&records)?;
        self.store.set(LEADERBOARD, &json)?;
        Ok(true)
    }

    /// Records sorted best first: score descending, then time ascending,
    /// then oldest first
    pub fn ranked(&self) -> Vec<ScoreRecord> {
        let mut records = self.load();
        records.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then(a.time.total_cmp(&b.time))
                .then(a.date.cmp(&b.date))
        });
        records
    }

    /// The first `n` ranked records
    pub fn top(&self, n: usize) -> Vec<ScoreRecord> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

fn best_of(records: impl Iterator<Item = ScoreRecord>) -> Option<ScoreRecord> {
    records.fold(None, |best, r| match best {
        Some(b) if !r.beats(&b) => Some(b),
        _ => Some(r),
    })
}
