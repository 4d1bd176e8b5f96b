//! Bounded in-memory score ledger
//!
//! Entries are kept in arrival order; when the ledger is full the oldest
//! arrival is evicted before the new entry lands, so the count never exceeds
//! the capacity. Arrival order may diverge from timestamp order under
//! concurrent inserts, which is accepted for a pure FIFO.

use std::collections::VecDeque;

use tokio::sync::RwLock;
use tracing::debug;

use shared::ScoreEntry;

/// Fixed retention bound of the reference deployment
pub const DEFAULT_CAPACITY: usize = 10;

/// Thread-safe append-only store of recent round outcomes.
///
/// The write lock is held only for a push/pop pair; readers share the read
/// lock, so concurrent `recent` calls never serialize each other.
#[derive(Debug)]
pub struct ScoreLedger {
    entries: RwLock<VecDeque<ScoreEntry>>,
    capacity: usize,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "ledger capacity must be positive");
        ScoreLedger {
            entries: RwLock::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Append an entry, evicting the oldest arrival when at capacity
    pub async fn record(&self, entry: ScoreEntry) {
        let mut entries = self.entries.write().await;
        if entries.len() >= self.capacity {
            let evicted = entries.pop_front();
            debug!(user_id = ?evicted.map(|e| e.user_id), "Evicted oldest ledger entry");
        }
        entries.push_back(entry);
    }

    /// Up to `limit` entries, most-recent-first; does not mutate the ledger
    pub async fn recent(&self, limit: usize) -> Vec<ScoreEntry> {
        let entries = self.entries.read().await;
        entries.iter().rev().take(limit).cloned().collect()
    }

    /// Administrative reset, clears all entries
    pub async fn reset(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for ScoreLedger {
    fn default() -> Self {
        ScoreLedger::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;
    use shared::{Choice, Outcome};

    use super::*;

    fn entry_for(user_id: &str) -> ScoreEntry {
        ScoreEntry {
            user_id: user_id.to_string(),
            player_choice: Choice::Rock,
            computer_choice: Choice::Scissors,
            result: Outcome::PlayerWins,
            timestamp: Utc::now(),
        }
    }

    #[tokio::test]
    async fn never_exceeds_capacity() {
        let ledger = ScoreLedger::new();
        for i in 0..25 {
            ledger.record(entry_for(&format!("user-{i}"))).await;
        }
        assert_eq!(ledger.len().await, DEFAULT_CAPACITY);
    }

    #[tokio::test]
    async fn recent_returns_most_recent_first() {
        let ledger = ScoreLedger::new();
        for i in 0..15 {
            ledger.record(entry_for(&format!("user-{i}"))).await;
        }

        let recent = ledger.recent(10).await;
        assert_eq!(recent.len(), 10);
        // Entries 14 down to 5 survive, newest first
        for (offset, entry) in recent.iter().enumerate() {
            assert_eq!(entry.user_id, format!("user-{}", 14 - offset));
        }
    }

    #[tokio::test]
    async fn recent_honors_limit_and_does_not_mutate() {
        let ledger = ScoreLedger::new();
        for i in 0..5 {
            ledger.record(entry_for(&format!("user-{i}"))).await;
        }

        let top_three = ledger.recent(3).await;
        assert_eq!(top_three.len(), 3);
        assert_eq!(top_three[0].user_id, "user-4");
        assert_eq!(ledger.len().await, 5);
    }

    #[tokio::test]
    async fn reset_clears_all_entries() {
        let ledger = ScoreLedger::new();
        ledger.record(entry_for("user")).await;
        assert!(!ledger.is_empty().await);

        ledger.reset().await;
        assert!(ledger.is_empty().await);
        assert!(ledger.recent(10).await.is_empty());
    }

    #[tokio::test]
    async fn concurrent_inserts_respect_the_bound() {
        let ledger = Arc::new(ScoreLedger::new());

        let mut handles = Vec::new();
        for i in 0..100 {
            let ledger = Arc::clone(&ledger);
            handles.push(tokio::spawn(async move {
                ledger.record(entry_for(&format!("user-{i}"))).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(ledger.len().await, DEFAULT_CAPACITY);
        let recent = ledger.recent(10).await;
        assert_eq!(recent.len(), 10);
        for entry in recent {
            assert!(entry.user_id.starts_with("user-"));
        }
    }
}
