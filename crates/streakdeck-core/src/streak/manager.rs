//! Streak manager service.
//!
//! Owns the in-memory copy of the streak record and is the normal write
//! path to the store. Constructed explicitly and handed to whoever needs
//! it; there is no process-wide instance.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use super::data::{StreakData, StreakStatus};
use super::milestone::{self, StreakMilestone};
use crate::error::Result;
use crate::storage::{KvStore, STREAK_STORAGE_KEY};

type Clock = Box<dyn Fn() -> NaiveDate + Send + Sync>;

pub struct StreakManager<S: KvStore> {
    store: Arc<S>,
    clock: Clock,
    state: StreakData,
}

impl<S: KvStore> StreakManager<S> {
    /// Create a manager that uses the local calendar date as "today".
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn new(store: Arc<S>) -> Result<Self> {
        Self::with_clock(store, || Local::now().date_naive())
    }

    /// Create a manager with a custom source for "today".
    pub fn with_clock<F>(store: Arc<S>, clock: F) -> Result<Self>
    where
        F: Fn() -> NaiveDate + Send + Sync + 'static,
    {
        let state = load_record(store.as_ref())?;
        Ok(Self {
            store,
            clock: Box::new(clock),
            state,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Cached streak record. Not refreshed by writes that bypass the manager.
    pub fn current_streak_state(&self) -> &StreakData {
        &self.state
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    pub fn today_already_marked(&self) -> bool {
        self.state.last_active_date == Some(self.today())
    }

    pub fn current_status(&self) -> StreakStatus {
        StreakStatus::for_data(&self.state, self.today())
    }

    pub fn next_milestone(&self) -> Option<&'static StreakMilestone> {
        milestone::next_milestone(self.state.current_streak)
    }

    /// Shared handle to the underlying store.
    pub fn store(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    /// Multi-line human-readable summary of the cached state.
    pub fn detailed_status_summary(&self) -> String {
        let data = &self.state;
        let last_active = data
            .last_active_date
            .map_or_else(|| "never".to_string(), |d| d.format("%Y-%m-%d").to_string());
        let milestone = match self.next_milestone() {
            Some(m) => format!(
                "Next milestone: {} ({} days, {} to go)",
                m.title,
                m.days,
                m.days - data.current_streak
            ),
            None => "All milestones reached".to_string(),
        };

        [
            format!("Current streak: {} days", data.current_streak),
            format!("Longest streak: {} days", data.longest_streak),
            format!("Total active days: {}", data.total_active_days),
            format!("Last active: {last_active}"),
            format!("Status: {}", self.current_status().description()),
            milestone,
        ]
        .join("\n")
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Count today toward the streak.
    ///
    /// The persisted record is re-read first so writes made directly to the
    /// store are picked up. Marking an already-marked day changes nothing.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read or written.
    pub fn mark_today_active(&mut self) -> Result<&StreakData> {
        let today = self.today();
        let mut data = load_record(self.store.as_ref())?;

        if data.record_activity(today) {
            let encoded = serde_json::to_string(&data)?;
            self.store.set(STREAK_STORAGE_KEY, &encoded)?;
            tracing::info!(
                current = data.current_streak,
                longest = data.longest_streak,
                %today,
                "streak advanced"
            );
        } else {
            tracing::debug!(%today, "today already marked");
        }

        self.state = data;
        Ok(&self.state)
    }

    /// Re-read the persisted record into the cache.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn reload(&mut self) -> Result<()> {
        self.state = load_record(self.store.as_ref())?;
        Ok(())
    }
}

/// Read and decode the persisted record. Absent or undecodable records
/// read as an empty streak.
fn load_record<S: KvStore + ?Sized>(store: &S) -> Result<StreakData> {
    let Some(raw) = store.get(STREAK_STORAGE_KEY)? else {
        tracing::debug!("no persisted streak record");
        return Ok(StreakData::default());
    };

    match serde_json::from_str(&raw) {
        Ok(data) => Ok(data),
        Err(e) => {
            tracing::warn!(error = %e, "discarding undecodable streak record");
            Ok(StreakData::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, d).unwrap()
    }

    fn manager_on(store: Arc<MemoryStore>, today: NaiveDate) -> StreakManager<MemoryStore> {
        StreakManager::with_clock(store, move || today).unwrap()
    }

    #[test]
    fn empty_store_starts_fresh() {
        let manager = manager_on(Arc::new(MemoryStore::new()), day(1));
        assert_eq!(manager.current_streak_state(), &StreakData::default());
        assert_eq!(manager.current_status(), StreakStatus::NotStarted);
        assert!(!manager.today_already_marked());
        assert_eq!(manager.next_milestone().map(|m| m.days), Some(3));
    }

    #[test]
    fn mark_today_persists_record() {
        let store = Arc::new(MemoryStore::new());
        let mut manager = manager_on(Arc::clone(&store), day(1));
        manager.mark_today_active().unwrap();

        assert!(manager.today_already_marked());
        let raw = store.get(STREAK_STORAGE_KEY).unwrap().unwrap();
        let stored: StreakData = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored.current_streak, 1);
        assert_eq!(stored.last_active_date, Some(day(1)));
    }

    #[test]
    fn marking_twice_is_idempotent() {
        let store = Arc::new(MemoryStore::new());
        let mut manager = manager_on(store, day(1));
        let first = manager.mark_today_active().unwrap().clone();
        let second = manager.mark_today_active().unwrap().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn undecodable_record_reads_as_empty() {
        let store = Arc::new(MemoryStore::new());
        store.set(STREAK_STORAGE_KEY, "not json").unwrap();
        let manager = manager_on(store, day(1));
        assert_eq!(manager.current_streak_state().current_streak, 0);
    }

    #[test]
    fn summary_mentions_every_field() {
        let store = Arc::new(MemoryStore::new());
        let mut manager = manager_on(store, day(1));
        manager.mark_today_active().unwrap();
        let summary = manager.detailed_status_summary();
        assert!(summary.contains("Current streak: 1 days"));
        assert!(summary.contains("Longest streak: 1 days"));
        assert!(summary.contains("Total active days: 1"));
        assert!(summary.contains("Last active: 2026-05-01"));
        assert!(summary.contains("Status: Today is done"));
        assert!(summary.contains("Next milestone: Warming Up (3 days, 2 to go)"));
    }

    #[test]
    fn summary_for_fresh_record_lists_lines_in_order() {
        let manager = manager_on(Arc::new(MemoryStore::new()), day(1));
        let summary = manager.detailed_status_summary();
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Current streak: 0 days");
        assert_eq!(lines[3], "Last active: never");
        assert!(lines[4].starts_with("Status: "));
        assert_eq!(lines[5], "Next milestone: Warming Up (3 days, 3 to go)");
        assert!(!summary.ends_with('\n'));
    }

    #[test]
    fn summary_when_all_milestones_reached() {
        let store = Arc::new(MemoryStore::new());
        let data = StreakData {
            current_streak: 120,
            longest_streak: 120,
            total_active_days: 130,
            last_active_date: Some(day(1)),
        };
        store
            .set(STREAK_STORAGE_KEY, &serde_json::to_string(&data).unwrap())
            .unwrap();
        let manager = manager_on(store, day(1));
        assert!(manager.next_milestone().is_none());
        assert!(manager.detailed_status_summary().ends_with("All milestones reached"));
    }

    #[test]
    fn reload_picks_up_external_writes() {
        let store = Arc::new(MemoryStore::new());
        let mut manager = manager_on(Arc::clone(&store), day(1));
        manager.mark_today_active().unwrap();
        store.delete(STREAK_STORAGE_KEY).unwrap();
        assert_eq!(manager.current_streak_state().current_streak, 1);
        manager.reload().unwrap();
        assert_eq!(manager.current_streak_state().current_streak, 0);
    }
}
