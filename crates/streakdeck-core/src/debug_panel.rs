//! Debug control panel for the streak feature.
//!
//! Wires manual test actions to a [`StreakManager`] and renders its state.
//! Two actions deliberately write to the store behind the manager's back:
//! reset deletes the record without touching the manager's cache, and
//! "simulate yesterday" overwrites the record before asking the manager to
//! mark today.
//!
//! Every action replaces the panel's alert; nothing here is persisted.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;
use crate::storage::{KvStore, STREAK_STORAGE_KEY};
use crate::streak::{StreakData, StreakManager, MILESTONES};

pub const MARKED_ACTIVE_MESSAGE: &str = "Today has been marked as active.";
pub const FOCUS_SESSION_MESSAGE: &str = "Simulated a completed focus session. Today is marked as active.";
pub const TASK_COMPLETION_MESSAGE: &str = "Simulated a completed task. Today is marked as active.";
pub const RESET_MESSAGE: &str = "All streak data deleted. Restart the app to reload state.";
pub const YESTERDAY_MESSAGE: &str = "Simulated activity yesterday, then marked today as active.";

pub struct DebugPanel<'a, S: KvStore> {
    manager: &'a mut StreakManager<S>,
    store: Arc<S>,
    showing_alert: bool,
    alert_message: String,
    confirming_reset: bool,
}

impl<'a, S: KvStore> DebugPanel<'a, S> {
    /// Bypass writes go to the manager's own store.
    pub fn new(manager: &'a mut StreakManager<S>) -> Self {
        let store = manager.store();
        Self {
            manager,
            store,
            showing_alert: false,
            alert_message: String::new(),
            confirming_reset: false,
        }
    }

    /// Message currently on screen, if any.
    pub fn alert(&self) -> Option<&str> {
        self.showing_alert.then_some(self.alert_message.as_str())
    }

    pub fn dismiss_alert(&mut self) {
        self.showing_alert = false;
        self.alert_message.clear();
    }

    pub fn is_confirming_reset(&self) -> bool {
        self.confirming_reset
    }

    fn show(&mut self, message: impl Into<String>) -> &str {
        self.alert_message = message.into();
        self.showing_alert = true;
        &self.alert_message
    }

    // ── Actions ──────────────────────────────────────────────────────

    pub fn mark_today_active(&mut self) -> Result<&str> {
        self.dismiss_alert();
        self.manager.mark_today_active()?;
        tracing::info!("debug: marked today active");
        Ok(self.show(MARKED_ACTIVE_MESSAGE))
    }

    pub fn view_detailed_status(&mut self) -> Result<&str> {
        self.dismiss_alert();
        let summary = self.manager.detailed_status_summary();
        Ok(self.show(summary))
    }

    /// Stands in for the focus timer reporting a finished session.
    pub fn simulate_focus_session(&mut self) -> Result<&str> {
        self.dismiss_alert();
        self.manager.mark_today_active()?;
        tracing::info!("debug: simulated focus session");
        Ok(self.show(FOCUS_SESSION_MESSAGE))
    }

    /// Stands in for the task list reporting a completed task.
    pub fn simulate_task_completion(&mut self) -> Result<&str> {
        self.dismiss_alert();
        self.manager.mark_today_active()?;
        tracing::info!("debug: simulated task completion");
        Ok(self.show(TASK_COMPLETION_MESSAGE))
    }

    /// First step of the destructive reset; nothing is deleted yet.
    pub fn request_reset(&mut self) {
        self.dismiss_alert();
        self.confirming_reset = true;
    }

    pub fn cancel_reset(&mut self) {
        self.confirming_reset = false;
    }

    /// Delete the persisted streak record.
    ///
    /// Does nothing and returns `None` unless [`request_reset`](Self::request_reset)
    /// was called first. The manager's cached state is left as is; it stays
    /// stale until the app restarts.
    pub fn confirm_reset(&mut self) -> Result<Option<&str>> {
        if !self.confirming_reset {
            return Ok(None);
        }
        self.confirming_reset = false;
        self.dismiss_alert();

        self.store.delete(STREAK_STORAGE_KEY)?;
        tracing::info!(key = STREAK_STORAGE_KEY, "debug: deleted streak record");
        Ok(Some(self.show(RESET_MESSAGE)))
    }

    /// Pretend the user was active yesterday, then mark today.
    ///
    /// Writes a copy of the current record with `last_active_date` set to
    /// yesterday and `current_streak` of at least 1 straight to the store,
    /// then lets the manager advance it. If the copy cannot be encoded the
    /// write is skipped and only the mark happens.
    pub fn simulate_yesterday_active(&mut self) -> Result<&str> {
        self.simulate_yesterday_with(encode_record)
    }

    fn simulate_yesterday_with<E>(&mut self, encode: E) -> Result<&str>
    where
        E: FnOnce(&StreakData) -> serde_json::Result<String>,
    {
        self.dismiss_alert();

        if let Some(record) = self.yesterday_record() {
            match encode(&record) {
                Ok(encoded) => {
                    self.store.set(STREAK_STORAGE_KEY, &encoded)?;
                    tracing::info!(
                        current = record.current_streak,
                        "debug: wrote synthetic yesterday record"
                    );
                }
                Err(e) => tracing::warn!(error = %e, "debug: skipping synthetic record write"),
            }
        }

        self.manager.mark_today_active()?;
        Ok(self.show(YESTERDAY_MESSAGE))
    }

    fn yesterday_record(&self) -> Option<StreakData> {
        let yesterday = self.manager.today().pred_opt()?;
        let mut record = self.manager.current_streak_state().clone();
        record.last_active_date = Some(yesterday);
        record.current_streak = record.current_streak.max(1);
        Some(record)
    }

    // ── Rendering ────────────────────────────────────────────────────

    pub fn view(&self) -> DebugPanelView {
        let data = self.manager.current_streak_state();
        let next = self.manager.next_milestone();
        DebugPanelView {
            current_streak: data.current_streak,
            longest_streak: data.longest_streak,
            total_active_days: data.total_active_days,
            today_marked: self.manager.today_already_marked(),
            status: self.manager.current_status().description().to_string(),
            next_milestone: next.map(|m| NextMilestone {
                title: m.title.to_string(),
                days: m.days,
            }),
            all_milestones_reached: next.is_none(),
            milestones: MILESTONES
                .iter()
                .map(|m| MilestoneRow {
                    reached: m.is_reached(data.current_streak),
                    title: m.title.to_string(),
                    days: m.days,
                    reward_points: m.reward_points,
                })
                .collect(),
        }
    }
}

fn encode_record(record: &StreakData) -> serde_json::Result<String> {
    serde_json::to_string(record)
}

/// Snapshot of everything the panel displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebugPanelView {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_active_days: u32,
    pub today_marked: bool,
    pub status: String,
    pub next_milestone: Option<NextMilestone>,
    pub all_milestones_reached: bool,
    pub milestones: Vec<MilestoneRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NextMilestone {
    pub title: String,
    pub days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MilestoneRow {
    pub reached: bool,
    pub title: String,
    pub days: u32,
    pub reward_points: u32,
}

impl fmt::Display for DebugPanelView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Streak debug ==")?;
        writeln!(f, "Current streak:    {}", self.current_streak)?;
        writeln!(f, "Longest streak:    {}", self.longest_streak)?;
        writeln!(f, "Total active days: {}", self.total_active_days)?;
        writeln!(
            f,
            "Today marked:      {}",
            if self.today_marked { "yes" } else { "no" }
        )?;
        writeln!(f, "Status:            {}", self.status)?;
        match &self.next_milestone {
            Some(next) => writeln!(f, "Next milestone:    {} ({} days)", next.title, next.days)?,
            None => writeln!(f, "Next milestone:    all milestones reached")?,
        }
        writeln!(f)?;
        writeln!(f, "Milestones:")?;
        for row in &self.milestones {
            writeln!(
                f,
                "  [{}] {:<16} {:>3} days  {:>4} pts",
                if row.reached { "x" } else { " " },
                row.title,
                row.days,
                row.reward_points
            )?;
        }
        Ok(())
    }
}
