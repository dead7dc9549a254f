use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Persisted streak record.
///
/// Stored as JSON under [`crate::storage::STREAK_STORAGE_KEY`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakData {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_active_days: u32,
    /// Calendar day of the most recent activity.
    #[serde(default)]
    pub last_active_date: Option<NaiveDate>,
}

impl StreakData {
    /// Record activity on `day`.
    ///
    /// Returns `false` (and leaves the record untouched) when `day` was
    /// already counted.
    pub fn record_activity(&mut self, day: NaiveDate) -> bool {
        if self.last_active_date == Some(day) {
            return false;
        }

        let continues = matches!(self.last_active_date, Some(last) if day.pred_opt() == Some(last));
        self.current_streak = if continues {
            self.current_streak.saturating_add(1)
        } else {
            1
        };
        self.longest_streak = self.longest_streak.max(self.current_streak);
        self.total_active_days = self.total_active_days.saturating_add(1);
        self.last_active_date = Some(day);
        true
    }
}

/// Where the streak stands relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakStatus {
    /// No activity has ever been recorded.
    NotStarted,
    /// Today already counts toward the streak.
    ActiveToday,
    /// Last activity was yesterday; the streak survives if today is marked.
    AtRisk,
    /// A day was missed; the next activity starts over at 1.
    Broken,
}

impl StreakStatus {
    pub fn for_data(data: &StreakData, today: NaiveDate) -> Self {
        match data.last_active_date {
            None => StreakStatus::NotStarted,
            Some(last) if last == today => StreakStatus::ActiveToday,
            Some(last) if today.pred_opt() == Some(last) => StreakStatus::AtRisk,
            Some(_) => StreakStatus::Broken,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StreakStatus::NotStarted => "No streak yet. Be active today to start one",
            StreakStatus::ActiveToday => "Today is done. Streak is safe",
            StreakStatus::AtRisk => "Be active today to keep your streak",
            StreakStatus::Broken => "Streak ended. Start a new one today",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn first_activity_starts_at_one() {
        let mut data = StreakData::default();
        assert!(data.record_activity(day(10)));
        assert_eq!(data.current_streak, 1);
        assert_eq!(data.longest_streak, 1);
        assert_eq!(data.total_active_days, 1);
        assert_eq!(data.last_active_date, Some(day(10)));
    }

    #[test]
    fn consecutive_days_extend_streak() {
        let mut data = StreakData::default();
        for d in 1..=5 {
            data.record_activity(day(d));
        }
        assert_eq!(data.current_streak, 5);
        assert_eq!(data.longest_streak, 5);
    }

    #[test]
    fn same_day_is_idempotent() {
        let mut data = StreakData::default();
        data.record_activity(day(1));
        data.record_activity(day(2));
        let before = data.clone();
        assert!(!data.record_activity(day(2)));
        assert_eq!(data, before);
    }

    #[test]
    fn gap_resets_current_but_keeps_longest() {
        let mut data = StreakData::default();
        for d in 1..=4 {
            data.record_activity(day(d));
        }
        data.record_activity(day(9));
        assert_eq!(data.current_streak, 1);
        assert_eq!(data.longest_streak, 4);
        assert_eq!(data.total_active_days, 5);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let data = StreakData {
            current_streak: 2,
            longest_streak: 5,
            total_active_days: 9,
            last_active_date: Some(day(4)),
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["currentStreak"], 2);
        assert_eq!(json["longestStreak"], 5);
        assert_eq!(json["totalActiveDays"], 9);
        assert_eq!(json["lastActiveDate"], "2026-03-04");
    }

    #[test]
    fn status_relative_to_today() {
        let mut data = StreakData::default();
        assert_eq!(StreakStatus::for_data(&data, day(10)), StreakStatus::NotStarted);
        data.last_active_date = Some(day(10));
        assert_eq!(StreakStatus::for_data(&data, day(10)), StreakStatus::ActiveToday);
        assert_eq!(StreakStatus::for_data(&data, day(11)), StreakStatus::AtRisk);
        assert_eq!(StreakStatus::for_data(&data, day(13)), StreakStatus::Broken);
    }
}
