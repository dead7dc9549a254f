use serde::Serialize;

/// A fixed streak-length threshold that awards a badge and points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakMilestone {
    pub days: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub reward_points: u32,
}

impl StreakMilestone {
    /// A milestone counts as reached once the current streak meets its threshold.
    pub fn is_reached(&self, current_streak: u32) -> bool {
        self.days <= current_streak
    }
}

/// All milestones, in ascending threshold order.
pub const MILESTONES: [StreakMilestone; 4] = [
    StreakMilestone {
        days: 3,
        title: "Warming Up",
        description: "Stay active three days in a row",
        reward_points: 100,
    },
    StreakMilestone {
        days: 7,
        title: "One Week Strong",
        description: "A full week without missing a day",
        reward_points: 200,
    },
    StreakMilestone {
        days: 30,
        title: "Monthly Habit",
        description: "Thirty consecutive active days",
        reward_points: 500,
    },
    StreakMilestone {
        days: 100,
        title: "Century",
        description: "One hundred days in a row",
        reward_points: 1000,
    },
];

/// First milestone the given streak has not reached yet.
pub fn next_milestone(current_streak: u32) -> Option<&'static StreakMilestone> {
    MILESTONES.iter().find(|m| !m.is_reached(current_streak))
}
