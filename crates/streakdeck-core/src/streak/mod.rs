mod data;
mod manager;
mod milestone;

pub use data::{StreakData, StreakStatus};
pub use manager::StreakManager;
pub use milestone::{next_milestone, StreakMilestone, MILESTONES};
