use std::sync::Arc;

use clap::Subcommand;
use streakdeck_core::{Database, StreakManager, MILESTONES};

#[derive(Subcommand)]
pub enum StreakAction {
    /// Current streak record and status as JSON
    Status,
    /// Count today toward the streak
    Mark,
    /// Human-readable summary
    Summary,
    /// Milestone list with reached markers
    Milestones,
}

pub fn run(action: StreakAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(Database::open()?);
    let mut manager = StreakManager::new(store)?;

    match action {
        StreakAction::Status => {
            let status = manager.current_status();
            let json = serde_json::json!({
                "streak": manager.current_streak_state(),
                "status": status,
                "description": status.description(),
                "today_marked": manager.today_already_marked(),
                "next_milestone": manager.next_milestone(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        StreakAction::Mark => {
            let data = manager.mark_today_active()?;
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        StreakAction::Summary => {
            println!("{}", manager.detailed_status_summary());
        }
        StreakAction::Milestones => {
            let current = manager.current_streak_state().current_streak;
            let rows: Vec<_> = MILESTONES
                .iter()
                .map(|m| {
                    serde_json::json!({
                        "milestone": m,
                        "reached": m.is_reached(current),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }
    Ok(())
}
