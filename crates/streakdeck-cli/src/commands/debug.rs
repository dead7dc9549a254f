//! Streak debug panel. Compiled into debug builds only.

use std::sync::Arc;

use clap::Subcommand;
use streakdeck_core::{Database, DebugPanel, StreakManager};

#[derive(Subcommand)]
pub enum DebugAction {
    /// Render the panel
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Mark today as active
    Mark,
    /// Show the manager's detailed status
    Status,
    /// Simulate a finished focus session
    SimulateFocus,
    /// Simulate a completed task
    SimulateTask,
    /// Pretend yesterday was active, then mark today
    SimulateYesterday,
    /// Delete all stored streak data
    Reset {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: DebugAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut manager = StreakManager::new(Arc::new(Database::open()?))?;
    let mut panel = DebugPanel::new(&mut manager);

    match action {
        DebugAction::Show { json } => {
            let view = panel.view();
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{view}");
            }
        }
        DebugAction::Mark => println!("{}", panel.mark_today_active()?),
        DebugAction::Status => println!("{}", panel.view_detailed_status()?),
        DebugAction::SimulateFocus => println!("{}", panel.simulate_focus_session()?),
        DebugAction::SimulateTask => println!("{}", panel.simulate_task_completion()?),
        DebugAction::SimulateYesterday => println!("{}", panel.simulate_yesterday_active()?),
        DebugAction::Reset { yes } => {
            panel.request_reset();
            if !yes {
                panel.cancel_reset();
                return Err("refusing to delete streak data without --yes".into());
            }
            if let Some(message) = panel.confirm_reset()? {
                println!("{message}");
            }
        }
    }
    Ok(())
}
