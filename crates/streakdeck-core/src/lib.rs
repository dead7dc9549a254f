//! # Streakdeck Core Library
//!
//! Streak tracking for a productivity app, a debug control panel over it,
//! and a catalog of animation presets for the view layer. The `streakdeck`
//! CLI is a thin front-end over this crate.
//!
//! ## Architecture
//!
//! - **Storage**: a narrow [`KvStore`] trait with SQLite and in-memory
//!   implementations, plus TOML configuration
//! - **Streak**: [`StreakManager`], an explicitly constructed service that
//!   owns the cached streak record and its normal write path
//! - **Debug panel**: [`DebugPanel`], manual test hooks that call the manager
//!   and, for two actions, write to the store directly
//! - **Animation**: named curves, durations, decorators and transitions
//!   expressed as pure functions of elapsed time

pub mod animation;
pub mod debug_panel;
pub mod error;
pub mod storage;
pub mod streak;

pub use debug_panel::{DebugPanel, DebugPanelView};
pub use error::{ConfigError, CoreError, StoreError};
pub use storage::{Config, Database, KvStore, MemoryStore, STREAK_STORAGE_KEY};
pub use streak::{StreakData, StreakManager, StreakMilestone, StreakStatus, MILESTONES};
