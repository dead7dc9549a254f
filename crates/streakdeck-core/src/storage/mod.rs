//! Key-value persistence shared by the streak manager and the debug panel.
//!
//! Both sides talk to storage only through [`KvStore`], so the debug panel's
//! direct writes are explicit and any store can be swapped for
//! [`MemoryStore`] in tests.

mod config;
pub mod database;
mod memory;

pub use config::{AnimationConfig, Config, LogConfig};
pub use database::Database;
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::error::StoreError;

/// Fixed key under which the serialized streak record lives.
pub const STREAK_STORAGE_KEY: &str = "streak_data";

/// Narrow get/set/delete interface over a string key-value store.
pub trait KvStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Insert or replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key is a no-op.
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

/// Returns the data directory, creating it if needed.
///
/// Resolution order:
/// 1. `STREAKDECK_DATA_DIR`, used verbatim.
/// 2. `~/.config/streakdeck-dev/` when `STREAKDECK_ENV=dev`.
/// 3. `~/.config/streakdeck/`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("STREAKDECK_DATA_DIR") {
        Some(explicit) => PathBuf::from(explicit),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("STREAKDECK_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("streakdeck-dev")
            } else {
                base_dir.join("streakdeck")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
