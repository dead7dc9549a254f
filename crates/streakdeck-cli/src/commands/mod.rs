pub mod animation;
pub mod config;
#[cfg(debug_assertions)]
pub mod debug;
pub mod streak;
