//! Application Configuration
//!
//! Tunables shared by both widgets, provided once via context.

use leptos::prelude::*;
use tracing::Level;

/// localStorage key holding the serialized task list
pub const TASK_STORAGE_KEY: &str = "webdev_tasks_v1";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Persistence slot for the to-do list
    pub storage_key: String,
    /// How long the toast stays visible
    pub toast_duration_ms: u32,
    /// How long the add-task input keeps its invalid cue
    pub invalid_flash_ms: u32,
    /// Most verbose level forwarded to the browser console
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: TASK_STORAGE_KEY.to_string(),
            toast_duration_ms: 3000,
            invalid_flash_ms: 700,
            log_level: Level::INFO,
        }
    }
}

/// Get the config from context, or the defaults when none was provided
pub fn use_config() -> Config {
    use_context::<Config>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.storage_key, "webdev_tasks_v1");
        assert_eq!(config.toast_duration_ms, 3000);
        assert_eq!(config.invalid_flash_ms, 700);
        assert_eq!(config.log_level, Level::INFO);
    }
}
