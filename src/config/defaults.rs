//! Built-in configuration locations

use crate::resolver::{Priority, DEFAULT_PRIORITY};
use std::path::PathBuf;

/// Project-specific config file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".viewres.toml";

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "VIEWRES_CONFIG";

const CONFIG_DIR_NAME: &str = "viewres";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Config file locations in the order they are tried
pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(PROJECT_CONFIG_FILE));
    }

    if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
        candidates.push(PathBuf::from(config_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    }

    candidates
}

pub(crate) fn default_priority() -> Priority {
    DEFAULT_PRIORITY
}

/// Serializes tests that set `CONFIG_ENV_VAR`
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_candidates_order() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var(CONFIG_ENV_VAR, "/tmp/viewres-env.toml");
        let candidates = config_candidates();
        std::env::remove_var(CONFIG_ENV_VAR);

        let cwd = std::env::current_dir().unwrap();
        assert_eq!(candidates[0], cwd.join(PROJECT_CONFIG_FILE));
        assert_eq!(candidates[1], PathBuf::from("/tmp/viewres-env.toml"));
        if let Some(config_dir) = dirs::config_dir() {
            assert_eq!(candidates.len(), 3);
            assert_eq!(
                candidates[2],
                config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
            );
        }
    }

    #[test]
    fn test_config_candidates_without_env_var() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::remove_var(CONFIG_ENV_VAR);
        let candidates = config_candidates();

        assert!(candidates[0].ends_with(PROJECT_CONFIG_FILE));
        assert!(!candidates
            .iter()
            .any(|path| path == &PathBuf::from("/tmp/viewres-env.toml")));
    }

    #[test]
    fn test_default_priority_matches_resolver() {
        assert_eq!(default_priority(), DEFAULT_PRIORITY);
    }
}
