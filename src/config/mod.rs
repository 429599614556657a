//! Configuration system for viewres
//!
//! View paths and extensions can come from a TOML file. The first file found
//! wins, searched in this order:
//! 1. Explicit path (`--config`)
//! 2. Project config (./.viewres.toml)
//! 3. $VIEWRES_CONFIG
//! 4. User-global config (~/.config/viewres/config.toml)

mod defaults;
mod loader;
mod user_config;

pub use defaults::{config_candidates, CONFIG_ENV_VAR, PROJECT_CONFIG_FILE};
pub use loader::ConfigLoader;
pub use user_config::{ExtensionSpec, PathSpec, UserConfig};
