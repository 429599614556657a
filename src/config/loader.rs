//! Configuration loader
//!
//! Finds the first existing config file and turns its entries into a
//! [`ViewNameResolver`]. Relative view paths are taken relative to the
//! directory holding the config file.

use crate::config::{config_candidates, UserConfig};
use crate::resolver::ViewNameResolver;
use crate::types::{ResolverError, Result};
use path_clean::PathClean;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: UserConfig,
    source: Option<PathBuf>,
    base_dir: PathBuf,
}

impl ConfigLoader {
    /// Load configuration from `explicit`, or search the default locations
    ///
    /// An explicit path must exist. Finding no file in the default locations
    /// yields an empty configuration.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ResolverError::ConfigError(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::from_file(path);
        }

        for path in config_candidates() {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        debug!("No config file found");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading config from: {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| {
            ResolverError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let base_dir = path.parent().unwrap_or(Path::new("")).to_path_buf();
        let mut loader = Self::from_toml_str(&content, &base_dir)?;
        loader.source = Some(path.to_path_buf());

        info!(
            "Loaded {} view paths and {} extensions from {}",
            loader.config.paths.len(),
            loader.config.extensions.len(),
            path.display()
        );
        Ok(loader)
    }

    /// Parse configuration text, resolving relative paths against `base_dir`
    pub fn from_toml_str(content: &str, base_dir: &Path) -> Result<Self> {
        let config: UserConfig = toml::from_str(content)?;

        Ok(Self {
            config,
            source: None,
            base_dir: base_dir.to_path_buf(),
        })
    }

    pub fn config(&self) -> &UserConfig {
        &self.config
    }

    /// The file this configuration came from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Build a resolver holding every configured path and extension
    pub fn build_resolver(&self) -> ViewNameResolver {
        let mut resolver = ViewNameResolver::new();
        self.apply_to(&mut resolver);
        resolver
    }

    /// Register configured entries on `resolver`, in file order
    pub fn apply_to(&self, resolver: &mut ViewNameResolver) {
        for spec in &self.config.paths {
            resolver.register_path_with_priority(self.resolve_dir(spec.path()), spec.priority());
        }

        for spec in &self.config.extensions {
            resolver.register_extension_with_priority(spec.extension(), spec.priority());
        }
    }

    fn resolve_dir(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.clean()
        } else {
            self.base_dir.join(path).clean()
        }
    }
}
