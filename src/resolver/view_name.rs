//! Resolver mapping view names to files on disk

use crate::resolver::registry::{
    by_priority, ExtensionEntry, PathEntry, Priority, DEFAULT_PRIORITY,
};
use crate::types::{ResolverError, Result};
use std::path::{is_separator, Path, PathBuf};
use tracing::{debug, warn};

/// Looks up view files across prioritized directories and extensions
///
/// Candidates are generated as `<path>/<name>.<extension>` for every path,
/// then every extension, both highest priority first. The first candidate
/// that exists wins.
#[derive(Debug, Clone, Default)]
pub struct ViewNameResolver {
    paths: Vec<PathEntry>,
    extensions: Vec<ExtensionEntry>,
}

impl ViewNameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a base directory with the default priority
    pub fn register_path(&mut self, path: impl AsRef<Path>) {
        self.register_path_with_priority(path, DEFAULT_PRIORITY);
    }

    /// Register a base directory
    ///
    /// Trailing separators are stripped, so `views/` and `views` are the same
    /// registration.
    pub fn register_path_with_priority(&mut self, path: impl AsRef<Path>, priority: Priority) {
        let entry = PathEntry::new(path, priority);
        debug!(
            "Registered view path {} (priority {})",
            entry.path.display(),
            priority
        );
        self.paths.push(entry);
    }

    /// Register a file extension with the default priority
    pub fn register_extension(&mut self, extension: &str) {
        self.register_extension_with_priority(extension, DEFAULT_PRIORITY);
    }

    /// Register a file extension
    ///
    /// A single leading dot is stripped, so `.php` and `php` are the same
    /// registration.
    pub fn register_extension_with_priority(&mut self, extension: &str, priority: Priority) {
        let entry = ExtensionEntry::new(extension, priority);
        if entry.extension.is_empty() {
            warn!("Ignoring empty view extension {:?}", extension);
            return;
        }

        debug!(
            "Registered view extension .{} (priority {})",
            entry.extension, priority
        );
        self.extensions.push(entry);
    }

    /// Registered paths in trial order
    pub fn paths(&self) -> Vec<&PathEntry> {
        by_priority(&self.paths)
    }

    /// Registered extensions in trial order
    pub fn extensions(&self) -> Vec<&ExtensionEntry> {
        by_priority(&self.extensions)
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.extensions.is_empty()
    }

    /// Every path `resolve` would probe for `name`, in order
    ///
    /// When `name` already ends in a registered extension only the directory
    /// varies. Otherwise each directory is combined with each extension.
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        let name = name.trim_start_matches(is_separator);
        let paths = self.paths();

        if let Some(extension) = self.extension_of(name) {
            debug!("View name {} already carries extension .{}", name, extension);
            return paths.iter().map(|entry| entry.path.join(name)).collect();
        }

        let extensions = self.extensions();
        paths
            .iter()
            .flat_map(|entry| {
                extensions
                    .iter()
                    .map(move |ext| entry.path.join(format!("{}.{}", name, ext.extension)))
            })
            .collect()
    }

    /// Resolve a view name to the first existing candidate file
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        for candidate in self.candidates(name) {
            if candidate.exists() {
                debug!("Resolved view {} to {}", name, candidate.display());
                return Ok(candidate);
            }
            debug!("View candidate {} does not exist", candidate.display());
        }

        Err(ResolverError::ViewNotFound(name.to_string()))
    }

    /// The registered extension `name` ends with, if any
    ///
    /// Longer extensions are tested first so `fortune.php` is reported
    /// instead of `php` for `a.fortune.php`.
    fn extension_of(&self, name: &str) -> Option<&str> {
        let mut by_length: Vec<&ExtensionEntry> = self.extensions.iter().collect();
        by_length.sort_by(|a, b| b.extension.len().cmp(&a.extension.len()));

        by_length
            .into_iter()
            .map(|entry| entry.extension.as_str())
            .find(|extension| {
                name.strip_suffix(extension)
                    .is_some_and(|stem| stem.ends_with('.'))
            })
    }
}
