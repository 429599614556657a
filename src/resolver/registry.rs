//! Registry entries and their trial order

use serde::Serialize;
use std::cmp::Reverse;
use std::path::{Path, PathBuf};

/// Ranking of a registry entry, higher values tried first
pub type Priority = i32;

/// Priority used when none is given at registration
pub const DEFAULT_PRIORITY: Priority = 1;

/// A base directory views are looked up in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEntry {
    /// Directory with trailing separators removed
    pub path: PathBuf,
    pub priority: Priority,
}

impl PathEntry {
    pub fn new(path: impl AsRef<Path>, priority: Priority) -> Self {
        Self {
            path: normalize_path(path.as_ref()),
            priority,
        }
    }
}

/// A file extension appended to view names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionEntry {
    /// Extension without its leading dot, e.g. `php` or `fortune.php`
    pub extension: String,
    pub priority: Priority,
}

impl ExtensionEntry {
    pub fn new(extension: &str, priority: Priority) -> Self {
        Self {
            extension: normalize_extension(extension).to_string(),
            priority,
        }
    }
}

pub(crate) trait Prioritized {
    fn priority(&self) -> Priority;
}

impl Prioritized for PathEntry {
    fn priority(&self) -> Priority {
        self.priority
    }
}

impl Prioritized for ExtensionEntry {
    fn priority(&self) -> Priority {
        self.priority
    }
}

/// Orders entries highest priority first
///
/// The sort is stable, so entries sharing a priority keep registration order.
pub(crate) fn by_priority<T: Prioritized>(entries: &[T]) -> Vec<&T> {
    let mut sorted: Vec<&T> = entries.iter().collect();
    sorted.sort_by_key(|entry| Reverse(entry.priority()));
    sorted
}

/// Strips trailing separators, leaving the filesystem root as is
fn normalize_path(path: &Path) -> PathBuf {
    path.components().collect()
}

/// Strips a single leading dot
fn normalize_extension(extension: &str) -> &str {
    extension.strip_prefix('.').unwrap_or(extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_stripped() {
        assert_eq!(PathEntry::new("views/", 1).path, PathBuf::from("views"));
        assert_eq!(PathEntry::new("views//", 1).path, PathBuf::from("views"));
        assert_eq!(
            PathEntry::new("/srv/app/views/", 1).path,
            PathBuf::from("/srv/app/views")
        );
        assert_eq!(PathEntry::new("views", 1), PathEntry::new("views/", 1));
    }

    #[test]
    fn test_root_path_is_kept() {
        assert_eq!(PathEntry::new("/", 1).path, PathBuf::from("/"));
    }

    #[test]
    fn test_single_leading_dot_is_stripped() {
        assert_eq!(ExtensionEntry::new(".php", 1).extension, "php");
        assert_eq!(ExtensionEntry::new("php", 1).extension, "php");
        assert_eq!(ExtensionEntry::new(".fortune.php", 1).extension, "fortune.php");
        assert_eq!(ExtensionEntry::new("..php", 1).extension, ".php");
    }

    #[test]
    fn test_by_priority_is_descending_and_stable() {
        let entries = vec![
            ExtensionEntry::new("a", 1),
            ExtensionEntry::new("b", 3),
            ExtensionEntry::new("c", 1),
            ExtensionEntry::new("d", 3),
            ExtensionEntry::new("e", -2),
        ];

        let order: Vec<&str> = by_priority(&entries)
            .iter()
            .map(|e| e.extension.as_str())
            .collect();

        assert_eq!(order, vec!["b", "d", "a", "c", "e"]);
    }
}
