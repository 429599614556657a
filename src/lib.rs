//! viewres - view name resolution
//!
//! Maps logical view names (`users/show`) to template files on disk by
//! searching prioritized base directories and file extensions. Rendering is
//! left to the caller; this crate only finds the file.

pub mod config;
pub mod resolver;
pub mod types;

pub use config::ConfigLoader;
pub use resolver::{ExtensionEntry, PathEntry, Priority, ViewNameResolver, DEFAULT_PRIORITY};
pub use types::ResolverError;
