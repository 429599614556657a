//! User configuration file parsing

use crate::config::defaults::default_priority;
use crate::resolver::Priority;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub paths: Vec<PathSpec>,
    pub extensions: Vec<ExtensionSpec>,
}

/// A view directory, either bare or with an explicit priority
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSpec {
    Plain(PathBuf),
    Weighted {
        path: PathBuf,
        #[serde(default = "default_priority")]
        priority: Priority,
    },
}

impl PathSpec {
    pub fn path(&self) -> &Path {
        match self {
            PathSpec::Plain(path) | PathSpec::Weighted { path, .. } => path,
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            PathSpec::Plain(_) => default_priority(),
            PathSpec::Weighted { priority, .. } => *priority,
        }
    }
}

/// A view extension, either bare or with an explicit priority
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtensionSpec {
    Plain(String),
    Weighted {
        extension: String,
        #[serde(default = "default_priority")]
        priority: Priority,
    },
}

impl ExtensionSpec {
    pub fn extension(&self) -> &str {
        match self {
            ExtensionSpec::Plain(extension) | ExtensionSpec::Weighted { extension, .. } => {
                extension
            }
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            ExtensionSpec::Plain(_) => default_priority(),
            ExtensionSpec::Weighted { priority, .. } => *priority,
        }
    }
}
