//! Shared types

mod errors;

pub use errors::{ResolverError, Result};
