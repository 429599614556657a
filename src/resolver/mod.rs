//! View name resolution
//!
//! A view name such as `users/show` is turned into a file on disk by trying
//! every registered base directory against every registered extension, in
//! priority order, and returning the first candidate that exists.

mod registry;
mod view_name;

pub use registry::{ExtensionEntry, PathEntry, Priority, DEFAULT_PRIORITY};
pub use view_name::ViewNameResolver;
