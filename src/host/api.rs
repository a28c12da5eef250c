//! Public API for the host package-record capability
//!
//! External modules should import from here rather than directly from
//! internal modules.

pub use crate::host::build_info::BuildInfoSource;
pub use crate::host::error::{HostError, HostResult};
pub use crate::host::traits::VersionSource;
pub use crate::host::types::AppPackage;
