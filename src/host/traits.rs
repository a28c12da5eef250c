//! Host Record Trait
//!
//! The version-record capability is injected by the surrounding shell
//! at construction time, never discovered through a global. One read
//! method keeps the plugin testable without a real host environment.

use crate::host::error::HostResult;
use crate::host::types::AppPackage;

/// Source of the running application's package record
pub trait VersionSource: Send + Sync {
    /// Fetch the current package record.
    ///
    /// Called once per operation; implementations must not cache
    /// staleness away on behalf of the caller.
    fn lookup(&self) -> HostResult<AppPackage>;
}
