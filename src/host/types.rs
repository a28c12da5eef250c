//! Type definitions for the host package record

/// Installed package metadata for the running application, as reported
/// by the host shell. Read-only; a fresh copy is fetched on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPackage {
    /// The application's own identifier (bundle/package id)
    pub app_id: String,
    /// Display version string, e.g. "1.2.3"
    pub version_name: String,
    /// Numeric build identifier
    pub version_code: i64,
    /// Last-update instant, epoch milliseconds
    pub last_update_time: i64,
}
