//! Fallback version source backed by compile-time build metadata.
//!
//! Used where no host package manager exists (desktop builds, the CLI
//! binary). The numeric build code is derived from the crate's own
//! semantic version; the last-update instant is the build timestamp.

use crate::core::version;
use crate::host::error::HostResult;
use crate::host::traits::VersionSource;
use crate::host::types::AppPackage;

/// Numeric code for a three-part semantic version: MMMmmmpp0.
/// "21.0.0" -> 21000000, "20.15.3" -> 20015030. Anything that is not
/// plain three-part numeric semver maps to the fallback 100000.
pub fn numeric_version_code(version: &str) -> i64 {
    let parts: Vec<Option<i64>> = version
        .split('.')
        .map(|part| part.parse::<i64>().ok())
        .collect();

    match parts.as_slice() {
        [Some(major), Some(minor), Some(patch)] => major * 1_000_000 + minor * 1_000 + patch * 10,
        _ => 100_000,
    }
}

/// Version source reporting this crate's own build identity
#[derive(Debug, Clone)]
pub struct BuildInfoSource {
    app_id: String,
    version_name: String,
}

impl BuildInfoSource {
    pub fn new() -> Self {
        Self {
            app_id: env!("CARGO_PKG_NAME").to_string(),
            version_name: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the reported application identifier, for shells that
    /// embed the crate under their own id.
    pub fn with_app_id(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            ..Self::new()
        }
    }
}

impl Default for BuildInfoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionSource for BuildInfoSource {
    fn lookup(&self) -> HostResult<AppPackage> {
        Ok(AppPackage {
            app_id: self.app_id.clone(),
            version_name: self.version_name.clone(),
            version_code: numeric_version_code(&self.version_name),
            last_update_time: version::build_epoch_ms(),
        })
    }
}
