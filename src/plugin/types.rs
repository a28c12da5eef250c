//! Type definitions for the plugin surface
//!
//! Wire shapes are fixed by the host shell's contract: camelCase field
//! names, build numbers rendered as strings in the info responses and
//! kept numeric in status/update responses.

use serde::{Deserialize, Serialize};

/// Platform tag carried by every successful response. One constant per
/// target build; never re-typed at a call site.
#[cfg(target_os = "android")]
pub const PLATFORM_TAG: &str = "android";
#[cfg(target_os = "ios")]
pub const PLATFORM_TAG: &str = "ios";
#[cfg(not(any(target_os = "android", target_os = "ios")))]
pub const PLATFORM_TAG: &str = "web";

/// Plugin metadata information
#[derive(Debug, Clone, PartialEq)]
pub struct PluginInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    pub api_version: u32,
    pub functions: Vec<String>,
}

/// Response for `getVersion`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub version: String,
    pub build_number: String,
    pub platform: String,
}

/// Response for `getPackageInfo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInfo {
    pub name: String,
    pub version: String,
    pub build_number: String,
    pub platform: String,
    pub last_updated: String,
}

/// Response for `getLastUpdate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastUpdate {
    pub last_updated: String,
    pub update_method: String,
}

/// Response for `checkVersionStatus`
///
/// `is_up_to_date` is a hard-coded constant: no remote comparison is
/// performed anywhere in this plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionStatus {
    pub is_up_to_date: bool,
    pub current_version: String,
    pub current_build_number: i64,
    pub suggestions: Vec<String>,
    pub last_check: String,
}

/// Arguments for `updateVersion`. Every field is optional on the wire;
/// unknown fields from older shells are tolerated and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOptions {
    #[serde(default)]
    pub version: String,
    #[serde(default = "default_build_number")]
    pub build_number: i64,
}

fn default_build_number() -> i64 {
    1
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            version: String::new(),
            build_number: default_build_number(),
        }
    }
}

impl UpdateOptions {
    pub fn new(version: impl Into<String>, build_number: i64) -> Self {
        Self {
            version: version.into(),
            build_number,
        }
    }
}

/// Response for `updateVersion`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    pub success: bool,
    pub message: String,
    pub updated_files: Vec<String>,
    pub new_version: String,
    pub new_build_number: i64,
    pub platform: String,
}

/// Response for `applyTrapezeConfig`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrapezeOutcome {
    pub success: bool,
    pub message: String,
    pub applied_platforms: Vec<String>,
    pub modified_files: Vec<String>,
}
