//! Plugin Trait System
//!
//! Core trait for the plugin surface the host shell programs against.
//!
//! # Plugin Architecture
//!
//! The shell discovers the plugin's metadata and advertised operation
//! names, checks API compatibility, then invokes operations by wire
//! name with JSON arguments. Every call is synchronous and stateless:
//! no operation observes or affects another, and the package record is
//! re-read from the injected source on each invocation.

use crate::plugin::error::PluginResult;
use crate::plugin::types::PluginInfo;

/// Base plugin trait the host shell invokes operations through
pub trait Plugin: Send + Sync {
    /// Get plugin metadata
    fn plugin_info(&self) -> PluginInfo;

    /// Get list of operations this plugin advertises, by wire name
    fn advertised_functions(&self) -> Vec<String>;

    /// Check if this plugin is compatible with the given shell API version
    ///
    /// The plugin determines its own compatibility requirements. The
    /// default implementation returns false to force plugins to
    /// explicitly implement their compatibility logic.
    fn is_compatible(&self, _system_api_version: u32) -> bool {
        false
    }

    /// Invoke an operation by wire name with JSON call arguments.
    ///
    /// Read operations ignore `args`; stub operations echo selected
    /// fields back. Unknown names fail with `UnknownOperation`.
    fn invoke(&self, operation: &str, args: &serde_json::Value) -> PluginResult<serde_json::Value>;
}
