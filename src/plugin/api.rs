//! Public API for the plugin surface
//!
//! External modules should import from here rather than directly from
//! internal modules.

// The adapter itself
pub use crate::plugin::version_manager::VersionManagerPlugin;

// Plugin trait and metadata
pub use crate::plugin::traits::Plugin;
pub use crate::plugin::types::PluginInfo;

// Error handling
pub use crate::plugin::error::{PluginError, PluginResult};

// Wire types
pub use crate::plugin::types::{
    LastUpdate, PackageInfo, TrapezeOutcome, UpdateOptions, UpdateOutcome, VersionInfo,
    VersionStatus, PLATFORM_TAG,
};
