//! Plugin Error Handling
//!
//! Error types for the plugin surface: failed host-record lookups,
//! unknown operation names and malformed call arguments.

use crate::host::api::HostError;

/// Result type alias for plugin operations
pub type PluginResult<T> = std::result::Result<T, PluginError>;

#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    /// Host record could not be read; carries the fixed per-operation
    /// message plus the underlying cause
    #[error("{message}")]
    Lookup {
        message: &'static str,
        #[source]
        cause: HostError,
    },

    /// Operation name not advertised by this plugin
    #[error("Unknown operation: {operation}")]
    UnknownOperation { operation: String },

    /// Call arguments did not deserialise for the named operation
    #[error("Invalid arguments for '{operation}'")]
    InvalidArguments {
        operation: String,
        #[source]
        cause: serde_json::Error,
    },

    /// Response could not be serialised to a wire value
    #[error("Response serialisation failed")]
    Serialize(#[from] serde_json::Error),
}
