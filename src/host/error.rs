//! Host Record Error Types

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Package not found: {app_id}")]
    PackageNotFound { app_id: String },

    #[error("Host record unavailable: {message}")]
    Unavailable { message: String },
}

/// Result type for host record lookups
pub type HostResult<T> = Result<T, HostError>;
