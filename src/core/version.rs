//! Build metadata and API version accessors shared by the app and the
//! plugin surface. Includes the generated version.rs from the build
//! script, providing a single source of truth.

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Parse the API version string from the build script into u32.
/// Falls back to a stable default if parsing fails.
pub fn get_api_version() -> u32 {
    PLUGIN_API_VERSION.parse().unwrap_or(20250806)
}

/// Build time string from the build script (UTC)
pub fn build_time() -> &'static str {
    BUILD_TIME
}

/// Build instant from the build script, epoch milliseconds
pub fn build_epoch_ms() -> i64 {
    BUILD_EPOCH_MS
}

/// Short git hash captured by the build script
pub fn git_hash() -> &'static str {
    GIT_HASH
}
