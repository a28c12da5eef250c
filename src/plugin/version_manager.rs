//! Version Manager plugin - query operations over the host package
//! record plus stubbed mutation operations.
//!
//! Version mutation happens at build time through the cap-version CLI;
//! the two update operations here only report that redirection. The
//! four read operations each re-fetch the package record from the
//! injected source and project fields into a wire response.

use crate::host::api::{AppPackage, BuildInfoSource, VersionSource};
use crate::plugin::error::{PluginError, PluginResult};
use crate::plugin::traits::Plugin;
use crate::plugin::types::{
    LastUpdate, PackageInfo, PluginInfo, TrapezeOutcome, UpdateOptions, UpdateOutcome, VersionInfo,
    VersionStatus, PLATFORM_TAG,
};

/// Wire operation names the host shell dispatches on
pub mod ops {
    pub const GET_VERSION: &str = "getVersion";
    pub const GET_PACKAGE_INFO: &str = "getPackageInfo";
    pub const GET_LAST_UPDATE: &str = "getLastUpdate";
    pub const CHECK_VERSION_STATUS: &str = "checkVersionStatus";
    pub const UPDATE_VERSION: &str = "updateVersion";
    pub const APPLY_TRAPEZE_CONFIG: &str = "applyTrapezeConfig";

    pub const ALL: [&str; 6] = [
        GET_VERSION,
        GET_PACKAGE_INFO,
        GET_LAST_UPDATE,
        CHECK_VERSION_STATUS,
        UPDATE_VERSION,
        APPLY_TRAPEZE_CONFIG,
    ];
}

const UPDATE_STUB_MESSAGE: &str =
    "Version updates must be performed using the CLI tool: cap-version update <version>";
const TRAPEZE_STUB_MESSAGE: &str =
    "Trapeze configuration must be applied using the CLI tool: cap-version trapeze <config>";

/// The Version Query Adapter
pub struct VersionManagerPlugin {
    source: Box<dyn VersionSource>,
}

impl VersionManagerPlugin {
    /// Create the plugin over a shell-injected version source
    pub fn new(source: Box<dyn VersionSource>) -> Self {
        Self { source }
    }

    /// Create the plugin over the compile-time fallback source
    pub fn with_build_info() -> Self {
        Self::new(Box::new(BuildInfoSource::new()))
    }

    /// Get static plugin info without creating an instance
    pub fn static_plugin_info() -> PluginInfo {
        PluginInfo {
            name: "version-manager".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Query installed application version metadata".to_string(),
            author: "capver".to_string(),
            api_version: crate::core::version::get_api_version(),
            functions: ops::ALL.iter().map(|name| name.to_string()).collect(),
        }
    }

    fn fetch(&self, failure_message: &'static str) -> PluginResult<AppPackage> {
        self.source
            .lookup()
            .map_err(|cause| PluginError::Lookup {
                message: failure_message,
                cause,
            })
    }

    /// Current version information for the app
    pub fn get_version(&self) -> PluginResult<VersionInfo> {
        let record = self.fetch("Failed to get version info")?;
        Ok(VersionInfo {
            version: record.version_name,
            build_number: record.version_code.to_string(),
            platform: PLATFORM_TAG.to_string(),
        })
    }

    /// Package information: identifier, version, build number, last update
    pub fn get_package_info(&self) -> PluginResult<PackageInfo> {
        let record = self.fetch("Failed to get package info")?;
        Ok(PackageInfo {
            name: record.app_id,
            version: record.version_name,
            build_number: record.version_code.to_string(),
            platform: PLATFORM_TAG.to_string(),
            last_updated: record.last_update_time.to_string(),
        })
    }

    /// Last-update instant for version tracking
    pub fn get_last_update(&self) -> PluginResult<LastUpdate> {
        let record = self.fetch("Failed to get last update info")?;
        Ok(LastUpdate {
            last_updated: record.last_update_time.to_string(),
            update_method: PLATFORM_TAG.to_string(),
        })
    }

    /// Version status snapshot.
    ///
    /// `is_up_to_date` is unconditionally true: no remote reference
    /// version exists to compare against.
    pub fn check_version_status(&self) -> PluginResult<VersionStatus> {
        let record = self.fetch("Failed to check version status")?;
        Ok(VersionStatus {
            is_up_to_date: true,
            current_version: record.version_name,
            current_build_number: record.version_code,
            suggestions: Vec::new(),
            last_check: chrono::Utc::now().timestamp_millis().to_string(),
        })
    }

    /// Stub: version updates are a build-time CLI concern. Echoes the
    /// requested version back without touching the host.
    pub fn update_version(&self, options: UpdateOptions) -> UpdateOutcome {
        log::debug!(
            "updateVersion called in-app for '{}'; redirecting to CLI",
            options.version
        );
        UpdateOutcome {
            success: false,
            message: UPDATE_STUB_MESSAGE.to_string(),
            updated_files: Vec::new(),
            new_version: options.version,
            new_build_number: options.build_number,
            platform: PLATFORM_TAG.to_string(),
        }
    }

    /// Stub: Trapeze configuration is applied at build time. The config
    /// value is accepted opaquely and ignored.
    pub fn apply_trapeze_config(&self, _config: &serde_json::Value) -> TrapezeOutcome {
        log::debug!("applyTrapezeConfig called in-app; redirecting to CLI");
        TrapezeOutcome {
            success: false,
            message: TRAPEZE_STUB_MESSAGE.to_string(),
            applied_platforms: vec![PLATFORM_TAG.to_string()],
            modified_files: Vec::new(),
        }
    }

    fn parse_update_options(
        operation: &str,
        args: &serde_json::Value,
    ) -> PluginResult<UpdateOptions> {
        if args.is_null() {
            return Ok(UpdateOptions::default());
        }
        serde_json::from_value(args.clone()).map_err(|cause| PluginError::InvalidArguments {
            operation: operation.to_string(),
            cause,
        })
    }
}

impl std::fmt::Debug for VersionManagerPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionManagerPlugin").finish_non_exhaustive()
    }
}

impl Plugin for VersionManagerPlugin {
    fn plugin_info(&self) -> PluginInfo {
        Self::static_plugin_info()
    }

    fn advertised_functions(&self) -> Vec<String> {
        ops::ALL.iter().map(|name| name.to_string()).collect()
    }

    fn is_compatible(&self, system_api_version: u32) -> bool {
        system_api_version >= crate::core::version::get_api_version()
    }

    fn invoke(&self, operation: &str, args: &serde_json::Value) -> PluginResult<serde_json::Value> {
        let response = match operation {
            ops::GET_VERSION => serde_json::to_value(self.get_version()?)?,
            ops::GET_PACKAGE_INFO => serde_json::to_value(self.get_package_info()?)?,
            ops::GET_LAST_UPDATE => serde_json::to_value(self.get_last_update()?)?,
            ops::CHECK_VERSION_STATUS => serde_json::to_value(self.check_version_status()?)?,
            ops::UPDATE_VERSION => {
                let options = Self::parse_update_options(operation, args)?;
                serde_json::to_value(self.update_version(options))?
            }
            ops::APPLY_TRAPEZE_CONFIG => serde_json::to_value(self.apply_trapeze_config(args))?,
            other => {
                return Err(PluginError::UnknownOperation {
                    operation: other.to_string(),
                })
            }
        };
        Ok(response)
    }
}
