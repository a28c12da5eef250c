//! Shared fixtures for integration tests

use capver::host::api::{AppPackage, HostError, HostResult, VersionSource};

pub fn fixed_record() -> AppPackage {
    AppPackage {
        app_id: "com.example.demo".to_string(),
        version_name: "1.2.3".to_string(),
        version_code: 42,
        last_update_time: 1_700_000_000_000,
    }
}

pub struct FixedSource(pub AppPackage);

impl VersionSource for FixedSource {
    fn lookup(&self) -> HostResult<AppPackage> {
        Ok(self.0.clone())
    }
}

pub struct FailingSource;

impl VersionSource for FailingSource {
    fn lookup(&self) -> HostResult<AppPackage> {
        Err(HostError::Unavailable {
            message: "host shell gone".to_string(),
        })
    }
}
