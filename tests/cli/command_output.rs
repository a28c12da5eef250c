//! Subcommand execution and rendering tests

use crate::common::{fixed_record, FixedSource};
use capver::app::cli::args::Command;
use capver::app::cli::display::OutputFormat;
use capver::app::startup::run_command;
use capver::plugin::api::{VersionManagerPlugin, PLATFORM_TAG};

fn plugin() -> VersionManagerPlugin {
    VersionManagerPlugin::new(Box::new(FixedSource(fixed_record())))
}

#[test]
fn test_version_subcommand_json() {
    let out = run_command(&plugin(), &Command::Version, OutputFormat::Json, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "version": "1.2.3",
            "buildNumber": "42",
            "platform": PLATFORM_TAG,
        })
    );
}

#[test]
fn test_package_subcommand_text() {
    let out = run_command(&plugin(), &Command::Package, OutputFormat::Text, false).unwrap();
    assert!(out.contains("com.example.demo"));
    assert!(out.contains("1.2.3"));
    assert!(out.contains("1700000000000"));
}

#[test]
fn test_status_subcommand_reports_up_to_date() {
    let out = run_command(&plugin(), &Command::Status, OutputFormat::Json, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["isUpToDate"], true);
    assert_eq!(value["currentBuildNumber"], 42);
}

#[test]
fn test_update_subcommand_points_at_cli() {
    let command = Command::Update {
        version: Some("3.1.4".to_string()),
        build: Some(7),
    };
    let out = run_command(&plugin(), &command, OutputFormat::Text, false).unwrap();
    assert!(out.contains("cap-version update"));
    assert!(out.contains("3.1.4"));
}

#[test]
fn test_trapeze_subcommand_points_at_cli() {
    let command = Command::Trapeze {
        config: Some(std::path::PathBuf::from("trapeze.config.yaml")),
    };
    let out = run_command(&plugin(), &command, OutputFormat::Text, false).unwrap();
    assert!(out.contains("cap-version trapeze"));
}
