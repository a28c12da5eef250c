//! CLI argument parsing tests

use capver::app::cli::args::{Args, Command};
use std::path::PathBuf;

#[test]
fn test_every_operation_has_a_subcommand() {
    let cases: [(&[&str], Command); 6] = [
        (&["capver", "version"], Command::Version),
        (&["capver", "package"], Command::Package),
        (&["capver", "last-update"], Command::LastUpdate),
        (&["capver", "status"], Command::Status),
        (
            &["capver", "update", "2.0.0", "--build", "5"],
            Command::Update {
                version: Some("2.0.0".to_string()),
                build: Some(5),
            },
        ),
        (
            &["capver", "trapeze", "--config", "trapeze.config.yaml"],
            Command::Trapeze {
                config: Some(PathBuf::from("trapeze.config.yaml")),
            },
        ),
    ];

    for (argv, expected) in cases {
        let args = Args::parse_from_args(argv.iter().copied()).unwrap();
        assert_eq!(args.command, expected);
    }
}

#[test]
fn test_global_flags_apply_to_any_subcommand() {
    let args = Args::parse_from_args([
        "capver",
        "--format",
        "json",
        "--log-level",
        "warn",
        "status",
    ])
    .unwrap();
    assert_eq!(args.format.as_deref(), Some("json"));
    assert_eq!(args.log_level.as_deref(), Some("warn"));
    assert_eq!(args.command, Command::Status);
}

#[test]
fn test_update_without_arguments_is_valid() {
    let args = Args::parse_from_args(["capver", "update"]).unwrap();
    assert_eq!(
        args.command,
        Command::Update {
            version: None,
            build: None,
        }
    );
}

#[test]
fn test_invalid_log_level_is_rejected() {
    assert!(Args::parse_from_args(["capver", "--log-level", "loud", "version"]).is_err());
}

#[test]
fn test_color_and_no_color_conflict() {
    assert!(Args::parse_from_args(["capver", "--color", "--no-color", "version"]).is_err());
}
