//! TOML configuration file merge tests

use capver::app::cli::args::Args;
use capver::app::cli::config;
use std::io::Write;

fn args_with_config(config_path: &std::path::Path, extra: &[&str]) -> Args {
    let mut argv = vec!["capver", "--config-file", config_path.to_str().unwrap()];
    argv.extend_from_slice(extra);
    argv.push("version");
    Args::parse_from_args(argv).unwrap()
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_config_file_fills_unset_values() {
    let file = write_config(
        r#"
        format = "json"
        log-level = "debug"
        color = true
        "#,
    );

    let mut args = args_with_config(file.path(), &[]);
    let loaded = config::load_config_file(&mut args).unwrap();

    assert!(loaded.is_some());
    assert_eq!(args.format.as_deref(), Some("json"));
    assert_eq!(args.log_level.as_deref(), Some("debug"));
    assert!(args.color);
}

#[test]
fn test_command_line_overrides_config_file() {
    let file = write_config("format = \"json\"\nlog-level = \"debug\"\n");

    let mut args = args_with_config(file.path(), &["--format", "text"]);
    config::load_config_file(&mut args).unwrap();

    assert_eq!(args.format.as_deref(), Some("text"));
    assert_eq!(args.log_level.as_deref(), Some("debug"));
}

#[test]
fn test_missing_explicit_config_file_errors() {
    let mut args =
        Args::parse_from_args(["capver", "--config-file", "/no/such/capver.toml", "version"])
            .unwrap();
    let err = config::load_config_file(&mut args).unwrap_err();
    assert!(err.contains("does not exist"));
}

#[test]
fn test_malformed_config_file_errors() {
    let file = write_config("format = [not toml");
    let mut args = args_with_config(file.path(), &[]);
    let err = config::load_config_file(&mut args).unwrap_err();
    assert!(err.contains("parsing"));
}

#[test]
fn test_invalid_config_value_errors() {
    let file = write_config("log-level = \"loud\"\n");
    let mut args = args_with_config(file.path(), &[]);
    let err = config::load_config_file(&mut args).unwrap_err();
    assert!(err.contains("log-level"));
}
