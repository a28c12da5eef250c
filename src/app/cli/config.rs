//! TOML configuration file loading
//!
//! Fills argument values the command line left unset. An explicitly
//! named config file must exist; the default location is used only if
//! present. Command-line values always win over file values.

use std::path::PathBuf;

use super::args::Args;

/// Keys recognised in the config file, all optional:
/// `format`, `color`, `log-level`, `log-format`, `log-file`.
pub fn apply_toml_values(args: &mut Args, config: &toml::Table) -> Result<(), String> {
    if args.format.is_none() {
        args.format = get_string(config, "format", &["text", "json"])?;
    }
    if !args.color && !args.no_color {
        match get_bool(config, "color")? {
            Some(true) => args.color = true,
            Some(false) => args.no_color = true,
            None => {}
        }
    }
    if args.log_level.is_none() {
        args.log_level = get_string(
            config,
            "log-level",
            &["trace", "debug", "info", "warn", "error", "off"],
        )?;
    }
    if args.log_format.is_none() {
        args.log_format = get_string(config, "log-format", &["text", "json"])?;
    }
    if args.log_file.is_none() {
        args.log_file = get_string(config, "log-file", &[])?.map(PathBuf::from);
    }
    Ok(())
}

/// Resolve which config file to read, if any
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<Option<PathBuf>, String> {
    match explicit {
        Some(path) => {
            if path.exists() {
                Ok(Some(path))
            } else {
                Err(format!(
                    "The specified configuration file does not exist: {}",
                    path.display()
                ))
            }
        }
        None => {
            let default_path = dirs::config_dir().map(|d| d.join("capver").join("capver.toml"));
            match default_path {
                Some(path) if path.exists() => Ok(Some(path)),
                _ => Ok(None),
            }
        }
    }
}

/// Load the resolved config file (if any) into `args`
pub fn load_config_file(args: &mut Args) -> Result<Option<toml::Table>, String> {
    let Some(path) = resolve_config_path(args.config_file.clone())? else {
        return Ok(None);
    };

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| format!("Error reading configuration file {}: {}", path.display(), e))?;
    let config = contents
        .parse::<toml::Table>()
        .map_err(|e| format!("Error parsing configuration file {}: {}", path.display(), e))?;
    apply_toml_values(args, &config)
        .map_err(|e| format!("Error in configuration file {}: {}", path.display(), e))?;
    Ok(Some(config))
}

fn get_string(
    config: &toml::Table,
    key: &str,
    allowed: &[&str],
) -> Result<Option<String>, String> {
    match config.get(key) {
        None => Ok(None),
        Some(toml::Value::String(s)) => {
            if !allowed.is_empty() && !allowed.contains(&s.as_str()) {
                return Err(format!(
                    "invalid value '{}' for '{}', expected one of: {}",
                    s,
                    key,
                    allowed.join(", ")
                ));
            }
            Ok(Some(s.clone()))
        }
        Some(_) => Err(format!("invalid type for '{key}': expected a string")),
    }
}

fn get_bool(config: &toml::Table, key: &str) -> Result<Option<bool>, String> {
    match config.get(key) {
        None => Ok(None),
        Some(toml::Value::Boolean(b)) => Ok(Some(*b)),
        Some(_) => Err(format!("invalid type for '{key}': expected a boolean")),
    }
}
