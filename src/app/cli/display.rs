//! Response rendering for the CLI
//!
//! Responses are flat field/value mappings; text output prints one
//! aligned `field: value` line per entry, JSON output prints the wire
//! form the host shell would receive.

use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_arg(value: Option<&str>) -> Self {
        match value {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

/// Render a response for the selected output format
pub fn render_response<T: Serialize>(
    response: &T,
    format: OutputFormat,
    use_colors: bool,
) -> Result<String, serde_json::Error> {
    let value = serde_json::to_value(response)?;
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(&value)?,
        OutputFormat::Text => render_text(&value, use_colors),
    })
}

fn render_text(value: &serde_json::Value, use_colors: bool) -> String {
    let Some(object) = value.as_object() else {
        return scalar_text(value);
    };

    let width = object.keys().map(String::len).max().unwrap_or(0);
    let mut lines = Vec::with_capacity(object.len());
    for (key, field) in object {
        let label = format!("{key:width$}");
        let label = if use_colors {
            label.cyan().to_string()
        } else {
            label
        };
        lines.push(format!("{label}  {}", scalar_text(field)));
    }
    lines.join("\n")
}

fn scalar_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => {
            if items.is_empty() {
                "-".to_string()
            } else {
                items
                    .iter()
                    .map(scalar_text)
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::api::{VersionInfo, PLATFORM_TAG};

    fn sample() -> VersionInfo {
        VersionInfo {
            version: "1.2.3".to_string(),
            build_number: "42".to_string(),
            platform: PLATFORM_TAG.to_string(),
        }
    }

    #[test]
    fn test_json_output_uses_wire_names() {
        let out = render_response(&sample(), OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["version"], "1.2.3");
        assert_eq!(value["buildNumber"], "42");
        assert_eq!(value["platform"], PLATFORM_TAG);
    }

    #[test]
    fn test_text_output_lists_fields() {
        let out = render_response(&sample(), OutputFormat::Text, false).unwrap();
        assert!(out.contains("version"));
        assert!(out.contains("1.2.3"));
        assert!(out.contains("buildNumber"));
        assert!(out.contains("42"));
    }

    #[test]
    fn test_empty_arrays_render_as_dash() {
        let value = serde_json::json!({"suggestions": []});
        assert_eq!(render_text(&value, false), "suggestions  -");
    }

    #[test]
    fn test_format_selection() {
        assert_eq!(OutputFormat::from_arg(Some("json")), OutputFormat::Json);
        assert_eq!(OutputFormat::from_arg(Some("text")), OutputFormat::Text);
        assert_eq!(OutputFormat::from_arg(None), OutputFormat::Text);
    }
}
