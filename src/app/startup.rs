//! Application startup: argument parsing, configuration merge, logging
//! initialisation and command dispatch.

use std::io::IsTerminal;

use crate::app::cli::args::{Args, Command};
use crate::app::cli::config;
use crate::app::cli::display::{self, OutputFormat};
use crate::core::logging;
use crate::plugin::api::{PluginError, UpdateOptions, VersionManagerPlugin};

/// Initialize application startup
pub fn startup() {
    let mut args = <Args as clap::Parser>::parse();

    if let Err(e) = config::load_config_file(&mut args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let use_colors = (args.color || std::io::stdout().is_terminal()) && !args.no_color;
    colored::control::set_override(use_colors);

    if let Err(e) = logging::init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        args.log_file.as_deref().and_then(|p| p.to_str()),
        use_colors,
    ) {
        eprintln!("Error initialising logging: {e}");
        std::process::exit(1);
    }

    log::debug!(
        "capver {} starting (api {}, built {}, {})",
        env!("CARGO_PKG_VERSION"),
        crate::core::version::get_api_version(),
        crate::core::version::build_time(),
        crate::core::version::git_hash()
    );

    let plugin = VersionManagerPlugin::with_build_info();
    let format = OutputFormat::from_arg(args.format.as_deref());

    match run_command(&plugin, &args.command, format, use_colors) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Execute one subcommand against the plugin and render the response
pub fn run_command(
    plugin: &VersionManagerPlugin,
    command: &Command,
    format: OutputFormat,
    use_colors: bool,
) -> Result<String, PluginError> {
    let rendered = match command {
        Command::Version => {
            display::render_response(&plugin.get_version()?, format, use_colors)?
        }
        Command::Package => {
            display::render_response(&plugin.get_package_info()?, format, use_colors)?
        }
        Command::LastUpdate => {
            display::render_response(&plugin.get_last_update()?, format, use_colors)?
        }
        Command::Status => {
            display::render_response(&plugin.check_version_status()?, format, use_colors)?
        }
        Command::Update { version, build } => {
            let options = UpdateOptions {
                version: version.clone().unwrap_or_default(),
                build_number: build.unwrap_or(1),
            };
            display::render_response(&plugin.update_version(options), format, use_colors)?
        }
        Command::Trapeze { config } => {
            let config_value = match config {
                Some(path) => serde_json::json!({ "configPath": path.display().to_string() }),
                None => serde_json::Value::Null,
            };
            display::render_response(
                &plugin.apply_trapeze_config(&config_value),
                format,
                use_colors,
            )?
        }
    };
    Ok(rendered)
}
