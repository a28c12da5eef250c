pub mod argument_parsing;
pub mod command_output;
pub mod toml_config;
