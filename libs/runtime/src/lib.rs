//! Process-level plumbing shared by the server binary: layered configuration
//! and logging initialization.

pub mod config;
pub mod logging;
pub mod paths;

pub use config::{
    default_logging_config, AppConfig, AppConfigProvider, CliArgs, DatabaseConfig,
    LoggingConfig, Section, ServerConfig,
};
