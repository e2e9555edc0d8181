#[cfg(feature = "cli")]
pub mod cli;
pub mod script_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, OutputFormat};
pub use script_config::ScriptConfig;
