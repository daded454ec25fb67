#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, ProfileAction, TimelineAction};
pub use toml_config::AppConfig;
