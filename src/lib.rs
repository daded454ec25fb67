pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::AppConfig;

pub use core::engine::MatchEngine;
pub use domain::model::{CompatibilityReport, MatchScore, PersonSummary, Sign};
pub use utils::error::{MatchError, Result};
