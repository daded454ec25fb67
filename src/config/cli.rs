use crate::config::toml_config::AppConfig;
use crate::utils::error::Result;
use crate::utils::validation::{parse_date, Validate};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "cosmic-match")]
#[command(about = "Zodiac signs, birthday trivia and playful compatibility scores")]
pub struct CliConfig {
    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON file holding saved dates, timeline and profiles
    #[arg(long, global = true)]
    pub store: Option<String>,

    /// Seed the score variance for reproducible results
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Sign, weekday and age for one birthday (remembered for `restore`)
    Sign {
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
    },
    /// Score two birthdays
    Match {
        #[arg(value_parser = parse_date)]
        date1: NaiveDate,
        #[arg(value_parser = parse_date)]
        date2: NaiveDate,
        /// Show how the score was put together
        #[arg(long)]
        breakdown: bool,
    },
    /// Show the last saved birthday and pair again
    Restore,
    /// Ages, school grades and badges for a future year
    Milestones {
        #[arg(value_parser = parse_date)]
        date1: NaiveDate,
        #[arg(value_parser = parse_date)]
        date2: NaiveDate,
        #[arg(long, conflicts_with = "now")]
        year: Option<i32>,
        /// Use the current year instead of looking ahead
        #[arg(long)]
        now: bool,
    },
    /// The couple's love timeline
    Timeline {
        #[command(subcommand)]
        action: TimelineAction,
    },
    /// Saved couple profiles
    Profiles {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum TimelineAction {
    List,
    Add {
        title: String,
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
        #[arg(long)]
        emoji: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Remove {
        id: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ProfileAction {
    List,
    /// Score a pair and save it; a label is suggested when omitted
    Save {
        #[arg(value_parser = parse_date)]
        date1: NaiveDate,
        #[arg(value_parser = parse_date)]
        date2: NaiveDate,
        #[arg(long)]
        label: Option<String>,
    },
    Delete {
        id: String,
    },
    Check {
        id: String,
    },
}

impl CliConfig {
    /// Loads the config file (or defaults), then lets flags override it.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(store) = &self.store {
            config.storage.path = store.clone();
        }
        if let Some(seed) = self.seed {
            config.scoring.seed = Some(seed);
        }
        config.logging.verbose |= self.verbose;
        config.logging.json |= self.log_json;

        config.validate()?;
        Ok(config)
    }
}
