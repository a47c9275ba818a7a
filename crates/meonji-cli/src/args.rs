use crate::types::{ColorChoice, LogLevel};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "meonji")]
#[command(about = "Seoul air quality dashboards for the terminal", long_about = None)]
#[command(version, disable_help_subcommand = true)]
pub struct Cli {
    /// Config file (default: $MEONJI_CONFIG or <config dir>/meonji/config.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Log level for diagnostics on stderr (default: $RUST_LOG or warn)
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Seoul-wide average conditions and forecasts
    Seoul {
        #[command(flatten)]
        records: RecordArgs,
    },

    /// Conditions for one district, plus the Seoul forecasts
    District {
        /// District name (jongno), -gu name (jongnogu) or station code (111123)
        id: String,

        #[command(flatten)]
        records: RecordArgs,
    },

    /// List every district and the identifiers it accepts
    Stations,

    /// Show usage
    Help,
}

/// Record payloads to render. Each file holds one JSON record, either bare
/// or wrapped in the feed's `{"<Service>": {"row": [...]}}` envelope.
#[derive(Debug, Clone, Default, Args)]
pub struct RecordArgs {
    /// Current measurement record
    #[arg(long, value_name = "FILE")]
    pub current: Option<PathBuf>,

    /// PM-10 forecast record
    #[arg(long, value_name = "FILE")]
    pub pm10: Option<PathBuf>,

    /// PM-2.5 forecast record
    #[arg(long, value_name = "FILE")]
    pub pm25: Option<PathBuf>,

    /// Date to judge forecasts against (default: today in Seoul)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,
}
