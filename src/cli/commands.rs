use std::path::PathBuf;
use clap::{Args, Parser, Subcommand, ValueEnum};
use admin_reports::models::ReportStatus;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_TIMESTAMP"),
    ")"
);

#[derive(Parser)]
#[command(
    name = "admin-reports",
    version,
    long_version = LONG_VERSION,
    about = "Inspect and process user reports through the admin API"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Reports API base URL (overrides env and config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    pub compact: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show report statistics
    Summary,
    /// List reports awaiting review
    List,
    /// Show a single report
    Show(ShowArgs),
    /// Submit a processing decision
    Process(ProcessArgs),
}

#[derive(Args, Clone)]
pub struct ShowArgs {
    /// Report identifier
    pub report_id: String,
}

#[derive(Args, Clone)]
pub struct ProcessArgs {
    /// Raw JSON payload, sent as-is
    #[arg(long, conflicts_with_all = ["payload_file", "report_id", "decision"])]
    pub payload: Option<String>,

    /// File containing the JSON payload
    #[arg(long, conflicts_with_all = ["report_id", "decision"])]
    pub payload_file: Option<PathBuf>,

    /// Report to decide on
    #[arg(long, requires = "decision")]
    pub report_id: Option<i64>,

    /// Decision for the report
    #[arg(long, value_enum, requires = "report_id")]
    pub decision: Option<Decision>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Decision {
    Valid,
    Rejected,
}

impl From<Decision> for ReportStatus {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Valid => ReportStatus::Valid,
            Decision::Rejected => ReportStatus::Rejected,
        }
    }
}
