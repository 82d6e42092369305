//! CLI argument definitions for the HCP targeting tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use hcp_model::UnknownBehaviorPolicy;
use hcp_model::options::{DEFAULT_HCP_COUNT, DEFAULT_SEED};
use hcp_report::ExportFormat;

#[derive(Parser)]
#[command(
    name = "hcp",
    version,
    about = "HCP targeting - rank, segment, and pick outreach channels for providers",
    long_about = "Rank healthcare professionals by weighted prescription value.\n\n\
                  Providers are split into Top 20% / Middle 30% / Bottom 50% tiers and\n\
                  assigned an In-person or Email channel. Input is a CSV file or a\n\
                  seeded synthetic table."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow provider identifiers in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rank providers and print tiers, channels, and distributions.
    Rank(RankArgs),

    /// Write a synthetic provider table.
    Generate(GenerateArgs),

    /// List the built-in specialties and state codes.
    Specialties,
}

#[derive(Args)]
pub struct SourceArgs {
    /// Provider CSV (NPI Id, speciality, rx value, state_code, writing_behavior).
    ///
    /// When omitted a synthetic table is generated from --seed and --count.
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Seed for synthetic generation.
    #[arg(long = "seed", default_value_t = DEFAULT_SEED, conflicts_with = "input")]
    pub seed: u64,

    /// Number of synthetic providers.
    #[arg(long = "count", default_value_t = DEFAULT_HCP_COUNT, conflicts_with = "input")]
    pub count: usize,

    /// How to treat writing_behavior values other than High/Medium/Low.
    #[arg(long = "unknown-behavior", value_enum, default_value = "reject")]
    pub unknown_behavior: UnknownBehaviorArg,
}

#[derive(Parser)]
pub struct RankArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Keep only these state codes (repeat or comma-separate).
    #[arg(long = "state", value_name = "CODE", value_delimiter = ',')]
    pub states: Vec<String>,

    /// Keep only these specialties (repeat or comma-separate).
    #[arg(long = "specialty", value_name = "NAME", value_delimiter = ',')]
    pub specialties: Vec<String>,

    /// Case-insensitive substring search on NPI Id.
    #[arg(long = "search-npi", value_name = "TEXT")]
    pub search_npi: Option<String>,

    /// Case-insensitive substring search on specialty.
    #[arg(long = "search-specialty", value_name = "TEXT")]
    pub search_specialty: Option<String>,

    /// Maximum rows printed for the priority list and affinity table.
    #[arg(long = "limit", default_value_t = 25)]
    pub limit: usize,

    /// Export the (filtered) ranked table.
    #[arg(long = "export", value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Export the (filtered) channel-affinity table.
    #[arg(long = "export-affinity", value_name = "PATH")]
    pub export_affinity: Option<PathBuf>,

    /// Export format (default: from the file extension).
    #[arg(long = "format", value_enum)]
    pub format: Option<ExportFormatArg>,

    /// Skip the distribution charts.
    #[arg(long = "no-charts")]
    pub no_charts: bool,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Seed for synthetic generation.
    #[arg(long = "seed", default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of synthetic providers.
    #[arg(long = "count", default_value_t = DEFAULT_HCP_COUNT)]
    pub count: usize,

    /// Output file for the generated table.
    #[arg(long = "output", value_name = "PATH")]
    pub output: PathBuf,

    /// Output format (default: from the file extension).
    #[arg(long = "format", value_enum)]
    pub format: Option<ExportFormatArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum UnknownBehaviorArg {
    Reject,
    Low,
    Exclude,
}

impl From<UnknownBehaviorArg> for UnknownBehaviorPolicy {
    fn from(arg: UnknownBehaviorArg) -> Self {
        match arg {
            UnknownBehaviorArg::Reject => UnknownBehaviorPolicy::Reject,
            UnknownBehaviorArg::Low => UnknownBehaviorPolicy::TreatAsLow,
            UnknownBehaviorArg::Exclude => UnknownBehaviorPolicy::Exclude,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Csv,
    Json,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Csv => ExportFormat::Csv,
            ExportFormatArg::Json => ExportFormat::Json,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
