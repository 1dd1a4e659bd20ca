//! CLI argument definitions for the Mondrian anonymizer.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use mondrian_model::Strategy;

#[derive(Parser)]
#[command(
    name = "mondrian",
    version,
    about = "Mondrian multidimensional k-anonymity tool",
    long_about = "Anonymize a CSV dataset by Mondrian multidimensional k-anonymity.\n\n\
                  Records are recursively partitioned into equivalence classes of at\n\
                  least K records along the chosen quasi-identifier columns, then each\n\
                  class's quasi-identifier values are generalized to the set of values\n\
                  observed within it."
)]
pub struct Cli {
    /// Path to the CSV file to anonymize.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Comma-separated quasi-identifier column indices (0-based).
    #[arg(
        long = "qids",
        value_name = "INDICES",
        value_delimiter = ',',
        required = true
    )]
    pub qids: Vec<usize>,

    /// Minimum equivalence class size (K).
    #[arg(short = 'k', long = "k", value_name = "K")]
    pub k: usize,

    /// Destination path for the anonymized CSV.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: PathBuf,

    /// Splitting strategy.
    #[arg(long = "strategy", value_enum, default_value = "strict")]
    pub strategy: StrategyArg,

    /// Treat the first input row as a header: skip it for partitioning and
    /// carry it through to the output.
    #[arg(long = "has-header")]
    pub has_header: bool,

    /// Run the full pipeline and report, but write no output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

/// CLI splitting strategy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    /// All records at or below the median go to one side.
    Strict,
    /// Median-valued records are distributed across both sides.
    Relaxed,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Strict => Strategy::Strict,
            StrategyArg::Relaxed => Strategy::Relaxed,
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
