//! CLI argument definitions for the question set toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "qset",
    version,
    about = "Question set toolkit - check, format, and preview agent question sets",
    long_about = "Work with the question set files behind conversational agents.\n\n\
                  Checks sources against the expected schema, rewrites them to the\n\
                  canonical encoding, and renders a table preview of the derived set."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

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

#[derive(Subcommand)]
pub enum Command {
    /// Check a question set source against the expected schema.
    Check(CheckArgs),

    /// Rewrite a question set source to the canonical encoding.
    Fmt(FmtArgs),

    /// Render a table preview of the derived question set.
    Show(ShowArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the question set JSON file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Treat advisory problems (short name, no questions) as failures.
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Parser)]
pub struct FmtArgs {
    /// Path to the question set JSON file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Report whether the file would change without rewriting it.
    #[arg(long = "check")]
    pub check: bool,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Path to the question set JSON file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
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
