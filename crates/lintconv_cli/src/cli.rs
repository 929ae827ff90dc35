//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// lintconv - Convert linter and compiler output into diagnostics
#[derive(Parser)]
#[command(name = "lintconv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input files ("-" or none reads stdin)
    pub files: Vec<PathBuf>,

    /// Input format name (see --list)
    #[arg(short, long, value_name = "NAME")]
    pub format: Option<String>,

    /// Errorformat rule, may be repeated
    #[arg(short, long = "efm", value_name = "RULE")]
    pub efm: Vec<String>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// List supported formats and exit
    #[arg(long)]
    pub list: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Rdjsonl)]
    pub output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// How converted diagnostics are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `path:line:col: message` lines
    Text,
    /// A pretty-printed JSON array of check results
    Json,
    /// One JSON diagnostic per line
    Rdjsonl,
}
