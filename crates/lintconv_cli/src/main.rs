//! lintconv CLI
//!
//! Converts linter and compiler output into canonical diagnostics.

mod cli;
mod output;

use std::fs::File;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser as _;
use miette::{IntoDiagnostic, Result, WrapErr, miette};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use lintconv_diagnostic::CheckResult;
use lintconv_parser::{FormatParser, Parser, ParserOptions, new_parser, supported_formats};

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.list {
        output::output_formats(&supported_formats());
        return Ok(());
    }

    let options = resolve_options(&cli)?;
    let parser = new_parser(&options).into_diagnostic()?;
    debug!("Using {} parser", parser.name());

    let mut results = Vec::new();
    if cli.files.is_empty() {
        results.extend(parse_stdin(&parser)?);
    } else {
        for path in &cli.files {
            if path.as_os_str() == "-" {
                results.extend(parse_stdin(&parser)?);
            } else {
                results.extend(parse_file(&parser, path)?);
            }
        }
    }

    info!("Converted {} diagnostics", results.len());
    output::output_results(&results, cli.output)
}

/// Picks parser options from flags, then `--config`, then a discovered file.
///
/// Any selection flag replaces the config file entirely.
fn resolve_options(cli: &Cli) -> Result<ParserOptions> {
    if cli.format.is_some() || !cli.efm.is_empty() {
        return Ok(ParserOptions {
            format_name: cli.format.clone(),
            errorformat: cli.efm.clone(),
        });
    }

    let path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => {
            let cwd = std::env::current_dir().into_diagnostic()?;
            ParserOptions::discover(cwd)
        }
    };

    let Some(path) = path else {
        return Err(miette!(
            "No input format selected. Pass --format or --efm, or create a .lintconv.json file"
        ));
    };

    debug!("Loading config from {}", path.display());
    ParserOptions::from_file(&path).into_diagnostic()
}

fn parse_file(parser: &FormatParser, path: &Path) -> Result<Vec<CheckResult>> {
    let mut file = File::open(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to open {}", path.display()))?;

    parser
        .parse(&mut file)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to parse {}", path.display()))
}

fn parse_stdin(parser: &FormatParser) -> Result<Vec<CheckResult>> {
    let mut stdin = io::stdin().lock();
    parser
        .parse(&mut stdin)
        .into_diagnostic()
        .wrap_err("Failed to parse stdin")
}
