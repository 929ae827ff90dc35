//! JSON output formatter

use lintconv_diagnostic::CheckResult;
use miette::{IntoDiagnostic, Result};

pub fn output_json(results: &[CheckResult]) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(results).into_diagnostic()?
    );
    Ok(())
}
