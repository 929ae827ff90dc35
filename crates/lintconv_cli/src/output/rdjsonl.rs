//! Line-delimited JSON output formatter

use lintconv_diagnostic::CheckResult;
use miette::{IntoDiagnostic, Result};

pub fn output_rdjsonl(results: &[CheckResult]) -> Result<()> {
    for result in results {
        println!(
            "{}",
            serde_json::to_string(&result.diagnostic).into_diagnostic()?
        );
    }
    Ok(())
}
