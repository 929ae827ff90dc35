//! Text output formatter

use std::collections::BTreeSet;

use lintconv_diagnostic::CheckResult;

pub fn output_text(results: &[CheckResult]) {
    for result in results {
        println!("{}", result.diagnostic);
    }

    let files: BTreeSet<_> = results.iter().map(|r| r.diagnostic.path()).collect();

    println!();
    println!(
        "Found {} diagnostics in {} files",
        results.len(),
        files.len()
    );
}
