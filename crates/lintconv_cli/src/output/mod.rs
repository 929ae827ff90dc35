//! Output formatting module

mod json;
mod rdjsonl;
mod text;

use lintconv_diagnostic::CheckResult;
use lintconv_parser::FormatInfo;
use miette::Result;

use crate::cli::OutputFormat;

pub fn output_results(results: &[CheckResult], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_json(results)?,
        OutputFormat::Rdjsonl => rdjsonl::output_rdjsonl(results)?,
        OutputFormat::Text => text::output_text(results),
    }

    Ok(())
}

pub fn output_formats(formats: &[FormatInfo]) {
    let width = formats.iter().map(|f| f.name.len()).max().unwrap_or(0);

    for format in formats {
        if format.url.is_empty() {
            println!("{:<width$}  {}", format.name, format.description);
        } else {
            println!(
                "{:<width$}  {} - {}",
                format.name, format.description, format.url
            );
        }
    }
}
