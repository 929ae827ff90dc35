//! Errorformat parser for free-form text output.

use std::io::{BufReader, Read};

use lintconv_diagnostic::{CheckResult, Diagnostic};
use lintconv_errorformat::Errorformat;
use tracing::debug;

use crate::{ParseError, Parser};

/// Parser that matches each line of tool output against errorformat rules.
///
/// Lines that no rule recognizes are dropped: most of a tool's output is
/// noise, so a non-matching line is not an error.
#[derive(Debug)]
pub struct ErrorformatParser {
    efm: Errorformat,
}

impl ErrorformatParser {
    /// Wraps an already compiled errorformat.
    pub fn new(efm: Errorformat) -> Self {
        Self { efm }
    }

    /// Compiles `rules` and wraps the result.
    pub fn from_rules<S: AsRef<str>>(rules: &[S]) -> Result<Self, ParseError> {
        Ok(Self::new(Errorformat::new(rules)?))
    }

    /// The compiled errorformat.
    pub fn errorformat(&self) -> &Errorformat {
        &self.efm
    }
}

impl Parser for ErrorformatParser {
    fn name(&self) -> &str {
        "errorformat"
    }

    fn parse(&self, reader: &mut dyn Read) -> Result<Vec<CheckResult>, ParseError> {
        let mut results = Vec::new();
        let mut dropped = 0usize;

        for entry in self.efm.scanner(BufReader::new(reader)) {
            let entry = entry?;
            if !entry.valid {
                dropped += 1;
                continue;
            }
            let diagnostic = Diagnostic::new(entry.filename, entry.lnum, entry.col, entry.text);
            results.push(CheckResult::new(diagnostic, entry.lines));
        }

        debug!(
            "errorformat parser produced {} results ({} entries dropped)",
            results.len(),
            dropped
        );
        Ok(results)
    }
}
