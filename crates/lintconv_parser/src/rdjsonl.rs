//! Line-delimited JSON parser.
//!
//! Each non-empty line is one [`Diagnostic`] encoded as a JSON object.

use std::io::{BufRead, BufReader, Read};

use lintconv_diagnostic::{CheckResult, Diagnostic};
use tracing::debug;

use crate::{ParseError, Parser};

/// Parser for line-delimited JSON diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct RdjsonlParser;

impl RdjsonlParser {
    /// Creates a new rdjsonl parser.
    pub fn new() -> Self {
        Self
    }
}

impl Parser for RdjsonlParser {
    fn name(&self) -> &str {
        "rdjsonl"
    }

    fn parse(&self, reader: &mut dyn Read) -> Result<Vec<CheckResult>, ParseError> {
        let mut reader = BufReader::new(reader);
        let mut results = Vec::new();
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let record = strip_line_ending(&buf);
            if record.is_empty() {
                continue;
            }
            let diagnostic: Diagnostic =
                serde_json::from_slice(record).map_err(|source| ParseError::DecodeRecord {
                    line: line_no,
                    source,
                })?;
            let raw = String::from_utf8_lossy(record).into_owned();
            results.push(CheckResult::new(diagnostic, vec![raw]));
        }

        debug!("Decoded {} rdjsonl records", results.len());
        Ok(results)
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
