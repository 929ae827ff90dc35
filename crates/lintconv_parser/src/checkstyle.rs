//! Checkstyle XML parser.
//!
//! Accepts the format written by checkstyle itself and by the many
//! "checkstyle" formatters of other linters (eslint, golangci-lint, ...):
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <checkstyle version="4.3">
//!   <file name="a.go">
//!     <error line="3" column="5" severity="error" message="unused var" source="lint/unused"/>
//!   </file>
//! </checkstyle>
//! ```

use std::io::Read;

use lintconv_diagnostic::{CheckResult, Diagnostic};
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::{Deserialize, Deserializer, Serialize, de};
use tracing::debug;

use crate::{ParseError, Parser};

const FORMAT: &str = "checkstyle";

/// Root `<checkstyle>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "checkstyle")]
pub struct CheckstyleResult {
    /// `version` attribute.
    #[serde(rename = "@version", default)]
    pub version: String,

    /// `<file>` children in document order.
    #[serde(rename = "file", default)]
    pub files: Vec<CheckstyleFile>,
}

/// `<file name="...">` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckstyleFile {
    /// `name` attribute.
    #[serde(rename = "@name", default)]
    pub name: String,

    /// `<error>` children in document order.
    #[serde(rename = "error", default)]
    pub errors: Vec<CheckstyleError>,
}

/// `<error line=".." column=".." severity=".." message=".." source=".."/>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckstyleError {
    /// `line` attribute (required, `0` when empty).
    #[serde(rename = "@line", deserialize_with = "empty_as_zero")]
    pub line: u32,

    /// `column` attribute, `0` when absent or empty.
    #[serde(rename = "@column", default, deserialize_with = "empty_as_zero")]
    pub column: u32,

    /// `message` attribute (required).
    #[serde(rename = "@message")]
    pub message: String,

    /// `severity` attribute.
    #[serde(rename = "@severity", default)]
    pub severity: String,

    /// `source` attribute, usually the rule id.
    #[serde(rename = "@source", default)]
    pub source: String,
}

/// Reads a numeric attribute, treating a blank value as `0`.
fn empty_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }
    value.parse().map_err(de::Error::custom)
}

impl CheckstyleResult {
    /// Decodes a checkstyle document.
    pub fn from_xml(xml: &str) -> Result<Self, ParseError> {
        let result: Self =
            quick_xml::de::from_str(xml).map_err(|e| ParseError::decode(FORMAT, e))?;

        match root_element(xml).map_err(|e| ParseError::decode(FORMAT, e))? {
            Some(name) if name == FORMAT => Ok(result),
            Some(name) => Err(ParseError::decode(
                FORMAT,
                format!("expected element <checkstyle> but found <{}>", name),
            )),
            None => Err(ParseError::decode(FORMAT, "document has no root element")),
        }
    }

    /// Encodes this document as XML.
    pub fn to_xml(&self) -> Result<String, ParseError> {
        quick_xml::se::to_string(self).map_err(|e| ParseError::encode(FORMAT, e))
    }

    /// Flattens the tree into check results, files first, then errors.
    pub fn into_check_results(self) -> Vec<CheckResult> {
        let mut results = Vec::new();
        for file in self.files {
            for error in file.errors {
                let line = format!(
                    "{}:{}:{}: {}: {} ({})",
                    file.name, error.line, error.column, error.severity, error.message, error.source
                );
                let diagnostic =
                    Diagnostic::new(file.name.clone(), error.line, error.column, error.message);
                results.push(CheckResult::new(diagnostic, vec![line]));
            }
        }
        results
    }
}

/// Local name of the first element in the document.
fn root_element(xml: &str) -> Result<Option<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                return Ok(Some(
                    String::from_utf8_lossy(e.local_name().as_ref()).into_owned(),
                ));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

/// Parser for checkstyle XML documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckstyleParser;

impl CheckstyleParser {
    /// Creates a new checkstyle parser.
    pub fn new() -> Self {
        Self
    }
}

impl Parser for CheckstyleParser {
    fn name(&self) -> &str {
        FORMAT
    }

    fn parse(&self, reader: &mut dyn Read) -> Result<Vec<CheckResult>, ParseError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let xml = String::from_utf8(bytes).map_err(|e| ParseError::decode(FORMAT, e))?;

        let document = CheckstyleResult::from_xml(&xml)?;
        debug!(
            "Decoded checkstyle document with {} files",
            document.files.len()
        );

        Ok(document.into_check_results())
    }
}
