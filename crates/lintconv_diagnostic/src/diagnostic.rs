//! The canonical diagnostic record.
//!
//! The JSON shape follows the reviewdog diagnostic format (rdjson / rdjsonl),
//! so records written by other tools decode without remapping.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Location, Position, Range};

/// Severity reported by a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// The tool reported a severity this format does not know.
    UnknownSeverity,
    /// Error.
    Error,
    /// Warning.
    Warning,
    /// Informational.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::UnknownSeverity => "unknown",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        f.write_str(s)
    }
}

/// The tool that produced a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Source {
    /// Tool name.
    #[serde(default)]
    pub name: String,
    /// Tool homepage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Rule identifier of a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Code {
    /// Rule code, e.g. `SA4006`.
    #[serde(default)]
    pub value: String,
    /// Documentation URL for the rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A suggested replacement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    /// Range to replace.
    #[serde(default)]
    pub range: Range,
    /// Replacement text.
    #[serde(default)]
    pub text: String,
}

/// One finding at a file location.
///
/// Fields this crate does not model are kept in [`Diagnostic::extra`] and
/// written back unchanged on serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// The diagnostic message.
    #[serde(default)]
    pub message: String,

    /// Where the finding is.
    #[serde(default)]
    pub location: Location,

    /// Severity, if the tool reported one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    /// Producing tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,

    /// Rule code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Code>,

    /// Suggested fixes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,

    /// Raw output the diagnostic was derived from.
    #[serde(
        default,
        alias = "original_output",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_output: Option<String>,

    /// Unmodeled fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Diagnostic {
    /// Creates a diagnostic at `path:line:column`.
    pub fn new(
        path: impl Into<String>,
        line: u32,
        column: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            location: Location::new(path, Position::new(line, column)),
            ..Default::default()
        }
    }

    /// Sets the severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Sets the source tool.
    pub fn with_source(mut self, name: impl Into<String>) -> Self {
        self.source = Some(Source {
            name: name.into(),
            url: None,
        });
        self
    }

    /// Sets the rule code.
    pub fn with_code(mut self, value: impl Into<String>) -> Self {
        self.code = Some(Code {
            value: value.into(),
            url: None,
        });
        self
    }

    /// Sets the end position.
    pub fn with_end(mut self, end: Position) -> Self {
        let start = self.location.start();
        self.location.range = Some(Range::new(start, end));
        self
    }

    /// File path.
    pub fn path(&self) -> &str {
        &self.location.path
    }

    /// Start line, `0` when unknown.
    pub fn line(&self) -> u32 {
        self.location.start().line
    }

    /// Start column, `0` when unknown.
    pub fn column(&self) -> u32 {
        self.location.start().column
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}: ", self.path(), self.line(), self.column())?;
        if let Some(severity) = self.severity {
            write!(f, "{}: ", severity)?;
        }
        f.write_str(&self.message)
    }
}
