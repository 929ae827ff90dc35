//! Position and range types for diagnostic locations.

use serde::{Deserialize, Serialize};

/// A position in a source file.
///
/// Both fields are 1-indexed when known. `0` means the producing tool did not
/// report the value.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    /// Line number.
    #[serde(default)]
    pub line: u32,
    /// Column number.
    #[serde(default)]
    pub column: u32,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Returns true if neither line nor column is known.
    #[inline]
    pub const fn is_unknown(&self) -> bool {
        self.line == 0 && self.column == 0
    }
}

/// A range between two positions. The end is optional because most tools
/// only report where a finding starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    /// Start position.
    #[serde(default)]
    pub start: Position,
    /// End position, if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Position>,
}

impl Range {
    /// Creates a range that only has a start position.
    #[inline]
    pub const fn at(start: Position) -> Self {
        Self { start, end: None }
    }

    /// Creates a range with both ends.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }
}

/// File location of a diagnostic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Path as reported by the tool. Never checked against the file system.
    #[serde(default)]
    pub path: String,

    /// Range inside the file. Absent for file-level findings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
}

impl Location {
    /// Creates a location with a start position.
    pub fn new(path: impl Into<String>, start: Position) -> Self {
        Self {
            path: path.into(),
            range: Some(Range::at(start)),
        }
    }

    /// Returns the start position, or the unknown position when no range is set.
    pub fn start(&self) -> Position {
        self.range.map(|r| r.start).unwrap_or_default()
    }
}
