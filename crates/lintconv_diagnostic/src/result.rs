//! Parser output records.

use serde::{Deserialize, Serialize};

use crate::Diagnostic;

/// A diagnostic paired with the raw text lines that produced it.
///
/// `lines` is only kept so the original output can be echoed back to users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// The normalized diagnostic.
    pub diagnostic: Diagnostic,

    /// Raw source lines.
    #[serde(default)]
    pub lines: Vec<String>,
}

impl CheckResult {
    /// Creates a new check result.
    pub fn new(diagnostic: Diagnostic, lines: Vec<String>) -> Self {
        Self { diagnostic, lines }
    }
}
