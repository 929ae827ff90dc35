//! Errorformat compilation errors.

use thiserror::Error;

/// Errors that can occur while compiling errorformat rules.
#[derive(Debug, Error)]
pub enum ErrorformatError {
    /// A `%` sequence is not a known directive or conversion.
    #[error("invalid errorformat {efm:?}: unknown directive '%{directive}'")]
    UnknownDirective {
        /// The rule being compiled.
        efm: String,
        /// The character following `%`.
        directive: char,
    },

    /// A `[` character class is never closed.
    #[error("invalid errorformat {efm:?}: unterminated character class")]
    UnterminatedClass {
        /// The rule being compiled.
        efm: String,
    },

    /// The rule ends with a lone `%`.
    #[error("invalid errorformat {efm:?}: trailing '%'")]
    TrailingPercent {
        /// The rule being compiled.
        efm: String,
    },

    /// The same conversion appears twice in one rule.
    #[error("invalid errorformat {efm:?}: conversion '%{conversion}' appears more than once")]
    DuplicateConversion {
        /// The rule being compiled.
        efm: String,
        /// The repeated conversion character.
        conversion: char,
    },

    /// The translated regular expression was rejected.
    #[error("invalid errorformat {efm:?}: {source}")]
    Regex {
        /// The rule being compiled.
        efm: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
}

impl ErrorformatError {
    pub(crate) fn unknown_directive(efm: &str, directive: char) -> Self {
        Self::UnknownDirective {
            efm: efm.to_string(),
            directive,
        }
    }

    pub(crate) fn unterminated_class(efm: &str) -> Self {
        Self::UnterminatedClass {
            efm: efm.to_string(),
        }
    }

    pub(crate) fn trailing_percent(efm: &str) -> Self {
        Self::TrailingPercent {
            efm: efm.to_string(),
        }
    }

    pub(crate) fn duplicate_conversion(efm: &str, conversion: char) -> Self {
        Self::DuplicateConversion {
            efm: efm.to_string(),
            conversion,
        }
    }
}
