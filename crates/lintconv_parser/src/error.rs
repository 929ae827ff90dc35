//! Parse error types.

use lintconv_errorformat::ErrorformatError;
use thiserror::Error;

/// Errors that can occur while building a parser or parsing tool output.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Both a format name and errorformat rules were given.
    #[error("you cannot specify both format name and errorformat at the same time")]
    ConfigConflict,

    /// The format name is neither built in nor in the errorformat catalog.
    #[error(
        "{name:?} is not supported. Consider adding a new errorformat definition to the lintconv_errorformat catalog (run with --list to see supported formats)"
    )]
    UnsupportedFormat {
        /// The requested format name.
        name: String,
    },

    /// No errorformat rules are left after resolution.
    #[error("errorformat is empty")]
    EmptyFormat,

    /// An errorformat rule has invalid syntax.
    #[error(transparent)]
    Compile(#[from] ErrorformatError),

    /// The whole input could not be decoded.
    #[error("Failed to decode {format} input: {source}")]
    Decode {
        /// Format being decoded.
        format: &'static str,
        /// Underlying decoder error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A document could not be written back out.
    #[error("Failed to encode {format} output: {source}")]
    Encode {
        /// Format being encoded.
        format: &'static str,
        /// Underlying encoder error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// One line-delimited record could not be decoded.
    #[error("Failed to decode record at line {line}: {source}")]
    DecodeRecord {
        /// 1-based line number.
        line: usize,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Invalid configuration file.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading the input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Creates an unsupported format error.
    pub fn unsupported_format(name: impl Into<String>) -> Self {
        Self::UnsupportedFormat { name: name.into() }
    }

    /// Creates a decode error for `format`.
    pub fn decode(
        format: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Decode {
            format,
            source: source.into(),
        }
    }

    /// Creates an encode error for `format`.
    pub fn encode(
        format: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Encode {
            format,
            source: source.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns true if the input itself was malformed.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::DecodeRecord { .. })
    }
}
