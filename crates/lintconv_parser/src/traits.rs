//! Parser trait definition.

use std::io::Read;

use lintconv_diagnostic::CheckResult;

use crate::ParseError;

/// Trait for turning tool output into canonical check results.
///
/// A parser reads the whole stream before returning. It never closes or
/// seeks the stream; the caller owns it. Parsers hold no per-call state, so
/// one instance can be reused for any number of inputs.
///
/// # Example
///
/// ```rust
/// use lintconv_parser::{ErrorformatParser, Parser};
///
/// let parser = ErrorformatParser::from_rules(&["%f:%l:%c: %m"]).unwrap();
/// let results = parser.parse_str("main.go:10:2: missing return\n").unwrap();
///
/// assert_eq!(results[0].diagnostic.path(), "main.go");
/// ```
pub trait Parser {
    /// Returns the name of this parser.
    fn name(&self) -> &str;

    /// Parses every record in `reader`, in input order.
    fn parse(&self, reader: &mut dyn Read) -> Result<Vec<CheckResult>, ParseError>;

    /// Parses an in-memory string.
    fn parse_str(&self, source: &str) -> Result<Vec<CheckResult>, ParseError> {
        self.parse(&mut source.as_bytes())
    }
}
