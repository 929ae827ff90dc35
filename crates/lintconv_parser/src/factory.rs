//! Parser construction from [`ParserOptions`].

use std::io::Read;

use lintconv_diagnostic::CheckResult;
use lintconv_errorformat::fmts;
use tracing::debug;

use crate::{
    CheckstyleParser, ErrorformatParser, ParseError, Parser, ParserOptions, RdjsonlParser,
};

/// Name of the built-in checkstyle XML format.
pub const CHECKSTYLE: &str = "checkstyle";

/// Name of the built-in line-delimited JSON format.
pub const RDJSONL: &str = "rdjsonl";

/// One of the parsers [`new_parser`] can build.
#[derive(Debug)]
pub enum FormatParser {
    /// Rule-driven text parser.
    Errorformat(ErrorformatParser),
    /// Checkstyle XML parser.
    Checkstyle(CheckstyleParser),
    /// Line-delimited JSON parser.
    Rdjsonl(RdjsonlParser),
}

impl Parser for FormatParser {
    fn name(&self) -> &str {
        match self {
            Self::Errorformat(p) => p.name(),
            Self::Checkstyle(p) => p.name(),
            Self::Rdjsonl(p) => p.name(),
        }
    }

    fn parse(&self, reader: &mut dyn Read) -> Result<Vec<CheckResult>, ParseError> {
        match self {
            Self::Errorformat(p) => p.parse(reader),
            Self::Checkstyle(p) => p.parse(reader),
            Self::Rdjsonl(p) => p.parse(reader),
        }
    }
}

/// Builds the parser selected by `options`.
///
/// Resolution order:
/// 1. a format name together with rules is a [`ParseError::ConfigConflict`]
/// 2. `checkstyle` and `rdjsonl` map to their dedicated parsers
/// 3. any other name is looked up in the errorformat catalog
/// 4. the resulting rules must not be empty, and must compile
pub fn new_parser(options: &ParserOptions) -> Result<FormatParser, ParseError> {
    let name = options.format_name.as_deref().filter(|n| !n.is_empty());

    if name.is_some() && !options.errorformat.is_empty() {
        return Err(ParseError::ConfigConflict);
    }

    let rules: Vec<&str> = match name {
        Some(CHECKSTYLE) => {
            debug!("Using built-in parser: {}", CHECKSTYLE);
            return Ok(FormatParser::Checkstyle(CheckstyleParser::new()));
        }
        Some(RDJSONL) => {
            debug!("Using built-in parser: {}", RDJSONL);
            return Ok(FormatParser::Rdjsonl(RdjsonlParser::new()));
        }
        Some(name) => {
            let fmt = fmts::find(name).ok_or_else(|| ParseError::unsupported_format(name))?;
            debug!("Using errorformat catalog entry: {}", fmt.name);
            fmt.errorformat.to_vec()
        }
        None => options.errorformat.iter().map(String::as_str).collect(),
    };

    if rules.is_empty() {
        return Err(ParseError::EmptyFormat);
    }

    Ok(FormatParser::Errorformat(ErrorformatParser::from_rules(
        &rules,
    )?))
}

/// A format accepted by `ParserOptions::format_name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// Format name.
    pub name: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Homepage, empty for built-ins.
    pub url: &'static str,
}

/// Every supported format name: built-ins first, then the catalog.
pub fn supported_formats() -> Vec<FormatInfo> {
    let builtins = [
        FormatInfo {
            name: CHECKSTYLE,
            description: "checkstyle XML format",
            url: "https://checkstyle.org/",
        },
        FormatInfo {
            name: RDJSONL,
            description: "line-delimited JSON diagnostics",
            url: "",
        },
    ];

    builtins
        .into_iter()
        .chain(fmts::defined_fmts().iter().map(|fmt| FormatInfo {
            name: fmt.name,
            description: fmt.description,
            url: fmt.url,
        }))
        .collect()
}
