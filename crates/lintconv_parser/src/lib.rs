//! # lintconv_parser
//!
//! Parser layer for lintconv.
//!
//! This crate provides:
//! - A `Parser` trait turning a byte stream into [`CheckResult`] records
//! - Built-in checkstyle XML and line-delimited JSON parsers
//! - An errorformat parser for free-form text output
//! - [`new_parser`], which picks one of them from [`ParserOptions`]
//!
//! ## Example
//!
//! ```rust
//! use lintconv_parser::{new_parser, Parser, ParserOptions};
//!
//! let parser = new_parser(&ParserOptions::new().with_format("golint")).unwrap();
//! let results = parser
//!     .parse_str("main.go:10:2: exported func Foo should have comment\n")
//!     .unwrap();
//!
//! assert_eq!(results[0].diagnostic.line(), 10);
//! ```

mod checkstyle;
mod error;
mod errorformat;
mod factory;
mod options;
mod rdjsonl;
mod traits;

pub use checkstyle::{CheckstyleError, CheckstyleFile, CheckstyleParser, CheckstyleResult};
pub use error::ParseError;
pub use errorformat::ErrorformatParser;
pub use factory::{CHECKSTYLE, FormatInfo, FormatParser, RDJSONL, new_parser, supported_formats};
pub use options::{CONFIG_FILES, ParserOptions};
pub use rdjsonl::RdjsonlParser;
pub use traits::Parser;

pub use lintconv_diagnostic::{CheckResult, Diagnostic};
