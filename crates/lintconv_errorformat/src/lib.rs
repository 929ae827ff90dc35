//! # lintconv_errorformat
//!
//! Vim-style errorformat engine.
//!
//! This crate provides:
//! - [`Errorformat`]: an ordered list of compiled rules
//! - [`Scanner`]: an iterator of [`Entry`] values over a line stream
//! - [`fmts`]: a catalog of named rule sets for common tools
//!
//! ## Example
//!
//! ```rust
//! use lintconv_errorformat::Errorformat;
//!
//! let efm = Errorformat::new(&["%f:%l:%c: %m"]).unwrap();
//! let input = "main.go:10:2: missing return\n";
//!
//! let entries: Vec<_> = efm
//!     .scanner(input.as_bytes())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].filename, "main.go");
//! assert!(entries[0].valid);
//! ```

mod error;
pub mod fmts;
mod rule;
mod scanner;

use std::io::BufRead;

use tracing::debug;

pub use error::ErrorformatError;
pub use rule::{RuleFlag, RuleKind};
pub use scanner::{Entry, Scanner};

use rule::Rule;

/// A compiled, ordered set of errorformat rules.
///
/// Rules are tried in order for every line and the first match wins.
#[derive(Debug)]
pub struct Errorformat {
    rules: Vec<Rule>,
    sources: Vec<String>,
}

impl Errorformat {
    /// Compiles the given rules.
    pub fn new<S: AsRef<str>>(efms: &[S]) -> Result<Self, ErrorformatError> {
        let rules = efms
            .iter()
            .map(|efm| Rule::compile(efm.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let sources = efms.iter().map(|efm| efm.as_ref().to_string()).collect();

        debug!("Compiled {} errorformat rules", rules.len());

        Ok(Self { rules, sources })
    }

    /// The rules this errorformat was compiled from.
    pub fn rules(&self) -> &[String] {
        &self.sources
    }

    /// Kind and flag of each compiled rule, in order.
    pub fn rule_kinds(&self) -> impl Iterator<Item = (RuleKind, RuleFlag)> + '_ {
        self.rules.iter().map(|rule| (rule.kind, rule.flag))
    }

    /// Starts scanning `reader` line by line.
    pub fn scanner<R: BufRead>(&self, reader: R) -> Scanner<'_, R> {
        Scanner::new(self, reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan(efms: &[&str], input: &str) -> Vec<Entry> {
        let efm = Errorformat::new(efms).unwrap();
        efm.scanner(input.as_bytes())
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    fn valid(entries: &[Entry]) -> Vec<&Entry> {
        entries.iter().filter(|e| e.valid).collect()
    }

    #[test]
    fn test_single_line_match() {
        let entries = scan(&["%f:%l:%c: %m"], "main.go:10:2: missing return\n");

        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert!(entry.valid);
        assert_eq!(entry.filename, "main.go");
        assert_eq!(entry.lnum, 10);
        assert_eq!(entry.col, 2);
        assert_eq!(entry.text, "missing return");
        assert_eq!(entry.lines, vec!["main.go:10:2: missing return"]);
    }

    #[test]
    fn test_unmatched_lines_are_invalid() {
        let entries = scan(
            &["%f:%l:%c: %m"],
            "# command-line-arguments\nmain.go:10:2: missing return\nFAIL\n",
        );

        assert_eq!(entries.len(), 3);
        assert!(!entries[0].valid);
        assert_eq!(entries[0].text, "# command-line-arguments");
        assert!(entries[1].valid);
        assert!(!entries[2].valid);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let entries = scan(&["%f:%l:%c: %m", "%f:%l:%m"], "a.go:1:2: msg\n");
        assert_eq!(entries[0].col, 2);
        assert_eq!(entries[0].text, "msg");

        let entries = scan(&["%f:%l:%m", "%f:%l:%c: %m"], "a.go:1:2: msg\n");
        assert_eq!(entries[0].col, 0);
        assert_eq!(entries[0].text, "2: msg");
    }

    #[test]
    fn test_crlf_line_endings() {
        let entries = scan(&["%f:%l:%c: %m"], "a.go:1:2: msg\r\nb.go:3:4: other\r\n");
        let valid = valid(&entries);
        assert_eq!(valid.len(), 2);
        assert_eq!(valid[0].text, "msg");
        assert_eq!(valid[1].lines, vec!["b.go:3:4: other"]);
    }

    #[test]
    fn test_missing_trailing_newline() {
        let entries = scan(&["%f:%l:%c: %m"], "a.go:1:2: msg");
        assert_eq!(entries.len(), 1);
        assert!(entries[0].valid);
    }

    #[test]
    fn test_ignored_general_lines_produce_nothing() {
        let entries = scan(
            &["%f:%l:%c: %m", "%-G%.%#"],
            "noise\na.go:1:2: msg\nmore noise\n",
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].filename, "a.go");
    }

    #[test]
    fn test_multiline_entry() {
        let efms = [
            "%E%trror[E%n]: %m",
            "%C%*[ ]--> %f:%l:%c",
            "%-Z",
            "%-C%.%#",
        ];
        let input = "\
error[E0425]: cannot find value `x` in this scope
 --> src/main.rs:2:5
  |
2 |     x
  |     ^ not found in this scope

";
        let entries = scan(&efms, input);
        let valid = valid(&entries);

        assert_eq!(valid.len(), 1);
        let entry = valid[0];
        assert_eq!(entry.filename, "src/main.rs");
        assert_eq!(entry.lnum, 2);
        assert_eq!(entry.col, 5);
        assert_eq!(entry.nr, 425);
        assert_eq!(entry.kind, Some('e'));
        assert_eq!(entry.type_name(), Some("error"));
        assert_eq!(entry.text, "cannot find value `x` in this scope");
        assert_eq!(entry.lines.len(), 6);
    }

    #[test]
    fn test_multiline_continuation_appends_message() {
        let efms = ["%E%f:%l: %m", "%C  %m", "%Z"];
        let input = "a.c:3: first\n  second\n  third\n\n";
        let entries = scan(&efms, input);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "first\nsecond\nthird");
        assert_eq!(entries[0].kind, Some('E'));
    }

    #[test]
    fn test_open_entry_is_flushed_at_eof() {
        let entries = scan(&["%E%f:%l: %m", "%C  %m"], "a.c:3: first\n  second\n");
        assert_eq!(entries.len(), 1);
        assert!(entries[0].valid);
        assert_eq!(entries[0].text, "first\nsecond");
    }

    #[test]
    fn test_unmatched_line_closes_open_entry() {
        let entries = scan(&["%E%f:%l: %m", "%C  %m"], "a.c:3: first\nplain\n");
        assert_eq!(entries.len(), 2);
        assert!(entries[0].valid);
        assert_eq!(entries[0].text, "first");
        assert!(!entries[1].valid);
        assert_eq!(entries[1].text, "plain");
    }

    #[test]
    fn test_continuation_needs_open_entry() {
        let entries = scan(&["%C  %m"], "  orphan\n");
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].valid);
    }

    #[test]
    fn test_file_stack() {
        let efms = ["%P[%f]", "%Q--", "%l:%c: %m"];
        let input = "[a.txt]\n1:2: first\n3:4: second\n--\n5:6: third\n";

        let entries = scan(&efms, input);
        let valid = valid(&entries);
        assert_eq!(valid.len(), 3);
        assert_eq!(valid[0].filename, "a.txt");
        assert_eq!(valid[1].filename, "a.txt");
        assert_eq!(valid[2].filename, "");
    }

    #[test]
    fn test_read_error_is_reported() {
        struct Failing;

        impl std::io::Read for Failing {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("boom"))
            }
        }

        let efm = Errorformat::new(&["%f:%l:%c: %m"]).unwrap();
        let mut scanner = efm.scanner(std::io::BufReader::new(Failing));
        assert!(scanner.next().unwrap().is_err());
        assert!(scanner.next().is_none());
    }

    #[test]
    fn test_rules_are_kept() {
        let efm = Errorformat::new(&["%f:%l: %m", "%-G%.%#"]).unwrap();
        assert_eq!(efm.rules().to_vec(), vec!["%f:%l: %m", "%-G%.%#"]);
        let kinds: Vec<_> = efm.rule_kinds().collect();
        assert_eq!(
            kinds,
            vec![
                (RuleKind::Single, RuleFlag::Normal),
                (RuleKind::General, RuleFlag::Ignore)
            ]
        );
    }

    #[test]
    fn test_invalid_rule_fails_compilation() {
        let err = Errorformat::new(&["%f:%l:%c: %m", "%f:%j"]).unwrap_err();
        assert!(err.to_string().contains("%f:%j"));
    }
}
