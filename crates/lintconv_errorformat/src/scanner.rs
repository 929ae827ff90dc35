//! Line scanner that applies errorformat rules to a stream.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use tracing::{debug, trace};

use crate::rule::{Fields, RuleFlag, RuleKind};
use crate::Errorformat;

/// One scan result.
///
/// Lines that no rule matched are reported with `valid == false` and the raw
/// line as `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    /// File name, empty if unknown.
    pub filename: String,
    /// Line number, `0` if unknown.
    pub lnum: u32,
    /// End line number, `0` if unknown.
    pub end_lnum: u32,
    /// Column, `0` if unknown.
    pub col: u32,
    /// End column, `0` if unknown.
    pub end_col: u32,
    /// Whether `col` is a screen column (`%v`, `%p`).
    pub vcol: bool,
    /// Error number (`%n`), `0` if absent.
    pub nr: u32,
    /// Search text (`%s`).
    pub pattern: String,
    /// Message. Continuation lines are joined with `\n`.
    pub text: String,
    /// Error type character (`%t`, or the letter of `%E`/`%W`/`%I`/`%N`).
    pub kind: Option<char>,
    /// Whether a rule recognized this entry.
    pub valid: bool,
    /// Raw lines consumed for this entry.
    pub lines: Vec<String>,
}

impl Entry {
    fn unmatched(line: String) -> Self {
        Self {
            text: line.clone(),
            lines: vec![line],
            ..Default::default()
        }
    }

    /// Human readable name of [`Entry::kind`].
    pub fn type_name(&self) -> Option<&'static str> {
        match self.kind?.to_ascii_lowercase() {
            'e' => Some("error"),
            'w' => Some("warning"),
            'i' => Some("info"),
            'n' => Some("note"),
            _ => None,
        }
    }

    fn merge(&mut self, fields: Fields) {
        if self.filename.is_empty() {
            self.filename = fields.filename.unwrap_or_default();
        }
        if self.lnum == 0 {
            self.lnum = fields.lnum.unwrap_or_default();
        }
        if self.end_lnum == 0 {
            self.end_lnum = fields.end_lnum.unwrap_or_default();
        }
        if self.col == 0 {
            self.col = fields.col.unwrap_or_default();
            self.vcol = fields.vcol;
        }
        if self.end_col == 0 {
            self.end_col = fields.end_col.unwrap_or_default();
        }
        if self.nr == 0 {
            self.nr = fields.nr.unwrap_or_default();
        }
        if self.pattern.is_empty() {
            self.pattern = fields.pattern.unwrap_or_default();
        }
        if fields.kind.is_some() {
            self.kind = fields.kind;
        }
    }

    fn append_text(&mut self, text: &str) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(text);
    }
}

/// Iterator over the entries of a stream.
///
/// Created by [`Errorformat::scanner`]. Yields `Err` once if reading fails and
/// stops afterwards.
pub struct Scanner<'a, R> {
    efm: &'a Errorformat,
    reader: R,
    buf: Vec<u8>,
    open: Option<Entry>,
    ready: VecDeque<Entry>,
    file_stack: Vec<String>,
    lines_read: usize,
    done: bool,
}

impl<'a, R: BufRead> Scanner<'a, R> {
    pub(crate) fn new(efm: &'a Errorformat, reader: R) -> Self {
        Self {
            efm,
            reader,
            buf: Vec::new(),
            open: None,
            ready: VecDeque::new(),
            file_stack: Vec::new(),
            lines_read: 0,
            done: false,
        }
    }

    /// Reads the next line without its terminator. Invalid UTF-8 is replaced.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        self.lines_read += 1;
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }

    fn flush_open(&mut self) {
        if let Some(entry) = self.open.take() {
            self.ready.push_back(entry);
        }
    }

    fn process(&mut self, line: String) {
        let efm = self.efm;
        let multiline = self.open.is_some();
        let matched = efm
            .rules
            .iter()
            .filter(|rule| multiline || !rule.is_continuation())
            .find_map(|rule| rule.captures(&line).map(|fields| (rule, fields)));

        let Some((rule, mut fields)) = matched else {
            trace!("No errorformat rule matched line {}", self.lines_read);
            self.flush_open();
            self.ready.push_back(Entry::unmatched(line));
            return;
        };

        match rule.kind {
            RuleKind::Continue | RuleKind::End => {
                if let Some(entry) = self.open.as_mut() {
                    let text = fields.text.take();
                    entry.merge(fields);
                    if rule.flag != RuleFlag::Ignore {
                        if let Some(text) = text {
                            entry.append_text(&text);
                        }
                    }
                    entry.lines.push(line);
                }
                if rule.kind == RuleKind::End {
                    self.flush_open();
                }
            }
            RuleKind::Start(letter) => {
                self.flush_open();
                let default_kind = (letter != 'A').then_some(letter);
                let mut entry = self.new_entry(fields, rule.flag, line);
                entry.kind = entry.kind.or(default_kind);
                self.open = Some(entry);
            }
            RuleKind::Single => {
                self.flush_open();
                if rule.flag != RuleFlag::Ignore {
                    let entry = self.new_entry(fields, rule.flag, line);
                    self.ready.push_back(entry);
                }
            }
            RuleKind::General => {
                self.flush_open();
                if rule.flag != RuleFlag::Ignore {
                    let mut entry = self.new_entry(fields, rule.flag, line);
                    entry.valid = false;
                    self.ready.push_back(entry);
                }
            }
            RuleKind::Overread => {}
            RuleKind::PushFile => {
                self.flush_open();
                if let Some(name) = fields.filename.or(fields.rest) {
                    self.file_stack.push(name);
                }
            }
            RuleKind::PopFile => {
                self.flush_open();
                self.file_stack.pop();
            }
        }
    }

    fn new_entry(&self, mut fields: Fields, flag: RuleFlag, line: String) -> Entry {
        let text = match flag {
            RuleFlag::Ignore => None,
            _ => fields.text.take(),
        };
        let mut entry = Entry {
            valid: true,
            text: text.unwrap_or_default(),
            ..Default::default()
        };
        entry.merge(fields);
        if entry.filename.is_empty() {
            if let Some(current) = self.file_stack.last() {
                entry.filename = current.clone();
            }
        }
        entry.lines.push(line);
        entry
    }
}

impl<R: BufRead> Iterator for Scanner<'_, R> {
    type Item = io::Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.ready.pop_front() {
                return Some(Ok(entry));
            }
            if self.done {
                return None;
            }
            match self.read_line() {
                Ok(Some(line)) => self.process(line),
                Ok(None) => {
                    debug!("Scanned {} lines", self.lines_read);
                    self.done = true;
                    self.flush_open();
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
