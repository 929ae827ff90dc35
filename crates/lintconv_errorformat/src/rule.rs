//! Translation of a single errorformat rule into a regular expression.

use regex::Regex;
use tracing::trace;

use crate::ErrorformatError;

/// Role of a rule while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Plain single-line rule.
    Single,
    /// `%A`, `%E`, `%W`, `%I` or `%N`: opens a multi-line entry.
    Start(char),
    /// `%C`: continues an open entry.
    Continue,
    /// `%Z`: closes an open entry.
    End,
    /// `%G`: general message without a location.
    General,
    /// `%O`: line is read over.
    Overread,
    /// `%P`: pushes a file name onto the file stack.
    PushFile,
    /// `%Q`: pops the file stack.
    PopFile,
}

/// `%-` / `%+` modifier of a rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RuleFlag {
    /// No modifier.
    #[default]
    Normal,
    /// `%-`: the line is consumed but its text is not kept.
    Ignore,
    /// `%+`: the whole line becomes the message.
    WholeLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    File,
    Line,
    EndLine,
    Column,
    EndColumn,
    VirtualColumn,
    Message,
    Rest,
    Type,
    Number,
    Pointer,
    Search,
}

impl Conversion {
    fn from_char(c: char) -> Option<Self> {
        let conversion = match c {
            'f' => Self::File,
            'l' => Self::Line,
            'e' => Self::EndLine,
            'c' => Self::Column,
            'k' => Self::EndColumn,
            'v' => Self::VirtualColumn,
            'm' => Self::Message,
            'r' => Self::Rest,
            't' => Self::Type,
            'n' => Self::Number,
            'p' => Self::Pointer,
            's' => Self::Search,
            _ => return None,
        };
        Some(conversion)
    }

    fn as_char(self) -> char {
        match self {
            Self::File => 'f',
            Self::Line => 'l',
            Self::EndLine => 'e',
            Self::Column => 'c',
            Self::EndColumn => 'k',
            Self::VirtualColumn => 'v',
            Self::Message => 'm',
            Self::Rest => 'r',
            Self::Type => 't',
            Self::Number => 'n',
            Self::Pointer => 'p',
            Self::Search => 's',
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            // Optional drive letter, then non-space characters or escaped spaces.
            Self::File => r"(?:[[:alpha:]]:)?(?:\\ |[^ ])+?",
            Self::Line
            | Self::EndLine
            | Self::Column
            | Self::EndColumn
            | Self::VirtualColumn
            | Self::Number => r"\d+",
            Self::Message | Self::Search => r".+",
            Self::Rest => r".*",
            Self::Type => r".",
            Self::Pointer => r"[-\t .]*",
        }
    }
}

/// Values captured from one line.
#[derive(Debug, Default)]
pub(crate) struct Fields {
    pub filename: Option<String>,
    pub lnum: Option<u32>,
    pub end_lnum: Option<u32>,
    pub col: Option<u32>,
    pub end_col: Option<u32>,
    pub vcol: bool,
    pub nr: Option<u32>,
    pub pattern: Option<String>,
    pub text: Option<String>,
    pub rest: Option<String>,
    pub kind: Option<char>,
}

/// A compiled errorformat rule.
#[derive(Debug)]
pub(crate) struct Rule {
    pub kind: RuleKind,
    pub flag: RuleFlag,
    regex: Regex,
    conversions: Vec<Conversion>,
}

impl Rule {
    /// Compiles one errorformat rule.
    pub fn compile(efm: &str) -> Result<Self, ErrorformatError> {
        let (kind, flag, body) = split_prefix(efm)?;

        let mut pattern = String::with_capacity(body.len() * 2 + 2);
        pattern.push('^');
        let mut conversions = Vec::new();

        let mut chars = body.chars();
        while let Some(c) = chars.next() {
            match c {
                '%' => {
                    let next = chars
                        .next()
                        .ok_or_else(|| ErrorformatError::trailing_percent(efm))?;

                    if let Some(conversion) = Conversion::from_char(next) {
                        if conversions.contains(&conversion) {
                            return Err(ErrorformatError::duplicate_conversion(
                                efm,
                                conversion.as_char(),
                            ));
                        }
                        conversions.push(conversion);
                        pattern.push('(');
                        pattern.push_str(conversion.pattern());
                        pattern.push(')');
                        continue;
                    }

                    match next {
                        '%' => pattern.push('%'),
                        '#' => pattern.push('*'),
                        '.' | '^' | '$' | '~' => pattern.push(next),
                        '[' => read_class(efm, &mut chars, &mut pattern)?,
                        '\\' => {
                            let escaped = chars
                                .next()
                                .ok_or_else(|| ErrorformatError::trailing_percent(efm))?;
                            pattern.push('\\');
                            pattern.push(escaped);
                        }
                        // scanf-style skip: `%*[...]` or `%*\x`
                        '*' => match chars.next() {
                            Some('[') => {
                                read_class(efm, &mut chars, &mut pattern)?;
                                pattern.push('+');
                            }
                            Some('\\') => {
                                let escaped = chars
                                    .next()
                                    .ok_or_else(|| ErrorformatError::trailing_percent(efm))?;
                                pattern.push('\\');
                                pattern.push(escaped);
                                pattern.push('+');
                            }
                            Some(_) => return Err(ErrorformatError::unknown_directive(efm, '*')),
                            None => return Err(ErrorformatError::trailing_percent(efm)),
                        },
                        other => return Err(ErrorformatError::unknown_directive(efm, other)),
                    }
                }
                '\\' => push_literal(&mut pattern, chars.next().unwrap_or('\\')),
                other => push_literal(&mut pattern, other),
            }
        }
        pattern.push('$');

        let regex = Regex::new(&pattern).map_err(|source| ErrorformatError::Regex {
            efm: efm.to_string(),
            source,
        })?;
        trace!("Compiled errorformat {:?} to /{}/", efm, pattern);

        Ok(Self {
            kind,
            flag,
            regex,
            conversions,
        })
    }

    /// Returns true if this rule only applies while a multi-line entry is open.
    pub fn is_continuation(&self) -> bool {
        matches!(self.kind, RuleKind::Continue | RuleKind::End)
    }

    /// Matches a line and extracts the captured fields.
    pub fn captures(&self, line: &str) -> Option<Fields> {
        let caps = self.regex.captures(line)?;
        let mut fields = Fields::default();

        for (i, conversion) in self.conversions.iter().enumerate() {
            let Some(m) = caps.get(i + 1) else {
                continue;
            };
            let value = m.as_str();
            match conversion {
                Conversion::File => fields.filename = Some(value.to_string()),
                Conversion::Line => fields.lnum = value.parse().ok(),
                Conversion::EndLine => fields.end_lnum = value.parse().ok(),
                Conversion::Column => fields.col = value.parse().ok(),
                Conversion::EndColumn => fields.end_col = value.parse().ok(),
                Conversion::VirtualColumn => {
                    fields.col = value.parse().ok();
                    fields.vcol = true;
                }
                Conversion::Message => fields.text = Some(value.to_string()),
                Conversion::Rest => fields.rest = Some(value.to_string()),
                Conversion::Type => fields.kind = value.chars().next(),
                Conversion::Number => fields.nr = value.parse().ok(),
                Conversion::Pointer => {
                    fields.col = Some(value.chars().count() as u32 + 1);
                    fields.vcol = true;
                }
                Conversion::Search => fields.pattern = Some(value.to_string()),
            }
        }

        if self.flag == RuleFlag::WholeLine {
            fields.text = Some(line.to_string());
        }

        Some(fields)
    }
}

fn split_prefix(efm: &str) -> Result<(RuleKind, RuleFlag, &str), ErrorformatError> {
    let Some(rest) = efm.strip_prefix('%') else {
        return Ok((RuleKind::Single, RuleFlag::Normal, efm));
    };

    let (flag, rest) = if let Some(rest) = rest.strip_prefix('-') {
        (RuleFlag::Ignore, rest)
    } else if let Some(rest) = rest.strip_prefix('+') {
        (RuleFlag::WholeLine, rest)
    } else {
        (RuleFlag::Normal, rest)
    };

    let mut chars = rest.chars();
    let kind = match chars.next() {
        Some(c @ ('A' | 'E' | 'W' | 'I' | 'N')) => RuleKind::Start(c),
        Some('C') => RuleKind::Continue,
        Some('Z') => RuleKind::End,
        Some('G') => RuleKind::General,
        Some('O') => RuleKind::Overread,
        Some('P') => RuleKind::PushFile,
        Some('Q') => RuleKind::PopFile,
        Some(c) if flag != RuleFlag::Normal => {
            return Err(ErrorformatError::unknown_directive(efm, c));
        }
        None if flag != RuleFlag::Normal => return Err(ErrorformatError::trailing_percent(efm)),
        _ => return Ok((RuleKind::Single, RuleFlag::Normal, efm)),
    };

    Ok((kind, flag, chars.as_str()))
}

/// Copies a bracket class verbatim. The opening `[` is already consumed.
fn read_class(
    efm: &str,
    chars: &mut std::str::Chars<'_>,
    pattern: &mut String,
) -> Result<(), ErrorformatError> {
    pattern.push('[');
    let mut first = true;
    loop {
        let c = chars
            .next()
            .ok_or_else(|| ErrorformatError::unterminated_class(efm))?;
        if c == ']' && !first {
            pattern.push(']');
            return Ok(());
        }
        if c == '\\' {
            pattern.push('\\');
            let escaped = chars
                .next()
                .ok_or_else(|| ErrorformatError::unterminated_class(efm))?;
            pattern.push(escaped);
        } else {
            pattern.push(c);
        }
        // A leading `^` does not count; `[^]...]` still treats `]` as literal.
        first = first && c == '^';
    }
}

fn push_literal(pattern: &mut String, c: char) {
    let mut buf = [0u8; 4];
    pattern.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}
