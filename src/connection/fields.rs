//! Key lookup for `key="value";` connection strings.

use std::{ops::Range, sync::OnceLock};

use regex::Regex;

/// A recognised connection-string key.
///
/// The key counts wherever it follows the start of the input or a character
/// that cannot be part of a key name, so `Connect=File="..."` holds a `File`
/// key while `Profile="..."` does not. Occurrences inside a quoted value are
/// ignored.
pub struct FieldPattern {
    key: Regex,
}

impl FieldPattern {
    fn compile(key: &str) -> Self {
        let key = Regex::new(&format!(r"(?i)(?:^|[^A-Za-z0-9_])\s*({key})\s*="))
            .expect("invalid connection key pattern");
        Self { key }
    }

    /// Whether the key appears in `input`, regardless of its value.
    pub fn is_present(&self, input: &str) -> bool {
        self.value_offset(input).is_some()
    }

    /// Quoted value of the first occurrence of the key, with `""` unescaped.
    ///
    /// Missing, unquoted, unterminated and blank values all yield `None`.
    pub fn quoted_value(&self, input: &str) -> Option<String> {
        let offset = self.value_offset(input)?;
        let raw = FieldPatterns::instance()
            .value
            .captures(&input[offset..])?
            .get(1)?
            .as_str();
        let value = raw.replace("\"\"", "\"");
        if value.trim().is_empty() {
            return None;
        }
        Some(value)
    }

    /// Byte offset just past the `=` of the first key occurrence outside quotes.
    fn value_offset(&self, input: &str) -> Option<usize> {
        let quoted = quoted_spans(input);
        self.key.captures_iter(input).find_map(|captures| {
            let key = captures.get(1)?;
            if quoted.iter().any(|span| span.contains(&key.start())) {
                return None;
            }
            captures.get(0).map(|all| all.end())
        })
    }
}

/// Byte ranges of the quoted values in `input`; an unterminated one runs to the end.
fn quoted_spans(input: &str) -> Vec<Range<usize>> {
    FieldPatterns::instance()
        .quoted
        .find_iter(input)
        .map(|found| found.range())
        .collect()
}

/// Pre-compiled patterns for every key the classifier looks at.
pub struct FieldPatterns {
    quoted: Regex,
    value: Regex,
    pub web: FieldPattern,
    pub file: FieldPattern,
    pub server: FieldPattern,
    pub reference: FieldPattern,
}

impl FieldPatterns {
    pub fn instance() -> &'static Self {
        static PATTERNS: OnceLock<FieldPatterns> = OnceLock::new();
        PATTERNS.get_or_init(Self::compile)
    }

    fn compile() -> Self {
        Self {
            quoted: Regex::new(r#""(?:[^"]|"")*"?"#).expect("invalid quoted value pattern"),
            value: Regex::new(r#"^\s*"((?:[^"]|"")*)""#)
                .expect("invalid connection value pattern"),
            web: FieldPattern::compile("ws"),
            file: FieldPattern::compile("file"),
            server: FieldPattern::compile("srvr"),
            reference: FieldPattern::compile("ref"),
        }
    }
}
