//! Record format
//!
//! A record is one line of a flat file: fields joined by [`DELIMITER`] and
//! terminated by a newline. The first field is an integer key.
//!
//! Writes sanitize every field so it can never contain the delimiter or a line
//! break; reads trust the file and only trim whitespace.

use std::fmt;

/// Field separator used in every record file
pub const DELIMITER: char = '|';

/// Upper bound on the length of any stored field, in characters.
///
/// Matches the largest input buffer of the console forms (feedback text).
/// Longer input is truncated at a character boundary.
pub const MAX_FIELD_CHARS: usize = 999;

/// One stored line split into its fields
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    /// Build a record from already-split fields
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Split a raw line on the delimiter and trim every field
    pub fn parse_line(line: &str) -> Self {
        let line = line.trim_end_matches(['\n', '\r']);
        Self {
            fields: line
                .split(DELIMITER)
                .map(|field| field.trim().to_string())
                .collect(),
        }
    }

    /// Field at `index`, or `""` when the line was too short
    pub fn get(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }

    /// Field at `index` parsed leniently as an integer (missing or bad = 0)
    pub fn int(&self, index: usize) -> i64 {
        parse_key(self.get(index))
    }

    /// Key of this record at `key_index`
    pub fn key(&self, key_index: usize) -> i64 {
        self.int(key_index)
    }

    /// All fields in stored order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Consume the record, returning its fields
    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }

    /// Number of fields present on the line
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render the record back into its stored line form (without newline)
    pub fn to_line(&self) -> String {
        join_fields(&self.fields)
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

/// Make a field safe to store: the delimiter and line breaks become a single
/// space each, and the result is capped at [`MAX_FIELD_CHARS`].
pub fn sanitize_field(field: &str) -> String {
    let cleaned: String = field
        .chars()
        .map(|c| match c {
            DELIMITER | '\n' | '\r' => ' ',
            other => other,
        })
        .collect();
    truncate_chars(&cleaned, MAX_FIELD_CHARS).to_string()
}

/// Cut `s` to at most `max_chars` characters without splitting a code point
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

/// Join fields into one line with the delimiter
pub fn join_fields<S: AsRef<str>>(fields: &[S]) -> String {
    let mut line = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            line.push(DELIMITER);
        }
        line.push_str(field.as_ref());
    }
    line
}

/// Parse the leading integer of `s` the way C `atoi` reads a token.
///
/// Leading whitespace and one optional sign are accepted, then as many digits
/// as follow. Returns `None` when no digit leads the text. Values beyond the
/// `i64` range saturate.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        let digit = i64::from(b - b'0');
        value = value
            .saturating_mul(10)
            .saturating_add(if negative { -digit } else { digit });
    }

    seen_digit.then_some(value)
}

/// Lenient key parsing: anything without a leading integer is 0
pub fn parse_key(s: &str) -> i64 {
    parse_int_prefix(s).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_trims_fields() {
        let record = Record::parse_line(" 7 | Alice |30|F \r\n");
        assert_eq!(record.fields(), &["7", "Alice", "30", "F"]);
    }

    #[test]
    fn test_parse_line_keeps_empty_fields() {
        let record = Record::parse_line("5||30|M");
        assert_eq!(record.fields(), &["5", "", "30", "M"]);
    }

    #[test]
    fn test_missing_fields_default() {
        let record = Record::parse_line("5|OnlyName");
        assert_eq!(record.get(2), "");
        assert_eq!(record.int(2), 0);
        assert_eq!(record.get(3), "");
    }

    #[test]
    fn test_sanitize_replaces_delimiter_and_newlines() {
        assert_eq!(sanitize_field("A|B"), "A B");
        assert_eq!(sanitize_field("line1\nline2\r"), "line1 line2 ");
        assert_eq!(sanitize_field("||"), "  ");
    }

    #[test]
    fn test_sanitize_caps_length() {
        let long = "x".repeat(MAX_FIELD_CHARS + 50);
        assert_eq!(sanitize_field(&long).chars().count(), MAX_FIELD_CHARS);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_parse_int_prefix_follows_atoi() {
        assert_eq!(parse_int_prefix("42"), Some(42));
        assert_eq!(parse_int_prefix("  -17abc"), Some(-17));
        assert_eq!(parse_int_prefix("+3"), Some(3));
        assert_eq!(parse_int_prefix("12 34"), Some(12));
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("-"), None);
    }

    #[test]
    fn test_parse_int_prefix_saturates() {
        assert_eq!(parse_int_prefix("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int_prefix("-99999999999999999999999"), Some(i64::MIN));
    }

    #[test]
    fn test_parse_key_defaults_to_zero() {
        assert_eq!(parse_key("x1"), 0);
        assert_eq!(parse_key(""), 0);
        assert_eq!(parse_key("9"), 9);
    }

    #[test]
    fn test_to_line_round_trips() {
        let record: Record = ["3", "CBC normal"].into_iter().collect();
        assert_eq!(record.to_line(), "3|CBC normal");
        assert_eq!(Record::parse_line(&record.to_line()), record);
    }
}
