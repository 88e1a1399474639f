//! Single-row parsing and serialization.
//!
//! Quoting follows the usual CSV convention: a field that starts with `"`
//! runs until the matching closing quote, `""` inside it is a literal quote,
//! and delimiters or line breaks inside it are data.
//!
//! Malformed quoting is passed through instead of rejected. A quote that
//! appears in the middle of an unquoted field is literal. Text following the
//! closing quote of a quoted field is appended to it (`"a"b` reads as `ab`),
//! and a quoted field that is never closed extends to the end of the input.

use crate::{reader_builder, CodecError, Row};

/// Parse one CSV record into its fields.
///
/// An empty line is a record with one empty field. A single trailing line
/// terminator is accepted; any further record is an error.
pub fn parse_row(line: &str) -> Result<Row, CodecError> {
    let mut reader = reader_builder().from_reader(line.as_bytes());
    let mut records = reader.records();

    let first = match records.next() {
        Some(record) => record?,
        None => return Ok(vec![String::new()]),
    };

    if let Some(next) = records.next() {
        let line = match next {
            Ok(record) => record.position().map(|p| p.line()).unwrap_or(0),
            Err(e) => e.position().map(|p| p.line()).unwrap_or(0),
        };
        return Err(CodecError::MultipleRecords { line });
    }

    Ok(first.iter().map(str::to_string).collect())
}

/// Whether a field has to be quoted to survive a round trip.
///
/// A leading byte order mark is quoted too, since readers strip an unquoted
/// one at the start of a document.
pub fn needs_quoting(value: &str) -> bool {
    value.contains([',', '"', '\n', '\r']) || value.starts_with('\u{feff}')
}

/// Escape a value for CSV (double quotes and add quotes if needed).
pub fn escape_csv(value: &str) -> String {
    if needs_quoting(value) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Serialize fields into one CSV line, without a terminator.
pub fn serialize_row<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|field| escape_csv(field.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Row {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_serialize_quotes_only_when_needed() {
        let line = serialize_row(&["a", "b,c", "d\"e"]);
        assert_eq!(line, r#"a,"b,c","d""e""#);
    }

    #[test]
    fn test_parse_quoted_fields() {
        let fields = parse_row(r#"a,"b,c","d""e""#).unwrap();
        assert_eq!(fields, row(&["a", "b,c", "d\"e"]));
    }

    #[test]
    fn test_parse_empty_line() {
        assert_eq!(parse_row("").unwrap(), row(&[""]));
    }

    #[test]
    fn test_parse_empty_fields() {
        assert_eq!(parse_row(",,").unwrap(), row(&["", "", ""]));
        assert_eq!(parse_row("a,").unwrap(), row(&["a", ""]));
    }

    #[test]
    fn test_parse_accepts_trailing_terminator() {
        assert_eq!(parse_row("a,b\n").unwrap(), row(&["a", "b"]));
        assert_eq!(parse_row("a,b\r\n").unwrap(), row(&["a", "b"]));
    }

    #[test]
    fn test_parse_rejects_second_record() {
        let err = parse_row("a,b\nc,d").unwrap_err();
        assert!(matches!(err, CodecError::MultipleRecords { line: 2 }));
    }

    #[test]
    fn test_parse_quoted_newline() {
        let fields = parse_row("\"line one\nline two\",x").unwrap();
        assert_eq!(fields, row(&["line one\nline two", "x"]));
    }

    #[test]
    fn test_parse_literal_quote_in_unquoted_field() {
        let fields = parse_row(r#"a"b,c"#).unwrap();
        assert_eq!(fields, row(&["a\"b", "c"]));
    }

    #[test]
    fn test_parse_malformed_quoted_fields() {
        assert_eq!(parse_row(r#""a"b,c"#).unwrap(), row(&["ab", "c"]));
        assert_eq!(parse_row(r#""ab"#).unwrap(), row(&["ab"]));
        assert_eq!(parse_row("\"a,b\nc").unwrap(), row(&["a,b\nc"]));
    }

    #[test]
    fn test_parse_keeps_whitespace() {
        let fields = parse_row(" a , b ").unwrap();
        assert_eq!(fields, row(&[" a ", " b "]));
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv(""), "");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv("two\nlines"), "\"two\nlines\"");
        assert_eq!(escape_csv("cr\r"), "\"cr\r\"");
        assert_eq!(escape_csv("\u{feff}id"), "\"\u{feff}id\"");
        assert_eq!(escape_csv("id\u{feff}"), "id\u{feff}");
    }

    #[test]
    fn test_round_trip_awkward_fields() {
        let samples: Vec<Row> = vec![
            row(&[""]),
            row(&["", ""]),
            row(&["only"]),
            row(&["a,b", "\"", "\"\"", ",", "x\ny", "trailing,"]),
            row(&["\"quoted at start", "ends with quote\"", "mid\"dle"]),
            row(&["  padded  ", "tab\there", "crlf\r\nend"]),
            row(&["ünïcödé", "日本語,テキスト"]),
            row(&["\u{feff}bom first", "\u{feff}"]),
        ];

        for fields in samples {
            let line = serialize_row(&fields);
            assert_eq!(parse_row(&line).unwrap(), fields, "line: {line:?}");
        }
    }
}
