//! Whole-document parsing into header-keyed records

use crate::csv::CsvParser;
use crate::error::Result;
use crate::types::RecordSet;
use tracing::{debug, trace};

/// Row separator of the raw document
pub const ROW_SEPARATOR: char = '\r';

/// Document parser: first row is the header, each later row becomes a record
///
/// Rows are split on carriage return only. The final split segment is always
/// dropped, so the last data row survives only when the text ends with `\r`.
///
/// # Examples
///
/// ```
/// use csvjson::csv::CsvDocument;
///
/// let set = CsvDocument::new(',').parse("name,age\rAlice,30\r");
/// assert_eq!(set.len(), 1);
/// assert_eq!(set.records()[0].get("name"), Some("Alice"));
///
/// // No trailing separator: the last row is not read
/// assert!(CsvDocument::new(',').parse("name,age\rAlice,30").is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CsvDocument {
    parser: CsvParser,
}

impl CsvDocument {
    /// Create a document parser for the given delimiter
    pub fn new(delimiter: char) -> Self {
        CsvDocument {
            parser: CsvParser::new(delimiter),
        }
    }

    /// Create a document parser around an existing row tokenizer
    pub fn with_parser(parser: CsvParser) -> Self {
        CsvDocument { parser }
    }

    /// Parse the text into a record set
    ///
    /// Never fails: ragged rows and unbalanced quotes only change field
    /// boundaries.
    pub fn parse(&self, text: &str) -> RecordSet {
        let rows: Vec<&str> = text.split(ROW_SEPARATOR).collect();

        // split always yields at least one segment
        let headers = self.parser.parse_line(rows[0]);
        trace!(?headers, "parsed header row");

        let mut set = RecordSet::new(headers);
        let data_end = rows.len().saturating_sub(1);
        for row in rows.iter().take(data_end).skip(1) {
            set.push_row(self.parser.parse_line(row));
        }

        // TODO: keep the final segment when it is non-empty once callers no
        // longer depend on the trailing `\r` convention.
        if rows.len() > 1 && !rows[rows.len() - 1].is_empty() {
            debug!(
                dropped = rows[rows.len() - 1].len(),
                "final segment without trailing row separator was not parsed"
            );
        }

        debug!(
            rows = rows.len(),
            headers = set.headers().len(),
            records = set.len(),
            "parsed CSV document"
        );
        set
    }

    /// Parse the text and render it as tab-indented JSON
    pub fn to_json(&self, text: &str) -> Result<String> {
        self.parse(text).to_json()
    }
}

/// Parse a document into records with the given delimiter
pub fn parse_document(text: &str, delimiter: char) -> RecordSet {
    CsvDocument::new(delimiter).parse(text)
}

/// Convert CSV text to a tab-indented JSON array of objects
///
/// # Examples
///
/// ```
/// let json = csvjson::convert_csv_to_json("a,b\r1,2\r", ',').unwrap();
/// assert_eq!(json, "[\n\t{\n\t\t\"a\": \"1\",\n\t\t\"b\": \"2\"\n\t}\n]");
/// ```
pub fn convert_csv_to_json(text: &str, delimiter: char) -> Result<String> {
    CsvDocument::new(delimiter).to_json(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_record_with_trailing_separator() {
        let set = parse_document("name,age\rAlice,30\r", ',');
        assert_eq!(set.headers(), &["name".to_string(), "age".to_string()][..]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.records()[0].get("name"), Some("Alice"));
        assert_eq!(set.records()[0].get("age"), Some("30"));
    }

    #[test]
    fn test_final_segment_dropped() {
        let set = parse_document("name,age\rAlice,30", ',');
        assert_eq!(set.headers().len(), 2);
        assert!(set.is_empty());
    }

    #[test]
    fn test_trailing_empty_field() {
        let set = parse_document("name,age\r1,\r", ',');
        assert_eq!(set.len(), 1);
        assert_eq!(set.records()[0].get("name"), Some("1"));
        assert_eq!(set.records()[0].get("age"), Some(""));
    }

    #[test]
    fn test_empty_document() {
        let set = parse_document("", ',');
        assert_eq!(set.headers(), &[String::new()][..]);
        assert!(set.is_empty());
    }

    #[test]
    fn test_empty_header_row_with_data() {
        let set = parse_document("\r1,2\r", ',');
        assert_eq!(set.headers(), &[String::new()][..]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.records()[0].keys().collect::<Vec<_>>(), vec![""]);
        assert_eq!(set.records()[0].get(""), Some("1"));
        assert_eq!(
            convert_csv_to_json("\r1,2\r", ',').unwrap(),
            "[\n\t{\n\t\t\"\": \"1\"\n\t}\n]"
        );
    }

    #[test]
    fn test_header_only() {
        let set = parse_document("a,b\r", ',');
        assert_eq!(set.headers().len(), 2);
        assert!(set.is_empty());
    }

    #[test]
    fn test_blank_line_is_a_record() {
        let set = parse_document("a,b\r\r1,2\r", ',');
        assert_eq!(set.len(), 2);
        assert_eq!(set.records()[0].get("a"), Some(""));
        assert!(!set.records()[0].is_present("b"));
        assert_eq!(set.records()[1].get("b"), Some("2"));
    }

    #[test]
    fn test_quoted_headers_and_values() {
        let set = parse_document("\"first name\", \"city\"\r\"Ann\",\"Paris, FR\"\r", ',');
        let record = &set.records()[0];
        assert_eq!(record.get("first name"), Some("Ann"));
        assert_eq!(record.get("city"), Some("Paris, FR"));
    }

    #[test]
    fn test_crlf_leaves_newline_trimmed() {
        let set = parse_document("a,b\r\n1,2\r\n", ',');
        assert_eq!(set.len(), 1);
        assert_eq!(set.records()[0].get("a"), Some("1"));
        assert_eq!(set.records()[0].get("b"), Some("2"));
    }

    #[test]
    fn test_semicolon_delimiter() {
        let set = parse_document("x;y\r1,5;2\r", ';');
        assert_eq!(set.records()[0].get("x"), Some("1,5"));
    }

    #[test]
    fn test_convert_short_row_omits_key() {
        let json = convert_csv_to_json("a,b\r1\r", ',').unwrap();
        assert_eq!(json, "[\n\t{\n\t\t\"a\": \"1\"\n\t}\n]");
    }

    #[test]
    fn test_convert_empty_document() {
        assert_eq!(convert_csv_to_json("", ',').unwrap(), "[]");
    }
}
