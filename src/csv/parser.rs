//! Row tokenizer with a permissive quote-toggle rule

/// Quote character recognised by the tokenizer
pub const QUOTE: char = '"';

/// Tokenizer for a single CSV row
///
/// Splits on the delimiter unless a quote toggle is open. Quote characters
/// stay in the field while scanning; once the row is split every field is
/// trimmed and a single surrounding pair of quotes is removed.
///
/// There is no escaping: doubled quotes are not collapsed and an unmatched
/// quote silently keeps the delimiter disabled for the rest of the row.
///
/// # Examples
///
/// ```
/// use csvjson::csv::CsvParser;
///
/// let parser = CsvParser::new(',');
/// assert_eq!(parser.parse_line(r#"a, "b,c" ,d"#), vec!["a", "b,c", "d"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvParser {
    delimiter: char,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::new(',')
    }
}

/// Scan state carried across the characters of one row
#[derive(Debug, Default)]
struct ScanState {
    in_quotes: bool,
    current: String,
    fields: Vec<String>,
}

impl ScanState {
    fn step(mut self, ch: char, delimiter: char) -> Self {
        if ch == QUOTE {
            self.in_quotes = !self.in_quotes;
            self.current.push(ch);
        } else if ch == delimiter && !self.in_quotes {
            self.close_field();
        } else {
            self.current.push(ch);
        }
        self
    }

    // Trims Unicode White_Space: U+0085 is removed, U+FEFF is not.
    fn close_field(&mut self) {
        let field = std::mem::take(&mut self.current);
        self.fields.push(field.trim().to_string());
    }

    fn finish(mut self) -> Vec<String> {
        self.close_field();
        self.fields
    }
}

impl CsvParser {
    /// Create a tokenizer for the given delimiter
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Delimiter this tokenizer splits on
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Parse one row into trimmed, unquoted fields
    ///
    /// Always returns at least one field; an empty row yields `[""]`.
    pub fn parse_line(&self, line: &str) -> Vec<String> {
        line.chars()
            .fold(ScanState::default(), |state, ch| state.step(ch, self.delimiter))
            .finish()
            .into_iter()
            .map(strip_quotes)
            .collect()
    }
}

/// Remove one leading and one trailing quote when both are present
fn strip_quotes(field: String) -> String {
    if field.len() >= 2 && field.starts_with(QUOTE) && field.ends_with(QUOTE) {
        field[1..field.len() - 1].to_string()
    } else {
        field
    }
}

/// Parse one row with the given delimiter
pub fn parse_line(line: &str, delimiter: char) -> Vec<String> {
    CsvParser::new(delimiter).parse_line(line)
}
