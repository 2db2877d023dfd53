//! CSV utilities for row tokenizing and document parsing

mod document;
mod parser;

pub use document::{convert_csv_to_json, parse_document, CsvDocument, ROW_SEPARATOR};
pub use parser::{parse_line, CsvParser, QUOTE};
