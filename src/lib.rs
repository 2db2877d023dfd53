//! # csvjson
//!
//! Permissive CSV to JSON conversion. Rows are split on carriage return, the
//! first row names the columns, and every later row becomes an object keyed by
//! those names. Quoted fields may contain the delimiter.
//!
//! Malformed input never fails to parse: unbalanced quotes and ragged rows
//! only change field boundaries. Reading the source is the one step that
//! reports errors.
//!
//! ## Quick start
//!
//! ```
//! use csvjson::convert_csv_to_json;
//!
//! let json = convert_csv_to_json("name,city\r\"Ann\",\"Paris, FR\"\r", ',').unwrap();
//! assert_eq!(
//!     json,
//!     "[\n\t{\n\t\t\"name\": \"Ann\",\n\t\t\"city\": \"Paris, FR\"\n\t}\n]"
//! );
//! ```
//!
//! ## Structured records
//!
//! ```
//! use csvjson::csv::CsvDocument;
//!
//! let set = CsvDocument::new(';').parse("a;b;c\r1;2\r");
//! let record = &set.records()[0];
//! assert_eq!(record.get("b"), Some("2"));
//! assert!(record.contains_key("c"));
//! assert!(!record.is_present("c"));
//! ```
//!
//! ## Row separator
//!
//! The last segment after the final `\r` is never parsed. Documents must end
//! with `\r` for their last data row to be kept.
//!
//! ## Features
//!
//! - `async`: `load_csv_file_async` reads files through `tokio::fs`

pub mod csv;
pub mod csv_reader;
pub mod error;
pub mod json;
pub mod types;

pub use csv::{convert_csv_to_json, parse_document, parse_line, CsvDocument, CsvParser};
pub use csv_reader::{load_csv_file, load_csv_reader, CsvLoader};
pub use error::{CsvJsonError, Result};
pub use json::JsonOptions;
pub use types::{Record, RecordSet};

#[cfg(feature = "async")]
pub use csv_reader::load_csv_file_async;
