//! CSV source loading: read the whole text, then parse it
//!
//! The parser needs the complete document before it starts, so every source
//! is read to the end first. A read failure is returned as-is and the parser
//! is never invoked.

use crate::csv::CsvDocument;
use crate::error::{CsvJsonError, Result};
use crate::json::JsonOptions;
use crate::types::RecordSet;
use encoding_rs::UTF_8;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fully loaded CSV source with conversion settings
///
/// # Examples
///
/// ```no_run
/// use csvjson::csv_reader::CsvLoader;
///
/// let json = CsvLoader::open("data.csv")
///     .unwrap()
///     .delimiter(';')
///     .to_json()
///     .unwrap();
/// println!("{}", json);
/// ```
///
/// # From any reader
///
/// ```
/// use csvjson::csv_reader::CsvLoader;
///
/// let loader = CsvLoader::from_reader("id,name\r1,Alice\r".as_bytes()).unwrap();
/// let records = loader.records();
/// assert_eq!(records.records()[0].get("name"), Some("Alice"));
/// ```
#[derive(Debug, Clone)]
pub struct CsvLoader {
    text: String,
    path: Option<PathBuf>,

    // Configuration
    delimiter: char,
    json: JsonOptions,
}

impl CsvLoader {
    /// Read a CSV file fully into memory
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let file = File::open(path_ref)
            .map_err(|e| CsvJsonError::read(Some(path_ref.to_path_buf()), e))?;
        let text =
            read_text(file).map_err(|e| CsvJsonError::read(Some(path_ref.to_path_buf()), e))?;
        debug!(path = %path_ref.display(), bytes = text.len(), "loaded CSV file");
        Ok(Self::from_text(text, Some(path_ref.to_path_buf())))
    }

    /// Read any source fully into memory
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let text = read_text(reader).map_err(|e| CsvJsonError::read(None, e))?;
        debug!(bytes = text.len(), "loaded CSV from reader");
        Ok(Self::from_text(text, None))
    }

    /// Wrap text that is already in memory
    pub fn from_text(text: String, path: Option<PathBuf>) -> Self {
        CsvLoader {
            text,
            path,
            delimiter: ',',
            json: JsonOptions::default(),
        }
    }

    /// Set field delimiter (builder pattern)
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set JSON indentation (builder pattern)
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.json = self.json.indent(indent);
        self
    }

    /// Raw text of the source
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Path the text was read from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Parse the loaded text into records
    pub fn records(&self) -> RecordSet {
        CsvDocument::new(self.delimiter).parse(&self.text)
    }

    /// Parse the loaded text and render it as JSON
    pub fn to_json(&self) -> Result<String> {
        self.records().to_json_with(&self.json)
    }
}

/// Read to the end and decode as UTF-8
fn read_text<R: Read>(mut reader: R) -> std::io::Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(decode_text(bytes))
}

/// Drops a leading byte-order mark; invalid sequences become U+FFFD
fn decode_text(bytes: Vec<u8>) -> String {
    let (text, _) = UTF_8.decode_with_bom_removal(&bytes);
    text.into_owned()
}

/// Read a CSV file and convert it to tab-indented JSON
pub fn load_csv_file<P: AsRef<Path>>(path: P, delimiter: char) -> Result<String> {
    CsvLoader::open(path)?.delimiter(delimiter).to_json()
}

/// Read any source and convert it to tab-indented JSON
pub fn load_csv_reader<R: Read>(reader: R, delimiter: char) -> Result<String> {
    CsvLoader::from_reader(reader)?.delimiter(delimiter).to_json()
}

/// Read a CSV file asynchronously and convert it to tab-indented JSON
///
/// The read is the only suspension point; parsing runs after the whole file
/// is in memory.
#[cfg(feature = "async")]
pub async fn load_csv_file_async<P: AsRef<Path>>(path: P, delimiter: char) -> Result<String> {
    CsvLoader::open_async(path).await?.delimiter(delimiter).to_json()
}

#[cfg(feature = "async")]
impl CsvLoader {
    /// Read a CSV file fully into memory without blocking the runtime
    pub async fn open_async<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let bytes = tokio::fs::read(path_ref)
            .await
            .map_err(|e| CsvJsonError::read(Some(path_ref.to_path_buf()), e))?;
        let text = decode_text(bytes);
        debug!(path = %path_ref.display(), bytes = text.len(), "loaded CSV file");
        Ok(Self::from_text(text, Some(path_ref.to_path_buf())))
    }
}
