//! Pretty JSON rendering for record sets

use crate::error::Result;
use crate::types::RecordSet;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Default indentation: one tab per level
pub const DEFAULT_INDENT: &str = "\t";

/// Rendering options for JSON output
///
/// # Examples
///
/// ```
/// use csvjson::json::JsonOptions;
///
/// let options = JsonOptions::new().indent("  ");
/// assert_eq!(options.indent_str(), "  ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonOptions {
    indent: String,
}

impl Default for JsonOptions {
    fn default() -> Self {
        JsonOptions {
            indent: DEFAULT_INDENT.to_string(),
        }
    }
}

impl JsonOptions {
    /// Tab-indented output
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-level indentation (builder pattern)
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Current per-level indentation
    pub fn indent_str(&self) -> &str {
        &self.indent
    }
}

/// Serialize any value as pretty JSON with the given options
pub fn to_json_string<T: Serialize + ?Sized>(value: &T, options: &JsonOptions) -> Result<String> {
    let mut buffer = Vec::with_capacity(256);
    let formatter = PrettyFormatter::with_indent(options.indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buffer)?)
}

impl RecordSet {
    /// Render as a tab-indented JSON array of objects
    pub fn to_json(&self) -> Result<String> {
        self.to_json_with(&JsonOptions::default())
    }

    /// Render as a JSON array of objects with custom options
    pub fn to_json_with(&self, options: &JsonOptions) -> Result<String> {
        to_json_string(self, options)
    }
}
