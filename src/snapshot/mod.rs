//! Diagram snapshots.
//!
//! A [`Snapshot`] is the editor's serialized graph (a JointJS `cells`
//! document) held as opaque JSON. The engine only reads it; the editing
//! surface produces the next one.
//!
//! Saved snapshot files store multi-line text with the two-character
//! escape `\n` in every `"text"` field. [`Snapshot::to_saved_json`] applies
//! that escaping and [`Snapshot::from_saved_json`] reverses it. The plain
//! [`Snapshot::from_json_str`] / [`Snapshot::to_json_string`] pair keeps
//! text verbatim.

mod cells;
mod parse;

pub use cells::{Cell, ClassCell, GraphJson, LinkCell};
pub use parse::parse_snapshot;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ExportError, Result};

/// An opaque diagram snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    value: Value,
}

impl Snapshot {
    pub fn from_value(value: Value) -> Self {
        Self { value }
    }

    /// Parse snapshot JSON as-is.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value = serde_json::from_str(input)
            .map_err(|e| ExportError::snapshot(format!("Invalid snapshot JSON: {e}")))?;
        Ok(Self { value })
    }

    pub fn from_slice(input: &[u8]) -> Result<Self> {
        let value = serde_json::from_slice(input)
            .map_err(|e| ExportError::snapshot(format!("Invalid snapshot JSON: {e}")))?;
        Ok(Self { value })
    }

    /// Parse a saved snapshot file, turning escaped `\n` in text fields
    /// back into line breaks.
    pub fn from_saved_json(input: &str) -> Result<Self> {
        let mut snapshot = Self::from_json_str(input)?;
        unescape_text_fields(&mut snapshot.value);
        Ok(snapshot)
    }

    /// Serialize as-is.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(&self.value)
            .map_err(|e| ExportError::snapshot(format!("Failed to serialize snapshot: {e}")))
    }

    /// Serialize for saving: pretty-printed, line breaks in text fields
    /// escaped as `\n`.
    pub fn to_saved_json(&self) -> Result<String> {
        let mut value = self.value.clone();
        escape_text_fields(&mut value);
        serde_json::to_string_pretty(&value)
            .map_err(|e| ExportError::snapshot(format!("Failed to serialize snapshot: {e}")))
    }

    pub fn as_value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Typed view of the cells. Cells of unknown type come back as
    /// [`Cell::Other`].
    pub fn graph(&self) -> Result<GraphJson> {
        GraphJson::deserialize(&self.value)
            .map_err(|e| ExportError::snapshot(format!("Unexpected snapshot shape: {e}")))
    }
}

/// Replace line breaks with `\n` in every `"text"` string, recursively.
pub fn escape_text_fields(value: &mut Value) {
    rewrite_text_fields(value, &|text| text.replace('\n', "\\n"));
}

/// Replace `\n` with line breaks in every `"text"` string, recursively.
pub fn unescape_text_fields(value: &mut Value) {
    rewrite_text_fields(value, &|text| text.replace("\\n", "\n"));
}

fn rewrite_text_fields(value: &mut Value, rewrite: &dyn Fn(&str) -> String) {
    match value {
        Value::Object(map) => {
            for (key, child) in map.iter_mut() {
                match child {
                    Value::String(text) if key == "text" => *text = rewrite(text),
                    _ => rewrite_text_fields(child, rewrite),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                rewrite_text_fields(item, rewrite);
            }
        }
        _ => {}
    }
}
