//! Reading documents and writing results

use crate::error::{ErrorExt, FiError, Result};
use crate::value::Value;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read and parse one JSON document from `path`, or from stdin when absent
pub fn read_document(path: Option<&Path>) -> Result<Value> {
    let text = match path {
        Some(path) => {
            debug!("Reading document from {}", path.display());
            std::fs::read_to_string(path).map_err(|e| FiError::from(e).with_path(path))?
        }
        None => {
            debug!("Reading document from stdin");
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .to_input_error("Failed to read stdin")?;
            text
        }
    };

    parse_document(&text).map_err(|e| match path {
        Some(path) => e.with_path(path),
        None => e,
    })
}

/// Parse a JSON document, keeping mapping keys in document order
pub fn parse_document(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Serialize a result as JSON
pub fn render(value: &Value, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.to_fi("Failed to serialize result")
}
