// src/simplify/io.rs

use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use super::item::{RawItem, SimplifiedItem};
use crate::errors::PipelineError;

const BOM: char = '\u{feff}';

/// Reads the exported collection. Tolerates a leading BOM and, once, missing
/// outer brackets. Anything that is not an array of objects is rejected
/// before a single record is touched.
pub fn load_raw_items(path: &Path) -> Result<Vec<RawItem>, PipelineError> {
    let content =
        fs::read_to_string(path).map_err(|e| PipelineError::io(path.display().to_string(), e))?;
    parse_raw_items(&content)
}

pub fn parse_raw_items(content: &str) -> Result<Vec<RawItem>, PipelineError> {
    let content = content.strip_prefix(BOM).unwrap_or(content);

    let value = match serde_json::from_str::<Value>(content) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("Error decoding JSON: {e}; retrying with outer brackets repaired");
            serde_json::from_str::<Value>(&repair_brackets(content)).map_err(|e2| {
                PipelineError::InputFormat(format!(
                    "could not decode input even after bracket repair: {e2} (first error: {e})"
                ))
            })?
        }
    };

    let Value::Array(records) = value else {
        return Err(PipelineError::InputFormat(
            "expected a JSON array of records".to_string(),
        ));
    };

    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| match record {
            Value::Object(map) => Ok(map),
            other => Err(PipelineError::InputFormat(format!(
                "record {i} is not an object (found {})",
                json_kind(&other)
            ))),
        })
        .collect()
}

/// Wraps the text in `[`/`]` where either is missing.
fn repair_brackets(content: &str) -> String {
    let trimmed = content.trim();
    let mut repaired = String::with_capacity(content.len() + 2);
    if !trimmed.starts_with('[') {
        repaired.push('[');
    }
    repaired.push_str(content);
    if !trimmed.ends_with(']') {
        repaired.push(']');
    }
    repaired
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Writes the simplified batch as indented UTF-8 JSON (non-ASCII left as-is).
pub fn save_simplified(items: &[SimplifiedItem], path: &Path) -> Result<(), PipelineError> {
    let display = path.display().to_string();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PipelineError::io(&display, e))?;
    }

    let file = File::create(path).map_err(|e| PipelineError::io(&display, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, items)?;
    writer.flush().map_err(|e| PipelineError::io(&display, e))?;
    Ok(())
}
