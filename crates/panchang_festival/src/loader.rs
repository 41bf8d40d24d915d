//! Reading festival definitions from JSON.
//!
//! The top level must be an array of festival objects, or an object with a
//! `festivals` array. Individual entries that do not deserialize are
//! skipped with a warning so one bad entry cannot hide the rest.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde_json::Value;

use crate::error::FestivalError;
use crate::festival_types::Festival;

pub fn load_festivals_from_str(json: &str) -> Result<Vec<Festival>, FestivalError> {
    let root: Value = serde_json::from_str(json)?;
    let entries = match root {
        Value::Array(entries) => entries,
        Value::Object(mut obj) => match obj.remove("festivals") {
            Some(Value::Array(entries)) => entries,
            _ => return Err(FestivalError::NotAnArray("object without `festivals` array")),
        },
        other => return Err(FestivalError::NotAnArray(json_kind(&other))),
    };

    let mut seen = HashSet::new();
    let mut festivals = Vec::with_capacity(entries.len());
    for (i, entry) in entries.into_iter().enumerate() {
        if !entry.is_object() {
            warn!("festival entry {i}: expected object, found {}", json_kind(&entry));
            continue;
        }
        let festival: Festival = match serde_json::from_value(entry) {
            Ok(f) => f,
            Err(e) => {
                warn!("festival entry {i}: {e}");
                continue;
            }
        };
        if festival.id.trim().is_empty() {
            warn!("festival entry {i}: empty id");
            continue;
        }
        if !seen.insert(festival.id.clone()) {
            warn!("festival entry {i}: duplicate id {}, keeping the first", festival.id);
            continue;
        }
        if !festival.rule.is_recognized() {
            debug!("festival {}: rule `{}` not recognized", festival.id, festival.rule.kind());
        }
        festivals.push(festival);
    }
    debug!("loaded {} festivals", festivals.len());
    Ok(festivals)
}

pub fn load_festivals_from_path(path: impl AsRef<Path>) -> Result<Vec<Festival>, FestivalError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| FestivalError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_festivals_from_str(&text)
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
