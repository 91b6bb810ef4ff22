//! Aggregator: drains both classifier sequences and builds the output mapping.
//!
//! Each sequence gets its own consumer task which owns the collection it
//! fills and hands it back through its `JoinHandle`, so no locking is needed.
//! [`drain`] joins both consumers before returning.

use std::collections::HashMap;

use serde_json::{Map, Value};
use tokio::sync::mpsc;

use crate::error::ConvertError;
use crate::format::OutputFormat;
use crate::types::{ConversionResult, HeaderRecord, RawLine};

/// Collect both sequences until their senders are dropped.
///
/// Order is preserved within each sequence. A duplicate key keeps the value
/// that arrived last on the record sequence.
pub async fn drain(
    records: mpsc::Receiver<HeaderRecord>,
    raw: mpsc::Receiver<RawLine>,
) -> Result<(HashMap<String, String>, Vec<String>), ConvertError> {
    let fields = tokio::spawn(collect_records(records));
    let raw = tokio::spawn(collect_raw(raw));
    let (fields, raw) = tokio::join!(fields, raw);
    Ok((fields?, raw?))
}

async fn collect_records(mut rx: mpsc::Receiver<HeaderRecord>) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    while let Some(record) = rx.recv().await {
        fields.insert(record.key, record.value);
    }
    fields
}

async fn collect_raw(mut rx: mpsc::Receiver<RawLine>) -> Vec<String> {
    let mut raw = Vec::new();
    while let Some(line) = rx.recv().await {
        raw.push(line.text);
    }
    raw
}

/// Build the flat output mapping. The raw lines are attached under the
/// format's raw key only when there are any; they replace a header field that
/// happened to normalize to the same key.
pub fn to_mapping(result: &ConversionResult, format: OutputFormat) -> Map<String, Value> {
    let mut mapping: Map<String, Value> = result
        .fields
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();
    if !result.raw.is_empty() {
        let raw = result.raw.iter().cloned().map(Value::String).collect();
        mapping.insert(format.raw_key().to_string(), Value::Array(raw));
    }
    mapping
}

/// Render a result in the given format.
pub fn render(result: &ConversionResult, format: OutputFormat) -> Result<String, ConvertError> {
    format.serialize(&to_mapping(result, format))
}
