//! Core types for hconv-core.
//!
//! [`HeaderRecord`] and [`RawLine`] only exist in transit between the
//! classifier and the aggregator. [`ConversionResult`] is what one
//! conversion produces before it is rendered.

use std::collections::HashMap;
use std::time::Duration;

/// A classified `key: value` unit. The key is already normalized for the
/// selected output format (or is the reserved status key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRecord {
    pub key: String,
    pub value: String,
}

impl HeaderRecord {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A retained input line that is neither a status line nor a pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// The line with trailing whitespace removed.
    pub text: String,
}

impl RawLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Aggregated output of a single conversion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionResult {
    /// Normalized key to raw value. Duplicate keys keep the last value seen on
    /// the record stream.
    pub fields: HashMap<String, String>,
    /// Unparsed lines in input order.
    pub raw: Vec<String>,
    /// Wall-clock time spent classifying and aggregating.
    pub elapsed: Duration,
}

impl ConversionResult {
    /// True when neither a field nor a raw line was produced.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.raw.is_empty()
    }
}
