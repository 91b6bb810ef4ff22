//! Output format selector.
//!
//! [`OutputFormat`] is a closed enum with a single variant today. Everything
//! that depends on the format (its name, the reserved keys, how header keys are
//! rewritten and how the final mapping is serialized) is a `match` on the
//! variant in this file, so adding a format means adding one arm per method.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ConvertError;
use crate::normalizer;

/// Selects the structured representation produced by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
        }
    }

    /// Reserved key holding the status code taken from the status line.
    pub fn code_key(self) -> &'static str {
        match self {
            OutputFormat::Json => "code",
        }
    }

    /// Reserved key holding the unparsed lines, present only when any exist.
    pub fn raw_key(self) -> &'static str {
        match self {
            OutputFormat::Json => "raw",
        }
    }

    /// Rewrite a raw header key into a field name for this format.
    pub fn normalize_key(self, key: &str) -> String {
        match self {
            OutputFormat::Json => normalizer::normalize(key),
        }
    }

    /// Serialize an aggregated mapping into this format.
    pub fn serialize(self, mapping: &Map<String, Value>) -> Result<String, ConvertError> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(mapping)?),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
