//! Test builders: captured-header text and one-call conversion helpers.
//!
//! These are designed for readability in test assertions, not for production
//! use. They panic on failure rather than returning `Result`.

use hconv::{ConversionResult, HeaderConverter, OutputFormat};
use hconv_core::aggregator;
use serde_json::Value;

// ---------------------------------------------------------------------------
// HeaderTextBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for captured header text.
///
/// ```rust
/// let input = HeaderTextBuilder::status("HTTP/1.1 200 OK")
///     .header("Content-Type", "text/html")
///     .line("garbage that is long enough")
///     .crlf()
///     .build();
/// ```
#[derive(Default)]
pub struct HeaderTextBuilder {
    lines: Vec<String>,
    crlf: bool,
}

impl HeaderTextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(line: &str) -> Self {
        Self::new().line(line)
    }

    pub fn header(self, key: &str, value: &str) -> Self {
        self.line(&format!("{key}: {value}"))
    }

    pub fn line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn crlf(mut self) -> Self {
        self.crlf = true;
        self
    }

    pub fn build(self) -> String {
        let eol = if self.crlf { "\r\n" } else { "\n" };
        self.lines.iter().map(|l| format!("{l}{eol}")).collect()
    }
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

/// Convert `input` with the default converter.
pub async fn convert(input: &str) -> ConversionResult {
    HeaderConverter::new()
        .convert(std::io::Cursor::new(input.as_bytes().to_vec()))
        .await
        .expect("conversion must succeed")
}

/// Convert and render `input`, returning the output string.
pub async fn output(input: &str) -> String {
    HeaderConverter::new()
        .output(std::io::Cursor::new(input.as_bytes().to_vec()))
        .await
        .expect("conversion must succeed")
}

/// The in-memory JSON mapping for a result.
pub fn mapping(result: &ConversionResult) -> Value {
    Value::Object(aggregator::to_mapping(result, OutputFormat::Json))
}
