//! hconv: convert captured HTTP response headers into JSON.
//!
//! The pipeline lives in [`hconv_core`]; input adapters in [`hconv_feeds`].
//! This crate adds the command-line surface in [`cli`] so integration tests
//! can drive it without spawning the binary.
//!
//! ```text
//! stdin / file ──► Classifier ──► Aggregator ──► one line of JSON on stdout
//! ```

pub mod cli;

pub use hconv_core::{ConversionResult, HeaderConverter, OutputFormat};
