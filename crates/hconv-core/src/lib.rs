//! hconv-core: HTTP header text to structured output.
//!
//! This crate exposes the three pipeline stages as public modules, plus the
//! shared types, the output format selector and configuration.
//!
//! # Architecture
//!
//! ```text
//!                ┌──► records ──┐
//! Classifier ────┤              ├──► Aggregator ──► rendered output
//!                └──► raw ──────┘
//! ```
//!
//! The classifier runs as a single producer task; the aggregator drains both
//! bounded `tokio` channels on two consumer tasks and joins them before the
//! result is rendered.

pub mod aggregator;
pub mod classifier;
pub mod config;
pub mod converter;
pub mod error;
pub mod format;
pub mod normalizer;
pub mod types;

pub use converter::HeaderConverter;
pub use error::ConvertError;
pub use format::OutputFormat;
pub use types::{ConversionResult, HeaderRecord, RawLine};
