//! [`HeaderConverter`] wires the classifier and the aggregator together.
//!
//! Settings (output format, worker count) are fixed when the converter is
//! built. The input reader is supplied per call.

use std::time::Instant;

use tokio::io::AsyncRead;
use tracing::{debug, info};

use crate::aggregator;
use crate::classifier::Classifier;
use crate::config::Config;
use crate::error::ConvertError;
use crate::format::OutputFormat;
use crate::types::ConversionResult;

#[derive(Debug, Clone)]
pub struct HeaderConverter {
    classifier: Classifier,
    num_workers: usize,
}

impl Default for HeaderConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderConverter {
    /// JSON output, one channel slot per available CPU.
    pub fn new() -> Self {
        Self::from_config(&Config::defaults())
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            classifier: Classifier::new(config.convert.output_format),
            num_workers: config.convert.worker_count(),
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.classifier = Classifier::new(format);
        self
    }

    /// Bound on in-flight items per channel. Zero is treated as one.
    pub fn with_num_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers.max(1);
        self
    }

    pub fn output_format(&self) -> OutputFormat {
        self.classifier.format()
    }

    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Classify and aggregate everything `reader` yields.
    pub async fn convert<R>(&self, reader: R) -> Result<ConversionResult, ConvertError>
    where
        R: AsyncRead + Send + Unpin + 'static,
    {
        let started = Instant::now();
        let streams = self.classifier.clone().spawn(reader, self.num_workers);
        let (fields, raw) = aggregator::drain(streams.records, streams.raw).await?;
        streams.producer.await?;
        let elapsed = started.elapsed();
        info!(
            ?elapsed,
            fields = fields.len(),
            raw = raw.len(),
            "conversion finished"
        );
        let result = ConversionResult {
            fields,
            raw,
            elapsed,
        };
        if result.is_empty() {
            debug!("input contained no header lines");
        }
        Ok(result)
    }

    /// Convert `reader` and render the result in the configured format.
    pub async fn output<R>(&self, reader: R) -> Result<String, ConvertError>
    where
        R: AsyncRead + Send + Unpin + 'static,
    {
        let result = self.convert(reader).await?;
        aggregator::render(&result, self.output_format())
    }
}
