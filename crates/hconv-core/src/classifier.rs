//! Classifier: splits captured header text into records and raw lines.
//!
//! Each line is right-trimmed and dropped when fewer than
//! [`MIN_LINE_CHARS`] characters remain. The first retained line is tried as a
//! status line (`HTTP/1.1 200 OK`); every line, including a first line that is
//! not a status line, is then tried as a `Key: Value` pair. Anything else is a
//! raw line.
//!
//! [`Classifier::spawn`] runs the loop as a single producer task feeding two
//! bounded channels, one per output kind.

use regex::Regex;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::format::OutputFormat;
use crate::types::{HeaderRecord, RawLine};

/// Lines shorter than this after trimming are noise.
pub const MIN_LINE_CHARS: usize = 4;

// Separators are ASCII whitespace only; trailing trim stays Unicode-aware.
const STATUS_PATTERN: &str = r"(?P<code>[0-9]{3})(?-u:\s)(?P<message>.+)$";
const PAIR_PATTERN: &str = r"^(?P<key>.+?):(?-u:\s)+(?P<value>.+)$";

/// Outcome of classifying one retained line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    Record(HeaderRecord),
    Raw(RawLine),
}

/// Receiving ends of the two classifier output sequences.
pub struct Streams {
    pub records: mpsc::Receiver<HeaderRecord>,
    pub raw: mpsc::Receiver<RawLine>,
    /// Completes once the input is exhausted and both senders are dropped.
    pub producer: JoinHandle<()>,
}

/// Line classifier. Owns its compiled patterns; cloning is cheap.
#[derive(Debug, Clone)]
pub struct Classifier {
    status: Regex,
    pair: Regex,
    format: OutputFormat,
}

impl Classifier {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            status: Regex::new(STATUS_PATTERN).expect("status pattern must compile"),
            pair: Regex::new(PAIR_PATTERN).expect("pair pattern must compile"),
            format,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Match a status line and return the `code` record.
    pub fn classify_status(&self, line: &str) -> Option<HeaderRecord> {
        let caps = self.status.captures(line)?;
        trace!(code = &caps["code"], message = &caps["message"], "status match");
        Some(HeaderRecord::new(self.format.code_key(), &caps["code"]))
    }

    /// Match a `Key: Value` line. Continuation lines (leading space) never
    /// match.
    pub fn classify_pair(&self, line: &str) -> Option<HeaderRecord> {
        if line.starts_with(' ') {
            return None;
        }
        let caps = self.pair.captures(line)?;
        let key = caps.name("key")?.as_str();
        let value = caps.name("value")?.as_str();
        if key.is_empty() || value.is_empty() {
            return None;
        }
        trace!(key, value, "pair match");
        Some(HeaderRecord::new(self.format.normalize_key(key), value))
    }

    /// Classify an already trimmed line. `first` marks the first retained
    /// line of the input, the only one that may be a status line.
    pub fn classify(&self, line: &str, first: bool) -> Classified {
        if first {
            if let Some(record) = self.classify_status(line) {
                return Classified::Record(record);
            }
        }
        match self.classify_pair(line) {
            Some(record) => Classified::Record(record),
            None => Classified::Raw(RawLine::new(line)),
        }
    }

    /// Spawn the producer task reading `reader` to exhaustion.
    ///
    /// `capacity` bounds each channel (at least 1). A read error ends the
    /// loop exactly like EOF does. Must be called within a tokio runtime.
    pub fn spawn<R>(self, reader: R, capacity: usize) -> Streams
    where
        R: AsyncRead + Send + Unpin + 'static,
    {
        let capacity = capacity.max(1);
        let (records_tx, records) = mpsc::channel(capacity);
        let (raw_tx, raw) = mpsc::channel(capacity);

        let producer = tokio::spawn(async move {
            let mut reader = BufReader::new(reader);
            let mut buf = Vec::new();
            let mut first = true;
            loop {
                buf.clear();
                match reader.read_until(b'\n', &mut buf).await {
                    Ok(0) => break,
                    Ok(_) => {}
                    Err(err) => {
                        debug!(%err, "read failed; treating as end of input");
                        break;
                    }
                }
                let text = String::from_utf8_lossy(&buf);
                let Some(line) = retain(&text) else {
                    continue;
                };
                let sent = match self.classify(line, std::mem::take(&mut first)) {
                    Classified::Record(record) => {
                        debug!(key = %record.key, "record");
                        records_tx.send(record).await.is_ok()
                    }
                    Classified::Raw(raw) => {
                        debug!(text = %raw.text, "raw line");
                        raw_tx.send(raw).await.is_ok()
                    }
                };
                if !sent {
                    debug!("consumer dropped; stopping classifier");
                    break;
                }
            }
        });

        Streams {
            records,
            raw,
            producer,
        }
    }
}

/// Trim trailing whitespace and drop lines that are too short to matter.
pub fn retain(line: &str) -> Option<&str> {
    let trimmed = line.trim_end();
    (trimmed.chars().count() >= MIN_LINE_CHARS).then_some(trimmed)
}
