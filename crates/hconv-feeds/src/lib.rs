//! hconv-feeds: input source adapters for hconv.
//!
//! Each adapter opens a byte stream carrying captured header text and hands it
//! to the converter as a boxed [`AsyncRead`]. Only one source is read per
//! conversion.

use std::path::PathBuf;

use thiserror::Error;
use tokio::io::AsyncRead;

pub mod file;
pub mod stdin;

/// A readable input stream, ready to hand to the converter.
pub type Input = Box<dyn AsyncRead + Send + Unpin>;

/// Errors raised while opening an input source.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where captured header text is read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputSource {
    /// Process standard input.
    #[default]
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl InputSource {
    /// `None` selects stdin.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(InputSource::Stdin, InputSource::File)
    }

    pub async fn open(&self) -> Result<Input, FeedError> {
        match self {
            InputSource::Stdin => Ok(Box::new(stdin::open())),
            InputSource::File(path) => Ok(Box::new(file::open(path).await?)),
        }
    }
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "stdin"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
