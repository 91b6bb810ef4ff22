//! File feed: reads captured headers from a file on disk.

use std::path::Path;

use tracing::debug;

use crate::FeedError;

pub async fn open(path: &Path) -> Result<tokio::fs::File, FeedError> {
    debug!(path = %path.display(), "reading headers from file");
    tokio::fs::File::open(path)
        .await
        .map_err(|source| FeedError::Open {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hconv_core::HeaderConverter;
    use std::io::Write;

    #[tokio::test]
    async fn file_contents_are_converted() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "HTTP/2 301 Moved\r\nLocation: /next\r\n").unwrap();

        let file = open(tmp.path()).await.unwrap();
        let out = HeaderConverter::new().output(file).await.unwrap();
        assert_eq!(out, r#"{"code":"301","location":"/next"}"#);
    }

    #[tokio::test]
    async fn missing_file_reports_path() {
        let err = open(Path::new("/nonexistent/hconv/headers.txt"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/hconv/headers.txt"));
    }
}
