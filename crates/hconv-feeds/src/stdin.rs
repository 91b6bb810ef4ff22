//! Standard input feed.

use tracing::debug;

/// Async handle on the process's standard input.
pub fn open() -> tokio::io::Stdin {
    debug!("reading headers from stdin");
    tokio::io::stdin()
}
