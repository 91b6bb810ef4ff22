//! Command-line surface.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use hconv_core::config::Config;
use hconv_core::HeaderConverter;
use hconv_feeds::InputSource;
use tracing::{debug, warn};

#[derive(Debug, Parser)]
#[command(
    name = "hconv",
    about = "Convert captured HTTP response headers (e.g. curl -v output) into JSON"
)]
pub struct Cli {
    /// Read headers from this file instead of stdin.
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Load configuration from this file instead of ~/.config/hconv/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write debug logs to stderr.
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path)
                .with_context(|| format!("loading config from {}", path.display())),
            None => Ok(Config::load().unwrap_or_else(|err| {
                warn!("ignoring unreadable config file: {err:#}");
                Config::defaults()
            })),
        }
    }
}

/// Run one conversion and return the rendered output.
pub async fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = cli.load_config()?;
    let source = InputSource::from_path(cli.input.clone());
    debug!(%source, format = %config.convert.output_format, "starting conversion");

    let input = source.open().await?;
    let output = HeaderConverter::from_config(&config)
        .output(input)
        .await
        .with_context(|| format!("converting headers from {source}"))?;
    Ok(output)
}
