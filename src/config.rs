use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

/// Address the listener binds to. The port is fixed; the serve-root
/// directory is the only configurable piece.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:4221";

#[derive(Parser, Debug)]
#[command(about = "Minimal HTTP/1.1 file server over raw TCP")]
struct Args {
    /// Directory to serve files from
    #[arg(long, default_value = ".")]
    directory: PathBuf,
}

/// Immutable server configuration, shared read-only by every connection.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory backing `/files/` requests.
    pub directory: PathBuf,
    /// Address the listener binds to.
    pub listen_addr: String,
}

impl Config {
    /// Parses the command line and validates the serve directory.
    pub fn from_args() -> anyhow::Result<Self> {
        let args = Args::parse();
        Self::new(args.directory)
    }

    /// Builds a config for the given serve directory, failing fast if the
    /// path does not exist or is not a directory.
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        let metadata = std::fs::metadata(&directory)
            .with_context(|| format!("cannot access directory '{}'", directory.display()))?;

        if !metadata.is_dir() {
            anyhow::bail!("'{}' is not a directory", directory.display());
        }

        Ok(Self {
            directory,
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        })
    }
}
