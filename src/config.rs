//! Resolved run configuration.

use crate::cli::Cli;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Extension of theme description files.
pub const INPUT_EXTENSION: &str = "tmcsv";

/// Bundles directory relative to the home directory.
const DEFAULT_BUNDLES_DIR: &str = "Library/Application Support/TextMate/Bundles";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Write `<input>.plist` next to the input.
    Preview,
    /// Install into `<bundles_dir>/<name>.tmbundle`.
    Install { bundles_dir: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub mode: OutputMode,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let input = resolve_input(&cli.input);
        if !input.is_file() {
            bail!("{} not found", input.display());
        }

        let mode = if cli.build {
            let bundles_dir = match &cli.bundles_dir {
                Some(dir) => dir.clone(),
                None => default_bundles_dir()
                    .context("could not determine home directory; pass --bundles-dir")?,
            };
            OutputMode::Install { bundles_dir }
        } else {
            OutputMode::Preview
        };

        tracing::debug!(input = %input.display(), ?mode, "resolved configuration");
        Ok(Self { input, mode })
    }
}

/// Append `.tmcsv` unless the path already ends with it.
pub fn resolve_input(raw: &str) -> PathBuf {
    let path = Path::new(raw);
    if path.extension().and_then(|e| e.to_str()) == Some(INPUT_EXTENSION) {
        path.to_path_buf()
    } else {
        PathBuf::from(format!("{}.{}", raw, INPUT_EXTENSION))
    }
}

pub fn default_bundles_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DEFAULT_BUNDLES_DIR))
}
