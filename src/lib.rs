//! gentheme — generate TextMate themes from a comma-separated description.
//!
//! Each line of a `.tmcsv` file is one row:
//!
//! ```text
//! // comment (column 0 only)
//! Header, <author>, <name>, <semanticClass>[, <uuid>]
//! Main, <background>, <foreground>, <caret>, <selection>, <invisibles>, <lineHighlight>
//! Gutter, <background>, <foreground>, <divider>, <selectionBackground>, <selectionForeground>
//! Scope, <name>, <background>, <foreground>, <fontStyle>, <scope selector>[, ...]
//! ```
//!
//! The pipeline is parse → assemble → encode → write (preview file or bundle).

pub mod assemble;
pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod ident;
pub mod install;
pub mod model;
pub mod parser;

use anyhow::{Context, Result};
use config::{Config, OutputMode};
use ident::IdGenerator;
use install::InstallReport;
use model::Document;
use std::fs;
use std::path::PathBuf;

/// Parse a theme description and assemble its document.
pub fn generate(input: &str, ids: &dyn IdGenerator) -> error::Result<Document> {
    let fragments = parser::parse(input, ids)?;
    Ok(assemble::assemble(fragments))
}

/// Result of one run.
#[derive(Debug)]
pub enum Outcome {
    Preview(PathBuf),
    Installed(InstallReport),
}

/// Read the configured input, build the theme and write it out.
///
/// Nothing is written unless the whole input parses.
pub fn run(config: &Config, ids: &dyn IdGenerator) -> Result<Outcome> {
    let text = fs::read_to_string(&config.input)
        .with_context(|| format!("failed to read {}", config.input.display()))?;
    let doc = generate(&text, ids)
        .with_context(|| format!("failed to parse {}", config.input.display()))?;
    tracing::debug!(
        name = %doc.name,
        scopes = doc.scope_rules().count(),
        "assembled theme"
    );

    match &config.mode {
        OutputMode::Preview => Ok(Outcome::Preview(install::write_preview(
            &doc,
            &config.input,
        )?)),
        OutputMode::Install { bundles_dir } => Ok(Outcome::Installed(install::install(
            &doc,
            bundles_dir,
            ids,
        )?)),
    }
}
