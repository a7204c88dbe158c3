//! Error types for theme generation.

use std::fmt;
use std::path::PathBuf;

/// Section whose row is required exactly once per input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Main,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Header => f.write_str("Header"),
            Section::Main => f.write_str("Main"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A known row kind with the wrong shape.
    #[error("line {line}: {message}")]
    MalformedRow { line: usize, message: String },

    #[error("missing required {0} row")]
    MissingSection(Section),

    /// The theme name cannot be used as a path segment.
    #[error("invalid theme name {name:?}: {reason}")]
    InvalidThemeName { name: String, reason: &'static str },

    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("property list error: {0}")]
    Plist(#[from] plist::Error),
}

pub type Result<T> = std::result::Result<T, ThemeError>;

impl ThemeError {
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
