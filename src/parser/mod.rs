//! Theme description parser — line-by-line fold into typed sections.
//!
//! Lines starting with `/` in column 0 are comments. Every other line is split
//! on `,` and classified by [`row::classify`]. Repeated `Header`, `Main` and
//! `Gutter` rows overwrite earlier ones; `Scope` rows accumulate in order.

pub mod row;

use crate::error::{Result, Section, ThemeError};
use crate::ident::IdGenerator;
use crate::model::{Globals, Gutter, Header, ScopeRule};
use row::Row;

/// Sections collected while scanning the input.
#[derive(Debug, Default)]
pub struct Sections {
    pub header: Option<Header>,
    pub globals: Option<Globals>,
    pub gutter: Option<Gutter>,
    pub scopes: Vec<ScopeRule>,
}

/// Sections of a complete input, with the required ones present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragments {
    pub header: Header,
    pub globals: Globals,
    pub gutter: Option<Gutter>,
    pub scopes: Vec<ScopeRule>,
}

/// Parse a full theme description.
pub fn parse(input: &str, ids: &dyn IdGenerator) -> Result<Fragments> {
    let mut sections = Sections::default();

    for (idx, line) in input.split('\n').enumerate() {
        if is_comment(line) {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        sections.apply(row::classify(&fields, idx + 1, ids)?, idx + 1);
    }

    sections.finish()
}

/// Only a `/` in the very first column marks a comment.
fn is_comment(line: &str) -> bool {
    line.starts_with('/')
}

impl Sections {
    /// Fold one classified row in; the last `Header`/`Main`/`Gutter` wins.
    pub fn apply(&mut self, row: Row, line: usize) {
        match row {
            Row::Header(header) => {
                if self.header.replace(header).is_some() {
                    tracing::debug!(line, "Header row overrides an earlier one");
                }
            }
            Row::Main(globals) => {
                if self.globals.replace(globals).is_some() {
                    tracing::debug!(line, "Main row overrides an earlier one");
                }
            }
            Row::Gutter(gutter) => {
                if self.gutter.replace(gutter).is_some() {
                    tracing::debug!(line, "Gutter row overrides an earlier one");
                }
            }
            Row::Scope(rule) => {
                tracing::trace!(line, scope = %rule.scope, "scope rule");
                self.scopes.push(rule);
            }
            Row::Unrecognized => tracing::trace!(line, "skipping unrecognized row"),
        }
    }

    /// Check that the required sections were seen.
    pub fn finish(self) -> Result<Fragments> {
        let header = self
            .header
            .ok_or(ThemeError::MissingSection(Section::Header))?;
        let globals = self
            .globals
            .ok_or(ThemeError::MissingSection(Section::Main))?;
        // Only the Header that took effect names the theme on disk.
        row::validate_theme_name(&header.name)?;
        tracing::debug!(
            scopes = self.scopes.len(),
            gutter = self.gutter.is_some(),
            "parsed theme {}",
            header.name
        );
        Ok(Fragments {
            header,
            globals,
            gutter: self.gutter,
            scopes: self.scopes,
        })
    }
}
