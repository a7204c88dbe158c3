//! Data model for a parsed theme, shaped after the `.tmTheme` property list.
//!
//! Field names serialize to the keys the theming engine expects, so the same
//! types are used for encoding and for reading a generated theme back.

use serde::{Deserialize, Serialize};

/// Document-level metadata from the `Header` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub author: String,
    /// Theme title, also used as a path segment when installing.
    pub name: String,
    pub semantic_class: String,
    pub uuid: String,
}

/// Default styling from the `Main` row. Every value is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Globals {
    pub background: String,
    pub foreground: String,
    pub caret: String,
    pub selection: String,
    pub invisibles: String,
    pub line_highlight: String,
}

/// Gutter colors from the `Gutter` row. Unset values are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gutter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_foreground: Option<String>,
}

/// Style overrides of a scope rule. Unset attributes are absent keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
}

/// One `Scope` row: a style keyed by a scope selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeRule {
    pub name: String,
    pub scope: String,
    pub settings: Style,
}

/// The globals wrapped as a settings entry with no name or scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalsEntry {
    pub settings: Globals,
}

/// An element of the document's `settings` array.
///
/// Scope is listed first so that reading a theme back only falls through to
/// `Globals` for the entry without `name`/`scope`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingsEntry {
    Scope(ScopeRule),
    Globals(GlobalsEntry),
}

/// Complete theme document, ready to encode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub author: String,
    pub name: String,
    pub semantic_class: String,
    /// Globals first, then scope rules in input order.
    pub settings: Vec<SettingsEntry>,
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gutter_settings: Option<Gutter>,
}

impl Document {
    /// Default styling, held by the first settings entry.
    pub fn globals(&self) -> Option<&Globals> {
        match self.settings.first() {
            Some(SettingsEntry::Globals(entry)) => Some(&entry.settings),
            _ => None,
        }
    }

    pub fn scope_rules(&self) -> impl Iterator<Item = &ScopeRule> {
        self.settings.iter().filter_map(|entry| match entry {
            SettingsEntry::Scope(rule) => Some(rule),
            SettingsEntry::Globals(_) => None,
        })
    }
}
