//! Fold parsed sections into the theme document.
//!
//! The theming engine treats the first `settings` entry as the default
//! style, so the globals always go in front of the scope rules.

use crate::model::{Document, GlobalsEntry, SettingsEntry};
use crate::parser::Fragments;

pub fn assemble(fragments: Fragments) -> Document {
    let Fragments {
        header,
        globals,
        gutter,
        scopes,
    } = fragments;

    let mut settings = Vec::with_capacity(scopes.len() + 1);
    settings.push(SettingsEntry::Globals(GlobalsEntry { settings: globals }));
    settings.extend(scopes.into_iter().map(SettingsEntry::Scope));

    Document {
        author: header.author,
        name: header.name,
        semantic_class: header.semantic_class,
        settings,
        uuid: header.uuid,
        gutter_settings: gutter,
    }
}
