//! Writing themes to disk: a preview file next to the input, or a bundle.
//!
//! A bundle is laid out as:
//!
//! ```text
//! <bundles_dir>/<name>.tmbundle/
//!     info.plist
//!     Themes/<name>.tmTheme
//! ```

use crate::codec;
use crate::error::{Result, ThemeError};
use crate::ident::IdGenerator;
use crate::model::Document;
use filetime::FileTime;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const PREVIEW_EXTENSION: &str = "plist";

/// Paths making up one theme bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleLayout {
    root: PathBuf,
    theme_name: String,
}

impl BundleLayout {
    pub fn new(bundles_dir: &Path, theme_name: &str) -> Self {
        Self {
            root: bundles_dir.join(format!("{}.tmbundle", theme_name)),
            theme_name: theme_name.to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    pub fn info_path(&self) -> PathBuf {
        self.root.join("info.plist")
    }

    pub fn themes_dir(&self) -> PathBuf {
        self.root.join("Themes")
    }

    pub fn theme_path(&self) -> PathBuf {
        self.themes_dir().join(format!("{}.tmTheme", self.theme_name))
    }
}

/// Bundle metadata written once, when the bundle is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleInfo {
    pub contact_name: String,
    pub description: String,
    pub name: String,
    pub uuid: String,
}

impl BundleInfo {
    pub fn for_theme(doc: &Document, uuid: String) -> Self {
        Self {
            contact_name: doc.author.clone(),
            description: format!(
                "A brilliant theme by {} called {}.",
                doc.author, doc.name
            ),
            name: format!("{} Bundle", doc.name),
            uuid,
        }
    }
}

/// What an install touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub layout: BundleLayout,
    /// The bundle directory did not exist before this install.
    pub created: bool,
}

/// Install `doc` into its bundle under `bundles_dir`.
///
/// An existing bundle keeps its `info.plist`; only the theme file is
/// replaced. The bundle directory's mtime is bumped so the editor reloads it.
pub fn install(doc: &Document, bundles_dir: &Path, ids: &dyn IdGenerator) -> Result<InstallReport> {
    let layout = BundleLayout::new(bundles_dir, &doc.name);
    let theme = codec::encode(doc)?;

    let created = !layout.root().is_dir();
    let themes_dir = layout.themes_dir();
    fs::create_dir_all(&themes_dir).map_err(|e| ThemeError::io(&themes_dir, e))?;

    if created {
        tracing::info!(bundle = %layout.root().display(), "creating bundle");
        let info = codec::encode(&BundleInfo::for_theme(doc, ids.generate()))?;
        write_file(&layout.info_path(), &info)?;
    }

    write_file(&layout.theme_path(), &theme)?;
    filetime::set_file_mtime(layout.root(), FileTime::now())
        .map_err(|e| ThemeError::io(layout.root(), e))?;

    Ok(InstallReport { layout, created })
}

/// Preview path: the input path with a `.plist` extension.
fn preview_path(input: &Path) -> PathBuf {
    input.with_extension(PREVIEW_EXTENSION)
}

/// Write `doc` next to `input` for inspection. Returns the written path.
pub fn write_preview(doc: &Document, input: &Path) -> Result<PathBuf> {
    let bytes = codec::encode(doc)?;
    let path = preview_path(input);
    write_file(&path, &bytes)?;
    Ok(path)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|e| ThemeError::io(path, e))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote");
    Ok(())
}
