//! Contents.json data model for Apple's Asset Catalog format.
//!
//! Covers the subset of the Contents.json schema a macOS app-icon set
//! actually uses. Writing the manifest is optional; by default the tool
//! only produces the PNG files.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::export::ExportSpec;

/// Root structure of a Contents.json file.
#[derive(Serialize, Debug, Clone)]
pub struct ContentsFile {
    /// Image entries, one per generated PNG.
    pub images: Vec<ImageEntry>,

    /// Versioning and authorship information.
    pub info: Info,
}

/// One image entry within the asset catalog.
#[derive(Serialize, Debug, Clone)]
pub struct ImageEntry {
    /// The PNG filename this entry points at.
    pub filename: String,

    /// The device type; always "mac" for an app-icon set.
    pub idiom: String,

    /// The scale factor, "1x" or "2x".
    pub scale: String,

    /// The size in points, e.g. "16x16". A "2x" entry of this size is
    /// twice as many pixels.
    pub size: String,
}

/// Versioning and authorship information.
#[derive(Serialize, Debug, Clone)]
pub struct Info {
    pub version: u8,
    pub author: String,
}

impl ContentsFile {
    /// Build the manifest for an exported icon set: idiom `mac`, scale
    /// taken from the `@2x` filename suffix, point size derived from the
    /// pixel size.
    pub fn for_icon_set(spec: &ExportSpec) -> Self {
        let images = spec
            .entries
            .iter()
            .map(|entry| {
                let retina = entry.filename.contains("@2x");
                let points = if retina { entry.size / 2 } else { entry.size };
                ImageEntry {
                    filename: entry.filename.clone(),
                    idiom: "mac".to_string(),
                    scale: if retina { "2x" } else { "1x" }.to_string(),
                    size: format!("{points}x{points}"),
                }
            })
            .collect();

        Self {
            images,
            info: Info {
                version: 1,
                author: "overpass-icons".to_string(),
            },
        }
    }

    /// Write the manifest as pretty-printed JSON into `dir`.
    pub fn write(&self, dir: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize Contents.json")?;
        std::fs::write(dir.join("Contents.json"), json).context("Failed to write Contents.json")
    }
}
