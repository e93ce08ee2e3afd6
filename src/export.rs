//! Batch export of the icon set as PNG files.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ColorType, ImageEncoder, RgbImage};

use crate::compose::compose;

/// One rendition to produce: pixel size and target filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    pub size: u32,
    pub filename: String,
}

impl IconEntry {
    pub fn new(size: u32, filename: impl Into<String>) -> Self {
        Self {
            size,
            filename: filename.into(),
        }
    }
}

/// Ordered list of renditions; the whole output surface of one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSpec {
    pub entries: Vec<IconEntry>,
}

impl ExportSpec {
    /// The ten renditions a macOS `AppIcon.appiconset` requires. Note that
    /// point sizes repeat: `16x16@2x` and `32x32` are both 32 pixels.
    pub fn macos_app_icon() -> Self {
        let entries = vec![
            IconEntry::new(16, "icon_16x16.png"),
            IconEntry::new(32, "icon_16x16@2x.png"),
            IconEntry::new(32, "icon_32x32.png"),
            IconEntry::new(64, "icon_32x32@2x.png"),
            IconEntry::new(128, "icon_128x128.png"),
            IconEntry::new(256, "icon_128x128@2x.png"),
            IconEntry::new(256, "icon_256x256.png"),
            IconEntry::new(512, "icon_256x256@2x.png"),
            IconEntry::new(512, "icon_512x512.png"),
            IconEntry::new(1024, "icon_512x512@2x.png"),
        ];
        Self { entries }
    }
}

/// Compose and write every entry of `spec` into `out_dir`, creating the
/// directory if needed.
///
/// Entries are written in order, overwriting same-named files. The first
/// failure aborts the batch and leaves earlier files in place.
pub fn export_all(spec: &ExportSpec, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir).context("Can't create output directory")?;

    println!("Generating OverPass app icons...");
    for entry in &spec.entries {
        println!("  Creating {} ({}x{})...", entry.filename, entry.size, entry.size);
        let icon = compose(entry.size);
        let path = out_dir.join(&entry.filename);
        save_png(&icon, &path)?;
        println!("    ✓ Saved to {}", path.display());
    }

    println!();
    println!("✓ All icon sizes generated!");
    println!("Icons saved to: {}", out_dir.display());

    Ok(())
}

/// Write `image` as a PNG file at `path`.
fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_png(image, &mut out)?;
    out.flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Encode `image` as a compressed PNG into any writer.
pub fn write_png<W: Write>(image: &RgbImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, FilterType::Adaptive);
    encoder
        .write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgb8)
        .context("Failed to encode PNG")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_macos_app_icon_lists_ten_renditions() {
        let spec = ExportSpec::macos_app_icon();
        assert_eq!(spec.entries.len(), 10);
        assert_eq!(spec.entries[0], IconEntry::new(16, "icon_16x16.png"));
        assert_eq!(spec.entries[1], IconEntry::new(32, "icon_16x16@2x.png"));
        assert_eq!(spec.entries[9], IconEntry::new(1024, "icon_512x512@2x.png"));
    }

    #[test]
    fn test_write_png_round_trips_through_memory() {
        let img = compose(16);
        let mut buf = Vec::new();
        write_png(&img, &mut buf).unwrap();
        let decoded = image::load_from_memory(&buf).unwrap();
        assert_eq!(decoded.width(), 16);
        assert_eq!(decoded.height(), 16);
    }

    #[test]
    fn test_export_all_writes_every_entry() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("icons");
        let spec = ExportSpec {
            entries: vec![
                IconEntry::new(16, "icon_16x16.png"),
                IconEntry::new(32, "icon_16x16@2x.png"),
            ],
        };
        export_all(&spec, &out).unwrap();

        let mut names: Vec<String> = std::fs::read_dir(&out)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["icon_16x16.png", "icon_16x16@2x.png"]);

        let img = image::open(out.join("icon_16x16@2x.png")).unwrap();
        assert_eq!(img.width(), 32);
        assert_eq!(img.height(), 32);
    }

    #[test]
    fn test_export_all_is_reproducible() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("icons");
        let spec = ExportSpec {
            entries: vec![IconEntry::new(32, "icon_32x32.png")],
        };
        export_all(&spec, &out).unwrap();
        let first = std::fs::read(out.join("icon_32x32.png")).unwrap();
        export_all(&spec, &out).unwrap();
        let second = std::fs::read(out.join("icon_32x32.png")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_export_all_propagates_directory_failure() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let result = export_all(&ExportSpec::macos_app_icon(), &blocker.join("icons"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Can't create output directory"));
    }
}
