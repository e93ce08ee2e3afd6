//! Procedural generator for the OverPass app icon set.
//!
//! Draws the bridge-and-keyboard-keys artwork entirely in code and exports
//! it at the ten pixel sizes a macOS `AppIcon.appiconset` requires. The
//! same composition renders at every size; only the scale changes.

pub mod canvas;
pub mod compose;
pub mod contents_json;
pub mod export;
pub mod font;
pub mod palette;

pub use compose::{compose, REFERENCE_SIZE};
pub use export::{export_all, ExportSpec, IconEntry};
