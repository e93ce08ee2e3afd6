//! Font resolution and text drawing.
//!
//! Candidate font files are tried in order; when none loads, the built-in
//! bitmap face takes over, so resolution is total and text never causes a
//! failure. A resolved face is size-independent: sizing happens at measure
//! and draw time.

use std::fs;

use rusttype::{point, Font, PositionedGlyph, Scale};

use crate::canvas::Canvas;
use crate::palette::Color;

/// Font files tried in order for the title and badge lettering.
pub const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
];

/// A resolved, always-usable font face.
pub enum FontFace {
    /// A TrueType face loaded from one of the candidate paths.
    TrueType(Font<'static>),
    /// The built-in 5x7 bitmap face.
    Builtin,
}

/// Inked bounding box of a piece of text, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
}

impl FontFace {
    /// Resolve the first loadable candidate, falling back to the built-in
    /// face. Never fails.
    pub fn resolve(candidates: &[&str]) -> FontFace {
        for path in candidates {
            if let Ok(data) = fs::read(path) {
                if let Some(font) = Font::try_from_vec(data) {
                    return FontFace::TrueType(font);
                }
            }
        }
        FontFace::Builtin
    }

    /// Measure the inked bounding box of `text` at `px` pixels.
    pub fn measure(&self, text: &str, px: f32) -> TextExtent {
        match self {
            FontFace::TrueType(font) => {
                let (_, bounds) = layout_glyphs(font, text, px);
                match bounds {
                    Some(b) => TextExtent {
                        width: (b.x1 - b.x0) as u32,
                        height: (b.y1 - b.y0) as u32,
                    },
                    None => TextExtent { width: 0, height: 0 },
                }
            }
            FontFace::Builtin => bitmap_extent(text, px),
        }
    }

    /// Draw `text` so its inked box is centered on (`cx`, `cy`), blended at
    /// `opacity`. Glyphs the face cannot render leave no ink.
    pub fn draw_centered(
        &self,
        canvas: &mut Canvas,
        cx: f32,
        cy: f32,
        text: &str,
        px: f32,
        color: Color,
        opacity: f32,
    ) {
        match self {
            FontFace::TrueType(font) => {
                let (glyphs, bounds) = layout_glyphs(font, text, px);
                let b = match bounds {
                    Some(b) => b,
                    None => return,
                };
                let left = (cx - (b.x1 - b.x0) as f32 / 2.0).round() as i32;
                let top = (cy - (b.y1 - b.y0) as f32 / 2.0).round() as i32;
                for glyph in &glyphs {
                    if let Some(bb) = glyph.pixel_bounding_box() {
                        let gx = left + (bb.min.x - b.x0);
                        let gy = top + (bb.min.y - b.y0);
                        glyph.draw(|x, y, v| {
                            canvas.blend(gx + x as i32, gy + y as i32, color, v * opacity);
                        });
                    }
                }
            }
            FontFace::Builtin => bitmap_draw(canvas, cx, cy, text, px, color, opacity),
        }
    }
}

/// Inked bounds of laid-out glyphs, in pixel coordinates relative to the
/// layout origin.
struct InkBounds {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
}

fn layout_glyphs<'f>(
    font: &Font<'f>,
    text: &str,
    px: f32,
) -> (Vec<PositionedGlyph<'f>>, Option<InkBounds>) {
    let glyphs: Vec<_> = font
        .layout(text, Scale::uniform(px), point(0.0, 0.0))
        .collect();
    let mut bounds: Option<InkBounds> = None;
    for glyph in &glyphs {
        if let Some(bb) = glyph.pixel_bounding_box() {
            match bounds.as_mut() {
                Some(b) => {
                    b.x0 = b.x0.min(bb.min.x);
                    b.y0 = b.y0.min(bb.min.y);
                    b.x1 = b.x1.max(bb.max.x);
                    b.y1 = b.y1.max(bb.max.y);
                }
                None => {
                    bounds = Some(InkBounds {
                        x0: bb.min.x,
                        y0: bb.min.y,
                        x1: bb.max.x,
                        y1: bb.max.y,
                    });
                }
            }
        }
    }
    (glyphs, bounds)
}

// Built-in face: 5x7 pixel glyphs scaled by an integer factor, one glyph
// column of spacing between characters.

const GLYPH_COLS: u32 = 5;
const GLYPH_ROWS: u32 = 7;

/// Integer cell size for the built-in face at `px` pixels, never below 1.
fn bitmap_cell(px: f32) -> u32 {
    ((px / GLYPH_ROWS as f32).round() as u32).max(1)
}

fn bitmap_extent(text: &str, px: f32) -> TextExtent {
    let n = text.chars().count() as u32;
    if n == 0 {
        return TextExtent { width: 0, height: 0 };
    }
    let cell = bitmap_cell(px);
    TextExtent {
        width: n * GLYPH_COLS * cell + (n - 1) * cell,
        height: GLYPH_ROWS * cell,
    }
}

fn bitmap_draw(
    canvas: &mut Canvas,
    cx: f32,
    cy: f32,
    text: &str,
    px: f32,
    color: Color,
    opacity: f32,
) {
    let extent = bitmap_extent(text, px);
    if extent.width == 0 {
        return;
    }
    let cell = bitmap_cell(px) as i32;
    let left = (cx - extent.width as f32 / 2.0).round() as i32;
    let top = (cy - extent.height as f32 / 2.0).round() as i32;

    for (i, c) in text.chars().enumerate() {
        let rows = match glyph_rows(c) {
            Some(rows) => rows,
            None => continue,
        };
        let origin_x = left + i as i32 * (GLYPH_COLS as i32 + 1) * cell;
        for (ry, bits) in rows.iter().copied().enumerate() {
            for rx in 0..GLYPH_COLS {
                if (bits >> (GLYPH_COLS - 1 - rx)) & 1 == 0 {
                    continue;
                }
                let px0 = origin_x + rx as i32 * cell;
                let py0 = top + ry as i32 * cell;
                for dy in 0..cell {
                    for dx in 0..cell {
                        canvas.blend(px0 + dx, py0 + dy, color, opacity);
                    }
                }
            }
        }
    }
}

/// Seven rows of five pixels; the high bit of each row is the left column.
/// Unknown characters map to a blank cell that still advances the pen.
fn glyph_rows(c: char) -> Option<[u8; 7]> {
    let rows = match c {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '\u{2191}' => [0b00100, 0b01110, 0b10101, 0b00100, 0b00100, 0b00100, 0b00100],
        '\u{2193}' => [0b00100, 0b00100, 0b00100, 0b00100, 0b10101, 0b01110, 0b00100],
        '\u{2190}' => [0b00000, 0b00100, 0b01000, 0b11111, 0b01000, 0b00100, 0b00000],
        '\u{2192}' => [0b00000, 0b00100, 0b00010, 0b11111, 0b00010, 0b00100, 0b00000],
        _ => return None,
    };
    Some(rows)
}
