//! The icon composition: a suspension-bridge scene with keyboard-key
//! badges, drawn procedurally at any square size.
//!
//! All geometry is defined against a 512-pixel reference design and scaled
//! linearly, so every rendition is the same picture. Rendering is
//! infallible: geometry clips at the canvas edge and a missing system font
//! degrades to the built-in face.

use image::RgbImage;

use crate::canvas::{Canvas, Rect};
use crate::font::{FontFace, FONT_CANDIDATES};
use crate::palette::{self, Color};

/// Reference design size; every measurement scales by `size / 512`.
pub const REFERENCE_SIZE: u32 = 512;

// Shadows blend translucent black straight onto the opaque canvas.
const TITLE_SHADOW_OPACITY: f32 = 128.0 / 255.0;
const KEY_SHADOW_OPACITY: f32 = 100.0 / 255.0;

/// Channel boost applied to a key's fill to produce its outline color.
const KEY_OUTLINE_BOOST: u8 = 40;

/// Compose the icon at `size` pixels square.
pub fn compose(size: u32) -> RgbImage {
    let font = FontFace::resolve(FONT_CANDIDATES);
    compose_with(&font, size)
}

fn compose_with(font: &FontFace, size: u32) -> RgbImage {
    let lay = layout(size);
    let mut canvas = Canvas::new(size, palette::DARK);

    paint_gradient(&mut canvas);

    let outline = 2.0 * lay.scale;
    canvas.rounded_rect(lay.pillar_left, lay.pillar_radius, palette::NAVY, palette::ROYAL, outline);
    canvas.rounded_rect(lay.pillar_right, lay.pillar_radius, palette::NAVY, palette::ROYAL, outline);
    canvas.rounded_rect(lay.deck, lay.deck_radius, palette::NAVY, palette::ROYAL, outline);

    // Title with its drop shadow underneath.
    let cx = size as f32 / 2.0;
    let shadow = 2.0 * lay.scale;
    font.draw_centered(
        &mut canvas,
        cx + shadow,
        lay.deck_center_y + shadow,
        "OP",
        lay.title_px,
        palette::BLACK,
        TITLE_SHADOW_OPACITY,
    );
    font.draw_centered(&mut canvas, cx, lay.deck_center_y, "OP", lay.title_px, palette::LIGHT, 1.0);

    for key in &lay.keys {
        draw_key(&mut canvas, font, key, &lay);
    }

    canvas.into_image()
}

/// One keyboard key: drop shadow, body with a brightened outline, centered
/// label at half the key's side.
fn draw_key(canvas: &mut Canvas, font: &FontFace, key: &KeySpot, lay: &Layout) {
    let body = Rect::centered(key.cx, key.cy, lay.key_side, lay.key_side);
    let offset = 2.0 * lay.scale;

    canvas.fill_rounded_rect(
        body.offset(offset, offset),
        lay.key_radius,
        palette::BLACK,
        KEY_SHADOW_OPACITY,
    );
    canvas.rounded_rect(body, lay.key_radius, key.fill, key.fill.lighten(KEY_OUTLINE_BOOST), offset);
    font.draw_centered(
        canvas,
        key.cx,
        key.cy,
        &key.label.to_string(),
        lay.key_side * 0.5,
        palette::WHITE,
        1.0,
    );
}

/// Vertical top-to-bottom fade across the full canvas height.
fn paint_gradient(canvas: &mut Canvas) {
    let size = canvas.size();
    for y in 0..size {
        let ratio = y as f32 / size as f32;
        canvas.fill_row(y, palette::DARK.lerp(palette::SLATE, ratio));
    }
}

/// Everything position-dependent, derived once per size.
struct Layout {
    scale: f32,
    pillar_left: Rect,
    pillar_right: Rect,
    pillar_radius: f32,
    deck: Rect,
    deck_radius: f32,
    deck_center_y: f32,
    title_px: f32,
    key_side: f32,
    key_radius: f32,
    keys: Vec<KeySpot>,
}

/// Position, fill, and label of one key badge.
struct KeySpot {
    label: char,
    fill: Color,
    cx: f32,
    cy: f32,
}

fn layout(size: u32) -> Layout {
    let s = size as f32;
    let scale = s / REFERENCE_SIZE as f32;

    // Two pillars standing on the 70% line, deck resting across their tops.
    let pillar_w = 16.0 * scale;
    let pillar_h = 120.0 * scale;
    let pillar_base_y = s * 0.7;
    let pillar_left = Rect::new(
        s * 0.3 - pillar_w / 2.0,
        pillar_base_y - pillar_h,
        s * 0.3 + pillar_w / 2.0,
        pillar_base_y,
    );
    let pillar_right = Rect::new(
        s * 0.7 - pillar_w / 2.0,
        pillar_base_y - pillar_h,
        s * 0.7 + pillar_w / 2.0,
        pillar_base_y,
    );

    let deck_center_y = pillar_base_y - pillar_h;
    let deck = Rect::centered(s / 2.0, deck_center_y, 280.0 * scale, 24.0 * scale);

    let key_side = 28.0 * scale;
    let step = 40.0 * scale;
    let top_row = [
        ('W', palette::ROYAL),
        ('A', palette::DUSTY),
        ('S', palette::ROYAL),
        ('D', palette::DUSTY),
    ];
    let arrow_row = [
        ('↑', palette::DUSTY),
        ('↓', palette::ROYAL),
        ('←', palette::DUSTY),
        ('→', palette::ROYAL),
    ];

    let mut keys = Vec::with_capacity(8);
    for (i, (label, fill)) in top_row.into_iter().enumerate() {
        keys.push(KeySpot {
            label,
            fill,
            cx: s * 0.15 + i as f32 * step,
            cy: s * 0.25,
        });
    }
    for (i, (label, fill)) in arrow_row.into_iter().enumerate() {
        keys.push(KeySpot {
            label,
            fill,
            cx: s * 0.55 + i as f32 * step,
            cy: s * 0.75,
        });
    }

    Layout {
        scale,
        pillar_left,
        pillar_right,
        pillar_radius: 4.0 * scale,
        deck,
        deck_radius: 8.0 * scale,
        deck_center_y,
        title_px: 80.0 * scale,
        key_side,
        key_radius: 6.0 * scale,
        keys,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_dimensions_match_request() {
        for size in [16, 32, 128, 512] {
            let img = compose(size);
            assert_eq!(img.dimensions(), (size, size));
        }
    }

    #[test]
    fn test_compose_zero_yields_empty_image() {
        let img = compose(0);
        assert_eq!(img.dimensions(), (0, 0));
    }

    #[test]
    fn test_gradient_anchors_top_and_bottom() {
        let img = compose_with(&FontFace::Builtin, 64);
        // Row 0 is the exact top color; no shape reaches the left edge.
        let top = img.get_pixel(0, 0);
        assert_eq!((top[0], top[1], top[2]), (38, 43, 64));
        // Last row lands within rounding distance of the bottom color.
        let bottom = img.get_pixel(0, 63);
        for (channel, target) in [(bottom[0], 44u8), (bottom[1], 68), (bottom[2], 77)] {
            let diff = (channel as i16 - target as i16).abs();
            assert!(diff <= 1, "channel {channel} too far from {target}");
        }
    }

    #[test]
    fn test_gradient_is_monotone_down_the_left_edge() {
        let img = compose_with(&FontFace::Builtin, 128);
        for c in 0..3 {
            let mut prev = img.get_pixel(0, 0)[c];
            for y in 1..128 {
                let cur = img.get_pixel(0, y)[c];
                assert!(cur >= prev, "channel {c} regressed at row {y}");
                prev = cur;
            }
        }
    }

    #[test]
    fn test_badges_carry_expected_fills_in_order() {
        let img = compose_with(&FontFace::Builtin, 512);
        let lay = layout(512);
        let expected = [
            ('W', palette::ROYAL),
            ('A', palette::DUSTY),
            ('S', palette::ROYAL),
            ('D', palette::DUSTY),
            ('↑', palette::DUSTY),
            ('↓', palette::ROYAL),
            ('←', palette::DUSTY),
            ('→', palette::ROYAL),
        ];
        assert_eq!(lay.keys.len(), expected.len());
        for (key, (label, fill)) in lay.keys.iter().zip(expected) {
            assert_eq!(key.label, label);
            // Sample below the label, inside the fill but clear of the
            // outline band and the shadow fringe.
            let x = key.cx.round() as u32;
            let y = (key.cy + 11.0).round() as u32;
            let p = img.get_pixel(x, y);
            assert_eq!((p[0], p[1], p[2]), (fill.r, fill.g, fill.b));
        }
    }

    #[test]
    fn test_pillar_interior_is_navy_with_royal_edge() {
        let img = compose_with(&FontFace::Builtin, 512);
        let lay = layout(512);
        // Pillar center: fill.
        let cx = (lay.pillar_left.x0 + lay.pillar_left.x1) / 2.0;
        let cy = (lay.pillar_left.y0 + lay.pillar_left.y1) / 2.0;
        let p = img.get_pixel(cx as u32, cy as u32);
        assert_eq!((p[0], p[1], p[2]), (palette::NAVY.r, palette::NAVY.g, palette::NAVY.b));
        // One pixel in from the left edge at mid-height: outline.
        let p = img.get_pixel(lay.pillar_left.x0 as u32 + 1, cy as u32);
        assert_eq!((p[0], p[1], p[2]), (palette::ROYAL.r, palette::ROYAL.g, palette::ROYAL.b));
    }

    #[test]
    fn test_layout_scales_linearly() {
        let a = layout(512);
        let b = layout(1024);
        let close = |x: f32, y: f32| (x * 2.0 - y).abs() < 1e-3;
        assert!(close(a.scale, b.scale));
        assert!(close(a.pillar_left.x0, b.pillar_left.x0));
        assert!(close(a.pillar_left.y1, b.pillar_left.y1));
        assert!(close(a.deck.width(), b.deck.width()));
        assert!(close(a.deck_center_y, b.deck_center_y));
        assert!(close(a.title_px, b.title_px));
        assert!(close(a.key_side, b.key_side));
        for (ka, kb) in a.keys.iter().zip(&b.keys) {
            assert_eq!(ka.label, kb.label);
            assert_eq!(ka.fill, kb.fill);
            assert!(close(ka.cx, kb.cx));
            assert!(close(ka.cy, kb.cy));
        }
    }

    #[test]
    fn test_title_leaves_light_ink_on_deck_center() {
        // The built-in face guarantees ink regardless of system fonts.
        let img = compose_with(&FontFace::Builtin, 512);
        let lay = layout(512);
        let mut hits = 0;
        let y0 = (lay.deck_center_y - 40.0) as u32;
        let y1 = (lay.deck_center_y + 40.0) as u32;
        for y in y0..y1 {
            for x in 200..312 {
                let p = img.get_pixel(x, y);
                if (p[0], p[1], p[2]) == (palette::LIGHT.r, palette::LIGHT.g, palette::LIGHT.b) {
                    hits += 1;
                }
            }
        }
        assert!(hits > 50, "expected title ink near the deck, found {hits} pixels");
    }
}
