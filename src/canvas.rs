//! Raster canvas and the shape primitives the artwork is built from.
//!
//! Rounded rectangles are rasterized from a signed distance function with a
//! one-pixel linear anti-aliasing ramp at the boundary. Outlines occupy the
//! band just inside the shape edge, so a filled shape with an outline stays
//! exactly inside its rectangle.

use image::RgbImage;

use crate::palette::Color;

/// Axis-aligned rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Rect {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Rectangle of `w` by `h` centered on (`cx`, `cy`).
    pub fn centered(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w / 2.0, cy - h / 2.0, cx + w / 2.0, cy + h / 2.0)
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// The same rectangle shifted by (`dx`, `dy`).
    pub fn offset(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(self.x0 + dx, self.y0 + dy, self.x1 + dx, self.y1 + dy)
    }
}

/// A square RGB surface the icon is composed onto.
pub struct Canvas {
    img: RgbImage,
}

impl Canvas {
    /// Create a `size` by `size` canvas filled with `background`.
    pub fn new(size: u32, background: Color) -> Self {
        let img = RgbImage::from_pixel(
            size,
            size,
            image::Rgb([background.r, background.g, background.b]),
        );
        Self { img }
    }

    pub fn size(&self) -> u32 {
        self.img.width()
    }

    /// Consume the canvas, yielding the finished image.
    pub fn into_image(self) -> RgbImage {
        self.img
    }

    /// The pixel at (`x`, `y`), or `None` outside the canvas.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.img.width() || y >= self.img.height() {
            return None;
        }
        let p = self.img.get_pixel(x, y);
        Some(Color::rgb(p[0], p[1], p[2]))
    }

    /// Overwrite one full row with `color`. Rows outside the canvas are
    /// ignored.
    pub fn fill_row(&mut self, y: u32, color: Color) {
        if y >= self.img.height() {
            return;
        }
        for x in 0..self.img.width() {
            self.img.put_pixel(x, y, image::Rgb([color.r, color.g, color.b]));
        }
    }

    /// Blend `color` into the pixel at (`x`, `y`) at coverage `cover`.
    /// Out-of-bounds coordinates are clipped, never an error.
    pub fn blend(&mut self, x: i32, y: i32, color: Color, cover: f32) {
        if cover <= 0.0 || x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.img.width() || y >= self.img.height() {
            return;
        }
        let p = self.img.get_pixel_mut(x, y);
        let out = Color::rgb(p[0], p[1], p[2]).over(color, cover.min(1.0));
        *p = image::Rgb([out.r, out.g, out.b]);
    }

    /// Fill a rounded rectangle, blended at `opacity` (1.0 for opaque).
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color, opacity: f32) {
        let (x_lo, x_hi, y_lo, y_hi) = self.span(rect);
        for y in y_lo..y_hi {
            for x in x_lo..x_hi {
                let d = rounded_rect_distance(x as f32 + 0.5, y as f32 + 0.5, rect, radius);
                let cover = coverage(-d);
                if cover > 0.0 {
                    self.blend(x as i32, y as i32, color, cover * opacity);
                }
            }
        }
    }

    /// Stroke the band of `width` pixels just inside the shape boundary.
    pub fn outline_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color, width: f32) {
        if width <= 0.0 {
            return;
        }
        let (x_lo, x_hi, y_lo, y_hi) = self.span(rect);
        for y in y_lo..y_hi {
            for x in x_lo..x_hi {
                let d = rounded_rect_distance(x as f32 + 0.5, y as f32 + 0.5, rect, radius);
                // Band: -width <= d <= 0, feathered on both sides.
                let cover = coverage(-d).min(coverage(d + width));
                if cover > 0.0 {
                    self.blend(x as i32, y as i32, color, cover);
                }
            }
        }
    }

    /// Fill plus inner outline, the way every solid shape in the artwork is
    /// drawn.
    pub fn rounded_rect(&mut self, rect: Rect, radius: f32, fill: Color, outline: Color, width: f32) {
        self.fill_rounded_rect(rect, radius, fill, 1.0);
        self.outline_rounded_rect(rect, radius, outline, width);
    }

    /// Pixel span covering `rect` plus its anti-aliasing fringe, clipped to
    /// the canvas.
    fn span(&self, rect: Rect) -> (u32, u32, u32, u32) {
        let x_lo = rect.x0.floor().max(0.0) as u32;
        let y_lo = rect.y0.floor().max(0.0) as u32;
        let x_hi = (rect.x1.ceil() + 1.0).clamp(0.0, self.img.width() as f32) as u32;
        let y_hi = (rect.y1.ceil() + 1.0).clamp(0.0, self.img.height() as f32) as u32;
        (x_lo, x_hi, y_lo, y_hi)
    }
}

/// Signed distance from the point (`px`, `py`) to the boundary of the
/// rounded rectangle; negative inside. The radius is clamped so it never
/// exceeds half the shorter side.
fn rounded_rect_distance(px: f32, py: f32, rect: Rect, radius: f32) -> f32 {
    let r = radius.clamp(0.0, (rect.width() / 2.0).min(rect.height() / 2.0));
    let qx = (px - (rect.x0 + rect.x1) / 2.0).abs() - (rect.width() / 2.0 - r);
    let qy = (py - (rect.y0 + rect.y1) / 2.0).abs() - (rect.height() / 2.0 - r);
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    outside + qx.max(qy).min(0.0) - r
}

/// Linear one-pixel ramp: full coverage at `d >= 0.5`, none at `d <= -0.5`.
fn coverage(d: f32) -> f32 {
    (d + 0.5).clamp(0.0, 1.0)
}
