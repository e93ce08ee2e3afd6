//! The fixed color palette the icon artwork is drawn from.
//!
//! Every pixel in the output is opaque RGB. Translucency only ever shows up
//! as a blend factor applied while drawing (see [`Color::over`]), never as
//! stored alpha.

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Top of the background gradient.
pub const DARK: Color = Color::rgb(38, 43, 64);
/// Bottom of the background gradient.
pub const SLATE: Color = Color::rgb(44, 68, 77);
/// Bridge fill.
pub const NAVY: Color = Color::rgb(6, 69, 127);
/// Bridge outline, also half of the key badges.
pub const ROYAL: Color = Color::rgb(4, 116, 196);
/// The other half of the key badges.
pub const DUSTY: Color = Color::rgb(83, 121, 174);
/// Title lettering.
pub const LIGHT: Color = Color::rgb(168, 196, 236);
/// Badge lettering.
pub const WHITE: Color = Color::rgb(255, 255, 255);
/// Shadow ink.
pub const BLACK: Color = Color::rgb(0, 0, 0);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation toward `other`, rounded per channel.
    /// `t` is expected in `0.0..=1.0`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let mix = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t).round() as u8;
        Color::rgb(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }

    /// Brighten every channel by `amount`, saturating at 255.
    pub fn lighten(self, amount: u8) -> Color {
        Color::rgb(
            self.r.saturating_add(amount),
            self.g.saturating_add(amount),
            self.b.saturating_add(amount),
        )
    }

    /// Source-over blend of `src` onto `self` at coverage `cover`.
    /// Coverage outside `0.0..=1.0` is clamped.
    pub fn over(self, src: Color, cover: f32) -> Color {
        if cover >= 1.0 {
            return src;
        }
        if cover <= 0.0 {
            return self;
        }
        self.lerp(src, cover)
    }
}
