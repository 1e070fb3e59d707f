//! Color values and channel interpolation.
//!
//! ## Usage
//!
//! Blend ring colors along a progress fraction and build gradient stops.

use bytemuck::{Pod, Zeroable};

/// A color with straight (non-premultiplied) alpha.
///
/// Values are stored as `f32`s, typically in the range `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a new `Color` from four `f32` values (red, green, blue, alpha).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `Color` from three `f32` values (red, green, blue).
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a new opaque `Color` from three `u8` values (red, green, blue).
    #[inline]
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Returns the same color with its alpha replaced by `alpha`.
    #[inline]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Converts the color to an array of `[f32; 4]`.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Linearly blends every channel from `self` towards `end`.
    ///
    /// `fraction` is clamped to `[0.0, 1.0]` first and a NaN fraction counts
    /// as `0.0`, so the result always lies between the two endpoints.
    ///
    /// ```
    /// use chimely_ui::Color;
    ///
    /// let a = Color::from_rgb(0.2, 0.4, 1.0);
    /// let b = Color::from_rgb(0.6, 0.0, 1.0);
    /// assert_eq!(a.lerp(b, -3.0), a);
    /// assert_eq!(a.lerp(b, 7.0), b);
    /// ```
    pub fn lerp(self, end: Color, fraction: f32) -> Color {
        let t = clamp_unit(fraction);
        if t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return end;
        }
        Color {
            r: self.r + (end.r - self.r) * t,
            g: self.g + (end.g - self.g) * t,
            b: self.b + (end.b - self.b) * t,
            a: self.a + (end.a - self.a) * t,
        }
    }

    /// The halfway blend between `self` and `end`, used as the middle gradient stop.
    pub fn midpoint(self, end: Color) -> Color {
        self.lerp(end, 0.5)
    }
}

/// The default color is fully transparent.
impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl From<[f32; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<[f32; 3]> for Color {
    #[inline]
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

impl From<Color> for [f32; 4] {
    #[inline]
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
