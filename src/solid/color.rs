/// An RGB color tag with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// CSS `goldenrod`.
    pub const GOLDENROD: Self = Self::from_rgb8(218, 165, 32);
    /// CSS `indianred`.
    pub const INDIAN_RED: Self = Self::from_rgb8(205, 92, 92);
    /// CSS `forestgreen`.
    pub const FOREST_GREEN: Self = Self::from_rgb8(34, 139, 34);
    /// CSS `lightgray`.
    pub const LIGHT_GRAY: Self = Self::from_rgb8(211, 211, 211);

    /// Builds a color from 8-bit channels.
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }
}
