// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (figure sizes, resolution, paddings).

/// Default raster resolution in dots per inch.
pub const DEFAULT_DPI: f32 = 100.0;

/// Points per inch; stroke widths and font sizes are specified in points.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Physical figure size in inches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureSize {
    pub width_in: f32,
    pub height_in: f32,
}

impl FigureSize {
    pub const fn new(width_in: f32, height_in: f32) -> Self {
        Self { width_in, height_in }
    }

    /// Pixel dimensions at `dpi`, rounded to the nearest pixel.
    pub fn to_pixels(&self, dpi: f32) -> (i32, i32) {
        ((self.width_in * dpi).round() as i32, (self.height_in * dpi).round() as i32)
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        Self::new(6.4, 4.8)
    }
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Subplot margins as fractions of the surface: left 0.125, right 0.10, top 0.12, bottom 0.11.
    pub fn subplot(width: i32, height: i32) -> Self {
        let w = width.max(0) as f32;
        let h = height.max(0) as f32;
        Self::new(
            (w * 0.125).round() as u32,
            (w * 0.10).round() as u32,
            (h * 0.12).round() as u32,
            (h * 0.11).round() as u32,
        )
    }
}
