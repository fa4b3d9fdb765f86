// File: crates/chart-core/src/series.rs
// Summary: Line series model with optional point markers.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Marker {
    #[default]
    None,
    Circle,
}

#[derive(Clone, Debug)]
pub struct Series {
    /// Points in row order; never sorted.
    pub data_xy: Vec<(f64, f64)>,
    pub marker: Marker,
    /// Stroke width in points.
    pub line_width_pt: f32,
    /// Marker diameter in points.
    pub marker_size_pt: f32,
    /// Falls back to the theme's series color.
    pub color: Option<skia::Color>,
}

impl Series {
    pub fn line(data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, marker: Marker::None, line_width_pt: 1.5, marker_size_pt: 6.0, color: None }
    }

    /// Pair `xs` with `ys` by position; the shorter column bounds the length.
    pub fn from_columns(xs: &[f64], ys: &[f64]) -> Self {
        Self::line(xs.iter().copied().zip(ys.iter().copied()).collect())
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }
}
