// File: crates/chart-core/src/scale.rs
// Summary: Data-to-pixel transforms for linear and log10 axes.

use crate::axis::{Axis, ScaleKind};

const EPS: f64 = 1e-12;

/// Maps one axis' data range onto a pixel span.
///
/// `px_start` is where `min` lands and `px_end` where `max` lands, so a Y scale
/// is built with `px_start = bottom` and `px_end = top`.
#[derive(Clone, Copy, Debug)]
pub struct AxisScale {
    pub kind: ScaleKind,
    pub px_start: f32,
    pub px_end: f32,
    // endpoints in transformed space (log10 of the range when kind is Log10)
    t_min: f64,
    t_max: f64,
}

impl AxisScale {
    pub fn new_linear(px_start: f32, px_end: f32, mut vmin: f64, mut vmax: f64) -> Self {
        if !vmin.is_finite() || !vmax.is_finite() {
            vmin = 0.0;
            vmax = 1.0;
        }
        if (vmax - vmin).abs() < EPS {
            vmax = vmin + 1.0;
        }
        Self { kind: ScaleKind::Linear, px_start, px_end, t_min: vmin, t_max: vmax }
    }

    /// Any positive finite bounds are kept as given, however small or large.
    /// Only bounds a log scale cannot show fall back to a one-decade span.
    pub fn new_log10(px_start: f32, px_end: f32, vmin: f64, vmax: f64) -> Self {
        let lo = ScaleKind::Log10.transform(vmin);
        let hi = ScaleKind::Log10.transform(vmax);
        let (t_min, t_max) = match (lo, hi) {
            (Some(lo), Some(hi)) if hi > lo => (lo, hi),
            (Some(lo), _) => (lo, lo + 1.0),
            (None, Some(hi)) => (hi - 1.0, hi),
            (None, None) => (0.0, 1.0),
        };
        Self { kind: ScaleKind::Log10, px_start, px_end, t_min, t_max }
    }

    pub fn for_axis(axis: &Axis, px_start: f32, px_end: f32) -> Self {
        match axis.kind {
            ScaleKind::Linear => Self::new_linear(px_start, px_end, axis.min, axis.max),
            ScaleKind::Log10 => Self::new_log10(px_start, px_end, axis.min, axis.max),
        }
    }

    /// Pixel coordinate for `v`, or `None` when the scale cannot represent it.
    #[inline]
    pub fn to_px(&self, v: f64) -> Option<f32> {
        let t = self.kind.transform(v)?;
        let span = (self.t_max - self.t_min).max(EPS);
        let frac = (t - self.t_min) / span;
        Some(self.px_start + frac as f32 * (self.px_end - self.px_start))
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let len = self.px_end - self.px_start;
        let frac = if len.abs() < f32::EPSILON { 0.0 } else { ((px - self.px_start) / len) as f64 };
        self.kind.inverse(self.t_min + frac * (self.t_max - self.t_min))
    }

    /// Visible range in data units.
    pub fn range(&self) -> (f64, f64) {
        (self.kind.inverse(self.t_min), self.kind.inverse(self.t_max))
    }

    pub fn contains(&self, v: f64) -> bool {
        match self.kind.transform(v) {
            Some(t) => {
                let tol = (self.t_max - self.t_min).abs() * 1e-9;
                t >= self.t_min - tol && t <= self.t_max + tol
            }
            None => false,
        }
    }
}
