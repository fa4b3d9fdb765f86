// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges and scale kind.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScaleKind {
    #[default]
    Linear,
    Log10,
}

impl ScaleKind {
    /// Map a data value into the scale's working space.
    /// Returns `None` for values the scale cannot show (NaN/inf, and non-positive on log10).
    #[inline]
    pub fn transform(self, v: f64) -> Option<f64> {
        if !v.is_finite() {
            return None;
        }
        match self {
            ScaleKind::Linear => Some(v),
            ScaleKind::Log10 if v > 0.0 => Some(v.log10()),
            ScaleKind::Log10 => None,
        }
    }

    #[inline]
    pub fn inverse(self, t: f64) -> f64 {
        match self {
            ScaleKind::Linear => t,
            ScaleKind::Log10 => 10f64.powf(t),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear }
    }

    /// Log10 axis spanning one decade until autoscaled.
    pub fn log10(label: impl Into<String>) -> Self {
        Self { label: label.into(), min: 1.0, max: 10.0, kind: ScaleKind::Log10 }
    }

    pub fn with_scale(mut self, kind: ScaleKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn default_x() -> Self {
        Self::new("", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("", 0.0, 1.0)
    }

    pub fn is_log(&self) -> bool {
        self.kind == ScaleKind::Log10
    }
}
