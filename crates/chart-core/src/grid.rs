// File: crates/chart-core/src/grid.rs
// Summary: Tick and grid layout helpers for linear and log10 axes.

use crate::axis::{Axis, ScaleKind};

/// More visible decades than this and major ticks start skipping decades.
const MAX_LOG_MAJORS: i32 = 10;
const MAX_LINEAR_TICKS: usize = 100;
const LINEAR_TARGET_TICKS: f64 = 6.0;

#[derive(Clone, Debug, PartialEq)]
pub enum TickLabel {
    Plain(String),
    /// Rendered as `10` with a superscript exponent.
    PowerOfTen(i32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub major: bool,
    pub label: Option<TickLabel>,
}

impl Tick {
    fn major(value: f64, label: TickLabel) -> Self {
        Self { value, major: true, label: Some(label) }
    }

    fn minor(value: f64) -> Self {
        Self { value, major: false, label: None }
    }
}

/// Ticks for `axis` over its current `[min, max]`, in ascending order.
pub fn ticks(axis: &Axis) -> Vec<Tick> {
    let (lo, hi) = if axis.min <= axis.max { (axis.min, axis.max) } else { (axis.max, axis.min) };
    match axis.kind {
        ScaleKind::Linear => linear_ticks(lo, hi),
        ScaleKind::Log10 => log10_ticks(lo, hi),
    }
}

/// Decade ticks `10^k` with minor ticks at `2..9 * 10^k`.
pub fn log10_ticks(min: f64, max: f64) -> Vec<Tick> {
    if !(min > 0.0) || !max.is_finite() || max < min {
        return Vec::new();
    }
    let lo = min.log10();
    let hi = max.log10();
    let tol = ((hi - lo).abs() * 1e-9).max(1e-12);
    let inside = |t: f64| t >= lo - tol && t <= hi + tol;

    let first = lo.floor() as i32;
    let last = hi.ceil() as i32;
    let decades = last - first;
    let stride = if decades > MAX_LOG_MAJORS { (decades + MAX_LOG_MAJORS - 1) / MAX_LOG_MAJORS } else { 1 };

    let mut out = Vec::new();
    for k in first..=last {
        let decade = 10f64.powi(k);
        if k.rem_euclid(stride) == 0 && inside(k as f64) {
            out.push(Tick::major(decade, TickLabel::PowerOfTen(k)));
        }
        if stride == 1 {
            for m in 2..=9 {
                let v = m as f64 * decade;
                if inside(v.log10()) {
                    out.push(Tick::minor(v));
                }
            }
        }
    }

    // Less than two decades visible: label the minors so the axis still reads.
    if out.iter().filter(|t| t.major).count() < 2 {
        for t in out.iter_mut().filter(|t| !t.major) {
            t.label = Some(TickLabel::Plain(format_plain(t.value)));
        }
    }
    out
}

pub fn linear_ticks(min: f64, max: f64) -> Vec<Tick> {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 {
        return Vec::new();
    }
    let step = nice_step(span / LINEAR_TARGET_TICKS);
    let n0 = (min / step - 1e-9).ceil() as i64;
    let n1 = (max / step + 1e-9).floor() as i64;
    (n0..=n1)
        .take(MAX_LINEAR_TICKS)
        .map(|n| {
            let v = n as f64 * step;
            Tick::major(v, TickLabel::Plain(format_linear(v, step)))
        })
        .collect()
}

/// Round `raw` up to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !(raw > 0.0) || !raw.is_finite() {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Format `v` with just enough decimals to distinguish multiples of `step`.
pub fn format_linear(v: f64, step: f64) -> String {
    let mut decimals = 0usize;
    let mut scaled = step;
    while decimals < 10 && (scaled - scaled.round()).abs() > 1e-6 * scaled.abs().max(1.0) {
        scaled *= 10.0;
        decimals += 1;
    }
    let s = format!("{:.*}", decimals, v);
    if s.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') { "0".to_string() } else { s }
}

/// Short plain-number label for minor log ticks (`0.02`, `300`, `4000`).
pub fn format_plain(v: f64) -> String {
    if v >= 1.0 {
        format!("{}", v.round() as i64)
    } else {
        let decimals = (-v.log10()).ceil().max(1.0) as usize;
        let s = format!("{:.*}", decimals, v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
