// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::io::Cursor;
use std::path::Path;

use skia_safe as skia;

use crate::axis::{Axis, ScaleKind};
use crate::error::{ChartError, Result};
use crate::geometry::PlotRect;
use crate::grid::{self, Tick};
use crate::scale::AxisScale;
use crate::series::{Marker, Series};
use crate::text::{HAlign, TextShaper, VAlign};
use crate::theme::Theme;
use crate::types::{FigureSize, Insets, DEFAULT_DPI, POINTS_PER_INCH};

/// Fraction of the data span added on each side by [`Chart::autoscale_axes`].
pub const DEFAULT_MARGIN: f64 = 0.05;

// Sizes below are in points.
const GRID_WIDTH: f32 = 0.8;
const SPINE_WIDTH: f32 = 0.8;
const MAJOR_TICK_LEN: f32 = 3.5;
const MINOR_TICK_LEN: f32 = 2.0;
const TICK_PAD: f32 = 3.5;
const LABEL_PAD: f32 = 4.0;
const TITLE_PAD: f32 = 6.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub dpi: f32,
    pub insets: Insets,
    pub theme: Theme,
    /// Tick labels, axis labels and title. Off gives font-independent output.
    pub draw_labels: bool,
    pub font_size_pt: f32,
    pub title_size_pt: f32,
}

impl RenderOptions {
    pub fn for_figure(size: FigureSize, dpi: f32) -> Self {
        let (width, height) = size.to_pixels(dpi);
        Self {
            width,
            height,
            dpi,
            insets: Insets::subplot(width, height),
            theme: Theme::default(),
            draw_labels: true,
            font_size_pt: 10.0,
            title_size_pt: 12.0,
        }
    }

    /// Convert a length in points to pixels at this resolution.
    #[inline]
    pub fn pt(&self, points: f32) -> f32 {
        points * self.dpi / POINTS_PER_INCH
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::for_figure(FigureSize::default(), DEFAULT_DPI)
    }
}

/// Pixel geometry of a chart for a given set of render options.
#[derive(Clone, Copy, Debug)]
pub struct PlotLayout {
    pub rect: PlotRect,
    pub x: AxisScale,
    pub y: AxisScale,
}

impl PlotLayout {
    /// Surface position of a data point, or `None` if either axis cannot show it.
    pub fn project(&self, (x, y): (f64, f64)) -> Option<(f32, f32)> {
        Some((self.x.to_px(x)?, self.y.to_px(y)?))
    }
}

pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub grid: bool,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            grid: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn set_grid(&mut self, on: bool) {
        self.grid = on;
    }

    /// Fit both axes to the points each scale can show, padding by `margin`
    /// of the span in scale space (decades for log axes).
    pub fn autoscale_axes(&mut self, margin: f64) {
        let (xk, yk) = (self.x_axis.kind, self.y_axis.kind);
        let mut xb: Option<(f64, f64)> = None;
        let mut yb: Option<(f64, f64)> = None;
        for s in &self.series {
            for &(x, y) in &s.data_xy {
                if let (Some(tx), Some(ty)) = (xk.transform(x), yk.transform(y)) {
                    xb = Some(extend(xb, tx));
                    yb = Some(extend(yb, ty));
                }
            }
        }
        (self.x_axis.min, self.x_axis.max) = padded_range(xb, margin, xk);
        (self.y_axis.min, self.y_axis.max) = padded_range(yb, margin, yk);
    }

    pub fn layout(&self, opts: &RenderOptions) -> PlotLayout {
        let rect = PlotRect::inset(opts.width, opts.height, &opts.insets);
        PlotLayout {
            rect,
            x: AxisScale::for_axis(&self.x_axis, rect.left, rect.right),
            y: AxisScale::for_axis(&self.y_axis, rect.bottom, rect.top),
        }
    }

    /// Render into a tightly packed RGBA8 buffer: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (w, h) = (opts.width, opts.height);
        if w <= 0 || h <= 0 {
            return Err(ChartError::InvalidSize { width: w, height: h });
        }
        let mut surface = skia::surfaces::raster_n32_premul((w, h)).ok_or(ChartError::Surface)?;
        self.paint(surface.canvas(), opts);

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((pixels, w, h, stride))
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w as u32, h as u32, pixels).ok_or(ChartError::ReadPixels)?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render the chart to a PNG at `output_png_path`, replacing any existing file.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        std::fs::write(path, bytes).map_err(|source| ChartError::Write { path: path.to_path_buf(), source })
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let layout = self.layout(opts);
        let rect = layout.rect;

        let mut bg = skia::Paint::default();
        bg.set_color(theme.plot_background);
        canvas.draw_rect(rect.to_skia(), &bg);

        let x_ticks = visible(grid::ticks(&self.x_axis), &layout.x);
        let y_ticks = visible(grid::ticks(&self.y_axis), &layout.y);

        if self.grid {
            draw_grid(canvas, &layout, &x_ticks, &y_ticks, opts);
        }

        canvas.save();
        canvas.clip_rect(rect.to_skia(), skia::ClipOp::Intersect, true);
        for s in &self.series {
            draw_line_series(canvas, &layout, s, opts);
        }
        canvas.restore();

        draw_frame(canvas, &rect, opts);

        let shaper = opts.draw_labels.then(TextShaper::new);
        let (x_extent, y_extent) = draw_ticks(canvas, &layout, &x_ticks, &y_ticks, opts, shaper.as_ref());

        if let Some(shaper) = shaper.as_ref() {
            self.draw_labels(canvas, shaper, &rect, x_extent, y_extent, opts);
        }
    }

    fn draw_labels(
        &self,
        canvas: &skia::Canvas,
        shaper: &TextShaper,
        rect: &PlotRect,
        x_extent: f32,
        y_extent: f32,
        opts: &RenderOptions,
    ) {
        let color = opts.theme.axis_label;
        let size = opts.pt(opts.font_size_pt);
        if !self.x_axis.label.is_empty() {
            let y = rect.bottom + x_extent + opts.pt(LABEL_PAD);
            shaper.draw(canvas, &self.x_axis.label, (rect.center_x(), y), size, color, (HAlign::Center, VAlign::Top));
        }
        if !self.y_axis.label.is_empty() {
            let (_, text_h) = shaper.measure(&self.y_axis.label, size);
            let x = rect.left - y_extent - opts.pt(LABEL_PAD) - text_h * 0.5;
            shaper.draw_vertical(canvas, &self.y_axis.label, (x, rect.center_y()), size, color);
        }
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            let size = opts.pt(opts.title_size_pt);
            let y = rect.top - opts.pt(TITLE_PAD);
            shaper.draw(canvas, title, (rect.center_x(), y), size, color, (HAlign::Center, VAlign::Bottom));
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn extend(bounds: Option<(f64, f64)>, v: f64) -> (f64, f64) {
    match bounds {
        Some((lo, hi)) => (lo.min(v), hi.max(v)),
        None => (v, v),
    }
}

fn padded_range(bounds: Option<(f64, f64)>, margin: f64, kind: ScaleKind) -> (f64, f64) {
    let Some((mut lo, mut hi)) = bounds else {
        return match kind {
            ScaleKind::Linear => (0.0, 1.0),
            ScaleKind::Log10 => (1.0, 10.0),
        };
    };
    if hi - lo < 1e-12 {
        lo -= 0.5;
        hi += 0.5;
    }
    let m = (hi - lo) * margin.max(0.0);
    let (lo, hi) = match kind {
        // Keep padded log bounds positive and finite near the ends of f64.
        ScaleKind::Log10 => ((lo - m).max(f64::MIN_POSITIVE.log10()).min(lo), (hi + m).min(f64::MAX.log10()).max(hi)),
        ScaleKind::Linear => (lo - m, hi + m),
    };
    (finite(kind.inverse(lo)), finite(kind.inverse(hi)))
}

fn finite(v: f64) -> f64 {
    v.clamp(f64::MIN, f64::MAX)
}

/// Keep ticks that land inside the scale's range, paired with their pixel position.
fn visible(ticks: Vec<Tick>, scale: &AxisScale) -> Vec<(Tick, f32)> {
    ticks
        .into_iter()
        .filter(|t| scale.contains(t.value))
        .filter_map(|t| scale.to_px(t.value).map(|px| (t, px)))
        .collect()
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn draw_grid(
    canvas: &skia::Canvas,
    layout: &PlotLayout,
    x_ticks: &[(Tick, f32)],
    y_ticks: &[(Tick, f32)],
    opts: &RenderOptions,
) {
    let paint = stroke_paint(opts.theme.grid, opts.pt(GRID_WIDTH));
    let r = &layout.rect;

    // verticals
    for (_, x) in x_ticks.iter().filter(|(t, _)| t.major) {
        canvas.draw_line((*x, r.top), (*x, r.bottom), &paint);
    }
    // horizontals
    for (_, y) in y_ticks.iter().filter(|(t, _)| t.major) {
        canvas.draw_line((r.left, *y), (r.right, *y), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, rect: &PlotRect, opts: &RenderOptions) {
    let paint = stroke_paint(opts.theme.axis_line, opts.pt(SPINE_WIDTH));
    canvas.draw_rect(rect.to_skia(), &paint);
}

/// Draw tick marks (and labels when a shaper is given).
/// Returns how far the x labels reach below and the y labels reach left of the plot.
fn draw_ticks(
    canvas: &skia::Canvas,
    layout: &PlotLayout,
    x_ticks: &[(Tick, f32)],
    y_ticks: &[(Tick, f32)],
    opts: &RenderOptions,
    shaper: Option<&TextShaper>,
) -> (f32, f32) {
    let paint = stroke_paint(opts.theme.tick, opts.pt(SPINE_WIDTH));
    let r = &layout.rect;
    let size = opts.pt(opts.font_size_pt);
    let tick_len = |t: &Tick| opts.pt(if t.major { MAJOR_TICK_LEN } else { MINOR_TICK_LEN });
    let pad = opts.pt(TICK_PAD);

    let mut x_extent = opts.pt(MAJOR_TICK_LEN);
    for (t, x) in x_ticks {
        let len = tick_len(t);
        canvas.draw_line((*x, r.bottom), (*x, r.bottom + len), &paint);
        if let (Some(shaper), Some(label)) = (shaper, t.label.as_ref()) {
            let top = r.bottom + len + pad;
            shaper.draw_tick(canvas, label, (*x, top), size, opts.theme.axis_label, (HAlign::Center, VAlign::Top));
            let (_, h) = shaper.measure_tick(label, size);
            x_extent = x_extent.max(len + pad + h);
        }
    }

    let mut y_extent = opts.pt(MAJOR_TICK_LEN);
    for (t, y) in y_ticks {
        let len = tick_len(t);
        canvas.draw_line((r.left - len, *y), (r.left, *y), &paint);
        if let (Some(shaper), Some(label)) = (shaper, t.label.as_ref()) {
            let right = r.left - len - pad;
            shaper.draw_tick(canvas, label, (right, *y), size, opts.theme.axis_label, (HAlign::Right, VAlign::Middle));
            let (w, _) = shaper.measure_tick(label, size);
            y_extent = y_extent.max(len + pad + w);
        }
    }
    (x_extent, y_extent)
}

fn draw_line_series(canvas: &skia::Canvas, layout: &PlotLayout, series: &Series, opts: &RenderOptions) {
    let color = series.color.unwrap_or(opts.theme.line_stroke);

    // Break the line wherever a point cannot be shown on the current scales.
    let mut path = skia::Path::new();
    let mut pen_down = false;
    let mut points = Vec::with_capacity(series.data_xy.len());
    for &p in &series.data_xy {
        match layout.project(p) {
            Some(px) => {
                if pen_down {
                    path.line_to(px);
                } else {
                    path.move_to(px);
                    pen_down = true;
                }
                points.push(px);
            }
            None => pen_down = false,
        }
    }

    if series.line_width_pt > 0.0 {
        let stroke = stroke_paint(color, opts.pt(series.line_width_pt));
        canvas.draw_path(&path, &stroke);
    }

    if series.marker == Marker::Circle {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(color);
        let radius = opts.pt(series.marker_size_pt) * 0.5;
        for p in points {
            canvas.draw_circle(p, radius, &fill);
        }
    }
}
