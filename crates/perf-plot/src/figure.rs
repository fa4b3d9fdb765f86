// File: crates/perf-plot/src/figure.rs
// Summary: Fixed plot description and the load -> chart -> PNG pipeline.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{Axis, Chart, FigureSize, Marker, RenderOptions, Series, DEFAULT_DPI, DEFAULT_MARGIN};
use tracing::{debug, info};

use crate::dataset::{Dataset, DatasetError, ELAPSED_COLUMN, WIDTH_COLUMN};

pub const INPUT_PATH: &str = "simulation_results.csv";
pub const OUTPUT_PATH: &str = "performance_plot.png";
pub const X_LABEL: &str = "Grid Size (width=height)";
pub const Y_LABEL: &str = "Time (seconds)";
pub const TITLE: &str = "OpenCL Evolution Performance (n=1)";
pub const FIGURE_SIZE: FigureSize = FigureSize::new(10.0, 6.0);

/// Everything the performance plot needs; `Default` holds the fixed values.
#[derive(Clone, Debug)]
pub struct PlotSpec {
    pub input: PathBuf,
    pub output: PathBuf,
    pub x_column: String,
    pub y_column: String,
    pub x_label: String,
    pub y_label: String,
    pub title: String,
    pub figure_size: FigureSize,
    pub dpi: f32,
}

impl Default for PlotSpec {
    fn default() -> Self {
        Self {
            input: PathBuf::from(INPUT_PATH),
            output: PathBuf::from(OUTPUT_PATH),
            x_column: WIDTH_COLUMN.to_owned(),
            y_column: ELAPSED_COLUMN.to_owned(),
            x_label: X_LABEL.to_owned(),
            y_label: Y_LABEL.to_owned(),
            title: TITLE.to_owned(),
            figure_size: FIGURE_SIZE,
            dpi: DEFAULT_DPI,
        }
    }
}

impl PlotSpec {
    /// Same plot, different files.
    pub fn with_paths(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self { input: input.into(), output: output.into(), ..Self::default() }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::for_figure(self.figure_size, self.dpi)
    }
}

/// Log-log line chart of `y_column` against `x_column`, one circle per row, grid on.
pub fn build_chart(dataset: &Dataset, spec: &PlotSpec) -> Result<Chart, DatasetError> {
    let xs = dataset.numeric_column(&spec.x_column)?;
    let ys = dataset.numeric_column(&spec.y_column)?;

    let mut chart = Chart::new().with_title(spec.title.as_str());
    chart.x_axis = Axis::log10(spec.x_label.as_str());
    chart.y_axis = Axis::log10(spec.y_label.as_str());
    chart.set_grid(true);
    chart.add_series(Series::from_columns(&xs, &ys).with_marker(Marker::Circle));
    chart.autoscale_axes(DEFAULT_MARGIN);
    debug!(x = ?(chart.x_axis.min, chart.x_axis.max), y = ?(chart.y_axis.min, chart.y_axis.max), "axis ranges");
    Ok(chart)
}

/// Load `spec.input`, render, and write `spec.output`. Returns the written path.
pub fn render(spec: &PlotSpec) -> Result<PathBuf> {
    let dataset = load(&spec.input)?;
    info!(rows = dataset.len(), input = %spec.input.display(), "loaded dataset");

    let chart = build_chart(&dataset, spec)
        .with_context(|| format!("building chart from '{}'", spec.input.display()))?;
    chart
        .render_to_png(&spec.render_options(), &spec.output)
        .with_context(|| format!("writing plot '{}'", spec.output.display()))?;

    info!(output = %spec.output.display(), "wrote plot");
    Ok(spec.output.clone())
}

fn load(path: &Path) -> Result<Dataset> {
    Dataset::from_path(path).with_context(|| format!("failed to load CSV '{}'", path.display()))
}
