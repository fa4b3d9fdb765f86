// File: crates/perf-plot/src/main.rs
// Summary: Renders simulation_results.csv as a log-log plot into performance_plot.png.

use anyhow::Result;
use perf_plot::PlotSpec;

fn main() -> Result<()> {
    perf_plot::logging::init();
    perf_plot::render(&PlotSpec::default())?;
    Ok(())
}
