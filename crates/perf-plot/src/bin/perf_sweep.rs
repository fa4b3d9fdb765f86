// File: crates/perf-plot/src/bin/perf_sweep.rs
// Summary: Times the simulation executable across grid sizes and writes simulation_results.csv.

use anyhow::Result;
use perf_plot::SweepConfig;

fn main() -> Result<()> {
    perf_plot::logging::init();
    perf_plot::run_and_record(&SweepConfig::default())?;
    Ok(())
}
