// File: crates/perf-plot/src/sweep.rs
// Summary: Times the external simulation over a fixed list of grid sizes and records the results.

use std::path::PathBuf;
use std::process::Command;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::dataset::{write_measurements_to_path, Measurement};
use crate::figure::INPUT_PATH;

pub const GRID_SIZES: [u32; 5] = [10, 20, 100, 1000, 10000];
pub const GENERATIONS: u32 = 1;

#[cfg(windows)]
pub const EXECUTABLE: &str = "gol_opencl.exe";
#[cfg(not(windows))]
pub const EXECUTABLE: &str = "./gol_opencl";

#[derive(Clone, Debug)]
pub struct SweepConfig {
    pub executable: PathBuf,
    /// Square grids: each entry is used for both width and height.
    pub grid_sizes: Vec<u32>,
    pub generations: u32,
    pub output: PathBuf,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            executable: PathBuf::from(EXECUTABLE),
            grid_sizes: GRID_SIZES.to_vec(),
            generations: GENERATIONS,
            output: PathBuf::from(INPUT_PATH),
        }
    }
}

/// Run the executable once per grid size. Runs that cannot start or exit
/// non-zero are logged and left out; the rest keep their order.
pub fn run_sweep(config: &SweepConfig) -> Vec<Measurement> {
    let mut results = Vec::with_capacity(config.grid_sizes.len());
    for &size in &config.grid_sizes {
        let (width, height) = (size, size);
        info!(width, height, "starting simulation");

        let start = Instant::now();
        let status = Command::new(&config.executable)
            .arg(width.to_string())
            .arg(height.to_string())
            .arg(config.generations.to_string())
            .status();
        let elapsed = start.elapsed();

        match status {
            Ok(s) if s.success() => {
                info!(width, height, seconds = elapsed.as_secs_f64(), "simulation finished");
                results.push(Measurement { width, height, elapsed });
            }
            Ok(s) => warn!(width, height, status = %s, "simulation failed; skipping"),
            Err(e) => warn!(
                width,
                height,
                executable = %config.executable.display(),
                error = %e,
                "could not start simulation; skipping"
            ),
        }
    }
    results
}

/// Run the sweep and write `config.output`, replacing earlier results.
pub fn run_and_record(config: &SweepConfig) -> Result<Vec<Measurement>> {
    let results = run_sweep(config);
    write_measurements_to_path(&config.output, &results)
        .with_context(|| format!("writing results '{}'", config.output.display()))?;
    info!(runs = results.len(), output = %config.output.display(), "saved results");
    Ok(results)
}
