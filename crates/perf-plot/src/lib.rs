// File: crates/perf-plot/src/lib.rs
// Summary: Library side of the perf-plot binaries: dataset IO, the plot pipeline, and the measurement sweep.

pub mod dataset;
pub mod figure;
pub mod logging;
pub mod sweep;

pub use dataset::{Dataset, DatasetError, Measurement};
pub use figure::{build_chart, render, PlotSpec};
pub use sweep::{run_and_record, run_sweep, SweepConfig};
