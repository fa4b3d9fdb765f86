// File: crates/perf-plot/tests/sweep.rs
// Purpose: Measurement sweep records successful runs and skips failing ones.

use std::path::PathBuf;

use perf_plot::{run_and_record, run_sweep, Dataset, SweepConfig};

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("perf-sweep").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn defaults_match_fixed_sweep() {
    let cfg = SweepConfig::default();
    assert_eq!(cfg.grid_sizes, vec![10, 20, 100, 1000, 10000]);
    assert_eq!(cfg.generations, 1);
    assert_eq!(cfg.output, PathBuf::from("simulation_results.csv"));
}

#[test]
fn unstartable_executable_yields_header_only_file() {
    let dir = scratch("unstartable");
    let cfg = SweepConfig {
        executable: dir.join("does-not-exist"),
        grid_sizes: vec![10, 20],
        generations: 1,
        output: dir.join("simulation_results.csv"),
    };
    std::fs::write(&cfg.output, "stale\n").unwrap();

    let results = run_and_record(&cfg).expect("sweep");
    assert!(results.is_empty());
    assert_eq!(std::fs::read_to_string(&cfg.output).unwrap(), "Width,Height,Elapsed Time (s)\n");
}

#[cfg(unix)]
#[test]
fn successful_runs_are_recorded_in_order() {
    let dir = scratch("success");
    let cfg = SweepConfig {
        executable: PathBuf::from("true"),
        grid_sizes: vec![10, 100],
        generations: 1,
        output: dir.join("simulation_results.csv"),
    };

    let results = run_and_record(&cfg).expect("sweep");
    assert_eq!(results.iter().map(|m| m.width).collect::<Vec<_>>(), vec![10, 100]);
    assert!(results.iter().all(|m| m.width == m.height));

    let ds = Dataset::from_path(&cfg.output).unwrap();
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.numeric_column("Width").unwrap(), vec![10.0, 100.0]);
    assert!(ds.numeric_column("Elapsed Time (s)").unwrap().iter().all(|s| *s >= 0.0));
}

#[cfg(unix)]
#[test]
fn failing_runs_are_skipped() {
    let cfg = SweepConfig {
        executable: PathBuf::from("false"),
        grid_sizes: vec![10],
        generations: 1,
        output: PathBuf::from("unused.csv"),
    };
    assert!(run_sweep(&cfg).is_empty());
}
