// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use chart_core::{Axis, Chart, FigureSize, Marker, RenderOptions, Series};

#[test]
fn render_smoke_png() {
    let mut chart = Chart::new().with_title("Smoke");
    chart.x_axis = Axis::log10("X");
    chart.y_axis = Axis::log10("Y");
    chart.set_grid(true);
    chart.add_series(
        Series::line(vec![(10.0, 0.01), (20.0, 0.03), (100.0, 0.2), (1000.0, 4.0)]).with_marker(Marker::Circle),
    );
    chart.autoscale_axes(chart_core::DEFAULT_MARGIN);

    let opts = RenderOptions::for_figure(FigureSize::new(10.0, 6.0), 100.0);
    let out = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("smoke.png");

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (1000, 600));
}

#[test]
fn render_overwrites_existing_file() {
    let out = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("overwrite.png");
    std::fs::write(&out, b"stale contents").unwrap();

    let mut chart = Chart::new();
    chart.add_series(Series::line(vec![(0.0, 0.0), (1.0, 1.0)]));
    chart.render_to_png(&RenderOptions::default(), &out).expect("render");

    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn unwritable_path_is_an_error() {
    let out = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("no/such/dir/plot.png");
    let err = Chart::new().render_to_png(&RenderOptions::default(), &out).unwrap_err();
    assert!(matches!(err, chart_core::ChartError::Write { .. }), "got {err:?}");
    assert!(!out.exists());
}
