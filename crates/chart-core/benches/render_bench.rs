// File: crates/chart-core/benches/render_bench.rs
// Summary: Render throughput for log-log line charts with markers.

use chart_core::{Axis, Chart, FigureSize, Marker, RenderOptions, Series};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_chart_loglog(n: usize) -> Chart {
    let mut ch = Chart::new();
    let data = (1..=n)
        .map(|i| {
            let x = i as f64 * 10.0;
            (x, 1e-6 * x * x)
        })
        .collect();
    ch.x_axis = Axis::log10("X");
    ch.y_axis = Axis::log10("Y");
    ch.set_grid(true);
    ch.add_series(Series::line(data).with_marker(Marker::Circle));
    ch.autoscale_axes(chart_core::DEFAULT_MARGIN);
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[5usize, 1_000usize, 50_000usize] {
        group.bench_function(format!("loglog_{n}"), |b| {
            let ch = build_chart_loglog(n);
            let mut opts = RenderOptions::for_figure(FigureSize::new(10.0, 6.0), 100.0);
            opts.draw_labels = false;
            b.iter(|| {
                let bytes = ch.render_to_png_bytes(&opts).expect("render");
                black_box(bytes);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
