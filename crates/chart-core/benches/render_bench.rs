// File: crates/chart-core/benches/render_bench.rs
// Summary: Criterion bench for two-series scatter rendering to PNG bytes.

use anyhow::Result;
use chart_core::{Chart, LegendPosition, MarkerShape, MarkerStyle, RenderOptions, Series};
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use skia_safe::Color;

fn build_scatter(n: usize) -> Chart {
    let mut ch = Chart::new();
    let xs: Vec<f64> = (0..n).map(|i| i as f64 * 5.0).collect();
    let a: Vec<f64> = xs.iter().map(|x| 100_000.0 + (x * 0.01).sin() * 5_000.0).collect();
    let b: Vec<f64> = xs.iter().map(|x| 80_000.0 + x * 0.5).collect();
    ch.add_series(Series::from_columns("raffle", &xs, &b, MarkerStyle::new(MarkerShape::Square, Color::BLUE)));
    ch.add_series(Series::from_columns("auction", &xs, &a, MarkerStyle::new(MarkerShape::Circle, Color::RED)));
    ch.legend = Some(LegendPosition::LowerLeft);
    ch.autoscale_axes(Some(0.0));
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[2_000usize, 20_000usize] {
        group.bench_function(format!("scatter_{n}"), |b| {
            let ch = build_scatter(n);
            let mut opts = RenderOptions::default();
            opts.width = 640;
            opts.height = 480;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
