// File: crates/chart-core/tests/determinism.rs
// Purpose: Identical charts rasterize to identical pixels; different data does not.

use chart_core::{Chart, LegendPosition, MarkerShape, MarkerStyle, RenderOptions, Series};
use skia_safe::Color;

fn cost_chart(auction_offset: f64) -> Chart {
    let xs: Vec<f64> = (0..20).map(|i| (i * 5) as f64).collect();
    let auction: Vec<f64> = xs.iter().map(|x| 120_000.0 + auction_offset + x * 40.0).collect();
    let raffle: Vec<f64> = xs.iter().map(|x| 90_000.0 + x * 15.0).collect();

    let mut chart = Chart::new();
    chart.add_series(Series::from_columns("raffle", &xs, &raffle, MarkerStyle::new(MarkerShape::Square, Color::BLUE)));
    chart.add_series(Series::from_columns("auction", &xs, &auction, MarkerStyle::new(MarkerShape::Circle, Color::RED)));
    chart.legend = Some(LegendPosition::LowerLeft);
    chart.autoscale_axes(Some(0.0));
    chart
}

fn pixels(chart: &Chart) -> Vec<u8> {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    chart.render_to_rgba8(&opts).expect("rgba render").0
}

#[test]
fn same_chart_same_pixels() {
    assert_eq!(pixels(&cost_chart(0.0)), pixels(&cost_chart(0.0)));
}

#[test]
fn png_bytes_decode_to_rendered_pixels() {
    let chart = cost_chart(0.0);
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let png = chart.render_to_png_bytes(&opts).expect("render bytes");
    let decoded = image::load_from_memory(&png).expect("decode").to_rgba8();
    assert_eq!(decoded.as_raw(), &pixels(&chart));
}

#[test]
fn moved_series_changes_pixels() {
    assert_ne!(pixels(&cost_chart(0.0)), pixels(&cost_chart(-60_000.0)));
}
