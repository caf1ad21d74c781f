// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and marker pixels.

use chart_core::{Axis, Chart, MarkerShape, MarkerStyle, RenderOptions, Series, Theme};
use chart_core::geometry::RectI32;
use chart_core::scale::LinearScale;
use skia_safe::Color;

fn pixel(px: &[u8], stride: usize, x: i32, y: i32) -> [u8; 4] {
    let i = y as usize * stride + x as usize * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::scatter(
        "big squares",
        vec![(2.0, 2.0)],
        MarkerStyle::new(MarkerShape::Square, Color::from_rgb(255, 0, 0)).with_size(12.0),
    ));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Background: opaque white in the light theme
    assert_eq!(pixel(&px, stride, 0, 0), [255, 255, 255, 255]);

    // Marker centre is solid red
    let plot = RectI32::plot_area(w, h, &opts.insets);
    let cx = LinearScale::horizontal(&chart.x_axis, &plot).to_px(2.0).round() as i32;
    let cy = LinearScale::vertical(&chart.y_axis, &plot).to_px(2.0).round() as i32;
    assert_eq!(pixel(&px, stride, cx, cy), [255, 0, 0, 255]);
}

#[test]
fn dark_theme_background() {
    let chart = Chart::new();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.theme = chart_core::theme::find("DARK");
    assert_eq!(opts.theme, Theme::dark());

    let (px, _, _, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(pixel(&px, stride, 0, 0), [18, 18, 20, 255]);
}

#[test]
fn markers_outside_view_are_clipped() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 1.0);
    chart.y_axis = Axis::new("Y", 0.0, 1.0);
    // Far below the visible range: would land in the bottom margin unclipped.
    chart.add_series(Series::scatter(
        "off-screen",
        vec![(0.5, -0.01)],
        MarkerStyle::new(MarkerShape::Square, Color::from_rgb(0, 0, 255)).with_size(16.0),
    ));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    let plot = RectI32::plot_area(w, h, &opts.insets);
    let cx = LinearScale::horizontal(&chart.x_axis, &plot).to_px(0.5).round() as i32;
    assert_eq!(pixel(&px, stride, cx, plot.bottom + 4), [255, 255, 255, 255]);
}
