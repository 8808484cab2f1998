#![cfg(feature = "cairo-backend")]

use chart_minimap::MinimapError;
use chart_minimap::api::{HeadlessView, MinimapConfig, MinimapController, WindowedSampler};
use chart_minimap::core::{CanvasSize, DataPoint, Dataset, DisplayState};
use chart_minimap::render::{CairoMinimapRenderer, Color, MinimapRenderer, SeriesColors};

fn ramp(len: u32) -> Vec<DataPoint> {
    (0..len)
        .map(|i| DataPoint::new(f64::from(i), f64::from(i % 13)))
        .collect()
}

fn controller() -> MinimapController<CairoMinimapRenderer, WindowedSampler, HeadlessView> {
    let renderer = CairoMinimapRenderer::new(CanvasSize::new(300, 40)).expect("renderer");
    let sampler = WindowedSampler::new()
        .with_series("a", ramp(100))
        .with_series("b", ramp(100));
    let mut colors = SeriesColors::new();
    colors.insert("a".to_owned(), Color::rgb(0.2, 0.4, 0.9));

    MinimapController::new(
        renderer,
        sampler,
        HeadlessView::default(),
        vec![Dataset::new("a"), Dataset::new("b")],
        colors,
        MinimapConfig::new(),
    )
    .expect("controller init")
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoMinimapRenderer::new(CanvasSize::new(0, 40)).expect_err("zero width");
    assert!(matches!(err, MinimapError::InvalidCanvasSize { width: 0, .. }));
}

#[test]
fn cairo_renderer_reports_surface_size() {
    let renderer = CairoMinimapRenderer::new(CanvasSize::new(320, 48)).expect("renderer");
    assert_eq!(renderer.canvas_size(), CanvasSize::new(320, 48));
}

#[test]
fn cairo_renderer_strokes_every_visible_series() {
    let mut controller = controller();
    let state = DisplayState::default()
        .with_opacity("a", 1.0)
        .with_opacity("b", 0.5)
        .with_primary_bounds(0.0, 12.0)
        .with_total_x_width(99.0);

    assert!(controller.update(state.clone()).expect("update"));
    let stats = controller.renderer().last_stats();
    assert_eq!(stats.series_drawn, 2);
    assert_eq!(stats.segments_drawn, 2 * 99);

    assert!(controller.update(state.with_opacity("b", 0.0)).expect("update"));
    assert_eq!(controller.renderer().last_stats().series_drawn, 1);
}

#[test]
fn fallback_color_must_be_valid() {
    let mut renderer = CairoMinimapRenderer::new(CanvasSize::new(100, 40)).expect("renderer");
    let err = renderer
        .set_fallback_color(Color::rgba(0.0, 0.0, 2.0, 1.0))
        .expect_err("out of range channel");
    assert!(matches!(err, MinimapError::InvalidData(_)));
    renderer
        .set_fallback_color(Color::rgb(0.1, 0.1, 0.1))
        .expect("valid color");
}
