use tracing::{debug, trace, warn};

use crate::core::{
    CanvasSize, Dataset, DiscreteSnapper, DisplayState, PartialRange, Range, RangeModel,
    RangeOrigin,
};
use crate::error::{MinimapError, MinimapResult};
use crate::interaction::{
    CaptureOutcome, DragGeometry, DragSession, DragZone, InteractionState, SliderBox,
};
use crate::render::{MinimapRenderer, SeriesColors};

use super::{
    FrameThrottle, MinimapConfig, MinimapView, PointSampler, PreviewRenderer, RulerLayout,
    RulerSync, SimplificationFormula,
};

/// Host callback invoked with the full range after an interaction changed it.
pub type RangeCallback = Box<dyn FnMut(Range)>;

/// Minimap widget controller.
///
/// Owns the selected range, the drag session, the ruler throttle and the
/// preview snapshot. Everything runs on the host's UI thread: pointer events
/// arrive through `on_drag_*`, the host chart pushes state through `update`,
/// and the host calls `on_animation_frame` once per display refresh.
pub struct MinimapController<R, S, V>
where
    R: MinimapRenderer,
    S: PointSampler,
    V: MinimapView,
{
    renderer: R,
    sampler: S,
    view: V,
    canvas_size: CanvasSize,
    geometry: DragGeometry,
    datasets: Vec<Dataset>,
    colors: SeriesColors,
    range: RangeModel,
    interaction: InteractionState,
    ruler: RulerSync,
    preview: PreviewRenderer,
    transparency: FrameThrottle<bool>,
    visible: bool,
    range_callback: Option<RangeCallback>,
}

impl<R, S, V> MinimapController<R, S, V>
where
    R: MinimapRenderer,
    S: PointSampler,
    V: MinimapView,
{
    /// Builds the controller and schedules the first ruler write.
    ///
    /// The canvas size is read from the renderer once; the configured initial
    /// range (or the full range) is applied without notifying the host.
    pub fn new(
        renderer: R,
        sampler: S,
        view: V,
        datasets: Vec<Dataset>,
        colors: SeriesColors,
        config: MinimapConfig,
    ) -> MinimapResult<Self> {
        let config = config.validate()?;
        let canvas_size = renderer.canvas_size();
        if !canvas_size.is_valid() {
            return Err(MinimapError::InvalidCanvasSize {
                width: canvas_size.width,
                height: canvas_size.height,
            });
        }
        if config.ear_width_px * 2.0 >= canvas_size.width_px() {
            return Err(MinimapError::InvalidConfig(
                "canvas must be wider than both slider ears".to_owned(),
            ));
        }
        if config.vertical_padding * 2.0 >= canvas_size.height_px() {
            return Err(MinimapError::InvalidConfig(
                "canvas must be taller than the vertical padding".to_owned(),
            ));
        }

        let initial = config.initial_range_or_full();
        let mut ruler = RulerSync::default();
        ruler.schedule(initial);
        debug!(
            width = canvas_size.width,
            height = canvas_size.height,
            begin = initial.begin(),
            end = initial.end(),
            datasets = datasets.len(),
            "create minimap"
        );

        Ok(Self {
            renderer,
            sampler,
            view,
            canvas_size,
            geometry: DragGeometry::new(canvas_size.width_px(), config.ear_width_px),
            datasets,
            colors,
            range: RangeModel::new(initial),
            interaction: InteractionState::default(),
            ruler,
            preview: PreviewRenderer::new(config),
            transparency: FrameThrottle::default(),
            visible: true,
            range_callback: None,
        })
    }

    /// Registers the callback notified of interaction-driven range changes.
    #[must_use]
    pub fn with_range_callback(mut self, callback: impl FnMut(Range) + 'static) -> Self {
        self.range_callback = Some(Box::new(callback));
        self
    }

    /// Replaces the default simplification tolerance formula.
    #[must_use]
    pub fn with_simplification_formula(mut self, formula: SimplificationFormula) -> Self {
        self.preview = self.preview.with_simplification_formula(formula);
        self
    }

    #[must_use]
    pub fn range(&self) -> Range {
        self.range.current()
    }

    #[must_use]
    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas_size
    }

    #[must_use]
    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    /// Last drawn display state.
    #[must_use]
    pub fn display_state(&self) -> Option<&DisplayState> {
        self.preview.state()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.interaction.is_dragging()
    }

    #[must_use]
    pub fn drag_session(&self) -> Option<DragSession> {
        self.interaction.session()
    }

    /// Layout last written to the ruler.
    #[must_use]
    pub fn ruler_layout(&self) -> Option<RulerLayout> {
        self.ruler.applied()
    }

    #[must_use]
    pub fn is_ruler_pending(&self) -> bool {
        self.ruler.is_pending()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Host render tick.
    ///
    /// Reconciles the range with the main chart unless the user is dragging
    /// the minimap, then redraws the preview when a tracked field changed.
    /// Returns `true` when a draw was issued.
    pub fn update(&mut self, state: DisplayState) -> MinimapResult<bool> {
        if !self.interaction.is_dragging() {
            self.update_range(
                PartialRange::both(state.begin, state.end),
                RangeOrigin::External,
            );
        }

        let state = self.preview.select_state(state, self.datasets.len());
        self.preview.redraw_if_needed(
            state,
            &self.datasets,
            &self.colors,
            self.canvas_size,
            &mut self.renderer,
            &self.sampler,
        )
    }

    /// Merges, snaps and applies a range update.
    ///
    /// External updates skip snapping and never reach the range callback.
    /// Returns `true` when the range changed.
    pub fn update_range(&mut self, partial: PartialRange, origin: RangeOrigin) -> bool {
        if partial.is_empty() {
            return false;
        }
        let merged = self.range.merge(partial);
        let candidate = DiscreteSnapper::snap(merged, self.preview.minimap_delta(), origin);

        if !self.range.accept(candidate) {
            return false;
        }
        self.ruler.schedule(candidate);

        if origin.is_external() {
            debug!(
                begin = candidate.begin(),
                end = candidate.end(),
                "reconcile minimap range"
            );
        } else if let Some(callback) = self.range_callback.as_mut() {
            callback(candidate);
        }
        true
    }

    /// Shows or hides the minimap with a fade.
    ///
    /// The structural flag is written now; the transparency flag follows on
    /// the next animation frame.
    pub fn toggle(&mut self, visible: bool) {
        self.visible = visible;
        self.view.set_hidden(!visible);
        self.transparency.schedule(!visible);
    }

    /// Pointer capture on `zone`, measuring the offset from the shown slider.
    pub fn on_drag_capture(&mut self, zone: DragZone) -> CaptureOutcome {
        let offset = self.geometry.captured_offset(zone, self.shown_slider());
        self.on_drag_capture_at(zone, offset)
    }

    /// Pointer capture on `zone` with an offset measured by the host.
    pub fn on_drag_capture_at(&mut self, zone: DragZone, captured_offset: f64) -> CaptureOutcome {
        trace!(?zone, captured_offset, "minimap drag capture");
        self.interaction.on_capture(zone, captured_offset)
    }

    /// Pointer move during a gesture; `delta_x` is measured from the capture
    /// point. Returns `true` when the range changed.
    pub fn on_drag(&mut self, delta_x: f64) -> bool {
        let Some(session) = self.interaction.session() else {
            warn!(delta_x, "minimap drag without captured session");
            return false;
        };
        let candidate = self.geometry.candidate(
            session.zone,
            session.captured_offset,
            delta_x,
            self.shown_slider(),
        );
        trace!(zone = ?session.zone, delta_x, ?candidate, "minimap drag");
        self.update_range(candidate, RangeOrigin::Interaction)
    }

    pub fn on_drag_release(&mut self) {
        trace!("minimap drag release");
        self.interaction.on_release();
    }

    /// Animation-frame boundary: flushes the ruler and any deferred
    /// transparency flag. Returns `true` when the view was written.
    pub fn on_animation_frame(&mut self) -> bool {
        let ruler_written = self.ruler.flush(&mut self.view);
        let transparency = self.transparency.take();
        if let Some(transparent) = transparency {
            self.view.set_transparent(transparent);
        }
        ruler_written || transparency.is_some()
    }

    /// Slider as currently shown, or the model range before the first flush.
    fn shown_slider(&self) -> SliderBox {
        let width = self.canvas_size.width_px();
        self.ruler.applied().map_or_else(
            || SliderBox::from_range(self.range.current(), width),
            |layout| layout.slider_box(width),
        )
    }
}
