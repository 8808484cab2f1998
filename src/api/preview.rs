use tracing::{debug, warn};

use crate::core::{
    CanvasSize, Dataset, DisplayState, MinimapProjection, ProjectionParams, XWindow,
    secondary_dataset_index, simplification_delta,
};
use crate::error::MinimapResult;
use crate::render::{MinimapFrame, MinimapRenderer, SecondaryLayer, SeriesColors};

use super::{MinimapConfig, PointSampler};

/// Maps a total point count to a base simplification tolerance.
pub type SimplificationFormula = fn(usize) -> f64;

/// Decides when the full-series preview must be redrawn and prepares the
/// frame handed to the renderer.
///
/// Only per-series opacity and the primary max-Y bound are tracked; any other
/// field change is treated as redundant and suppressed.
#[derive(Debug, Clone)]
pub struct PreviewRenderer {
    state: Option<DisplayState>,
    force_redraw: bool,
    line_width: f64,
    vertical_padding: f64,
    simplifier_factor: f64,
    max_animated_series: usize,
    simplification_formula: SimplificationFormula,
}

impl PreviewRenderer {
    #[must_use]
    pub fn new(config: MinimapConfig) -> Self {
        Self {
            state: None,
            force_redraw: false,
            line_width: config.line_width,
            vertical_padding: config.vertical_padding,
            simplifier_factor: config.simplifier_factor,
            max_animated_series: config.max_animated_series,
            simplification_formula: simplification_delta,
        }
    }

    #[must_use]
    pub fn with_simplification_formula(mut self, formula: SimplificationFormula) -> Self {
        self.simplification_formula = formula;
        self
    }

    /// Last drawn state snapshot, focus hint cleared.
    #[must_use]
    pub fn state(&self) -> Option<&DisplayState> {
        self.state.as_ref()
    }

    /// Discrete step of the last drawn state.
    #[must_use]
    pub fn minimap_delta(&self) -> Option<f64> {
        self.state.as_ref().and_then(|state| state.minimap_delta)
    }

    /// Picks the non-animated sub-state once the dataset count reaches the
    /// animation ceiling. Falls back to `incoming` when the host sent none.
    #[must_use]
    pub fn select_state(&self, incoming: DisplayState, dataset_count: usize) -> DisplayState {
        if dataset_count < self.max_animated_series {
            return incoming;
        }
        match incoming.static_state {
            Some(static_state) => *static_state,
            None => {
                warn!(
                    dataset_count,
                    max_animated_series = self.max_animated_series,
                    "static minimap state missing, drawing animated state"
                );
                DisplayState {
                    static_state: None,
                    ..incoming
                }
            }
        }
    }

    #[must_use]
    pub fn needs_redraw(&self, candidate: &DisplayState, datasets: &[Dataset]) -> bool {
        if self.force_redraw {
            return true;
        }
        match &self.state {
            None => true,
            Some(previous) => previous.differs_in_tracked_fields(candidate, datasets),
        }
    }

    /// Stores `state` and redraws when a tracked field changed.
    ///
    /// Returns `true` when a draw was issued. On a renderer failure the
    /// snapshot is kept but the next call redraws unconditionally.
    pub fn redraw_if_needed<R, S>(
        &mut self,
        state: DisplayState,
        datasets: &[Dataset],
        colors: &SeriesColors,
        canvas_size: CanvasSize,
        renderer: &mut R,
        sampler: &S,
    ) -> MinimapResult<bool>
    where
        R: MinimapRenderer,
        S: PointSampler,
    {
        if !self.needs_redraw(&state, datasets) {
            debug!("minimap state unchanged, skipping redraw");
            return Ok(false);
        }

        let state = state.without_focus();
        self.state = Some(state.clone());
        self.force_redraw = true;

        renderer.clear()?;
        let frame = self.build_frame(state, datasets, colors, canvas_size, sampler)?;
        debug!(
            total_points = frame.total_points(),
            simplification = frame.simplification,
            secondary = frame.secondary.is_some(),
            "redraw minimap preview"
        );
        renderer.draw(&frame)?;

        self.force_redraw = false;
        Ok(true)
    }

    /// Samples the whole series and assembles the draw request.
    pub fn build_frame<S: PointSampler>(
        &self,
        state: DisplayState,
        datasets: &[Dataset],
        colors: &SeriesColors,
        canvas_size: CanvasSize,
        sampler: &S,
    ) -> MinimapResult<MinimapFrame> {
        let window = XWindow::full(state.total_x_width);
        let bounds = state.primary_bounds();
        let params = ProjectionParams {
            begin: 0.0,
            end: 1.0,
            total_x_width: state.total_x_width,
            y_min: bounds.y_min,
            y_max: bounds.y_max,
            available_width: canvas_size.width_px(),
            available_height: canvas_size.height_px(),
            y_padding: self.vertical_padding,
        };
        let visibilities = state.visibilities(datasets);

        let points = sampler.sample(datasets, window, &visibilities, &params);
        let projection = MinimapProjection::new(params)?;
        let secondary = self.build_secondary_layer(
            &state,
            datasets,
            &visibilities,
            window,
            &projection,
            sampler,
        )?;

        let total_points: usize = points.iter().map(Vec::len).sum();
        let simplification = (self.simplification_formula)(total_points) * self.simplifier_factor;

        Ok(MinimapFrame {
            canvas_size,
            state,
            datasets: datasets.to_vec(),
            window,
            points,
            projection,
            secondary,
            line_width: self.line_width,
            visibilities: visibilities.into_vec(),
            colors: colors.clone(),
            is_minimap: true,
            simplification,
        })
    }

    fn build_secondary_layer<S: PointSampler>(
        &self,
        state: &DisplayState,
        datasets: &[Dataset],
        visibilities: &[f64],
        window: XWindow,
        projection: &MinimapProjection,
        sampler: &S,
    ) -> MinimapResult<Option<SecondaryLayer>> {
        let Some(dataset_index) = secondary_dataset_index(datasets) else {
            return Ok(None);
        };
        let Some(bounds) = state.secondary_bounds() else {
            warn!(
                key = datasets[dataset_index].key.as_str(),
                "secondary y bounds missing, drawing without secondary axis"
            );
            return Ok(None);
        };

        let projection = projection.copy_with_bounds(bounds)?;
        let points = sampler
            .sample(
                &datasets[dataset_index..=dataset_index],
                window,
                &visibilities[dataset_index..=dataset_index],
                &projection.params(),
            )
            .into_iter()
            .next()
            .unwrap_or_default();

        Ok(Some(SecondaryLayer {
            dataset_index,
            points,
            projection,
        }))
    }
}
