use crate::core::{CanvasSize, DataPoint, Dataset, DisplayState, MinimapProjection, XWindow};
use crate::error::{MinimapError, MinimapResult};
use crate::render::SeriesColors;

/// Points and projection for the series bound to the secondary y axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SecondaryLayer {
    /// Index into `MinimapFrame::datasets`.
    pub dataset_index: usize,
    pub points: Vec<DataPoint>,
    pub projection: MinimapProjection,
}

/// Backend-agnostic description of one minimap preview draw.
///
/// Points are in data space; backends map them with `projection` (or the
/// secondary layer's projection) and merge points closer than
/// `simplification` pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimapFrame {
    pub canvas_size: CanvasSize,
    pub state: DisplayState,
    pub datasets: Vec<Dataset>,
    pub window: XWindow,
    /// One point sequence per dataset, in dataset order.
    pub points: Vec<Vec<DataPoint>>,
    pub projection: MinimapProjection,
    pub secondary: Option<SecondaryLayer>,
    pub line_width: f64,
    /// Series opacities in dataset order.
    pub visibilities: Vec<f64>,
    pub colors: SeriesColors,
    /// Minimap-style render: thin strokes and no full-chart decorations.
    pub is_minimap: bool,
    pub simplification: f64,
}

impl MinimapFrame {
    /// Total number of primary points across all series.
    #[must_use]
    pub fn total_points(&self) -> usize {
        self.points.iter().map(Vec::len).sum()
    }

    /// Points and projection to draw for the dataset at `index`.
    ///
    /// The secondary-axis dataset uses its own layer when one is present.
    #[must_use]
    pub fn series_layer(&self, index: usize) -> Option<(&[DataPoint], &MinimapProjection)> {
        if let Some(secondary) = &self.secondary {
            if secondary.dataset_index == index {
                return Some((&secondary.points, &secondary.projection));
            }
        }
        self.points
            .get(index)
            .map(|points| (points.as_slice(), &self.projection))
    }

    pub fn validate(&self) -> MinimapResult<()> {
        if !self.canvas_size.is_valid() {
            return Err(MinimapError::InvalidCanvasSize {
                width: self.canvas_size.width,
                height: self.canvas_size.height,
            });
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(MinimapError::InvalidData(
                "minimap line width must be finite and > 0".to_owned(),
            ));
        }
        if !self.simplification.is_finite() || self.simplification < 0.0 {
            return Err(MinimapError::InvalidData(
                "simplification tolerance must be finite and >= 0".to_owned(),
            ));
        }
        if self.points.len() != self.datasets.len()
            || self.visibilities.len() != self.datasets.len()
        {
            return Err(MinimapError::InvalidData(
                "points and visibilities must match the dataset list".to_owned(),
            ));
        }
        for opacity in &self.visibilities {
            if !opacity.is_finite() || !(0.0..=1.0).contains(opacity) {
                return Err(MinimapError::InvalidData(
                    "series opacity must be finite and in [0, 1]".to_owned(),
                ));
            }
        }
        if let Some(secondary) = &self.secondary {
            if secondary.dataset_index >= self.datasets.len() {
                return Err(MinimapError::InvalidData(
                    "secondary layer points at an unknown dataset".to_owned(),
                ));
            }
        }
        for color in self.colors.values() {
            color.validate()?;
        }

        Ok(())
    }
}
