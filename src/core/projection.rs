use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::error::{MinimapError, MinimapResult};

/// Y bounds of one value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YBounds {
    pub y_min: f64,
    pub y_max: f64,
}

impl YBounds {
    #[must_use]
    pub fn new(y_min: f64, y_max: f64) -> Self {
        Self { y_min, y_max }
    }
}

/// Inputs for the data-to-pixel mapping of the preview.
///
/// `begin`/`end` select the normalized x slice of `[0, total_x_width]` that is
/// stretched over `available_width`. The minimap always projects the full
/// series (`0..1`). `y_padding` is kept free in pixels at the top and bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParams {
    pub begin: f64,
    pub end: f64,
    pub total_x_width: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub available_width: f64,
    pub available_height: f64,
    pub y_padding: f64,
}

impl ProjectionParams {
    #[must_use]
    pub fn bounds(self) -> YBounds {
        YBounds::new(self.y_min, self.y_max)
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: YBounds) -> Self {
        self.y_min = bounds.y_min;
        self.y_max = bounds.y_max;
        self
    }

    pub fn validate(self) -> MinimapResult<Self> {
        for (field, value) in [
            ("begin", self.begin),
            ("end", self.end),
            ("total_x_width", self.total_x_width),
            ("y_min", self.y_min),
            ("y_max", self.y_max),
            ("available_width", self.available_width),
            ("available_height", self.available_height),
            ("y_padding", self.y_padding),
        ] {
            if !value.is_finite() {
                return Err(MinimapError::InvalidData(format!(
                    "projection `{field}` must be finite"
                )));
            }
        }
        if self.end <= self.begin {
            return Err(MinimapError::InvalidData(
                "projection end must be > begin".to_owned(),
            ));
        }
        if self.total_x_width < 0.0 {
            return Err(MinimapError::InvalidData(
                "projection total x width must be >= 0".to_owned(),
            ));
        }
        if self.available_width <= 0.0 || self.available_height <= 0.0 {
            return Err(MinimapError::InvalidData(
                "projection viewport must be > 0".to_owned(),
            ));
        }
        if self.y_padding < 0.0 || self.y_padding * 2.0 >= self.available_height {
            return Err(MinimapError::InvalidData(
                "projection y padding must be >= 0 and leave drawable height".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Linear data-space to pixel-space mapping for the preview.
///
/// A zero x span (single-sample series) maps every x to the left edge and a
/// zero y span (flat series) maps every value to the vertical middle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimapProjection {
    params: ProjectionParams,
    x_offset: f64,
    x_factor: f64,
    y_factor: f64,
}

impl MinimapProjection {
    pub fn new(params: ProjectionParams) -> MinimapResult<Self> {
        let params = params.validate()?;

        let x_span = (params.end - params.begin) * params.total_x_width;
        let x_factor = if x_span > 0.0 {
            params.available_width / x_span
        } else {
            0.0
        };
        let x_offset = params.begin * params.total_x_width;

        let y_span = params.y_max - params.y_min;
        let drawable_height = params.available_height - params.y_padding * 2.0;
        let y_factor = if y_span != 0.0 {
            drawable_height / y_span
        } else {
            0.0
        };

        Ok(Self {
            params,
            x_offset,
            x_factor,
            y_factor,
        })
    }

    #[must_use]
    pub fn params(&self) -> ProjectionParams {
        self.params
    }

    #[must_use]
    pub fn bounds(&self) -> YBounds {
        self.params.bounds()
    }

    /// Same x mapping and viewport, rebound to other y bounds.
    pub fn copy_with_bounds(&self, bounds: YBounds) -> MinimapResult<Self> {
        Self::new(self.params.with_bounds(bounds))
    }

    #[must_use]
    pub fn x_to_pixel(&self, x: f64) -> f64 {
        (x - self.x_offset) * self.x_factor
    }

    #[must_use]
    pub fn y_to_pixel(&self, y: f64) -> f64 {
        if self.y_factor == 0.0 {
            return self.params.available_height / 2.0;
        }
        self.params.available_height
            - self.params.y_padding
            - (y - self.params.y_min) * self.y_factor
    }

    #[must_use]
    pub fn to_pixel(&self, point: DataPoint) -> DataPoint {
        DataPoint::new(self.x_to_pixel(point.x), self.y_to_pixel(point.y))
    }
}
