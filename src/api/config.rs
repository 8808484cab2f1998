use serde::{Deserialize, Serialize};

use crate::core::{CanvasSize, Range};
use crate::error::{MinimapError, MinimapResult};

/// Minimap bootstrap configuration.
///
/// This type is serializable so hosts can persist widget setup next to their
/// chart configuration. Missing fields fall back to the defaults below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinimapConfig {
    #[serde(default = "default_height_px")]
    pub height_px: u32,
    /// Horizontal margin on each side of the container.
    #[serde(default = "default_margin_px")]
    pub margin_px: u32,
    /// Grabbable width of each slider ear.
    #[serde(default = "default_ear_width_px")]
    pub ear_width_px: f64,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    /// At or above this many datasets the static sub-state is drawn.
    #[serde(default = "default_max_animated_series")]
    pub max_animated_series: usize,
    /// Multiplier applied to the simplification tolerance.
    #[serde(default = "default_simplifier_factor")]
    pub simplifier_factor: f64,
    /// Pixels kept free above and below the preview.
    #[serde(default = "default_vertical_padding")]
    pub vertical_padding: f64,
    #[serde(default)]
    pub initial_range: Option<Range>,
}

impl Default for MinimapConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MinimapConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            height_px: default_height_px(),
            margin_px: default_margin_px(),
            ear_width_px: default_ear_width_px(),
            line_width: default_line_width(),
            max_animated_series: default_max_animated_series(),
            simplifier_factor: default_simplifier_factor(),
            vertical_padding: default_vertical_padding(),
            initial_range: None,
        }
    }

    #[must_use]
    pub fn with_height_px(mut self, height_px: u32) -> Self {
        self.height_px = height_px;
        self
    }

    #[must_use]
    pub fn with_margin_px(mut self, margin_px: u32) -> Self {
        self.margin_px = margin_px;
        self
    }

    #[must_use]
    pub fn with_ear_width_px(mut self, ear_width_px: f64) -> Self {
        self.ear_width_px = ear_width_px;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_max_animated_series(mut self, max_animated_series: usize) -> Self {
        self.max_animated_series = max_animated_series;
        self
    }

    #[must_use]
    pub fn with_simplifier_factor(mut self, simplifier_factor: f64) -> Self {
        self.simplifier_factor = simplifier_factor;
        self
    }

    #[must_use]
    pub fn with_vertical_padding(mut self, vertical_padding: f64) -> Self {
        self.vertical_padding = vertical_padding;
        self
    }

    #[must_use]
    pub fn with_initial_range(mut self, range: Range) -> Self {
        self.initial_range = Some(range);
        self
    }

    /// Initial selection, the full series when none is configured.
    #[must_use]
    pub fn initial_range_or_full(self) -> Range {
        self.initial_range.unwrap_or(Range::FULL)
    }

    /// Drawing-surface size for a container of `container_width` pixels.
    pub fn canvas_size_for_container(self, container_width: u32) -> MinimapResult<CanvasSize> {
        let size = CanvasSize::new(
            container_width.saturating_sub(self.margin_px.saturating_mul(2)),
            self.height_px,
        );
        if !size.is_valid() {
            return Err(MinimapError::InvalidCanvasSize {
                width: size.width,
                height: size.height,
            });
        }
        Ok(size)
    }

    pub fn validate(self) -> MinimapResult<Self> {
        if self.height_px == 0 {
            return Err(MinimapError::InvalidConfig(
                "minimap height must be > 0".to_owned(),
            ));
        }
        if !self.ear_width_px.is_finite() || self.ear_width_px <= 0.0 {
            return Err(MinimapError::InvalidConfig(
                "ear width must be finite and > 0".to_owned(),
            ));
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(MinimapError::InvalidConfig(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        if self.max_animated_series == 0 {
            return Err(MinimapError::InvalidConfig(
                "max animated series must be > 0".to_owned(),
            ));
        }
        if !self.simplifier_factor.is_finite() || self.simplifier_factor <= 0.0 {
            return Err(MinimapError::InvalidConfig(
                "simplifier factor must be finite and > 0".to_owned(),
            ));
        }
        if !self.vertical_padding.is_finite()
            || self.vertical_padding < 0.0
            || self.vertical_padding * 2.0 >= f64::from(self.height_px)
        {
            return Err(MinimapError::InvalidConfig(
                "vertical padding must be >= 0 and leave drawable height".to_owned(),
            ));
        }
        Ok(self)
    }
}

fn default_height_px() -> u32 {
    40
}

fn default_margin_px() -> u32 {
    15
}

fn default_ear_width_px() -> f64 {
    8.0
}

fn default_line_width() -> f64 {
    1.0
}

fn default_max_animated_series() -> usize {
    4
}

fn default_simplifier_factor() -> f64 {
    0.5
}

fn default_vertical_padding() -> f64 {
    1.0
}
