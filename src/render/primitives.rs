use indexmap::IndexMap;

use crate::error::{MinimapError, MinimapResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Same color with alpha multiplied by a series opacity.
    #[must_use]
    pub fn faded(self, opacity: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, self.alpha * opacity.clamp(0.0, 1.0))
    }

    pub fn validate(self) -> MinimapResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(MinimapError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Line colors keyed by dataset key.
pub type SeriesColors = IndexMap<String, Color>;
