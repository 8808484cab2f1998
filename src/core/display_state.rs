use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Dataset, YBounds};

/// Per-frame chart state pushed by the host.
///
/// Only the fields below are read by the minimap. `opacities` is keyed by
/// dataset key; a series missing from the map counts as hidden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayState {
    pub begin: f64,
    pub end: f64,
    #[serde(default)]
    pub opacities: IndexMap<String, f64>,
    pub y_min_minimap: f64,
    pub y_max_minimap: f64,
    #[serde(default)]
    pub y_min_minimap_second: Option<f64>,
    #[serde(default)]
    pub y_max_minimap_second: Option<f64>,
    pub total_x_width: f64,
    /// Discrete step of the selection; `None` means continuous.
    #[serde(default)]
    pub minimap_delta: Option<f64>,
    /// Point-focus hint of the main chart. Never drawn on the minimap.
    #[serde(default)]
    pub focus_on: Option<f64>,
    /// Precomputed non-animated variant used when many series are present.
    #[serde(default, rename = "static")]
    pub static_state: Option<Box<DisplayState>>,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            begin: 0.0,
            end: 1.0,
            opacities: IndexMap::new(),
            y_min_minimap: 0.0,
            y_max_minimap: 1.0,
            y_min_minimap_second: None,
            y_max_minimap_second: None,
            total_x_width: 0.0,
            minimap_delta: None,
            focus_on: None,
            static_state: None,
        }
    }
}

impl DisplayState {
    #[must_use]
    pub fn with_range(mut self, begin: f64, end: f64) -> Self {
        self.begin = begin;
        self.end = end;
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, key: impl Into<String>, opacity: f64) -> Self {
        self.opacities.insert(key.into(), opacity);
        self
    }

    #[must_use]
    pub fn with_primary_bounds(mut self, y_min: f64, y_max: f64) -> Self {
        self.y_min_minimap = y_min;
        self.y_max_minimap = y_max;
        self
    }

    #[must_use]
    pub fn with_secondary_bounds(mut self, y_min: f64, y_max: f64) -> Self {
        self.y_min_minimap_second = Some(y_min);
        self.y_max_minimap_second = Some(y_max);
        self
    }

    #[must_use]
    pub fn with_total_x_width(mut self, total_x_width: f64) -> Self {
        self.total_x_width = total_x_width;
        self
    }

    #[must_use]
    pub fn with_minimap_delta(mut self, delta: f64) -> Self {
        self.minimap_delta = Some(delta);
        self
    }

    #[must_use]
    pub fn with_static_state(mut self, state: DisplayState) -> Self {
        self.static_state = Some(Box::new(state));
        self
    }

    #[must_use]
    pub fn opacity(&self, key: &str) -> Option<f64> {
        self.opacities.get(key).copied()
    }

    /// Opacities ordered by `datasets`, clamped into `[0, 1]`; missing
    /// entries read as `0`.
    #[must_use]
    pub fn visibilities(&self, datasets: &[Dataset]) -> SmallVec<[f64; 8]> {
        datasets
            .iter()
            .map(|dataset| {
                self.opacity(&dataset.key)
                    .filter(|opacity| opacity.is_finite())
                    .unwrap_or(0.0)
                    .clamp(0.0, 1.0)
            })
            .collect()
    }

    #[must_use]
    pub fn primary_bounds(&self) -> YBounds {
        YBounds::new(self.y_min_minimap, self.y_max_minimap)
    }

    #[must_use]
    pub fn secondary_bounds(&self) -> Option<YBounds> {
        match (self.y_min_minimap_second, self.y_max_minimap_second) {
            (Some(y_min), Some(y_max)) => Some(YBounds::new(y_min, y_max)),
            _ => None,
        }
    }

    /// Copy of this state with the point-focus hint cleared.
    #[must_use]
    pub fn without_focus(mut self) -> Self {
        self.focus_on = None;
        self
    }

    /// True when any tracked field differs: the opacity of a listed dataset or
    /// the primary max-Y bound. Everything else is ignored.
    #[must_use]
    pub fn differs_in_tracked_fields(&self, other: &Self, datasets: &[Dataset]) -> bool {
        if datasets
            .iter()
            .any(|dataset| self.opacity(&dataset.key) != other.opacity(&dataset.key))
        {
            return true;
        }

        self.y_max_minimap != other.y_max_minimap
    }
}

#[cfg(test)]
mod tests {
    use super::DisplayState;
    use crate::core::Dataset;

    #[test]
    fn untracked_fields_do_not_count_as_changes() {
        let datasets = [Dataset::new("a")];
        let previous = DisplayState::default().with_opacity("a", 1.0);
        let mut next = previous.clone().with_primary_bounds(-5.0, 1.0);
        next.total_x_width = 42.0;
        next.focus_on = Some(3.0);

        assert!(!previous.differs_in_tracked_fields(&next, &datasets));
    }

    #[test]
    fn opacity_of_unlisted_series_is_ignored() {
        let datasets = [Dataset::new("a")];
        let previous = DisplayState::default().with_opacity("a", 1.0);
        let next = previous.clone().with_opacity("z", 0.5);

        assert!(!previous.differs_in_tracked_fields(&next, &datasets));
    }

    #[test]
    fn missing_opacity_reads_as_hidden() {
        let datasets = [Dataset::new("a"), Dataset::new("b")];
        let state = DisplayState::default().with_opacity("a", 0.4);
        assert_eq!(state.visibilities(&datasets).as_slice(), &[0.4, 0.0]);
    }

    #[test]
    fn visibilities_are_clamped_to_unit_interval() {
        let datasets = [Dataset::new("a"), Dataset::new("b"), Dataset::new("c")];
        let state = DisplayState::default()
            .with_opacity("a", 1.5)
            .with_opacity("b", -0.2)
            .with_opacity("c", f64::NAN);
        assert_eq!(state.visibilities(&datasets).as_slice(), &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn static_sub_state_deserializes_from_static_key() {
        let json = r#"{
            "begin": 0.1, "end": 0.9,
            "opacities": {"a": 1.0},
            "y_min_minimap": 0.0, "y_max_minimap": 10.0,
            "total_x_width": 99.0,
            "static": {
                "begin": 0.1, "end": 0.9,
                "y_min_minimap": 0.0, "y_max_minimap": 12.0,
                "total_x_width": 99.0
            }
        }"#;
        let state: DisplayState = serde_json::from_str(json).expect("parse state");
        let fallback = state.static_state.expect("static state");
        assert_eq!(fallback.y_max_minimap, 12.0);
        assert!(fallback.opacities.is_empty());
    }
}
