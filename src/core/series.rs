use serde::{Deserialize, Serialize};

/// Series definition as known to the minimap: a stable key and its y axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dataset {
    pub key: String,
    #[serde(default)]
    pub has_own_y_axis: bool,
}

impl Dataset {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            has_own_y_axis: false,
        }
    }

    /// Dataset plotted against the secondary y axis.
    #[must_use]
    pub fn secondary(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            has_own_y_axis: true,
        }
    }
}

/// Returns the index of the first dataset that owns the secondary y axis.
#[must_use]
pub fn secondary_dataset_index(datasets: &[Dataset]) -> Option<usize> {
    datasets.iter().position(|dataset| dataset.has_own_y_axis)
}
