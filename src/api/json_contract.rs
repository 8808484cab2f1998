use serde::{Deserialize, Serialize};

use crate::core::{CanvasSize, DisplayState, Range};
use crate::error::{MinimapError, MinimapResult};
use crate::interaction::DragSession;
use crate::render::MinimapRenderer;

use super::{MinimapController, MinimapView, PointSampler, RulerLayout};

pub const MINIMAP_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable view of the widget state, for host diagnostics and
/// regression fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimapSnapshot {
    pub canvas_size: CanvasSize,
    pub range: Range,
    pub ruler: Option<RulerLayout>,
    pub ruler_pending: bool,
    pub session: Option<DragSession>,
    pub visible: bool,
    pub display_state: Option<DisplayState>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimapSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: MinimapSnapshot,
}

impl MinimapSnapshot {
    pub fn to_json_pretty(&self) -> MinimapResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            MinimapError::InvalidData(format!("failed to serialize minimap snapshot: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> MinimapResult<String> {
        let payload = MinimapSnapshotJsonContractV1 {
            schema_version: MINIMAP_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            MinimapError::InvalidData(format!(
                "failed to serialize minimap snapshot contract v1: {e}"
            ))
        })
    }

    /// Accepts both the bare snapshot and the versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> MinimapResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<MinimapSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: MinimapSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                MinimapError::InvalidData(format!("failed to parse minimap snapshot json: {e}"))
            })?;
        if payload.schema_version != MINIMAP_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(MinimapError::InvalidData(format!(
                "unsupported minimap snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R, S, V> MinimapController<R, S, V>
where
    R: MinimapRenderer,
    S: PointSampler,
    V: MinimapView,
{
    #[must_use]
    pub fn snapshot(&self) -> MinimapSnapshot {
        MinimapSnapshot {
            canvas_size: self.canvas_size(),
            range: self.range(),
            ruler: self.ruler_layout(),
            ruler_pending: self.is_ruler_pending(),
            session: self.drag_session(),
            visible: self.is_visible(),
            display_state: self.display_state().cloned(),
        }
    }
}
