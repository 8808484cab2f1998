mod drag_geometry;

pub use drag_geometry::{DragGeometry, SliderBox};

use serde::{Deserialize, Serialize};

/// Draggable zone of the minimap slider that received a pointer capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragZone {
    /// Inner slider body: moves the whole window and keeps its width.
    Body,
    /// Left ear: moves `begin` only.
    LeftHandle,
    /// Right ear: moves `end` only.
    RightHandle,
}

impl DragZone {
    pub const ALL: [Self; 3] = [Self::Body, Self::LeftHandle, Self::RightHandle];

    /// Cursor the pointer-capture collaborator shows while this zone is dragged.
    #[must_use]
    pub fn dragging_cursor(self) -> DraggingCursor {
        match self {
            Self::Body => DraggingCursor::Grabbing,
            Self::LeftHandle | Self::RightHandle => DraggingCursor::EwResize,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraggingCursor {
    Grabbing,
    EwResize,
}

impl DraggingCursor {
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Grabbing => "grabbing",
            Self::EwResize => "ew-resize",
        }
    }
}

/// Active drag gesture: the grabbed zone and the pixel offset measured on it
/// at capture time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    pub zone: DragZone,
    pub captured_offset: f64,
}

/// What the host must do after forwarding a capture event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureOutcome {
    pub prevent_default: bool,
    pub cursor: DraggingCursor,
}

/// Single-pointer drag state.
///
/// At most one session is active. The pointer-capture collaborator guarantees
/// that capture precedes drag and that gestures do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    session: Option<DragSession>,
}

impl InteractionState {
    #[must_use]
    pub fn session(self) -> Option<DragSession> {
        self.session
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.session.is_some()
    }

    pub fn on_capture(&mut self, zone: DragZone, captured_offset: f64) -> CaptureOutcome {
        self.session = Some(DragSession {
            zone,
            captured_offset,
        });
        CaptureOutcome {
            prevent_default: true,
            cursor: zone.dragging_cursor(),
        }
    }

    pub fn on_release(&mut self) {
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{DragZone, DraggingCursor, InteractionState};

    #[test]
    fn zero_captured_offset_is_an_active_session() {
        let mut state = InteractionState::default();
        let outcome = state.on_capture(DragZone::LeftHandle, 0.0);

        assert!(outcome.prevent_default);
        assert_eq!(outcome.cursor, DraggingCursor::EwResize);
        assert!(state.is_dragging());

        state.on_release();
        assert!(!state.is_dragging());
    }

    #[test]
    fn body_uses_grabbing_cursor() {
        assert_eq!(DragZone::Body.dragging_cursor().css_name(), "grabbing");
        assert_eq!(DragZone::RightHandle.dragging_cursor().css_name(), "ew-resize");
    }
}
