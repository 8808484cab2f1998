use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::Range;
use crate::interaction::SliderBox;

use super::MinimapView;

/// Proportional widths of the three ruler regions, in percent of the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RulerLayout {
    pub left_mask_percent: f64,
    pub slider_percent: f64,
    pub right_mask_percent: f64,
}

impl RulerLayout {
    #[must_use]
    pub fn from_range(range: Range) -> Self {
        Self {
            left_mask_percent: range.begin() * 100.0,
            slider_percent: range.span() * 100.0,
            right_mask_percent: (1.0 - range.end()) * 100.0,
        }
    }

    #[must_use]
    pub fn total_percent(self) -> f64 {
        self.left_mask_percent + self.slider_percent + self.right_mask_percent
    }

    /// Slider window in pixels on a track of `track_width` pixels.
    #[must_use]
    pub fn slider_box(self, track_width: f64) -> SliderBox {
        SliderBox::new(
            self.left_mask_percent / 100.0 * track_width,
            self.slider_percent / 100.0 * track_width,
        )
    }
}

/// Trailing-edge throttle bound to the animation-frame cadence.
///
/// Scheduling keeps only the latest value; `take` hands it out once at the
/// frame boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameThrottle<T> {
    pending: Option<T>,
}

impl<T> Default for FrameThrottle<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> FrameThrottle<T> {
    /// Stores `value`, superseding any value scheduled for the same frame.
    ///
    /// Returns `true` when this call opened a new frame request.
    pub fn schedule(&mut self, value: T) -> bool {
        self.pending.replace(value).is_none()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }
}

/// Reflects the selected range onto the ruler at most once per frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RulerSync {
    throttle: FrameThrottle<Range>,
    applied: Option<RulerLayout>,
}

impl RulerSync {
    pub fn schedule(&mut self, range: Range) {
        if !self.throttle.schedule(range) {
            trace!("ruler update superseded within frame");
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.throttle.is_pending()
    }

    /// Layout currently shown on the ruler, if any frame has flushed yet.
    #[must_use]
    pub fn applied(&self) -> Option<RulerLayout> {
        self.applied
    }

    /// Applies the latest scheduled range. Returns `true` when a write happened.
    pub fn flush<V: MinimapView>(&mut self, view: &mut V) -> bool {
        let Some(range) = self.throttle.take() else {
            return false;
        };
        let layout = RulerLayout::from_range(range);
        view.apply_ruler(layout);
        self.applied = Some(layout);
        true
    }
}
