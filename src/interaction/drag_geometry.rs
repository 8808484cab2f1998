use serde::{Deserialize, Serialize};

use crate::core::{PartialRange, Range};

use super::DragZone;

/// Slider window as shown on the track, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderBox {
    pub left: f64,
    pub width: f64,
}

impl SliderBox {
    #[must_use]
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    #[must_use]
    pub fn from_range(range: Range, canvas_width: f64) -> Self {
        let (left, right) = range.to_pixels(canvas_width);
        Self::new(left, (right - left).max(0.0))
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }
}

/// Maps a captured offset plus a live drag delta to a candidate range.
///
/// All math is O(1) and side-effect free, so it is safe to call on every
/// pointer move. Edges are clamped to the canvas; the handles keep at least
/// two ear widths between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGeometry {
    canvas_width: f64,
    ear_width: f64,
}

impl DragGeometry {
    #[must_use]
    pub fn new(canvas_width: f64, ear_width: f64) -> Self {
        Self {
            canvas_width,
            ear_width,
        }
    }

    #[must_use]
    pub fn canvas_width(self) -> f64 {
        self.canvas_width
    }

    #[must_use]
    pub fn ear_width(self) -> f64 {
        self.ear_width
    }

    /// Minimum `end - begin` the handles allow, in normalized units.
    #[must_use]
    pub fn min_handle_span(self) -> f64 {
        self.ear_width * 2.0 / self.canvas_width
    }

    /// Offset the capture collaborator measures on the grabbed element.
    ///
    /// The body starts one ear to the right of the slider, the right ear one
    /// ear to the left of its right edge.
    #[must_use]
    pub fn captured_offset(self, zone: DragZone, slider: SliderBox) -> f64 {
        match zone {
            DragZone::Body => slider.left + self.ear_width,
            DragZone::LeftHandle => slider.left,
            DragZone::RightHandle => slider.right() - self.ear_width,
        }
    }

    #[must_use]
    pub fn candidate(
        self,
        zone: DragZone,
        captured_offset: f64,
        delta_x: f64,
        slider: SliderBox,
    ) -> PartialRange {
        match zone {
            DragZone::Body => self.body(captured_offset, delta_x, slider),
            DragZone::LeftHandle => self.left_handle(captured_offset, delta_x, slider),
            DragZone::RightHandle => self.right_handle(captured_offset, delta_x, slider),
        }
    }

    /// Translates the window, preserving its pixel width.
    #[must_use]
    pub fn body(self, captured_offset: f64, delta_x: f64, slider: SliderBox) -> PartialRange {
        let min_x1 = 0.0;
        let max_x1 = self.canvas_width - slider.width;

        let new_x1 = (captured_offset + delta_x - self.ear_width)
            .min(max_x1)
            .max(min_x1);
        let new_x2 = new_x1 + slider.width;

        PartialRange::both(new_x1 / self.canvas_width, new_x2 / self.canvas_width)
    }

    #[must_use]
    pub fn left_handle(self, captured_offset: f64, delta_x: f64, slider: SliderBox) -> PartialRange {
        let min_x1 = 0.0;
        let max_x1 = slider.right() - self.ear_width * 2.0;

        let new_x1 = (captured_offset + delta_x).max(min_x1).min(max_x1);

        PartialRange::begin_only(new_x1 / self.canvas_width)
    }

    #[must_use]
    pub fn right_handle(
        self,
        captured_offset: f64,
        delta_x: f64,
        slider: SliderBox,
    ) -> PartialRange {
        let min_x2 = slider.left + self.ear_width * 2.0;
        let max_x2 = self.canvas_width;

        let new_x2 = (captured_offset + self.ear_width + delta_x)
            .min(max_x2)
            .max(min_x2);

        PartialRange::end_only(new_x2 / self.canvas_width)
    }
}

#[cfg(test)]
mod tests {
    use super::{DragGeometry, SliderBox};
    use crate::interaction::DragZone;

    #[test]
    fn captured_offset_matches_grabbed_element() {
        let geometry = DragGeometry::new(300.0, 10.0);
        let slider = SliderBox::new(40.0, 100.0);

        assert_eq!(geometry.captured_offset(DragZone::Body, slider), 50.0);
        assert_eq!(geometry.captured_offset(DragZone::LeftHandle, slider), 40.0);
        assert_eq!(geometry.captured_offset(DragZone::RightHandle, slider), 130.0);
    }

    #[test]
    fn body_wider_than_canvas_pins_to_left_edge() {
        let geometry = DragGeometry::new(100.0, 10.0);
        let candidate = geometry.body(50.0, 20.0, SliderBox::new(0.0, 120.0));
        assert_eq!(candidate.begin, Some(0.0));
        assert_eq!(candidate.end, Some(1.2));
    }

    #[test]
    fn right_handle_is_clamped_to_canvas() {
        let geometry = DragGeometry::new(300.0, 10.0);
        let candidate = geometry.right_handle(150.0, 500.0, SliderBox::new(60.0, 100.0));
        assert_eq!(candidate.begin, None);
        assert_eq!(candidate.end, Some(1.0));
    }
}
