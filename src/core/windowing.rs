use crate::core::{DataPoint, XWindow};

/// Returns points whose x falls inside an inclusive window.
///
/// Reversed windows are normalized before filtering.
#[must_use]
pub fn points_in_x_window(points: &[DataPoint], window: XWindow) -> Vec<DataPoint> {
    let (min_x, max_x) = if window.from <= window.to {
        (window.from, window.to)
    } else {
        (window.to, window.from)
    };

    points
        .iter()
        .copied()
        .filter(|point| point.x >= min_x && point.x <= max_x)
        .collect()
}
