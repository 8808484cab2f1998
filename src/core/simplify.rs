use crate::core::DataPoint;

/// Point count below which no simplification is applied.
pub const SIMPLIFIER_MIN_POINTS: usize = 1000;

/// Upper bound of the default tolerance, in pixels.
pub const SIMPLIFIER_MAX_DELTA: f64 = 4.0;

/// Default simplification tolerance for a total point count.
///
/// Returns `0` below `SIMPLIFIER_MIN_POINTS`, then one pixel per thousand
/// points up to `SIMPLIFIER_MAX_DELTA`.
#[must_use]
pub fn simplification_delta(total_points: usize) -> f64 {
    if total_points < SIMPLIFIER_MIN_POINTS {
        return 0.0;
    }
    (total_points as f64 / SIMPLIFIER_MIN_POINTS as f64).min(SIMPLIFIER_MAX_DELTA)
}

/// Drops consecutive points closer than `tolerance` to the last kept point.
///
/// First and last points are always kept. A non-positive or non-finite
/// tolerance returns the input unchanged.
#[must_use]
pub fn simplify_polyline(points: &[DataPoint], tolerance: f64) -> Vec<DataPoint> {
    if points.len() <= 2 || !tolerance.is_finite() || tolerance <= 0.0 {
        return points.to_vec();
    }

    let tolerance_sq = tolerance * tolerance;
    let mut kept = Vec::with_capacity(points.len());
    let mut last = points[0];
    kept.push(last);

    for &point in &points[1..points.len() - 1] {
        let dx = point.x - last.x;
        let dy = point.y - last.y;
        if dx * dx + dy * dy >= tolerance_sq {
            kept.push(point);
            last = point;
        }
    }

    kept.push(points[points.len() - 1]);
    kept
}
