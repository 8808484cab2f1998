use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use tracing::debug;

use crate::core::{DataPoint, Dataset, ProjectionParams, XWindow, points_in_x_window};

/// Point-sampling collaborator.
///
/// Returns one point sequence per requested dataset, in request order. Points
/// stay in data space; the preview projects them at draw time.
pub trait PointSampler {
    fn sample(
        &self,
        datasets: &[Dataset],
        window: XWindow,
        visibilities: &[f64],
        params: &ProjectionParams,
    ) -> Vec<Vec<DataPoint>>;
}

/// Reference sampler over raw `(x, y)` series kept in memory.
///
/// Hidden series (opacity `0`) and unknown keys yield empty sequences. When a
/// window holds more than two points per available pixel column, each column
/// is reduced to its min and max sample.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WindowedSampler {
    series: IndexMap<String, Vec<DataPoint>>,
}

impl WindowedSampler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `points` for `key`, dropping non-finite samples and sorting by x.
    pub fn insert_series(&mut self, key: impl Into<String>, points: Vec<DataPoint>) {
        let original_count = points.len();
        let mut points: Vec<DataPoint> = points
            .into_iter()
            .filter(|point| point.x.is_finite() && point.y.is_finite())
            .collect();
        points.sort_by_key(|point| OrderedFloat(point.x));
        let key = key.into();
        debug!(
            key = key.as_str(),
            original_count,
            canonical_count = points.len(),
            "set minimap series"
        );
        self.series.insert(key, points);
    }

    #[must_use]
    pub fn with_series(mut self, key: impl Into<String>, points: Vec<DataPoint>) -> Self {
        self.insert_series(key, points);
        self
    }

    #[must_use]
    pub fn series(&self, key: &str) -> Option<&[DataPoint]> {
        self.series.get(key).map(Vec::as_slice)
    }
}

impl PointSampler for WindowedSampler {
    fn sample(
        &self,
        datasets: &[Dataset],
        window: XWindow,
        visibilities: &[f64],
        params: &ProjectionParams,
    ) -> Vec<Vec<DataPoint>> {
        let columns = params.available_width.floor().max(1.0) as usize;

        datasets
            .iter()
            .enumerate()
            .map(|(index, dataset)| {
                let visible = visibilities.get(index).copied().unwrap_or(0.0) > 0.0;
                if !visible {
                    return Vec::new();
                }
                let Some(points) = self.series.get(&dataset.key) else {
                    return Vec::new();
                };
                let windowed = points_in_x_window(points, window);
                if windowed.len() > columns * 2 {
                    downsample_min_max(&windowed, window, columns)
                } else {
                    windowed
                }
            })
            .collect()
    }
}

/// Keeps the min and max sample of each pixel column, ordered by x.
fn downsample_min_max(points: &[DataPoint], window: XWindow, columns: usize) -> Vec<DataPoint> {
    let span = (window.to - window.from).abs();
    if span <= 0.0 || points.is_empty() {
        return points.to_vec();
    }
    let from = window.from.min(window.to);

    let mut out = Vec::with_capacity(columns * 2);
    let mut bucket: Option<(usize, DataPoint, DataPoint)> = None;

    for &point in points {
        let column = (((point.x - from) / span) * columns as f64)
            .floor()
            .clamp(0.0, (columns - 1) as f64) as usize;
        bucket = match bucket {
            Some((current, min, max)) if current == column => {
                let min = if point.y < min.y { point } else { min };
                let max = if point.y > max.y { point } else { max };
                Some((current, min, max))
            }
            previous => {
                if let Some((_, min, max)) = previous {
                    push_bucket(&mut out, min, max);
                }
                Some((column, point, point))
            }
        };
    }
    if let Some((_, min, max)) = bucket {
        push_bucket(&mut out, min, max);
    }
    out
}

fn push_bucket(out: &mut Vec<DataPoint>, min: DataPoint, max: DataPoint) {
    if min == max {
        out.push(min);
    } else if min.x <= max.x {
        out.push(min);
        out.push(max);
    } else {
        out.push(max);
        out.push(min);
    }
}
