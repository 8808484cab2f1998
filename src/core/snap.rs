use serde::{Deserialize, Serialize};

use crate::core::Range;

/// Where a range update came from.
///
/// Interaction-driven updates are snapped and reported to the host; external
/// pushes are assumed valid and are applied silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeOrigin {
    Interaction,
    External,
}

impl RangeOrigin {
    #[must_use]
    pub fn is_external(self) -> bool {
        matches!(self, Self::External)
    }
}

/// Quantizes candidate ranges onto a discrete step grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiscreteSnapper;

impl DiscreteSnapper {
    /// Applies snapping when a usable step is present and the update came from
    /// interaction. Otherwise returns `candidate` untouched.
    #[must_use]
    pub fn snap(candidate: Range, step: Option<f64>, origin: RangeOrigin) -> Range {
        match step {
            Some(step) if !origin.is_external() && is_usable_step(step) => {
                Self::snap_to_step(candidate, step)
            }
            _ => candidate,
        }
    }

    /// Rounds each bound independently to the nearest multiple of `step`.
    ///
    /// Both bounds are rounded on their own, so a body drag can change the
    /// window width by one step when the bounds sit on opposite sides of a
    /// rounding boundary.
    #[must_use]
    pub fn snap_to_step(candidate: Range, step: f64) -> Range {
        if !is_usable_step(step) {
            return candidate;
        }
        let begin = snap_value(candidate.begin(), step);
        let end = snap_value(candidate.end(), step);
        Range::clamped(begin, end)
    }
}

#[must_use]
pub fn snap_value(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

fn is_usable_step(step: f64) -> bool {
    step.is_finite() && step > 0.0
}

#[cfg(test)]
mod tests {
    use super::{DiscreteSnapper, RangeOrigin};
    use crate::core::Range;

    #[test]
    fn external_updates_bypass_snapping() {
        let candidate = Range::new(0.23, 0.77).expect("valid range");
        let snapped = DiscreteSnapper::snap(candidate, Some(0.1), RangeOrigin::External);
        assert_eq!(snapped, candidate);
    }

    #[test]
    fn unusable_step_is_ignored() {
        let candidate = Range::new(0.23, 0.77).expect("valid range");
        for step in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let snapped = DiscreteSnapper::snap(candidate, Some(step), RangeOrigin::Interaction);
            assert_eq!(snapped, candidate);
        }
    }

    #[test]
    fn rounding_past_one_is_clamped() {
        let candidate = Range::new(0.5, 1.0).expect("valid range");
        let snapped = DiscreteSnapper::snap_to_step(candidate, 0.4);
        assert_eq!(snapped.end(), 1.0);
        assert!((snapped.begin() - 0.4).abs() <= 1e-12);
    }
}
