use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{MinimapError, MinimapResult};

/// Normalized visible range, `0 <= begin <= end <= 1`.
///
/// The invariant is enforced by construction: `Range::new` rejects invalid
/// input and merged partial updates are clamped into the unit interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct Range {
    begin: f64,
    end: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawRange {
    begin: f64,
    end: f64,
}

impl TryFrom<RawRange> for Range {
    type Error = MinimapError;

    fn try_from(raw: RawRange) -> MinimapResult<Self> {
        Self::new(raw.begin, raw.end)
    }
}

impl From<Range> for RawRange {
    fn from(range: Range) -> Self {
        Self {
            begin: range.begin,
            end: range.end,
        }
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::FULL
    }
}

impl Range {
    /// Whole series visible.
    pub const FULL: Self = Self {
        begin: 0.0,
        end: 1.0,
    };

    pub fn new(begin: f64, end: f64) -> MinimapResult<Self> {
        if !begin.is_finite() || !end.is_finite() {
            return Err(MinimapError::InvalidData(
                "range bounds must be finite".to_owned(),
            ));
        }
        if !(0.0..=1.0).contains(&begin) || !(0.0..=1.0).contains(&end) {
            return Err(MinimapError::InvalidData(
                "range bounds must be in [0, 1]".to_owned(),
            ));
        }
        if begin > end {
            return Err(MinimapError::InvalidData(
                "range begin must be <= end".to_owned(),
            ));
        }

        Ok(Self { begin, end })
    }

    /// Builds a range from already finite bounds, clamping both into `[0, 1]`
    /// and collapsing a reversed pair onto `begin`.
    #[must_use]
    pub(crate) fn clamped(begin: f64, end: f64) -> Self {
        let begin = begin.clamp(0.0, 1.0);
        let end = end.clamp(0.0, 1.0);
        if begin > end {
            return Self { begin, end: begin };
        }
        Self { begin, end }
    }

    #[must_use]
    pub fn begin(self) -> f64 {
        self.begin
    }

    #[must_use]
    pub fn end(self) -> f64 {
        self.end
    }

    #[must_use]
    pub fn span(self) -> f64 {
        (self.end - self.begin).max(0.0)
    }

    /// Left/right edge pixels on a track of `track_width` pixels.
    #[must_use]
    pub fn to_pixels(self, track_width: f64) -> (f64, f64) {
        (self.begin * track_width, self.end * track_width)
    }
}

/// Partial range update: one or both bounds.
///
/// Handle drags produce a single bound; body drags and host pushes carry both.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PartialRange {
    #[serde(default)]
    pub begin: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
}

impl PartialRange {
    #[must_use]
    pub fn both(begin: f64, end: f64) -> Self {
        Self {
            begin: Some(begin),
            end: Some(end),
        }
    }

    #[must_use]
    pub fn begin_only(begin: f64) -> Self {
        Self {
            begin: Some(begin),
            end: None,
        }
    }

    #[must_use]
    pub fn end_only(end: f64) -> Self {
        Self {
            begin: None,
            end: Some(end),
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.begin.is_none() && self.end.is_none()
    }
}

impl From<Range> for PartialRange {
    fn from(range: Range) -> Self {
        Self::both(range.begin, range.end)
    }
}

/// Holds the current selection and decides whether a candidate changes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeModel {
    current: Range,
}

impl Default for RangeModel {
    fn default() -> Self {
        Self::new(Range::FULL)
    }
}

impl RangeModel {
    #[must_use]
    pub fn new(initial: Range) -> Self {
        Self { current: initial }
    }

    #[must_use]
    pub fn current(&self) -> Range {
        self.current
    }

    /// Overlays `partial` onto the current range.
    ///
    /// Non-finite fields are ignored. Supplied bounds are clamped into
    /// `[0, 1]`; when a single supplied bound would cross the kept one it is
    /// pinned to it, and a reversed pair of supplied bounds is swapped.
    #[must_use]
    pub fn merge(&self, partial: PartialRange) -> Range {
        let begin = partial.begin.filter(|value| value.is_finite());
        let end = partial.end.filter(|value| value.is_finite());

        match (begin, end) {
            (None, None) => self.current,
            (Some(begin), None) => {
                let end = self.current.end;
                Range::clamped(begin.min(end), end)
            }
            (None, Some(end)) => {
                let begin = self.current.begin;
                Range::clamped(begin, end.max(begin))
            }
            (Some(begin), Some(end)) => {
                if begin <= end {
                    Range::clamped(begin, end)
                } else {
                    Range::clamped(end, begin)
                }
            }
        }
    }

    /// Exact comparison on both bounds.
    #[must_use]
    pub fn has_changed(&self, candidate: Range) -> bool {
        candidate.begin != self.current.begin || candidate.end != self.current.end
    }

    /// Stores `candidate` when it differs from the current range.
    ///
    /// Returns `true` when the range was replaced.
    pub fn accept(&mut self, candidate: Range) -> bool {
        if !self.has_changed(candidate) {
            return false;
        }
        trace!(
            begin = candidate.begin,
            end = candidate.end,
            "accept minimap range"
        );
        self.current = candidate;
        true
    }
}
