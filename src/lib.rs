//! chart-minimap: range-selector minimap for time-series charts.
//!
//! The crate turns pointer drags on the minimap slider into a normalized
//! visible range, keeps the ruler in sync on the animation-frame cadence and
//! redraws a simplified full-series preview when the host chart state changes.
//! Canvas, DOM and sampling concerns stay behind small collaborator traits.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{MinimapConfig, MinimapController};
pub use error::{MinimapError, MinimapResult};
