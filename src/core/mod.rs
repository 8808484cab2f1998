pub mod display_state;
pub mod projection;
pub mod range;
pub mod series;
pub mod simplify;
pub mod snap;
pub mod types;
pub mod windowing;

pub use display_state::DisplayState;
pub use projection::{MinimapProjection, ProjectionParams, YBounds};
pub use range::{PartialRange, Range, RangeModel};
pub use series::{Dataset, secondary_dataset_index};
pub use simplify::{simplification_delta, simplify_polyline};
pub use snap::{DiscreteSnapper, RangeOrigin};
pub use types::{CanvasSize, DataPoint, XWindow};
pub use windowing::points_in_x_window;
