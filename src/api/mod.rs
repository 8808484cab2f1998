mod config;
mod controller;
mod json_contract;
mod preview;
mod ruler;
mod sampler;
mod view;

pub use config::MinimapConfig;
pub use controller::{MinimapController, RangeCallback};
pub use json_contract::{
    MINIMAP_SNAPSHOT_JSON_SCHEMA_V1, MinimapSnapshot, MinimapSnapshotJsonContractV1,
};
pub use preview::{PreviewRenderer, SimplificationFormula};
pub use ruler::{FrameThrottle, RulerLayout, RulerSync};
pub use sampler::{PointSampler, WindowedSampler};
pub use view::{HeadlessView, MinimapView};
