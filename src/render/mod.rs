mod frame;
mod null_renderer;
mod primitives;

pub use frame::{MinimapFrame, SecondaryLayer};
pub use null_renderer::NullMinimapRenderer;
pub use primitives::{Color, SeriesColors};

use crate::core::CanvasSize;
use crate::error::MinimapResult;

/// Contract implemented by any minimap drawing backend.
///
/// The backend owns the drawing surface. It receives a fully prepared
/// `MinimapFrame` (sampled points, projections, styling and tolerance) so
/// drawing code stays isolated from range and interaction logic.
pub trait MinimapRenderer {
    /// Pixel size of the drawing surface, read once at controller setup.
    fn canvas_size(&self) -> CanvasSize;

    /// Wipes the surface before a redraw.
    fn clear(&mut self) -> MinimapResult<()>;

    fn draw(&mut self, frame: &MinimapFrame) -> MinimapResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoMinimapRenderer, CairoRenderStats};
