use crate::core::{CanvasSize, simplify_polyline};
use crate::error::MinimapResult;
use crate::render::{MinimapFrame, MinimapRenderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates each frame and runs projection plus simplification, so
/// tests can observe what a real backend would stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct NullMinimapRenderer {
    pub canvas_size: CanvasSize,
    pub clear_count: usize,
    pub draw_count: usize,
    /// Stroked point count per dataset on the last draw; hidden series are `0`.
    pub last_stroked_points: Vec<usize>,
    pub last_frame: Option<MinimapFrame>,
}

impl NullMinimapRenderer {
    #[must_use]
    pub fn new(canvas_size: CanvasSize) -> Self {
        Self {
            canvas_size,
            clear_count: 0,
            draw_count: 0,
            last_stroked_points: Vec::new(),
            last_frame: None,
        }
    }
}

impl MinimapRenderer for NullMinimapRenderer {
    fn canvas_size(&self) -> CanvasSize {
        self.canvas_size
    }

    fn clear(&mut self) -> MinimapResult<()> {
        self.clear_count += 1;
        Ok(())
    }

    fn draw(&mut self, frame: &MinimapFrame) -> MinimapResult<()> {
        frame.validate()?;

        self.last_stroked_points = (0..frame.datasets.len())
            .map(|index| {
                if frame.visibilities[index] <= 0.0 {
                    return 0;
                }
                frame
                    .series_layer(index)
                    .map(|(points, projection)| {
                        let projected: Vec<_> =
                            points.iter().map(|point| projection.to_pixel(*point)).collect();
                        simplify_polyline(&projected, frame.simplification).len()
                    })
                    .unwrap_or(0)
            })
            .collect();
        self.draw_count += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
