use cairo::{Context, Format, ImageSurface, Operator};

use crate::core::{CanvasSize, simplify_polyline};
use crate::error::{MinimapError, MinimapResult};
use crate::render::{Color, MinimapFrame, MinimapRenderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub series_drawn: usize,
    pub segments_drawn: usize,
}

/// Cairo image-surface backend for the minimap preview.
///
/// Each visible series is projected, simplified with the frame tolerance and
/// stroked as one polyline. Series without a configured color fall back to
/// `fallback_color`.
#[derive(Debug)]
pub struct CairoMinimapRenderer {
    surface: ImageSurface,
    fallback_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoMinimapRenderer {
    pub fn new(size: CanvasSize) -> MinimapResult<Self> {
        if !size.is_valid() {
            return Err(MinimapError::InvalidCanvasSize {
                width: size.width,
                height: size.height,
            });
        }
        let width = i32::try_from(size.width).map_err(|_| MinimapError::InvalidCanvasSize {
            width: size.width,
            height: size.height,
        })?;
        let height = i32::try_from(size.height).map_err(|_| MinimapError::InvalidCanvasSize {
            width: size.width,
            height: size.height,
        })?;

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            fallback_color: Color::rgb(0.5, 0.5, 0.5),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_fallback_color(&mut self, color: Color) -> MinimapResult<()> {
        color.validate()?;
        self.fallback_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn context(&self) -> MinimapResult<Context> {
        Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))
    }
}

impl MinimapRenderer for CairoMinimapRenderer {
    fn canvas_size(&self) -> CanvasSize {
        CanvasSize::new(
            u32::try_from(self.surface.width()).unwrap_or(0),
            u32::try_from(self.surface.height()).unwrap_or(0),
        )
    }

    fn clear(&mut self) -> MinimapResult<()> {
        let context = self.context()?;
        context.set_operator(Operator::Clear);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))
    }

    fn draw(&mut self, frame: &MinimapFrame) -> MinimapResult<()> {
        frame.validate()?;
        let context = self.context()?;
        context.set_line_width(frame.line_width);

        let mut stats = CairoRenderStats::default();
        for (index, dataset) in frame.datasets.iter().enumerate() {
            let opacity = frame.visibilities[index];
            if opacity <= 0.0 {
                continue;
            }
            let Some((points, projection)) = frame.series_layer(index) else {
                continue;
            };
            let projected: Vec<_> = points
                .iter()
                .map(|point| projection.to_pixel(*point))
                .collect();
            let simplified = simplify_polyline(&projected, frame.simplification);
            let Some((first, rest)) = simplified.split_first() else {
                continue;
            };

            let color = frame
                .colors
                .get(&dataset.key)
                .copied()
                .unwrap_or(self.fallback_color)
                .faded(opacity);
            apply_color(&context, color);
            context.move_to(first.x, first.y);
            for point in rest {
                context.line_to(point.x, point.y);
            }
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke series", err))?;

            stats.series_drawn += 1;
            stats.segments_drawn += rest.len();
        }

        self.last_stats = stats;
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> MinimapError {
    MinimapError::Render(format!("{prefix}: {err}"))
}
