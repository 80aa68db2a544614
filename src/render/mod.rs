mod frame;
mod null_renderer;

pub use frame::{AnnotationFrame, AxisFrame, RenderFrame, SeriesFrame, SeriesKind};
pub use null_renderer::NullRenderer;

use crate::error::ChartResult;

/// Contract implemented by the chart collaborator.
///
/// The engine hands over a fully materialized `RenderFrame` per pass; the
/// collaborator owns drawing, zoom and pan and never sees engine state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;

    /// Restores the collaborator's default zoom/pan.
    fn reset_zoom(&mut self) -> ChartResult<()> {
        Ok(())
    }
}
