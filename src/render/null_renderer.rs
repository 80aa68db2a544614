use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer used by tests and tooling.
///
/// It validates every frame and keeps the last one so callers can inspect
/// what a real chart would have been asked to draw.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_frame: Option<RenderFrame>,
    pub render_count: usize,
    pub reset_zoom_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_frame = Some(frame.clone());
        self.render_count += 1;
        Ok(())
    }

    fn reset_zoom(&mut self) -> ChartResult<()> {
        self.reset_zoom_count += 1;
        Ok(())
    }
}
