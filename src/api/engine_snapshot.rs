use serde::{Deserialize, Serialize};

use crate::core::{Annotation, DataPoint, FitResult, RawRow, ViewState};
use crate::render::Renderer;

use super::{FitChartEngine, StatusMessage};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling. Not a persistence format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub view: ViewState,
    pub rows: Vec<RawRow>,
    pub points: Vec<DataPoint>,
    pub dropped: usize,
    pub fit: Option<FitResult>,
    pub annotation: Option<Annotation>,
    pub status: StatusMessage,
    pub pending_recompute: bool,
}

impl<R: Renderer> FitChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let pass = self.last_pass();
        EngineSnapshot {
            view: self.current_view_state(),
            rows: self.rows().to_vec(),
            points: pass.points.clone(),
            dropped: pass.dropped,
            fit: pass.fit,
            annotation: pass.annotation.clone(),
            status: pass.status.clone(),
            pending_recompute: self.has_pending_recompute(),
        }
    }
}
