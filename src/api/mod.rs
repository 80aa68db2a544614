//! Engine facade and the render synchronization stage.

mod debounce;
mod engine;
mod engine_config;
mod engine_snapshot;
mod json_contract;
mod recompute;
mod render_frame_builder;
mod status;

pub use debounce::{DEFAULT_DEBOUNCE_WINDOW, RecomputeScheduler};
pub use engine::FitChartEngine;
pub use engine_config::FitChartEngineConfig;
pub use engine_snapshot::EngineSnapshot;
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use recompute::RecomputePass;
pub use render_frame_builder::{DATA_SERIES_LABEL, FIT_SERIES_LABEL, build_render_frame};
pub use status::{StatusKind, StatusMessage};
