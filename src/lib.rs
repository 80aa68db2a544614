//! fit-chart-rs: least-squares fit and scatter-plot view-state engine.
//!
//! The crate turns table rows into a validated point set, fits a line with
//! ordinary least squares, keeps axis state consistent with the scale types,
//! and reconciles everything into one frame for an external chart renderer.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{FitChartEngine, FitChartEngineConfig};
pub use error::{ChartError, ChartResult};
