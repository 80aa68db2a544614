use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{AnnotationTuning, AutoscaleTuning, Axis, DEFAULT_TITLE, ScaleType, VariableMeta};
use crate::error::{ChartError, ChartResult};

use super::debounce::DEFAULT_DEBOUNCE_WINDOW;

/// Longest accepted debounce window.
const MAX_DEBOUNCE_WINDOW_MS: u64 = 5_000;

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can ship presets (axis names, log axes, tuning)
/// without inventing their own format. It is read once at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitChartEngineConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_x_meta")]
    pub x_meta: VariableMeta,
    #[serde(default = "default_y_meta")]
    pub y_meta: VariableMeta,
    #[serde(default)]
    pub x_scale_type: ScaleType,
    #[serde(default)]
    pub y_scale_type: ScaleType,
    #[serde(default)]
    pub autoscale_tuning: AutoscaleTuning,
    #[serde(default)]
    pub annotation_tuning: AnnotationTuning,
    #[serde(default = "default_debounce_window_ms")]
    pub debounce_window_ms: u64,
    /// Empty rows the table starts with and is reset to by `clear`.
    #[serde(default = "default_blank_row_count")]
    pub blank_row_count: usize,
}

impl Default for FitChartEngineConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            x_meta: default_x_meta(),
            y_meta: default_y_meta(),
            x_scale_type: ScaleType::Linear,
            y_scale_type: ScaleType::Linear,
            autoscale_tuning: AutoscaleTuning::default(),
            annotation_tuning: AnnotationTuning::default(),
            debounce_window_ms: default_debounce_window_ms(),
            blank_row_count: default_blank_row_count(),
        }
    }
}

impl FitChartEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_variable_meta(mut self, axis: Axis, meta: VariableMeta) -> Self {
        match axis {
            Axis::X => self.x_meta = meta,
            Axis::Y => self.y_meta = meta,
        }
        self
    }

    #[must_use]
    pub fn with_scale_types(mut self, x_scale_type: ScaleType, y_scale_type: ScaleType) -> Self {
        self.x_scale_type = x_scale_type;
        self.y_scale_type = y_scale_type;
        self
    }

    #[must_use]
    pub fn with_autoscale_tuning(mut self, tuning: AutoscaleTuning) -> Self {
        self.autoscale_tuning = tuning;
        self
    }

    #[must_use]
    pub fn with_annotation_tuning(mut self, tuning: AnnotationTuning) -> Self {
        self.annotation_tuning = tuning;
        self
    }

    #[must_use]
    pub fn with_debounce_window(mut self, window: Duration) -> Self {
        self.debounce_window_ms = u64::try_from(window.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn with_blank_row_count(mut self, count: usize) -> Self {
        self.blank_row_count = count;
        self
    }

    #[must_use]
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_window_ms)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.autoscale_tuning.validate()?;
        self.annotation_tuning.validate()?;
        if self.debounce_window_ms > MAX_DEBOUNCE_WINDOW_MS {
            return Err(ChartError::InvalidData(format!(
                "debounce window must be <= {MAX_DEBOUNCE_WINDOW_MS} ms"
            )));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize engine config: {e}"))
        })
    }

    /// Parses a config from JSON, applying defaults for missing fields.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse engine config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_owned()
}

fn default_x_meta() -> VariableMeta {
    VariableMeta::default_for(Axis::X)
}

fn default_y_meta() -> VariableMeta {
    VariableMeta::default_for(Axis::Y)
}

fn default_debounce_window_ms() -> u64 {
    u64::try_from(DEFAULT_DEBOUNCE_WINDOW.as_millis()).unwrap_or(150)
}

fn default_blank_row_count() -> usize {
    3
}
