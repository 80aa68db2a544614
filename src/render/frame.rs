use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Axis, DataPoint, ScaleType};
use crate::error::{ChartError, ChartResult};

/// How the chart collaborator should draw a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    /// Unconnected markers.
    Scatter,
    /// Connected line without markers.
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesFrame {
    pub label: String,
    pub kind: SeriesKind,
    pub points: Vec<DataPoint>,
}

impl SeriesFrame {
    #[must_use]
    pub fn new(label: impl Into<String>, kind: SeriesKind, points: Vec<DataPoint>) -> Self {
        Self {
            label: label.into(),
            kind,
            points,
        }
    }
}

/// Scale configuration for one chart axis. Unset bounds let the chart fit
/// its own range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisFrame {
    pub scale_type: ScaleType,
    pub label: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Text label positioned in data coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationFrame {
    pub x_value: f64,
    pub y_value: f64,
    pub content: String,
}

/// Full chart configuration for one synchronization.
///
/// Each frame replaces the previous one wholesale; annotations are keyed by a
/// stable id so a host that merges maps still ends up with one label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub title: String,
    pub data: SeriesFrame,
    pub fit: SeriesFrame,
    pub x_axis: AxisFrame,
    pub y_axis: AxisFrame,
    pub annotations: IndexMap<String, AnnotationFrame>,
}

impl RenderFrame {
    pub fn validate(&self) -> ChartResult<()> {
        for series in [&self.data, &self.fit] {
            if series
                .points
                .iter()
                .any(|point| !point.x.is_finite() || !point.y.is_finite())
            {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` contains non-finite coordinates",
                    series.label
                )));
            }
        }

        if !matches!(self.fit.points.len(), 0 | 2) {
            return Err(ChartError::InvalidData(format!(
                "fit series must have 0 or 2 points, got {}",
                self.fit.points.len()
            )));
        }

        for axis_id in Axis::ALL {
            let axis = self.axis(axis_id);
            let name = axis_id.id();
            for bound in [axis.min, axis.max].into_iter().flatten() {
                if !bound.is_finite() {
                    return Err(ChartError::InvalidData(format!(
                        "{name}-axis bounds must be finite"
                    )));
                }
                if axis.scale_type == ScaleType::Logarithmic && bound <= 0.0 {
                    return Err(ChartError::InvalidData(format!(
                        "{name}-axis bounds must be > 0 on a logarithmic scale"
                    )));
                }
            }
        }

        for (id, annotation) in &self.annotations {
            if !annotation.x_value.is_finite() || !annotation.y_value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "annotation `{id}` anchor must be finite"
                )));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn axis(&self, axis: Axis) -> &AxisFrame {
        match axis {
            Axis::X => &self.x_axis,
            Axis::Y => &self.y_axis,
        }
    }

    #[must_use]
    pub fn has_fit(&self) -> bool {
        !self.fit.points.is_empty()
    }
}
