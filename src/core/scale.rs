use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::error::ChartError;

/// Axis mapping mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    /// Uniform spacing in raw units.
    #[default]
    Linear,
    /// Uniform spacing in log units; only strictly positive values are plottable.
    Logarithmic,
}

impl ScaleType {
    /// Name understood by the chart collaborator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Logarithmic => "logarithmic",
        }
    }

    #[must_use]
    pub fn accepts(self, value: f64) -> bool {
        is_valid_for_scale(value, self)
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaleType {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "logarithmic" | "log" => Ok(Self::Logarithmic),
            _ => Err(ChartError::UnknownScaleType(s.to_owned())),
        }
    }
}

/// Returns whether `value` can be placed on an axis of `scale_type`.
#[must_use]
pub fn is_valid_for_scale(value: f64, scale_type: ScaleType) -> bool {
    match scale_type {
        ScaleType::Linear => true,
        ScaleType::Logarithmic => value > 0.0,
    }
}

/// Sanitizes a user-supplied axis bound.
///
/// Non-finite values become unset. On a logarithmic axis, values `<= 0`
/// also become unset.
#[must_use]
pub fn sanitize_bound(value: f64, scale_type: ScaleType) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    match scale_type {
        ScaleType::Linear => Some(value),
        ScaleType::Logarithmic => (value > 0.0).then_some(value),
    }
}

#[must_use]
pub fn sanitize_optional_bound(value: Option<f64>, scale_type: ScaleType) -> Option<f64> {
    value.and_then(|value| sanitize_bound(value, scale_type))
}

/// Points that survived scale filtering plus how many were removed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilteredPoints {
    pub points: Vec<DataPoint>,
    pub dropped: usize,
}

impl FilteredPoints {
    #[must_use]
    pub fn raw_count(&self) -> usize {
        self.points.len() + self.dropped
    }
}

/// Keeps the points whose x and y are both valid for their axis scale type.
///
/// Input order is preserved. `dropped` always equals the input length minus
/// the retained length.
#[must_use]
pub fn filter_points_for_scales(
    points: &[DataPoint],
    x_scale: ScaleType,
    y_scale: ScaleType,
) -> FilteredPoints {
    let kept: Vec<DataPoint> = points
        .iter()
        .copied()
        .filter(|point| x_scale.accepts(point.x) && y_scale.accepts(point.y))
        .collect();
    let dropped = points.len() - kept.len();

    FilteredPoints {
        points: kept,
        dropped,
    }
}
