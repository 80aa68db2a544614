use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, FitResult, MIN_FIT_POINTS};
use crate::error::{ChartError, ChartResult};

/// Padding controls for data-driven axis bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoscaleTuning {
    pub x_padding_ratio: f64,
    pub y_padding_ratio: f64,
    /// Span used in place of a zero data range before padding.
    pub zero_range_span: f64,
}

impl Default for AutoscaleTuning {
    fn default() -> Self {
        Self {
            x_padding_ratio: 0.05,
            y_padding_ratio: 0.10,
            zero_range_span: 1.0,
        }
    }
}

impl AutoscaleTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.x_padding_ratio.is_finite()
            || !self.y_padding_ratio.is_finite()
            || self.x_padding_ratio < 0.0
            || self.y_padding_ratio < 0.0
        {
            return Err(ChartError::InvalidData(
                "autoscale padding ratios must be finite and >= 0".to_owned(),
            ));
        }

        if !self.zero_range_span.is_finite() || self.zero_range_span <= 0.0 {
            return Err(ChartError::InvalidData(
                "autoscale zero-range span must be finite and > 0".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// Closed numeric range for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Expands both ends by `ratio` of the span, using `zero_range_span`
    /// when the span is zero.
    #[must_use]
    pub fn padded(self, ratio: f64, zero_range_span: f64) -> Self {
        let span = self.span();
        let span = if span == 0.0 { zero_range_span } else { span };
        let pad = span * ratio;
        Self::new(self.min - pad, self.max + pad)
    }

    #[must_use]
    fn including(self, value: f64) -> Self {
        Self::new(self.min.min(value), self.max.max(value))
    }
}

/// Min/max envelope of a point set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataExtent {
    pub x: AxisBounds,
    pub y: AxisBounds,
}

impl DataExtent {
    /// Returns `None` for an empty point set.
    #[must_use]
    pub fn from_points(points: &[DataPoint]) -> Option<Self> {
        let first = points.first()?;
        let mut x = AxisBounds::new(first.x, first.x);
        let mut y = AxisBounds::new(first.y, first.y);
        for point in &points[1..] {
            x = x.including(point.x);
            y = y.including(point.y);
        }
        Some(Self { x, y })
    }

    #[must_use]
    pub fn padded(self, tuning: AutoscaleTuning) -> Self {
        Self {
            x: self.x.padded(tuning.x_padding_ratio, tuning.zero_range_span),
            y: self.y.padded(tuning.y_padding_ratio, tuning.zero_range_span),
        }
    }
}

/// Padded bounds enclosing every point, or `None` when there are no points.
#[must_use]
pub fn autoscale_bounds(points: &[DataPoint], tuning: AutoscaleTuning) -> Option<DataExtent> {
    DataExtent::from_points(points).map(|extent| extent.padded(tuning))
}

/// Padded bounds enclosing every point, the y axis (`x = 0`) and the fitted
/// intercept `(0, intercept)`.
///
/// Returns `None` when fewer than `MIN_FIT_POINTS` points are available.
#[must_use]
pub fn intercept_view_bounds(
    points: &[DataPoint],
    fit: FitResult,
    tuning: AutoscaleTuning,
) -> Option<DataExtent> {
    if points.len() < MIN_FIT_POINTS {
        return None;
    }
    let extent = DataExtent::from_points(points)?;
    let extent = DataExtent {
        x: extent.x.including(0.0),
        y: extent.y.including(fit.intercept),
    };
    Some(extent.padded(tuning))
}
