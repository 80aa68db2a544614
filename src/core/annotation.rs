use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::core::{
    Axis, AxisBounds, AxisState, DataExtent, DataPoint, FitResult, MIN_FIT_POINTS, VariableMeta,
    ViewState,
};
use crate::error::{ChartError, ChartResult};

/// Stable key of the equation label inside the chart's annotation map.
pub const ANNOTATION_ID: &str = "regression-label";

/// Decimal places used for slope and intercept in the equation text.
pub const EQUATION_DECIMALS: u32 = 4;

/// Placement of the equation label inside the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnotationTuning {
    /// Offset from the left edge of the x domain, as a fraction of its span.
    pub x_inset_ratio: f64,
    /// Offset below the data's maximum y, as a fraction of the data y span.
    pub y_inset_ratio: f64,
}

impl Default for AnnotationTuning {
    fn default() -> Self {
        Self {
            x_inset_ratio: 0.05,
            y_inset_ratio: 0.05,
        }
    }
}

impl AnnotationTuning {
    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("x_inset_ratio", self.x_inset_ratio),
            ("y_inset_ratio", self.y_inset_ratio),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "annotation `{name}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(self)
    }
}

/// Equation label anchored in data coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub text: String,
}

/// Formats `value` with exactly `decimals` fractional digits.
///
/// Ties on the exact binary value round away from zero. Magnitudes outside
/// the decimal range fall back to the float formatter.
#[must_use]
pub fn format_fixed(value: f64, decimals: u32) -> String {
    let precision = decimals as usize;
    match Decimal::from_f64_retain(value) {
        Some(decimal) => {
            let rounded =
                decimal.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.precision$}")
        }
        None => format!("{value:.precision$}"),
    }
}

fn unit_suffix(units: &str) -> String {
    if units.is_empty() {
        String::new()
    } else {
        format!(" [{units}]")
    }
}

fn symbol_or_default<'a>(meta: &'a VariableMeta, axis: Axis) -> &'a str {
    if meta.symbol.is_empty() {
        axis.id()
    } else {
        &meta.symbol
    }
}

/// Renders `y [yu] = <slope>x [xu] + <intercept> [yu]`.
///
/// Unit brackets are left out for unitless variables.
#[must_use]
pub fn equation_text(fit: FitResult, x_meta: &VariableMeta, y_meta: &VariableMeta) -> String {
    let x_symbol = symbol_or_default(x_meta, Axis::X);
    let y_symbol = symbol_or_default(y_meta, Axis::Y);
    let x_units = unit_suffix(&x_meta.units);
    let y_units = unit_suffix(&y_meta.units);
    let slope = format_fixed(fit.slope, EQUATION_DECIMALS);
    let intercept = format_fixed(fit.intercept, EQUATION_DECIMALS);

    format!("{y_symbol}{y_units} = {slope}{x_symbol}{x_units} + {intercept}{y_units}")
}

/// X range the fit line and label are laid out on: each explicit axis bound
/// wins over the corresponding data extreme.
#[must_use]
pub fn resolve_x_domain(x_axis: AxisState, extent: DataExtent) -> AxisBounds {
    AxisBounds::new(
        x_axis.min().unwrap_or(extent.x.min),
        x_axis.max().unwrap_or(extent.x.max),
    )
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from * (1.0 - t) + to * t
}

/// Builds the equation label for `points`, or `None` when there are too few
/// points for a fit.
#[must_use]
pub fn build_annotation(
    fit: FitResult,
    points: &[DataPoint],
    view: &ViewState,
    tuning: AnnotationTuning,
) -> Option<Annotation> {
    if points.len() < MIN_FIT_POINTS {
        return None;
    }
    let extent = DataExtent::from_points(points)?;
    let x_domain = resolve_x_domain(view.axis(Axis::X), extent);

    // Interpolated: a span past f64::MAX must still give a finite anchor.
    Some(Annotation {
        anchor_x: lerp(x_domain.min, x_domain.max, tuning.x_inset_ratio),
        anchor_y: lerp(extent.y.max, extent.y.min, tuning.y_inset_ratio),
        text: equation_text(fit, view.meta(Axis::X), view.meta(Axis::Y)),
    })
}
