use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

/// Minimum number of samples for a fit to be meaningful.
pub const MIN_FIT_POINTS: usize = 2;

/// Slope/intercept pair of `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct FitResult {
    pub slope: f64,
    pub intercept: f64,
}

impl FitResult {
    #[must_use]
    pub const fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    #[must_use]
    pub fn evaluate(self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Power-of-two scale and origin used to keep one coordinate's moments in
/// range.
///
/// Values are stored as `value / scale - origin`, where `scale` is the largest
/// power of two not above the biggest magnitude seen and `origin` is the first
/// value in scaled units. Offsets therefore stay below 4 in magnitude, and
/// rescaling by a power of two is exact.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct ScaledAxis {
    /// `0.0` until a non-zero value arrives.
    scale: f64,
    origin: f64,
}

impl ScaledAxis {
    /// Widens the scale for `value` and returns the factor already stored
    /// offsets must be multiplied by.
    fn admit(&mut self, value: f64) -> f64 {
        let magnitude = value.abs();
        if magnitude == 0.0 || magnitude < 2.0 * self.scale {
            return 1.0;
        }
        let scale = power_of_two_floor(magnitude);
        let factor = if self.scale == 0.0 {
            0.0
        } else {
            self.scale / scale
        };
        self.scale = scale;
        self.origin *= factor;
        factor
    }

    fn scaled(self, value: f64) -> f64 {
        if self.scale == 0.0 {
            0.0
        } else {
            value / self.scale
        }
    }

    fn offset(self, value: f64) -> f64 {
        self.scaled(value) - self.origin
    }

    fn unscale(self, offset: f64) -> f64 {
        (self.origin + offset) * self.scale
    }
}

/// Largest power of two `<= value` for finite positive `value`.
fn power_of_two_floor(value: f64) -> f64 {
    let biased_exponent = (value.to_bits() >> 52) & 0x7ff;
    if biased_exponent == 0 {
        f64::MIN_POSITIVE
    } else {
        f64::from_bits(biased_exponent << 52)
    }
}

/// Running normal-equation moments for ordinary least squares.
///
/// Sums are taken over scaled offsets from the first sample (see
/// `ScaledAxis`), so a shared large offset in x does not cancel away the
/// spread and finite inputs of any magnitude never overflow the squares.
/// Min/max of x are tracked alongside the sums so an all-identical x column
/// is recognized exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFitAccumulator {
    n: usize,
    x: ScaledAxis,
    y: ScaledAxis,
    sum_x: f64,
    sum_y: f64,
    sum_xy: f64,
    sum_xx: f64,
    min_x: f64,
    max_x: f64,
}

impl Default for LinearFitAccumulator {
    fn default() -> Self {
        Self {
            n: 0,
            x: ScaledAxis::default(),
            y: ScaledAxis::default(),
            sum_x: 0.0,
            sum_y: 0.0,
            sum_xy: 0.0,
            sum_xx: 0.0,
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
        }
    }
}

impl LinearFitAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, x: f64, y: f64) {
        let fx = self.x.admit(x);
        let fy = self.y.admit(y);
        self.sum_x *= fx;
        self.sum_y *= fy;
        self.sum_xx *= fx * fx;
        self.sum_xy *= fx * fy;

        if self.n == 0 {
            self.x.origin = self.x.scaled(x);
            self.y.origin = self.y.scaled(y);
        }

        let dx = self.x.offset(x);
        let dy = self.y.offset(y);
        self.n += 1;
        self.sum_x += dx;
        self.sum_y += dy;
        self.sum_xy += dx * dy;
        self.sum_xx += dx * dx;
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Returns whether `estimate` yields a real fit rather than the
    /// undefined `0/0` fallback.
    #[must_use]
    pub fn has_fit(&self) -> bool {
        self.n >= MIN_FIT_POINTS
    }

    /// Solves the accumulated normal equations.
    ///
    /// - fewer than `MIN_FIT_POINTS` samples: `slope = 0, intercept = 0`
    /// - identical x values (zero denominator): `slope = 0, intercept = mean(y)`
    /// - a slope or intercept outside the `f64` range: same flat fit
    #[must_use]
    pub fn estimate(&self) -> FitResult {
        if !self.has_fit() {
            return FitResult::default();
        }

        let n = self.n as f64;
        let flat = FitResult::new(0.0, self.y.unscale(self.sum_y / n));
        let denominator = n * self.sum_xx - self.sum_x * self.sum_x;
        if denominator <= 0.0 || self.min_x == self.max_x {
            return flat;
        }

        let scaled_slope = (n * self.sum_xy - self.sum_x * self.sum_y) / denominator;
        let slope = scaled_slope * (self.y.scale / self.x.scale);
        // Fitted y at the first sample's x, then shifted back to x = 0.
        let y_at_origin = self
            .y
            .unscale((self.sum_y - scaled_slope * self.sum_x) / n);
        let x_origin = self.x.unscale(0.0);
        let intercept = y_at_origin - slope * x_origin;

        if !slope.is_finite() || !intercept.is_finite() {
            return flat;
        }
        FitResult::new(slope, intercept)
    }
}

impl Extend<DataPoint> for LinearFitAccumulator {
    fn extend<T: IntoIterator<Item = DataPoint>>(&mut self, iter: T) {
        for point in iter {
            self.push(point.x, point.y);
        }
    }
}

impl FromIterator<DataPoint> for LinearFitAccumulator {
    fn from_iter<T: IntoIterator<Item = DataPoint>>(iter: T) -> Self {
        let mut accumulator = Self::new();
        accumulator.extend(iter);
        accumulator
    }
}

/// Fits a line through `points` with ordinary least squares.
#[must_use]
pub fn fit_points(points: &[DataPoint]) -> FitResult {
    points
        .iter()
        .copied()
        .collect::<LinearFitAccumulator>()
        .estimate()
}

/// Fits a line through index-paired `x`/`y` columns.
///
/// Mismatched lengths are a caller error and are reported instead of being
/// silently truncated.
pub fn least_squares(x: &[f64], y: &[f64]) -> ChartResult<FitResult> {
    if x.len() != y.len() {
        return Err(ChartError::InvalidData(format!(
            "least squares needs equal-length columns, got x={} y={}",
            x.len(),
            y.len()
        )));
    }

    let mut accumulator = LinearFitAccumulator::new();
    for (&xi, &yi) in x.iter().zip(y) {
        accumulator.push(xi, yi);
    }
    Ok(accumulator.estimate())
}
