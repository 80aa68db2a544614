use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use tracing::{debug, warn};

use crate::core::{
    Annotation, AnnotationTuning, Axis, DataExtent, DataPoint, FitResult, MIN_FIT_POINTS, RawRow,
    ViewState, build_annotation, extract_points, filter_points_for_scales, fit_points,
    resolve_x_domain,
};

use super::StatusMessage;

/// Everything one recompute pass derives from the table and the view state.
///
/// Built by a pure function and consumed by the render synchronizer; it is
/// replaced wholesale on the next pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecomputePass {
    /// Rows whose cells both parsed as numbers.
    pub parsed_count: usize,
    /// Parsed points removed because a log axis cannot show them.
    pub dropped: usize,
    /// Plottable points, sorted ascending by x.
    pub points: Vec<DataPoint>,
    pub fit: Option<FitResult>,
    /// Two endpoints spanning the visible (or data) x range, or empty.
    pub fit_line: SmallVec<[DataPoint; 2]>,
    pub annotation: Option<Annotation>,
    pub status: StatusMessage,
}

impl RecomputePass {
    #[must_use]
    pub fn compute(rows: &[RawRow], view: &ViewState, tuning: AnnotationTuning) -> Self {
        let parsed = extract_points(rows);
        let filtered = filter_points_for_scales(
            &parsed,
            view.axis(Axis::X).scale_type(),
            view.axis(Axis::Y).scale_type(),
        );
        if filtered.dropped > 0 {
            warn!(dropped = filtered.dropped, "points not valid on log scale skipped");
        }
        let status = StatusMessage::for_dropped_points(filtered.dropped);

        let mut points = filtered.points;
        points.sort_by_key(|point| OrderedFloat(point.x));

        let (fit, fit_line, annotation) = if points.len() >= MIN_FIT_POINTS {
            let fit = fit_points(&points);
            let fit_line = fit_line_endpoints(fit, &points, view);
            let annotation = build_annotation(fit, &points, view, tuning);
            (Some(fit), fit_line, annotation)
        } else {
            (None, SmallVec::new(), None)
        };

        debug!(
            rows = rows.len(),
            parsed = parsed.len(),
            plotted = points.len(),
            dropped = filtered.dropped,
            has_fit = fit.is_some(),
            "recompute pass"
        );

        Self {
            parsed_count: parsed.len(),
            dropped: filtered.dropped,
            points,
            fit,
            fit_line,
            annotation,
            status,
        }
    }

    #[must_use]
    pub fn has_fit(&self) -> bool {
        self.fit.is_some()
    }
}

fn fit_line_endpoints(
    fit: FitResult,
    points: &[DataPoint],
    view: &ViewState,
) -> SmallVec<[DataPoint; 2]> {
    let Some(extent) = DataExtent::from_points(points) else {
        return SmallVec::new();
    };
    let domain = resolve_x_domain(view.axis(Axis::X), extent);
    let start = DataPoint::new(domain.min, fit.evaluate(domain.min));
    let end = DataPoint::new(domain.max, fit.evaluate(domain.max));
    if !(start.y.is_finite() && end.y.is_finite()) {
        debug!(x_min = domain.min, x_max = domain.max, "fit line leaves f64 range");
        return SmallVec::new();
    }
    smallvec![start, end]
}
