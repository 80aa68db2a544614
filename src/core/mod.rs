//! Side-effect free building blocks of one recompute pass.

pub mod annotation;
pub mod autoscale;
pub mod extract;
pub mod regression;
pub mod scale;
pub mod types;
pub mod view_state;

pub use annotation::{
    ANNOTATION_ID, Annotation, AnnotationTuning, EQUATION_DECIMALS, build_annotation,
    equation_text, format_fixed, resolve_x_domain,
};
pub use autoscale::{
    AutoscaleTuning, AxisBounds, DataExtent, autoscale_bounds, intercept_view_bounds,
};
pub use extract::{extract_points, parse_cell};
pub use regression::{
    FitResult, LinearFitAccumulator, MIN_FIT_POINTS, fit_points, least_squares,
};
pub use scale::{
    FilteredPoints, ScaleType, filter_points_for_scales, is_valid_for_scale, sanitize_bound,
    sanitize_optional_bound,
};
pub use types::{Axis, DataPoint, RawRow};
pub use view_state::{
    AxisControl, AxisControls, AxisState, DEFAULT_TITLE, VariableMeta, ViewState,
};
