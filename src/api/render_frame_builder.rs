use indexmap::IndexMap;

use crate::core::{ANNOTATION_ID, Axis, ViewState};
use crate::render::{AnnotationFrame, AxisFrame, RenderFrame, SeriesFrame, SeriesKind};

use super::RecomputePass;

pub const DATA_SERIES_LABEL: &str = "Data";
pub const FIT_SERIES_LABEL: &str = "Linear Fit";

fn axis_frame(view: &ViewState, axis: Axis) -> AxisFrame {
    let state = view.axis(axis);
    AxisFrame {
        scale_type: state.scale_type(),
        label: view.axis_label(axis),
        min: state.min(),
        max: state.max(),
    }
}

/// Projects the view state and one pass into the chart configuration.
///
/// Pure: the same inputs always give the same frame, and the frame holds
/// copies only.
#[must_use]
pub fn build_render_frame(view: &ViewState, pass: &RecomputePass) -> RenderFrame {
    let mut annotations = IndexMap::new();
    if let Some(annotation) = &pass.annotation {
        annotations.insert(
            ANNOTATION_ID.to_owned(),
            AnnotationFrame {
                x_value: annotation.anchor_x,
                y_value: annotation.anchor_y,
                content: annotation.text.clone(),
            },
        );
    }

    RenderFrame {
        title: view.title().to_owned(),
        data: SeriesFrame::new(DATA_SERIES_LABEL, SeriesKind::Scatter, pass.points.clone()),
        fit: SeriesFrame::new(
            FIT_SERIES_LABEL,
            SeriesKind::Line,
            pass.fit_line.to_vec(),
        ),
        x_axis: axis_frame(view, Axis::X),
        y_axis: axis_frame(view, Axis::Y),
        annotations,
    }
}
