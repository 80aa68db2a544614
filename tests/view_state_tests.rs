use fit_chart::core::{
    Axis, AxisBounds, AxisControl, AxisControls, DataExtent, ScaleType, VariableMeta, ViewState,
};

#[test]
fn view_state_starts_linear_with_unset_bounds() {
    let view = ViewState::new();
    assert_eq!(view.title(), "Title");
    for axis in Axis::ALL {
        let state = view.axis(axis);
        assert_eq!(state.scale_type(), ScaleType::Linear);
        assert_eq!(state.min(), None);
        assert_eq!(state.max(), None);
    }
    assert_eq!(view.meta(Axis::X).symbol, "x");
    assert_eq!(view.axis_label(Axis::X), "X-Variable (x) [units]");
    assert_eq!(view.axis_label(Axis::Y), "Y-Variable (y) [units]");
}

#[test]
fn axis_label_shows_only_present_parts() {
    assert_eq!(VariableMeta::new("t", "Time", "s").axis_label(), "Time (t) [s]");
    assert_eq!(VariableMeta::new("t", "Time", "").axis_label(), "Time (t)");
    assert_eq!(VariableMeta::new("", "Speed", "").axis_label(), "Speed");
    assert_eq!(VariableMeta::new("", "Speed", "m/s").axis_label(), "Speed [m/s]");
    assert_eq!(VariableMeta::new("v", "", "m/s").axis_label(), "v [m/s]");
}

#[test]
fn variable_meta_blanks_fall_back_to_axis_ids() {
    let mut view = ViewState::new();
    view.set_variable_meta(Axis::X, &VariableMeta::new("  ", "", " s "));
    view.set_variable_meta(Axis::Y, &VariableMeta::new(" v ", " Velocity ", ""));

    assert_eq!(view.meta(Axis::X), &VariableMeta::new("x", "X", "s"));
    assert_eq!(view.meta(Axis::Y), &VariableMeta::new("v", "Velocity", ""));
    assert_eq!(view.axis_label(Axis::X), "X (x) [s]");
    assert_eq!(view.axis_label(Axis::Y), "Velocity (v)");
}

#[test]
fn blank_title_resets_to_default() {
    let mut view = ViewState::new();
    view.set_title("  Hooke's law ");
    assert_eq!(view.title(), "Hooke's law");
    view.set_title("   ");
    assert_eq!(view.title(), "Title");
}

#[test]
fn switching_to_log_clears_non_positive_bounds() {
    let mut view = ViewState::new();
    view.set_axis_bounds(Axis::Y, Some(-5.0), Some(50.0));
    assert_eq!(view.axis(Axis::Y).min(), Some(-5.0));

    view.set_scale_type(Axis::Y, ScaleType::Logarithmic);
    let y = view.axis(Axis::Y);
    assert_eq!(y.scale_type(), ScaleType::Logarithmic);
    assert_eq!(y.min(), None);
    assert_eq!(y.max(), Some(50.0));

    view.set_axis_bounds(Axis::X, Some(0.0), Some(0.0));
    view.set_scale_type(Axis::X, ScaleType::Logarithmic);
    assert_eq!(view.axis(Axis::X).min(), None);
    assert_eq!(view.axis(Axis::X).max(), None);
}

#[test]
fn bounds_set_on_log_axis_are_sanitized() {
    let mut view = ViewState::new();
    view.set_scale_type(Axis::X, ScaleType::Logarithmic);
    view.set_axis_bounds(Axis::X, Some(-1.0), Some(f64::NAN));
    assert_eq!(view.axis(Axis::X).min(), None);
    assert_eq!(view.axis(Axis::X).max(), None);

    view.set_axis_bounds(Axis::X, Some(0.1), Some(1000.0));
    assert_eq!(view.axis(Axis::X).min(), Some(0.1));
    assert_eq!(view.axis(Axis::X).max(), Some(1000.0));
}

#[test]
fn apply_axes_uses_incoming_scale_type_for_sanitizing() {
    let mut view = ViewState::new();
    view.apply_axes(AxisControls::new(
        AxisControl::parse(ScaleType::Logarithmic, "-5", "100"),
        AxisControl::parse(ScaleType::Linear, "abc", " 10 "),
    ));

    let x = view.axis(Axis::X);
    assert_eq!(x.scale_type(), ScaleType::Logarithmic);
    assert_eq!(x.min(), None);
    assert_eq!(x.max(), Some(100.0));

    let y = view.axis(Axis::Y);
    assert_eq!(y.scale_type(), ScaleType::Linear);
    assert_eq!(y.min(), None);
    assert_eq!(y.max(), Some(10.0));

    view.apply_axes(AxisControls::new(
        AxisControl::new(ScaleType::Linear, Some(-5.0), None),
        AxisControl::default(),
    ));
    assert_eq!(view.axis(Axis::X).scale_type(), ScaleType::Linear);
    assert_eq!(view.axis(Axis::X).min(), Some(-5.0));
    assert_eq!(view.axis(Axis::X).max(), None);
}

#[test]
fn autoscale_write_back_keeps_scale_types() {
    let mut view = ViewState::new();
    view.set_scale_type(Axis::Y, ScaleType::Logarithmic);
    view.apply_autoscale(DataExtent {
        x: AxisBounds::new(-1.0, 4.0),
        y: AxisBounds::new(-0.5, 120.0),
    });

    assert_eq!(view.axis(Axis::X).scale_type(), ScaleType::Linear);
    assert_eq!(view.axis(Axis::X).min(), Some(-1.0));
    assert_eq!(view.axis(Axis::X).max(), Some(4.0));
    assert_eq!(view.axis(Axis::Y).scale_type(), ScaleType::Logarithmic);
    assert_eq!(view.axis(Axis::Y).min(), None);
    assert_eq!(view.axis(Axis::Y).max(), Some(120.0));
}
