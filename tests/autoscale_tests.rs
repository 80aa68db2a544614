use approx::assert_abs_diff_eq;
use fit_chart::core::{
    AutoscaleTuning, AxisBounds, DataExtent, DataPoint, FitResult, autoscale_bounds,
    intercept_view_bounds,
};

#[test]
fn autoscale_pads_x_by_five_and_y_by_ten_percent() {
    let points = vec![
        DataPoint::new(1.0, 2.0),
        DataPoint::new(3.0, 6.0),
        DataPoint::new(2.0, 4.0),
    ];
    let bounds = autoscale_bounds(&points, AutoscaleTuning::default()).expect("non-empty");

    assert_abs_diff_eq!(bounds.x.min, 0.9, epsilon = 1e-12);
    assert_abs_diff_eq!(bounds.x.max, 3.1, epsilon = 1e-12);
    assert_abs_diff_eq!(bounds.y.min, 1.6, epsilon = 1e-12);
    assert_abs_diff_eq!(bounds.y.max, 6.4, epsilon = 1e-12);
}

#[test]
fn zero_range_falls_back_to_unit_span() {
    let points = vec![DataPoint::new(5.0, 7.0), DataPoint::new(5.0, 7.0)];
    let bounds = autoscale_bounds(&points, AutoscaleTuning::default()).expect("non-empty");

    assert_abs_diff_eq!(bounds.x.min, 4.95, epsilon = 1e-12);
    assert_abs_diff_eq!(bounds.x.max, 5.05, epsilon = 1e-12);
    assert_abs_diff_eq!(bounds.y.min, 6.9, epsilon = 1e-12);
    assert_abs_diff_eq!(bounds.y.max, 7.1, epsilon = 1e-12);
}

#[test]
fn autoscale_is_reproducible() {
    let points = vec![DataPoint::new(-3.0, 0.25), DataPoint::new(8.0, -1.5)];
    let first = autoscale_bounds(&points, AutoscaleTuning::default());
    let second = autoscale_bounds(&points, AutoscaleTuning::default());
    assert_eq!(first, second);
}

#[test]
fn autoscale_of_empty_set_is_none() {
    assert_eq!(autoscale_bounds(&[], AutoscaleTuning::default()), None);
    assert_eq!(DataExtent::from_points(&[]), None);
}

#[test]
fn tuning_validation_rejects_negative_or_non_finite_values() {
    assert!(AutoscaleTuning::default().validate().is_ok());

    let negative = AutoscaleTuning {
        x_padding_ratio: -0.1,
        ..AutoscaleTuning::default()
    };
    assert!(negative.validate().is_err());

    let zero_span = AutoscaleTuning {
        zero_range_span: 0.0,
        ..AutoscaleTuning::default()
    };
    assert!(zero_span.validate().is_err());

    let nan = AutoscaleTuning {
        y_padding_ratio: f64::NAN,
        ..AutoscaleTuning::default()
    };
    assert!(nan.validate().is_err());
}

#[test]
fn intercept_view_includes_origin_column_and_intercept() {
    let points = vec![
        DataPoint::new(1.0, 3.0),
        DataPoint::new(2.0, 5.0),
        DataPoint::new(3.0, 7.0),
    ];
    let fit = FitResult::new(2.0, 1.0);
    let bounds =
        intercept_view_bounds(&points, fit, AutoscaleTuning::default()).expect("enough points");

    assert_abs_diff_eq!(bounds.x.min, -0.15, epsilon = 1e-12);
    assert_abs_diff_eq!(bounds.x.max, 3.15, epsilon = 1e-12);
    assert_abs_diff_eq!(bounds.y.min, 0.4, epsilon = 1e-12);
    assert_abs_diff_eq!(bounds.y.max, 7.6, epsilon = 1e-12);

    assert_eq!(
        intercept_view_bounds(&points[..1], fit, AutoscaleTuning::default()),
        None
    );
}

#[test]
fn padded_bounds_keep_center() {
    let padded = AxisBounds::new(10.0, 20.0).padded(0.5, 1.0);
    assert_eq!(padded, AxisBounds::new(5.0, 25.0));
}
