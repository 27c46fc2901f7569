// File: crates/sentinel-chart/tests/autoscale.rs
// Purpose: Validate Y range resolution from data and suggested bounds.

use sentinel_chart::{Chart, Series, ViewState};

fn chart_with(values: &[Option<f64>]) -> Chart {
    let mut chart = Chart::new();
    chart.add_series(Series::from_values("v", values));
    chart
}

#[test]
fn data_only_is_padded_two_percent() {
    let chart = chart_with(&[Some(10.0), Some(20.0), Some(15.0)]);
    let v = ViewState::from_chart(&chart);
    assert_eq!((v.x_min, v.x_max), (0.0, 2.0));
    assert!((v.y_min - 9.8).abs() < 1e-9);
    assert!((v.y_max - 20.2).abs() < 1e-9);
}

#[test]
fn suggested_bounds_widen_but_never_narrow() {
    // pH-like safe range 6.5..8.5 padded by 10 %
    let mut chart = chart_with(&[Some(7.0), Some(7.4)]);
    chart.autoscale_axes(Some(6.3), Some(8.7));
    assert!((chart.y_axis.min - 6.3).abs() < 1e-9);
    assert!((chart.y_axis.max - 8.7).abs() < 1e-9);

    // Data outside the suggestion wins.
    let mut chart = chart_with(&[Some(5.0), Some(9.5)]);
    chart.autoscale_axes(Some(6.3), Some(8.7));
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (5.0, 9.5));
}

#[test]
fn empty_and_flat_data_get_a_usable_range() {
    let v = ViewState::from_chart(&Chart::new());
    assert_eq!((v.y_min, v.y_max), (0.0, 1.0));
    assert_eq!((v.x_min, v.x_max), (-0.5, 0.5));

    let v = ViewState::resolve(&chart_with(&[None, None]), Some(-30.0), Some(330.0));
    assert_eq!((v.y_min, v.y_max), (-30.0, 330.0));

    let v = ViewState::from_chart(&chart_with(&[Some(4.0), Some(4.0)]));
    assert!(v.y_max > v.y_min);
    assert!(v.y_min <= 4.0 && v.y_max >= 4.0);
}

#[test]
fn missing_values_are_ignored_for_extent() {
    let chart = chart_with(&[None, Some(2.0), Some(f64::NAN), Some(3.0)]);
    let v = ViewState::resolve(&chart, Some(0.0), None);
    assert_eq!(v.y_min, 0.0);
    assert_eq!(v.y_max, 3.0);
    assert_eq!(v.x_max, 3.0);
}
