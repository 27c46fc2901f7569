// File: crates/sentinel-chart/tests/series.rs
// Purpose: Series gap handling, downsampling and tick helpers.

use sentinel_chart::grid::{category_ticks, nice_ticks};
use sentinel_chart::{lttb, Series};

#[test]
fn runs_split_on_missing_values() {
    let s = Series::from_values("ph", &[Some(7.0), Some(7.1), None, Some(7.3), None, None, Some(7.2)]);
    let runs = s.runs();
    assert_eq!(runs.len(), 3);
    assert_eq!(runs[0], vec![(0.0, 7.0), (1.0, 7.1)]);
    assert_eq!(runs[1], vec![(3.0, 7.3)]);
    assert_eq!(runs[2], vec![(6.0, 7.2)]);
    assert_eq!(s.y_extent(), Some((7.0, 7.3)));
    assert_eq!(s.value_at(3.0), Some(7.3));
    assert_eq!(s.value_at(2.0), None);
}

#[test]
fn lttb_keeps_endpoints_and_budget() {
    let data: Vec<(f64, f64)> = (0..1000).map(|i| (i as f64, (i as f64 * 0.05).sin())).collect();
    let out = lttb(&data, 100);
    assert_eq!(out.len(), 100);
    assert_eq!(out.first(), data.first());
    assert_eq!(out.last(), data.last());
    assert!(out.windows(2).all(|w| w[0].0 < w[1].0));

    assert_eq!(lttb(&data[..10], 50).len(), 10);
    assert!(lttb(&data, 0).is_empty());
}

#[test]
fn downsampling_preserves_gaps() {
    let mut values: Vec<Option<f64>> = (0..500).map(|i| Some(i as f64)).collect();
    values[250] = None;
    let s = Series::from_values("t", &values).downsample_lttb(50);
    assert_eq!(s.runs().len(), 2);
    let kept = s.data.iter().filter(|(_, y)| y.is_some()).count();
    assert!(kept <= 52, "kept {kept}");

    // Short series are left alone.
    let short = Series::from_values("t", &[Some(1.0), Some(2.0)]);
    assert_eq!(short.downsample_lttb(50), short);
}

#[test]
fn nice_ticks_for_threshold_ranges() {
    assert_eq!(nice_ticks(6.3, 8.7, 7), vec![6.5, 7.0, 7.5, 8.0, 8.5]);
    assert_eq!(nice_ticks(0.0, 10.0, 6), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    assert_eq!(nice_ticks(-30.0, 330.0, 5), vec![0.0, 100.0, 200.0, 300.0]);
    assert!(nice_ticks(1.0, 1.0, 5).is_empty());
}

#[test]
fn category_ticks_skip_evenly() {
    assert_eq!(category_ticks(5, 10), vec![0, 1, 2, 3, 4]);
    assert_eq!(category_ticks(30, 10), vec![0, 3, 6, 9, 12, 15, 18, 21, 24, 27]);
    assert!(category_ticks(0, 10).is_empty());
}
