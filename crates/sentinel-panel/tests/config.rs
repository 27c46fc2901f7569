// File: crates/sentinel-panel/tests/config.rs
// Purpose: build_chart_config derivation: labels, values, styling, annotations and scale hints.

use sentinel_chart::{LabelPosition, Rgba};
use sentinel_panel::{build_chart_config, build_chart_config_with, parse_utc_offset, LabelOptions, Sample};

fn samples() -> Vec<Sample> {
    vec![
        Sample::default().with_time("10:00:00").with_reading("ph", 7.1).with_reading("temperature", 29.0),
        Sample::default().with_time("10:00:05").with_reading("temperature", 29.4),
        Sample::default().with_time("10:00:10").with_reading("ph", 8.9).with_reading("tds", 120.0),
    ]
}

#[test]
fn labels_and_values_are_parallel_and_ordered() {
    let cfg = build_chart_config("pH Level", &samples());
    assert_eq!(cfg.labels, vec!["10:00:00", "10:00:05", "10:00:10"]);
    assert_eq!(cfg.dataset.data, vec![Some(7.1), None, Some(8.9)]);
    assert_eq!(cfg.len(), 3);

    let cfg = build_chart_config("Temperature", &samples());
    assert_eq!(cfg.dataset.data, vec![Some(29.0), Some(29.4), None]);
}

#[test]
fn dataset_styling_follows_parameter() {
    let cfg = build_chart_config("Turbidity", &samples());
    let ds = &cfg.dataset;
    assert_eq!(ds.label, "Turbidity");
    assert!(!ds.fill);
    assert_eq!(ds.border_color, Some(Rgba::rgb(0xc8, 0x74, 0x00)));
    assert_eq!(ds.point_background_color, ds.border_color);
    assert_eq!((ds.tension, ds.point_radius, ds.point_hover_radius), (0.0, 1.0, 5.0));
    assert_eq!(cfg.title, "Turbidity");
    assert_eq!(cfg.class, Some("turbidity"));
    assert!(cfg.options.responsive);
    assert!(!cfg.options.legend_display);
}

#[test]
fn threshold_lines_and_scale_hints() {
    let cfg = build_chart_config("pH Level", &samples());
    let a = &cfg.options.annotations;
    assert_eq!(a.len(), 2);
    assert_eq!((a[0].id.as_str(), a[0].y), ("minLine", 6.5));
    assert_eq!((a[1].id.as_str(), a[1].y), ("maxLine", 8.5));
    for line in a {
        assert_eq!(line.color, Rgba::RED);
        assert_eq!(line.width, 1.0);
        assert_eq!(line.dash, vec![6.0, 6.0]);
        let label = line.label.as_ref().expect("labelled");
        assert_eq!(label.position, LabelPosition::Start);
        assert_eq!(label.background, Rgba::RED);
    }
    assert_eq!(a[0].label.as_ref().map(|l| l.content.as_str()), Some("Min"));
    assert_eq!(a[1].label.as_ref().map(|l| l.content.as_str()), Some("Max"));

    let y = cfg.options.y;
    assert!(!y.begin_at_zero);
    assert!((y.suggested_min.unwrap() - 6.3).abs() < 1e-9);
    assert!((y.suggested_max.unwrap() - 8.7).abs() < 1e-9);
}

#[test]
fn unknown_parameter_defaults_to_unset() {
    let cfg = build_chart_config("Dissolved Oxygen", &samples());
    assert_eq!(cfg.labels.len(), 3);
    assert_eq!(cfg.dataset.data, vec![None, None, None]);
    assert_eq!(cfg.dataset.border_color, None);
    assert_eq!(cfg.class, None);
    assert_eq!(cfg.threshold, None);
    assert!(cfg.options.annotations.is_empty());
    assert_eq!((cfg.options.y.suggested_min, cfg.options.y.suggested_max), (None, None));
    assert_eq!(cfg.title, "Dissolved Oxygen");
}

#[test]
fn empty_samples_give_empty_series() {
    let cfg = build_chart_config("TDS", &[]);
    assert!(cfg.is_empty());
    assert!(cfg.dataset.data.is_empty());
    assert_eq!(cfg.options.annotations.len(), 2);
}

#[test]
fn labels_fall_back_to_timestamp_then_dash() {
    let samples = vec![
        Sample::at(0).with_reading("tds", 10.0),
        Sample::default().with_reading("tds", 11.0),
        Sample::at(i64::MAX),
    ];
    let cfg = build_chart_config("TDS", &samples);
    assert_eq!(cfg.labels, vec!["07:00:00", "-", "-"]);

    let utc = LabelOptions { offset: parse_utc_offset("UTC").unwrap() };
    let cfg = build_chart_config_with("TDS", &samples, &utc);
    assert_eq!(cfg.labels[0], "00:00:00");
}

#[test]
fn tooltip_text_formats_label_and_value() {
    let cfg = build_chart_config("pH Level", &samples());
    assert_eq!(cfg.tooltip_text(0).as_deref(), Some("pH Level: 7.1"));
    assert_eq!(cfg.tooltip_text(1), None);
    assert_eq!(cfg.tooltip_text(7), None);
}

#[test]
fn serializes_to_chart_js_shape() {
    let cfg = build_chart_config("Temperature", &samples()[..1]);
    let v = serde_json::to_value(&cfg).unwrap();
    assert_eq!(v["dataset"]["borderColor"], "#ff9601");
    assert_eq!(v["dataset"]["pointHoverRadius"], 5.0);
    assert_eq!(v["options"]["legendDisplay"], false);
    assert_eq!(v["options"]["annotations"][0]["id"], "minLine");
    assert_eq!(v["options"]["annotations"][0]["borderDash"], serde_json::json!([6.0, 6.0]));
    assert_eq!(v["options"]["annotations"][1]["label"]["content"], "Max");
    assert_eq!(v["options"]["annotations"][1]["label"]["position"], "start");
    assert_eq!(v["options"]["annotations"][1]["label"]["backgroundColor"], "#ff0000");
    assert_eq!(v["options"]["y"]["beginAtZero"], false);
}
