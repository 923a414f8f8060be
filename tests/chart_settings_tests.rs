use physlog_chart::api::{ChartSettings, LineChart, ValueFormatter};
use physlog_chart::core::Point;
use physlog_chart::render::Color;
use physlog_chart::ChartError;

#[test]
fn settings_json_round_trip_keeps_geometry_and_style() {
    let settings = ChartSettings::new(Point::new(12.0, 34.0), 640.0, 200.0)
        .with_value_range(-1.0, 9.0)
        .with_scale(1.5)
        .with_colors(Color::WHITE, Color::GRAY, Color::rgb(0.9, 0.9, 0.2))
        .with_x_axis_labels(false);

    let json = settings.to_json_pretty().expect("serialize");
    let restored = ChartSettings::from_json_str(&json).expect("parse");

    assert_eq!(restored.position, Point::new(12.0, 34.0));
    assert_eq!(restored.chart_width, 640.0);
    assert_eq!(restored.chart_height, 200.0);
    assert_eq!((restored.y_min, restored.y_max), (-1.0, 9.0));
    assert_eq!(restored.scale, 1.5);
    assert_eq!(restored.axis_label_color, Color::rgb(0.9, 0.9, 0.2));
    assert!(!restored.show_x_axis_labels);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let restored = ChartSettings::from_json_str(
        r#"{ "chart_width": 250.0, "y_min": 0.0, "y_max": 120.0 }"#,
    )
    .expect("parse");

    let defaults = ChartSettings::default();
    assert_eq!(restored.chart_width, 250.0);
    assert_eq!(restored.chart_height, defaults.chart_height);
    assert_eq!(restored.axis_tick_length, defaults.axis_tick_length);
    assert_eq!(restored.y_axis_label_formatter.format(1.23456), "1.23");
}

#[test]
fn invalid_json_settings_are_rejected() {
    let err = ChartSettings::from_json_str("{ not json").expect_err("malformed json");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = ChartSettings::from_json_str(r#"{ "y_min": 5.0, "y_max": 5.0 }"#)
        .expect_err("degenerate range");
    assert!(matches!(err, ChartError::InvalidSettings(_)));
}

#[test]
fn chart_rejects_invalid_geometry() {
    let settings = ChartSettings::new(Point::new(0.0, 0.0), 0.0, 100.0);
    let err = LineChart::new(settings).expect_err("zero width");
    assert!(matches!(err, ChartError::InvalidSettings(_)));

    let settings = ChartSettings::new(Point::new(f64::INFINITY, 0.0), 100.0, 100.0);
    assert!(LineChart::new(settings).is_err());
}

#[test]
fn custom_formatter_is_used() {
    let formatter = ValueFormatter::new(|value| format!("{:.0} m/s", value * 60.0));
    let settings = ChartSettings::default().with_y_axis_label_formatter(formatter);
    assert_eq!(settings.y_axis_label_formatter.format(2.0), "120 m/s");
}
