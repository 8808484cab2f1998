use chart_minimap::MinimapError;
use chart_minimap::api::MinimapConfig;
use chart_minimap::core::Range;

#[test]
fn config_round_trips_through_json() {
    let config = MinimapConfig::new()
        .with_ear_width_px(10.0)
        .with_max_animated_series(6)
        .with_initial_range(Range::new(0.25, 0.75).expect("valid range"));

    let json = serde_json::to_string(&config).expect("serialize config");
    let restored: MinimapConfig = serde_json::from_str(&json).expect("deserialize config");
    assert_eq!(restored, config);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let restored: MinimapConfig =
        serde_json::from_str(r#"{"ear_width_px": 12.0}"#).expect("deserialize config");

    assert_eq!(restored, MinimapConfig::new().with_ear_width_px(12.0));
    assert_eq!(restored.initial_range_or_full(), Range::FULL);
}

#[test]
fn reversed_initial_range_is_rejected_on_load() {
    let result = serde_json::from_str::<MinimapConfig>(
        r#"{"initial_range": {"begin": 0.8, "end": 0.2}}"#,
    );
    assert!(result.is_err());
}

#[test]
fn validation_rejects_degenerate_values() {
    for config in [
        MinimapConfig::new().with_height_px(0),
        MinimapConfig::new().with_line_width(f64::NAN),
        MinimapConfig::new().with_max_animated_series(0),
        MinimapConfig::new().with_simplifier_factor(0.0),
        MinimapConfig::new().with_vertical_padding(20.0),
    ] {
        let err = config.validate().expect_err("degenerate config");
        assert!(matches!(err, MinimapError::InvalidConfig(_)));
    }
}

#[test]
fn defaults_are_valid() {
    let config = MinimapConfig::default().validate().expect("valid defaults");
    assert_eq!(config.height_px, 40);
    assert_eq!(config.ear_width_px, 8.0);
    assert_eq!(config.max_animated_series, 4);
    assert_eq!(config.simplifier_factor, 0.5);
}
