use super::*;

#[test]
fn presets_validate() {
    MockupConfig::cta_flow().validate().unwrap();
    MockupConfig::scroll_test().validate().unwrap();
    assert_eq!(Preset::CtaFlow.config(), MockupConfig::default());
}

#[test]
fn presets_differ_only_in_tuning_and_copy() {
    let a = MockupConfig::cta_flow();
    let b = MockupConfig::scroll_test();
    assert_eq!(a.layout, b.layout);
    assert_eq!(b.scroll.correction, 0.25);
    assert_eq!(b.scroll.wheel_gain, 1.0);
    assert_eq!(b.entrance.easing, 0.18);
    assert_ne!(a.card_texts, b.card_texts);
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = MockupConfig::from_json_str(
        r#"{ "scroll": { "correction": 0.5 }, "entrance": { "frame_step": 4 } }"#,
    )
    .unwrap();
    assert_eq!(cfg.scroll.correction, 0.5);
    assert_eq!(cfg.scroll.decay, 0.9);
    assert_eq!(cfg.entrance.frame_step, 4);
    assert_eq!(cfg.entrance.easing, 0.2);
    assert_eq!(cfg.layout, LayoutConfig::default());
    cfg.validate().unwrap();
}

#[test]
fn json_roundtrip_preserves_config() {
    let cfg = MockupConfig::scroll_test();
    let json = serde_json::to_string(&cfg).unwrap();
    assert_eq!(MockupConfig::from_json_str(&json).unwrap(), cfg);
}

#[test]
fn card_text_count_must_match_layout() {
    let mut cfg = MockupConfig::cta_flow();
    cfg.card_texts.pop();
    let err = cfg.validate().unwrap_err();
    assert!(matches!(err, CardflowError::Config(_)));
}

#[test]
fn bad_json_is_a_serde_error() {
    let err = MockupConfig::from_json_str("{ nope").unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn missing_file_is_a_config_error() {
    let err = MockupConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(matches!(err, CardflowError::Config(_)));
}

#[test]
fn preset_names_are_kebab_case() {
    assert_eq!(
        serde_json::to_string(&Preset::ScrollTest).unwrap(),
        "\"scroll-test\""
    );
}

#[test]
fn scroll_test_card_shake_samples_before_advancing() {
    let shake = MotionTuning::scroll_test().card_shake;
    assert_eq!(shake.order, PhaseOrder::SampleFirst);
    assert_eq!(MotionTuning::default().card_shake.order, PhaseOrder::AdvanceFirst);
}

#[test]
fn oversized_frame_step_is_rejected_not_panicking() {
    let cfg = MockupConfig::from_json_str(r#"{"entrance":{"frame_step":9223372036854775808}}"#)
        .unwrap();
    let err = cfg.validate().unwrap_err();
    assert!(matches!(err, CardflowError::Validation(_)));
    assert!(crate::MockupApp::new(cfg).is_err());
}
