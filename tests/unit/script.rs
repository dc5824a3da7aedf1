use super::*;
use crate::{app::mockup::Screen, config::MockupConfig, foundation::core::Rgb8};

fn app() -> MockupApp {
    MockupApp::new(MockupConfig::cta_flow()).unwrap()
}

const FLOW: &str = r#"{
    "events": [
        { "type": "pointer_down", "x": 200, "y": 420 },
        { "type": "pointer_move", "x": 340, "y": 420 },
        { "type": "pointer_up", "x": 340, "y": 420 },
        { "type": "snapshot" },
        { "type": "pointer_down", "x": 200, "y": 495 },
        { "type": "pointer_up", "x": 200, "y": 495 },
        { "type": "tick", "count": 120 },
        { "type": "snapshot" },
        { "type": "reset" },
        { "type": "snapshot" }
    ]
}"#;

#[test]
fn parses_tagged_events() {
    let script = InputScript::from_json_str(FLOW).unwrap();
    assert!(!script.capture_every_tick);
    assert_eq!(script.events.len(), 10);
    assert_eq!(script.events[0], InputEvent::PointerDown { x: 200.0, y: 420.0 });
    assert_eq!(script.events[6], InputEvent::Tick { count: 120 });
    assert_eq!(script.events[8], InputEvent::Reset);
}

#[test]
fn replays_the_full_flow() {
    let mut app = app();
    let script = InputScript::from_json_str(FLOW).unwrap();
    let snaps = run_script(&mut app, &script).unwrap();
    assert_eq!(snaps.len(), 3);

    assert_eq!(snaps[0].screen, Screen::Cta);
    assert!(snaps[0].slider.unlocked);
    assert!(snaps[0].cta.active);
    assert_eq!(snaps[0].slider.color, Rgb8::from_hex(0x8FEA91));

    assert_eq!(snaps[1].screen, Screen::Cards);
    assert_eq!(snaps[1].frame.0, 120);
    assert!(snaps[1].cards.iter().all(|c| c.opacity == 1.0 && c.x == 140.0));

    assert_eq!(snaps[2].screen, Screen::Cta);
    assert!(!snaps[2].cta.active);
    assert_eq!(snaps[2].live_callbacks, 2);
}

#[test]
fn capture_every_tick_records_each_batch() {
    let mut app = app();
    let script = InputScript {
        capture_every_tick: true,
        events: vec![
            InputEvent::Tick { count: 2 },
            InputEvent::Wheel { delta_y: 10.0 },
            InputEvent::Tick { count: 3 },
            InputEvent::Snapshot,
        ],
    };
    let snaps = run_script(&mut app, &script).unwrap();
    let frames: Vec<u64> = snaps.iter().map(|s| s.frame.0).collect();
    assert_eq!(frames, vec![2, 5, 5]);
}

#[test]
fn zero_tick_is_rejected_before_anything_runs() {
    let mut app = app();
    let script = InputScript {
        capture_every_tick: false,
        events: vec![InputEvent::Tick { count: 5 }, InputEvent::Tick { count: 0 }],
    };
    let err = run_script(&mut app, &script).unwrap_err();
    assert!(matches!(err, CardflowError::Script(_)));
    assert!(err.to_string().contains("event 1"));
    assert_eq!(app.frame().0, 0);

    assert!(InputScript::from_json_str(r#"{"events":[{"type":"tick","count":0}]}"#).is_err());
}

#[test]
fn unknown_event_type_is_a_serde_error() {
    let err = InputScript::from_json_str(r#"{"events":[{"type":"swipe"}]}"#).unwrap_err();
    assert!(matches!(err, CardflowError::Serde(_)));
}

#[test]
fn missing_script_file_is_a_script_error() {
    let err = InputScript::from_path("definitely/not/here.json").unwrap_err();
    assert!(matches!(err, CardflowError::Script(_)));
}
