use super::*;
use crate::config::MockupConfig;

#[test]
fn initial_snapshot_describes_the_cta_screen() {
    let app = MockupApp::new(MockupConfig::cta_flow()).unwrap();
    let s = FrameSnapshot::capture(&app);
    assert_eq!(s.frame, FrameIndex(0));
    assert_eq!(s.screen, Screen::Cta);
    assert_eq!(s.scroll.offset, 80.0);
    assert_eq!(s.slider.handle_x, 200.0);
    assert!(!s.cta.active);
    assert_eq!(s.cards.len(), 5);
    assert!(s.cards.iter().all(|c| c.phase == EntrancePhase::Pending));
    assert!(s.cards.iter().all(|c| c.x == -280.0 && c.opacity == 0.0));
    assert_eq!(s.cards[1].y, 80.0 + 450.0);
    assert_eq!(s.live_callbacks, 2);
}

#[test]
fn snapshot_serializes_to_json() {
    let app = MockupApp::new(MockupConfig::cta_flow()).unwrap();
    let json = serde_json::to_value(FrameSnapshot::capture(&app)).unwrap();
    assert_eq!(json["screen"], "cta");
    assert_eq!(json["slider"]["color"], "#FFC27B");
    assert_eq!(json["cards"][0]["phase"], "pending");
}
