use super::*;
use crate::{animation::oscillator::PhaseOrder, ui::layout::LayoutConfig};

fn slider() -> SliderGate {
    let layout = MockupLayout::new(&LayoutConfig::default()).unwrap();
    SliderGate::new(
        &layout,
        HueRamp::traffic_light(),
        Rgb8::from_hex(0xFFC27B),
        OscillatorTuning {
            step: 0.2,
            amplitude: 2.0,
            limit: None,
            order: PhaseOrder::AdvanceFirst,
        },
    )
}

#[test]
fn idle_shake_wobbles_around_center() {
    let mut s = slider();
    for _ in 0..50 {
        assert_eq!(s.tick_idle(), TickControl::Continue);
        assert!((s.handle_x() - 200.0).abs() <= 2.0);
    }
    assert!(s.handle_x() != 200.0);
    assert_eq!(s.color(), Rgb8::from_hex(0xFFC27B));
}

#[test]
fn grabbing_requires_hitting_the_handle() {
    let mut s = slider();
    assert!(!s.on_pointer_down(Point::new(200.0, 470.0)));
    assert!(!s.is_dragging());
    assert!(s.on_pointer_down(Point::new(210.0, 430.0)));
    assert!(s.is_dragging());
    assert!(!s.is_idle());
}

#[test]
fn drag_keeps_grab_offset_and_clamps_to_track() {
    let mut s = slider();
    s.on_pointer_down(Point::new(210.0, 420.0));
    s.on_pointer_move(250.0);
    assert_eq!(s.handle_x(), 240.0);
    s.on_pointer_move(1000.0);
    assert_eq!(s.handle_x(), 320.0);
    assert_eq!(s.progress(), 1.0);
    s.on_pointer_move(-50.0);
    assert_eq!(s.handle_x(), 80.0);
    assert_eq!(s.progress(), 0.0);
}

#[test]
fn first_move_unlocks_exactly_once() {
    let mut s = slider();
    s.on_pointer_down(Point::new(200.0, 420.0));
    assert_eq!(s.on_pointer_move(205.0), Some(SliderEvent::Unlocked));
    assert_eq!(s.on_pointer_move(215.0), None);
    assert!(s.is_unlocked());
}

#[test]
fn moves_without_a_grab_are_ignored() {
    let mut s = slider();
    assert_eq!(s.on_pointer_move(300.0), None);
    assert!(!s.is_unlocked());
}

#[test]
fn color_follows_progress_while_dragging() {
    let mut s = slider();
    s.on_pointer_down(Point::new(200.0, 420.0));
    s.on_pointer_move(80.0);
    assert_eq!(s.color(), Rgb8::from_hex(0xFF8787));
    s.on_pointer_move(320.0);
    assert_eq!(s.color(), Rgb8::from_hex(0x8FEA91));
    s.on_pointer_up();
    // Color sticks after release; idle shake no longer runs.
    s.tick_idle();
    assert_eq!(s.color(), Rgb8::from_hex(0x8FEA91));
    assert_eq!(s.handle_x(), 320.0);
}

#[test]
fn reset_restores_idle_locked_state() {
    let mut s = slider();
    s.on_pointer_down(Point::new(200.0, 420.0));
    s.on_pointer_move(300.0);
    s.reset();
    assert_eq!(s.handle_x(), 200.0);
    assert!(!s.is_unlocked());
    assert!(s.is_idle());
    assert!(!s.is_dragging());
    assert_eq!(s.color(), Rgb8::from_hex(0xFFC27B));
}
