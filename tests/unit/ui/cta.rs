use super::*;
use crate::animation::oscillator::PhaseOrder;

fn this(c: &mut CtaButton) -> &mut CtaButton {
    c
}

fn button() -> CtaButton {
    CtaButton::new(
        Rect::new(100.0, 470.0, 300.0, 520.0),
        OscillatorTuning {
            step: 0.2,
            amplitude: std::f64::consts::PI / 180.0,
            limit: None,
            order: PhaseOrder::AdvanceFirst,
        },
        0.9,
    )
}

#[test]
fn inactive_button_is_still() {
    let b = button();
    assert!(!b.is_active());
    assert_eq!(b.rotation(), 0.0);
    assert_eq!(b.scale(), 1.0);
}

#[test]
fn activation_registers_one_wobble() {
    let mut b = button();
    let mut ticker = Ticker::<CtaButton>::new();
    b.activate(&mut ticker, this);
    b.activate(&mut ticker, this);
    assert_eq!(ticker.len(), 1);

    ticker.advance(&mut b, 5);
    let max = std::f64::consts::PI / 180.0;
    assert!(b.rotation().abs() <= max);
    assert!((b.rotation() - 1.0_f64.sin() * max).abs() < 1e-9);
}

#[test]
fn reset_cancels_wobble() {
    let mut b = button();
    let mut ticker = Ticker::<CtaButton>::new();
    b.activate(&mut ticker, this);
    ticker.advance(&mut b, 3);
    b.reset(&mut ticker);
    assert!(ticker.is_empty());
    assert!(!b.is_active());
    assert_eq!(b.rotation(), 0.0);
    assert_eq!(b.wobble_handle(), None);
}

#[test]
fn press_scales_down() {
    let mut b = button();
    assert!(b.hit(Point::new(200.0, 495.0)));
    assert!(!b.hit(Point::new(50.0, 495.0)));
    b.set_pressed(true);
    assert_eq!(b.scale(), 0.9);
    b.set_pressed(false);
    assert_eq!(b.scale(), 1.0);
}
