use super::*;
use crate::animation::oscillator::PhaseOrder;

fn card() -> CardFx {
    CardFx::new(
        OscillatorTuning {
            step: 0.3,
            amplitude: 0.05,
            limit: Some(6.0),
            order: PhaseOrder::AdvanceFirst,
        },
        0.9,
    )
}

#[test]
fn hover_shrinks() {
    let mut c = card();
    assert_eq!(c.scale(), 1.0);
    c.set_hovered(true);
    assert_eq!(c.scale(), 0.9);
}

#[test]
fn shake_runs_then_deregisters() {
    let mut cards = vec![card(), card()];
    let mut ticker = Ticker::<Vec<CardFx>>::new();
    let mut target = card();
    target.start_shake(&mut ticker, |v: &mut Vec<CardFx>| &mut v[1]);
    cards[1] = target;

    ticker.tick(&mut cards);
    assert!(cards[1].rotation() != 0.0);
    assert_eq!(cards[0].rotation(), 0.0);

    ticker.advance(&mut cards, 30);
    assert!(ticker.is_empty());
    assert!(!cards[1].is_shaking());
    assert_eq!(cards[1].rotation(), 0.0);
}

#[test]
fn retap_restarts_instead_of_stacking() {
    let mut c = card();
    let mut ticker = Ticker::<CardFx>::new();
    c.start_shake(&mut ticker, |c: &mut CardFx| c);
    ticker.advance(&mut c, 5);
    c.start_shake(&mut ticker, |c: &mut CardFx| c);
    assert_eq!(ticker.len(), 1);
    ticker.tick(&mut c);
    assert!((c.rotation() - 0.3_f64.sin() * 0.05).abs() < 1e-12);
}

#[test]
fn reset_cancels_shake_and_hover() {
    let mut c = card();
    let mut ticker = Ticker::<CardFx>::new();
    c.set_hovered(true);
    c.start_shake(&mut ticker, |c: &mut CardFx| c);
    ticker.advance(&mut c, 2);
    c.reset(&mut ticker);
    assert!(ticker.is_empty());
    assert!(!c.is_hovered());
    assert_eq!(c.rotation(), 0.0);
}
