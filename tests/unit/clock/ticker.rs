use super::*;

#[test]
fn callbacks_run_in_registration_order() {
    let mut ticker = Ticker::<Vec<u32>>::new();
    ticker.register(|log: &mut Vec<u32>| {
        log.push(1);
        TickControl::Continue
    });
    ticker.register(|log: &mut Vec<u32>| {
        log.push(2);
        TickControl::Continue
    });

    let mut log = Vec::new();
    ticker.tick(&mut log);
    ticker.tick(&mut log);
    assert_eq!(log, vec![1, 2, 1, 2]);
    assert_eq!(ticker.frame(), FrameIndex(2));
}

#[test]
fn returning_remove_deregisters_after_that_frame() {
    let mut ticker = Ticker::<u32>::new();
    let h = ticker.register(|n: &mut u32| {
        *n += 1;
        if *n >= 3 {
            TickControl::Remove
        } else {
            TickControl::Continue
        }
    });

    let mut n = 0;
    ticker.advance(&mut n, 10);
    assert_eq!(n, 3);
    assert!(!ticker.is_registered(h));
    assert!(ticker.is_empty());
    assert_eq!(ticker.frame(), FrameIndex(10));
}

#[test]
fn unregister_reports_liveness_and_stale_handles_are_noops() {
    let mut ticker = Ticker::<()>::new();
    let a = ticker.register(|_: &mut ()| TickControl::Continue);
    let b = ticker.register(|_: &mut ()| TickControl::Remove);

    ticker.tick(&mut ());
    assert!(!ticker.unregister(b));
    assert!(ticker.unregister(a));
    assert!(!ticker.unregister(a));
    assert_eq!(ticker.len(), 0);
}

#[test]
fn handles_are_never_reused() {
    let mut ticker = Ticker::<()>::new();
    let a = ticker.register(|_: &mut ()| TickControl::Continue);
    ticker.unregister(a);
    let b = ticker.register(|_: &mut ()| TickControl::Continue);
    assert_ne!(a, b);
    assert!(!ticker.is_registered(a));
    assert!(ticker.is_registered(b));
}
