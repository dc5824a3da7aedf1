use crate::{
    animation::oscillator::{Oscillator, OscillatorTuning},
    clock::ticker::{TickControl, TickHandle, Ticker},
    foundation::core::{Point, Rect},
};

/// Call-to-action button unlocked by the slider.
///
/// Once active it wobbles continuously until reset.
#[derive(Clone, Debug)]
pub struct CtaButton {
    rect: Rect,
    active: bool,
    pressed: bool,
    press_scale: f64,
    wobble: Oscillator,
    wobble_handle: Option<TickHandle>,
}

impl CtaButton {
    pub fn new(rect: Rect, wobble: OscillatorTuning, press_scale: f64) -> Self {
        Self {
            rect,
            active: false,
            pressed: false,
            press_scale,
            wobble: Oscillator::new(wobble),
            wobble_handle: None,
        }
    }

    /// Light the button up and start the wobble. No-op when already active.
    pub fn activate<S: 'static>(
        &mut self,
        ticker: &mut Ticker<S>,
        select: fn(&mut S) -> &mut Self,
    ) {
        if self.active {
            return;
        }
        self.active = true;
        if let Some(old) = self.wobble_handle.take() {
            ticker.unregister(old);
        }
        self.wobble.reset();
        self.wobble_handle = Some(ticker.register(move |s: &mut S| select(s).tick_wobble()));
        tracing::debug!("cta activated");
    }

    /// Wobble frame callback.
    pub fn tick_wobble(&mut self) -> TickControl {
        let ctl = self.wobble.advance();
        if ctl == TickControl::Remove {
            self.wobble_handle = None;
        }
        ctl
    }

    /// Back to inactive and still, cancelling the wobble.
    pub fn reset<S>(&mut self, ticker: &mut Ticker<S>) {
        if let Some(handle) = self.wobble_handle.take() {
            ticker.unregister(handle);
        }
        self.active = false;
        self.pressed = false;
        self.wobble.reset();
    }

    pub fn hit(&self, p: Point) -> bool {
        self.rect.contains(p)
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Rotation in radians about the button center.
    pub fn rotation(&self) -> f64 {
        if self.active { self.wobble.value() } else { 0.0 }
    }

    /// Uniform scale about the button center.
    pub fn scale(&self) -> f64 {
        if self.pressed { self.press_scale } else { 1.0 }
    }

    pub fn wobble_handle(&self) -> Option<TickHandle> {
        self.wobble_handle
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/cta.rs"]
mod tests;
