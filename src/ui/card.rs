use crate::{
    animation::oscillator::{Oscillator, OscillatorTuning},
    clock::ticker::{TickControl, TickHandle, Ticker},
};

/// Hover shrink and tap shake for one card.
#[derive(Clone, Debug)]
pub struct CardFx {
    hovered: bool,
    hover_scale: f64,
    shake: Oscillator,
    shake_handle: Option<TickHandle>,
}

impl CardFx {
    pub fn new(shake: OscillatorTuning, hover_scale: f64) -> Self {
        Self {
            hovered: false,
            hover_scale,
            shake: Oscillator::new(shake),
            shake_handle: None,
        }
    }

    /// Start (or restart) the tap shake.
    ///
    /// A shake already in progress is cancelled first so taps never stack.
    pub fn start_shake<S, F>(&mut self, ticker: &mut Ticker<S>, select: F)
    where
        S: 'static,
        F: Fn(&mut S) -> &mut Self + 'static,
    {
        if let Some(old) = self.shake_handle.take() {
            ticker.unregister(old);
        }
        self.shake.reset();
        self.shake_handle = Some(ticker.register(move |s: &mut S| select(s).tick_shake()));
    }

    /// Shake frame callback; removes itself once the shake has run its course.
    pub fn tick_shake(&mut self) -> TickControl {
        let ctl = self.shake.advance();
        if ctl == TickControl::Remove {
            self.shake_handle = None;
        }
        ctl
    }

    /// Cancel any shake and clear hover.
    pub fn reset<S>(&mut self, ticker: &mut Ticker<S>) {
        if let Some(handle) = self.shake_handle.take() {
            ticker.unregister(handle);
        }
        self.shake.reset();
        self.hovered = false;
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_shaking(&self) -> bool {
        self.shake_handle.is_some()
    }

    /// Rotation in radians about the card center.
    pub fn rotation(&self) -> f64 {
        self.shake.value()
    }

    /// Uniform scale about the card center.
    pub fn scale(&self) -> f64 {
        if self.hovered { self.hover_scale } else { 1.0 }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/card.rs"]
mod tests;
