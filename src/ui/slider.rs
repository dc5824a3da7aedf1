use crate::{
    animation::oscillator::{Oscillator, OscillatorTuning},
    clock::ticker::TickControl,
    foundation::core::{Point, Rgb8},
    ui::layout::MockupLayout,
    ui::palette::HueRamp,
};

/// Emitted by [`SliderGate::on_pointer_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderEvent {
    /// The handle moved for the first time since the last reset.
    Unlocked,
}

/// Horizontal drag handle gating the call to action.
///
/// Until first grabbed, the handle shakes gently around the track center. While dragging, its
/// fill follows a hue ramp by progress along the track.
#[derive(Clone, Debug)]
pub struct SliderGate {
    min_x: f64,
    max_x: f64,
    rest: Point,
    radius: f64,
    handle_x: f64,
    grab_offset_x: f64,
    dragging: bool,
    unlocked: bool,
    idle: bool,
    idle_shake: Oscillator,
    rest_color: Rgb8,
    color: Rgb8,
    ramp: HueRamp,
}

impl SliderGate {
    pub fn new(
        layout: &MockupLayout,
        ramp: HueRamp,
        rest_color: Rgb8,
        idle_shake: OscillatorTuning,
    ) -> Self {
        let (min_x, max_x) = layout.slider_range();
        let rest = layout.handle_rest();
        Self {
            min_x,
            max_x,
            rest,
            radius: layout.handle_radius,
            handle_x: rest.x,
            grab_offset_x: 0.0,
            dragging: false,
            unlocked: false,
            idle: true,
            idle_shake: Oscillator::new(idle_shake),
            rest_color,
            color: rest_color,
            ramp,
        }
    }

    /// Return `true` when `p` lies on the handle disc.
    pub fn hit(&self, p: Point) -> bool {
        (p - self.handle_center()).hypot() <= self.radius
    }

    /// Grab the handle if `p` hits it. Returns whether a drag started.
    pub fn on_pointer_down(&mut self, p: Point) -> bool {
        if !self.hit(p) {
            return false;
        }
        self.dragging = true;
        self.grab_offset_x = p.x - self.handle_x;
        self.idle = false;
        true
    }

    /// Follow the pointer while dragging, clamped to the track.
    pub fn on_pointer_move(&mut self, pointer_x: f64) -> Option<SliderEvent> {
        if !self.dragging {
            return None;
        }
        self.handle_x = (pointer_x - self.grab_offset_x).clamp(self.min_x, self.max_x);
        self.color = self.ramp.sample(self.progress());
        if self.unlocked {
            return None;
        }
        self.unlocked = true;
        tracing::debug!(handle_x = self.handle_x, "slider unlocked");
        Some(SliderEvent::Unlocked)
    }

    /// Release the handle where it is.
    pub fn on_pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Idle shake frame callback.
    ///
    /// Stays registered for the lifetime of the screen; it does nothing once the handle has been
    /// grabbed or while it is held.
    pub fn tick_idle(&mut self) -> TickControl {
        if !self.idle || self.dragging {
            return TickControl::Continue;
        }
        self.idle_shake.advance();
        self.handle_x = self.rest.x + self.idle_shake.value();
        self.color = self.rest_color;
        TickControl::Continue
    }

    /// Back to the centered, idle, locked state.
    pub fn reset(&mut self) {
        self.handle_x = self.rest.x;
        self.grab_offset_x = 0.0;
        self.dragging = false;
        self.unlocked = false;
        self.idle = true;
        self.idle_shake.reset();
        self.color = self.rest_color;
    }

    /// Handle position along the track in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        ((self.handle_x - self.min_x) / (self.max_x - self.min_x)).clamp(0.0, 1.0)
    }

    pub fn handle_center(&self) -> Point {
        Point::new(self.handle_x, self.rest.y)
    }

    pub fn handle_x(&self) -> f64 {
        self.handle_x
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Rgb8 {
        self.color
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Return `true` once the handle has moved since the last reset.
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn is_idle(&self) -> bool {
        self.idle
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/slider.rs"]
mod tests;
