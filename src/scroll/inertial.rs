use crate::{
    foundation::error::{CardflowError, CardflowResult},
    scroll::bounds::ScrollBounds,
};

/// Constants shaping inertial scrolling.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScrollTuning {
    /// Per-frame velocity multiplier, in `[0, 1)`.
    pub decay: f64,
    /// Fraction of overshoot removed per frame past a bound, in `(0, 1]`.
    pub correction: f64,
    /// Offset change per unit of wheel delta.
    pub wheel_gain: f64,
    /// Velocity injected per unit of wheel delta.
    pub wheel_velocity_gain: f64,
}

impl Default for ScrollTuning {
    fn default() -> Self {
        Self {
            decay: 0.9,
            correction: 0.3,
            wheel_gain: 0.6,
            wheel_velocity_gain: 0.3,
        }
    }
}

impl ScrollTuning {
    /// Softer wall, stronger wheel: the standalone scroll test screen.
    pub fn scroll_test() -> Self {
        Self {
            decay: 0.9,
            correction: 0.25,
            wheel_gain: 1.0,
            wheel_velocity_gain: 0.7,
        }
    }

    /// Check every constant is inside its domain.
    pub fn validate(&self) -> CardflowResult<()> {
        if !(0.0..1.0).contains(&self.decay) {
            return Err(CardflowError::validation("scroll decay must be in [0, 1)"));
        }
        if !(self.correction > 0.0 && self.correction <= 1.0) {
            return Err(CardflowError::validation(
                "scroll correction must be in (0, 1]",
            ));
        }
        if !self.wheel_gain.is_finite() || !self.wheel_velocity_gain.is_finite() {
            return Err(CardflowError::validation("wheel gains must be finite"));
        }
        Ok(())
    }
}

/// Mutable scroll state.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollState {
    /// Current pan position along the scroll axis.
    pub offset: f64,
    /// Frame-to-frame offset delta carried as momentum.
    pub velocity: f64,
    /// A pointer drag is in progress.
    pub is_dragging: bool,
    /// Last pointer coordinate seen during the drag.
    pub last_pointer_y: f64,
}

/// Turns drag and wheel input into a smoothly moving, bounds-respecting offset.
///
/// Input handlers update offset and velocity synchronously; [`Self::on_tick`] is the single
/// integrator that applies momentum, decay and the elastic wall.
#[derive(Clone, Debug)]
pub struct InertialScrollController {
    state: ScrollState,
    bounds: ScrollBounds,
    tuning: ScrollTuning,
}

impl InertialScrollController {
    /// Create a controller resting at `bounds.max_offset`.
    pub fn new(bounds: ScrollBounds, tuning: ScrollTuning) -> CardflowResult<Self> {
        tuning.validate()?;
        Ok(Self {
            state: ScrollState {
                offset: bounds.max_offset,
                ..ScrollState::default()
            },
            bounds,
            tuning,
        })
    }

    /// Begin a pointer drag at `pointer_y`, killing any momentum.
    pub fn on_drag_start(&mut self, pointer_y: f64) {
        self.state.is_dragging = true;
        self.state.velocity = 0.0;
        self.state.last_pointer_y = pointer_y;
    }

    /// Follow the pointer. Ignored unless a drag is in progress.
    pub fn on_drag_move(&mut self, pointer_y: f64) {
        if !self.state.is_dragging {
            return;
        }
        let delta = pointer_y - self.state.last_pointer_y;
        self.state.offset += delta;
        self.state.velocity = delta;
        self.state.last_pointer_y = pointer_y;
    }

    /// Release the drag; the last move delta remains as fling velocity.
    pub fn on_drag_end(&mut self) {
        self.state.is_dragging = false;
    }

    /// Apply a wheel delta immediately, regardless of drag state.
    pub fn on_wheel(&mut self, delta_y: f64) {
        self.state.offset -= delta_y * self.tuning.wheel_gain;
        self.state.velocity = -delta_y * self.tuning.wheel_velocity_gain;
    }

    /// Advance one frame: momentum, decay, then at most one bound correction.
    pub fn on_tick(&mut self) {
        let s = &mut self.state;
        if !s.is_dragging {
            s.offset += s.velocity;
        }
        s.velocity *= self.tuning.decay;

        let ScrollBounds {
            min_offset,
            max_offset,
        } = self.bounds;
        if s.offset > max_offset {
            s.velocity = 0.0;
            s.offset += (max_offset - s.offset) * self.tuning.correction;
        } else if s.offset < min_offset {
            s.velocity = 0.0;
            s.offset += (min_offset - s.offset) * self.tuning.correction;
        }
    }

    /// Return to rest: offset at `max_offset`, no momentum, no drag.
    pub fn reset(&mut self) {
        self.state = ScrollState {
            offset: self.bounds.max_offset,
            ..ScrollState::default()
        };
    }

    /// Move the offset directly, keeping velocity and drag state.
    pub fn set_offset(&mut self, offset: f64) {
        self.state.offset = offset;
    }

    /// In bounds, not dragging, and velocity under `epsilon`.
    pub fn is_settled(&self, epsilon: f64) -> bool {
        !self.state.is_dragging
            && self.state.velocity.abs() < epsilon
            && self.bounds.contains(self.state.offset)
    }

    /// Current offset.
    pub fn offset(&self) -> f64 {
        self.state.offset
    }

    /// Current velocity.
    pub fn velocity(&self) -> f64 {
        self.state.velocity
    }

    /// Return `true` while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    /// Full state snapshot.
    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Bounds the controller clamps against.
    pub fn bounds(&self) -> ScrollBounds {
        self.bounds
    }

    /// Tuning in effect.
    pub fn tuning(&self) -> ScrollTuning {
        self.tuning
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/inertial.rs"]
mod tests;
