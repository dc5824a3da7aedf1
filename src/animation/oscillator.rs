use crate::{
    clock::ticker::TickControl,
    foundation::error::{CardflowError, CardflowResult},
};

/// Sine oscillation parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OscillatorTuning {
    /// Phase advance per frame, in radians.
    pub step: f64,
    /// Peak output value.
    pub amplitude: f64,
    /// Phase past which the oscillation stops and settles at zero. `None` runs forever.
    #[serde(default)]
    pub limit: Option<f64>,
    /// Whether a frame samples before or after advancing the phase.
    #[serde(default)]
    pub order: PhaseOrder,
}

/// Order of phase advance and sampling within one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseOrder {
    /// `phase += step`, then sample: the first frame shows `sin(step)`.
    #[default]
    AdvanceFirst,
    /// Sample, then `phase += step`: the first frame shows `sin(0)`.
    SampleFirst,
}

impl OscillatorTuning {
    /// Check the phase actually advances and every value is finite.
    pub fn validate(&self, what: &str) -> CardflowResult<()> {
        if !(self.step > 0.0 && self.step.is_finite()) {
            return Err(CardflowError::validation(format!(
                "{what}: step must be positive"
            )));
        }
        if !self.amplitude.is_finite() {
            return Err(CardflowError::validation(format!(
                "{what}: amplitude must be finite"
            )));
        }
        if self.limit.is_some_and(|l| !(l > 0.0 && l.is_finite())) {
            return Err(CardflowError::validation(format!(
                "{what}: limit must be positive"
            )));
        }
        Ok(())
    }
}

/// `amplitude * sin(phase)` advanced once per frame.
///
/// Used for the idle slider shake, the CTA wobble and the card tap shake.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillator {
    tuning: OscillatorTuning,
    phase: f64,
    value: f64,
    finished: bool,
}

impl Oscillator {
    /// New oscillator at phase 0, output 0.
    pub fn new(tuning: OscillatorTuning) -> Self {
        Self {
            tuning,
            phase: 0.0,
            value: 0.0,
            finished: false,
        }
    }

    /// Advance one frame.
    ///
    /// Once the phase passes the limit the output snaps to zero and this returns
    /// [`TickControl::Remove`] from then on.
    pub fn advance(&mut self) -> TickControl {
        if self.finished {
            return TickControl::Remove;
        }
        let sampled = match self.tuning.order {
            PhaseOrder::AdvanceFirst => self.phase + self.tuning.step,
            PhaseOrder::SampleFirst => self.phase,
        };
        self.phase += self.tuning.step;
        if self.tuning.limit.is_some_and(|limit| self.phase > limit) {
            self.value = 0.0;
            self.finished = true;
            return TickControl::Remove;
        }
        self.value = sampled.sin() * self.tuning.amplitude;
        TickControl::Continue
    }

    /// Back to phase 0 with zero output.
    pub fn reset(&mut self) {
        *self = Self::new(self.tuning);
    }

    /// Latest output.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Accumulated phase.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Return `true` once the limit was passed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/oscillator.rs"]
mod tests;
