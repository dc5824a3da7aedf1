use crate::{
    clock::ticker::{TickControl, TickHandle, Ticker},
    foundation::error::{CardflowError, CardflowResult},
    foundation::math::approach,
};

/// Constants shaping the staggered slide-in.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EntranceTuning {
    /// Fraction of the remaining distance covered per frame, in `(0, 1)`.
    pub easing: f64,
    /// Opacity gained per animating frame.
    pub opacity_step: f64,
    /// Distance under which an item snaps to its target and finishes.
    pub threshold: f64,
    /// Start delay added per item index, in frames.
    pub frame_step: u64,
}

impl Default for EntranceTuning {
    fn default() -> Self {
        Self {
            easing: 0.2,
            opacity_step: 0.08,
            threshold: 0.5,
            frame_step: 8,
        }
    }
}

impl EntranceTuning {
    /// Slightly slower variant used by the standalone scroll test screen.
    pub fn scroll_test() -> Self {
        Self {
            easing: 0.18,
            opacity_step: 0.06,
            ..Self::default()
        }
    }

    /// Check every constant is inside its domain.
    ///
    /// These domains are what guarantees every item finishes in a finite number of frames.
    pub fn validate(&self) -> CardflowResult<()> {
        if !(self.easing > 0.0 && self.easing < 1.0) {
            return Err(CardflowError::validation("entrance easing must be in (0, 1)"));
        }
        if !(self.opacity_step > 0.0 && self.opacity_step.is_finite()) {
            return Err(CardflowError::validation(
                "entrance opacity_step must be positive",
            ));
        }
        if !(self.threshold > 0.0 && self.threshold.is_finite()) {
            return Err(CardflowError::validation(
                "entrance threshold must be positive",
            ));
        }
        Ok(())
    }

    /// Start delay of the item at `index`, or a validation error when it overflows a frame count.
    pub fn delay_for(&self, index: usize) -> CardflowResult<u64> {
        u64::try_from(index)
            .ok()
            .and_then(|i| i.checked_mul(self.frame_step))
            .ok_or_else(|| {
                CardflowError::validation(format!(
                    "entrance frame_step {} overflows the delay of item {index}",
                    self.frame_step
                ))
            })
    }
}

/// Lifecycle of one entrance item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrancePhase {
    /// Waiting out its start delay.
    Pending,
    /// Easing toward the target.
    Animating,
    /// Snapped to target; terminal.
    Done,
}

/// Per-item slide-in state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EntranceItem {
    start_position: f64,
    target_position: f64,
    current_position: f64,
    opacity: f64,
    start_delay: u64,
    elapsed_frames: u64,
    phase: EntrancePhase,
}

impl EntranceItem {
    /// New item parked at `start_position`, fully transparent.
    pub fn new(start_position: f64, target_position: f64, start_delay: u64) -> Self {
        Self {
            start_position,
            target_position,
            current_position: start_position,
            opacity: 0.0,
            start_delay,
            elapsed_frames: 0,
            phase: EntrancePhase::Pending,
        }
    }

    /// Back to the initial pending state.
    pub fn restart(&mut self) {
        *self = Self::new(self.start_position, self.target_position, self.start_delay);
    }

    /// Advance one frame and return the resulting phase.
    ///
    /// The frame on which `elapsed_frames` reaches `start_delay` is the first that moves.
    pub fn step(&mut self, tuning: &EntranceTuning) -> EntrancePhase {
        if self.phase == EntrancePhase::Done {
            return self.phase;
        }
        self.elapsed_frames = self.elapsed_frames.saturating_add(1);
        if self.elapsed_frames < self.start_delay {
            return self.phase;
        }

        self.phase = EntrancePhase::Animating;
        self.current_position = approach(self.current_position, self.target_position, tuning.easing);
        self.opacity = (self.opacity + tuning.opacity_step).min(1.0);

        if (self.current_position - self.target_position).abs() < tuning.threshold {
            self.current_position = self.target_position;
            self.opacity = 1.0;
            self.phase = EntrancePhase::Done;
        }
        self.phase
    }

    /// Where the renderer should place the item now.
    pub fn current_position(&self) -> f64 {
        self.current_position
    }

    /// Resting position.
    pub fn target_position(&self) -> f64 {
        self.target_position
    }

    /// Off-screen starting position.
    pub fn start_position(&self) -> f64 {
        self.start_position
    }

    /// Opacity in `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Frames to wait before moving.
    pub fn start_delay(&self) -> u64 {
        self.start_delay
    }

    /// Frames ticked since activation.
    pub fn elapsed_frames(&self) -> u64 {
        self.elapsed_frames
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> EntrancePhase {
        self.phase
    }
}

/// Drives an ordered collection of items into their resting layout, staggered by index.
///
/// The animator owns a single frame callback for all of its items. Items that finish drop out
/// of the active set; once it is empty the callback removes itself from the ticker.
#[derive(Clone, Debug)]
pub struct StaggeredEntranceAnimator {
    items: Vec<EntranceItem>,
    active: Vec<usize>,
    tuning: EntranceTuning,
    handle: Option<TickHandle>,
}

impl StaggeredEntranceAnimator {
    /// One item per target, all starting at `start_position`, item `i` delayed by
    /// `i * frame_step` frames.
    pub fn new(
        start_position: f64,
        targets: impl IntoIterator<Item = f64>,
        tuning: EntranceTuning,
    ) -> CardflowResult<Self> {
        tuning.validate()?;
        let items = targets
            .into_iter()
            .enumerate()
            .map(|(i, target)| {
                tuning
                    .delay_for(i)
                    .map(|delay| EntranceItem::new(start_position, target, delay))
            })
            .collect::<CardflowResult<Vec<_>>>()?;
        Ok(Self {
            items,
            active: Vec::new(),
            tuning,
            handle: None,
        })
    }

    /// Restart the entrance from scratch and register its frame callback.
    ///
    /// Any earlier registration is removed first, so repeated activation never stacks
    /// callbacks. `select` projects the ticker state onto this animator.
    pub fn activate<S: 'static>(
        &mut self,
        ticker: &mut Ticker<S>,
        select: fn(&mut S) -> &mut Self,
    ) -> TickHandle {
        self.clear_registration(ticker);
        self.restore();
        self.active = (0..self.items.len()).collect();

        let handle = ticker.register(move |state: &mut S| select(state).tick());
        self.handle = Some(handle);
        tracing::debug!(items = self.items.len(), ?handle, "entrance activated");
        handle
    }

    /// Cancel any running entrance and put every item back to pending.
    pub fn reset<S>(&mut self, ticker: &mut Ticker<S>) {
        self.clear_registration(ticker);
        self.restore();
        tracing::debug!(items = self.items.len(), "entrance reset");
    }

    /// Step every active item once.
    ///
    /// Returns [`TickControl::Remove`] once every item is done.
    pub fn tick(&mut self) -> TickControl {
        let tuning = self.tuning;
        let items = &mut self.items;
        self.active.retain(|&idx| {
            let done = items[idx].step(&tuning) == EntrancePhase::Done;
            if done {
                tracing::trace!(item = idx, "entrance item done");
            }
            !done
        });

        if self.active.is_empty() {
            if let Some(handle) = self.handle.take() {
                tracing::debug!(?handle, "entrance complete");
            }
            TickControl::Remove
        } else {
            TickControl::Continue
        }
    }

    fn clear_registration<S>(&mut self, ticker: &mut Ticker<S>) {
        if let Some(handle) = self.handle.take() {
            ticker.unregister(handle);
        }
    }

    fn restore(&mut self) {
        self.active.clear();
        for item in &mut self.items {
            item.restart();
        }
    }

    /// All items in index order.
    pub fn items(&self) -> &[EntranceItem] {
        &self.items
    }

    /// Item at `idx`.
    pub fn item(&self, idx: usize) -> Option<&EntranceItem> {
        self.items.get(idx)
    }

    /// Live frame callback registration, if any.
    pub fn handle(&self) -> Option<TickHandle> {
        self.handle
    }

    /// Return `true` while the frame callback is registered.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Return `true` when every item is done.
    pub fn is_complete(&self) -> bool {
        self.items.iter().all(|i| i.phase() == EntrancePhase::Done)
    }

    /// Tuning in effect.
    pub fn tuning(&self) -> EntranceTuning {
        self.tuning
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/entrance.rs"]
mod tests;
