use std::path::Path;

use crate::{
    app::mockup::MockupApp,
    app::snapshot::FrameSnapshot,
    foundation::core::Point,
    foundation::error::{CardflowError, CardflowResult},
};

/// One recorded input, in design-space coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    Wheel { delta_y: f64 },
    /// Advance `count` frames.
    Tick { count: u64 },
    /// Same as tapping the reset button.
    Reset,
    /// Record a [`FrameSnapshot`] of the current state.
    Snapshot,
}

/// An ordered list of inputs replayed against a [`MockupApp`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InputScript {
    /// Also snapshot after every `tick` event.
    #[serde(default)]
    pub capture_every_tick: bool,
    pub events: Vec<InputEvent>,
}

impl InputScript {
    pub fn from_json_str(s: &str) -> CardflowResult<Self> {
        let script: Self = serde_json::from_str(s)?;
        script.validate()?;
        Ok(script)
    }

    pub fn from_path(path: impl AsRef<Path>) -> CardflowResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            CardflowError::script(format!("read script '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&s)
    }

    /// Reject events that cannot be replayed.
    pub fn validate(&self) -> CardflowResult<()> {
        for (idx, event) in self.events.iter().enumerate() {
            match event {
                InputEvent::Tick { count: 0 } => {
                    return Err(CardflowError::script(format!(
                        "event {idx}: tick count must be at least 1"
                    )));
                }
                InputEvent::PointerDown { x, y }
                | InputEvent::PointerMove { x, y }
                | InputEvent::PointerUp { x, y }
                    if !(x.is_finite() && y.is_finite()) =>
                {
                    return Err(CardflowError::script(format!(
                        "event {idx}: pointer position must be finite"
                    )));
                }
                InputEvent::Wheel { delta_y } if !delta_y.is_finite() => {
                    return Err(CardflowError::script(format!(
                        "event {idx}: wheel delta must be finite"
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Replay `script` against `app` and return the snapshots it asked for.
///
/// The script is validated up front, so an invalid script leaves `app` untouched.
#[tracing::instrument(skip_all, fields(events = script.events.len()))]
pub fn run_script(app: &mut MockupApp, script: &InputScript) -> CardflowResult<Vec<FrameSnapshot>> {
    script.validate()?;

    let mut snapshots = Vec::new();
    for event in &script.events {
        match *event {
            InputEvent::PointerDown { x, y } => app.pointer_down(Point::new(x, y)),
            InputEvent::PointerMove { x, y } => app.pointer_move(Point::new(x, y)),
            InputEvent::PointerUp { x, y } => app.pointer_up(Point::new(x, y)),
            InputEvent::Wheel { delta_y } => app.wheel(delta_y),
            InputEvent::Tick { count } => {
                app.advance(count);
                if script.capture_every_tick {
                    snapshots.push(FrameSnapshot::capture(app));
                }
            }
            InputEvent::Reset => app.reset(),
            InputEvent::Snapshot => snapshots.push(FrameSnapshot::capture(app)),
        }
    }

    tracing::debug!(
        frame = app.frame().0,
        snapshots = snapshots.len(),
        "script finished"
    );
    Ok(snapshots)
}

#[cfg(test)]
#[path = "../tests/unit/script.rs"]
mod tests;
