use crate::foundation::core::FrameIndex;

/// Identifier of a frame callback registration.
///
/// Handles are allocated monotonically and never reused by the same [`Ticker`], so
/// unregistering a handle whose callback already removed itself is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TickHandle(u64);

/// What a frame callback wants after running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickControl {
    /// Keep the callback registered for the next frame.
    Continue,
    /// Remove the callback; it is never invoked again.
    Remove,
}

type FrameCallback<S> = Box<dyn FnMut(&mut S) -> TickControl>;

struct Registration<S> {
    handle: TickHandle,
    callback: FrameCallback<S>,
}

/// Per-frame clock.
///
/// Callbacks run synchronously, once per [`Ticker::tick`], in registration order, and receive
/// the shared state by mutable reference. A callback cannot touch the registry while it runs;
/// it removes itself by returning [`TickControl::Remove`], and owners cancel it from outside
/// with [`Ticker::unregister`].
pub struct Ticker<S> {
    entries: Vec<Registration<S>>,
    next_id: u64,
    frame: FrameIndex,
}

impl<S> Default for Ticker<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> std::fmt::Debug for Ticker<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ticker")
            .field("frame", &self.frame)
            .field(
                "handles",
                &self.entries.iter().map(|r| r.handle).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<S> Ticker<S> {
    /// Create an empty ticker at frame 0.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            frame: FrameIndex(0),
        }
    }

    /// Register a callback to run on every subsequent frame.
    pub fn register(
        &mut self,
        callback: impl FnMut(&mut S) -> TickControl + 'static,
    ) -> TickHandle {
        let handle = TickHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Registration {
            handle,
            callback: Box::new(callback),
        });
        tracing::trace!(?handle, live = self.entries.len(), "frame callback registered");
        handle
    }

    /// Remove a registration. Returns `false` when the handle is not live.
    pub fn unregister(&mut self, handle: TickHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|r| r.handle != handle);
        let removed = self.entries.len() != before;
        if removed {
            tracing::trace!(?handle, live = self.entries.len(), "frame callback unregistered");
        }
        removed
    }

    /// Return `true` while `handle` is registered.
    pub fn is_registered(&self, handle: TickHandle) -> bool {
        self.entries.iter().any(|r| r.handle == handle)
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of frames ticked so far.
    pub fn frame(&self) -> FrameIndex {
        self.frame
    }

    /// Run every live callback once, in registration order, then advance the frame counter.
    pub fn tick(&mut self, state: &mut S) {
        self.entries.retain_mut(|r| {
            let keep = (r.callback)(state) == TickControl::Continue;
            if !keep {
                tracing::trace!(handle = ?r.handle, "frame callback removed itself");
            }
            keep
        });
        self.frame = self.frame.next();
    }

    /// Tick `frames` times.
    pub fn advance(&mut self, state: &mut S, frames: u64) {
        for _ in 0..frames {
            self.tick(state);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clock/ticker.rs"]
mod tests;
