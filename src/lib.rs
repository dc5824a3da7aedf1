//! Cardflow models two small touch-screen mockups as deterministic, frame-driven state.
//!
//! The first screen is a slider-gated call to action: dragging the slider handle unlocks a
//! wobbling CTA button. Tapping it switches to the second screen, a vertically scrolling list
//! of cards that slide in with a staggered entrance and scroll with inertia and elastic bounds.
//!
//! # Model overview
//!
//! 1. **Tick**: a [`Ticker`] owns every per-frame callback. Components register on demand and
//!    deregister themselves by returning [`TickControl::Remove`].
//! 2. **Input**: [`MockupApp`] routes design-space pointer and wheel events to the visible screen.
//! 3. **Observe**: [`FrameSnapshot`] captures state for tests and tooling; [`DisplayList`]
//!    turns it into renderer-facing draw ops.
//! 4. **Replay** (optional): [`InputScript`] drives a session from JSON via [`run_script`].
//!
//! Everything is in a fixed 400x850 design space. Rasterization, window scaling and font
//! loading are left to the host.
#![forbid(unsafe_code)]

mod animation;
mod app;
mod clock;
mod config;
mod foundation;
mod render;
mod script;
mod scroll;
mod ui;

pub use animation::entrance::{
    EntranceItem, EntrancePhase, EntranceTuning, StaggeredEntranceAnimator,
};
pub use animation::oscillator::{Oscillator, OscillatorTuning, PhaseOrder};
pub use app::mockup::{Mockup, MockupApp, Screen};
pub use app::snapshot::{CardSnapshot, CtaSnapshot, FrameSnapshot, SliderSnapshot};
pub use clock::ticker::{TickControl, TickHandle, Ticker};
pub use config::{MockupConfig, MotionTuning, Preset};
pub use foundation::core::{
    Affine, FrameIndex, Point, Rect, Rgb8, RoundedRect, Size, Transform2D, Vec2,
};
pub use foundation::error::{CardflowError, CardflowResult};
pub use render::display::{DisplayList, DrawOp, TextAnchor};
pub use script::{InputEvent, InputScript, run_script};
pub use scroll::bounds::{ContentMetrics, ScrollBounds};
pub use scroll::inertial::{InertialScrollController, ScrollState, ScrollTuning};
pub use ui::card::CardFx;
pub use ui::cta::CtaButton;
pub use ui::layout::{LayoutConfig, MockupLayout};
pub use ui::palette::{HueRamp, HueStop, Palette};
pub use ui::slider::{SliderEvent, SliderGate};
