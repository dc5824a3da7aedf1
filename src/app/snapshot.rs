use crate::{
    animation::entrance::EntrancePhase,
    app::mockup::{MockupApp, Screen},
    foundation::core::{FrameIndex, Rgb8},
    scroll::inertial::ScrollState,
};

/// Slider state as seen by a renderer or a test.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SliderSnapshot {
    pub handle_x: f64,
    pub color: Rgb8,
    pub dragging: bool,
    pub unlocked: bool,
}

/// CTA button state.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CtaSnapshot {
    pub active: bool,
    pub pressed: bool,
    pub rotation: f64,
    pub scale: f64,
}

/// One card's animated properties.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardSnapshot {
    /// Center x inside the scroll container.
    pub x: f64,
    /// Center y in design space, after scrolling.
    pub y: f64,
    pub opacity: f64,
    pub phase: EntrancePhase,
    pub rotation: f64,
    pub scale: f64,
}

/// Serializable view of the whole app after a frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameSnapshot {
    pub frame: FrameIndex,
    pub screen: Screen,
    pub scroll: ScrollState,
    pub slider: SliderSnapshot,
    pub cta: CtaSnapshot,
    pub cards: Vec<CardSnapshot>,
    /// Registered frame callbacks; stays bounded across resets.
    pub live_callbacks: usize,
}

impl FrameSnapshot {
    /// Capture the current state of `app`.
    pub fn capture(app: &MockupApp) -> Self {
        let m = app.mockup();
        let slider = m.slider();
        let cta = m.cta();
        let cards = m
            .entrance()
            .items()
            .iter()
            .zip(m.cards())
            .enumerate()
            .map(|(idx, (item, fx))| CardSnapshot {
                x: item.current_position(),
                y: m.card_center(idx).y,
                opacity: item.opacity(),
                phase: item.phase(),
                rotation: fx.rotation(),
                scale: fx.scale(),
            })
            .collect();

        Self {
            frame: app.frame(),
            screen: m.screen(),
            scroll: m.scroll().state(),
            slider: SliderSnapshot {
                handle_x: slider.handle_x(),
                color: slider.color(),
                dragging: slider.is_dragging(),
                unlocked: slider.is_unlocked(),
            },
            cta: CtaSnapshot {
                active: cta.is_active(),
                pressed: cta.is_pressed(),
                rotation: cta.rotation(),
                scale: cta.scale(),
            },
            cards,
            live_callbacks: app.live_callbacks(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/snapshot.rs"]
mod tests;
