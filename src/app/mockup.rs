use crate::{
    animation::entrance::StaggeredEntranceAnimator,
    clock::ticker::{TickControl, Ticker},
    config::MockupConfig,
    foundation::core::{FrameIndex, Point, Rect, Size},
    foundation::error::CardflowResult,
    scroll::inertial::InertialScrollController,
    ui::card::CardFx,
    ui::cta::CtaButton,
    ui::layout::MockupLayout,
    ui::slider::{SliderEvent, SliderGate},
};

/// Which screen is visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Slider and call to action.
    Cta,
    /// Scrolling card list.
    Cards,
}

/// What the current pointer press started on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PressTarget {
    SliderHandle,
    Cta,
    ResetButton,
    Card(usize),
    Viewport,
}

/// All state of both screens, mutated by input handlers and frame callbacks.
#[derive(Debug)]
pub struct Mockup {
    config: MockupConfig,
    layout: MockupLayout,
    screen: Screen,
    slider: SliderGate,
    cta: CtaButton,
    cards: Vec<CardFx>,
    scroll: InertialScrollController,
    entrance: StaggeredEntranceAnimator,
    press: Option<PressTarget>,
}

fn entrance_of(m: &mut Mockup) -> &mut StaggeredEntranceAnimator {
    &mut m.entrance
}

fn cta_of(m: &mut Mockup) -> &mut CtaButton {
    &mut m.cta
}

impl Mockup {
    fn new(config: MockupConfig) -> CardflowResult<Self> {
        config.validate()?;
        let layout = MockupLayout::new(&config.layout)?;
        let motion = config.motion;

        let slider = SliderGate::new(
            &layout,
            config.palette.hue_ramp.clone(),
            config.palette.accent,
            motion.idle_shake,
        );
        let cta = CtaButton::new(layout.cta, motion.cta_wobble, motion.press_scale);
        let cards = (0..layout.card_count)
            .map(|_| CardFx::new(motion.card_shake, motion.hover_scale))
            .collect();
        let scroll = InertialScrollController::new(layout.scroll_bounds(), config.scroll)?;
        let entrance = StaggeredEntranceAnimator::new(
            layout.card_start_x(),
            std::iter::repeat_n(layout.card_rest_x(), layout.card_count),
            config.entrance,
        )?;

        Ok(Self {
            config,
            layout,
            screen: Screen::Cta,
            slider,
            cta,
            cards,
            scroll,
            entrance,
            press: None,
        })
    }

    /// Index of the card under `p`, if any. Cards are only hittable inside the viewport.
    pub fn card_at(&self, p: Point) -> Option<usize> {
        if self.screen != Screen::Cards || !self.layout.viewport.contains(p) {
            return None;
        }
        let size = Size::new(self.layout.card_size, self.layout.card_size);
        (0..self.cards.len()).find(|&idx| {
            let center = self.card_center(idx);
            Rect::from_center_size(center, size).contains(p)
        })
    }

    /// Current design-space center of card `idx`.
    pub fn card_center(&self, idx: usize) -> Point {
        let x = self
            .entrance
            .item(idx)
            .map_or(self.layout.card_start_x(), |i| i.current_position());
        self.layout.card_center(idx, x, self.scroll.offset())
    }

    pub fn config(&self) -> &MockupConfig {
        &self.config
    }

    pub fn layout(&self) -> &MockupLayout {
        &self.layout
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn slider(&self) -> &SliderGate {
        &self.slider
    }

    pub fn cta(&self) -> &CtaButton {
        &self.cta
    }

    pub fn cards(&self) -> &[CardFx] {
        &self.cards
    }

    pub fn scroll(&self) -> &InertialScrollController {
        &self.scroll
    }

    pub fn entrance(&self) -> &StaggeredEntranceAnimator {
        &self.entrance
    }
}

/// [`Mockup`] driven by its own [`Ticker`].
///
/// Input arrives in design-space coordinates. The scroll integrator and the slider idle shake
/// are registered once at construction and stay live; every other frame callback is
/// registered on demand and removed by its owner or by itself.
#[derive(Debug)]
pub struct MockupApp {
    mockup: Mockup,
    ticker: Ticker<Mockup>,
}

impl MockupApp {
    /// Validate `config`, resolve the layout and register the always-on callbacks.
    #[tracing::instrument(skip(config))]
    pub fn new(config: MockupConfig) -> CardflowResult<Self> {
        let mockup = Mockup::new(config)?;
        let mut ticker = Ticker::new();
        ticker.register(|m: &mut Mockup| {
            m.scroll.on_tick();
            TickControl::Continue
        });
        ticker.register(|m: &mut Mockup| m.slider.tick_idle());
        tracing::debug!(cards = mockup.cards.len(), "mockup ready");
        Ok(Self { mockup, ticker })
    }

    pub fn pointer_down(&mut self, p: Point) {
        let m = &mut self.mockup;
        m.press = match m.screen {
            Screen::Cta => {
                if m.cta.hit(p) {
                    m.cta.set_pressed(true);
                    Some(PressTarget::Cta)
                } else if m.slider.on_pointer_down(p) {
                    Some(PressTarget::SliderHandle)
                } else {
                    None
                }
            }
            Screen::Cards => {
                if m.layout.reset_button.contains(p) {
                    Some(PressTarget::ResetButton)
                } else if m.layout.viewport.contains(p) {
                    m.scroll.on_drag_start(p.y);
                    Some(m.card_at(p).map_or(PressTarget::Viewport, PressTarget::Card))
                } else {
                    None
                }
            }
        };
    }

    pub fn pointer_move(&mut self, p: Point) {
        match self.mockup.screen {
            Screen::Cta => {
                let m = &mut self.mockup;
                if m.cta.is_pressed() && !m.cta.hit(p) {
                    m.cta.set_pressed(false);
                }
                if m.slider.on_pointer_move(p.x) == Some(SliderEvent::Unlocked) {
                    m.cta.activate(&mut self.ticker, cta_of);
                }
            }
            Screen::Cards => {
                self.mockup.scroll.on_drag_move(p.y);
                let hovered = self.mockup.card_at(p);
                for (idx, card) in self.mockup.cards.iter_mut().enumerate() {
                    card.set_hovered(hovered == Some(idx));
                }
            }
        }
    }

    /// Release the pointer at `p`; a press released over its own target counts as a tap.
    pub fn pointer_up(&mut self, p: Point) {
        self.mockup.slider.on_pointer_up();
        self.mockup.scroll.on_drag_end();
        self.mockup.cta.set_pressed(false);

        let Some(target) = self.mockup.press.take() else {
            return;
        };
        match target {
            PressTarget::Cta => {
                if self.mockup.cta.hit(p) && self.mockup.slider.is_unlocked() {
                    self.enter_cards();
                }
            }
            PressTarget::Card(idx) => {
                if self.mockup.card_at(p) == Some(idx) {
                    self.mockup.cards[idx]
                        .start_shake(&mut self.ticker, move |m: &mut Mockup| &mut m.cards[idx]);
                }
            }
            PressTarget::ResetButton => {
                if self.mockup.layout.reset_button.contains(p) {
                    self.reset();
                }
            }
            PressTarget::SliderHandle | PressTarget::Viewport => {}
        }
    }

    /// Wheel input feeds the scroll controller on either screen.
    pub fn wheel(&mut self, delta_y: f64) {
        self.mockup.scroll.on_wheel(delta_y);
    }

    /// Advance one frame.
    pub fn tick(&mut self) {
        self.ticker.tick(&mut self.mockup);
    }

    /// Advance `frames` frames.
    pub fn advance(&mut self, frames: u64) {
        self.ticker.advance(&mut self.mockup, frames);
    }

    /// Show the card list and (re)start the entrance.
    pub fn enter_cards(&mut self) {
        self.mockup.screen = Screen::Cards;
        self.mockup.entrance.activate(&mut self.ticker, entrance_of);
        tracing::debug!(frame = self.ticker.frame().0, "entered cards screen");
    }

    /// Return to the CTA screen with every component back at its initial state.
    pub fn reset(&mut self) {
        let m = &mut self.mockup;
        m.screen = Screen::Cta;
        m.press = None;
        m.scroll.reset();
        m.slider.reset();
        m.cta.reset(&mut self.ticker);
        for card in &mut m.cards {
            card.reset(&mut self.ticker);
        }
        m.entrance.reset(&mut self.ticker);
        tracing::debug!(
            frame = self.ticker.frame().0,
            live = self.ticker.len(),
            "reset to cta screen"
        );
    }

    pub fn mockup(&self) -> &Mockup {
        &self.mockup
    }

    /// Frames ticked so far.
    pub fn frame(&self) -> FrameIndex {
        self.ticker.frame()
    }

    /// Number of registered frame callbacks.
    pub fn live_callbacks(&self) -> usize {
        self.ticker.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/mockup.rs"]
mod tests;
