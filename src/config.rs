use std::{fs::File, io::BufReader, path::Path};

use crate::{
    animation::entrance::EntranceTuning,
    animation::oscillator::{OscillatorTuning, PhaseOrder},
    foundation::error::{CardflowError, CardflowResult},
    scroll::inertial::ScrollTuning,
    ui::layout::{LayoutConfig, MockupLayout},
    ui::palette::Palette,
};

/// Small periodic motions and press feedback.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MotionTuning {
    /// Slider handle shake before the first grab (amplitude in design units).
    pub idle_shake: OscillatorTuning,
    /// CTA rotation once unlocked (amplitude in radians).
    pub cta_wobble: OscillatorTuning,
    /// Card rotation after a tap (amplitude in radians).
    pub card_shake: OscillatorTuning,
    /// CTA scale while pressed.
    pub press_scale: f64,
    /// Card scale while hovered.
    pub hover_scale: f64,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            idle_shake: OscillatorTuning {
                step: 0.2,
                amplitude: 2.0,
                limit: None,
                order: PhaseOrder::AdvanceFirst,
            },
            cta_wobble: OscillatorTuning {
                step: 0.2,
                amplitude: std::f64::consts::PI / 180.0,
                limit: None,
                order: PhaseOrder::AdvanceFirst,
            },
            card_shake: OscillatorTuning {
                step: 0.3,
                amplitude: 0.05,
                limit: Some(6.0),
                order: PhaseOrder::AdvanceFirst,
            },
            press_scale: 0.9,
            hover_scale: 0.9,
        }
    }
}

impl MotionTuning {
    /// Shorter, faster card shake used by the standalone scroll test screen.
    pub fn scroll_test() -> Self {
        Self {
            card_shake: OscillatorTuning {
                step: 0.5,
                amplitude: 0.05,
                limit: Some(10.0),
                order: PhaseOrder::SampleFirst,
            },
            ..Self::default()
        }
    }

    /// Check every oscillator and scale.
    pub fn validate(&self) -> CardflowResult<()> {
        self.idle_shake.validate("idle_shake")?;
        self.cta_wobble.validate("cta_wobble")?;
        self.card_shake.validate("card_shake")?;
        for (name, v) in [
            ("press_scale", self.press_scale),
            ("hover_scale", self.hover_scale),
        ] {
            if !(v > 0.0 && v.is_finite()) {
                return Err(CardflowError::validation(format!(
                    "{name} must be positive"
                )));
            }
        }
        Ok(())
    }
}

/// Named configuration presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Slider, CTA and card list with the default tuning.
    CtaFlow,
    /// Card list tuned like the standalone scroll test screen.
    ScrollTest,
}

impl Preset {
    /// Build the configuration for this preset.
    pub fn config(self) -> MockupConfig {
        match self {
            Self::CtaFlow => MockupConfig::cta_flow(),
            Self::ScrollTest => MockupConfig::scroll_test(),
        }
    }
}

/// Everything needed to build a [`crate::MockupApp`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MockupConfig {
    pub layout: LayoutConfig,
    pub scroll: ScrollTuning,
    pub entrance: EntranceTuning,
    pub motion: MotionTuning,
    pub palette: Palette,
    pub title: String,
    pub cta_label: String,
    /// One description per card.
    pub card_texts: Vec<String>,
}

impl Default for MockupConfig {
    fn default() -> Self {
        Self::cta_flow()
    }
}

impl MockupConfig {
    /// Slider-gated CTA flow leading to the card list.
    pub fn cta_flow() -> Self {
        Self {
            layout: LayoutConfig::default(),
            scroll: ScrollTuning::default(),
            entrance: EntranceTuning::default(),
            motion: MotionTuning::default(),
            palette: Palette::default(),
            title: "Initial Screen CTA".to_string(),
            cta_label: "CTA confirm".to_string(),
            card_texts: (1..=5)
                .map(|i| format!("Editable text for inner frame {i}."))
                .collect(),
        }
    }

    /// Card list with the scroll test tuning and copy.
    pub fn scroll_test() -> Self {
        Self {
            scroll: ScrollTuning::scroll_test(),
            entrance: EntranceTuning::scroll_test(),
            motion: MotionTuning::scroll_test(),
            palette: Palette::scroll_test(),
            card_texts: [
                "First box. Item one",
                "Item two two two",
                "Three's a crowd, another one?",
                "four four four, nobody likes you, nobody likes you, four four four",
                "five pounds",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            ..Self::cta_flow()
        }
    }

    /// Parse a JSON document. Missing fields fall back to the CTA flow defaults.
    pub fn from_json_str(s: &str) -> CardflowResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> CardflowResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CardflowError::config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        let r = BufReader::new(f);
        Ok(serde_json::from_reader(r)?)
    }

    /// Validate every section.
    pub fn validate(&self) -> CardflowResult<()> {
        MockupLayout::new(&self.layout)?;
        self.scroll.validate()?;
        self.entrance.validate()?;
        self.entrance.delay_for(self.layout.card_count.saturating_sub(1))?;
        self.motion.validate()?;
        self.palette.hue_ramp.validate()?;
        if self.card_texts.len() != self.layout.card_count {
            return Err(CardflowError::config(format!(
                "expected {} card texts, got {}",
                self.layout.card_count,
                self.card_texts.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
