use crate::{
    foundation::core::Rgb8,
    foundation::error::{CardflowError, CardflowResult},
};

/// One color stop on a [`HueRamp`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HueStop {
    /// Position in `[0, 1]`.
    pub at: f64,
    /// Color at this position.
    pub color: Rgb8,
}

/// Piecewise-linear color ramp over `[0, 1]`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct HueRamp {
    stops: Vec<HueStop>,
}

impl HueRamp {
    /// Build a ramp; stops must start at 0, end at 1 and increase strictly.
    pub fn new(stops: Vec<HueStop>) -> CardflowResult<Self> {
        let ramp = Self { stops };
        ramp.validate()?;
        Ok(ramp)
    }

    /// Red, orange, yellow, green: the slider progress ramp.
    pub fn traffic_light() -> Self {
        Self {
            stops: vec![
                HueStop {
                    at: 0.0,
                    color: Rgb8::from_hex(0xFF8787),
                },
                HueStop {
                    at: 0.5,
                    color: Rgb8::from_hex(0xFFC27B),
                },
                HueStop {
                    at: 0.75,
                    color: Rgb8::from_hex(0xFFEF7D),
                },
                HueStop {
                    at: 1.0,
                    color: Rgb8::from_hex(0x8FEA91),
                },
            ],
        }
    }

    /// Check stop ordering and coverage.
    pub fn validate(&self) -> CardflowResult<()> {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Err(CardflowError::validation("hue ramp needs at least one stop"));
        };
        if first.at != 0.0 || last.at != 1.0 {
            return Err(CardflowError::validation(
                "hue ramp must start at 0 and end at 1",
            ));
        }
        if self.stops.windows(2).any(|w| !(w[1].at > w[0].at)) {
            return Err(CardflowError::validation(
                "hue ramp stops must strictly increase",
            ));
        }
        Ok(())
    }

    /// Color at `t`, clamped to the ramp.
    ///
    /// A position exactly on a stop belongs to the segment ending there.
    pub fn sample(&self, t: f64) -> Rgb8 {
        let t = t.clamp(0.0, 1.0);
        let mut prev = match self.stops.first() {
            Some(s) => *s,
            None => return Rgb8::new(0, 0, 0),
        };
        for stop in &self.stops[1..] {
            if t <= stop.at {
                let k = (t - prev.at) / (stop.at - prev.at);
                return Rgb8::lerp(prev.color, stop.color, k);
            }
            prev = *stop;
        }
        prev.color
    }

    /// Stops in order.
    pub fn stops(&self) -> &[HueStop] {
        &self.stops
    }
}

/// Every fill used by the two screens.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Palette {
    pub stage: Rgb8,
    pub frame: Rgb8,
    pub center_box: Rgb8,
    pub title: Rgb8,
    pub slider_track: Rgb8,
    /// Handle at rest and the active CTA fill.
    pub accent: Rgb8,
    pub shadow: Rgb8,
    pub shadow_opacity: f64,
    pub cta_idle: Rgb8,
    pub cta_idle_label: Rgb8,
    pub cta_active_label: Rgb8,
    pub viewport: Rgb8,
    pub card: Rgb8,
    pub icon: Rgb8,
    pub description: Rgb8,
    pub body_text: Rgb8,
    pub reset_button: Rgb8,
    /// Slider handle color while dragging, by progress.
    pub hue_ramp: HueRamp,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            stage: Rgb8::from_hex(0xF2F2F2),
            frame: Rgb8::from_hex(0xE0E0E0),
            center_box: Rgb8::from_hex(0xD9D9D9),
            title: Rgb8::from_hex(0x333333),
            slider_track: Rgb8::from_hex(0xBDBDBD),
            accent: Rgb8::from_hex(0xFFC27B),
            shadow: Rgb8::from_hex(0x000000),
            shadow_opacity: 0.2,
            cta_idle: Rgb8::from_hex(0xEBEBEB),
            cta_idle_label: Rgb8::from_hex(0xAAAAAA),
            cta_active_label: Rgb8::from_hex(0xFFFFFF),
            viewport: Rgb8::from_hex(0xFFFFFF),
            card: Rgb8::from_hex(0xD9D9D9),
            icon: Rgb8::from_hex(0xFFFFFF),
            description: Rgb8::from_hex(0xEBEBEB),
            body_text: Rgb8::from_hex(0x333333),
            reset_button: Rgb8::from_hex(0xEBEBEB),
            hue_ramp: HueRamp::traffic_light(),
        }
    }
}

impl Palette {
    /// White cards with pink icons, as on the standalone scroll test screen.
    pub fn scroll_test() -> Self {
        Self {
            card: Rgb8::from_hex(0xFFFFFF),
            icon: Rgb8::from_hex(0xFFF2FF),
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/palette.rs"]
mod tests;
