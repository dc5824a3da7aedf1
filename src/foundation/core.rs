use crate::foundation::error::{CardflowError, CardflowResult};

pub use kurbo::{Affine, Point, Rect, RoundedRect, Size, Vec2};

/// Absolute 0-based frame counter, advanced once per ticker frame.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// Next frame, saturating at `u64::MAX`.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Opaque straight RGB8 color.
///
/// Serialized as a `#RRGGBB` hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Packed `0xRRGGBB` value.
    pub fn to_hex(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Blend two colors channel-wise at `t` (clamped to `[0, 1]`).
    ///
    /// Channels are truncated toward zero, not rounded.
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let ch = |x: u8, y: u8| -> u8 {
            let v = crate::foundation::math::lerp(f64::from(x), f64::from(y), t);
            v.clamp(0.0, 255.0) as u8
        };
        Self {
            r: ch(a.r, b.r),
            g: ch(a.g, b.g),
            b: ch(a.b, b.b),
        }
    }

    /// Parse `#RRGGBB` or `RRGGBB`.
    pub fn parse(s: &str) -> CardflowResult<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CardflowError::validation(format!(
                "color '{s}' must be 6 hex digits"
            )));
        }
        let hex = u32::from_str_radix(digits, 16)
            .map_err(|e| CardflowError::validation(format!("color '{s}': {e}")))?;
        Ok(Self::from_hex(hex))
    }
}

impl std::fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = CardflowError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Rgb8> for String {
    fn from(value: Rgb8) -> Self {
        value.to_string()
    }
}

/// Node transform: translation, rotation and scale about a local pivot.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform2D {
    /// Translation applied last.
    pub translate: Vec2,
    /// Rotation about `anchor`, in radians.
    pub rotation_rad: f64,
    /// Scale about `anchor`.
    pub scale: Vec2, // default (1,1)
    /// Pivot in local space.
    pub anchor: Vec2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            rotation_rad: 0.0,
            scale: Vec2::new(1.0, 1.0),
            anchor: Vec2::ZERO,
        }
    }
}

impl Transform2D {
    /// Translation-only transform.
    pub fn at(translate: Vec2) -> Self {
        Self {
            translate,
            ..Self::default()
        }
    }

    /// Same transform with a uniform scale.
    pub fn with_uniform_scale(self, s: f64) -> Self {
        Self {
            scale: Vec2::new(s, s),
            ..self
        }
    }

    /// Same transform with a rotation in radians.
    pub fn with_rotation(self, rotation_rad: f64) -> Self {
        Self {
            rotation_rad,
            ..self
        }
    }

    /// Compose into a single affine matrix.
    pub fn to_affine(self) -> Affine {
        let t_translate = Affine::translate(self.translate);
        let t_anchor = Affine::translate(self.anchor);
        let t_unanchor = Affine::translate(-self.anchor);
        let t_rotate = Affine::rotate(self.rotation_rad);
        let t_scale = Affine::scale_non_uniform(self.scale.x, self.scale.y);

        // T(translate) * T(anchor) * R(rot) * S(scale) * T(-anchor)
        t_translate * t_anchor * t_rotate * t_scale * t_unanchor
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
