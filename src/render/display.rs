use crate::{
    app::mockup::{Mockup, MockupApp, Screen},
    foundation::core::{Affine, FrameIndex, Point, Rect, Rgb8, Size, Transform2D, Vec2},
};

const TITLE_SIZE: f64 = 16.0;
const LABEL_SIZE: f64 = 14.0;
const BODY_SIZE: f64 = 14.0;
const PANEL_RADIUS: f64 = 20.0;
const TEXT_INSET: f64 = 20.0;
const ARROW_WIDTH: f64 = 3.0;

/// Where a text run is anchored relative to its origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Center,
    TopLeft,
}

/// A single renderer-facing command.
///
/// Geometry is given in the op's local space and mapped to design space by `transform`.
/// Colors are straight RGB with a separate opacity in `[0, 1]`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    RoundedRect {
        rect: Rect,
        radius: f64,
        fill: Rgb8,
        opacity: f64,
        transform: Affine,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: Rgb8,
        opacity: f64,
    },
    Text {
        text: String,
        origin: Point,
        size: f64,
        fill: Rgb8,
        anchor: TextAnchor,
        wrap_width: Option<f64>,
        opacity: f64,
        transform: Affine,
    },
    Polyline {
        points: Vec<Point>,
        width: f64,
        stroke: Rgb8,
    },
    /// Clip every following op to a rounded rect until the matching [`DrawOp::PopClip`].
    PushClip {
        rect: Rect,
        radius: f64,
    },
    PopClip,
}

/// Back-to-front draw ops for one frame of the mockup.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DisplayList {
    pub frame: FrameIndex,
    /// Design-space canvas size.
    pub size: Size,
    pub ops: Vec<DrawOp>,
}

impl DisplayList {
    /// Build the display list for the visible screen of `app`.
    pub fn build(app: &MockupApp) -> Self {
        let m = app.mockup();
        let layout = m.layout();
        let palette = &m.config().palette;

        let mut ops = vec![
            rounded(layout.base, layout.corner_radius, palette.stage),
            rounded(layout.outer, layout.corner_radius, palette.frame),
        ];
        match m.screen() {
            Screen::Cta => push_cta_screen(m, &mut ops),
            Screen::Cards => push_cards_screen(m, &mut ops),
        }

        Self {
            frame: app.frame(),
            size: layout.base.size(),
            ops,
        }
    }

    /// Count ops of one kind, mostly for tests and logging.
    pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

fn rounded(rect: Rect, radius: f64, fill: Rgb8) -> DrawOp {
    DrawOp::RoundedRect {
        rect,
        radius,
        fill,
        opacity: 1.0,
        transform: Affine::IDENTITY,
    }
}

fn push_cta_screen(m: &Mockup, ops: &mut Vec<DrawOp>) {
    let layout = m.layout();
    let config = m.config();
    let palette = &config.palette;
    let slider = m.slider();
    let cta = m.cta();

    ops.push(rounded(
        layout.center_box,
        layout.corner_radius,
        palette.center_box,
    ));
    ops.push(DrawOp::Text {
        text: config.title.clone(),
        origin: layout.title_anchor,
        size: TITLE_SIZE,
        fill: palette.title,
        anchor: TextAnchor::Center,
        wrap_width: None,
        opacity: 1.0,
        transform: Affine::IDENTITY,
    });
    ops.push(rounded(
        layout.slider_track,
        layout.slider_track.height() / 2.0,
        palette.slider_track,
    ));
    ops.push(DrawOp::Circle {
        center: slider.handle_center() + layout.shadow_offset(),
        radius: slider.radius(),
        fill: palette.shadow,
        opacity: palette.shadow_opacity,
    });
    ops.push(DrawOp::Circle {
        center: slider.handle_center(),
        radius: slider.radius(),
        fill: slider.color(),
        opacity: 1.0,
    });

    let rect = cta.rect();
    let transform = Transform2D::at(rect.center().to_vec2())
        .with_rotation(cta.rotation())
        .with_uniform_scale(cta.scale())
        .to_affine();
    let (fill, label) = if cta.is_active() {
        (palette.accent, palette.cta_active_label)
    } else {
        (palette.cta_idle, palette.cta_idle_label)
    };
    ops.push(DrawOp::RoundedRect {
        rect: Rect::from_center_size(Point::ORIGIN, rect.size()),
        radius: rect.height() / 2.0,
        fill,
        opacity: 1.0,
        transform,
    });
    ops.push(DrawOp::Text {
        text: config.cta_label.clone(),
        origin: Point::ORIGIN,
        size: LABEL_SIZE,
        fill: label,
        anchor: TextAnchor::Center,
        wrap_width: None,
        opacity: 1.0,
        transform,
    });
}

fn push_cards_screen(m: &Mockup, ops: &mut Vec<DrawOp>) {
    let layout = m.layout();
    let config = m.config();
    let palette = &config.palette;

    ops.push(rounded(layout.viewport, layout.corner_radius, palette.viewport));
    ops.push(DrawOp::PushClip {
        rect: layout.viewport,
        radius: layout.corner_radius,
    });

    let card_rect = layout.card_local_rect();
    let icon_rect = layout.icon_local_rect();
    let desc_rect = layout.description_local_rect();
    for (idx, (item, fx)) in m.entrance().items().iter().zip(m.cards()).enumerate() {
        let opacity = item.opacity().clamp(0.0, 1.0);
        if opacity <= 0.0 {
            continue;
        }
        let transform = Transform2D::at(m.card_center(idx).to_vec2())
            .with_rotation(fx.rotation())
            .with_uniform_scale(fx.scale())
            .to_affine();
        let panel = |rect: Rect, radius: f64, fill: Rgb8| DrawOp::RoundedRect {
            rect,
            radius,
            fill,
            opacity,
            transform,
        };
        ops.push(panel(card_rect, layout.corner_radius, palette.card));
        ops.push(panel(icon_rect, PANEL_RADIUS, palette.icon));
        ops.push(panel(desc_rect, PANEL_RADIUS, palette.description));
        if let Some(text) = config.card_texts.get(idx) {
            ops.push(DrawOp::Text {
                text: text.clone(),
                origin: desc_rect.origin() + Vec2::new(TEXT_INSET, TEXT_INSET),
                size: BODY_SIZE,
                fill: palette.body_text,
                anchor: TextAnchor::TopLeft,
                wrap_width: Some(desc_rect.width() - TEXT_INSET * 2.0),
                opacity,
                transform,
            });
        }
    }
    ops.push(DrawOp::PopClip);

    let button = layout.reset_button;
    ops.push(rounded(button, button.width() / 2.0, palette.reset_button));
    // Left-pointing chevron, in button-local units.
    let origin = button.origin().to_vec2();
    ops.push(DrawOp::Polyline {
        points: [(24.0, 10.0), (14.0, 20.0), (24.0, 30.0)]
            .into_iter()
            .map(|(x, y)| Point::new(x, y) + origin)
            .collect(),
        width: ARROW_WIDTH,
        stroke: palette.body_text,
    });
}

#[cfg(test)]
#[path = "../../tests/unit/render/display.rs"]
mod tests;
