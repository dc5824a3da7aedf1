use crate::{
    foundation::core::{Point, Rect, Size, Vec2},
    foundation::error::{CardflowError, CardflowResult},
    scroll::bounds::{ContentMetrics, ScrollBounds},
};

/// Design-space geometry constants for both screens.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Design frame width; all input coordinates live in this space.
    pub base_width: f64,
    /// Design frame height.
    pub base_height: f64,
    pub frame_margin: f64,
    pub outer_padding: f64,
    pub scroll_padding: f64,
    /// Extra gap above the first card at rest.
    pub scroll_top_inset: f64,
    pub inner_padding: f64,
    pub corner_radius: f64,
    pub card_count: usize,
    pub card_spacing: f64,
    pub icon_size: f64,
    pub center_box_height: f64,
    /// Horizontal inset of the slider track inside the center box.
    pub slider_inset: f64,
    /// Vertical offset of the slider track from the top of the center box.
    pub slider_top: f64,
    pub slider_track_height: f64,
    pub handle_radius: f64,
    pub cta_width: f64,
    pub cta_height: f64,
    /// Distance from the top of the slider track to the CTA center.
    pub cta_gap: f64,
    pub reset_button_size: f64,
    pub reset_button_inset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_width: 400.0,
            base_height: 850.0,
            frame_margin: 20.0,
            outer_padding: 20.0,
            scroll_padding: 20.0,
            scroll_top_inset: 20.0,
            inner_padding: 20.0,
            corner_radius: 30.0,
            card_count: 5,
            card_spacing: 30.0,
            icon_size: 80.0,
            center_box_height: 300.0,
            slider_inset: 40.0,
            slider_top: 120.0,
            slider_track_height: 50.0,
            handle_radius: 35.0,
            cta_width: 200.0,
            cta_height: 50.0,
            cta_gap: 100.0,
            reset_button_size: 40.0,
            reset_button_inset: 20.0,
        }
    }
}

/// Resolved geometry, in design space, derived once from a [`LayoutConfig`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MockupLayout {
    pub base: Rect,
    pub outer: Rect,
    pub corner_radius: f64,
    pub center_box: Rect,
    pub title_anchor: Point,
    pub slider_track: Rect,
    pub handle_radius: f64,
    pub cta: Rect,
    /// Masked scrolling area on the cards screen.
    pub viewport: Rect,
    pub reset_button: Rect,
    /// Left edge of the scroll container.
    pub scroll_x: f64,
    /// Scroll container offset at rest.
    pub scroll_rest_y: f64,
    pub card_size: f64,
    pub card_spacing: f64,
    pub card_count: usize,
    pub inner_padding: f64,
    pub icon_size: f64,
    viewport_extent: f64,
}

impl MockupLayout {
    /// Resolve every rectangle.
    pub fn new(cfg: &LayoutConfig) -> CardflowResult<Self> {
        validate(cfg)?;

        let base = Rect::new(0.0, 0.0, cfg.base_width, cfg.base_height);
        let outer = shrink(base, cfg.frame_margin);
        let pad = cfg.outer_padding;

        let center_box = Rect::from_origin_size(
            (
                outer.x0 + pad,
                outer.y0 + (outer.height() - cfg.center_box_height) / 2.0,
            ),
            (outer.width() - pad * 2.0, cfg.center_box_height),
        );
        let title_anchor = Point::new(outer.center().x, center_box.y0 + 40.0);

        let slider_track = Rect::from_origin_size(
            (
                center_box.x0 + cfg.slider_inset,
                center_box.y0 + cfg.slider_top,
            ),
            (
                center_box.width() - cfg.slider_inset * 2.0,
                cfg.slider_track_height,
            ),
        );
        let cta = Rect::from_center_size(
            (outer.center().x, slider_track.y0 + cfg.cta_gap),
            (cfg.cta_width, cfg.cta_height),
        );

        let viewport = shrink(outer, pad);
        let reset_button = Rect::from_origin_size(
            (
                viewport.x0 + cfg.reset_button_inset,
                viewport.y0 + cfg.reset_button_inset,
            ),
            (cfg.reset_button_size, cfg.reset_button_size),
        );

        let scroll_x = viewport.x0 + cfg.scroll_padding;
        let scroll_rest_y = viewport.y0 + cfg.scroll_padding + cfg.scroll_top_inset;
        let card_size = viewport.width() - cfg.scroll_padding * 2.0;
        let viewport_extent = viewport.height() - cfg.scroll_padding * 2.0;

        Ok(Self {
            base,
            outer,
            corner_radius: cfg.corner_radius,
            center_box,
            title_anchor,
            slider_track,
            handle_radius: cfg.handle_radius,
            cta,
            viewport,
            reset_button,
            scroll_x,
            scroll_rest_y,
            card_size,
            card_spacing: cfg.card_spacing,
            card_count: cfg.card_count,
            inner_padding: cfg.inner_padding,
            icon_size: cfg.icon_size,
            viewport_extent,
        })
    }

    /// Scrollable content facts for bounds.
    pub fn content_metrics(&self) -> ContentMetrics {
        ContentMetrics {
            viewport_extent: self.viewport_extent,
            item_extent: self.card_size,
            spacing: self.card_spacing,
            item_count: self.card_count,
            top_inset: 0.0,
        }
    }

    /// Bounds for the cards scroll container.
    pub fn scroll_bounds(&self) -> ScrollBounds {
        ScrollBounds::from_metrics(self.scroll_rest_y, &self.content_metrics())
    }

    /// Handle travel range `(min_x, max_x)`.
    pub fn slider_range(&self) -> (f64, f64) {
        (self.slider_track.x0, self.slider_track.x1)
    }

    /// Resting handle center.
    pub fn handle_rest(&self) -> Point {
        Point::new(self.slider_track.center().x, self.slider_track.center().y)
    }

    /// Card center x inside the scroll container once settled.
    pub fn card_rest_x(&self) -> f64 {
        self.card_size / 2.0
    }

    /// Card center x before the entrance: one full card width off the left edge.
    pub fn card_start_x(&self) -> f64 {
        -self.card_size
    }

    /// Card center y inside the scroll container.
    pub fn card_center_y(&self, idx: usize) -> f64 {
        idx as f64 * (self.card_size + self.card_spacing) + self.card_size / 2.0
    }

    /// Card center in design space for a given container x and scroll offset.
    pub fn card_center(&self, idx: usize, x: f64, scroll_offset: f64) -> Point {
        Point::new(self.scroll_x + x, scroll_offset + self.card_center_y(idx))
    }

    /// Card bounds relative to its own center.
    pub fn card_local_rect(&self) -> Rect {
        Rect::from_center_size(Point::ORIGIN, Size::new(self.card_size, self.card_size))
    }

    /// Icon bounds relative to the card center.
    pub fn icon_local_rect(&self) -> Rect {
        let half = self.card_size / 2.0;
        Rect::from_origin_size(
            (-half + self.inner_padding, -half + self.inner_padding),
            (self.icon_size, self.icon_size),
        )
    }

    /// Description panel bounds relative to the card center.
    pub fn description_local_rect(&self) -> Rect {
        let icon = self.icon_local_rect();
        Rect::from_origin_size(
            (icon.x1 + self.inner_padding, icon.y0),
            (
                self.card_size - self.icon_size - self.inner_padding * 3.0,
                self.card_size - self.inner_padding * 2.0,
            ),
        )
    }

    /// Offset of the handle shadow from the handle center.
    pub fn shadow_offset(&self) -> Vec2 {
        Vec2::new(0.0, 6.0)
    }
}

fn shrink(r: Rect, by: f64) -> Rect {
    Rect::new(r.x0 + by, r.y0 + by, r.x1 - by, r.y1 - by)
}

fn validate(cfg: &LayoutConfig) -> CardflowResult<()> {
    let positive = [
        ("base_width", cfg.base_width),
        ("base_height", cfg.base_height),
        ("center_box_height", cfg.center_box_height),
        ("slider_track_height", cfg.slider_track_height),
        ("handle_radius", cfg.handle_radius),
        ("cta_width", cfg.cta_width),
        ("cta_height", cfg.cta_height),
        ("reset_button_size", cfg.reset_button_size),
    ];
    for (name, v) in positive {
        if !(v > 0.0 && v.is_finite()) {
            return Err(CardflowError::validation(format!(
                "layout {name} must be positive"
            )));
        }
    }
    let non_negative = [
        ("frame_margin", cfg.frame_margin),
        ("outer_padding", cfg.outer_padding),
        ("scroll_padding", cfg.scroll_padding),
        ("scroll_top_inset", cfg.scroll_top_inset),
        ("inner_padding", cfg.inner_padding),
        ("corner_radius", cfg.corner_radius),
        ("card_spacing", cfg.card_spacing),
        ("icon_size", cfg.icon_size),
        ("slider_inset", cfg.slider_inset),
        ("slider_top", cfg.slider_top),
        ("reset_button_inset", cfg.reset_button_inset),
    ];
    for (name, v) in non_negative {
        if !(v >= 0.0 && v.is_finite()) {
            return Err(CardflowError::validation(format!(
                "layout {name} must be non-negative"
            )));
        }
    }

    let inner_w = cfg.base_width
        - 2.0 * (cfg.frame_margin + cfg.outer_padding + cfg.scroll_padding);
    if inner_w <= cfg.icon_size + cfg.inner_padding * 3.0 {
        return Err(CardflowError::validation(
            "layout leaves no room for card content",
        ));
    }
    if cfg.base_width - 2.0 * (cfg.frame_margin + cfg.outer_padding + cfg.slider_inset) <= 0.0 {
        return Err(CardflowError::validation("layout leaves no room for the slider"));
    }
    let outer_h = cfg.base_height - 2.0 * cfg.frame_margin;
    if cfg.center_box_height > outer_h {
        return Err(CardflowError::validation(
            "layout leaves no room for the center box",
        ));
    }
    if outer_h - 2.0 * (cfg.outer_padding + cfg.scroll_padding) <= 0.0 {
        return Err(CardflowError::validation(
            "layout leaves no room for the card viewport",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/ui/layout.rs"]
mod tests;
