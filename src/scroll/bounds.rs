/// Layout facts a scroll container derives its bounds from.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContentMetrics {
    /// Visible extent of the scrolling viewport.
    pub viewport_extent: f64,
    /// Extent of each item along the scroll axis.
    pub item_extent: f64,
    /// Gap between consecutive items (not added after the last one).
    pub spacing: f64,
    /// Number of items.
    pub item_count: usize,
    /// Fixed inset above the first item.
    pub top_inset: f64,
}

impl ContentMetrics {
    /// Full scrollable extent: inset, every item, and the gaps between them.
    pub fn total_content_extent(&self) -> f64 {
        let n = self.item_count as f64;
        let gaps = self.item_count.saturating_sub(1) as f64;
        self.top_inset + n * self.item_extent + gaps * self.spacing
    }
}

/// Allowed resting range for a scroll offset.
///
/// `max_offset` is the rest (top) position. When the content is shorter than the viewport,
/// `min_offset > max_offset` and no scrolling is possible.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollBounds {
    /// Lowest resting offset (content scrolled to its end).
    pub min_offset: f64,
    /// Highest resting offset (content at rest).
    pub max_offset: f64,
}

impl ScrollBounds {
    /// Bounds from explicit values.
    pub fn new(min_offset: f64, max_offset: f64) -> Self {
        Self {
            min_offset,
            max_offset,
        }
    }

    /// Derive bounds for content laid out from a rest offset.
    pub fn from_metrics(rest_offset: f64, metrics: &ContentMetrics) -> Self {
        Self {
            min_offset: rest_offset + metrics.viewport_extent - metrics.total_content_extent(),
            max_offset: rest_offset,
        }
    }

    /// Return `true` when the content fits and scrolling is impossible.
    pub fn is_degenerate(&self) -> bool {
        self.min_offset > self.max_offset
    }

    /// Return `true` when `offset` lies inside `[min_offset, max_offset]`.
    pub fn contains(&self, offset: f64) -> bool {
        self.min_offset <= offset && offset <= self.max_offset
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/bounds.rs"]
mod tests;
