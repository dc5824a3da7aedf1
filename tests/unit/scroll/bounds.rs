use super::*;

fn cards() -> ContentMetrics {
    ContentMetrics {
        viewport_extent: 730.0,
        item_extent: 280.0,
        spacing: 30.0,
        item_count: 5,
        top_inset: 0.0,
    }
}

#[test]
fn spacing_is_not_counted_after_last_item() {
    assert_eq!(cards().total_content_extent(), 5.0 * 280.0 + 4.0 * 30.0);
}

#[test]
fn top_inset_extends_content() {
    let m = ContentMetrics {
        top_inset: 20.0,
        ..cards()
    };
    assert_eq!(m.total_content_extent(), 1540.0);
}

#[test]
fn empty_content_is_just_the_inset() {
    let m = ContentMetrics {
        item_count: 0,
        top_inset: 12.0,
        ..cards()
    };
    assert_eq!(m.total_content_extent(), 12.0);
}

#[test]
fn bounds_from_rest_offset() {
    let b = ScrollBounds::from_metrics(80.0, &cards());
    assert_eq!(b.max_offset, 80.0);
    assert_eq!(b.min_offset, 80.0 + 730.0 - 1520.0);
    assert!(!b.is_degenerate());
    assert!(b.contains(0.0));
    assert!(!b.contains(81.0));
}

#[test]
fn short_content_is_degenerate() {
    let m = ContentMetrics {
        item_count: 1,
        ..cards()
    };
    let b = ScrollBounds::from_metrics(0.0, &m);
    assert!(b.is_degenerate());
    assert!(!b.contains(0.0));
}
