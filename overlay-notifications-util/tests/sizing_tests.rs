//! Integration tests for notification sizing
//!
//! These go from a config file through the scaled metrics to the final
//! content layout, the way the notification entity uses them.

use overlay_notifications_config::NotificationsConfig;
use overlay_notifications_util::{
    AD_HOC, Color, ContentLayout, GroupId, Metrics, PAGE_INFO, Rect, Size, Theme, progress_fill,
    replaces_existing,
};

fn layout_for(
    config: &NotificationsConfig,
    text: Size,
    current: Size,
    limit: f32,
) -> ContentLayout {
    let metrics = Metrics::scaled(&config.layout, |px| px);
    ContentLayout::compute(text, &metrics, false, current, limit)
}

#[test]
fn test_partial_config_keeps_other_metrics() {
    let config = NotificationsConfig::from_json_str(r#"{"layout": {"text_pad_x": 10}}"#).unwrap();
    let l = layout_for(&config, Size::new(50, 16), Size::default(), 1.0);

    // 10 + 50 + 10, gap 6, close 16, pad 10
    assert_eq!(l.size, Size::new(102, 32));
    assert_eq!(l.text, Rect::new(10, 8, 50, 16));
    assert_eq!(l.close.x, 76);
}

#[test]
fn test_shrink_limit_below_one() {
    let config = NotificationsConfig::default();
    let current = Size::new(300, 32);

    // 156 is above half of 300, keep the wide window
    let l = layout_for(&config, Size::new(100, 16), current, 0.5);
    assert_eq!(l.size.dx, 300);
    assert_eq!(l.close.x + l.close.dx + 12, 300);

    // 96 is below half of 300, shrink
    let l = layout_for(&config, Size::new(40, 16), current, 0.5);
    assert_eq!(l.size.dx, 96);
}

#[test]
fn test_shrink_limit_one_never_shrinks() {
    let config = NotificationsConfig::default();
    let l = layout_for(&config, Size::new(1, 16), Size::new(1000, 32), 1.0);
    assert_eq!(l.size.dx, 1000);
}

#[test]
fn test_progress_row_and_fill() {
    let config = NotificationsConfig::default();
    let metrics = Metrics::scaled(&config.layout, |px| px);
    let l = ContentLayout::compute(Size::new(100, 16), &metrics, true, Size::default(), 1.0);

    assert_eq!(l.size.dy, 8 + 16 + 8 + 8 + 5 + 8);
    assert_eq!(l.progress, Rect::new(12, 32, 100, 5));

    let fill = progress_fill(l.progress, 50);
    assert_eq!(fill, Rect::new(14, 34, 48, 2));
}

#[test]
fn test_theme_from_config() {
    let config =
        NotificationsConfig::from_json_str(r#"{"theme": {"highlight": [255, 0, 0]}}"#).unwrap();
    let theme = Theme::from_config(&config.theme);

    let (bg, _) = theme.colors(true);
    assert_eq!(bg, Color::rgb(1.0, 0.0, 0.0));
    assert_eq!(theme.colors(false).0, Theme::default().background);
}

#[test]
fn test_groups_are_identities() {
    let a = GroupId::new("search");
    let b = GroupId::new("search");

    assert_ne!(a, b);
    assert_eq!(a, a);
    assert!(replaces_existing(Some(a)));
    assert!(replaces_existing(Some(*PAGE_INFO)));
    assert!(!replaces_existing(Some(*AD_HOC)));
    assert!(!replaces_existing(None));
}

#[test]
fn test_layout_rects_serialize_as_plain_fields() {
    let config = NotificationsConfig::default();
    let l = layout_for(&config, Size::new(100, 16), Size::default(), 1.0);

    let json = serde_json::to_value(l.text).unwrap();
    assert_eq!(json, serde_json::json!({"x": 12, "y": 8, "dx": 100, "dy": 16}));

    let back: Rect = serde_json::from_value(json).unwrap();
    assert_eq!(back, l.text);
}
