use crate::host::Painter;
use crate::notification::Notification;
use crate::rendering::buffer::PaintBuffer;
use overlay_notifications_util::{Point, Rect, Theme, progress_fill};

/// Render a notification
///
/// Draws background, message, close button and, when present, the progress
/// bar into an off-screen buffer, then flushes it to `target`.
pub fn paint_notification(
    notification: &Notification,
    target: &mut dyn Painter,
    theme: &Theme,
    client: Rect,
    cursor: Option<Point>,
) {
    let mut buffer = PaintBuffer::new();
    let (background, text) = theme.colors(notification.is_highlighted());

    buffer.fill_rect(Rect::from_size(client.size()), background);
    buffer.draw_text(
        notification.text_rect(),
        notification.message(),
        notification.font(),
        text,
    );

    let hover = cursor.is_some_and(|pt| notification.is_over_close(pt));
    let close_color = if hover { theme.close_hover } else { text };
    buffer.draw_close_button(notification.close_rect(), hover, close_color);

    if notification.has_progress() {
        let track = notification.progress_rect();
        buffer.stroke_rect(track, theme.progress);
        buffer.fill_rect(progress_fill(track, notification.progress()), theme.progress);
    }

    buffer.flush(target);
}
