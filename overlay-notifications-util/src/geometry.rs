//! Integer geometry and the notification sizing rules.
//!
//! Everything here works in device pixels. Callers are expected to DPI-scale
//! the logical metrics (see [`Metrics::scaled`]) before computing a layout.

use overlay_notifications_config::LayoutConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub dx: i32,
    pub dy: i32,
}

impl Size {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// Rectangle given by its top-left corner and its extent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub dx: i32,
    pub dy: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, dx: i32, dy: i32) -> Self {
        Self { x, y, dx, dy }
    }

    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.dx, size.dy)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.dx, self.dy)
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn is_empty(&self) -> bool {
        self.dx <= 0 || self.dy <= 0
    }

    /// Right and bottom edges are exclusive.
    pub const fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x < self.x + self.dx && pt.y >= self.y && pt.y < self.y + self.dy
    }
}

/// Layout metrics after DPI scaling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub pad_x: i32,
    pub pad_y: i32,
    pub close_size: i32,
    /// Gap between the text rectangle and the close button.
    pub close_gap: i32,
    pub progress_height: i32,
}

impl Metrics {
    pub fn scaled(config: &LayoutConfig, scale: impl Fn(i32) -> i32) -> Self {
        Self {
            pad_x: scale(config.text_pad_x),
            pad_y: scale(config.text_pad_y),
            close_size: scale(config.close_size),
            close_gap: scale(config.close_left_margin - config.text_pad_x),
            progress_height: scale(config.progress_height),
        }
    }
}

/// Result of sizing a notification for a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentLayout {
    /// Size the window should have.
    pub size: Size,
    pub text: Rect,
    pub close: Rect,
    /// Track of the progress bar. Only painted when progress is shown.
    pub progress: Rect,
}

impl ContentLayout {
    /// Size a notification around `text_size`.
    ///
    /// `current` is the size the window has on screen right now. The width is
    /// never reduced below it unless `shrink_limit` is below 1.0 and the new
    /// width drops under `current.dx * shrink_limit`; in that case the close
    /// button stays pinned to the right edge of the wider window.
    pub fn compute(
        text_size: Size,
        metrics: &Metrics,
        has_progress: bool,
        current: Size,
        shrink_limit: f32,
    ) -> Self {
        let Metrics {
            pad_x,
            pad_y,
            close_size,
            close_gap,
            progress_height,
        } = *metrics;

        let mut dx = pad_x + text_size.dx + pad_x;
        let mut dy = pad_y + text_size.dy + pad_y;
        let text = Rect::new(pad_x, pad_y, text_size.dx, text_size.dy);
        let mut close = Rect::new(dx + close_gap, pad_y, close_size, close_size + 2);
        dx += close_gap + close_size + pad_x;

        let progress = Rect::new(pad_x, dy, text_size.dx, progress_height);
        if has_progress {
            dy += pad_y + progress_height + pad_y;
        }

        if dx < current.dx && !shrinks_past_limit(dx, current.dx, shrink_limit) {
            close.x += current.dx - dx;
            dx = current.dx;
        }

        close.y = (dy - close_size) / 2 + 1;

        Self {
            size: Size::new(dx, dy),
            text,
            close,
            progress,
        }
    }
}

fn shrinks_past_limit(dx: i32, current_dx: i32, shrink_limit: f32) -> bool {
    shrink_limit < 1.0 && (dx as f32) < current_dx as f32 * shrink_limit
}

/// X coordinate that puts a widget's right edge `margin + vscroll` away from
/// the right edge of its container.
pub fn rtl_x(container_dx: i32, widget_dx: i32, margin: i32, vscroll_dx: i32) -> i32 {
    container_dx - widget_dx - margin - vscroll_dx
}
