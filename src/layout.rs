//! Stacking of the notifications that share a parent window.

use crate::host::WindowHost;
use overlay_notifications_config::LayoutConfig;
use overlay_notifications_util::{Point, Size, WindowId, rtl_x};

/// Horizontal anchoring of a stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackDirection {
    LeftToRight,
    /// Right edges aligned, leaving room for a vertical scrollbar
    RightToLeft { container_dx: i32, vscroll_dx: i32 },
}

/// Top-left positions for a column of widgets with the given sizes.
///
/// The column starts `margin` below the top of the container and widgets are
/// `gap` apart, in the order given.
pub fn stack_positions(
    sizes: impl IntoIterator<Item = Size>,
    margin: i32,
    gap: i32,
    direction: StackDirection,
) -> Vec<Point> {
    let mut y = margin;
    sizes
        .into_iter()
        .map(|size| {
            let x = match direction {
                StackDirection::LeftToRight => margin,
                StackDirection::RightToLeft {
                    container_dx,
                    vscroll_dx,
                } => rtl_x(container_dx, size.dx, margin, vscroll_dx),
            };
            let pos = Point::new(x, y);
            y += size.dy + gap;
            pos
        })
        .collect()
}

/// Move `windows`, all children of `parent`, into a vertical stack.
pub fn relayout<H: WindowHost + ?Sized>(
    host: &mut H,
    config: &LayoutConfig,
    parent: WindowId,
    windows: &[WindowId],
) {
    if windows.is_empty() {
        return;
    }

    let margin = host.dpi_scale(parent, config.top_left_margin);
    let gap = host.dpi_scale(parent, config.padding);
    let direction = if host.is_ui_rtl() {
        StackDirection::RightToLeft {
            container_dx: host.client_rect(parent).dx,
            vscroll_dx: host.vscroll_width(),
        }
    } else {
        StackDirection::LeftToRight
    };

    let sizes: Vec<Size> = windows.iter().map(|w| host.window_rect(*w).size()).collect();
    let positions = stack_positions(sizes, margin, gap, direction);
    tracing::trace!(?parent, count = windows.len(), "relayout notifications");
    for (window, pos) in windows.iter().zip(positions) {
        host.move_to(*window, pos);
    }
}
