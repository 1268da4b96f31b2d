//! Interfaces to the windowing system.
//!
//! The notification engine never talks to a toolkit directly. A host
//! implements [`WindowHost`] for window management, metrics and timers, and
//! hands a [`Painter`] to [`Notifications::paint`](crate::Notifications::paint)
//! when a notification window needs to be drawn.

use overlay_notifications_util::{Color, FontId, Point, Rect, Size, WindowId};

/// Arguments for creating a notification window
#[derive(Debug, Clone, Copy)]
pub struct CreateWindowArgs<'a> {
    pub parent: WindowId,
    pub text: &'a str,
    pub font: FontId,
    /// Lay out the window right-to-left.
    pub rtl: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Arrow,
    Hand,
}

pub trait WindowHost {
    /// Create a hidden, topmost child window of `args.parent` at (0, 0) with no size.
    ///
    /// Returns `None` when the window cannot be created.
    fn create_window(&mut self, args: &CreateWindowArgs<'_>) -> Option<WindowId>;

    fn destroy_window(&mut self, window: WindowId);

    fn set_text(&mut self, window: WindowId, text: &str);

    fn set_rtl(&mut self, window: WindowId, rtl: bool);

    fn show(&mut self, window: WindowId);

    fn bring_to_top(&mut self, window: WindowId);

    /// Window rectangle in the client coordinates of its parent.
    fn window_rect(&self, window: WindowId) -> Rect;

    /// Client area, always at (0, 0).
    fn client_rect(&self, window: WindowId) -> Rect;

    fn resize(&mut self, window: WindowId, size: Size);

    /// Move to `pos` in parent client coordinates without resizing.
    fn move_to(&mut self, window: WindowId, pos: Point);

    /// Single-line extent of `text` drawn with `font`.
    fn measure_text(&self, window: WindowId, text: &str, font: FontId) -> Size;

    fn default_font(&self) -> FontId;

    /// Convert logical pixels to device pixels for the monitor `window` is on.
    fn dpi_scale(&self, window: WindowId, px: i32) -> i32;

    fn is_ui_rtl(&self) -> bool;

    /// Width of a vertical scrollbar in device pixels.
    fn vscroll_width(&self) -> i32;

    /// Pointer position relative to `window`, if known.
    fn cursor_pos(&self, window: WindowId) -> Option<Point>;

    /// Arm (or re-arm) a one-shot timer. Expiry is delivered as
    /// [`WindowEvent::Timer`](crate::WindowEvent::Timer).
    fn set_timer(&mut self, window: WindowId, timer_id: u32, ms: u32);

    fn kill_timer(&mut self, window: WindowId, timer_id: u32);

    fn schedule_repaint(&mut self, window: WindowId);

    fn repaint_now(&mut self, window: WindowId);

    /// Ask for a [`WindowEvent::MouseLeave`](crate::WindowEvent::MouseLeave) once the
    /// pointer leaves.
    fn track_mouse_leave(&mut self, window: WindowId);

    fn set_cursor(&mut self, cursor: CursorShape);
}

/// Drawing primitives used by the notification renderer
pub trait Painter {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// One pixel outline
    fn stroke_rect(&mut self, rect: Rect, color: Color);

    fn draw_text(&mut self, rect: Rect, text: &str, font: FontId, color: Color);

    fn draw_close_button(&mut self, rect: Rect, hover: bool, color: Color);
}
