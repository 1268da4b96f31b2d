//! In-memory window host with a virtual clock.
//!
//! Used by the demo binary and the tests. Text is measured with fixed-width
//! metrics, timers fire when [`HeadlessHost::advance`] moves the clock past
//! their deadline, and every window operation is recorded for inspection.

use crate::handlers::events::WindowEvent;
use crate::host::{CreateWindowArgs, CursorShape, Painter, WindowHost};
use crate::lifecycle::Notifications;
use overlay_notifications_util::{Color, FontId, Point, Rect, Size, WindowId};
use std::collections::BTreeMap;

pub const CHAR_WIDTH: i32 = 8;
pub const LINE_HEIGHT: i32 = 16;
pub const VSCROLL_WIDTH: i32 = 17;
pub const DEFAULT_FONT: FontId = FontId(0);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessWindow {
    pub parent: Option<WindowId>,
    pub text: String,
    /// In parent client coordinates
    pub rect: Rect,
    pub font: FontId,
    pub visible: bool,
    pub rtl: bool,
    pub repaints: u32,
    pub scheduled_repaints: u32,
    pub tracking_leave: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingTimer {
    window: WindowId,
    timer_id: u32,
    due_ms: u64,
}

#[derive(Debug)]
pub struct HeadlessHost {
    now_ms: u64,
    next_window: u64,
    windows: BTreeMap<WindowId, HeadlessWindow>,
    timers: Vec<PendingTimer>,
    /// Top-most window last
    z_order: Vec<WindowId>,
    destroyed: Vec<WindowId>,
    ui_rtl: bool,
    dpi_percent: i32,
    cursor: Option<(WindowId, Point)>,
    cursor_shape: CursorShape,
    fail_next_create: bool,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_window: 1,
            windows: BTreeMap::new(),
            timers: Vec::new(),
            z_order: Vec::new(),
            destroyed: Vec::new(),
            ui_rtl: false,
            dpi_percent: 100,
            cursor: None,
            cursor_shape: CursorShape::Arrow,
            fail_next_create: false,
        }
    }

    /// Add a top-level canvas notifications can be attached to
    pub fn add_canvas(&mut self, size: Size) -> WindowId {
        let id = self.alloc_window();
        self.windows.insert(
            id,
            HeadlessWindow {
                parent: None,
                text: String::new(),
                rect: Rect::from_size(size),
                font: DEFAULT_FONT,
                visible: true,
                rtl: false,
                repaints: 0,
                scheduled_repaints: 0,
                tracking_leave: false,
            },
        );
        id
    }

    pub fn set_ui_rtl(&mut self, rtl: bool) {
        self.ui_rtl = rtl;
    }

    /// 100 is 96 DPI, 200 is 192 DPI
    pub fn set_dpi_percent(&mut self, percent: i32) {
        self.dpi_percent = percent;
    }

    /// Make the next `create_window` fail
    pub fn fail_next_create(&mut self) {
        self.fail_next_create = true;
    }

    pub fn set_cursor_pos(&mut self, window: WindowId, pt: Point) {
        self.cursor = Some((window, pt));
    }

    pub fn clear_cursor_pos(&mut self) {
        self.cursor = None;
    }

    pub fn cursor_shape(&self) -> CursorShape {
        self.cursor_shape
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn window(&self, window: WindowId) -> Option<&HeadlessWindow> {
        self.windows.get(&window)
    }

    pub fn is_alive(&self, window: WindowId) -> bool {
        self.windows.contains_key(&window)
    }

    /// Windows destroyed so far, in order
    pub fn destroyed(&self) -> &[WindowId] {
        &self.destroyed
    }

    pub fn top_window(&self) -> Option<WindowId> {
        self.z_order.last().copied()
    }

    pub fn has_timer(&self, window: WindowId, timer_id: u32) -> bool {
        self.timers
            .iter()
            .any(|t| t.window == window && t.timer_id == timer_id)
    }

    /// Move the clock forward and return the timers that expired, oldest deadline first.
    pub fn advance(&mut self, ms: u64) -> Vec<(WindowId, u32)> {
        self.now_ms += ms;
        let now = self.now_ms;
        let mut due: Vec<PendingTimer> = self
            .timers
            .iter()
            .copied()
            .filter(|t| t.due_ms <= now)
            .collect();
        self.timers.retain(|t| t.due_ms > now);
        due.sort_by_key(|t| t.due_ms);
        due.into_iter().map(|t| (t.window, t.timer_id)).collect()
    }

    fn alloc_window(&mut self) -> WindowId {
        let id = WindowId(self.next_window);
        self.next_window += 1;
        id
    }

    fn window_mut(&mut self, window: WindowId) -> Option<&mut HeadlessWindow> {
        let w = self.windows.get_mut(&window);
        if w.is_none() {
            tracing::warn!(?window, "operation on unknown window");
        }
        w
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowHost for HeadlessHost {
    fn create_window(&mut self, args: &CreateWindowArgs<'_>) -> Option<WindowId> {
        if std::mem::take(&mut self.fail_next_create) || !self.is_alive(args.parent) {
            return None;
        }
        let id = self.alloc_window();
        self.windows.insert(
            id,
            HeadlessWindow {
                parent: Some(args.parent),
                text: args.text.to_string(),
                rect: Rect::default(),
                font: args.font,
                visible: false,
                rtl: args.rtl,
                repaints: 0,
                scheduled_repaints: 0,
                tracking_leave: false,
            },
        );
        Some(id)
    }

    fn destroy_window(&mut self, window: WindowId) {
        if self.windows.remove(&window).is_some() {
            self.timers.retain(|t| t.window != window);
            self.z_order.retain(|w| *w != window);
            self.destroyed.push(window);
        }
    }

    fn set_text(&mut self, window: WindowId, text: &str) {
        if let Some(w) = self.window_mut(window) {
            w.text = text.to_string();
        }
    }

    fn set_rtl(&mut self, window: WindowId, rtl: bool) {
        if let Some(w) = self.window_mut(window) {
            w.rtl = rtl;
        }
    }

    fn show(&mut self, window: WindowId) {
        if let Some(w) = self.window_mut(window) {
            w.visible = true;
        }
    }

    fn bring_to_top(&mut self, window: WindowId) {
        self.z_order.retain(|w| *w != window);
        self.z_order.push(window);
    }

    fn window_rect(&self, window: WindowId) -> Rect {
        self.windows.get(&window).map(|w| w.rect).unwrap_or_default()
    }

    fn client_rect(&self, window: WindowId) -> Rect {
        Rect::from_size(self.window_rect(window).size())
    }

    fn resize(&mut self, window: WindowId, size: Size) {
        if let Some(w) = self.window_mut(window) {
            w.rect.dx = size.dx;
            w.rect.dy = size.dy;
        }
    }

    fn move_to(&mut self, window: WindowId, pos: Point) {
        if let Some(w) = self.window_mut(window) {
            w.rect.x = pos.x;
            w.rect.y = pos.y;
        }
    }

    fn measure_text(&self, window: WindowId, text: &str, _font: FontId) -> Size {
        let chars = text.chars().count() as i32;
        Size::new(
            self.dpi_scale(window, chars * CHAR_WIDTH),
            self.dpi_scale(window, LINE_HEIGHT),
        )
    }

    fn default_font(&self) -> FontId {
        DEFAULT_FONT
    }

    fn dpi_scale(&self, _window: WindowId, px: i32) -> i32 {
        px * self.dpi_percent / 100
    }

    fn is_ui_rtl(&self) -> bool {
        self.ui_rtl
    }

    fn vscroll_width(&self) -> i32 {
        VSCROLL_WIDTH
    }

    fn cursor_pos(&self, window: WindowId) -> Option<Point> {
        match self.cursor {
            Some((w, pt)) if w == window => Some(pt),
            _ => None,
        }
    }

    fn set_timer(&mut self, window: WindowId, timer_id: u32, ms: u32) {
        self.kill_timer(window, timer_id);
        self.timers.push(PendingTimer {
            window,
            timer_id,
            due_ms: self.now_ms + u64::from(ms),
        });
    }

    fn kill_timer(&mut self, window: WindowId, timer_id: u32) {
        self.timers
            .retain(|t| !(t.window == window && t.timer_id == timer_id));
    }

    fn schedule_repaint(&mut self, window: WindowId) {
        if let Some(w) = self.window_mut(window) {
            w.scheduled_repaints += 1;
        }
    }

    fn repaint_now(&mut self, window: WindowId) {
        if let Some(w) = self.window_mut(window) {
            w.repaints += 1;
        }
    }

    fn track_mouse_leave(&mut self, window: WindowId) {
        if let Some(w) = self.window_mut(window) {
            w.tracking_leave = true;
        }
    }

    fn set_cursor(&mut self, cursor: CursorShape) {
        self.cursor_shape = cursor;
    }
}

impl Notifications<HeadlessHost> {
    /// Advance the virtual clock, deliver expired timers and run the posted tasks.
    pub fn advance(&mut self, ms: u64) {
        let due = self.host_mut().advance(ms);
        for (window, timer_id) in due {
            self.handle_event(window, WindowEvent::Timer(timer_id));
        }
        self.run_pending_tasks();
    }
}

/// Painter that keeps a textual trace of the draw calls
#[derive(Debug, Default)]
pub struct TracePainter {
    pub lines: Vec<String>,
}

impl Painter for TracePainter {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.lines.push(format!("fill {:?} {:?}", rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.lines.push(format!("stroke {:?} {:?}", rect, color));
    }

    fn draw_text(&mut self, rect: Rect, text: &str, _font: FontId, _color: Color) {
        self.lines.push(format!("text {:?} {:?}", rect, text));
    }

    fn draw_close_button(&mut self, rect: Rect, hover: bool, _color: Color) {
        self.lines.push(format!("close {:?} hover={}", rect, hover));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timers_fire_in_deadline_order() {
        let mut host = HeadlessHost::new();
        let canvas = host.add_canvas(Size::new(100, 100));
        host.set_timer(canvas, 2, 500);
        host.set_timer(canvas, 1, 200);

        assert!(host.advance(100).is_empty());
        assert_eq!(host.advance(400), vec![(canvas, 1), (canvas, 2)]);
        assert!(host.advance(1000).is_empty());
    }

    #[test]
    fn test_set_timer_rearms() {
        let mut host = HeadlessHost::new();
        let canvas = host.add_canvas(Size::new(100, 100));
        host.set_timer(canvas, 1, 100);
        host.advance(50);
        host.set_timer(canvas, 1, 100);

        assert!(host.advance(60).is_empty());
        assert_eq!(host.advance(40), vec![(canvas, 1)]);
    }

    #[test]
    fn test_create_fails_on_request_or_missing_parent() {
        let mut host = HeadlessHost::new();
        let canvas = host.add_canvas(Size::new(100, 100));
        let args = CreateWindowArgs {
            parent: canvas,
            text: "x",
            font: DEFAULT_FONT,
            rtl: false,
        };

        host.fail_next_create();
        assert!(host.create_window(&args).is_none());
        assert!(host.create_window(&args).is_some());

        let orphan = CreateWindowArgs {
            parent: WindowId(999),
            ..args
        };
        assert!(host.create_window(&orphan).is_none());
    }

    #[test]
    fn test_measure_text_scales_with_dpi() {
        let mut host = HeadlessHost::new();
        let canvas = host.add_canvas(Size::new(100, 100));
        assert_eq!(host.measure_text(canvas, "abcd", DEFAULT_FONT), Size::new(32, 16));
        host.set_dpi_percent(200);
        assert_eq!(host.measure_text(canvas, "abcd", DEFAULT_FONT), Size::new(64, 32));
    }

    #[test]
    fn test_destroy_drops_timers() {
        let mut host = HeadlessHost::new();
        let canvas = host.add_canvas(Size::new(100, 100));
        host.set_timer(canvas, 1, 10);
        host.destroy_window(canvas);

        assert!(!host.is_alive(canvas));
        assert_eq!(host.destroyed(), &[canvas]);
        assert!(host.advance(100).is_empty());
    }
}
