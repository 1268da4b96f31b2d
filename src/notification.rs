//! A single on-screen notification.

use crate::constants::TIMEOUT_TIMER_ID;
use crate::handlers::events::{Dismiss, EventResponse, WindowEvent};
use crate::host::{CreateWindowArgs, CursorShape, Painter, WindowHost};
use crate::rendering::card;
use overlay_notifications_config::LayoutConfig;
use overlay_notifications_util::{
    ContentLayout, FontId, GroupId, Metrics, NO_PROGRESS, NotificationId, Point, Rect, Theme,
    WindowId, report_if, rtl_x,
};

/// What the entity needs to create its window
#[derive(Debug, Clone, PartialEq)]
pub struct CreateParams {
    pub parent: WindowId,
    pub message: String,
    pub font: Option<FontId>,
    pub timeout_ms: u32,
    pub warning: bool,
    pub shrink_limit: f32,
}

#[derive(Debug)]
pub struct Notification {
    id: NotificationId,
    window: WindowId,
    parent: WindowId,
    font: FontId,
    message: String,
    /// 0 means no timeout
    timeout_ms: u32,
    highlight: bool,
    /// There can only be a single notification of a given group per parent
    group: Option<GroupId>,
    /// To reduce flicker the window only shrinks below this fraction of its width
    shrink_limit: f32,
    progress_perc: i32,
    rect_text: Rect,
    rect_close: Rect,
    rect_progress: Rect,
}

impl Notification {
    /// Create, lay out and show the window. Arms the timeout when `timeout_ms != 0`.
    pub fn create<H: WindowHost + ?Sized>(
        host: &mut H,
        layout: &LayoutConfig,
        id: NotificationId,
        params: &CreateParams,
    ) -> Option<Self> {
        let mut shrink_limit = params.shrink_limit;
        if report_if(
            !(shrink_limit >= layout.min_shrink_limit && shrink_limit <= 1.0),
            "shrink limit out of range",
        ) {
            shrink_limit = 1.0;
        }

        let font = params.font.unwrap_or_else(|| host.default_font());
        let rtl = host.is_ui_rtl();
        let window = host.create_window(&CreateWindowArgs {
            parent: params.parent,
            text: &params.message,
            font,
            rtl,
        })?;

        let mut notification = Self {
            id,
            window,
            parent: params.parent,
            font,
            message: params.message.clone(),
            timeout_ms: params.timeout_ms,
            highlight: params.warning,
            group: None,
            shrink_limit,
            progress_perc: NO_PROGRESS,
            rect_text: Rect::default(),
            rect_close: Rect::default(),
            rect_progress: Rect::default(),
        };

        host.set_rtl(window, rtl);
        notification.layout(host, layout);
        host.show(window);

        if notification.timeout_ms != 0 {
            host.set_timer(window, TIMEOUT_TIMER_ID, notification.timeout_ms);
        }
        tracing::debug!(?id, ?window, timeout_ms = notification.timeout_ms, "notification created");
        Some(notification)
    }

    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn window(&self) -> WindowId {
        self.window
    }

    pub fn parent(&self) -> WindowId {
        self.parent
    }

    pub fn font(&self) -> FontId {
        self.font
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlight
    }

    pub fn group(&self) -> Option<GroupId> {
        self.group
    }

    pub(crate) fn set_group(&mut self, group: Option<GroupId>) {
        self.group = group;
    }

    pub fn shrink_limit(&self) -> f32 {
        self.shrink_limit
    }

    /// -1 when there is no progress bar
    pub fn progress(&self) -> i32 {
        self.progress_perc
    }

    pub fn has_progress(&self) -> bool {
        self.progress_perc >= 0
    }

    pub fn text_rect(&self) -> Rect {
        self.rect_text
    }

    pub fn close_rect(&self) -> Rect {
        self.rect_close
    }

    pub fn progress_rect(&self) -> Rect {
        self.rect_progress
    }

    pub fn is_over_close(&self, pt: Point) -> bool {
        self.rect_close.contains(pt)
    }

    /// Replace text and highlight, re-layout, repaint and re-arm the timeout.
    pub fn update_message<H: WindowHost + ?Sized>(
        &mut self,
        host: &mut H,
        layout: &LayoutConfig,
        message: &str,
        timeout_ms: u32,
        highlight: bool,
    ) {
        host.set_text(self.window, message);
        self.message = message.to_string();
        self.highlight = highlight;
        self.timeout_ms = timeout_ms;
        let rtl = host.is_ui_rtl();
        host.set_rtl(self.window, rtl);
        self.layout(host, layout);
        host.repaint_now(self.window);
        if timeout_ms != 0 {
            host.set_timer(self.window, TIMEOUT_TIMER_ID, timeout_ms);
        } else {
            host.kill_timer(self.window, TIMEOUT_TIMER_ID);
        }
    }

    /// Store a percentage the caller already checked is within 0-100. The
    /// caller re-runs [`Self::update_message`] since the bar changes the
    /// window height.
    pub(crate) fn set_progress(&mut self, perc: i32) {
        self.progress_perc = perc;
    }

    /// Size the window to the current message and compute the sub-rectangles.
    pub fn layout<H: WindowHost + ?Sized>(&mut self, host: &mut H, layout: &LayoutConfig) {
        let window = self.window;
        let text_size = host.measure_text(window, &self.message, self.font);
        let metrics = Metrics::scaled(layout, |px| host.dpi_scale(window, px));
        let current = host.window_rect(window);

        let content = ContentLayout::compute(
            text_size,
            &metrics,
            self.has_progress(),
            current.size(),
            self.shrink_limit,
        );
        self.rect_text = content.text;
        self.rect_close = content.close;
        self.rect_progress = content.progress;

        if content.size == current.size() {
            return;
        }
        tracing::trace!(?window, size = ?content.size, "resizing notification");
        host.resize(window, content.size);

        // Keep the right edge anchored for right-to-left layouts
        if host.is_ui_rtl() {
            let container = host.client_rect(self.parent);
            let r = host.window_rect(window);
            let margin = host.dpi_scale(window, layout.top_left_margin);
            let x = rtl_x(container.dx, r.dx, margin, host.vscroll_width());
            host.move_to(window, Point::new(x, r.y));
        }
    }

    pub(crate) fn handle_event<H: WindowHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: WindowEvent,
    ) -> EventResponse {
        match event {
            WindowEvent::SetCursor => match host.cursor_pos(self.window) {
                Some(pt) if self.is_over_close(pt) => {
                    host.set_cursor(CursorShape::Hand);
                    EventResponse::Handled
                }
                _ => EventResponse::Default,
            },
            // The paint buffer covers the whole window
            WindowEvent::EraseBackground => EventResponse::Handled,
            WindowEvent::MouseMove(pt) => {
                host.schedule_repaint(self.window);
                if self.is_over_close(pt) {
                    host.track_mouse_leave(self.window);
                }
                EventResponse::Default
            }
            WindowEvent::MouseLeave => {
                host.schedule_repaint(self.window);
                EventResponse::Handled
            }
            WindowEvent::LeftButtonUp(pt) if self.is_over_close(pt) => {
                EventResponse::Dismiss(Dismiss::CloseClicked)
            }
            WindowEvent::LeftButtonUp(_) => EventResponse::Default,
            WindowEvent::Timer(timer_id) => {
                if report_if(timer_id != TIMEOUT_TIMER_ID, "unexpected timer id") {
                    return EventResponse::Default;
                }
                host.kill_timer(self.window, TIMEOUT_TIMER_ID);
                EventResponse::Dismiss(Dismiss::Timeout)
            }
        }
    }

    /// Paint through an off-screen buffer onto `target`.
    pub fn paint(
        &self,
        target: &mut dyn Painter,
        theme: &Theme,
        client: Rect,
        cursor: Option<Point>,
    ) {
        card::paint_notification(self, target, theme, client, cursor);
    }

    /// Tear down the window. Consumes the entity.
    pub(crate) fn destroy<H: WindowHost + ?Sized>(self, host: &mut H) {
        tracing::debug!(id = ?self.id, window = ?self.window, "notification destroyed");
        host.kill_timer(self.window, TIMEOUT_TIMER_ID);
        host.destroy_window(self.window);
    }
}
