use overlay_notifications_util::Point;

/// Window events a host forwards to a notification window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The host is about to pick the pointer shape
    SetCursor,
    /// Background erase request
    EraseBackground,
    /// Pointer moved, in window coordinates
    MouseMove(Point),
    /// Pointer left the window after `track_mouse_leave`
    MouseLeave,
    /// Left button released, in window coordinates
    LeftButtonUp(Point),
    /// A timer armed with `set_timer` expired
    Timer(u32),
}

/// Whether the event was consumed or the host should run its default handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Handled,
    Default,
}

/// Why a notification asked to be dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dismiss {
    Timeout,
    CloseClicked,
}

/// Outcome of a notification handling one of its own events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EventResponse {
    Handled,
    Default,
    /// Consumed; the notification must be removed once the handler returned.
    Dismiss(Dismiss),
}
