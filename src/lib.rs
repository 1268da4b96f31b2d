//! Transient notification overlays for a host application window.
//!
//! Notifications stack in a column at the top of their parent window,
//! replace each other by group, dismiss themselves on a timeout or a click on
//! their close button, and are always destroyed through a deferred task so an
//! event handler never tears down its own window.

pub(crate) mod constants;
pub mod handlers;
pub mod headless;
pub mod host;
pub mod layout;
pub mod lifecycle;
pub mod notification;
pub mod rendering;
pub mod state;
pub mod tasks;

pub use handlers::{EventResult, WindowEvent};
pub use headless::HeadlessHost;
pub use host::{CreateWindowArgs, CursorShape, Painter, WindowHost};
pub use lifecycle::{NotificationArgs, Notifications, OnRemoved, RemovedCallback};
pub use notification::Notification;
pub use overlay_notifications_config::NotificationsConfig;
pub use overlay_notifications_util::{
    FontId, GroupId, NotificationId, Point, Rect, Size, WindowId, calc_perc,
};
