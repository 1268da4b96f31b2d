pub mod geometry;
pub mod group;
pub mod progress;
pub mod report;
pub mod theme;

pub use geometry::{ContentLayout, Metrics, Point, Rect, Size, rtl_x};
pub use group::{ACTION_RESPONSE, AD_HOC, CURSOR_POS, GroupId, PAGE_INFO, replaces_existing};
pub use progress::{NO_PROGRESS, calc_perc, is_valid_percent, progress_fill};
pub use report::report_if;
pub use theme::{Color, Theme};

/// Handle of a window owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u64);

/// Handle of a live notification.
///
/// Stays unique for the lifetime of the registry that issued it, so a stale
/// handle never aliases a newer notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u32);

/// Font selected by the host. `None` in create arguments means the host default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(pub u32);
