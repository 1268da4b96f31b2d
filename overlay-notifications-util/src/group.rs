//! Group tags for single-instance notifications.
//!
//! A [`GroupId`] is an interned identity. Two tags are equal only when they
//! come from the same [`GroupId::new`] call, never because their names match.

use once_cell::sync::Lazy;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_GROUP: AtomicU32 = AtomicU32::new(1);

#[derive(Clone, Copy)]
pub struct GroupId {
    id: u32,
    name: &'static str,
}

impl GroupId {
    /// Allocate a new, distinct group tag. `name` is only used for logging.
    pub fn new(name: &'static str) -> Self {
        let id = NEXT_GROUP.fetch_add(1, Ordering::Relaxed);
        Self { id, name }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ad-hoc notifications never replace each other.
    pub fn is_ad_hoc(&self) -> bool {
        *self == *AD_HOC
    }
}

impl PartialEq for GroupId {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for GroupId {}

impl std::hash::Hash for GroupId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GroupId({}#{})", self.name, self.id)
    }
}

/// Cursor position readout
pub static CURSOR_POS: Lazy<GroupId> = Lazy::new(|| GroupId::new("cursorPosHelper"));
/// Feedback for a user action (copy, save, ...)
pub static ACTION_RESPONSE: Lazy<GroupId> = Lazy::new(|| GroupId::new("responseToAction"));
/// Current page indicator
pub static PAGE_INFO: Lazy<GroupId> = Lazy::new(|| GroupId::new("pageInfoHelper"));
/// Can have multiple of those
pub static AD_HOC: Lazy<GroupId> = Lazy::new(|| GroupId::new("notifAdHoc"));

/// Whether adding a notification in `group` replaces existing ones of the same group.
pub fn replaces_existing(group: Option<GroupId>) -> bool {
    group.is_some_and(|g| !g.is_ad_hoc())
}
