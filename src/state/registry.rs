use crate::constants::INITIAL_REGISTRY_CAPACITY;
use crate::notification::Notification;
use overlay_notifications_util::{GroupId, NotificationId, WindowId};

/// The set of live notifications
///
/// Keeps insertion order, which is also the stacking order of every parent
/// window. The registry only stores entities; relayout and window teardown
/// are done by [`Notifications`](crate::Notifications).
#[derive(Debug)]
pub struct Registry {
    notifications: Vec<Notification>,
    next_id: u32,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            notifications: Vec::with_capacity(INITIAL_REGISTRY_CAPACITY),
            next_id: 1,
        }
    }

    /// Reserve a handle for a notification about to be created
    pub fn next_id(&mut self) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        self.notifications.iter().any(|n| n.id() == id)
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id() == id)
    }

    pub fn get_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.notifications.iter_mut().find(|n| n.id() == id)
    }

    pub fn find_by_window(&self, window: WindowId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.window() == window)
    }

    pub fn find_by_window_mut(&mut self, window: WindowId) -> Option<&mut Notification> {
        self.notifications.iter_mut().find(|n| n.window() == window)
    }

    /// Detach a notification, returning it if it was present
    pub fn take(&mut self, id: NotificationId) -> Option<Notification> {
        let pos = self.notifications.iter().position(|n| n.id() == id)?;
        Some(self.notifications.remove(pos))
    }

    /// Notifications whose window is a child of `parent`, in insertion order
    pub fn for_parent(&self, parent: WindowId) -> impl Iterator<Item = &Notification> {
        self.notifications.iter().filter(move |n| n.parent() == parent)
    }

    pub fn windows_for_parent(&self, parent: WindowId) -> Vec<WindowId> {
        self.for_parent(parent).map(Notification::window).collect()
    }

    pub fn ids_for_group(&self, parent: WindowId, group: GroupId) -> Vec<NotificationId> {
        self.for_parent(parent)
            .filter(|n| n.group() == Some(group))
            .map(Notification::id)
            .collect()
    }

    pub fn get_for_group(&self, parent: WindowId, group: GroupId) -> Option<&Notification> {
        self.for_parent(parent).find(|n| n.group() == Some(group))
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessHost;
    use crate::notification::CreateParams;
    use overlay_notifications_config::LayoutConfig;
    use overlay_notifications_util::Size;

    fn make(
        host: &mut HeadlessHost,
        registry: &mut Registry,
        parent: WindowId,
        group: Option<GroupId>,
    ) -> NotificationId {
        let id = registry.next_id();
        let params = CreateParams {
            parent,
            message: format!("notification {}", id.0),
            font: None,
            timeout_ms: 0,
            warning: false,
            shrink_limit: 1.0,
        };
        let mut n = Notification::create(host, &LayoutConfig::default(), id, &params).unwrap();
        n.set_group(group);
        registry.push(n);
        id
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut registry = Registry::new();
        let a = registry.next_id();
        let b = registry.next_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_for_parent_keeps_insertion_order() {
        let mut host = HeadlessHost::new();
        let p1 = host.add_canvas(Size::new(800, 600));
        let p2 = host.add_canvas(Size::new(800, 600));
        let mut registry = Registry::new();

        let a = make(&mut host, &mut registry, p1, None);
        let _ = make(&mut host, &mut registry, p2, None);
        let c = make(&mut host, &mut registry, p1, None);

        let ids: Vec<_> = registry.for_parent(p1).map(Notification::id).collect();
        assert_eq!(ids, vec![a, c]);
        assert_eq!(registry.windows_for_parent(p2).len(), 1);
    }

    #[test]
    fn test_group_queries_are_per_parent() {
        let mut host = HeadlessHost::new();
        let p1 = host.add_canvas(Size::new(800, 600));
        let p2 = host.add_canvas(Size::new(800, 600));
        let group = GroupId::new("test");
        let mut registry = Registry::new();

        let a = make(&mut host, &mut registry, p1, Some(group));
        let b = make(&mut host, &mut registry, p2, Some(group));

        assert_eq!(registry.ids_for_group(p1, group), vec![a]);
        assert_eq!(registry.get_for_group(p2, group).map(Notification::id), Some(b));
        assert!(registry.get_for_group(p1, GroupId::new("other")).is_none());
    }

    #[test]
    fn test_take_removes_once() {
        let mut host = HeadlessHost::new();
        let p = host.add_canvas(Size::new(800, 600));
        let mut registry = Registry::new();
        let a = make(&mut host, &mut registry, p, None);

        assert!(registry.contains(a));
        assert!(registry.take(a).is_some());
        assert!(!registry.contains(a));
        assert!(registry.take(a).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_next_id_wraps_instead_of_overflowing() {
        let mut registry = Registry::new();
        registry.next_id = u32::MAX;

        assert_eq!(registry.next_id(), NotificationId(u32::MAX));
        assert_eq!(registry.next_id(), NotificationId(0));
    }
}
