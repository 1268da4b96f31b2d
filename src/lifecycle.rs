//! Public notification API.
//!
//! [`Notifications`] owns the registry, the deferred task queue and the host.
//! All operations run on the host's UI thread. Timeouts and close clicks are
//! never handled synchronously: they post a task that runs after the event
//! handler returned, via [`Notifications::run_pending_tasks`].

use crate::constants::{TASK_CLOSE_REMOVE, TASK_TIMER_REMOVE};
use crate::handlers::events::{Dismiss, EventResponse, EventResult, WindowEvent};
use crate::host::{Painter, WindowHost};
use crate::layout;
use crate::notification::{CreateParams, Notification};
use crate::state::Registry;
use crate::tasks::{TaskPoster, TaskQueue};
use overlay_notifications_config::NotificationsConfig;
use overlay_notifications_util::{
    FontId, GroupId, NotificationId, Theme, WindowId, is_valid_percent, replaces_existing,
    report_if,
};
use std::collections::HashMap;
use std::fmt;

/// Custom handler run when a notification is dismissed by timeout or close click.
///
/// The handler owns the decision to remove: it usually cleans up its own state
/// and then calls [`Notifications::remove_notification`].
pub type RemovedCallback<H> = Box<dyn FnMut(&mut Notifications<H>, NotificationId)>;

/// What happens when a notification is dismissed
pub enum OnRemoved<H> {
    /// Remove and destroy it right away
    Destroy,
    Custom(RemovedCallback<H>),
}

impl<H> Default for OnRemoved<H> {
    fn default() -> Self {
        Self::Destroy
    }
}

impl<H> fmt::Debug for OnRemoved<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OnRemoved::Destroy => write!(f, "Destroy"),
            OnRemoved::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Arguments for [`Notifications::show_notification`]
#[derive(Debug)]
pub struct NotificationArgs<H> {
    pub parent: WindowId,
    pub message: String,
    pub font: Option<FontId>,
    /// 0 means the notification stays until removed
    pub timeout_ms: u32,
    pub warning: bool,
    pub group: Option<GroupId>,
    pub shrink_limit: f32,
    pub on_removed: OnRemoved<H>,
}

impl<H> NotificationArgs<H> {
    pub fn new(parent: WindowId, message: impl Into<String>) -> Self {
        Self {
            parent,
            message: message.into(),
            font: None,
            timeout_ms: 0,
            warning: false,
            group: None,
            shrink_limit: 1.0,
            on_removed: OnRemoved::Destroy,
        }
    }

    pub fn font(mut self, font: FontId) -> Self {
        self.font = Some(font);
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn warning(mut self, warning: bool) -> Self {
        self.warning = warning;
        self
    }

    pub fn group(mut self, group: GroupId) -> Self {
        self.group = Some(group);
        self
    }

    pub fn shrink_limit(mut self, shrink_limit: f32) -> Self {
        self.shrink_limit = shrink_limit;
        self
    }

    pub fn on_removed(
        mut self,
        callback: impl FnMut(&mut Notifications<H>, NotificationId) + 'static,
    ) -> Self {
        self.on_removed = OnRemoved::Custom(Box::new(callback));
        self
    }
}

pub struct Notifications<H> {
    host: H,
    config: NotificationsConfig,
    theme: Theme,
    registry: Registry,
    callbacks: HashMap<NotificationId, RemovedCallback<H>>,
    tasks: TaskQueue<Notifications<H>>,
}

impl<H: WindowHost + 'static> Notifications<H> {
    pub fn new(host: H, config: NotificationsConfig) -> Self {
        let theme = Theme::from_config(&config.theme);
        Self {
            host,
            config,
            theme,
            registry: Registry::new(),
            callbacks: HashMap::new(),
            tasks: TaskQueue::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &NotificationsConfig {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Handle for posting work that must run after the current event handler
    pub fn task_poster(&self) -> TaskPoster<Self> {
        self.tasks.poster()
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Run posted tasks in order, including tasks posted while draining.
    ///
    /// Returns the number of tasks run.
    pub fn run_pending_tasks(&mut self) -> usize {
        let mut count = 0;
        while let Some(posted) = self.tasks.pop() {
            tracing::trace!(label = posted.label, "running task");
            (posted.task)(self);
            count += 1;
        }
        count
    }

    /// Create and register a notification
    ///
    /// Returns `None` if the host could not create the window.
    pub fn show_notification(&mut self, args: NotificationArgs<H>) -> Option<NotificationId> {
        let NotificationArgs {
            parent,
            message,
            font,
            timeout_ms,
            warning,
            group,
            shrink_limit,
            on_removed,
        } = args;
        let params = CreateParams {
            parent,
            message,
            font,
            timeout_ms,
            warning,
            shrink_limit,
        };

        let id = self.registry.next_id();
        let Some(notification) =
            Notification::create(&mut self.host, &self.config.layout, id, &params)
        else {
            tracing::warn!(?parent, "failed to create notification window");
            return None;
        };

        self.host.bring_to_top(notification.window());
        if let OnRemoved::Custom(callback) = on_removed {
            self.callbacks.insert(id, callback);
        }
        self.add(notification, group);
        Some(id)
    }

    /// Show a notification that goes away after `timeout_ms`, or the default
    /// timeout when `timeout_ms <= 0`
    pub fn show_temporary_notification(
        &mut self,
        parent: WindowId,
        message: &str,
        timeout_ms: i32,
    ) -> Option<NotificationId> {
        let timeout_ms = if timeout_ms <= 0 {
            self.config.default_timeout_ms
        } else {
            timeout_ms as u32
        };
        self.show_notification(NotificationArgs::new(parent, message).timeout_ms(timeout_ms))
    }

    /// Show a highlighted notification. A negative timeout uses the default,
    /// 0 keeps it until removed.
    pub fn show_warning_notification(
        &mut self,
        parent: WindowId,
        message: &str,
        timeout_ms: i32,
    ) -> Option<NotificationId> {
        let timeout_ms = if timeout_ms < 0 {
            self.config.default_timeout_ms
        } else {
            timeout_ms as u32
        };
        self.show_notification(
            NotificationArgs::new(parent, message)
                .warning(true)
                .timeout_ms(timeout_ms),
        )
    }

    /// Register `notification`, replacing any notification of the same group
    /// under the same parent unless the group is ad-hoc.
    fn add(&mut self, mut notification: Notification, group: Option<GroupId>) {
        let parent = notification.parent();
        let replaced = match group {
            Some(g) if replaces_existing(group) => self.remove_for_group(parent, g),
            _ => 0,
        };
        if replaced > 0 {
            tracing::debug!(?group, replaced, "replaced notifications in group");
        }
        notification.set_group(group);
        self.registry.push(notification);
        self.relayout(parent);
    }

    /// Remove and destroy a notification. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let Some(notification) = self.registry.take(id) else {
            tracing::trace!(?id, "notification already removed");
            return false;
        };
        self.callbacks.remove(&id);
        self.relayout(notification.parent());
        notification.destroy(&mut self.host);
        true
    }

    /// Remove every notification of `group` under `parent`. Returns how many were removed.
    pub fn remove_for_group(&mut self, parent: WindowId, group: GroupId) -> usize {
        let mut removed = 0;
        for id in self.registry.ids_for_group(parent, group) {
            if self.remove(id) {
                removed += 1;
            }
        }
        removed
    }

    pub fn get_for_group(&self, parent: WindowId, group: GroupId) -> Option<&Notification> {
        self.registry.get_for_group(parent, group)
    }

    /// Notifications shown on `parent`, in stacking order
    pub fn list_for_parent(&self, parent: WindowId) -> impl Iterator<Item = &Notification> {
        self.registry.for_parent(parent)
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.registry.get(id)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Whether `id` still refers to a live notification.
    ///
    /// Notifications can disappear on timeout or when closed by the user, so
    /// callers holding a handle must check this before updating it.
    pub fn is_notification_valid(&self, id: NotificationId) -> bool {
        self.registry.contains(id)
    }

    pub fn remove_notification(&mut self, id: NotificationId) -> bool {
        self.remove(id)
    }

    pub fn remove_notifications_for_group(&mut self, parent: WindowId, group: GroupId) -> bool {
        self.remove_for_group(parent, group) > 0
    }

    pub fn get_notification_for_group(
        &self,
        parent: WindowId,
        group: GroupId,
    ) -> Option<NotificationId> {
        self.get_for_group(parent, group).map(Notification::id)
    }

    /// Replace the message of a live notification. Returns `false` for a stale handle.
    pub fn notification_update_message(
        &mut self,
        id: NotificationId,
        message: &str,
        timeout_ms: u32,
        highlight: bool,
    ) -> bool {
        let Some(notification) = self.registry.get_mut(id) else {
            report_if(true, "update of a removed notification");
            return false;
        };
        let (parent, window) = (notification.parent(), notification.window());
        let old_dy = self.host.window_rect(window).dy;
        notification.update_message(
            &mut self.host,
            &self.config.layout,
            message,
            timeout_ms,
            highlight,
        );
        // A taller or shorter card moves everything stacked below it
        if self.host.window_rect(window).dy != old_dy {
            self.relayout(parent);
        }
        true
    }

    /// Set the progress bar to `perc` (0-100), keeping the current message.
    pub fn update_progress(&mut self, id: NotificationId, perc: i32) -> bool {
        let Some(message) = self.registry.get(id).map(|n| n.message().to_string()) else {
            return false;
        };
        self.update_notification_progress(id, &message, perc)
    }

    /// Set the progress bar and the message together.
    ///
    /// Like any message update this clears the timeout and the highlight.
    pub fn update_notification_progress(
        &mut self,
        id: NotificationId,
        message: &str,
        perc: i32,
    ) -> bool {
        if report_if(!is_valid_percent(perc), "progress percentage out of range") {
            return false;
        }
        let Some(notification) = self.registry.get_mut(id) else {
            return false;
        };
        notification.set_progress(perc);
        self.notification_update_message(id, message, 0, false)
    }

    /// Dispatch a window event to the notification owning `window`.
    ///
    /// Events for windows that are not notifications get [`EventResult::Default`].
    pub fn handle_event(&mut self, window: WindowId, event: WindowEvent) -> EventResult {
        let Some(notification) = self.registry.find_by_window_mut(window) else {
            return EventResult::Default;
        };
        let id = notification.id();
        match notification.handle_event(&mut self.host, event) {
            EventResponse::Handled => EventResult::Handled,
            EventResponse::Default => EventResult::Default,
            EventResponse::Dismiss(reason) => {
                let label = match reason {
                    Dismiss::Timeout => TASK_TIMER_REMOVE,
                    Dismiss::CloseClicked => TASK_CLOSE_REMOVE,
                };
                tracing::debug!(?id, ?reason, "scheduling notification removal");
                self.tasks.post(label, move |n: &mut Self| n.dispatch_removed(id));
                EventResult::Handled
            }
        }
    }

    /// Paint the notification owning `window`. Returns `false` if there is none.
    pub fn paint(&self, window: WindowId, target: &mut dyn Painter) -> bool {
        let Some(notification) = self.registry.find_by_window(window) else {
            return false;
        };
        let client = self.host.client_rect(window);
        let cursor = self.host.cursor_pos(window);
        notification.paint(target, &self.theme, client, cursor);
        true
    }

    /// Re-stack all notifications of `parent`
    pub fn relayout(&mut self, parent: WindowId) {
        let windows = self.registry.windows_for_parent(parent);
        layout::relayout(&mut self.host, &self.config.layout, parent, &windows);
    }

    /// Deferred half of a dismissal. A no-op if the notification is already gone.
    fn dispatch_removed(&mut self, id: NotificationId) {
        if !self.is_notification_valid(id) {
            tracing::debug!(?id, "dismissed notification already removed");
            return;
        }
        match self.callbacks.remove(&id) {
            None => {
                self.remove(id);
            }
            Some(mut callback) => {
                callback(self, id);
                // The callback may keep the notification alive
                if self.is_notification_valid(id) {
                    self.callbacks.entry(id).or_insert(callback);
                }
            }
        }
    }
}

impl<H> fmt::Debug for Notifications<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifications")
            .field("registry", &self.registry)
            .field("callbacks", &self.callbacks.len())
            .finish_non_exhaustive()
    }
}
