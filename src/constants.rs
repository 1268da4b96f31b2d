// Constants module for overlay-notifications
// Centralizes magic numbers and task labels

// ============================================================================
// Timer Constants
// ============================================================================

/// Id of the one-shot timer that dismisses a notification after its timeout.
pub(crate) const TIMEOUT_TIMER_ID: u32 = 1;

// ============================================================================
// Registry Constants
// ============================================================================

/// Initial capacity for the notification registry
pub(crate) const INITIAL_REGISTRY_CAPACITY: usize = 8;

// ============================================================================
// Deferred Task Labels
// ============================================================================

/// Posted when a notification's timeout fires
pub(crate) const TASK_TIMER_REMOVE: &str = "TaskNotifOnTimerRemove";

/// Posted when the close button is clicked
pub(crate) const TASK_CLOSE_REMOVE: &str = "TaskNotifCloseClickRemove";
