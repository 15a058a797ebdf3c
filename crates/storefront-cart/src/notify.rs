//! Transient UI notifications.
//!
//! Notifications are ephemeral by design: they live in memory, are
//! never persisted with the cart, and expire after a fixed display
//! window. The presentation layer pushes them ("item added to cart"),
//! renders whatever is active, and calls [`NotificationCenter::sweep`]
//! on its tick to drop the expired ones.

use std::time::{Duration, Instant};

/// How long a notification stays visible.
pub const DISPLAY_WINDOW: Duration = Duration::from_secs(3);

/// Identifier of a single notification, unique within its center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Get the raw id value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Visual flavor of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Something worked (e.g. "added to cart").
    Success,
    /// Something failed but the page keeps going.
    Error,
    /// Neutral information.
    Info,
}

/// A single transient message.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique id within the owning center.
    pub id: NotificationId,
    /// Short heading.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Visual flavor.
    pub kind: NotificationKind,
    created_at: Instant,
}

impl Notification {
    /// Check whether this notification has outlived `window`.
    fn expired(&self, window: Duration, now: Instant) -> bool {
        now.duration_since(self.created_at) >= window
    }
}

/// Owner of the currently-visible notifications.
#[derive(Debug)]
pub struct NotificationCenter {
    window: Duration,
    next_id: u64,
    active: Vec<Notification>,
}

impl NotificationCenter {
    /// Create a center with the default 3-second display window.
    pub fn new() -> Self {
        Self::with_window(DISPLAY_WINDOW)
    }

    /// Create a center with a custom display window.
    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            next_id: 0,
            active: Vec::new(),
        }
    }

    /// Push a notification and return its id.
    pub fn push(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.active.push(Notification {
            id,
            title: title.into(),
            message: message.into(),
            kind,
            created_at: Instant::now(),
        });
        id
    }

    /// Dismiss a notification early. `false` if it was already gone.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let len_before = self.active.len();
        self.active.retain(|n| n.id != id);
        self.active.len() < len_before
    }

    /// Drop every notification older than the display window.
    pub fn sweep(&mut self) {
        let now = Instant::now();
        let window = self.window;
        self.active.retain(|n| !n.expired(window, now));
    }

    /// Currently-visible notifications, oldest first.
    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    /// Check if nothing is on screen.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}
