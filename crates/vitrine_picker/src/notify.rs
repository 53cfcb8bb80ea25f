//! User-visible notifications ("toasts").

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum NotificationLevel {
    /// Operation succeeded
    #[display("success")]
    Success,
    /// Operation failed or input was rejected
    #[display("error")]
    Error,
}

/// One message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Notification {
    level: NotificationLevel,
    message: String,
}

impl Notification {
    /// Success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    /// Error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    /// True for error notifications.
    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

/// Pending notifications, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifications {
    queue: Vec<Notification>,
}

impl Notifications {
    /// Queue a notification.
    pub fn push(&mut self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => tracing::info!(message = %notification.message, "Notify"),
            NotificationLevel::Error => tracing::warn!(message = %notification.message, "Notify"),
        }
        self.queue.push(notification);
    }

    /// Take every pending notification.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.queue)
    }

    /// Pending notifications without consuming them.
    pub fn pending(&self) -> &[Notification] {
        &self.queue
    }

    /// Most recent notification.
    pub fn last(&self) -> Option<&Notification> {
        self.queue.last()
    }
}
