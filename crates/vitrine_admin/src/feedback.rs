//! Turning errors into notifications.

use vitrine_error::{VitrineError, VitrineErrorKind};
use vitrine_picker::{Notification, Notifications};

/// Shown when the backend rejects the session token.
pub const SESSION_EXPIRED: &str = "Sessão expirada. Faça login novamente.";
/// Shown when a required field is empty.
pub const REQUIRED_FIELDS: &str = "Preencha os campos obrigatórios";

/// Log the error and queue the notification that fits it.
///
/// Validation failures show the required-fields message, a rejected token
/// shows [`SESSION_EXPIRED`], everything else shows `fallback`.
pub(crate) fn report(notifications: &mut Notifications, fallback: &str, err: &VitrineError) {
    let message = match err.kind() {
        VitrineErrorKind::Validation(_) => REQUIRED_FIELDS,
        _ if err.is_unauthorized() => SESSION_EXPIRED,
        _ => fallback,
    };
    tracing::error!(error = %err, "{}", fallback);
    notifications.push(Notification::error(message));
}

/// Queue a success notification.
pub(crate) fn success(notifications: &mut Notifications, message: impl Into<String>) {
    notifications.push(Notification::success(message));
}
