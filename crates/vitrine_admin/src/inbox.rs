//! Contact messages inbox.

use crate::feedback;
use vitrine_client::ApiClient;
use vitrine_core::ContactMessage;
use vitrine_picker::Notifications;

/// Confirmation text shown before a message is deleted.
pub const CONFIRM_DELETE_MESSAGE: &str = "Tem certeza que deseja excluir esta mensagem?";

/// Message list with a detail pane.
#[derive(Debug)]
pub struct Inbox {
    client: ApiClient,
    messages: Vec<ContactMessage>,
    open: Option<String>,
    pending_delete: Option<String>,
    busy: bool,
    notifications: Notifications,
}

impl Inbox {
    /// Empty inbox; call [`load`](Self::load) to fill it.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            messages: Vec::new(),
            open: None,
            pending_delete: None,
            busy: false,
            notifications: Notifications::default(),
        }
    }

    /// Messages, newest first.
    pub fn messages(&self) -> &[ContactMessage] {
        &self.messages
    }

    /// Messages nobody has opened yet.
    pub fn unread_count(&self) -> usize {
        self.messages.iter().filter(|m| !m.is_read).count()
    }

    /// Message shown in the detail pane.
    pub fn opened(&self) -> Option<&ContactMessage> {
        let id = self.open.as_deref()?;
        self.messages.iter().find(|m| m.id == id)
    }

    /// A request is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Pending notifications.
    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    /// Reload the list.
    #[tracing::instrument(skip(self))]
    pub async fn load(&mut self) {
        self.busy = true;
        let result = self.client.list_messages().await;
        self.busy = false;
        match result {
            Ok(mut messages) => {
                messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                self.messages = messages;
            }
            Err(e) => feedback::report(&mut self.notifications, "Erro ao carregar mensagens", &e),
        }
    }

    /// Show a message, marking it read the first time.
    ///
    /// The message stays open when marking fails; it just remains unread.
    #[tracing::instrument(skip(self))]
    pub async fn open(&mut self, id: &str) {
        let Some(message) = self.messages.iter().find(|m| m.id == id) else {
            return;
        };
        self.open = Some(id.to_string());
        if message.is_read {
            return;
        }

        self.busy = true;
        let result = self.client.mark_message_read(id).await;
        self.busy = false;
        match result {
            Ok(()) => {
                if let Some(message) = self.messages.iter_mut().find(|m| m.id == id) {
                    message.is_read = true;
                }
            }
            Err(e) => feedback::report(&mut self.notifications, "Erro ao marcar como lida", &e),
        }
    }

    /// Close the detail pane.
    pub fn close(&mut self) {
        self.open = None;
    }

    /// Ask for confirmation before deleting.
    pub fn request_delete(&mut self, id: &str) {
        if self.messages.iter().any(|m| m.id == id) {
            self.pending_delete = Some(id.to_string());
        }
    }

    /// Message awaiting delete confirmation.
    pub fn pending_delete(&self) -> Option<&ContactMessage> {
        let id = self.pending_delete.as_deref()?;
        self.messages.iter().find(|m| m.id == id)
    }

    /// Dismiss the delete confirmation.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the message awaiting confirmation.
    #[tracing::instrument(skip(self))]
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        self.busy = true;
        let result = self.client.delete_message(&id).await;
        self.busy = false;
        match result {
            Ok(()) => {
                if self.open.as_deref() == Some(id.as_str()) {
                    self.open = None;
                }
                feedback::success(&mut self.notifications, "Mensagem excluída!");
                self.load().await;
            }
            Err(e) => feedback::report(&mut self.notifications, "Erro ao excluir mensagem", &e),
        }
    }
}
