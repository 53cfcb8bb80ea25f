//! Contact messages and dashboard counters.

use crate::ApiClient;
use crate::client::Auth;
use reqwest::Method;
use tracing::instrument;
use vitrine_core::{ContactMessage, ContactMessageDraft, DashboardStats};
use vitrine_error::VitrineResult;

impl ApiClient {
    /// Submit the public contact form.
    #[instrument(skip(self, draft), fields(email = %draft.email))]
    pub async fn submit_contact(&self, draft: &ContactMessageDraft) -> VitrineResult<ContactMessage> {
        let message: ContactMessage = self
            .send_json(Method::POST, "/contact", draft, Auth::Public)
            .await?;
        tracing::info!(id = %message.id, "Contact message submitted");
        Ok(message)
    }

    /// List received messages, newest first.
    #[instrument(skip(self))]
    pub async fn list_messages(&self) -> VitrineResult<Vec<ContactMessage>> {
        self.get_json("/messages", Auth::Bearer).await
    }

    /// Mark a message as read.
    #[instrument(skip(self))]
    pub async fn mark_message_read(&self, id: &str) -> VitrineResult<()> {
        self.send_ack(Method::PUT, &format!("/messages/{}/read", id), Auth::Bearer)
            .await
    }

    /// Delete a message.
    #[instrument(skip(self))]
    pub async fn delete_message(&self, id: &str) -> VitrineResult<()> {
        self.send_ack(Method::DELETE, &format!("/messages/{}", id), Auth::Bearer)
            .await
    }

    /// Dashboard counters.
    #[instrument(skip(self))]
    pub async fn dashboard_stats(&self) -> VitrineResult<DashboardStats> {
        self.get_json("/stats/dashboard", Auth::Bearer).await
    }
}
