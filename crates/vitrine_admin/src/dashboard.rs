//! Admin landing page.

use crate::feedback;
use vitrine_client::ApiClient;
use vitrine_core::{ContactMessage, DashboardStats};
use vitrine_picker::Notifications;

/// How many messages the dashboard previews.
pub const RECENT_MESSAGES: usize = 5;

/// Counters plus the latest messages.
#[derive(Debug)]
pub struct Dashboard {
    client: ApiClient,
    stats: DashboardStats,
    recent: Vec<ContactMessage>,
    busy: bool,
    notifications: Notifications,
}

impl Dashboard {
    /// Zeroed dashboard; call [`load`](Self::load) to fill it.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            stats: DashboardStats::default(),
            recent: Vec::new(),
            busy: false,
            notifications: Notifications::default(),
        }
    }

    /// Counters.
    pub fn stats(&self) -> DashboardStats {
        self.stats
    }

    /// Latest messages, newest first.
    pub fn recent_messages(&self) -> &[ContactMessage] {
        &self.recent
    }

    /// A request is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Pending notifications.
    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    /// Fetch counters and messages concurrently.
    #[tracing::instrument(skip(self))]
    pub async fn load(&mut self) {
        self.busy = true;
        let (stats, messages) =
            futures::join!(self.client.dashboard_stats(), self.client.list_messages());
        self.busy = false;

        match stats {
            Ok(stats) => self.stats = stats,
            Err(e) => feedback::report(&mut self.notifications, "Erro ao carregar estatísticas", &e),
        }
        match messages {
            Ok(mut messages) => {
                messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                messages.truncate(RECENT_MESSAGES);
                self.recent = messages;
            }
            Err(e) => feedback::report(&mut self.notifications, "Erro ao carregar mensagens", &e),
        }
    }
}
