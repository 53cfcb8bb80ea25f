//! Public landing page.

use crate::feedback;
use vitrine_client::ApiClient;
use vitrine_core::{Area, BlogPost, ContactMessageDraft, Language, SiteSettings};
use vitrine_picker::Notifications;

/// How many posts the landing page previews.
pub const LATEST_POSTS: usize = 3;

const CONTACT_SENT: &str = "Mensagem enviada com sucesso! Entraremos em contato em breve.";
const CONTACT_FAILED: &str = "Erro ao enviar mensagem. Tente novamente.";

/// Everything the landing page renders, plus the contact form.
#[derive(Debug)]
pub struct Landing {
    client: ApiClient,
    settings: SiteSettings,
    areas: Vec<Area>,
    posts: Vec<BlogPost>,
    language: Option<Language>,
    contact: ContactMessageDraft,
    loading: bool,
    sending: bool,
    notifications: Notifications,
}

impl Landing {
    /// Page with default settings until [`load`](Self::load) runs.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            settings: SiteSettings::default(),
            areas: Vec::new(),
            posts: Vec::new(),
            language: None,
            contact: ContactMessageDraft::default(),
            loading: false,
            sending: false,
            notifications: Notifications::default(),
        }
    }

    /// Site settings.
    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    /// Active areas in display order.
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// Latest published posts.
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    /// Visitor's choice, else the site default.
    pub fn language(&self) -> Language {
        self.language.unwrap_or(self.settings.default_language)
    }

    /// Switch the page language.
    pub fn set_language(&mut self, language: Language) {
        self.language = Some(language);
    }

    /// Contact form fields.
    pub fn contact_mut(&mut self) -> &mut ContactMessageDraft {
        &mut self.contact
    }

    /// Contact form fields.
    pub fn contact(&self) -> &ContactMessageDraft {
        &self.contact
    }

    /// Page content is being fetched.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The contact form is being submitted.
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Pending notifications.
    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    /// Click-to-chat link for the floating WhatsApp button.
    pub fn whatsapp_link(&self) -> Option<String> {
        self.settings.contact.whatsapp_link()
    }

    /// Count-up targets for the stats band, in display order.
    pub fn stat_targets(&self) -> Vec<(u64, String)> {
        self.settings
            .sorted_stats()
            .into_iter()
            .map(|s| s.animation_target())
            .collect()
    }

    /// Fetch settings, areas and posts concurrently.
    ///
    /// Each part fails independently; a failed part keeps its previous value.
    #[tracing::instrument(skip(self))]
    pub async fn load(&mut self) {
        self.loading = true;
        let (settings, areas, posts) = futures::join!(
            self.client.get_settings(),
            self.client.list_areas(),
            self.client.list_posts(true),
        );
        self.loading = false;

        match settings {
            Ok(settings) => self.settings = settings,
            Err(e) => tracing::error!(error = %e, "Failed to load site settings"),
        }
        match areas {
            Ok(areas) => {
                let mut areas: Vec<_> = areas.into_iter().filter(|a| a.draft.is_active).collect();
                areas.sort_by_key(|a| a.draft.order);
                self.areas = areas;
            }
            Err(e) => tracing::error!(error = %e, "Failed to load areas"),
        }
        match posts {
            Ok(mut posts) => {
                posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                posts.truncate(LATEST_POSTS);
                self.posts = posts;
            }
            Err(e) => tracing::error!(error = %e, "Failed to load posts"),
        }
    }

    /// Send the contact form; it is cleared on success.
    #[tracing::instrument(skip(self))]
    pub async fn submit_contact(&mut self) {
        if let Err(e) = self.contact.validate() {
            feedback::report(&mut self.notifications, CONTACT_FAILED, &e.into());
            return;
        }
        self.sending = true;
        let result = self.client.submit_contact(&self.contact).await;
        self.sending = false;
        match result {
            Ok(_) => {
                self.contact = ContactMessageDraft::default();
                feedback::success(&mut self.notifications, CONTACT_SENT);
            }
            Err(e) => feedback::report(&mut self.notifications, CONTACT_FAILED, &e),
        }
    }
}
