//! Blog posts editor.

use crate::feedback;
use vitrine_client::ApiClient;
use vitrine_core::{BlogPost, BlogPostDraft};
use vitrine_picker::Notifications;

/// Confirmation text shown before a post is deleted.
pub const CONFIRM_DELETE_POST: &str = "Tem certeza que deseja excluir este post?";

/// An open create or edit form.
///
/// Tags are edited as a comma-separated field and parsed on save.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct PostForm {
    /// `None` for a new post
    id: Option<String>,
    draft: BlogPostDraft,
    tags_input: String,
}

impl PostForm {
    fn new(id: Option<String>, draft: BlogPostDraft) -> Self {
        let tags_input = draft.tags_field();
        Self {
            id,
            draft,
            tags_input,
        }
    }

    /// Editable fields other than tags.
    pub fn draft_mut(&mut self) -> &mut BlogPostDraft {
        &mut self.draft
    }

    /// Replace the raw tags field.
    pub fn set_tags_input(&mut self, input: impl Into<String>) {
        self.tags_input = input.into();
    }

    /// Slug the backend will derive from the current title.
    pub fn slug_preview(&self) -> String {
        self.draft.slug_preview()
    }

    /// The form creates a new post on save.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

/// List and form state for the blog admin page.
#[derive(Debug)]
pub struct BlogEditor {
    client: ApiClient,
    posts: Vec<BlogPost>,
    form: Option<PostForm>,
    pending_delete: Option<String>,
    busy: bool,
    notifications: Notifications,
}

impl BlogEditor {
    /// Empty editor; call [`load`](Self::load) to fill it.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            posts: Vec::new(),
            form: None,
            pending_delete: None,
            busy: false,
            notifications: Notifications::default(),
        }
    }

    /// All posts, drafts included, newest first as returned by the backend.
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    /// Open form, if any.
    pub fn form(&self) -> Option<&PostForm> {
        self.form.as_ref()
    }

    /// Open form, for editing.
    pub fn form_mut(&mut self) -> Option<&mut PostForm> {
        self.form.as_mut()
    }

    /// A request is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Pending notifications.
    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    /// Reload the list, drafts included.
    #[tracing::instrument(skip(self))]
    pub async fn load(&mut self) {
        self.busy = true;
        let result = self.client.list_posts(false).await;
        self.busy = false;
        match result {
            Ok(posts) => self.posts = posts,
            Err(e) => feedback::report(&mut self.notifications, "Erro ao carregar posts", &e),
        }
    }

    /// Open an empty form.
    pub fn open_new(&mut self) {
        self.form = Some(PostForm::new(None, BlogPostDraft::default()));
    }

    /// Open the form on an existing post.
    pub fn open_existing(&mut self, id: &str) {
        if let Some(post) = self.posts.iter().find(|p| p.id == id) {
            self.form = Some(PostForm::new(Some(post.id.clone()), post.draft.clone()));
        }
    }

    /// Close the form without saving.
    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Validate and store the open form, then reload.
    #[tracing::instrument(skip(self))]
    pub async fn save(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        let tags_input = form.tags_input.clone();
        form.draft.set_tags_from(&tags_input);
        if let Err(e) = form.draft.validate() {
            feedback::report(&mut self.notifications, "Erro ao salvar post", &e.into());
            return;
        }
        let form = form.clone();

        self.busy = true;
        let result = match &form.id {
            Some(id) => self.client.update_post(id, &form.draft).await,
            None => self.client.create_post(&form.draft).await,
        };
        self.busy = false;

        match result {
            Ok(_) => {
                let message = if form.is_new() {
                    "Post criado!"
                } else {
                    "Post atualizado!"
                };
                feedback::success(&mut self.notifications, message);
                self.form = None;
                self.load().await;
            }
            Err(e) => feedback::report(&mut self.notifications, "Erro ao salvar post", &e),
        }
    }

    /// Ask for confirmation before deleting.
    pub fn request_delete(&mut self, id: &str) {
        if self.posts.iter().any(|p| p.id == id) {
            self.pending_delete = Some(id.to_string());
        }
    }

    /// Post awaiting delete confirmation.
    pub fn pending_delete(&self) -> Option<&BlogPost> {
        let id = self.pending_delete.as_deref()?;
        self.posts.iter().find(|p| p.id == id)
    }

    /// Dismiss the delete confirmation.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the post awaiting confirmation.
    #[tracing::instrument(skip(self))]
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        self.busy = true;
        let result = self.client.delete_post(&id).await;
        self.busy = false;
        match result {
            Ok(()) => {
                feedback::success(&mut self.notifications, "Post excluído!");
                self.load().await;
            }
            Err(e) => feedback::report(&mut self.notifications, "Erro ao excluir post", &e),
        }
    }
}
