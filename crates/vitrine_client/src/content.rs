//! Site content endpoints: settings, areas, blog posts.

use crate::ApiClient;
use crate::client::Auth;
use reqwest::Method;
use tracing::instrument;
use vitrine_core::{Area, AreaDraft, BlogPost, BlogPostDraft, SiteSettings};
use vitrine_error::VitrineResult;

impl ApiClient {
    /// Fetch the site settings. Public.
    #[instrument(skip(self))]
    pub async fn get_settings(&self) -> VitrineResult<SiteSettings> {
        self.get_json("/settings", Auth::Public).await
    }

    /// Replace the site settings.
    #[instrument(skip(self, settings))]
    pub async fn save_settings(&self, settings: &SiteSettings) -> VitrineResult<SiteSettings> {
        let saved: SiteSettings = self
            .send_json(Method::PUT, "/settings", settings, Auth::Bearer)
            .await?;
        tracing::info!("Settings saved");
        Ok(saved)
    }

    /// List every area. Public.
    #[instrument(skip(self))]
    pub async fn list_areas(&self) -> VitrineResult<Vec<Area>> {
        self.get_json("/areas", Auth::Public).await
    }

    /// Create an area.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create_area(&self, draft: &AreaDraft) -> VitrineResult<Area> {
        let area: Area = self
            .send_json(Method::POST, "/areas", draft, Auth::Bearer)
            .await?;
        tracing::info!(id = %area.id, "Area created");
        Ok(area)
    }

    /// Update an area.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn update_area(&self, id: &str, draft: &AreaDraft) -> VitrineResult<Area> {
        self.send_json(Method::PUT, &format!("/areas/{}", id), draft, Auth::Bearer)
            .await
    }

    /// Delete an area.
    #[instrument(skip(self))]
    pub async fn delete_area(&self, id: &str) -> VitrineResult<()> {
        self.send_ack(Method::DELETE, &format!("/areas/{}", id), Auth::Bearer)
            .await
    }

    /// List blog posts, newest first.
    ///
    /// `published_only` is what the public blog uses; the admin list sends the
    /// token and sees drafts too.
    #[instrument(skip(self))]
    pub async fn list_posts(&self, published_only: bool) -> VitrineResult<Vec<BlogPost>> {
        let mut req = if published_only {
            self.request(Method::GET, "/blog", Auth::Public)
        } else {
            self.request(Method::GET, "/blog", Auth::Bearer)
        };
        if published_only {
            req = req.query(&[("published_only", "true")]);
        }
        Self::decode(self.send(req).await?).await
    }

    /// Fetch one post by id or slug. A miss is a not-found error.
    #[instrument(skip(self))]
    pub async fn get_post(&self, id_or_slug: &str) -> VitrineResult<BlogPost> {
        self.get_json(&format!("/blog/{}", id_or_slug), Auth::Public)
            .await
    }

    /// Create a post; the backend assigns the slug.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create_post(&self, draft: &BlogPostDraft) -> VitrineResult<BlogPost> {
        let post: BlogPost = self
            .send_json(Method::POST, "/blog", draft, Auth::Bearer)
            .await?;
        tracing::info!(id = %post.id, slug = %post.slug, "Post created");
        Ok(post)
    }

    /// Update a post.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn update_post(&self, id: &str, draft: &BlogPostDraft) -> VitrineResult<BlogPost> {
        self.send_json(Method::PUT, &format!("/blog/{}", id), draft, Auth::Bearer)
            .await
    }

    /// Delete a post.
    #[instrument(skip(self))]
    pub async fn delete_post(&self, id: &str) -> VitrineResult<()> {
        self.send_ack(Method::DELETE, &format!("/blog/{}", id), Auth::Bearer)
            .await
    }
}
