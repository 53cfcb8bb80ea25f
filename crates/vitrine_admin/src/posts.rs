//! Public blog pages.

use vitrine_client::ApiClient;
use vitrine_core::BlogPost;

/// Published posts with a search box.
#[derive(Debug)]
pub struct BlogPage {
    client: ApiClient,
    posts: Vec<BlogPost>,
    query: String,
    loading: bool,
}

impl BlogPage {
    /// Empty page; call [`load`](Self::load) to fill it.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            posts: Vec::new(),
            query: String::new(),
            loading: false,
        }
    }

    /// Fetch published posts.
    #[tracing::instrument(skip(self))]
    pub async fn load(&mut self) {
        self.loading = true;
        match self.client.list_posts(true).await {
            Ok(posts) => self.posts = posts,
            Err(e) => tracing::error!(error = %e, "Failed to load posts"),
        }
        self.loading = false;
    }

    /// Posts are being fetched.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current search text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Update the search text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Posts whose title or excerpt contains the search text.
    pub fn visible(&self) -> Vec<&BlogPost> {
        self.posts.iter().filter(|p| p.matches(&self.query)).collect()
    }
}

/// What the single-post page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PostView {
    /// Fetch in flight
    Loading,
    /// Post found
    Loaded(Box<BlogPost>),
    /// No post has this slug; the page offers a way back to the blog
    NotFound,
    /// Any other failure
    Failed(String),
}

impl PostView {
    /// Route for the back-to-blog link.
    pub const BACK_LINK: &'static str = "/blog";

    /// Fetch a post by slug.
    #[tracing::instrument(skip(client))]
    pub async fn fetch(client: &ApiClient, slug: &str) -> Self {
        match client.get_post(slug).await {
            Ok(post) => PostView::Loaded(Box::new(post)),
            Err(e) if e.is_not_found() => PostView::NotFound,
            Err(e) => {
                tracing::error!(error = %e, slug, "Failed to load post");
                PostView::Failed(e.to_string())
            }
        }
    }

    /// The loaded post, if any.
    pub fn post(&self) -> Option<&BlogPost> {
        match self {
            PostView::Loaded(post) => Some(&**post),
            _ => None,
        }
    }
}
