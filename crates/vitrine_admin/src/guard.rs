//! Routes and the admin guard.

use vitrine_client::Session;

/// Admin sub-pages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, derive_more::Display,
)]
pub enum AdminPage {
    /// Counters and recent messages
    #[display("Dashboard")]
    Dashboard,
    /// Areas editor
    #[display("Áreas")]
    Areas,
    /// Blog editor
    #[display("Blog")]
    Blog,
    /// Messages inbox
    #[display("Mensagens")]
    Messages,
    /// Settings editor
    #[display("Configurações")]
    Settings,
}

impl AdminPage {
    fn segment(&self) -> &'static str {
        match self {
            AdminPage::Dashboard => "",
            AdminPage::Areas => "areas",
            AdminPage::Blog => "blog",
            AdminPage::Messages => "messages",
            AdminPage::Settings => "settings",
        }
    }
}

/// Every page of the site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Landing,
    /// `/blog`
    Blog,
    /// `/blog/{slug}`
    BlogPost(String),
    /// `/login`
    Login,
    /// `/admin[/{page}]`
    Admin(AdminPage),
    /// Anything else
    NotFound,
}

impl Route {
    /// Parse a URL path.
    ///
    /// ```
    /// use vitrine_admin::{AdminPage, Route};
    ///
    /// assert_eq!(Route::parse("/blog/hello-world"), Route::BlogPost("hello-world".into()));
    /// assert_eq!(Route::parse("/admin/"), Route::Admin(AdminPage::Dashboard));
    /// assert_eq!(Route::parse("/nope"), Route::NotFound);
    /// ```
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Landing,
            ["blog"] => Route::Blog,
            ["blog", slug] => Route::BlogPost((*slug).to_string()),
            ["login"] => Route::Login,
            ["admin"] => Route::Admin(AdminPage::Dashboard),
            ["admin", "areas"] => Route::Admin(AdminPage::Areas),
            ["admin", "blog"] => Route::Admin(AdminPage::Blog),
            ["admin", "messages"] => Route::Admin(AdminPage::Messages),
            ["admin", "settings"] => Route::Admin(AdminPage::Settings),
            _ => Route::NotFound,
        }
    }

    /// URL path of the route.
    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Blog => "/blog".to_string(),
            Route::BlogPost(slug) => format!("/blog/{}", slug),
            Route::Login => "/login".to_string(),
            Route::Admin(AdminPage::Dashboard) => "/admin".to_string(),
            Route::Admin(page) => format!("/admin/{}", page.segment()),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Admin pages need a valid session.
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Admin(_))
    }
}

/// Decide where a navigation to `route` actually lands.
///
/// Protected routes require a token that is present and not expired; an
/// expired token is cleared. A signed-in user visiting the login page goes
/// to the dashboard.
#[tracing::instrument(skip(session))]
pub fn resolve(route: Route, session: &Session) -> Route {
    let authenticated = session.is_authenticated();
    if !authenticated && session.token().is_some() {
        tracing::info!("Clearing expired session");
        session.clear_token();
    }
    match route {
        route if route.is_protected() && !authenticated => Route::Login,
        Route::Login if authenticated => Route::Admin(AdminPage::Dashboard),
        route => route,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_routes_redirect_to_login_without_session() {
        let session = Session::new();
        assert_eq!(resolve(Route::parse("/admin/blog"), &session), Route::Login);
        assert_eq!(resolve(Route::Blog, &session), Route::Blog);

        session.set_token("opaque");
        assert_eq!(
            resolve(Route::parse("/admin/blog"), &session),
            Route::Admin(AdminPage::Blog)
        );
        assert_eq!(resolve(Route::Login, &session), Route::Admin(AdminPage::Dashboard));
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(Route::parse("/blog?page=2"), Route::Blog);
        assert_eq!(Route::parse("/admin/messages#top"), Route::Admin(AdminPage::Messages));
        assert_eq!(Route::Admin(AdminPage::Messages).path(), "/admin/messages");
    }
}
