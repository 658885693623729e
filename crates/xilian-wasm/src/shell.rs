//! String-keyed router facade for the application shell
//!
//! Everything crossing into JS is a plain string or flag, so this layer
//! flattens `Resolved<View>` into [`RouteMatch`].

use xilian_router::app::{self, View};
use xilian_router::{History, HistoryMode, Resolved, Result, Router, Target};

/// Route lookup result in shell-friendly form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteMatch {
    /// Whether a route matched
    pub found: bool,
    /// Route name, empty when not found
    pub name: String,
    /// Component name (`WelcomeView`, `ChatView`), empty when not found
    pub view: String,
    /// Captured params flattened as [k1, v1, k2, v2, ...]
    pub params: Vec<String>,
    /// Address for the matched path, empty when not found
    pub href: String,
}

impl RouteMatch {
    /// Result for a path no route matches
    pub fn not_found() -> Self {
        Self::default()
    }
}

impl From<&Resolved<View>> for RouteMatch {
    fn from(resolved: &Resolved<View>) -> Self {
        Self {
            found: true,
            name: resolved.name.clone(),
            view: resolved.component.as_str().to_string(),
            params: resolved
                .params
                .iter()
                .flat_map(|(k, v)| [k.clone(), v.clone()])
                .collect(),
            href: resolved.href.clone(),
        }
    }
}

impl From<Option<&Resolved<View>>> for RouteMatch {
    fn from(resolved: Option<&Resolved<View>>) -> Self {
        resolved.map_or_else(RouteMatch::not_found, RouteMatch::from)
    }
}

/// The xilian application router behind a string API
#[derive(Debug)]
pub struct AppRouter {
    router: Router<View>,
}

impl AppRouter {
    /// Build the app router; `mode` is `"browser"` or `"hash"`.
    pub fn new(mode: &str) -> Result<Self> {
        let mode: HistoryMode = mode.parse()?;
        Self::with_history(History::new(mode))
    }

    /// Build the app router under an explicit history strategy
    pub fn with_history(history: History) -> Result<Self> {
        Ok(Self {
            router: app::create_router_with(history)?,
        })
    }

    /// Underlying typed router
    pub fn router(&self) -> &Router<View> {
        &self.router
    }

    /// Match a location path without navigating
    pub fn resolve(&self, path: &str) -> RouteMatch {
        self.router.resolve(path).as_ref().into()
    }

    /// Path of a named route
    pub fn path_for(&self, name: &str) -> Result<String> {
        self.router.path_for::<&str>(name, &[])
    }

    /// Address of a named route under the history strategy
    pub fn href_for(&self, name: &str) -> Result<String> {
        self.router.href_for::<&str>(name, &[])
    }

    /// Navigate to a location path
    pub fn push(&mut self, path: &str) -> Result<RouteMatch> {
        self.router.push(path).map(RouteMatch::from)
    }

    /// Navigate to a named route
    pub fn push_named(&mut self, name: &str) -> Result<RouteMatch> {
        self.router.push(Target::named(name)).map(RouteMatch::from)
    }

    /// Pick up the route carried by the page's initial address
    pub fn sync_location(&mut self, url: &str) -> Result<RouteMatch> {
        self.router.sync_location(url).map(RouteMatch::from)
    }

    /// Currently active route, `found == false` before any navigation
    pub fn current(&self) -> RouteMatch {
        self.router.current().into()
    }

    /// Route names in registration order
    pub fn route_names(&self) -> Vec<String> {
        self.router.routes().iter().map(|def| def.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xilian_router::Error;

    #[test]
    fn test_resolve() {
        let router = AppRouter::new("browser").unwrap();

        let m = router.resolve("/chat");
        assert!(m.found);
        assert_eq!(m.name, "chat");
        assert_eq!(m.view, "ChatView");
        assert_eq!(m.href, "/chat");
        assert!(m.params.is_empty());

        assert_eq!(router.resolve("/unknown"), RouteMatch::not_found());
    }

    #[test]
    fn test_hash_mode() {
        let router = AppRouter::new("hash").unwrap();
        assert_eq!(router.href_for("chat").unwrap(), "/#/chat");
        assert_eq!(router.path_for("chat").unwrap(), "/chat");
        assert_eq!(router.resolve("/").href, "/#/");
    }

    #[test]
    fn test_unknown_mode() {
        assert_eq!(
            AppRouter::new("memory").unwrap_err(),
            Error::UnknownHistoryMode("memory".to_string())
        );
    }

    #[test]
    fn test_navigation() {
        let mut router = AppRouter::new("browser").unwrap();
        assert!(!router.current().found);

        assert_eq!(router.push_named("chat").unwrap().view, "ChatView");
        assert_eq!(router.current().name, "chat");

        assert!(router.push("/nope").is_err());
        assert!(router.push_named("nope").is_err());
        assert_eq!(router.current().name, "chat");

        assert_eq!(router.push("/").unwrap().view, "WelcomeView");
    }

    #[test]
    fn test_sync_location() {
        let mut router = AppRouter::new("browser").unwrap();
        let m = router.sync_location("https://xilian.example/chat").unwrap();
        assert_eq!(m.name, "chat");
        assert_eq!(router.current(), m);
    }

    #[test]
    fn test_route_names() {
        let router = AppRouter::new("browser").unwrap();
        assert_eq!(router.route_names(), vec!["welcome", "chat"]);
        assert_eq!(router.router().routes().len(), 2);
    }
}
