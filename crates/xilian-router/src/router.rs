//! Route table builder and router instance
//!
//! The table is validated once when it is built: every path pattern and
//! every name must be unique. After that the route list is read-only; the
//! only mutable state is the currently active route.

use crate::history::History;
use crate::route::{Resolved, RouteDef, Target};
use crate::trie::{self, PathTrie};
use crate::{Error, Result};
use std::collections::HashMap;

/// Builder collecting route definitions in registration order
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    history: History,
    routes: Vec<RouteDef<V>>,
}

impl<V: Clone> RouteTable<V> {
    /// Create an empty table using `history`
    pub fn new(history: History) -> Self {
        Self {
            history,
            routes: Vec::new(),
        }
    }

    /// Register a route
    pub fn route(
        mut self,
        path: impl Into<String>,
        name: impl Into<String>,
        component: V,
    ) -> Self {
        self.routes.push(RouteDef::new(path, name, component));
        self
    }

    /// Validate the table and produce a router
    pub fn build(self) -> Result<Router<V>> {
        Router::new(self.history, self.routes)
    }
}

/// Router instance: matches paths against the table and tracks the
/// active route
#[derive(Debug)]
pub struct Router<V> {
    history: History,
    routes: Vec<RouteDef<V>>,
    trie: PathTrie,
    /// Route name -> index
    names: HashMap<String, usize>,
    current: Option<Resolved<V>>,
}

impl<V: Clone> Router<V> {
    /// Build a router from a history strategy and an ordered route list.
    ///
    /// # Example
    /// ```
    /// use xilian_router::{History, RouteDef, Router};
    ///
    /// let router = Router::new(
    ///     History::browser(),
    ///     vec![RouteDef::new("/", "home", 0), RouteDef::new("/about", "about", 1)],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(router.resolve("/about").unwrap().component, 1);
    /// assert_eq!(router.path_for::<&str>("home", &[]).unwrap(), "/");
    /// ```
    pub fn new(history: History, routes: impl IntoIterator<Item = RouteDef<V>>) -> Result<Self> {
        let routes: Vec<RouteDef<V>> = routes.into_iter().collect();
        let mut matcher = PathTrie::new();
        let mut names = HashMap::with_capacity(routes.len());
        let mut shapes: HashMap<String, usize> = HashMap::with_capacity(routes.len());

        for (index, def) in routes.iter().enumerate() {
            if !def.path.starts_with('/') || !trie::wildcard_is_last(&def.path) {
                return Err(Error::InvalidPath(def.path.clone()));
            }
            if def.name.trim().is_empty() {
                return Err(Error::InvalidName(def.name.clone()));
            }
            if names.insert(def.name.clone(), index).is_some() {
                return Err(Error::DuplicateName(def.name.clone()));
            }
            let shape = trie::pattern_shape(&def.path);
            if let Some(&first) = shapes.get(&shape) {
                return Err(Error::DuplicatePath {
                    path: def.path.clone(),
                    first: routes[first].name.clone(),
                    second: def.name.clone(),
                });
            }
            shapes.insert(shape, index);
            matcher.insert(&def.path, index);
        }

        tracing::debug!(
            routes = routes.len(),
            mode = %history.mode(),
            base = history.base(),
            "route table built"
        );

        Ok(Self {
            history,
            routes,
            trie: matcher,
            names,
            current: None,
        })
    }

    /// History strategy used for hrefs and location parsing
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Route definitions in registration order
    pub fn routes(&self) -> &[RouteDef<V>] {
        &self.routes
    }

    /// Route definition registered under `name`
    pub fn get(&self, name: &str) -> Option<&RouteDef<V>> {
        self.names.get(name).map(|&i| &self.routes[i])
    }

    /// Check if a route is registered under `name`
    pub fn has_route(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Currently active route, if any navigation has succeeded
    pub fn current(&self) -> Option<&Resolved<V>> {
        self.current.as_ref()
    }

    /// Match a location path. Query strings and fragments are ignored.
    pub fn resolve(&self, path: &str) -> Option<Resolved<V>> {
        let path = strip_query(path);
        let normalized = format!("/{}", trie::segments(path).join("/"));
        let found = self.trie.find(&normalized);
        tracing::trace!(path = %normalized, matched = found.is_some(), "resolve");

        let m = found?;
        let def = &self.routes[m.route];
        Some(Resolved {
            index: m.route,
            name: def.name.clone(),
            pattern: def.path.clone(),
            component: def.component.clone(),
            params: m.params,
            href: self.history.href(&normalized),
            path: normalized,
        })
    }

    /// Build the path of a named route.
    ///
    /// `:param` segments need a non-empty value; wildcard segments take
    /// an optional one.
    pub fn path_for<P: AsRef<str>>(&self, name: &str, params: &[(P, P)]) -> Result<String> {
        let def = self
            .get(name)
            .ok_or_else(|| Error::UnknownRoute(name.to_string()))?;

        let mut path = String::new();
        for segment in trie::segments(&def.path) {
            if let Some(key) = segment.strip_prefix(':') {
                let value = param_value(params, key)
                    .filter(|v| !v.is_empty())
                    .ok_or_else(|| Error::MissingParam {
                        route: name.to_string(),
                        param: key.to_string(),
                    })?;
                path.push('/');
                path.push_str(value);
            } else if let Some(key) = segment.strip_prefix('*') {
                let key = if key.is_empty() { "*" } else { key };
                if let Some(rest) = param_value(params, key).map(|v| v.trim_matches('/')) {
                    if !rest.is_empty() {
                        path.push('/');
                        path.push_str(rest);
                    }
                }
                break;
            } else {
                path.push('/');
                path.push_str(segment);
            }
        }
        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }

    /// Address of a named route under the history strategy
    pub fn href_for<P: AsRef<str>>(&self, name: &str, params: &[(P, P)]) -> Result<String> {
        self.path_for(name, params).map(|path| self.history.href(&path))
    }

    /// Navigate to a path or named route and make it current.
    ///
    /// On failure the current route is left unchanged.
    pub fn push(&mut self, target: impl Into<Target>) -> Result<&Resolved<V>> {
        let path = match target.into() {
            Target::Path(path) => path,
            Target::Named { name, params } => match self.path_for(&name, &params) {
                Ok(path) => path,
                Err(e) => {
                    tracing::warn!(route = %name, error = %e, "navigation failed");
                    return Err(e);
                }
            },
        };

        match self.resolve(&path) {
            Some(resolved) => {
                tracing::debug!(
                    route = %resolved.name,
                    path = %resolved.path,
                    href = %resolved.href,
                    "navigated"
                );
                Ok(&*self.current.insert(resolved))
            }
            None => {
                tracing::warn!(path = %path, "no route matches");
                Err(Error::NoMatch(path))
            }
        }
    }

    /// Make the route carried by a full address current
    pub fn sync_location(&mut self, url: &str) -> Result<&Resolved<V>> {
        let path = self.history.location_path(url);
        self.push(Target::Path(path))
    }
}

fn param_value<'a, P: AsRef<str>>(params: &'a [(P, P)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k.as_ref() == key)
        .map(|(_, v)| v.as_ref())
}

fn strip_query(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Router<&'static str> {
        RouteTable::new(History::browser())
            .route("/", "home", "Home")
            .route("/chat/:chatId", "chat", "Chat")
            .route("/docs/*page", "docs", "Docs")
            .build()
            .unwrap()
    }

    #[test]
    fn test_resolve_static_and_params() {
        let router = sample();

        let home = router.resolve("/").unwrap();
        assert_eq!(home.index, 0);
        assert_eq!(home.name, "home");
        assert_eq!(home.component, "Home");
        assert!(home.params.is_empty());

        let chat = router.resolve("/chat/default?x=1#end").unwrap();
        assert_eq!(chat.name, "chat");
        assert_eq!(chat.pattern, "/chat/:chatId");
        assert_eq!(chat.param("chatId"), Some("default"));
        assert_eq!(chat.path, "/chat/default");
        assert_eq!(chat.href, "/chat/default");

        assert!(router.resolve("/chat").is_none());
        assert!(router.resolve("/unknown").is_none());
    }

    #[test]
    fn test_path_for() {
        let router = sample();

        assert_eq!(router.path_for::<&str>("home", &[]).unwrap(), "/");
        assert_eq!(
            router.path_for("chat", &[("chatId", "abc")]).unwrap(),
            "/chat/abc"
        );
        assert_eq!(
            router.path_for("docs", &[("page", "/guide/intro/")]).unwrap(),
            "/docs/guide/intro"
        );
        assert_eq!(router.path_for::<&str>("docs", &[]).unwrap(), "/docs");
        assert_eq!(
            router.path_for::<&str>("chat", &[]),
            Err(Error::MissingParam {
                route: "chat".to_string(),
                param: "chatId".to_string(),
            })
        );
        assert!(matches!(
            router.path_for("chat", &[("chatId", "")]),
            Err(Error::MissingParam { .. })
        ));
        assert_eq!(
            router.path_for::<&str>("missing", &[]),
            Err(Error::UnknownRoute("missing".to_string()))
        );
    }

    #[test]
    fn test_href_for_hash_history() {
        let router =
            Router::new(History::hash(), vec![RouteDef::new("/chat", "chat", ())]).unwrap();
        assert_eq!(router.href_for::<&str>("chat", &[]).unwrap(), "/#/chat");
        assert_eq!(router.resolve("/chat").unwrap().href, "/#/chat");
    }

    #[test]
    fn test_push() {
        let mut router = sample();
        assert!(router.current().is_none());

        let current = router.push("/chat/one").unwrap();
        assert_eq!(current.name, "chat");
        assert_eq!(router.current().unwrap().path, "/chat/one");

        router.push(Target::named("chat").param("chatId", "two")).unwrap();
        assert_eq!(router.current().unwrap().param("chatId"), Some("two"));

        router.push(Target::named("home")).unwrap();
        assert_eq!(router.current().unwrap().name, "home");
    }

    #[test]
    fn test_failed_push_keeps_current() {
        let mut router = sample();
        router.push("/").unwrap();

        assert_eq!(
            router.push("/nowhere").unwrap_err(),
            Error::NoMatch("/nowhere".to_string())
        );
        assert_eq!(
            router.push(Target::named("nowhere")).unwrap_err(),
            Error::UnknownRoute("nowhere".to_string())
        );
        assert_eq!(router.current().unwrap().name, "home");
    }

    #[test]
    fn test_sync_location() {
        let mut router = Router::new(
            History::browser().with_base("/app"),
            vec![RouteDef::new("/", "home", 0), RouteDef::new("/chat", "chat", 1)],
        )
        .unwrap();

        let current = router.sync_location("https://example.com/app/chat?chatId=x").unwrap();
        assert_eq!(current.component, 1);
        assert_eq!(current.href, "/app/chat");
    }

    #[test]
    fn test_lookup_by_name() {
        let router = sample();
        assert_eq!(router.routes().len(), 3);
        assert!(router.has_route("docs"));
        assert!(!router.has_route("welcome"));
        assert_eq!(router.get("chat").unwrap().path, "/chat/:chatId");
        assert!(router.get("nope").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = RouteTable::new(History::browser())
            .route("/", "home", ())
            .route("/other", "home", ())
            .build()
            .unwrap_err();
        assert_eq!(err, Error::DuplicateName("home".to_string()));
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let err = RouteTable::new(History::browser())
            .route("/users/:id", "user", ())
            .route("/users/:uid/", "member", ())
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::DuplicatePath {
                path: "/users/:uid/".to_string(),
                first: "user".to_string(),
                second: "member".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_definitions_rejected() {
        let err =
            Router::new(History::browser(), vec![RouteDef::new("chat", "chat", ())]).unwrap_err();
        assert_eq!(err, Error::InvalidPath("chat".to_string()));

        let err =
            Router::new(History::browser(), vec![RouteDef::new("/chat", " ", ())]).unwrap_err();
        assert_eq!(err, Error::InvalidName(" ".to_string()));
    }

    #[test]
    fn test_segments_after_wildcard_rejected() {
        let err = RouteTable::new(History::browser())
            .route("/docs/*page/edit", "edit", ())
            .route("/docs/*", "docs", ())
            .build()
            .unwrap_err();
        assert_eq!(err, Error::InvalidPath("/docs/*page/edit".to_string()));
    }

    #[test]
    fn test_wildcard_routes_share_shape() {
        let err = RouteTable::new(History::browser())
            .route("/docs/*page", "docs", ())
            .route("/docs/*", "files", ())
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::DuplicatePath { .. }));
    }

    #[test]
    fn test_wildcard_without_value_navigates() {
        let mut router = sample();

        let path = router.path_for::<&str>("docs", &[]).unwrap();
        let resolved = router.resolve(&path).unwrap();
        assert_eq!(resolved.name, "docs");
        assert_eq!(resolved.param("page"), Some(""));

        let current = router.push(Target::named("docs")).unwrap();
        assert_eq!(current.name, "docs");
        assert_eq!(current.path, "/docs");
    }

    #[test]
    fn test_params_named_by_matched_route() {
        let router = RouteTable::new(History::browser())
            .route("/users/:id/posts", "posts", ())
            .route("/users/:uid", "member", ())
            .build()
            .unwrap();

        let member = router.resolve("/users/5").unwrap();
        assert_eq!(member.name, "member");
        assert_eq!(member.param("uid"), Some("5"));
        assert_eq!(member.param("id"), None);
        assert_eq!(router.path_for("member", &[("uid", "5")]).unwrap(), member.path);

        let posts = router.resolve("/users/5/posts").unwrap();
        assert_eq!(posts.param("id"), Some("5"));
    }
}
