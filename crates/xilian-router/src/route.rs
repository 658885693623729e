//! Route definitions and navigation targets

/// A path pattern and symbolic name mapped to a view component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDef<V> {
    /// URL path pattern, e.g. `/chat` or `/chat/:chatId`
    pub path: String,
    /// Name used for programmatic navigation
    pub name: String,
    /// View rendered when this route is active
    pub component: V,
}

impl<V> RouteDef<V> {
    /// Create a route definition
    pub fn new(path: impl Into<String>, name: impl Into<String>, component: V) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            component,
        }
    }
}

/// A route matched against a concrete path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<V> {
    /// Index of the route in its table
    pub index: usize,
    pub name: String,
    /// Pattern of the matched route
    pub pattern: String,
    pub component: V,
    /// Captured path parameters as (name, value) pairs
    pub params: Vec<(String, String)>,
    /// Concrete path, query and fragment removed
    pub path: String,
    /// Address shown for `path` under the router's history strategy
    pub href: String,
}

impl<V> Resolved<V> {
    /// Value of a captured parameter
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Where to navigate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A location path such as `/chat`
    Path(String),
    /// A route name plus values for its parameters
    Named {
        name: String,
        params: Vec<(String, String)>,
    },
}

impl Target {
    /// Target a route by name, without params
    pub fn named(name: impl Into<String>) -> Self {
        Target::Named {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Add a parameter to a named target; no-op for path targets.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Target::Named { ref mut params, .. } = self {
            params.push((key.into(), value.into()));
        }
        self
    }
}

impl From<&str> for Target {
    fn from(path: &str) -> Self {
        Target::Path(path.to_string())
    }
}

impl From<String> for Target {
    fn from(path: String) -> Self {
        Target::Path(path)
    }
}
