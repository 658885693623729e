//! History strategies
//!
//! A [`History`] decides how a route path appears in the address bar and
//! how a route path is read back out of an address.
//!
//! - `browser` - real paths: `/chat`
//! - `hash` - fragment paths: `/#/chat`

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// History mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryMode {
    /// Real URLs without a fragment marker
    #[default]
    Browser,
    /// Route path stored in the URL fragment
    Hash,
}

impl HistoryMode {
    /// Selector string for this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryMode::Browser => "browser",
            HistoryMode::Hash => "hash",
        }
    }
}

impl fmt::Display for HistoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoryMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "browser" => Ok(HistoryMode::Browser),
            "hash" => Ok(HistoryMode::Hash),
            _ => Err(Error::UnknownHistoryMode(s.to_string())),
        }
    }
}

/// History strategy: a mode plus the base the app is served under
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct History {
    mode: HistoryMode,
    /// Normalized: empty, or `/segment` with no trailing slash
    base: String,
}

impl History {
    /// History in `mode`, served from the root
    pub fn new(mode: HistoryMode) -> Self {
        Self {
            mode,
            base: String::new(),
        }
    }

    /// Real-path history (`createWebHistory` style)
    pub fn browser() -> Self {
        Self::new(HistoryMode::Browser)
    }

    /// Fragment history
    pub fn hash() -> Self {
        Self::new(HistoryMode::Hash)
    }

    /// Serve the app under `base`, e.g. `/app`
    pub fn with_base(mut self, base: &str) -> Self {
        let trimmed = base.trim().trim_matches('/');
        self.base = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        };
        self
    }

    /// History mode in use
    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    /// Normalized base, empty when served from the root
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Address shown for a route path.
    ///
    /// ```
    /// use xilian_router::History;
    ///
    /// assert_eq!(History::browser().href("/chat"), "/chat");
    /// assert_eq!(History::hash().href("/chat"), "/#/chat");
    /// ```
    pub fn href(&self, path: &str) -> String {
        let path = ensure_leading_slash(path);
        match self.mode {
            HistoryMode::Browser => format!("{}{}", self.base, path),
            HistoryMode::Hash => format!("{}/#{}", self.base, path),
        }
    }

    /// Route path carried by an address.
    ///
    /// Accepts a bare path (`/chat?x=1`) or a full URL
    /// (`https://host/app/#/chat`). Query strings are dropped.
    pub fn location_path(&self, url: &str) -> String {
        let url = strip_origin(url.trim());
        let path = match self.mode {
            HistoryMode::Browser => {
                let path = cut(cut(url, '#'), '?');
                strip_base(path, &self.base)
            }
            HistoryMode::Hash => match url.split_once('#') {
                Some((_, fragment)) => cut(fragment, '?'),
                None => "",
            },
        };
        if path.is_empty() {
            "/".to_string()
        } else {
            ensure_leading_slash(path).into_owned()
        }
    }
}

fn ensure_leading_slash(path: &str) -> std::borrow::Cow<'_, str> {
    if path.starts_with('/') {
        path.into()
    } else {
        format!("/{path}").into()
    }
}

fn cut(s: &str, delim: char) -> &str {
    s.split_once(delim).map_or(s, |(head, _)| head)
}

fn strip_origin(url: &str) -> &str {
    match url.split_once("://") {
        // The authority ends at the first `/`, `?` or `#`.
        Some((_, rest)) => rest.find(['/', '?', '#']).map_or("", |i| &rest[i..]),
        None => url,
    }
}

fn strip_base<'a>(path: &'a str, base: &str) -> &'a str {
    if base.is_empty() {
        return path;
    }
    match path.strip_prefix(base) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    }
}
