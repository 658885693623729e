//! The xilian application route table
//!
//! Two screens: the welcome page at `/` and the chat page at `/chat`.

use crate::history::History;
use crate::router::{RouteTable, Router};
use crate::Result;
use std::fmt;

pub const WELCOME: &str = "welcome";
pub const CHAT: &str = "chat";

/// Views the application shell knows how to mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Welcome,
    Chat,
}

impl View {
    /// Component name used by the shell
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Welcome => "WelcomeView",
            View::Chat => "ChatView",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application router with real-path history.
///
/// ```
/// use xilian_router::app::{self, View};
///
/// let router = app::create_router().unwrap();
/// assert_eq!(router.resolve("/chat").unwrap().component, View::Chat);
/// assert_eq!(router.href_for::<&str>("chat", &[]).unwrap(), "/chat");
/// ```
pub fn create_router() -> Result<Router<View>> {
    create_router_with(History::browser())
}

/// Application router under a caller-chosen history strategy
pub fn create_router_with(history: History) -> Result<Router<View>> {
    RouteTable::new(history)
        .route("/", WELCOME, View::Welcome)
        .route("/chat", CHAT, View::Chat)
        .build()
}
