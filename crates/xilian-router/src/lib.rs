//! xilian-router: client-side route table for the xilian web app
//!
//! Maps location paths to view components and route names back to paths.
//!
//! ## Features
//! - Ordered route table, validated once at startup
//! - Static paths, `:name` parameters and `*` wildcards
//! - Navigation by path or by route name
//! - Browser (`/chat`) or hash (`/#/chat`) history
//!
//! ## Example
//! ```
//! use xilian_router::{History, RouteTable, Target};
//!
//! let mut router = RouteTable::new(History::browser())
//!     .route("/", "welcome", "WelcomeView")
//!     .route("/chat", "chat", "ChatView")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(router.resolve("/chat").unwrap().component, "ChatView");
//! assert!(router.resolve("/unknown").is_none());
//!
//! let current = router.push(Target::named("welcome")).unwrap();
//! assert_eq!(current.path, "/");
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod app;
pub mod error;
pub mod history;
pub mod route;
pub mod router;
mod trie;

pub use error::{Error, Result};
pub use history::{History, HistoryMode};
pub use route::{Resolved, RouteDef, Target};
pub use router::{RouteTable, Router};
