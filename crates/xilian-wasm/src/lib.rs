//! xilian-wasm: the xilian route table compiled to WebAssembly
//!
//! The JS shell installs the router before mounting the UI and asks it
//! which view to render for the current address.

pub mod shell;

#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::*;

pub use shell::{AppRouter, RouteMatch};
pub use xilian_router::app::View;
