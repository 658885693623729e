//! WASM bindings for JavaScript interop

use crate::shell::{AppRouter, RouteMatch};
use wasm_bindgen::prelude::*;

fn js_error(e: xilian_router::Error) -> JsError {
    JsError::new(&e.to_string())
}

/// WASM-exposed route match
#[wasm_bindgen(js_name = RouteMatch)]
pub struct JsRouteMatch {
    inner: RouteMatch,
}

#[wasm_bindgen(js_class = RouteMatch)]
impl JsRouteMatch {
    /// Whether a route matched
    #[wasm_bindgen(getter)]
    pub fn found(&self) -> bool {
        self.inner.found
    }

    /// Route name, empty when not found
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.inner.name.clone()
    }

    /// Component to mount
    #[wasm_bindgen(getter)]
    pub fn view(&self) -> String {
        self.inner.view.clone()
    }

    /// Params flattened as [k1, v1, k2, v2, ...]
    #[wasm_bindgen(getter)]
    pub fn params(&self) -> Vec<String> {
        self.inner.params.clone()
    }

    /// Address of the matched path
    #[wasm_bindgen(getter)]
    pub fn href(&self) -> String {
        self.inner.href.clone()
    }
}

impl From<RouteMatch> for JsRouteMatch {
    fn from(inner: RouteMatch) -> Self {
        Self { inner }
    }
}

/// WASM-exposed application router
#[wasm_bindgen]
pub struct WasmRouter {
    inner: AppRouter,
}

#[wasm_bindgen]
impl WasmRouter {
    /// `history` is `"browser"` (default) or `"hash"`
    #[wasm_bindgen(constructor)]
    pub fn new(history: Option<String>) -> Result<WasmRouter, JsError> {
        let mode = history.as_deref().unwrap_or("browser");
        AppRouter::new(mode)
            .map(|inner| Self { inner })
            .map_err(js_error)
    }

    /// Match a location path without navigating
    pub fn resolve(&self, path: &str) -> JsRouteMatch {
        self.inner.resolve(path).into()
    }

    /// Path of a named route
    #[wasm_bindgen(js_name = pathFor)]
    pub fn path_for(&self, name: &str) -> Result<String, JsError> {
        self.inner.path_for(name).map_err(js_error)
    }

    /// Address of a named route
    #[wasm_bindgen(js_name = hrefFor)]
    pub fn href_for(&self, name: &str) -> Result<String, JsError> {
        self.inner.href_for(name).map_err(js_error)
    }

    /// Navigate to a location path
    pub fn push(&mut self, path: &str) -> Result<JsRouteMatch, JsError> {
        self.inner.push(path).map(Into::into).map_err(js_error)
    }

    /// Navigate to a named route
    #[wasm_bindgen(js_name = pushNamed)]
    pub fn push_named(&mut self, name: &str) -> Result<JsRouteMatch, JsError> {
        self.inner.push_named(name).map(Into::into).map_err(js_error)
    }

    /// Pick up the route carried by the page's initial address
    #[wasm_bindgen(js_name = syncLocation)]
    pub fn sync_location(&mut self, url: &str) -> Result<JsRouteMatch, JsError> {
        self.inner.sync_location(url).map(Into::into).map_err(js_error)
    }

    /// Currently active route
    pub fn current(&self) -> JsRouteMatch {
        self.inner.current().into()
    }

    /// Route names in registration order
    #[wasm_bindgen(js_name = routeNames)]
    pub fn route_names(&self) -> Vec<String> {
        self.inner.route_names()
    }
}
