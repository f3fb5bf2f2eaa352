//! # doc-hooks
//!
//! Post-render decoration hooks for a single-page documentation renderer.
//!
//! After each render pass the host runs an ordered list of plugins over the
//! rendered document tree:
//! - **path-append** rebases relative `href`/`src` values against the
//!   directory of the current virtual route,
//! - **download** fills in `download` attributes on marked anchors,
//! - **refer** and **module-object** rewire reference anchors to scroll
//!   in-page targets into view, debounced across rapid clicks.
//!
//! The plugin list, the document handle, and the viewport are all explicit —
//! no global registry, no implicit DOM.
//!
//! ## Example
//! ```ignore
//! use doc_hooks::{default_plugins, parse_document, Renderer, Route};
//!
//! let mut doc = parse_document(yaml)?;
//! let route = Route::new("https://docs.example.org/#/guide/install", "https://docs.example.org");
//! let mut renderer = Renderer::new(&default_plugins());
//! renderer.render(&mut doc, &route);
//! ```

pub mod append_path;
pub mod debounce;
pub mod document;
pub mod download;
pub mod error;
pub mod parser;
pub mod path;
pub mod refer;
pub mod renderer;
pub mod route;
pub mod validator;
pub mod viewport;

// --- Core types ---
pub use document::{ClickBinding, Document, Element};
pub use error::{HookError, HookResult};
pub use renderer::{LifecycleHook, Plugin, Renderer};
pub use route::Route;

// --- Hook surface ---
pub use append_path::append_path_plugin;
pub use debounce::Debouncer;
pub use download::download_plugin;
pub use refer::{
    dispatch_click, module_object_plugin, refer_plugin, AnchorScroller, ScrollRequest,
    REFER_ANCHOR_ID, SCROLL_DEBOUNCE_TICKS,
};
pub use viewport::{RecordingViewport, Viewport};

/// Resolve `.` and `..` segments in a `/`-delimited relative path.
pub fn resolve_path(path: &str) -> String {
    path::resolve_path(path)
}

/// Parse a rendered-document description from YAML and validate it.
pub fn parse_document(yaml: &str) -> HookResult<Document> {
    parser::parse_document(yaml)
}

/// The stock plugins, in the order the renderer is expected to run them.
pub fn default_plugins() -> Vec<Plugin> {
    vec![
        append_path_plugin,
        download_plugin,
        refer_plugin,
        module_object_plugin,
    ]
}
