//! The path-append hook: rebases relative `href`/`src` values on marked
//! elements against the directory of the current virtual route.

use crate::document::Element;
use crate::path::append_resolved;
use crate::renderer::LifecycleHook;
use crate::route::Route;

/// Elements carrying this class get their link target rewritten.
pub const PATH_APPEND_CLASS: &str = "path-append";

/// Registers the path-append rewrite to run after each render.
pub fn append_path_plugin(hook: &mut LifecycleHook) {
    hook.done_each(|doc, route| {
        let dir = route.current_dir();
        doc.for_each_with_class_mut(PATH_APPEND_CLASS, |el| {
            rewrite_element(el, route, &dir);
        });
    });
}

fn rewrite_element(el: &mut Element, route: &Route, dir: &str) {
    // `src` wins over `href` when both are present.
    let attr_name = if el.attr("src").is_some() {
        "src"
    } else if el.attr("href").is_some() {
        "href"
    } else {
        return;
    };
    let old = el.attr(attr_name).unwrap_or_default().to_string();
    if old.is_empty() || route.is_same_origin(&old) {
        return;
    }
    el.set_attr(attr_name, rewrite_value(&old, dir));
}

/// Rebase one attribute value against the current directory.
///
/// Hash-route values keep their `#/` prefix and get the directory spliced in
/// behind it; plain values lose a single leading `./` or `/` before the
/// directory is prefixed.
pub fn rewrite_value(value: &str, dir: &str) -> String {
    if let Some(rest) = value.strip_prefix("#/") {
        format!("#/{}", append_resolved(dir, rest))
    } else {
        let cleaned = value.strip_prefix("./").unwrap_or(value);
        let cleaned = cleaned.strip_prefix('/').unwrap_or(cleaned);
        append_resolved(dir, cleaned)
    }
}
