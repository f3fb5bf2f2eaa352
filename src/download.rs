//! The download hook: anchors marked for download get a `download`
//! attribute defaulting to the link's file name.

use crate::renderer::LifecycleHook;

/// Anchors carrying this class are decorated.
pub const DOWNLOAD_CLASS: &str = "download";

/// Registers the download decoration to run after each render.
///
/// Every `a.download` whose `href` is non-empty and does not end in `/`
/// receives a `download` attribute. An existing non-empty value is kept;
/// an absent or empty one is filled with the last `/`-separated segment
/// of the `href`.
pub fn download_plugin(hook: &mut LifecycleHook) {
    hook.done_each(|doc, _route| {
        doc.for_each_tag_class_mut("a", DOWNLOAD_CLASS, |el| {
            let href = el.attr("href").unwrap_or_default();
            if href.is_empty() || href.ends_with('/') {
                return;
            }
            let current = el.attr("download").unwrap_or_default();
            if current.is_empty() {
                let file_name = href.rsplit('/').next().unwrap_or(href).to_string();
                el.set_attr("download", file_name);
            }
        });
    });
}
