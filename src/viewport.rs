//! The injected effect handle for scrolling and navigation.

/// What the host page can do on behalf of a hook. Injected rather than
/// reached through a global, so tests can substitute a recording double.
pub trait Viewport {
    /// Bring the element with `id` into view.
    fn scroll_into_view(&mut self, id: &str, align_to_top: bool);

    /// Load a new page address.
    fn navigate(&mut self, url: &str);
}

/// Stock test double: records every effect in order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingViewport {
    pub scrolls: Vec<(String, bool)>,
    pub navigations: Vec<String>,
}

impl RecordingViewport {
    pub fn new() -> Self {
        RecordingViewport::default()
    }
}

impl Viewport for RecordingViewport {
    fn scroll_into_view(&mut self, id: &str, align_to_top: bool) {
        self.scrolls.push((id.to_string(), align_to_top));
    }

    fn navigate(&mut self, url: &str) {
        self.navigations.push(url.to_string());
    }
}
