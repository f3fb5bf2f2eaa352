use serde::{Deserialize, Serialize};

/// The host page location at render time.
///
/// `url` is the full page address including the `#/…` virtual route; `origin`
/// is the scheme-plus-host prefix used to recognize absolute same-origin
/// links, which are never rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub url: String,
    pub origin: String,
}

impl Route {
    pub fn new(url: impl Into<String>, origin: impl Into<String>) -> Self {
        Route {
            url: url.into(),
            origin: origin.into(),
        }
    }

    /// The virtual route: everything after the first `#`, or `None` when the
    /// page has no fragment.
    pub fn fragment(&self) -> Option<&str> {
        self.url.split_once('#').map(|(_, frag)| frag)
    }

    /// Directory of the current virtual document, without a leading or
    /// trailing separator.
    ///
    /// The fragment minus its final segment: `#/guide/install` → `"guide"`,
    /// `#/install` → `""`. No fragment means the route root, `""`.
    ///
    /// A fragment with no separator at all (`#install`) comes back whole as
    /// the directory. Deliberate: rewritten links on such routes only stay
    /// correct because of it, so don't "fix" this to return `""`.
    pub fn current_dir(&self) -> String {
        let frag = match self.fragment() {
            Some(f) => f,
            None => return String::new(),
        };
        let dir = match frag.rfind('/') {
            Some(pos) => &frag[..pos],
            None => frag,
        };
        dir.strip_prefix('/').unwrap_or(dir).to_string()
    }

    /// The page address with the `/#…` virtual-route tail removed. Used to
    /// build cross-document navigation targets.
    pub fn base_url(&self) -> &str {
        match self.url.find('#') {
            Some(pos) => self.url[..pos].trim_end_matches('/'),
            None => self.url.trim_end_matches('/'),
        }
    }

    /// Whether an attribute value is an absolute URL under this page's origin.
    pub fn is_same_origin(&self, value: &str) -> bool {
        !self.origin.is_empty() && value.starts_with(&self.origin)
    }
}
