use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The rendered document handed to each post-render hook.
///
/// This is the injected handle the hooks mutate — there is no implicit global
/// document. One root element, arbitrary nesting below it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub root: Element,
}

/// A single element of the rendered tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
    /// Installed by the refer hooks in place of a script click handler.
    /// Runtime decoration only, never serialized.
    #[serde(skip)]
    pub binding: Option<ClickBinding>,
}

/// What clicking a rewired anchor does.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickBinding {
    /// Scroll the fixed reference anchor into view.
    ReferAnchor,
    /// Navigate to the page of a dotted `module.member` name, then scroll
    /// the member into view.
    ModuleObject { name: String },
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            text: None,
            children: Vec::new(),
            binding: None,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove(name)
    }

    fn for_each_mut<F: FnMut(&mut Element)>(&mut self, f: &mut F) {
        f(self);
        for child in &mut self.children {
            child.for_each_mut(f);
        }
    }

    fn for_each<F: FnMut(&Element)>(&self, f: &mut F) {
        f(self);
        for child in &self.children {
            child.for_each(f);
        }
    }
}

impl Document {
    pub fn new(root: Element) -> Self {
        Document { root }
    }

    /// Visits every element in document order, mutably.
    pub fn for_each_element_mut<F: FnMut(&mut Element)>(&mut self, mut f: F) {
        self.root.for_each_mut(&mut f);
    }

    /// Visits every element in document order.
    pub fn for_each_element<F: FnMut(&Element)>(&self, mut f: F) {
        self.root.for_each(&mut f);
    }

    /// Visits every element carrying the given class, mutably.
    pub fn for_each_with_class_mut<F: FnMut(&mut Element)>(&mut self, class: &str, mut f: F) {
        self.root.for_each_mut(&mut |el| {
            if el.has_class(class) {
                f(el);
            }
        });
    }

    /// Visits every `tag` element carrying the given class, mutably.
    /// The query equivalent of a `tag.class` selector.
    pub fn for_each_tag_class_mut<F: FnMut(&mut Element)>(
        &mut self,
        tag: &str,
        class: &str,
        mut f: F,
    ) {
        self.root.for_each_mut(&mut |el| {
            if el.tag == tag && el.has_class(class) {
                f(el);
            }
        });
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        let mut found: Option<&Element> = None;
        find_by_id(&self.root, id, &mut found);
        found
    }

    /// All ids present in the document, in document order.
    pub fn ids(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.for_each_element(|el| {
            if let Some(id) = &el.id {
                out.push(id.clone());
            }
        });
        out
    }
}

fn find_by_id<'a>(el: &'a Element, id: &str, found: &mut Option<&'a Element>) {
    if found.is_some() {
        return;
    }
    if el.id.as_deref() == Some(id) {
        *found = Some(el);
        return;
    }
    for child in &el.children {
        find_by_id(child, id, found);
    }
}
