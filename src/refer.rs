//! The reference-anchor hooks: rewire marked anchors so clicking them
//! scrolls an in-page anchor into view (debounced) or jumps to the page of
//! a dotted `module.member` name.

use crate::debounce::Debouncer;
use crate::document::{ClickBinding, Document};
use crate::error::{HookError, HookResult};
use crate::renderer::LifecycleHook;
use crate::route::Route;
use crate::viewport::Viewport;

/// Anchors carrying this class scroll to the fixed reference anchor.
pub const REFER_CLASS: &str = "refer";
/// Anchors whose own text is the dotted `module.member` name.
pub const MODULE_OBJECT_CLASS: &str = "module-object-refer";
/// Anchors whose `module` attribute plus their text form the dotted name.
pub const MODULE_OBJECT_TO_CLASS: &str = "module-object-refer-to";

/// The fixed id every refer click scrolls to.
pub const REFER_ANCHOR_ID: &str = "refer-anchor";

/// Debounce window for scroll requests, in host ticks.
pub const SCROLL_DEBOUNCE_TICKS: u64 = 50;

/// Neutralized link target for rewired anchors.
const VOID_HREF: &str = "#";

/// A pending request to bring an element into view.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    pub id: String,
    pub align_to_top: bool,
}

/// Owns the debounced scroll pipeline shared by the refer hooks.
///
/// Clicks call [`AnchorScroller::request`]; the host advances time with
/// [`AnchorScroller::tick`], which flushes a due request into the viewport.
/// Rapid repeated clicks coalesce into the last request only.
pub struct AnchorScroller {
    debouncer: Debouncer<ScrollRequest>,
}

impl Default for AnchorScroller {
    fn default() -> Self {
        Self::new()
    }
}

impl AnchorScroller {
    pub fn new() -> Self {
        AnchorScroller {
            debouncer: Debouncer::new(SCROLL_DEBOUNCE_TICKS),
        }
    }

    pub fn request(&mut self, now: u64, id: impl Into<String>, align_to_top: bool) {
        self.debouncer.trigger(
            now,
            ScrollRequest {
                id: id.into(),
                align_to_top,
            },
        );
    }

    pub fn tick(&mut self, now: u64, viewport: &mut dyn Viewport) {
        if let Some(req) = self.debouncer.poll(now) {
            viewport.scroll_into_view(&req.id, req.align_to_top);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}

/// Registers the refer rewiring: every `a.refer` gets a reference-anchor
/// click binding and a neutralized `href`.
pub fn refer_plugin(hook: &mut LifecycleHook) {
    hook.done_each(|doc, _route| {
        doc.for_each_tag_class_mut("a", REFER_CLASS, |el| {
            el.binding = Some(ClickBinding::ReferAnchor);
            el.set_attr("href", VOID_HREF);
        });
    });
}

/// Registers the module-object rewiring: anchors naming a `module.member`
/// get a navigation-plus-scroll click binding and a neutralized `href`.
pub fn module_object_plugin(hook: &mut LifecycleHook) {
    hook.done_each(|doc, _route| {
        doc.for_each_tag_class_mut("a", MODULE_OBJECT_CLASS, |el| {
            let name = el.text.clone().unwrap_or_default();
            el.binding = Some(ClickBinding::ModuleObject { name });
            el.set_attr("href", VOID_HREF);
        });
        doc.for_each_tag_class_mut("a", MODULE_OBJECT_TO_CLASS, |el| {
            let module = el.attr("module").unwrap_or_default();
            let member = el.text.as_deref().unwrap_or_default();
            let name = format!("{}.{}", module, member);
            el.binding = Some(ClickBinding::ModuleObject { name });
            el.set_attr("href", VOID_HREF);
        });
    });
}

/// Executes the click binding of the element with `id`.
///
/// A refer binding requests a debounced scroll to [`REFER_ANCHOR_ID`]; a
/// module-object binding navigates to the module's page immediately and
/// requests a debounced scroll to the member (a name with no `.` navigates
/// without scrolling). An element without a binding is a no-op.
pub fn dispatch_click(
    doc: &Document,
    route: &Route,
    id: &str,
    now: u64,
    scroller: &mut AnchorScroller,
    viewport: &mut dyn Viewport,
) -> HookResult<()> {
    let el = doc
        .element_by_id(id)
        .ok_or_else(|| HookError::UnknownElement { id: id.to_string() })?;
    match &el.binding {
        None => Ok(()),
        Some(ClickBinding::ReferAnchor) => {
            scroller.request(now, REFER_ANCHOR_ID, true);
            Ok(())
        }
        Some(ClickBinding::ModuleObject { name }) => {
            let (module, member) = match name.split_once('.') {
                Some((module, member)) => (module, Some(member)),
                None => (name.as_str(), None),
            };
            viewport.navigate(&format!("{}/#/{}", route.base_url(), module));
            if let Some(member) = member {
                if !member.is_empty() {
                    scroller.request(now, member, true);
                }
            }
            Ok(())
        }
    }
}
