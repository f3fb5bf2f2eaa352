//! The host-side hook pipeline.
//!
//! Plugins are plain functions handed a [`LifecycleHook`] at registration
//! time; they install done-each callbacks that run after every render pass.
//! The plugin list is explicit configuration passed to [`Renderer::new`] —
//! there is no process-wide registry to append to.

use crate::document::Document;
use crate::route::Route;

/// A callback run after each render pass, over the injected document handle.
pub type DoneEachFn = Box<dyn FnMut(&mut Document, &Route)>;

/// A plugin: registers its callbacks against the lifecycle hook object.
pub type Plugin = fn(&mut LifecycleHook);

/// The post-render lifecycle hook object handed to each plugin.
#[derive(Default)]
pub struct LifecycleHook {
    done_each: Vec<DoneEachFn>,
}

impl LifecycleHook {
    /// Register a callback to run after every render pass, in registration
    /// order.
    pub fn done_each<F>(&mut self, callback: F)
    where
        F: FnMut(&mut Document, &Route) + 'static,
    {
        self.done_each.push(Box::new(callback));
    }
}

/// Runs the registered done-each callbacks over each rendered document.
pub struct Renderer {
    hook: LifecycleHook,
}

impl Renderer {
    /// Build a renderer from an explicit, ordered plugin list.
    pub fn new(plugins: &[Plugin]) -> Self {
        let mut hook = LifecycleHook::default();
        for plugin in plugins {
            plugin(&mut hook);
        }
        Renderer { hook }
    }

    /// A renderer preloaded with [`crate::default_plugins`].
    pub fn with_default_plugins() -> Self {
        Renderer::new(&crate::default_plugins())
    }

    /// Run all done-each callbacks over a freshly rendered document.
    pub fn render(&mut self, doc: &mut Document, route: &Route) {
        for callback in &mut self.hook.done_each {
            callback(doc, route);
        }
    }
}
