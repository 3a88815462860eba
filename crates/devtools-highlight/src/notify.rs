//! Render-complete notification
//!
//! Views build a [`Document`] and then announce that rendering finished.
//! Side effects that need the finished output, such as syntax
//! highlighting, subscribe as [`RenderHook`]s on a [`RenderNotifier`].
//! Nothing fires implicitly: the caller decides when a pass is complete.

use crate::document::Document;

/// A side effect run after a render pass completes.
pub trait RenderHook {
    fn on_render_complete(&self, doc: &mut Document);
}

impl<F> RenderHook for F
where
    F: Fn(&mut Document),
{
    fn on_render_complete(&self, doc: &mut Document) {
        self(doc)
    }
}

/// Ordered set of render hooks.
#[derive(Default)]
pub struct RenderNotifier {
    hooks: Vec<Box<dyn RenderHook>>,
}

impl RenderNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifier with only the highlight hook registered.
    pub fn highlighting() -> Self {
        Self::new().with_hook(HighlightHook)
    }

    /// Register a hook (builder pattern).
    pub fn with_hook(mut self, hook: impl RenderHook + 'static) -> Self {
        self.register(hook);
        self
    }

    /// Register a hook. Hooks fire in registration order.
    pub fn register(&mut self, hook: impl RenderHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Announce that `doc` is fully rendered.
    pub fn notify(&self, doc: &mut Document) {
        tracing::trace!(hooks = self.hooks.len(), nodes = doc.len(), "Render complete");
        for hook in &self.hooks {
            hook.on_render_complete(doc);
        }
    }

    /// Run a render pass: `build` attaches content, then hooks fire.
    ///
    /// Hooks never see a partially built document.
    pub fn render<F>(&self, build: F) -> Document
    where
        F: FnOnce(&mut Document),
    {
        let mut doc = Document::new();
        build(&mut doc);
        self.notify(&mut doc);
        doc
    }
}

/// Highlight every code block present in a document.
///
/// Returns how many blocks were highlighted. Blocks without a known
/// language are skipped. Safe to call repeatedly.
pub fn highlight_all(doc: &mut Document) -> usize {
    let mut count = 0;
    for block in doc.code_blocks_mut() {
        if block.highlight() {
            count += 1;
        } else {
            tracing::debug!(tag = ?block.language_tag(), "Skipping block with unknown language");
        }
    }
    count
}

/// Render hook that runs [`highlight_all`].
#[derive(Debug, Default, Clone, Copy)]
pub struct HighlightHook;

impl RenderHook for HighlightHook {
    fn on_render_complete(&self, doc: &mut Document) {
        highlight_all(doc);
    }
}
