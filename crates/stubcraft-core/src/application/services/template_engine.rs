//! Template Engine - stub lookup plus placeholder substitution.

use tracing::{debug, instrument};

use crate::{
    application::ports::StubStore,
    domain::{Layout, RenderContext, ResolvedIdentity, StubKind},
    error::StubcraftResult,
};

/// Renders stubs for one resolved identity.
///
/// Stubs are loaded from the store on every call; nothing is cached.
pub struct TemplateEngine<'a> {
    stubs: &'a dyn StubStore,
    layout: &'a Layout,
}

impl<'a> TemplateEngine<'a> {
    pub fn new(stubs: &'a dyn StubStore, layout: &'a Layout) -> Self {
        Self { stubs, layout }
    }

    /// Load the stub for `kind` and substitute every recognised token.
    ///
    /// Unrecognised tokens are left in place.
    #[instrument(skip_all, fields(kind = %kind, class = %identity.class_name))]
    pub fn render(&self, kind: StubKind, identity: &ResolvedIdentity) -> StubcraftResult<String> {
        let stub = self.stubs.load(kind)?;
        let context = RenderContext::for_identity(identity, self.layout);
        let rendered = context.render(stub.as_str());
        debug!(bytes = rendered.len(), "Stub rendered");
        Ok(rendered)
    }

    pub fn layout(&self) -> &'a Layout {
        self.layout
    }
}
