//! Stubs compiled into the binary.

use stubcraft_core::{
    application::ports::StubStore,
    domain::{StubKind, StubTemplate},
    error::StubcraftResult,
};

const IMPLEMENTATION: &str = r#"<?php

namespace {{NAMESPACE}};

use {{CONTRACT_NAMESPACE}}\{{CONTRACT}};

/**
 * Class {{CLASS}}.
 */
class {{CLASS}} implements {{CONTRACT}}
{
    //
}
"#;

const CONTRACT: &str = r#"<?php

namespace {{CONTRACT_NAMESPACE}};

/**
 * Interface {{CONTRACT}}.
 */
interface {{CONTRACT}}
{
    //
}
"#;

const BINDING: &str = "$this->app->bind({{BINDING_CONTRACT}}::class, {{BINDING_IMPLEMENTATION}}::class);";

const PROVIDER: &str = r#"<?php

namespace {{PROVIDER_NAMESPACE}};

use Illuminate\Support\ServiceProvider;

class {{PROVIDER_CLASS}} extends ServiceProvider
{
    /**
     * Register services.
     */
    public function register(): void
    {
        {{MARKER}}
    }

    /**
     * Bootstrap services.
     */
    public function boot(): void
    {
        //
    }
}
"#;

/// The default stub set. Every [`StubKind`] has a body, so `load` never
/// fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStubs;

impl BuiltinStubs {
    pub fn new() -> Self {
        Self
    }

    /// Raw stub body for `kind`.
    pub const fn body(kind: StubKind) -> &'static str {
        match kind {
            StubKind::Implementation => IMPLEMENTATION,
            StubKind::Contract => CONTRACT,
            StubKind::Binding => BINDING,
            StubKind::Provider => PROVIDER,
        }
    }
}

impl StubStore for BuiltinStubs {
    fn load(&self, kind: StubKind) -> StubcraftResult<StubTemplate> {
        Ok(StubTemplate::from_static(kind, Self::body(kind)))
    }
}
