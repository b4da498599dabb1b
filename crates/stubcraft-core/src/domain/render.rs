//! Placeholder substitution.

use std::collections::HashMap;

use crate::domain::{Layout, ResolvedIdentity};

/// Context for stub rendering.
///
/// A **Value Object** mapping placeholder tokens to values. Immutable after
/// creation; `with_variable` consumes and returns a new instance.
///
/// ## Built-in Variables
///
/// | Variable | Example |
/// |----------|---------|
/// | `NAMESPACE` | `App\Repositories\Admin` |
/// | `CLASS` | `UserRepository` |
/// | `CONTRACT_NAMESPACE` | `App\Repositories\Interfaces\Admin` |
/// | `CONTRACT` | `UserRepositoryInterface` |
/// | `BINDING_CONTRACT` | `\App\Repositories\Interfaces\Admin\UserRepositoryInterface` |
/// | `BINDING_IMPLEMENTATION` | `\App\Repositories\Admin\UserRepository` |
/// | `PROVIDER_NAMESPACE` | `App\Providers` |
/// | `PROVIDER_CLASS` | `RepositoryServiceProvider` |
/// | `MARKER` | `//:end-bindings:` |
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Build the standard variable set for one identity.
    pub fn for_identity(identity: &ResolvedIdentity, layout: &Layout) -> Self {
        Self::default()
            .with_variable("NAMESPACE", &identity.namespace)
            .with_variable("CLASS", &identity.class_name)
            .with_variable("CONTRACT_NAMESPACE", &identity.contract_namespace)
            .with_variable("CONTRACT", &identity.contract_name)
            .with_variable("BINDING_CONTRACT", &identity.binding.contract)
            .with_variable("BINDING_IMPLEMENTATION", &identity.binding.implementation)
            .with_variable("PROVIDER_NAMESPACE", layout.provider_namespace())
            .with_variable("PROVIDER_CLASS", layout.provider_class())
            .with_variable("MARKER", &layout.marker)
    }

    /// Add a variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace `{{TOKEN}}` placeholders in a single left-to-right pass.
    ///
    /// - `{{UNKNOWN}}` stays as literal `{{UNKNOWN}}`
    /// - substituted values are never re-scanned, so a value containing
    ///   `{{CLASS}}` is emitted verbatim
    /// - an unterminated `{{` is copied through
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after_open = &rest[open + 2..];

            let Some(close) = after_open.find("}}") else {
                out.push_str(&rest[open..]);
                return out;
            };

            let key = &after_open[..close];
            match self.get(key) {
                Some(value) => {
                    out.push_str(value);
                    rest = &after_open[close + 2..];
                }
                None => {
                    // Emit one brace and rescan so `{{{CLASS}}}` still resolves.
                    out.push('{');
                    rest = &rest[open + 1..];
                }
            }
        }

        out.push_str(rest);
        out
    }
}
