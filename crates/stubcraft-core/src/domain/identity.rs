//! Requests and the identifiers derived from them.

use serde::Serialize;

use crate::domain::{
    Layout,
    error::DomainError,
    naming::{segment_problem, split_segments, strip_extension, to_studly_case},
};

/// Immutable input to one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    raw_name: String,
    force: bool,
}

impl GenerationRequest {
    /// Validate a raw class name and build a request.
    ///
    /// The name must contain at least one segment once whitespace and
    /// namespace separators are trimmed, and every segment must be usable
    /// as a class identifier.
    pub fn new(raw_name: impl Into<String>, force: bool) -> Result<Self, DomainError> {
        let raw_name = raw_name.into();
        let segments = split_segments(&raw_name);

        if segments.is_empty() {
            return Err(DomainError::InvalidName {
                name: raw_name,
                reason: "name cannot be empty".into(),
            });
        }

        // Only the class segment may carry a file extension.
        let last = segments.len() - 1;
        let problem = segments.iter().enumerate().find_map(|(i, s)| {
            if i != last && s.contains('.') {
                Some(format!("segment '{}' contains '.'", s))
            } else {
                segment_problem(s)
            }
        });
        if let Some(reason) = problem {
            return Err(DomainError::InvalidName {
                name: raw_name,
                reason,
            });
        }

        Ok(Self { raw_name, force })
    }

    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    pub fn force(&self) -> bool {
        self.force
    }
}

/// Contract/implementation pair registered in the host bootstrap file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    /// Fully-qualified contract name, with a leading `\`.
    pub contract: String,
    /// Fully-qualified implementation name, with a leading `\`.
    pub implementation: String,
}

/// Everything derived from a raw class name under a [`Layout`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedIdentity {
    /// Bare implementation class name (`UserRepository`).
    pub class_name: String,
    /// Sub-namespace segments between the layout directory and the class.
    pub namespace_path: Vec<String>,
    /// Implementation namespace (`App\Repositories\Admin`).
    pub namespace: String,
    /// Contract name (`UserRepositoryInterface`).
    pub contract_name: String,
    /// Contract namespace (`App\Repositories\Interfaces\Admin`).
    pub contract_namespace: String,
    pub binding: Binding,
}

/// Derives a [`ResolvedIdentity`] from user input.
///
/// Resolution is a pure function of the raw name and the layout.
#[derive(Debug, Clone)]
pub struct NameResolver {
    layout: Layout,
}

impl NameResolver {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    /// Resolve a validated raw name.
    ///
    /// Prefixes implied by the layout are stripped, so `App\Repositories\Admin\UserRepository`,
    /// `app/Repositories/Admin/UserRepository.php` and `Admin/UserRepository` all resolve to the
    /// same identity. The last segment is never stripped.
    pub fn resolve(&self, raw_name: &str) -> ResolvedIdentity {
        let mut segments: Vec<&str> = split_segments(raw_name);
        if let Some(last) = segments.last_mut() {
            *last = strip_extension(*last);
        }

        let mut rest: &[&str] = &segments;
        if rest.len() > 1
            && (rest[0].eq_ignore_ascii_case(&self.layout.root_namespace)
                || rest[0].eq_ignore_ascii_case(&self.layout.source_root))
        {
            rest = &rest[1..];
        }

        let repository_dir = self.layout.repository_segments();
        if !repository_dir.is_empty()
            && rest.len() > repository_dir.len()
            && rest
                .iter()
                .zip(&repository_dir)
                .all(|(a, b)| a.eq_ignore_ascii_case(b))
        {
            rest = &rest[repository_dir.len()..];
        }

        let mut studly: Vec<String> = rest.iter().map(|s| to_studly_case(s)).collect();
        let class_name = studly.pop().unwrap_or_default();
        let namespace_path = studly;

        let namespace = self.layout.implementation_namespace(&namespace_path);
        let contract_namespace = self.layout.contract_namespace(&namespace_path);
        let contract_name = format!("{}{}", class_name, self.layout.contract_suffix);

        let binding = Binding {
            contract: format!("\\{}\\{}", contract_namespace, contract_name),
            implementation: format!("\\{}\\{}", namespace, class_name),
        };

        ResolvedIdentity {
            class_name,
            namespace_path,
            namespace,
            contract_name,
            contract_namespace,
            binding,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}
