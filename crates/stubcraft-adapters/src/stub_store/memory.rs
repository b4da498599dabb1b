//! In-memory stub store.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use stubcraft_core::{
    application::{ApplicationError, ports::StubStore},
    domain::{DomainError, StubKind, StubTemplate},
    error::StubcraftResult,
};

use super::BuiltinStubs;

/// Thread-safe map of stubs. Kinds that were never inserted fail with
/// `TemplateNotFound`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStubStore {
    inner: Arc<RwLock<HashMap<StubKind, StubTemplate>>>,
}

impl InMemoryStubStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with the built-in stubs.
    pub fn with_builtin() -> StubcraftResult<Self> {
        let store = Self::new();
        for kind in StubKind::ALL {
            store.insert(BuiltinStubs.load(kind)?)?;
        }
        Ok(store)
    }

    /// Insert or replace the stub for `template.kind`.
    pub fn insert(&self, template: StubTemplate) -> StubcraftResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(template.kind, template);
        Ok(())
    }

    pub fn remove(&self, kind: StubKind) -> StubcraftResult<Option<StubTemplate>> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.remove(&kind))
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StubStore for InMemoryStubStore {
    fn load(&self, kind: StubKind) -> StubcraftResult<StubTemplate> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .get(&kind)
            .cloned()
            .ok_or_else(|| DomainError::TemplateNotFound { kind }.into())
    }
}
