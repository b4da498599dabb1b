//! Convention-based mapping from namespaces to directories.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{ResolvedIdentity, error::DomainError};

/// Where generated artifacts live inside a project.
///
/// Directory settings are `/`-separated and relative to `source_root`,
/// which is itself relative to the project root. Every directory segment
/// doubles as a namespace segment under `root_namespace`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Directory under the project root holding all classes (`app`).
    pub source_root: String,
    /// Namespace that maps onto `source_root` (`App`).
    pub root_namespace: String,
    /// Implementation directory under the source root.
    pub repositories: String,
    /// Contract directory under the source root.
    pub contracts: String,
    /// Appended to the class name to form the contract name.
    pub contract_suffix: String,
    /// Host bootstrap file under the source root.
    pub provider: String,
    /// Sentinel marker inside the host bootstrap file.
    pub marker: String,
    /// File extension of generated classes, without the dot.
    pub extension: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            source_root: "app".into(),
            root_namespace: "App".into(),
            repositories: "Repositories".into(),
            contracts: "Repositories/Interfaces".into(),
            contract_suffix: "Interface".into(),
            provider: "Providers/RepositoryServiceProvider.php".into(),
            marker: "//:end-bindings:".into(),
            extension: "php".into(),
        }
    }
}

impl Layout {
    /// Check the settings a resolver and splicer rely on.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.root_namespace.trim().is_empty() {
            return Err(DomainError::InvalidLayout {
                field: "root_namespace",
                reason: "cannot be empty".into(),
            });
        }
        if self.marker.trim().is_empty() {
            return Err(DomainError::InvalidLayout {
                field: "marker",
                reason: "cannot be empty".into(),
            });
        }
        if self.marker.contains('\n') {
            return Err(DomainError::InvalidLayout {
                field: "marker",
                reason: "must fit on a single line".into(),
            });
        }
        if self.provider_class().is_empty() {
            return Err(DomainError::InvalidLayout {
                field: "provider",
                reason: "must name a file".into(),
            });
        }
        let same_dir = segments(&self.contracts)
            .map(str::to_ascii_lowercase)
            .eq(segments(&self.repositories).map(str::to_ascii_lowercase));
        if same_dir && self.contract_suffix.is_empty() {
            return Err(DomainError::InvalidLayout {
                field: "contract_suffix",
                reason: "cannot be empty while contracts and repositories share a directory"
                    .into(),
            });
        }
        for (field, value) in [
            ("source_root", &self.source_root),
            ("repositories", &self.repositories),
            ("contracts", &self.contracts),
            ("provider", &self.provider),
        ] {
            if Path::new(value).is_absolute() {
                return Err(DomainError::InvalidLayout {
                    field,
                    reason: format!("'{}' must be relative", value),
                });
            }
        }
        Ok(())
    }

    /// Namespace of implementations for the given sub-namespace segments.
    pub fn implementation_namespace(&self, sub: &[String]) -> String {
        self.namespace(&self.repositories, sub)
    }

    /// Namespace of contracts for the given sub-namespace segments.
    pub fn contract_namespace(&self, sub: &[String]) -> String {
        self.namespace(&self.contracts, sub)
    }

    /// Segments of the implementation directory, used to strip redundant
    /// prefixes from user input.
    pub fn repository_segments(&self) -> Vec<&str> {
        segments(&self.repositories).collect()
    }

    pub fn implementation_path(&self, root: &Path, identity: &ResolvedIdentity) -> PathBuf {
        self.class_path(root, &self.repositories, identity, &identity.class_name)
    }

    pub fn contract_path(&self, root: &Path, identity: &ResolvedIdentity) -> PathBuf {
        self.class_path(root, &self.contracts, identity, &identity.contract_name)
    }

    /// Path of the host bootstrap file.
    pub fn provider_path(&self, root: &Path) -> PathBuf {
        let mut path = self.source_dir(root);
        path.extend(segments(&self.provider));
        path
    }

    /// Namespace of the host bootstrap class.
    pub fn provider_namespace(&self) -> String {
        let dirs: Vec<&str> = segments(&self.provider).collect();
        let parents = dirs.len().saturating_sub(1);
        std::iter::once(self.root_namespace.as_str())
            .chain(dirs.into_iter().take(parents))
            .collect::<Vec<_>>()
            .join("\\")
    }

    /// Class name of the host bootstrap file (its file stem).
    pub fn provider_class(&self) -> String {
        segments(&self.provider)
            .last()
            .map(|file| match file.rsplit_once('.') {
                Some((stem, _)) => stem.to_string(),
                None => file.to_string(),
            })
            .unwrap_or_default()
    }

    fn namespace(&self, dir: &str, sub: &[String]) -> String {
        std::iter::once(self.root_namespace.as_str())
            .chain(segments(dir))
            .chain(sub.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("\\")
    }

    fn source_dir(&self, root: &Path) -> PathBuf {
        let mut path = root.to_path_buf();
        path.extend(segments(&self.source_root));
        path
    }

    fn class_path(
        &self,
        root: &Path,
        dir: &str,
        identity: &ResolvedIdentity,
        class: &str,
    ) -> PathBuf {
        let mut path = self.source_dir(root);
        path.extend(segments(dir));
        path.extend(identity.namespace_path.iter());
        if self.extension.is_empty() {
            path.push(class);
        } else {
            path.push(format!("{}.{}", class, self.extension));
        }
        path
    }
}

fn segments(value: &str) -> impl Iterator<Item = &str> {
    value.split(['/', '\\']).filter(|s| !s.is_empty())
}
