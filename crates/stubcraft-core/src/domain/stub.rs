//! Stub kinds and stub bodies.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// The closed set of stubs the generator knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StubKind {
    /// Concrete data-access class.
    Implementation,
    /// Abstract contract the implementation fulfils.
    Contract,
    /// Single registration statement spliced into the host bootstrap file.
    Binding,
    /// Body of a freshly created host bootstrap file.
    Provider,
}

impl StubKind {
    pub const ALL: [StubKind; 4] = [
        StubKind::Implementation,
        StubKind::Contract,
        StubKind::Binding,
        StubKind::Provider,
    ];

    /// File name (without extension) used for stub override files.
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Implementation => "implementation",
            Self::Contract => "contract",
            Self::Binding => "binding",
            Self::Provider => "provider",
        }
    }
}

impl fmt::Display for StubKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

impl FromStr for StubKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.file_stem().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown stub kind '{}'", s))
    }
}

/// A named template body with `{{TOKEN}}` placeholders.
///
/// `Cow` keeps compiled-in stubs zero-copy while letting stubs read from
/// disk own their text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubTemplate {
    pub kind: StubKind,
    pub body: Cow<'static, str>,
}

impl StubTemplate {
    pub const fn from_static(kind: StubKind, body: &'static str) -> Self {
        Self {
            kind,
            body: Cow::Borrowed(body),
        }
    }

    pub fn owned(kind: StubKind, body: impl Into<String>) -> Self {
        Self {
            kind,
            body: Cow::Owned(body.into()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.body
    }
}
