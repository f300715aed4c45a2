//! Opaque resource references (emoji assets, save folders).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A resource reference. The crate never dereferences it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uri(String);

impl Uri {
    /// The platform's "empty" reference.
    pub const EMPTY: Uri = Uri(String::new());

    pub fn parse(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    /// Parse an optional stored reference; absent and empty both mean "unset".
    pub fn non_empty(raw: Option<&str>) -> Option<Self> {
        raw.map(Self::parse).filter(|uri| !uri.is_empty())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the [`Uri::EMPTY`] sentinel.
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
