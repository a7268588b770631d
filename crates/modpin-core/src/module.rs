use serde::{Deserialize, Serialize};

/// A concrete module that satisfies a [`Dependency`](crate::dependency::Dependency).
///
/// `version` is the literal exactly as the registry lists it, so a `v`
/// prefix or build metadata survives resolution untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Module {
    pub path: String,
    pub version: String,
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.path, self.version)
    }
}
