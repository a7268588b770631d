use serde::{Deserialize, Serialize};

/// Constraint used when the caller does not specify one.
pub const ANY_VERSION: &str = "*";

/// A named dependency with an unparsed version constraint.
///
/// Examples:
/// - `k6/x/kubernetes` with constraint `*`
/// - `k6/x/output-kafka` with constraint `>v0.9.0`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    #[serde(default = "default_constraint")]
    pub constraint: String,
}

fn default_constraint() -> String {
    ANY_VERSION.to_string()
}

impl Dependency {
    pub fn new(name: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: constraint.into(),
        }
    }

    /// A dependency accepting any version.
    pub fn any(name: impl Into<String>) -> Self {
        Self::new(name, ANY_VERSION)
    }
}

impl std::fmt::Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.constraint)
    }
}
