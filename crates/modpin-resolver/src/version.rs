//! Registry version literals: lenient parsing and SemVer precedence ordering.
//!
//! Registries list versions the way Go-style module hosts publish them, so a
//! literal may carry a `v` prefix and may omit trailing components
//! (`v1.2` reads as `1.2.0`). Everything after normalisation is strict
//! SemVer 2.0.0 as implemented by the `semver` crate.
//!
//! Ordering follows SemVer precedence:
//! - `major.minor.patch` compare numerically
//! - a pre-release sorts before the matching release
//! - pre-release identifiers compare field by field (numeric < alphanumeric)
//! - build metadata is ignored, but kept in the original literal

use std::cmp::Ordering;
use std::fmt;

use semver::Version;
use thiserror::Error;

/// Why a version literal was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("empty version")]
    Empty,

    #[error("expected at most three numeric components, found {0}")]
    TooManyComponents(usize),

    #[error("{0}")]
    Semver(String),
}

impl From<semver::Error> for VersionError {
    fn from(e: semver::Error) -> Self {
        Self::Semver(e.to_string())
    }
}

/// A parsed version that remembers the literal it came from.
#[derive(Debug, Clone)]
pub struct RegistryVersion {
    pub original: String,
    version: Version,
}

impl RegistryVersion {
    pub fn parse(literal: &str) -> Result<Self, VersionError> {
        let version = Version::parse(&normalize(literal)?)?;
        Ok(Self {
            original: literal.to_string(),
            version,
        })
    }

    /// The normalised SemVer value used for comparison and matching.
    pub fn version(&self) -> &Version {
        &self.version
    }
}

impl fmt::Display for RegistryVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl PartialEq for RegistryVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RegistryVersion {}

impl Ord for RegistryVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_precedence(&self.version, &other.version)
    }
}

impl PartialOrd for RegistryVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// SemVer precedence; unlike `Version`'s own `Ord`, build metadata never
/// breaks a tie.
pub fn cmp_precedence(a: &Version, b: &Version) -> Ordering {
    a.major
        .cmp(&b.major)
        .then(a.minor.cmp(&b.minor))
        .then(a.patch.cmp(&b.patch))
        .then_with(|| match (a.pre.is_empty(), b.pre.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.pre.cmp(&b.pre),
        })
}

/// Strip a `v` prefix and pad a short core (`1`, `1.2`) to three components.
fn normalize(literal: &str) -> Result<String, VersionError> {
    let body = literal.strip_prefix(['v', 'V']).unwrap_or(literal);
    if body.is_empty() {
        return Err(VersionError::Empty);
    }

    let split = body.find(['-', '+']).unwrap_or(body.len());
    let (core, suffix) = body.split_at(split);
    let components = core.split('.').count();

    match components {
        1 => Ok(format!("{core}.0.0{suffix}")),
        2 => Ok(format!("{core}.0{suffix}")),
        3 => Ok(body.to_string()),
        n => Err(VersionError::TooManyComponents(n)),
    }
}
