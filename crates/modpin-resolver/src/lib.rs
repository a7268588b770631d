//! Dependency resolution engine: SemVer ordering of registry versions,
//! constraint parsing and matching, and highest-satisfying-version selection.

pub mod constraint;
pub mod resolver;
pub mod version;
