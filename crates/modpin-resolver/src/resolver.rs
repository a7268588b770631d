//! Constraint resolution: pick the highest registry version that satisfies a
//! dependency's constraint.

use modpin_core::dependency::Dependency;
use modpin_core::module::Module;
use modpin_core::registry::{Registry, RegistryEntry};
use modpin_util::errors::{ModpinError, ModpinResult};

use crate::constraint::Constraint;
use crate::version::RegistryVersion;

/// Resolves dependencies against an injected registry.
///
/// Holds no state besides the registry, so a shared `Resolver` can serve
/// concurrent callers whenever the registry can.
#[derive(Debug, Clone)]
pub struct Resolver<R> {
    registry: R,
}

impl<R: Registry> Resolver<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Return the module whose version is the highest one satisfying
    /// `dep.constraint`.
    ///
    /// Fails with [`ModpinError::UnknownDependency`] when the registry has no
    /// entry, [`ModpinError::InvalidConstraint`] when the expression does not
    /// parse, [`ModpinError::InvalidVersion`] when the entry lists a
    /// non-SemVer literal and [`ModpinError::CannotSatisfy`] when nothing
    /// matches.
    pub fn resolve(&self, dep: &Dependency) -> ModpinResult<Module> {
        let entry = self.registry.get_versions(&dep.name)?;

        let constraint =
            Constraint::parse(&dep.constraint).map_err(|e| ModpinError::InvalidConstraint {
                constraint: dep.constraint.clone(),
                reason: e.to_string(),
            })?;

        let versions = sorted_versions(&dep.name, entry)?;
        tracing::debug!(
            "Resolving {} {} against {} candidate(s)",
            dep.name,
            constraint,
            versions.len()
        );

        match versions
            .into_iter()
            .find(|candidate| constraint.matches(candidate.version()))
        {
            Some(found) => {
                tracing::debug!("Resolved {} {} -> {}", dep.name, constraint, found);
                Ok(Module {
                    path: entry.module.clone(),
                    version: found.original,
                })
            }
            None => Err(ModpinError::CannotSatisfy {
                name: dep.name.clone(),
                constraint: dep.constraint.clone(),
            }),
        }
    }

    /// Resolve each dependency in order, stopping at the first failure.
    pub fn resolve_all<'a>(
        &self,
        deps: impl IntoIterator<Item = &'a Dependency>,
    ) -> ModpinResult<Vec<Module>> {
        deps.into_iter().map(|dep| self.resolve(dep)).collect()
    }

    /// The versions listed for `name`, highest precedence first.
    pub fn versions(&self, name: &str) -> ModpinResult<Vec<RegistryVersion>> {
        let entry = self.registry.get_versions(name)?;
        sorted_versions(name, entry)
    }
}

/// Parse every literal of `entry` and sort descending.
///
/// A single unparseable literal fails the whole entry. The sort is stable,
/// so literals of equal precedence keep their registry order.
fn sorted_versions(name: &str, entry: &RegistryEntry) -> ModpinResult<Vec<RegistryVersion>> {
    let mut versions = entry
        .versions
        .iter()
        .map(|literal| {
            RegistryVersion::parse(literal).map_err(|e| ModpinError::InvalidVersion {
                name: name.to_string(),
                version: literal.clone(),
                reason: e.to_string(),
            })
        })
        .collect::<ModpinResult<Vec<_>>>()?;
    versions.sort_by(|a, b| b.cmp(a));
    Ok(versions)
}
