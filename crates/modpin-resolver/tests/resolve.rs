use std::sync::Arc;
use std::thread;

use modpin_core::dependency::Dependency;
use modpin_core::registry::{MemoryRegistry, RegistryEntry};
use modpin_resolver::resolver::Resolver;
use modpin_util::errors::ModpinError;

fn registry() -> MemoryRegistry {
    MemoryRegistry::new()
        .with_entry(
            "k6/x/output-kafka",
            RegistryEntry::new(
                "github.com/grafana/xk6-output-kafka",
                ["v0.7.0", "v0.8.0", "v0.8.1-rc.1", "v0.1.0"],
            ),
        )
        .with_entry(
            "k6/x/empty",
            RegistryEntry::new("github.com/grafana/xk6-empty", Vec::<String>::new()),
        )
        .with_entry(
            "k6/x/corrupt",
            RegistryEntry::new("github.com/grafana/xk6-corrupt", ["v1.0.0", "latest"]),
        )
        .with_entry(
            "k6/x/spellings",
            RegistryEntry::new(
                "github.com/grafana/xk6-spellings",
                ["1.0.0+first", "v1.0.0", "1.0.0+third", "v0.9.0"],
            ),
        )
        .with_entry(
            "k6/x/prerelease-only",
            RegistryEntry::new(
                "github.com/grafana/xk6-pre",
                ["v1.0.0-alpha", "v1.0.0-beta.2", "v1.0.0-beta.11"],
            ),
        )
}

fn resolve(name: &str, constraint: &str) -> Result<String, ModpinError> {
    Resolver::new(registry())
        .resolve(&Dependency::new(name, constraint))
        .map(|m| m.version)
}

#[test]
fn wildcard_includes_prereleases() {
    assert_eq!(resolve("k6/x/output-kafka", "*").unwrap(), "v0.8.1-rc.1");
}

#[test]
fn bounded_range_excludes_prerelease() {
    assert_eq!(
        resolve("k6/x/output-kafka", ">v0.7.0, <v1.0.0").unwrap(),
        "v0.8.0"
    );
}

#[test]
fn prerelease_only_entry_with_wildcard() {
    assert_eq!(
        resolve("k6/x/prerelease-only", "*").unwrap(),
        "v1.0.0-beta.11"
    );
}

#[test]
fn module_path_comes_from_entry() {
    let module = Resolver::new(registry())
        .resolve(&Dependency::new("k6/x/output-kafka", ">v0.7.0"))
        .unwrap();
    assert_eq!(module.path, "github.com/grafana/xk6-output-kafka");
    assert_eq!(module.to_string(), "github.com/grafana/xk6-output-kafka v0.8.0");
}

#[test]
fn empty_entry_cannot_satisfy_any_constraint() {
    for constraint in ["*", "v1.0.0", ">=0.0.0", "^1"] {
        let err = resolve("k6/x/empty", constraint).unwrap_err();
        assert!(
            matches!(err, ModpinError::CannotSatisfy { .. }),
            "{constraint}: got {err:?}"
        );
    }
}

#[test]
fn empty_entry_still_reports_invalid_constraint() {
    let err = resolve("k6/x/empty", "not-a-range").unwrap_err();
    assert!(
        matches!(err, ModpinError::InvalidConstraint { .. }),
        "got: {err:?}"
    );
}

#[test]
fn malformed_constraints_never_report_cannot_satisfy() {
    for constraint in [
        "not-a-range",
        "",
        ">=",
        "1.2.3.4",
        "~>1.0",
        "1 - ",
        ">1 ||",
        "1.2.3-",
        "1.0.0+",
        "1.0.0+!!!",
        ">=1.0.0+a+b",
        "1.0.0-rc+",
    ] {
        let err = resolve("k6/x/output-kafka", constraint).unwrap_err();
        assert!(
            matches!(err, ModpinError::InvalidConstraint { .. }),
            "{constraint:?}: got {err:?}"
        );
    }
}

#[test]
fn unknown_name_wins_over_invalid_constraint() {
    let err = resolve("missing", "not-a-range").unwrap_err();
    assert!(
        matches!(err, ModpinError::UnknownDependency { ref name } if name == "missing"),
        "got: {err:?}"
    );
}

#[test]
fn corrupt_version_is_fatal_even_when_a_valid_one_matches() {
    let err = resolve("k6/x/corrupt", "v1.0.0").unwrap_err();
    assert!(
        matches!(err, ModpinError::InvalidVersion { ref version, .. } if version == "latest"),
        "got: {err:?}"
    );
}

#[test]
fn equal_precedence_keeps_registry_order() {
    assert_eq!(resolve("k6/x/spellings", "*").unwrap(), "1.0.0+first");
    assert_eq!(resolve("k6/x/spellings", "<1.0.0").unwrap(), "v0.9.0");
}

#[test]
fn result_is_always_a_listed_literal() {
    let reg = registry();
    let resolver = Resolver::new(&reg);
    for constraint in ["*", ">=0.1", "~0.8", "^0.7.0", "0.1"] {
        let module = resolver
            .resolve(&Dependency::new("k6/x/output-kafka", constraint))
            .unwrap();
        let listed = &reg.entries()["k6/x/output-kafka"].versions;
        assert!(listed.contains(&module.version), "{constraint}: {module}");
    }
}

#[test]
fn resolve_all_stops_at_first_failure() {
    let resolver = Resolver::new(registry());
    let deps = [
        Dependency::any("k6/x/output-kafka"),
        Dependency::any("missing"),
        Dependency::any("k6/x/spellings"),
    ];
    assert!(matches!(
        resolver.resolve_all(&deps).unwrap_err(),
        ModpinError::UnknownDependency { .. }
    ));

    let modules = resolver.resolve_all(&[deps[0].clone(), deps[2].clone()]).unwrap();
    assert_eq!(modules.len(), 2);
    assert_eq!(modules[1].version, "1.0.0+first");
}

#[test]
fn shared_resolver_across_threads() {
    let resolver = Arc::new(Resolver::new(registry()));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || {
                resolver
                    .resolve(&Dependency::new("k6/x/output-kafka", "<0.8.0"))
                    .unwrap()
                    .version
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "v0.7.0");
    }
}
