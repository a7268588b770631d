use modpin_core::dependency::{Dependency, ANY_VERSION};
use modpin_core::module::Module;
use modpin_core::registry::RegistryEntry;

#[test]
fn dependency_any_uses_wildcard() {
    let dep = Dependency::any("k6/x/kubernetes");
    assert_eq!(dep.constraint, ANY_VERSION);
}

#[test]
fn dependency_display() {
    let dep = Dependency::new("k6/x/output-kafka", ">v0.9.0");
    assert_eq!(dep.to_string(), "k6/x/output-kafka >v0.9.0");
}

#[test]
fn dependency_constraint_defaults_when_absent() {
    let dep: Dependency = serde_json::from_str(r#"{"name": "dep"}"#).unwrap();
    assert_eq!(dep.constraint, "*");
}

#[test]
fn module_display_is_path_then_version() {
    let module = Module {
        path: "github.com/grafana/xk6-output-kafka".to_string(),
        version: "v0.8.0".to_string(),
    };
    assert_eq!(module.to_string(), "github.com/grafana/xk6-output-kafka v0.8.0");
}

#[test]
fn registry_entry_versions_default_to_empty() {
    let entry: RegistryEntry = serde_json::from_str(r#"{"module": "github.com/dep"}"#).unwrap();
    assert_eq!(entry.module, "github.com/dep");
    assert!(entry.versions.is_empty());
}

#[test]
fn registry_entry_field_names_are_case_sensitive() {
    let result: Result<RegistryEntry, _> =
        serde_json::from_str(r#"{"Module": "github.com/dep", "Versions": ["v1.0.0"]}"#);
    assert!(result.is_err());
}
