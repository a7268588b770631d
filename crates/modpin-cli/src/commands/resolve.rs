//! Handler for `modpin resolve`.

use miette::{IntoDiagnostic, Result};
use modpin_core::dependency::Dependency;
use modpin_resolver::resolver::Resolver;
use modpin_util::progress;

pub async fn exec(registry: Option<&str>, name: &str, constraint: &str, json: bool) -> Result<()> {
    let resolver = Resolver::new(super::load_registry(registry).await?);
    let dep = Dependency::new(name, constraint);

    progress::status("Resolving", &dep.to_string());
    let module = resolver.resolve(&dep)?;

    if json {
        println!("{}", serde_json::to_string(&module).into_diagnostic()?);
    } else {
        println!("{module}");
    }
    Ok(())
}
