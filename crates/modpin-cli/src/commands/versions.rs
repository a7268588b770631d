//! Handler for `modpin versions`.

use miette::Result;
use modpin_resolver::resolver::Resolver;
use modpin_util::progress;

pub async fn exec(registry: Option<&str>, name: &str) -> Result<()> {
    let resolver = Resolver::new(super::load_registry(registry).await?);
    let versions = resolver.versions(name)?;

    if versions.is_empty() {
        progress::status_info("Empty", &format!("{name} lists no versions"));
        return Ok(());
    }
    for version in versions {
        println!("{version}");
    }
    Ok(())
}
