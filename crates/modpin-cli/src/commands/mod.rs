//! Command dispatch and handler modules.

mod resolve;
mod versions;

use miette::Result;
use modpin_core::config::{ModpinConfig, NetworkConfig, RegistrySource};
use modpin_core::registry::MemoryRegistry;
use modpin_util::errors::ModpinError;
use modpin_util::progress;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Resolve {
            registry,
            name,
            constraint,
            json,
        } => resolve::exec(registry.as_deref(), &name, &constraint, json).await,
        Command::Versions { registry, name } => versions::exec(registry.as_deref(), &name).await,
    }
}

/// Build the registry once for this invocation.
///
/// The `--registry` flag (or `MODPIN_REGISTRY`) wins over `registry` in the
/// nearest `modpin.toml`. The config file is only read when one of its values
/// is needed: no flag was given, or the flag names a URL and the `[network]`
/// settings apply.
async fn load_registry(flag: Option<&str>) -> Result<MemoryRegistry> {
    let cwd = std::env::current_dir().map_err(ModpinError::Io)?;

    let (source, network) = match flag.map(RegistrySource::parse) {
        Some(source @ RegistrySource::File(_)) => (source, NetworkConfig::default()),
        Some(source @ RegistrySource::Url(_)) => {
            (source, ModpinConfig::discover(&cwd)?.network)
        }
        None => {
            let config = ModpinConfig::discover(&cwd)?;
            let source = config.registry.ok_or_else(|| ModpinError::Config {
                message: "no registry specified; pass --registry or set `registry` in modpin.toml"
                    .to_string(),
            })?;
            (RegistrySource::parse(&source), config.network)
        }
    };

    if let RegistrySource::Url(url) = &source {
        progress::status("Downloading", url);
    }
    let registry = modpin_registry::load(&source, &network).await?;
    tracing::debug!("Registry {} has {} entries", source, registry.len());
    Ok(registry)
}
