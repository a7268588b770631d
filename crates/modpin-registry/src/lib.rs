//! Registry sources: the JSON document shape, loading it from disk, and
//! fetching it over HTTP.

pub mod document;
pub mod download;
pub mod loader;

use modpin_core::config::{NetworkConfig, RegistrySource};
use modpin_core::registry::MemoryRegistry;
use modpin_util::errors::ModpinResult;

/// Build a registry from a local file or a remote URL.
pub async fn load(
    source: &RegistrySource,
    network: &NetworkConfig,
) -> ModpinResult<MemoryRegistry> {
    match source {
        RegistrySource::File(path) => loader::load_file(path),
        RegistrySource::Url(url) => {
            let client = download::build_client(network)?;
            download::fetch_registry(&client, url).await
        }
    }
}
