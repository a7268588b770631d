//! Fetching a registry document over HTTP.
//!
//! The body is written to a temporary file and then loaded exactly like a
//! local registry; the file is removed once parsing finishes.

use std::io::Write;
use std::time::Duration;

use modpin_core::config::NetworkConfig;
use modpin_core::registry::MemoryRegistry;
use modpin_util::errors::{ModpinError, ModpinResult};
use reqwest::Client;

use crate::loader;

/// Build an HTTP client honouring the configured timeout and user agent.
pub fn build_client(network: &NetworkConfig) -> ModpinResult<Client> {
    Client::builder()
        .timeout(Duration::from_secs(network.timeout_secs))
        .user_agent(network.user_agent.as_str())
        .build()
        .map_err(|e| ModpinError::Download {
            message: format!("Failed to create HTTP client: {e}"),
        })
}

/// Download the registry document at `url`.
///
/// Transport errors and any status other than `200 OK` are download
/// failures. A body that is not a valid registry document is an invalid
/// registry.
pub async fn download_document(client: &Client, url: &str) -> ModpinResult<Vec<u8>> {
    tracing::info!("Downloading registry {}", url);

    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| ModpinError::Download {
            message: format!("Request to {url} failed: {e}"),
        })?;

    let status = resp.status();
    if status != reqwest::StatusCode::OK {
        return Err(ModpinError::Download {
            message: format!("HTTP {status} fetching {url}"),
        });
    }

    let bytes = resp.bytes().await.map_err(|e| ModpinError::Download {
        message: format!("Failed to read response from {url}: {e}"),
    })?;
    tracing::debug!("Fetched {} bytes from {}", bytes.len(), url);
    Ok(bytes.to_vec())
}

/// Download `url` into a temporary file and load it as a registry.
pub async fn fetch_registry(client: &Client, url: &str) -> ModpinResult<MemoryRegistry> {
    let body = download_document(client, url).await?;

    let mut file = tempfile::Builder::new()
        .prefix("registry")
        .suffix(".json")
        .tempfile()
        .map_err(|e| ModpinError::Download {
            message: format!("Failed to create temporary file: {e}"),
        })?;
    file.write_all(&body)
        .and_then(|()| file.flush())
        .map_err(|e| ModpinError::Download {
            message: format!("Failed to write {}: {e}", file.path().display()),
        })?;
    tracing::debug!("Saved registry to {}", file.path().display());

    loader::load_file(file.path())
}
