//! Loading a registry document from the local filesystem.

use std::path::Path;

use modpin_core::registry::MemoryRegistry;
use modpin_util::errors::{ModpinError, ModpinResult};

use crate::document::RegistryDocument;

/// Read and parse a registry JSON file.
///
/// A missing or unreadable file is reported as an invalid registry, the same
/// as malformed content.
pub fn load_file(path: &Path) -> ModpinResult<MemoryRegistry> {
    let bytes = std::fs::read(path).map_err(|e| ModpinError::InvalidRegistry {
        message: format!("{}: {e}", path.display()),
    })?;
    let document = RegistryDocument::from_slice(&bytes).map_err(|e| match e {
        ModpinError::InvalidRegistry { message } => ModpinError::InvalidRegistry {
            message: format!("{}: {message}", path.display()),
        },
        other => other,
    })?;

    tracing::debug!(
        "Loaded {} registry entries from {}",
        document.entries.len(),
        path.display()
    );
    Ok(document.into_registry())
}
