//! The on-disk / wire shape of a registry.
//!
//! ```json
//! {
//!   "k6/x/output-kafka": {
//!     "module": "github.com/grafana/xk6-output-kafka",
//!     "versions": ["v0.7.0", "v0.8.0"]
//!   }
//! }
//! ```
//!
//! Field names are case-sensitive, a missing `versions` reads as an empty
//! list and unknown fields are ignored.

use std::collections::BTreeMap;

use modpin_core::registry::{MemoryRegistry, RegistryEntry};
use modpin_util::errors::{ModpinError, ModpinResult};
use serde::{Deserialize, Serialize};

/// A registry document: dependency name to entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistryDocument {
    pub entries: BTreeMap<String, RegistryEntry>,
}

impl RegistryDocument {
    pub fn from_slice(bytes: &[u8]) -> ModpinResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| ModpinError::InvalidRegistry {
            message: e.to_string(),
        })
    }

    pub fn parse(text: &str) -> ModpinResult<Self> {
        Self::from_slice(text.as_bytes())
    }

    /// Serialize the document to pretty-printed JSON.
    pub fn to_string_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn into_registry(self) -> MemoryRegistry {
        MemoryRegistry::from(self.entries)
    }
}

impl From<MemoryRegistry> for RegistryDocument {
    fn from(registry: MemoryRegistry) -> Self {
        Self {
            entries: registry.into_entries(),
        }
    }
}
