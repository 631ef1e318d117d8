//! Container Registry
//!
//! Auto-registration system for container adapters.
//! Adapters register themselves via `#[linkme::distributed_slice(KEYED_CONTAINERS)]`
//! and are discovered at runtime by name.
//!
//! ```text
//! keyed-providers:        #[linkme::distributed_slice(KEYED_CONTAINERS)]
//!                         static ENTRY: KeyedContainerEntry = ...
//!                               ↓
//! keyed-infrastructure:   resolve_keyed_container(&config)
//!                               ↓
//! config:                 "container.provider = named" → NamedContainer
//! ```

use std::sync::Arc;

use super::container::KeyedContainerProvider;

/// Configuration for container adapter creation
#[derive(Debug, Clone, Default)]
pub struct KeyedContainerConfig {
    /// Adapter name (e.g., "default", "type-keyed", "named")
    pub provider: String,
}

impl KeyedContainerConfig {
    /// Create a new config with the given adapter name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
        }
    }
}

/// Registry entry for container adapters
pub struct KeyedContainerEntry {
    /// Unique adapter name (e.g., "default", "type-keyed", "named")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the adapter
    pub factory: fn(&KeyedContainerConfig) -> Result<Arc<dyn KeyedContainerProvider>, String>,
}

// Auto-collection via linkme distributed slices - adapters submit entries at compile time
#[linkme::distributed_slice]
pub static KEYED_CONTAINERS: [KeyedContainerEntry] = [..];

/// Resolve a container adapter by name from the registry
///
/// # Returns
/// * `Ok(Arc<dyn KeyedContainerProvider>)` - Created adapter
/// * `Err(String)` - Error message if the adapter is unknown or creation failed
pub fn resolve_keyed_container(
    config: &KeyedContainerConfig,
) -> Result<Arc<dyn KeyedContainerProvider>, String> {
    let provider_name = &config.provider;

    for entry in KEYED_CONTAINERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = KEYED_CONTAINERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown container provider '{}'. Available providers: {:?}",
        provider_name, available
    ))
}

/// List all registered container adapters as `(name, description)`
pub fn list_keyed_containers() -> Vec<(&'static str, &'static str)> {
    KEYED_CONTAINERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
