//! Container adapter resolver
//!
//! Wraps the linkme registry so the adapter named in configuration can be
//! resolved, or overridden by name.

use std::fmt;
use std::sync::Arc;

use keyed_application::ports::{
    KeyedContainerConfig, KeyedContainerProvider, list_keyed_containers, resolve_keyed_container,
};
use keyed_domain::error::{Error, Result};

use crate::config::AppConfig;

/// Resolves container adapters from the registry
pub struct KeyedContainerResolver {
    config: Arc<AppConfig>,
}

impl KeyedContainerResolver {
    /// Create a new resolver with config
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Resolve the adapter named in the application config
    pub fn resolve_from_config(&self) -> Result<Arc<dyn KeyedContainerProvider>> {
        self.resolve_by_name(&self.config.container.provider)
    }

    /// Resolve an adapter by name, ignoring the config
    pub fn resolve_by_name(&self, name: &str) -> Result<Arc<dyn KeyedContainerProvider>> {
        resolve_keyed_container(&KeyedContainerConfig::new(name)).map_err(Error::configuration)
    }
}

impl fmt::Debug for KeyedContainerResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedContainerResolver")
            .field("provider", &self.config.container.provider)
            .finish()
    }
}

/// List all registered container adapters
pub fn list_available_containers() -> AvailableContainers {
    AvailableContainers {
        containers: list_keyed_containers(),
    }
}

/// Registered container adapters
#[derive(Debug, Clone)]
pub struct AvailableContainers {
    /// Available adapters (name, description)
    pub containers: Vec<(&'static str, &'static str)>,
}

impl fmt::Display for AvailableContainers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Available Containers:")?;
        for (name, desc) in &self.containers {
            writeln!(f, "  - {}: {}", name, desc)?;
        }
        Ok(())
    }
}
