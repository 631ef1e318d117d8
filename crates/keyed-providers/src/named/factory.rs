//! Name-keyed container factory

use std::sync::Arc;

use keyed_application::ports::{KeyCapability, KeyedContainerProvider};
use keyed_application::remove_keyed_services;
use keyed_application::visitor::KeyedServiceVisitor;
use keyed_domain::{Result, ServiceCollection, ServiceProvider, ServiceProviderFactory};
use tracing::info;

use super::named_reuse;
use super::visitor::NamedServiceVisitor;
use crate::constants::NAMED_CONTAINER_NAME;
use crate::container::ContainerBuilder;

/// Adapter for registries keyed by name only
#[derive(Debug, Clone, Copy, Default)]
pub struct NamedContainer;

impl NamedContainer {
    /// Create the adapter
    pub fn new() -> Self {
        Self
    }
}

impl ServiceProviderFactory for NamedContainer {
    type Builder = ContainerBuilder<String>;

    fn create_builder(&self, mut services: ServiceCollection) -> Result<Self::Builder> {
        let keyed_services = remove_keyed_services(&mut services);

        let mut builder = ContainerBuilder::new();
        for descriptor in services {
            let reuse = named_reuse(descriptor.lifetime());
            builder.register_descriptor(descriptor, None, reuse);
        }

        if !keyed_services.is_empty() {
            NamedServiceVisitor::new(&mut builder).visit(keyed_services)?;
        }

        Ok(builder)
    }

    fn create_service_provider(&self, builder: Self::Builder) -> Result<Arc<dyn ServiceProvider>> {
        info!(bindings = builder.len(), container = NAMED_CONTAINER_NAME, "Built keyed container");
        Ok(builder.build())
    }
}

impl KeyedContainerProvider for NamedContainer {
    fn build(&self, services: ServiceCollection) -> Result<Arc<dyn ServiceProvider>> {
        ServiceProviderFactory::build(self, services)
    }

    fn capability(&self) -> KeyCapability {
        KeyCapability::NameKeyed
    }

    fn provider_name(&self) -> &str {
        NAMED_CONTAINER_NAME
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use keyed_application::ports::registry::{KEYED_CONTAINERS, KeyedContainerConfig, KeyedContainerEntry};

#[linkme::distributed_slice(KEYED_CONTAINERS)]
static NAMED_CONTAINER: KeyedContainerEntry = KeyedContainerEntry {
    name: NAMED_CONTAINER_NAME,
    description: "Registry keyed by name, without scopes",
    factory: |_config: &KeyedContainerConfig| Ok(Arc::new(NamedContainer::new())),
};
