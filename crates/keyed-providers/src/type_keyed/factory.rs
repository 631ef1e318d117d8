//! Type-keyed container factory

use std::sync::Arc;

use keyed_application::ports::{KeyCapability, KeyedContainerProvider};
use keyed_application::remove_keyed_services;
use keyed_application::visitor::KeyedServiceVisitor;
use keyed_domain::{KeyedType, Result, ServiceCollection, ServiceProvider, ServiceProviderFactory};
use tracing::info;

use super::visitor::TypeKeyedServiceVisitor;
use crate::constants::TYPE_KEYED_CONTAINER_NAME;
use crate::container::{ContainerBuilder, Reuse};

/// Adapter for registries keyed by arbitrary identities
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeKeyedContainer;

impl TypeKeyedContainer {
    /// Create the adapter
    pub fn new() -> Self {
        Self
    }
}

impl ServiceProviderFactory for TypeKeyedContainer {
    type Builder = ContainerBuilder<KeyedType>;

    fn create_builder(&self, mut services: ServiceCollection) -> Result<Self::Builder> {
        let keyed_services = remove_keyed_services(&mut services);

        let mut builder = ContainerBuilder::new();
        for descriptor in services {
            let reuse = Reuse::from_lifetime(descriptor.lifetime());
            builder.register_descriptor(descriptor, None, reuse);
        }

        if !keyed_services.is_empty() {
            TypeKeyedServiceVisitor::new(&mut builder).visit(keyed_services)?;
        }

        Ok(builder)
    }

    fn create_service_provider(&self, builder: Self::Builder) -> Result<Arc<dyn ServiceProvider>> {
        info!(bindings = builder.len(), container = TYPE_KEYED_CONTAINER_NAME, "Built keyed container");
        Ok(builder.build())
    }
}

impl KeyedContainerProvider for TypeKeyedContainer {
    fn build(&self, services: ServiceCollection) -> Result<Arc<dyn ServiceProvider>> {
        ServiceProviderFactory::build(self, services)
    }

    fn capability(&self) -> KeyCapability {
        KeyCapability::TypeKeyed
    }

    fn provider_name(&self) -> &str {
        TYPE_KEYED_CONTAINER_NAME
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use keyed_application::ports::registry::{KEYED_CONTAINERS, KeyedContainerConfig, KeyedContainerEntry};

#[linkme::distributed_slice(KEYED_CONTAINERS)]
static TYPE_KEYED_CONTAINER: KeyedContainerEntry = KeyedContainerEntry {
    name: TYPE_KEYED_CONTAINER_NAME,
    description: "Registry keyed by composite identity",
    factory: |_config: &KeyedContainerConfig| Ok(Arc::new(TypeKeyedContainer::new())),
};
