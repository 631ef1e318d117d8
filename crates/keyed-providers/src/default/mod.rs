//! Unkeyed adapter
//!
//! Hosts keyed registrations in a registry with no keying primitive. The
//! composite identity `(K, S)` is an ordinary service type, so no
//! extraction or remapping happens: indirection holders resolve their
//! target with a plain lookup.
//!
//! ```text
//! Keyed(Thingy, IThing)        ──► binding, key None
//! Indirection(Thingy, IThing)  ──► binding, key None ──► get_service(Keyed(..))
//! ```

use std::convert::Infallible;
use std::sync::Arc;

use keyed_application::ports::{KeyCapability, KeyedContainerProvider};
use keyed_domain::{Result, ServiceCollection, ServiceProvider, ServiceProviderFactory};
use tracing::info;

use crate::constants::DEFAULT_CONTAINER_NAME;
use crate::container::{ContainerBuilder, Reuse};

/// Adapter for registries without native keying
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultContainer;

impl DefaultContainer {
    /// Create the adapter
    pub fn new() -> Self {
        Self
    }
}

impl ServiceProviderFactory for DefaultContainer {
    type Builder = ContainerBuilder<Infallible>;

    fn create_builder(&self, services: ServiceCollection) -> Result<Self::Builder> {
        let mut builder = ContainerBuilder::new();
        for descriptor in services {
            let reuse = Reuse::from_lifetime(descriptor.lifetime());
            builder.register_descriptor(descriptor, None, reuse);
        }
        Ok(builder)
    }

    fn create_service_provider(&self, builder: Self::Builder) -> Result<Arc<dyn ServiceProvider>> {
        info!(bindings = builder.len(), container = DEFAULT_CONTAINER_NAME, "Built keyed container");
        Ok(builder.build())
    }
}

impl KeyedContainerProvider for DefaultContainer {
    fn build(&self, services: ServiceCollection) -> Result<Arc<dyn ServiceProvider>> {
        ServiceProviderFactory::build(self, services)
    }

    fn capability(&self) -> KeyCapability {
        KeyCapability::Unkeyed
    }

    fn provider_name(&self) -> &str {
        DEFAULT_CONTAINER_NAME
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use keyed_application::ports::registry::{KEYED_CONTAINERS, KeyedContainerConfig, KeyedContainerEntry};

#[linkme::distributed_slice(KEYED_CONTAINERS)]
static DEFAULT_CONTAINER: KeyedContainerEntry = KeyedContainerEntry {
    name: DEFAULT_CONTAINER_NAME,
    description: "Unkeyed registry; composite identities are ordinary service types",
    factory: |_config: &KeyedContainerConfig| Ok(Arc::new(DefaultContainer::new())),
};
