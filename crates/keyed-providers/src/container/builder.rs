//! Container builder

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use keyed_domain::{ServiceDescriptor, ServiceType};
use tracing::debug;

use super::binding::{Activation, Binding, Reuse};
use super::scope::{Container, Scope};

/// Collects bindings before the container is sealed
pub struct ContainerBuilder<K> {
    bindings: Vec<Binding>,
    index: HashMap<(ServiceType, Option<K>), Vec<usize>>,
}

impl<K> ContainerBuilder<K>
where
    K: Clone + Eq + Hash + Debug + Send + Sync + 'static,
{
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Bind `service_type` without a key
    pub fn register(&mut self, service_type: ServiceType, activation: Activation, reuse: Reuse) -> &mut Self {
        self.insert(service_type, None, activation, reuse)
    }

    /// Bind `service_type` under the native `key`
    pub fn register_keyed(
        &mut self,
        service_type: ServiceType,
        key: K,
        activation: Activation,
        reuse: Reuse,
    ) -> &mut Self {
        self.insert(service_type, Some(key), activation, reuse)
    }

    /// Bind a registration entry, optionally under a native key
    pub fn register_descriptor(
        &mut self,
        descriptor: ServiceDescriptor,
        key: Option<K>,
        reuse: Reuse,
    ) -> &mut Self {
        let (service_type, implementation, _) = descriptor.into_parts();
        self.insert(service_type, key, implementation.into(), reuse)
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether nothing is bound
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Whether anything is bound to `service_type` under `key`
    pub fn contains(&self, service_type: &ServiceType, key: Option<&K>) -> bool {
        self.index.contains_key(&(*service_type, key.cloned()))
    }

    /// Seal the bindings and open the root scope
    pub fn build(self) -> Arc<Scope<K>> {
        debug!(
            bindings = self.bindings.len(),
            slots = self.index.len(),
            "Building container"
        );
        Scope::root(Arc::new(Container::new(self.bindings, self.index)))
    }

    fn insert(
        &mut self,
        service_type: ServiceType,
        key: Option<K>,
        activation: Activation,
        reuse: Reuse,
    ) -> &mut Self {
        let id = self.bindings.len();
        self.bindings
            .push(Binding::new(id, service_type, activation, reuse));
        self.index.entry((service_type, key)).or_default().push(id);
        self
    }
}

impl<K> Default for ContainerBuilder<K>
where
    K: Clone + Eq + Hash + Debug + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
