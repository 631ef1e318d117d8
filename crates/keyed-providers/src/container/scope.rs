//! Sealed container and activation scopes

use std::collections::HashMap;
use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use dashmap::DashMap;
use keyed_domain::{Instance, Result, ServiceProvider, ServiceType};

use super::binding::{Binding, Reuse};

/// Sealed bindings shared by every scope of one container
pub struct Container<K> {
    bindings: Vec<Binding>,
    index: HashMap<(ServiceType, Option<K>), Vec<usize>>,
}

impl<K> Container<K>
where
    K: Clone + Eq + Hash + Debug + Send + Sync + 'static,
{
    pub(crate) fn new(
        bindings: Vec<Binding>,
        index: HashMap<(ServiceType, Option<K>), Vec<usize>>,
    ) -> Self {
        Self { bindings, index }
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether nothing is bound
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn slot(&self, service_type: &ServiceType, key: Option<&K>) -> &[usize] {
        self.index
            .get(&(*service_type, key.cloned()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// An activation scope; the resolving [`ServiceProvider`]
pub struct Scope<K> {
    container: Arc<Container<K>>,
    scoped: DashMap<usize, Instance>,
    root: bool,
}

impl<K> Scope<K>
where
    K: Clone + Eq + Hash + Debug + Send + Sync + 'static,
{
    pub(crate) fn root(container: Arc<Container<K>>) -> Arc<Self> {
        Arc::new(Self {
            container,
            scoped: DashMap::new(),
            root: true,
        })
    }

    /// Open a child scope sharing this scope's container
    pub fn child(&self) -> Arc<Self> {
        Arc::new(Self {
            container: self.container.clone(),
            scoped: DashMap::new(),
            root: false,
        })
    }

    /// Whether this is the container's root scope
    pub fn is_root(&self) -> bool {
        self.root
    }

    /// The sealed bindings
    pub fn container(&self) -> &Container<K> {
        &self.container
    }

    /// Resolve the last binding of `service_type` under `key`
    pub fn resolve(&self, service_type: &ServiceType, key: Option<&K>) -> Result<Option<Instance>> {
        match self.container.slot(service_type, key).last() {
            Some(&id) => self.instance(&self.container.bindings[id]).map(Some),
            None => Ok(None),
        }
    }

    /// Resolve the last binding of `service_type` under the native `key`
    pub fn resolve_keyed(&self, service_type: &ServiceType, key: &K) -> Result<Option<Instance>> {
        self.resolve(service_type, Some(key))
    }

    /// Resolve every binding of `service_type` under `key`, in binding order
    pub fn resolve_all(&self, service_type: &ServiceType, key: Option<&K>) -> Result<Vec<Instance>> {
        self.container
            .slot(service_type, key)
            .iter()
            .map(|&id| self.instance(&self.container.bindings[id]))
            .collect()
    }

    fn instance(&self, binding: &Binding) -> Result<Instance> {
        match binding.reuse {
            Reuse::Transient => binding.activate(self),
            Reuse::Singleton => binding.singleton(self),
            Reuse::Scoped => {
                if let Some(existing) = self.scoped.get(&binding.id) {
                    return Ok(existing.clone());
                }
                // activate without holding the shard lock; first insert wins
                let created = binding.activate(self)?;
                Ok(self
                    .scoped
                    .entry(binding.id)
                    .or_insert(created)
                    .clone())
            }
        }
    }
}

impl<K> ServiceProvider for Scope<K>
where
    K: Clone + Eq + Hash + Debug + Send + Sync + 'static,
{
    fn get_service(&self, service_type: &ServiceType) -> Result<Option<Instance>> {
        self.resolve(service_type, None)
    }

    fn get_services(&self, service_type: &ServiceType) -> Result<Vec<Instance>> {
        self.resolve_all(service_type, None)
    }

    fn create_scope(&self) -> Arc<dyn ServiceProvider> {
        self.child()
    }
}

impl<K> fmt::Debug for Scope<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("root", &self.root)
            .field("bindings", &self.container.bindings.len())
            .field("scoped", &self.scoped.len())
            .finish()
    }
}
