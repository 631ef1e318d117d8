//! Flat, container-agnostic registration list

use std::sync::Arc;

use crate::descriptor::{
    Component, Factory, Implementation, Lifetime, ServiceDescriptor, into_instance,
};
use crate::error::Result;
use crate::identity::ServiceType;
use crate::ports::ServiceProvider;

/// Ordered sequence of registrations handed to a container at build time
#[derive(Clone, Debug, Default)]
pub struct ServiceCollection {
    descriptors: Vec<ServiceDescriptor>,
}

impl ServiceCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a registration
    pub fn add(&mut self, descriptor: ServiceDescriptor) -> &mut Self {
        self.descriptors.push(descriptor);
        self
    }

    /// Append a registration unless its service type is already registered
    pub fn try_add(&mut self, descriptor: ServiceDescriptor) -> &mut Self {
        if !self.contains(descriptor.service_type()) {
            self.descriptors.push(descriptor);
        }
        self
    }

    /// Append a registration unless the same service type is already
    /// registered with the same implementation type
    ///
    /// Used for multi-registrations resolved together; descriptors without
    /// an implementation type are always appended.
    pub fn try_add_enumerable(&mut self, descriptor: ServiceDescriptor) -> &mut Self {
        let identity = descriptor.implementation_identity();
        let duplicate = identity.is_some()
            && self.descriptors.iter().any(|existing| {
                existing.service_type() == descriptor.service_type()
                    && existing.implementation_identity() == identity
            });

        if !duplicate {
            self.descriptors.push(descriptor);
        }
        self
    }

    /// Whether any registration is addressed by `service_type`
    pub fn contains(&self, service_type: &ServiceType) -> bool {
        self.descriptors
            .iter()
            .any(|descriptor| descriptor.service_type() == service_type)
    }

    /// Number of registrations
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Registration at `index`
    pub fn get(&self, index: usize) -> Option<&ServiceDescriptor> {
        self.descriptors.get(index)
    }

    /// Iterate registrations in order
    pub fn iter(&self) -> std::slice::Iter<'_, ServiceDescriptor> {
        self.descriptors.iter()
    }

    /// Remove every registration, returning them in order
    pub fn drain(&mut self) -> std::vec::Drain<'_, ServiceDescriptor> {
        self.descriptors.drain(..)
    }
}

// Typed helpers for unkeyed registrations
impl ServiceCollection {
    /// Register `I` as a singleton `S`
    pub fn add_singleton<S, I>(&mut self) -> &mut Self
    where
        S: ?Sized + Send + Sync + 'static,
        I: Component<S>,
    {
        self.add_type::<S, I>(Lifetime::Singleton)
    }

    /// Register `I` as a scoped `S`
    pub fn add_scoped<S, I>(&mut self) -> &mut Self
    where
        S: ?Sized + Send + Sync + 'static,
        I: Component<S>,
    {
        self.add_type::<S, I>(Lifetime::Scoped)
    }

    /// Register `I` as a transient `S`
    pub fn add_transient<S, I>(&mut self) -> &mut Self
    where
        S: ?Sized + Send + Sync + 'static,
        I: Component<S>,
    {
        self.add_type::<S, I>(Lifetime::Transient)
    }

    /// Register `I` as `S` with `lifetime`
    pub fn add_type<S, I>(&mut self, lifetime: Lifetime) -> &mut Self
    where
        S: ?Sized + Send + Sync + 'static,
        I: Component<S>,
    {
        self.add(ServiceDescriptor::new(
            ServiceType::of::<S>(),
            Implementation::of::<S, I>(),
            lifetime,
        ))
    }

    /// Register an existing value as `S`
    pub fn add_instance<S>(&mut self, instance: Arc<S>) -> &mut Self
    where
        S: ?Sized + Send + Sync + 'static,
    {
        self.add(ServiceDescriptor::with_instance(
            ServiceType::of::<S>(),
            into_instance(instance),
        ))
    }

    /// Register a factory producing `S` with `lifetime`
    pub fn add_factory<S, F>(&mut self, lifetime: Lifetime, factory: F) -> &mut Self
    where
        S: ?Sized + Send + Sync + 'static,
        F: Fn(&dyn ServiceProvider) -> Result<Arc<S>> + Send + Sync + 'static,
    {
        self.add(ServiceDescriptor::with_factory(
            ServiceType::of::<S>(),
            erase_factory(factory),
            lifetime,
        ))
    }
}

/// Erase a typed factory into a [`Factory`]
pub fn erase_factory<S, F>(factory: F) -> Factory
where
    S: ?Sized + Send + Sync + 'static,
    F: Fn(&dyn ServiceProvider) -> Result<Arc<S>> + Send + Sync + 'static,
{
    Arc::new(move |provider: &dyn ServiceProvider| factory(provider).map(into_instance))
}

impl IntoIterator for ServiceCollection {
    type Item = ServiceDescriptor;
    type IntoIter = std::vec::IntoIter<ServiceDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ServiceCollection {
    type Item = &'a ServiceDescriptor;
    type IntoIter = std::slice::Iter<'a, ServiceDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}

impl FromIterator<ServiceDescriptor> for ServiceCollection {
    fn from_iter<T: IntoIterator<Item = ServiceDescriptor>>(iter: T) -> Self {
        Self {
            descriptors: iter.into_iter().collect(),
        }
    }
}

impl Extend<ServiceDescriptor> for ServiceCollection {
    fn extend<T: IntoIterator<Item = ServiceDescriptor>>(&mut self, iter: T) {
        self.descriptors.extend(iter);
    }
}
