//! Keyed registration methods
//!
//! Every keyed registration adds two entries: the target, addressed by the
//! composite identity `(K, S)`, and a transient indirection binding through
//! which ordinary lookup reaches it.

use std::sync::Arc;

use keyed_domain::{
    Component, Implementation, Lifetime, Result, ServiceCollection, ServiceDescriptor,
    ServiceProvider, ServiceType, erase_factory, into_instance,
};

use crate::accessor::{Keyed, KeyedImpl};

/// Keyed registration methods for [`ServiceCollection`]
pub trait KeyedServiceCollectionExt {
    /// Register `I` as the `S` keyed by `K` with `lifetime`
    fn add_keyed<K, S, I>(&mut self, lifetime: Lifetime) -> &mut Self
    where
        K: ?Sized + 'static,
        S: ?Sized + Send + Sync + 'static,
        I: Component<S>;

    /// Register a singleton `I` as the `S` keyed by `K`
    fn add_keyed_singleton<K, S, I>(&mut self) -> &mut Self
    where
        K: ?Sized + 'static,
        S: ?Sized + Send + Sync + 'static,
        I: Component<S>,
    {
        self.add_keyed::<K, S, I>(Lifetime::Singleton)
    }

    /// Register a scoped `I` as the `S` keyed by `K`
    fn add_keyed_scoped<K, S, I>(&mut self) -> &mut Self
    where
        K: ?Sized + 'static,
        S: ?Sized + Send + Sync + 'static,
        I: Component<S>,
    {
        self.add_keyed::<K, S, I>(Lifetime::Scoped)
    }

    /// Register a transient `I` as the `S` keyed by `K`
    fn add_keyed_transient<K, S, I>(&mut self) -> &mut Self
    where
        K: ?Sized + 'static,
        S: ?Sized + Send + Sync + 'static,
        I: Component<S>,
    {
        self.add_keyed::<K, S, I>(Lifetime::Transient)
    }

    /// Register an existing value as the `S` keyed by `K`
    fn add_keyed_instance<K, S>(&mut self, instance: Arc<S>) -> &mut Self
    where
        K: ?Sized + 'static,
        S: ?Sized + Send + Sync + 'static;

    /// Register a factory producing the `S` keyed by `K`
    fn add_keyed_factory<K, S, F>(&mut self, lifetime: Lifetime, factory: F) -> &mut Self
    where
        K: ?Sized + 'static,
        S: ?Sized + Send + Sync + 'static,
        F: Fn(&dyn ServiceProvider) -> Result<Arc<S>> + Send + Sync + 'static;

    /// Register `I` as the `S` keyed by `K` unless `(K, S)` is registered
    fn try_add_keyed<K, S, I>(&mut self, lifetime: Lifetime) -> &mut Self
    where
        K: ?Sized + 'static,
        S: ?Sized + Send + Sync + 'static,
        I: Component<S>;

    /// Register a factory for the `S` keyed by `K` unless `(K, S)` is registered
    fn try_add_keyed_factory<K, S, F>(&mut self, lifetime: Lifetime, factory: F) -> &mut Self
    where
        K: ?Sized + 'static,
        S: ?Sized + Send + Sync + 'static,
        F: Fn(&dyn ServiceProvider) -> Result<Arc<S>> + Send + Sync + 'static;

    /// Add `I` to the services resolved together as the `S` keyed by `K`
    ///
    /// The target is addressed by `(K, I)`, so each implementation is
    /// registered at most once per key and keeps its registration order.
    fn try_add_keyed_enumerable<K, S, I>(&mut self, lifetime: Lifetime) -> &mut Self
    where
        K: ?Sized + 'static,
        S: ?Sized + Send + Sync + 'static,
        I: Component<S>;
}

impl KeyedServiceCollectionExt for ServiceCollection {
    fn add_keyed<K, S, I>(&mut self, lifetime: Lifetime) -> &mut Self
    where
        K: ?Sized + 'static,
        S: ?Sized + Send + Sync + 'static,
        I: Component<S>,
    {
        self.add(ServiceDescriptor::new(
            ServiceType::keyed::<K, S>(),
            Implementation::of::<S, I>(),
            lifetime,
        ))
        .try_add_enumerable(Keyed::<K, S>::descriptor(Lifetime::Transient))
    }

    fn add_keyed_instance<K, S>(&mut self, instance: Arc<S>) -> &mut Self
    where
        K: ?Sized + 'static,
        S: ?Sized + Send + Sync + 'static,
    {
        self.add(ServiceDescriptor::with_instance(
            ServiceType::keyed::<K, S>(),
            into_instance(instance),
        ))
        .try_add_enumerable(Keyed::<K, S>::descriptor(Lifetime::Transient))
    }

    fn add_keyed_factory<K, S, F>(&mut self, lifetime: Lifetime, factory: F) -> &mut Self
    where
        K: ?Sized + 'static,
        S: ?Sized + Send + Sync + 'static,
        F: Fn(&dyn ServiceProvider) -> Result<Arc<S>> + Send + Sync + 'static,
    {
        self.add(ServiceDescriptor::with_factory(
            ServiceType::keyed::<K, S>(),
            erase_factory(factory),
            lifetime,
        ))
        .try_add_enumerable(Keyed::<K, S>::descriptor(Lifetime::Transient))
    }

    fn try_add_keyed<K, S, I>(&mut self, lifetime: Lifetime) -> &mut Self
    where
        K: ?Sized + 'static,
        S: ?Sized + Send + Sync + 'static,
        I: Component<S>,
    {
        // scoped targets keep a scoped holder
        let holder = match lifetime {
            Lifetime::Scoped => Lifetime::Scoped,
            _ => Lifetime::Transient,
        };

        self.try_add(ServiceDescriptor::new(
            ServiceType::keyed::<K, S>(),
            Implementation::of::<S, I>(),
            lifetime,
        ))
        .try_add(Keyed::<K, S>::descriptor(holder))
    }

    fn try_add_keyed_factory<K, S, F>(&mut self, lifetime: Lifetime, factory: F) -> &mut Self
    where
        K: ?Sized + 'static,
        S: ?Sized + Send + Sync + 'static,
        F: Fn(&dyn ServiceProvider) -> Result<Arc<S>> + Send + Sync + 'static,
    {
        self.try_add(ServiceDescriptor::with_factory(
            ServiceType::keyed::<K, S>(),
            erase_factory(factory),
            lifetime,
        ))
        .try_add(Keyed::<K, S>::descriptor(Lifetime::Transient))
    }

    fn try_add_keyed_enumerable<K, S, I>(&mut self, lifetime: Lifetime) -> &mut Self
    where
        K: ?Sized + 'static,
        S: ?Sized + Send + Sync + 'static,
        I: Component<S>,
    {
        self.try_add(ServiceDescriptor::new(
            ServiceType::keyed::<K, I>(),
            Implementation::of::<S, I>(),
            lifetime,
        ))
        .try_add_enumerable(KeyedImpl::<K, S, I>::descriptor(Lifetime::Transient))
    }
}
