//! Indirection accessors
//!
//! An indirection holder is resolved by ordinary type lookup and performs
//! the keyed lookup while it is being constructed:
//!
//! ```text
//! get_service(Indirection(Thingy, IThing))
//!        │
//!        ▼  holder activator
//! keyed lookup of (Thingy, IThing)  ──►  Keyed<Thingy, dyn IThing> { value }
//! ```
//!
//! Containers store holders as `Arc<dyn AnyKeyed>` so untyped callers can
//! read the value without knowing `K` and `S` statically.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use keyed_domain::{
    Arity, Error, Implementation, IndirectionShape, Instance, KeyedType, Lifetime, Result,
    ServiceDescriptor, ServiceProvider, ServiceType, TypeIdentity, TypeInfo, downcast_instance,
    into_instance,
};

use crate::extensions::KeyedServiceProviderExt;

/// Read-only capability shared by every indirection holder
pub trait AnyKeyed: Send + Sync {
    /// The key type
    fn key(&self) -> TypeIdentity;

    /// The service type the value is exposed as
    fn service(&self) -> TypeIdentity;

    /// The resolved value, erased
    fn value(&self) -> Instance;
}

impl fmt::Debug for dyn AnyKeyed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyKeyed")
            .field("key", &self.key())
            .field("service", &self.service())
            .finish_non_exhaustive()
    }
}

/// Erase a holder into the payload containers store for an indirection binding
pub fn into_holder<H: AnyKeyed + 'static>(holder: H) -> Instance {
    into_instance::<dyn AnyKeyed>(Arc::new(holder))
}

/// Recover the holder stored for an indirection binding
pub fn downcast_holder(instance: &Instance) -> Result<Arc<dyn AnyKeyed>> {
    downcast_instance::<dyn AnyKeyed>(instance)
}

/// Failure raised when the keyed target of a holder is not registered
pub fn no_such_keyed_service(target: &KeyedType) -> Error {
    Error::no_such_service(target.wrapped().name(), target.key().name())
}

fn wrap_with<S, H>(hold: fn(Arc<S>) -> H) -> keyed_domain::Wrap
where
    S: ?Sized + Send + Sync + 'static,
    H: AnyKeyed + 'static,
{
    Arc::new(move |value: Instance| -> Result<Instance> {
        Ok(into_holder(hold(downcast_instance::<S>(&value)?)))
    })
}

/// Holder of the `S` registered under the key `K`
pub struct Keyed<K: ?Sized, S: ?Sized> {
    value: Arc<S>,
    key: PhantomData<fn() -> *const K>,
}

impl<K, S> Keyed<K, S>
where
    K: ?Sized + 'static,
    S: ?Sized + Send + Sync + 'static,
{
    /// Resolve the target as an ordinary service from `provider`
    ///
    /// This is the activator used by registries that store the composite
    /// identity as a plain service type.
    pub fn new(provider: &dyn ServiceProvider) -> Result<Self> {
        Self::from_lookup(|target| provider.get_service(&ServiceType::Keyed(target)))
    }

    /// Resolve the target through a native keyed lookup
    pub fn from_lookup<F>(resolve: F) -> Result<Self>
    where
        F: FnOnce(KeyedType) -> Result<Option<Instance>>,
    {
        let target = Self::target();
        let instance = resolve(target)?.ok_or_else(|| no_such_keyed_service(&target))?;
        Ok(Self::from_value(downcast_instance::<S>(&instance)?))
    }

    /// Wrap a value that was resolved elsewhere
    pub fn from_value(value: Arc<S>) -> Self {
        Self {
            value,
            key: PhantomData,
        }
    }

    /// Resolve the holder through its indirection binding
    pub fn resolve(provider: &dyn ServiceProvider) -> Result<Self> {
        provider.get_required_keyed::<K, S>().map(Self::from_value)
    }

    /// The composite identity this holder resolves
    pub fn target() -> KeyedType {
        KeyedType::of::<K, S>()
    }

    /// Build instructions for container-specific holders
    pub fn shape() -> IndirectionShape {
        IndirectionShape::new(Self::target(), Arity::Two, wrap_with::<S, Self>(Self::from_value))
    }

    /// The indirection binding for `Keyed<K, S>`
    pub fn descriptor(lifetime: Lifetime) -> ServiceDescriptor {
        let implementation = Implementation::new(
            TypeIdentity::of::<Self>(),
            Arc::new(|provider: &dyn ServiceProvider| Self::new(provider).map(into_holder)),
        )
        .with_indirection(Self::shape());

        ServiceDescriptor::new(ServiceType::indirection::<K, S>(), implementation, lifetime)
    }

    /// The resolved value
    pub fn value(&self) -> &Arc<S> {
        &self.value
    }

    /// Take the resolved value
    pub fn into_value(self) -> Arc<S> {
        self.value
    }
}

impl<K, S> AnyKeyed for Keyed<K, S>
where
    K: ?Sized + 'static,
    S: ?Sized + Send + Sync + 'static,
{
    fn key(&self) -> TypeIdentity {
        TypeIdentity::of::<K>()
    }

    fn service(&self) -> TypeIdentity {
        TypeIdentity::of::<S>()
    }

    fn value(&self) -> Instance {
        into_instance(self.value.clone())
    }
}

impl<K: ?Sized, S: ?Sized> Clone for Keyed<K, S> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            key: PhantomData,
        }
    }
}

impl<K: ?Sized, S: ?Sized> fmt::Debug for Keyed<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keyed")
            .field("key", &std::any::type_name::<K>())
            .field("service", &std::any::type_name::<S>())
            .finish_non_exhaustive()
    }
}

/// Holder of `S` pinned to the implementation `I` registered under `K`
///
/// The target is addressed by `(K, I)`, which lets several implementations
/// of one service share a key and be resolved together.
pub struct KeyedImpl<K: ?Sized, S: ?Sized, I: ?Sized> {
    value: Arc<S>,
    types: PhantomData<fn() -> (*const K, *const I)>,
}

impl<K, S, I> KeyedImpl<K, S, I>
where
    K: ?Sized + 'static,
    S: ?Sized + Send + Sync + 'static,
    I: ?Sized + 'static,
{
    /// Resolve the target as an ordinary service from `provider`
    pub fn new(provider: &dyn ServiceProvider) -> Result<Self> {
        Self::from_lookup(|target| provider.get_service(&ServiceType::Keyed(target)))
    }

    /// Resolve the target through a native keyed lookup
    pub fn from_lookup<F>(resolve: F) -> Result<Self>
    where
        F: FnOnce(KeyedType) -> Result<Option<Instance>>,
    {
        let target = Self::target();
        let instance = resolve(target)?.ok_or_else(|| no_such_keyed_service(&target))?;
        Ok(Self::from_value(downcast_instance::<S>(&instance)?))
    }

    /// Wrap a value that was resolved elsewhere
    pub fn from_value(value: Arc<S>) -> Self {
        Self {
            value,
            types: PhantomData,
        }
    }

    /// The composite identity this holder resolves
    pub fn target() -> KeyedType {
        KeyedType::of::<K, I>()
    }

    /// Build instructions for container-specific holders
    pub fn shape() -> IndirectionShape {
        IndirectionShape::new(
            Self::target(),
            Arity::Three {
                implementation: TypeIdentity::of::<I>(),
            },
            wrap_with::<S, Self>(Self::from_value),
        )
    }

    /// The indirection binding for `KeyedImpl<K, S, I>`, addressed as `(K, S)`
    pub fn descriptor(lifetime: Lifetime) -> ServiceDescriptor {
        let implementation = Implementation::new(
            TypeIdentity::of::<Self>(),
            Arc::new(|provider: &dyn ServiceProvider| Self::new(provider).map(into_holder)),
        )
        .with_indirection(Self::shape());

        ServiceDescriptor::new(ServiceType::indirection::<K, S>(), implementation, lifetime)
    }

    /// The resolved value
    pub fn value(&self) -> &Arc<S> {
        &self.value
    }
}

impl<K, S, I> AnyKeyed for KeyedImpl<K, S, I>
where
    K: ?Sized + 'static,
    S: ?Sized + Send + Sync + 'static,
    I: ?Sized + 'static,
{
    fn key(&self) -> TypeIdentity {
        TypeIdentity::of::<K>()
    }

    fn service(&self) -> TypeIdentity {
        TypeIdentity::of::<S>()
    }

    fn value(&self) -> Instance {
        into_instance(self.value.clone())
    }
}

impl<K: ?Sized, S: ?Sized, I: ?Sized> fmt::Debug for KeyedImpl<K, S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedImpl")
            .field("key", &std::any::type_name::<K>())
            .field("service", &std::any::type_name::<S>())
            .field("implementation", &std::any::type_name::<I>())
            .finish_non_exhaustive()
    }
}

/// Holders around values built outside any container
pub struct KeyService;

impl KeyService {
    /// Holder exposing `value` as the `S` keyed by `K`
    pub fn of<K, S>(value: Arc<S>) -> Keyed<K, S>
    where
        K: ?Sized + 'static,
        S: ?Sized + Send + Sync + 'static,
    {
        Keyed::from_value(value)
    }
}
