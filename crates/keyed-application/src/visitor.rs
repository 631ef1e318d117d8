//! Remapping protocol
//!
//! Replays the buckets produced by [`remove_keyed_services`] against a
//! target registry. Each container adapter implements
//! [`KeyedServiceVisitor`] and supplies the two accessor types that perform
//! the native keyed lookup for indirection holders.
//!
//! ```text
//! for (key, bucket) in keyed_services
//!     for descriptor in bucket
//!         Indirection(K, S) ──► remap ──► visit_interface(holder binding)
//!         plain S           ──────────► visit_service(key, descriptor)
//! ```
//!
//! [`remove_keyed_services`]: crate::extraction::remove_keyed_services

use std::sync::Arc;

use keyed_domain::constants::{INDIRECTION_ARITY, INDIRECTION_IMPL_ARITY};
use keyed_domain::{
    Arity, Error, Factory, Implementation, ImplementationMode, IndirectionShape, Instance,
    KeyedType, Result, ServiceDescriptor, ServiceProvider, ServiceType, TypeIdentity,
};
use tracing::debug;

use crate::accessor::no_such_keyed_service;
use crate::extraction::KeyedServices;

/// Container-specific holder strategy
///
/// `resolve` reaches the native keyed store of the container that is
/// constructing the holder, typically by downcasting `provider`.
pub trait KeyedAccessor: Send + Sync + 'static {
    /// Number of type arguments of the holder this accessor builds
    const ARITY: usize;

    /// Natively resolve `target` from the constructing container
    fn resolve(provider: &dyn ServiceProvider, target: &KeyedType) -> Result<Option<Instance>>;
}

/// Re-registers keyed buckets using a target registry's native primitives
pub trait KeyedServiceVisitor {
    /// Accessor replacing `Keyed<K, S>`
    type Keyed2: KeyedAccessor;
    /// Accessor replacing `KeyedImpl<K, S, I>`
    type Keyed3: KeyedAccessor;

    /// Register a remapped indirection binding (ordinary, unkeyed)
    fn visit_interface(&mut self, descriptor: ServiceDescriptor) -> Result<()>;

    /// Register `descriptor` under the native form of `key`
    fn visit_service(&mut self, key: KeyedType, descriptor: ServiceDescriptor) -> Result<()>;

    /// Visit every bucket, then every entry within it, in extraction order
    ///
    /// The first failure aborts the whole pass.
    fn visit(&mut self, keyed_services: KeyedServices) -> Result<()> {
        validate_accessor::<Self::Keyed2>(INDIRECTION_ARITY)?;
        validate_accessor::<Self::Keyed3>(INDIRECTION_IMPL_ARITY)?;

        for (key, services) in keyed_services {
            for descriptor in services {
                if matches!(descriptor.service_type(), ServiceType::Indirection(_)) {
                    let remapped = self.remap(&descriptor)?;
                    debug!(service = %remapped.service_type(), "Visiting indirection binding");
                    self.visit_interface(remapped)?;
                } else {
                    debug!(key = ?key, service = %descriptor.service_type(), "Visiting keyed service");
                    self.visit_service(key, descriptor)?;
                }
            }
        }

        Ok(())
    }

    /// Rebuild an indirection binding around this container's accessors
    fn remap(&self, descriptor: &ServiceDescriptor) -> Result<ServiceDescriptor> {
        remap_indirection::<Self::Keyed2, Self::Keyed3>(descriptor)
    }
}

/// Rebuild an indirection binding so its holder resolves through `A2`/`A3`
///
/// The binding keeps its service identity and lifetime; the accessor is
/// chosen by the arity recorded when the binding was registered.
pub fn remap_indirection<A2, A3>(descriptor: &ServiceDescriptor) -> Result<ServiceDescriptor>
where
    A2: KeyedAccessor,
    A3: KeyedAccessor,
{
    let ImplementationMode::Type(implementation) = descriptor.implementation() else {
        return Err(Error::invalid_argument(format!(
            "Indirection binding {} must be constructed from an implementation type",
            descriptor.service_type()
        )));
    };

    let Some(shape) = implementation.indirection() else {
        return Err(Error::not_supported(format!(
            "Type {} was expected to be a holder with {INDIRECTION_ARITY} or {INDIRECTION_IMPL_ARITY} type arguments",
            implementation.identity()
        )));
    };

    let (identity, activator) = match shape.arity() {
        Arity::Two => (
            TypeIdentity::of::<A2>(),
            accessor_activator::<A2>(shape.clone()),
        ),
        Arity::Three { .. } => (
            TypeIdentity::of::<A3>(),
            accessor_activator::<A3>(shape.clone()),
        ),
    };

    Ok(ServiceDescriptor::new(
        *descriptor.service_type(),
        Implementation::new(identity, activator).with_indirection(shape.clone()),
        descriptor.lifetime(),
    ))
}

fn accessor_activator<A: KeyedAccessor>(shape: IndirectionShape) -> Factory {
    Arc::new(move |provider: &dyn ServiceProvider| -> Result<Instance> {
        let target = shape.target();
        let value = A::resolve(provider, &target)?.ok_or_else(|| no_such_keyed_service(&target))?;
        shape.wrap(value)
    })
}

fn validate_accessor<A: KeyedAccessor>(expected: usize) -> Result<()> {
    if A::ARITY != expected {
        return Err(Error::invalid_argument(format!(
            "{} is expected to have {expected} type arguments",
            std::any::type_name::<A>()
        )));
    }
    Ok(())
}
