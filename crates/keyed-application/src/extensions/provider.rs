//! Keyed resolution methods
//!
//! Lookups go through the indirection binding `Indirection(K, S)` with
//! ordinary resolution, so they work against any container the keyed
//! registrations were replayed into.

use std::sync::Arc;

use keyed_domain::{
    Error, IndirectionType, Instance, Result, ServiceProvider, ServiceType, TypeIdentity,
    TypeInfo, downcast_instance,
};

use crate::accessor::downcast_holder;

/// Keyed lookups available on every provider
pub trait KeyedServiceProviderExt: ServiceProvider {
    /// Resolve the `service` keyed by `key`, if registered
    fn get_keyed_service(
        &self,
        service: TypeIdentity,
        key: TypeIdentity,
    ) -> Result<Option<Instance>> {
        let indirection = ServiceType::Indirection(IndirectionType::new(key, service));
        match self.get_service(&indirection)? {
            Some(holder) => Ok(Some(downcast_holder(&holder)?.value())),
            None => Ok(None),
        }
    }

    /// Resolve the `service` keyed by `key`, failing when it is not registered
    fn get_required_keyed_service(
        &self,
        service: TypeIdentity,
        key: TypeIdentity,
    ) -> Result<Instance> {
        self.get_keyed_service(service, key)?
            .ok_or_else(|| Error::no_such_service(service.name(), key.name()))
    }

    /// Resolve every `service` keyed by `key`, in registration order
    fn get_keyed_services(&self, service: TypeIdentity, key: TypeIdentity) -> Result<Vec<Instance>> {
        let indirection = ServiceType::Indirection(IndirectionType::new(key, service));
        self.get_services(&indirection)?
            .iter()
            .map(|holder| downcast_holder(holder).map(|holder| holder.value()))
            .collect()
    }

    /// Resolve the `S` keyed by `K`, if registered
    fn get_keyed<K, S>(&self) -> Result<Option<Arc<S>>>
    where
        K: ?Sized + 'static,
        S: ?Sized + Send + Sync + 'static,
    {
        self.get_keyed_service(TypeIdentity::of::<S>(), TypeIdentity::of::<K>())?
            .map(|instance| downcast_instance::<S>(&instance))
            .transpose()
    }

    /// Resolve the `S` keyed by `K`, failing when it is not registered
    fn get_required_keyed<K, S>(&self) -> Result<Arc<S>>
    where
        K: ?Sized + 'static,
        S: ?Sized + Send + Sync + 'static,
    {
        let instance =
            self.get_required_keyed_service(TypeIdentity::of::<S>(), TypeIdentity::of::<K>())?;
        downcast_instance::<S>(&instance)
    }

    /// Resolve every `S` keyed by `K`, in registration order
    fn get_all_keyed<K, S>(&self) -> Result<Vec<Arc<S>>>
    where
        K: ?Sized + 'static,
        S: ?Sized + Send + Sync + 'static,
    {
        self.get_keyed_services(TypeIdentity::of::<S>(), TypeIdentity::of::<K>())?
            .iter()
            .map(downcast_instance::<S>)
            .collect()
    }
}

impl<P: ServiceProvider + ?Sized> KeyedServiceProviderExt for P {}
