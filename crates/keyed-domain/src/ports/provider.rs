//! Resolution port

use std::sync::Arc;

use downcast_rs::{DowncastSync, impl_downcast};

use crate::descriptor::{Instance, downcast_instance};
use crate::error::{Error, Result};
use crate::identity::ServiceType;

/// Ordinary, single-dimension resolution exposed by a live container
///
/// Implementations can be recovered from `&dyn ServiceProvider` with
/// `downcast_ref`, which is how container-specific accessors reach the
/// native keyed lookup of the container that is constructing them.
pub trait ServiceProvider: DowncastSync {
    /// Resolve the last registration for `service_type`, if any
    fn get_service(&self, service_type: &ServiceType) -> Result<Option<Instance>>;

    /// Resolve every registration for `service_type`, in registration order
    fn get_services(&self, service_type: &ServiceType) -> Result<Vec<Instance>>;

    /// Open a child activation scope
    fn create_scope(&self) -> Arc<dyn ServiceProvider>;
}

impl_downcast!(sync ServiceProvider);

/// Convenience resolution methods available on every provider
pub trait ServiceProviderExt: ServiceProvider {
    /// Resolve `service_type`, failing when it is not registered
    fn get_required_service(&self, service_type: &ServiceType) -> Result<Instance> {
        self.get_service(service_type)?
            .ok_or_else(|| Error::service_not_registered(service_type.to_string()))
    }

    /// Resolve `S`, if registered
    fn get<S>(&self) -> Result<Option<Arc<S>>>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        self.get_service(&ServiceType::of::<S>())?
            .map(|instance| downcast_instance::<S>(&instance))
            .transpose()
    }

    /// Resolve `S`, failing when it is not registered
    fn get_required<S>(&self) -> Result<Arc<S>>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        let instance = self.get_required_service(&ServiceType::of::<S>())?;
        downcast_instance::<S>(&instance)
    }

    /// Resolve every registration of `S`, in registration order
    fn get_all<S>(&self) -> Result<Vec<Arc<S>>>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        self.get_services(&ServiceType::of::<S>())?
            .iter()
            .map(downcast_instance::<S>)
            .collect()
    }
}

impl<P: ServiceProvider + ?Sized> ServiceProviderExt for P {}
