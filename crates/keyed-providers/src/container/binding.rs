//! Bindings

use std::fmt;

use keyed_domain::{
    Error, Factory, ImplementationMode, Instance, Lifetime, Result, ServiceProvider, ServiceType,
};
use once_cell::sync::OnceCell;

/// How a resolved value is shared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reuse {
    /// A new value for every resolution
    Transient,
    /// One value per scope
    Scoped,
    /// One value per container
    Singleton,
}

impl Reuse {
    /// Reuse matching `lifetime` one to one
    pub fn from_lifetime(lifetime: Lifetime) -> Self {
        match lifetime {
            Lifetime::Transient => Self::Transient,
            Lifetime::Scoped => Self::Scoped,
            Lifetime::Singleton => Self::Singleton,
        }
    }
}

/// How a binding produces its value
#[derive(Clone)]
pub enum Activation {
    /// Invoke an activator with the resolving scope
    Activator(Factory),
    /// Hand out a pre-built value
    Instance(Instance),
}

impl From<ImplementationMode> for Activation {
    fn from(mode: ImplementationMode) -> Self {
        match mode {
            ImplementationMode::Type(implementation) => {
                Self::Activator(implementation.activator().clone())
            }
            ImplementationMode::Factory(factory) => Self::Activator(factory),
            ImplementationMode::Instance(instance) => Self::Instance(instance),
        }
    }
}

impl fmt::Debug for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Activator(_) => f.write_str("Activator(..)"),
            Self::Instance(_) => f.write_str("Instance(..)"),
        }
    }
}

pub(crate) struct Binding {
    pub(crate) id: usize,
    pub(crate) service_type: ServiceType,
    pub(crate) activation: Activation,
    pub(crate) reuse: Reuse,
    singleton: OnceCell<Instance>,
}

impl Binding {
    pub(crate) fn new(id: usize, service_type: ServiceType, activation: Activation, reuse: Reuse) -> Self {
        Self {
            id,
            service_type,
            activation,
            reuse,
            singleton: OnceCell::new(),
        }
    }

    /// Produce a fresh value, ignoring reuse
    pub(crate) fn activate(&self, provider: &dyn ServiceProvider) -> Result<Instance> {
        match &self.activation {
            Activation::Activator(activator) => activator(provider)
                .map_err(|source| Error::activation(self.service_type.to_string(), source)),
            Activation::Instance(instance) => Ok(instance.clone()),
        }
    }

    /// The container-wide value, activated on first use
    pub(crate) fn singleton(&self, provider: &dyn ServiceProvider) -> Result<Instance> {
        self.singleton
            .get_or_try_init(|| self.activate(provider))
            .cloned()
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("id", &self.id)
            .field("service_type", &self.service_type)
            .field("activation", &self.activation)
            .field("reuse", &self.reuse)
            .finish_non_exhaustive()
    }
}
