//! Registration entries
//!
//! A [`ServiceDescriptor`] is one building instruction: the identity it is
//! addressed by, how the value is produced and how long it lives. Values
//! travel as [`Instance`]s whose payload is an `Arc<S>` for the service type
//! `S`, so trait-object services are stored without a second erasure.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constants::{INDIRECTION_ARITY, INDIRECTION_IMPL_ARITY};
use crate::error::{Error, Result};
use crate::identity::{KeyedType, ServiceType, TypeIdentity};
use crate::ports::ServiceProvider;

/// A resolved value; the payload is an `Arc<S>` for the service type `S`
pub type Instance = Arc<dyn Any + Send + Sync>;

/// Produces a value from the live provider
pub type Factory = Arc<dyn Fn(&dyn ServiceProvider) -> Result<Instance> + Send + Sync>;

/// Turns a resolved keyed value into the payload of an indirection holder
pub type Wrap = Arc<dyn Fn(Instance) -> Result<Instance> + Send + Sync>;

/// Erase a service value into an [`Instance`]
pub fn into_instance<S>(value: Arc<S>) -> Instance
where
    S: ?Sized + Send + Sync + 'static,
{
    Arc::new(value)
}

/// Recover the service value stored in an [`Instance`]
pub fn downcast_instance<S>(instance: &Instance) -> Result<Arc<S>>
where
    S: ?Sized + Send + Sync + 'static,
{
    instance
        .downcast_ref::<Arc<S>>()
        .cloned()
        .ok_or_else(|| Error::type_mismatch(std::any::type_name::<S>()))
}

/// A type the container can construct as an `Arc<S>`
///
/// ```ignore
/// struct Thing1;
///
/// impl Component<dyn IThing> for Thing1 {
///     fn build(_: &dyn ServiceProvider) -> Result<Arc<dyn IThing>> {
///         Ok(Arc::new(Thing1))
///     }
/// }
/// ```
pub trait Component<S: ?Sized + 'static>: Send + Sync + 'static {
    /// Construct the component, resolving its dependencies from `provider`
    fn build(provider: &dyn ServiceProvider) -> Result<Arc<S>>;
}

/// How long a resolved value is shared
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Lifetime {
    /// A new value for every resolution
    #[default]
    Transient,
    /// One value per activation scope
    Scoped,
    /// One value per root provider
    Singleton,
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transient => write!(f, "transient"),
            Self::Scoped => write!(f, "scoped"),
            Self::Singleton => write!(f, "singleton"),
        }
    }
}

/// Number of type arguments of an indirection holder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// `Keyed<K, S>`
    Two,
    /// `KeyedImpl<K, S, I>`; the keyed target is addressed by `implementation`
    Three {
        /// The concrete implementation type
        implementation: TypeIdentity,
    },
}

impl Arity {
    /// Number of type arguments
    pub fn count(&self) -> usize {
        match self {
            Self::Two => INDIRECTION_ARITY,
            Self::Three { .. } => INDIRECTION_IMPL_ARITY,
        }
    }
}

/// Build instructions for an indirection holder
///
/// Carried by the implementation of an indirection binding so a container
/// adapter can rebuild the holder around its own native keyed lookup.
#[derive(Clone)]
pub struct IndirectionShape {
    target: KeyedType,
    arity: Arity,
    wrap: Wrap,
}

impl IndirectionShape {
    /// Holder resolving `target` and wrapping the result with `wrap`
    pub fn new(target: KeyedType, arity: Arity, wrap: Wrap) -> Self {
        Self {
            target,
            arity,
            wrap,
        }
    }

    /// The composite identity the holder resolves
    pub fn target(&self) -> KeyedType {
        self.target
    }

    /// Number of type arguments of the holder
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Wrap a resolved keyed value into the holder payload
    pub fn wrap(&self, value: Instance) -> Result<Instance> {
        (self.wrap)(value)
    }
}

impl fmt::Debug for IndirectionShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndirectionShape")
            .field("target", &self.target)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// A constructible implementation type
#[derive(Clone)]
pub struct Implementation {
    identity: TypeIdentity,
    activator: Factory,
    indirection: Option<IndirectionShape>,
}

impl Implementation {
    /// Implementation with an explicit activator
    pub fn new(identity: TypeIdentity, activator: Factory) -> Self {
        Self {
            identity,
            activator,
            indirection: None,
        }
    }

    /// Implementation `I` of service `S`
    pub fn of<S, I>() -> Self
    where
        S: ?Sized + Send + Sync + 'static,
        I: Component<S>,
    {
        Self::new(
            TypeIdentity::of::<I>(),
            Arc::new(|provider: &dyn ServiceProvider| I::build(provider).map(into_instance)),
        )
    }

    /// Attach indirection build instructions
    pub fn with_indirection(mut self, shape: IndirectionShape) -> Self {
        self.indirection = Some(shape);
        self
    }

    /// Identity of the implementation type
    pub fn identity(&self) -> TypeIdentity {
        self.identity
    }

    /// The activator
    pub fn activator(&self) -> &Factory {
        &self.activator
    }

    /// Construct a value from the live provider
    pub fn activate(&self, provider: &dyn ServiceProvider) -> Result<Instance> {
        (self.activator)(provider)
    }

    /// Indirection build instructions, when this implements a holder
    pub fn indirection(&self) -> Option<&IndirectionShape> {
        self.indirection.as_ref()
    }
}

impl fmt::Debug for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Implementation")
            .field("identity", &self.identity)
            .field("indirection", &self.indirection)
            .finish_non_exhaustive()
    }
}

/// How a registration produces its value
#[derive(Clone)]
pub enum ImplementationMode {
    /// Construct an implementation type
    Type(Implementation),
    /// Invoke a factory
    Factory(Factory),
    /// Hand out a pre-built value
    Instance(Instance),
}

impl fmt::Debug for ImplementationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(implementation) => f.debug_tuple("Type").field(implementation).finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
            Self::Instance(_) => f.write_str("Instance(..)"),
        }
    }
}

/// One registration: service identity, implementation mode and lifetime
#[derive(Clone, Debug)]
pub struct ServiceDescriptor {
    service_type: ServiceType,
    implementation: ImplementationMode,
    lifetime: Lifetime,
}

impl ServiceDescriptor {
    /// Registration constructing `implementation`
    pub fn new(service_type: ServiceType, implementation: Implementation, lifetime: Lifetime) -> Self {
        Self::from_parts(
            service_type,
            ImplementationMode::Type(implementation),
            lifetime,
        )
    }

    /// Registration invoking `factory`
    pub fn with_factory(service_type: ServiceType, factory: Factory, lifetime: Lifetime) -> Self {
        Self::from_parts(service_type, ImplementationMode::Factory(factory), lifetime)
    }

    /// Registration handing out `instance`; always a singleton
    pub fn with_instance(service_type: ServiceType, instance: Instance) -> Self {
        Self::from_parts(
            service_type,
            ImplementationMode::Instance(instance),
            Lifetime::Singleton,
        )
    }

    /// Registration from its raw parts
    pub fn from_parts(
        service_type: ServiceType,
        implementation: ImplementationMode,
        lifetime: Lifetime,
    ) -> Self {
        Self {
            service_type,
            implementation,
            lifetime,
        }
    }

    /// The identity this registration is addressed by
    pub fn service_type(&self) -> &ServiceType {
        &self.service_type
    }

    /// How the value is produced
    pub fn implementation(&self) -> &ImplementationMode {
        &self.implementation
    }

    /// How long the value is shared
    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    /// Identity of the implementation type, for type-constructed registrations
    pub fn implementation_identity(&self) -> Option<TypeIdentity> {
        match &self.implementation {
            ImplementationMode::Type(implementation) => Some(implementation.identity()),
            _ => None,
        }
    }

    /// Same registration addressed by a different identity
    ///
    /// Implementation mode and lifetime are carried over unchanged, and an
    /// instance keeps its object identity.
    pub fn with_service_type(&self, service_type: ServiceType) -> Self {
        Self {
            service_type,
            implementation: self.implementation.clone(),
            lifetime: self.lifetime,
        }
    }

    /// Split into `(service_type, implementation, lifetime)`
    pub fn into_parts(self) -> (ServiceType, ImplementationMode, Lifetime) {
        (self.service_type, self.implementation, self.lifetime)
    }
}
