//! Container adapter port

use std::fmt;
use std::sync::Arc;

use keyed_domain::{Result, ServiceCollection, ServiceProvider};

/// Native keying primitive of a target registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCapability {
    /// No keying; the composite identity travels as an ordinary service type
    Unkeyed,
    /// Registrations may be keyed by an arbitrary identity
    TypeKeyed,
    /// Registrations may be keyed by a name only
    NameKeyed,
}

impl fmt::Display for KeyCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unkeyed => write!(f, "unkeyed"),
            Self::TypeKeyed => write!(f, "type-keyed"),
            Self::NameKeyed => write!(f, "name-keyed"),
        }
    }
}

/// A target registry able to host keyed registrations
///
/// Object-safe counterpart of `ServiceProviderFactory`, selected at runtime
/// through the container registry.
pub trait KeyedContainerProvider: Send + Sync {
    /// Build a root provider from `services`
    fn build(&self, services: ServiceCollection) -> Result<Arc<dyn ServiceProvider>>;

    /// Keying primitive used for keyed registrations
    fn capability(&self) -> KeyCapability;

    /// Registered adapter name
    fn provider_name(&self) -> &str;
}
