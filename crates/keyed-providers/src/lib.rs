//! # Keyed Dependency Injection - Container Adapters
//!
//! A minimal host registry engine plus one adapter per keying capability.
//! Each adapter implements `ServiceProviderFactory` and registers itself in
//! the `KEYED_CONTAINERS` registry.
//!
//! ## Adapters
//!
//! | Adapter | Capability | Keyed registrations | Scoped lifetime |
//! |---------|------------|---------------------|-----------------|
//! | [`DefaultContainer`] | Unkeyed | Composite identity as a plain service type | Scoped |
//! | [`TypeKeyedContainer`] | Type-keyed | Native key = composite identity | Scoped (root acts as singleton) |
//! | [`NamedContainer`] | Name-keyed | Native key = `Key+Service` string | Singleton |
//!
//! ## Usage
//!
//! ```ignore
//! use keyed_domain::ServiceProviderFactory;
//! use keyed_providers::TypeKeyedContainer;
//!
//! let provider = TypeKeyedContainer::new().build(services)?;
//! let thing = provider.get_required_keyed::<key::Thingy, dyn IThing>()?;
//! ```

pub use keyed_domain::error::{Error, Result};

/// Adapter names and descriptions
pub mod constants;

/// Host registry engine
pub mod container;

/// Adapter that stores composite identities as ordinary service types
pub mod default;

/// Adapter keyed by composite identity
pub mod type_keyed;

/// Adapter keyed by name
pub mod named;

pub use container::{Activation, Container, ContainerBuilder, Reuse, Scope};
pub use default::DefaultContainer;
pub use named::NamedContainer;
pub use type_keyed::TypeKeyedContainer;
