//! # Domain Layer
//!
//! Core types for resolving services by type *and* key from registries that
//! natively resolve by type only.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`identity`] | Type identities, the composite [`KeyedType`] and [`ServiceType`] |
//! | [`descriptor`] | Registration entries and lifetimes |
//! | [`collection`] | The flat registration list |
//! | [`ports`] | Resolution and container-construction contracts |
//! | [`error`] | Error taxonomy |

pub mod collection;
pub mod constants;
pub mod descriptor;
pub mod error;
pub mod identity;
pub mod ports;

pub use collection::{ServiceCollection, erase_factory};
pub use descriptor::{
    Arity, Component, Factory, Implementation, ImplementationMode, IndirectionShape, Instance,
    Lifetime, ServiceDescriptor, Wrap, downcast_instance, into_instance,
};
pub use error::{Error, Result};
pub use identity::{IndirectionType, KeyedType, ServiceType, TypeIdentity, TypeInfo};
pub use ports::{ServiceProvider, ServiceProviderExt, ServiceProviderFactory};
