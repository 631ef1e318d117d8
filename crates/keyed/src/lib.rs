//! # Keyed
//!
//! Resolve services by `(key, type)` on registries that only resolve by type.
//!
//! This crate provides the public API. It re-exports the layer crates and
//! links every container adapter so configuration can select one by name.
//!
//! ## Example
//!
//! ```ignore
//! use keyed::prelude::*;
//!
//! mod key {
//!     pub struct Thingy;
//! }
//!
//! let mut services = ServiceCollection::new();
//! services.add_keyed_singleton::<key::Thingy, dyn IThing, Thing1>();
//!
//! let app = init_app(AppConfig::default(), services)?;
//! let thing = app.provider().get_required_keyed::<key::Thingy, dyn IThing>()?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Type identities, registrations and resolution ports
//! - `application` - Extraction, remapping and indirection accessors
//! - `providers` - Host registry engine and container adapters
//! - `infrastructure` - Configuration, logging and bootstrap

/// Domain layer - identities, registrations and resolution ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use keyed_domain::*;
}

/// Application layer - keyed registration, extraction and remapping
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use keyed_application::*;
}

/// Container adapters
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use keyed_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use keyed_infrastructure::*;
}

/// Everything needed to register and resolve keyed services
pub mod prelude {
    pub use keyed_application::{
        Keyed, KeyedImpl, KeyService, KeyedServiceCollectionExt, KeyedServiceProviderExt,
    };
    pub use keyed_domain::{
        Component, Error, Lifetime, Result, ServiceCollection, ServiceProvider,
        ServiceProviderExt, ServiceProviderFactory,
    };
    pub use keyed_infrastructure::config::{AppConfig, ConfigBuilder, ConfigLoader};
    pub use keyed_infrastructure::di::{KeyedApp, init_app};
    pub use keyed_infrastructure::logging::init_logging;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export main entry point at the crate root
pub use infrastructure::di::{KeyedApp, init_app};
