//! Keyed registration and resolution
//!
//! | Trait | Extends | Adds |
//! |-------|---------|------|
//! | [`KeyedServiceCollectionExt`] | `ServiceCollection` | `add_keyed*`, `try_add_keyed*` |
//! | [`KeyedServiceProviderExt`] | every `ServiceProvider` | `get_keyed*` lookups |

pub mod collection;
pub mod provider;

pub use collection::KeyedServiceCollectionExt;
pub use provider::KeyedServiceProviderExt;
