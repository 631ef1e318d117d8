//! Application Layer - Keyed Dependency Injection
//!
//! Bridges two-dimensional (type × key) resolution onto registries that
//! natively resolve by type only.
//!
//! ## Architecture
//!
//! ```text
//! ServiceCollection (flat, container agnostic)
//!        │
//!        ▼  extraction::remove_keyed_services
//! ┌───────────────┐     ┌────────────────────────────┐
//! │ remaining     │     │ KeyedServices (per bucket) │
//! └───────────────┘     └────────────────────────────┘
//!        │                          │
//!        ▼                          ▼  visitor::KeyedServiceVisitor
//! native bootstrap          native keyed registrations
//!                           + container-specific accessors
//! ```
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`encoding`] | Turning a composite identity into a native key |
//! | [`extraction`] | Removing keyed registrations into buckets |
//! | [`visitor`] | Replaying buckets against a target registry |
//! | [`accessor`] | Indirection holders resolved by ordinary lookup |
//! | [`extensions`] | Keyed registration and resolution methods |
//! | [`ports`] | Container adapter contract and compile-time registry |

pub mod accessor;
pub mod encoding;
pub mod extensions;
pub mod extraction;
pub mod ports;
pub mod visitor;

pub use accessor::{AnyKeyed, KeyService, Keyed, KeyedImpl};
pub use encoding::{IdentityKey, KeyEncoding, StringKey};
pub use extensions::{KeyedServiceCollectionExt, KeyedServiceProviderExt};
pub use extraction::{KeyedServices, remove_keyed_services};
pub use visitor::{KeyedAccessor, KeyedServiceVisitor};
