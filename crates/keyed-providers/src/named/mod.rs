//! Name-keyed adapter
//!
//! Hosts keyed registrations in a registry that only accepts names as keys
//! and has no scope concept. The composite identity is encoded as its
//! `Key+Service` string; scoped registrations become container-wide
//! singletons.
//!
//! | Lifetime | Reuse |
//! |----------|-------|
//! | Transient | Transient |
//! | Scoped | Singleton |
//! | Singleton | Singleton |

mod accessor;
mod factory;
mod visitor;

pub use accessor::{NamedKey2, NamedKey3};
pub use factory::NamedContainer;
pub use visitor::NamedServiceVisitor;

use keyed_domain::Lifetime;

use crate::container::Reuse;

/// Reuse for `lifetime` in a registry without scopes
pub fn named_reuse(lifetime: Lifetime) -> Reuse {
    match lifetime {
        Lifetime::Transient => Reuse::Transient,
        Lifetime::Scoped | Lifetime::Singleton => Reuse::Singleton,
    }
}
