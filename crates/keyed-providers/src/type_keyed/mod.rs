//! Type-keyed adapter
//!
//! Hosts keyed registrations in a registry whose native key is an arbitrary
//! identity. The composite identity itself is the key, and every keyed
//! registration is bound to its wrapped service type under that key.
//!
//! ```text
//! Keyed(Thingy, IThing)        ──► IThing, key (Thingy, IThing)
//! Indirection(Thingy, IThing)  ──► TypeKeyedKey2 holder, key None
//!                                      └─ resolve_keyed(IThing, (Thingy, IThing))
//! ```

mod accessor;
mod factory;
mod visitor;

pub use accessor::{TypeKeyedKey2, TypeKeyedKey3};
pub use factory::TypeKeyedContainer;
pub use visitor::TypeKeyedServiceVisitor;
