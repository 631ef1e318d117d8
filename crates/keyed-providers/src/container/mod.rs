//! Host registry engine
//!
//! A small registry standing in for the external containers the adapters
//! target. Bindings are addressed by `(ServiceType, Option<K>)` where `K` is
//! the native key primitive.
//!
//! ```text
//! ContainerBuilder<K> ──build──► Container<K> (shared bindings, singletons)
//!                                     │
//!                                     ├── root Scope<K>  (scoped cache)
//!                                     └── child Scope<K> (scoped cache)
//! ```
//!
//! | Reuse | Cached in |
//! |-------|-----------|
//! | [`Reuse::Transient`] | nothing |
//! | [`Reuse::Scoped`] | the resolving scope; the root scope is a scope too |
//! | [`Reuse::Singleton`] | the binding, once per container |

mod binding;
mod builder;
mod scope;

pub use binding::{Activation, Reuse};
pub use builder::ContainerBuilder;
pub use scope::{Container, Scope};
