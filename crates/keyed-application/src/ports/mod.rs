//! Ports implemented by container adapters
//!
//! | Port | Description |
//! |------|-------------|
//! | [`KeyedContainerProvider`] | Builds a keyed-capable provider from a registration list |
//! | [`registry`] | Compile-time discovery of container adapters |

pub mod container;
pub mod registry;

pub use container::{KeyCapability, KeyedContainerProvider};
pub use registry::{
    KEYED_CONTAINERS, KeyedContainerConfig, KeyedContainerEntry, list_keyed_containers,
    resolve_keyed_container,
};
