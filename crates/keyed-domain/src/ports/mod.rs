//! Ports consumed from the host registries
//!
//! | Port | Description |
//! |------|-------------|
//! | [`ServiceProvider`] | Ordinary (unkeyed) resolution against a live container |
//! | [`ServiceProviderFactory`] | Turns a registration list into a live container |

pub mod factory;
pub mod provider;

pub use factory::ServiceProviderFactory;
pub use provider::{ServiceProvider, ServiceProviderExt};
