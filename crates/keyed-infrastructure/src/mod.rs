//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns for keyed dependency injection.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration: defaults, `keyed.toml`, `KEYED__` environment |
//! | [`logging`] | Structured logging with tracing |
//! | [`di`] | Adapter selection and container bootstrap |
//! | [`constants`] | Centralized configuration constants |
//! | [`error_ext`] | Context for foreign errors |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Force linkme registration of every container adapter
extern crate keyed_providers;

pub use error_ext::ErrorContext;
