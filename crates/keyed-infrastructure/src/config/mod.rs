//! Configuration
//!
//! | Source | Example |
//! |--------|---------|
//! | Defaults | `AppConfig::default()` |
//! | TOML file | `keyed.toml` (explicit path, cwd, `./keyed/`, user config dir) |
//! | Environment | `KEYED__CONTAINER__PROVIDER=named` |

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, ContainerConfig, LoggingConfig};
