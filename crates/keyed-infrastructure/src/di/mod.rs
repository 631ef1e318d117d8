//! Container selection and bootstrap
//!
//! ```text
//! AppConfig → KeyedContainerResolver → linkme registry → Arc<dyn KeyedContainerProvider>
//!                                                              │
//! ServiceCollection ───────────────────────── init_app ────────┴──► KeyedApp
//! ```

pub mod bootstrap;
pub mod resolver;

pub use bootstrap::{KeyedApp, init_app};
pub use resolver::{AvailableContainers, KeyedContainerResolver, list_available_containers};
