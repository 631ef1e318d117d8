//! Container construction port

use std::sync::Arc;

use crate::collection::ServiceCollection;
use crate::error::Result;
use crate::ports::ServiceProvider;

/// Builds a live container from a flat registration list
///
/// Construction is split in two steps so callers can configure the native
/// builder between them.
pub trait ServiceProviderFactory {
    /// The container-specific builder
    type Builder;

    /// Populate a native builder from `services`
    fn create_builder(&self, services: ServiceCollection) -> Result<Self::Builder>;

    /// Build the root provider
    fn create_service_provider(&self, builder: Self::Builder) -> Result<Arc<dyn ServiceProvider>>;

    /// Both steps at once
    fn build(&self, services: ServiceCollection) -> Result<Arc<dyn ServiceProvider>> {
        let builder = self.create_builder(services)?;
        self.create_service_provider(builder)
    }
}
