//! Keyed container bootstrap
//!
//! Selects the configured adapter, builds the root provider from a
//! registration list and optionally resolves every keyed binding once so
//! missing keyed targets surface at startup.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut services = ServiceCollection::new();
//! services.add_keyed_singleton::<key::Thingy, dyn IThing, Thing>();
//!
//! let app = init_app(AppConfig::default(), services)?;
//! let thing = app.provider().get_required_keyed::<key::Thingy, dyn IThing>()?;
//! ```

use std::fmt;
use std::sync::Arc;

use keyed_application::ports::KeyedContainerProvider;
use keyed_domain::error::{Error, Result};
use keyed_domain::{ServiceCollection, ServiceProvider, ServiceType};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::di::resolver::KeyedContainerResolver;

/// Built application container
pub struct KeyedApp {
    config: Arc<AppConfig>,
    container: Arc<dyn KeyedContainerProvider>,
    provider: Arc<dyn ServiceProvider>,
}

impl KeyedApp {
    /// Application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The adapter that built the provider
    pub fn container(&self) -> &Arc<dyn KeyedContainerProvider> {
        &self.container
    }

    /// The root provider
    pub fn provider(&self) -> &Arc<dyn ServiceProvider> {
        &self.provider
    }

    /// Open a child activation scope
    pub fn create_scope(&self) -> Arc<dyn ServiceProvider> {
        self.provider.create_scope()
    }
}

impl fmt::Debug for KeyedApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedApp")
            .field("container", &self.container.provider_name())
            .field("capability", &self.container.capability())
            .finish_non_exhaustive()
    }
}

/// Build the application container from `services`
pub fn init_app(config: AppConfig, services: ServiceCollection) -> Result<KeyedApp> {
    let config = Arc::new(config);
    let resolver = KeyedContainerResolver::new(config.clone());
    let container = resolver.resolve_from_config()?;

    info!(
        container = container.provider_name(),
        capability = %container.capability(),
        registrations = services.len(),
        "Building keyed container"
    );

    let indirections = config
        .container
        .validate_on_build
        .then(|| indirection_bindings(&services));

    let provider = container.build(services)?;

    if let Some(indirections) = indirections {
        validate_keyed_bindings(provider.as_ref(), &indirections)?;
    }

    Ok(KeyedApp {
        config,
        container,
        provider,
    })
}

fn indirection_bindings(services: &ServiceCollection) -> Vec<ServiceType> {
    let mut indirections: Vec<ServiceType> = Vec::new();
    for descriptor in services {
        let service_type = *descriptor.service_type();
        if matches!(service_type, ServiceType::Indirection(_)) && !indirections.contains(&service_type) {
            indirections.push(service_type);
        }
    }
    indirections
}

/// Resolve every keyed binding once inside a throwaway scope
fn validate_keyed_bindings(provider: &dyn ServiceProvider, indirections: &[ServiceType]) -> Result<()> {
    let scope = provider.create_scope();
    for service_type in indirections {
        debug!(service = %service_type, "Validating keyed binding");
        scope.get_services(service_type).map_err(|e| {
            Error::configuration_with_source(format!("Keyed binding {service_type} cannot be resolved"), e)
        })?;
    }
    info!(validated = indirections.len(), "Keyed bindings validated");
    Ok(())
}
