//! Container resolver tests
//!
//! Uses `extern crate keyed_providers` to force linkme registration of every adapter.

use std::sync::Arc;

extern crate keyed_providers;

use keyed_application::ports::KeyCapability;
use keyed_infrastructure::config::ConfigBuilder;
use keyed_infrastructure::di::{KeyedContainerResolver, list_available_containers};

#[test]
fn test_resolve_from_config() {
    let config = Arc::new(ConfigBuilder::new().with_provider("named").build());
    let resolver = KeyedContainerResolver::new(config);

    let container = resolver.resolve_from_config().expect("named adapter");

    assert_eq!(container.provider_name(), "named");
    assert_eq!(container.capability(), KeyCapability::NameKeyed);
}

#[test]
fn test_unknown_provider_is_a_configuration_error() {
    let config = Arc::new(ConfigBuilder::new().with_provider("unity").build());
    let resolver = KeyedContainerResolver::new(config);

    let err = resolver.resolve_from_config().err().expect("unknown adapter");

    assert!(matches!(err, keyed_domain::Error::Configuration { .. }));
    assert!(err.to_string().contains("Unknown container provider 'unity'"));
}

#[test]
fn test_list_available_containers() {
    let available = list_available_containers();
    let rendered = available.to_string();

    for name in ["default", "type-keyed", "named"] {
        assert!(rendered.contains(&format!("  - {name}: ")), "{rendered}");
    }
}
