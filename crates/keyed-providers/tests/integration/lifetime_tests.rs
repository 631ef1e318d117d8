//! Lifetime behavior of keyed registrations per adapter

use std::sync::Arc;

use keyed_application::ports::KeyCapability;
use keyed_application::{KeyedServiceCollectionExt, KeyedServiceProviderExt};
use keyed_domain::ServiceCollection;

use crate::test_utils::fixtures::*;

#[test]
fn test_keyed_transient_is_new_per_resolution() {
    for adapter in adapters() {
        let mut services = ServiceCollection::new();
        services.add_keyed_transient::<keys::Thingy, dyn IThing, KeyedThing>();

        let provider = adapter.build(services).expect("build");
        let first = provider.get_required_keyed::<keys::Thingy, dyn IThing>().expect("first");
        let second = provider.get_required_keyed::<keys::Thingy, dyn IThing>().expect("second");

        assert!(!Arc::ptr_eq(&first, &second), "{}", adapter.provider_name());
    }
}

#[test]
fn test_keyed_singleton_is_shared_across_scopes() {
    for adapter in adapters() {
        let mut services = ServiceCollection::new();
        services.add_keyed_singleton::<keys::Thingy, dyn IThing, KeyedThing>();

        let provider = adapter.build(services).expect("build");
        let first = provider.create_scope();
        let second = provider.create_scope();

        let a = first.get_required_keyed::<keys::Thingy, dyn IThing>().expect("first");
        let b = second.get_required_keyed::<keys::Thingy, dyn IThing>().expect("second");
        let root = provider.get_required_keyed::<keys::Thingy, dyn IThing>().expect("root");

        assert!(Arc::ptr_eq(&a, &b), "{}", adapter.provider_name());
        assert!(Arc::ptr_eq(&a, &root), "{}", adapter.provider_name());
    }
}

#[test]
fn test_keyed_scoped_is_shared_within_a_scope() {
    for adapter in adapters() {
        let mut services = ServiceCollection::new();
        services.add_keyed_scoped::<keys::Thingy, dyn IThing, KeyedThing>();

        let provider = adapter.build(services).expect("build");
        let scope = provider.create_scope();

        let a = scope.get_required_keyed::<keys::Thingy, dyn IThing>().expect("first");
        let b = scope.get_required_keyed::<keys::Thingy, dyn IThing>().expect("second");

        assert!(Arc::ptr_eq(&a, &b), "{}", adapter.provider_name());
    }
}

#[test]
fn test_keyed_scoped_across_scopes_depends_on_capability() {
    for adapter in adapters() {
        let mut services = ServiceCollection::new();
        services.add_keyed_scoped::<keys::Thingy, dyn IThing, KeyedThing>();

        let provider = adapter.build(services).expect("build");
        let a = provider
            .create_scope()
            .get_required_keyed::<keys::Thingy, dyn IThing>()
            .expect("first");
        let b = provider
            .create_scope()
            .get_required_keyed::<keys::Thingy, dyn IThing>()
            .expect("second");

        match adapter.capability() {
            // no scopes: scoped registrations are container-wide
            KeyCapability::NameKeyed => assert!(Arc::ptr_eq(&a, &b)),
            _ => assert!(!Arc::ptr_eq(&a, &b), "{}", adapter.provider_name()),
        }
    }
}

#[test]
fn test_try_add_keyed_scoped_holder_follows_scope() {
    for adapter in adapters() {
        let mut services = ServiceCollection::new();
        services.try_add_keyed::<keys::Thingy, dyn IThing, KeyedThing>(keyed_domain::Lifetime::Scoped);

        let provider = adapter.build(services).expect("build");
        let scope = provider.create_scope();

        let a = scope.get_required_keyed::<keys::Thingy, dyn IThing>().expect("first");
        let b = scope.get_required_keyed::<keys::Thingy, dyn IThing>().expect("second");

        assert!(Arc::ptr_eq(&a, &b), "{}", adapter.provider_name());
    }
}
