//! Scenario parity suite
//!
//! Every scenario runs against each registered adapter and must behave the
//! same way regardless of the adapter's native keying primitive.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use keyed_application::{KeyedServiceCollectionExt, KeyedServiceProviderExt};
use keyed_domain::{Lifetime, ServiceCollection, ServiceProvider, ServiceProviderExt};

use crate::test_utils::fixtures::*;

fn names(things: &[Arc<dyn IThing>]) -> Vec<&'static str> {
    things.iter().map(|thing| thing.name()).collect()
}

fn thing_under<K: 'static>(provider: &dyn ServiceProvider) -> &'static str {
    provider
        .get_required_keyed::<K, dyn IThing>()
        .expect("keyed thing")
        .name()
}

#[test]
fn test_keyed_registration_is_invisible_to_unkeyed_lookup() {
    for adapter in adapters() {
        let mut services = ServiceCollection::new();
        services.add_keyed_singleton::<keys::Thingy, dyn IThing, KeyedThing>();

        let provider = adapter.build(services).expect("build");

        let unkeyed = provider.get::<dyn IThing>().expect("lookup");
        assert!(unkeyed.is_none(), "{}: keyed service leaked", adapter.provider_name());
    }
}

#[test]
fn test_unkeyed_and_keyed_registrations_coexist() {
    for adapter in adapters() {
        let mut services = ServiceCollection::new();
        services
            .add_singleton::<dyn IThing, UnkeyedThing>()
            .add_keyed_singleton::<keys::Thingy, dyn IThing, KeyedThing>();

        let provider = adapter.build(services).expect("build");

        let unkeyed = provider.get_required::<dyn IThing>().expect("unkeyed");
        let keyed = provider
            .get_required_keyed::<keys::Thingy, dyn IThing>()
            .expect("keyed");

        assert_eq!(unkeyed.name(), "unkeyed", "{}", adapter.provider_name());
        assert_eq!(keyed.name(), "keyed", "{}", adapter.provider_name());
    }
}

#[test]
fn test_resolve_by_key_type() {
    for adapter in adapters() {
        let mut services = ServiceCollection::new();
        services
            .add_keyed_transient::<keys::Thing1, dyn IThing, Thing1>()
            .add_keyed_transient::<keys::Thing2, dyn IThing, Thing2>();

        let provider = adapter.build(services).expect("build");

        let first = provider.get_keyed::<keys::Thing1, dyn IThing>().expect("lookup");
        let second = provider.get_keyed::<keys::Thing2, dyn IThing>().expect("lookup");

        assert_eq!(first.map(|t| t.name()), Some("thing1"), "{}", adapter.provider_name());
        assert_eq!(second.map(|t| t.name()), Some("thing2"), "{}", adapter.provider_name());
    }
}

#[test]
fn test_absent_key_yields_none() {
    for adapter in adapters() {
        let mut services = ServiceCollection::new();
        services.add_keyed_singleton::<keys::Thingy, dyn IThing, KeyedThing>();

        let provider = adapter.build(services).expect("build");

        let missing = provider.get_keyed::<keys::Thingies, dyn IThing>().expect("lookup");
        assert!(missing.is_none(), "{}", adapter.provider_name());
    }
}

#[test]
fn test_required_absent_key_fails_with_both_names() {
    for adapter in adapters() {
        let provider = adapter.build(ServiceCollection::new()).expect("build");

        let err = provider
            .get_required_keyed::<keys::Thingies, dyn IThing>()
            .err()
            .expect("no registration");

        assert!(err.is_not_found(), "{}: {err}", adapter.provider_name());
        let message = err.to_string();
        assert!(message.contains("IThing"), "{message}");
        assert!(message.contains("Thingies"), "{message}");
    }
}

#[test]
fn test_keyed_instance_keeps_identity() {
    for adapter in adapters() {
        let instance: Arc<dyn IThing> = Arc::new(KeyedThing);

        let mut services = ServiceCollection::new();
        services.add_keyed_instance::<keys::Thingy, dyn IThing>(instance.clone());

        let provider = adapter.build(services).expect("build");
        let scope = provider.create_scope();

        let from_root = provider
            .get_required_keyed::<keys::Thingy, dyn IThing>()
            .expect("root");
        let from_scope = scope
            .get_required_keyed::<keys::Thingy, dyn IThing>()
            .expect("scope");

        assert!(Arc::ptr_eq(&instance, &from_root), "{}", adapter.provider_name());
        assert!(Arc::ptr_eq(&instance, &from_scope), "{}", adapter.provider_name());
    }
}

#[test]
fn test_transient_keyed_factory_runs_per_resolution() {
    for adapter in adapters() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut services = ServiceCollection::new();
        services.add_keyed_factory::<keys::Thingy, dyn IThing, _>(Lifetime::Transient, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(KeyedThing) as Arc<dyn IThing>)
        });

        let provider = adapter.build(services).expect("build");
        let first = provider.get_required_keyed::<keys::Thingy, dyn IThing>().expect("first");
        let second = provider.get_required_keyed::<keys::Thingy, dyn IThing>().expect("second");

        assert_eq!(calls.load(Ordering::SeqCst), 2, "{}", adapter.provider_name());
        assert!(!Arc::ptr_eq(&first, &second), "{}", adapter.provider_name());
    }
}

#[test]
fn test_singleton_keyed_factory_runs_once() {
    for adapter in adapters() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut services = ServiceCollection::new();
        services.add_keyed_factory::<keys::Thingy, dyn IThing, _>(Lifetime::Singleton, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(KeyedThing) as Arc<dyn IThing>)
        });

        let provider = adapter.build(services).expect("build");
        let first = provider.get_required_keyed::<keys::Thingy, dyn IThing>().expect("first");
        let second = provider
            .create_scope()
            .get_required_keyed::<keys::Thingy, dyn IThing>()
            .expect("second");

        assert_eq!(calls.load(Ordering::SeqCst), 1, "{}", adapter.provider_name());
        assert!(Arc::ptr_eq(&first, &second), "{}", adapter.provider_name());
    }
}

#[test]
fn test_failing_keyed_factory_propagates() {
    for adapter in adapters() {
        let mut services = ServiceCollection::new();
        services.add_keyed_factory::<keys::Thingy, dyn IThing, _>(Lifetime::Transient, |_| {
            Err(keyed_domain::Error::internal("factory exploded"))
        });

        let provider = adapter.build(services).expect("build");
        let err = provider
            .get_keyed::<keys::Thingy, dyn IThing>()
            .err()
            .expect("factory failure");

        assert!(err.to_string().contains("factory exploded"), "{}: {err}", adapter.provider_name());
        assert!(!err.is_not_found(), "{}", adapter.provider_name());
    }
}

#[test]
fn test_last_keyed_registration_wins() {
    for adapter in adapters() {
        let mut services = ServiceCollection::new();
        services
            .add_keyed_singleton::<keys::Thingy, dyn IThing, Thing1>()
            .add_keyed_singleton::<keys::Thingy, dyn IThing, Thing2>();

        let provider = adapter.build(services).expect("build");
        let thing = provider
            .get_required_keyed::<keys::Thingy, dyn IThing>()
            .expect("lookup");

        assert_eq!(thing.name(), "thing2", "{}", adapter.provider_name());
    }
}

#[test]
fn test_try_add_keyed_keeps_first_registration() {
    for adapter in adapters() {
        let mut services = ServiceCollection::new();
        services
            .try_add_keyed::<keys::Thingy, dyn IThing, Thing1>(Lifetime::Singleton)
            .try_add_keyed::<keys::Thingy, dyn IThing, Thing2>(Lifetime::Singleton)
            .try_add_keyed_factory::<keys::Thingy, dyn IThing, _>(Lifetime::Transient, |_| {
                Ok(Arc::new(Thing3) as Arc<dyn IThing>)
            });

        let provider = adapter.build(services).expect("build");
        let thing = provider
            .get_required_keyed::<keys::Thingy, dyn IThing>()
            .expect("lookup");

        assert_eq!(thing.name(), "thing1", "{}", adapter.provider_name());
    }
}

#[test]
fn test_try_add_keyed_enumerable_resolves_all_in_order() {
    for adapter in adapters() {
        let mut services = ServiceCollection::new();
        services
            .try_add_keyed_enumerable::<keys::Thingies, dyn IThing, Thing1>(Lifetime::Transient)
            .try_add_keyed_enumerable::<keys::Thingies, dyn IThing, Thing2>(Lifetime::Transient)
            .try_add_keyed_enumerable::<keys::Thingies, dyn IThing, Thing3>(Lifetime::Transient)
            .try_add_keyed_enumerable::<keys::Thingies, dyn IThing, Thing1>(Lifetime::Transient);

        let provider = adapter.build(services).expect("build");
        let things = provider
            .get_all_keyed::<keys::Thingies, dyn IThing>()
            .expect("lookup");

        assert_eq!(
            names(&things),
            vec!["thing1", "thing2", "thing3"],
            "{}",
            adapter.provider_name()
        );
    }
}

#[test]
fn test_resolve_all_for_absent_key_is_empty() {
    for adapter in adapters() {
        let mut services = ServiceCollection::new();
        services.try_add_keyed_enumerable::<keys::Thingies, dyn IThing, Thing1>(Lifetime::Transient);

        let provider = adapter.build(services).expect("build");
        let things = provider.get_all_keyed::<keys::Thingy, dyn IThing>().expect("lookup");

        assert!(things.is_empty(), "{}", adapter.provider_name());
    }
}

#[test]
fn test_keyed_dependencies_are_injected_into_consumer() {
    for adapter in adapters() {
        let mut services = ServiceCollection::new();
        services
            .add_keyed_transient::<keys::Thing1, dyn IThing, Thing1>()
            .add_keyed_transient::<keys::Thing2, dyn IThing, Thing2>()
            .add_transient::<CatInTheHat, CatInTheHat>();

        let provider = adapter.build(services).expect("build");
        let cat = provider.get_required::<CatInTheHat>().expect("consumer");

        assert_eq!(cat.thing1.name(), "thing1", "{}", adapter.provider_name());
        assert_eq!(cat.thing2.name(), "thing2", "{}", adapter.provider_name());
    }
}

#[test]
fn test_consumer_with_missing_keyed_dependency_fails() {
    for adapter in adapters() {
        let mut services = ServiceCollection::new();
        services
            .add_keyed_transient::<keys::Thing1, dyn IThing, Thing1>()
            .add_transient::<CatInTheHat, CatInTheHat>();

        let provider = adapter.build(services).expect("build");
        let err = provider.get::<CatInTheHat>().err().expect("Thing2 missing");

        assert!(err.is_not_found(), "{}: {err}", adapter.provider_name());
    }
}

#[test]
fn test_untyped_keyed_lookup() {
    use keyed_domain::{TypeIdentity, downcast_instance};

    for adapter in adapters() {
        let mut services = ServiceCollection::new();
        services.add_keyed_singleton::<keys::Thingy, dyn IThing, KeyedThing>();

        let provider = adapter.build(services).expect("build");
        let instance = provider
            .get_required_keyed_service(
                TypeIdentity::of::<dyn IThing>(),
                TypeIdentity::of::<keys::Thingy>(),
            )
            .expect("lookup");

        let thing = downcast_instance::<dyn IThing>(&instance).expect("payload");
        assert_eq!(thing.name(), "keyed", "{}", adapter.provider_name());
    }
}

#[test]
fn test_keys_sharing_a_type_name_stay_distinct() {
    type Lookup = fn(&dyn ServiceProvider) -> &'static str;

    for adapter in adapters() {
        let mut services = ServiceCollection::new();
        let first: Lookup = {
            struct Key;
            services.add_keyed_singleton::<Key, dyn IThing, Thing1>();
            thing_under::<Key>
        };
        let second: Lookup = {
            struct Key;
            services.add_keyed_singleton::<Key, dyn IThing, Thing2>();
            thing_under::<Key>
        };

        let provider = adapter.build(services).expect("build");

        assert_eq!(first(&*provider), "thing1", "{}", adapter.provider_name());
        assert_eq!(second(&*provider), "thing2", "{}", adapter.provider_name());
    }
}
