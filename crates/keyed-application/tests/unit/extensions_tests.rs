//! Tests for keyed registration and resolution methods

use std::sync::Arc;

use keyed_application::accessor::into_holder;
use keyed_application::{
    KeyService, KeyedImpl, KeyedServiceCollectionExt, KeyedServiceProviderExt,
};
use keyed_domain::{
    Lifetime, ServiceCollection, ServiceDescriptor, ServiceType, TypeIdentity,
};

use crate::test_utils::*;

fn service_types(services: &ServiceCollection) -> Vec<ServiceType> {
    services.iter().map(|d| *d.service_type()).collect()
}

#[test]
fn test_add_keyed_registers_target_and_indirection() {
    let mut services = ServiceCollection::new();
    services.add_keyed_singleton::<keys::Thingy, dyn IThing, Thing1>();

    assert_eq!(
        service_types(&services),
        vec![
            ServiceType::keyed::<keys::Thingy, dyn IThing>(),
            ServiceType::indirection::<keys::Thingy, dyn IThing>(),
        ]
    );
    assert_eq!(services.get(0).map(ServiceDescriptor::lifetime), Some(Lifetime::Singleton));
    assert_eq!(services.get(1).map(ServiceDescriptor::lifetime), Some(Lifetime::Transient));
}

#[test]
fn test_repeated_add_keyed_shares_one_indirection() {
    let mut services = ServiceCollection::new();
    services
        .add_keyed_singleton::<keys::Thingy, dyn IThing, Thing1>()
        .add_keyed_transient::<keys::Thingy, dyn IThing, Thing2>()
        .add_keyed_factory::<keys::Thingy, dyn IThing, _>(Lifetime::Scoped, |_| {
            Ok(Arc::new(Thing1) as Arc<dyn IThing>)
        });

    let indirections = services
        .iter()
        .filter(|d| matches!(d.service_type(), ServiceType::Indirection(_)))
        .count();
    assert_eq!(services.len(), 4);
    assert_eq!(indirections, 1);
}

#[test]
fn test_add_keyed_instance_is_singleton() {
    let mut services = ServiceCollection::new();
    services.add_keyed_instance::<keys::Thingy, dyn IThing>(Arc::new(Thing1));

    assert_eq!(services.get(0).map(ServiceDescriptor::lifetime), Some(Lifetime::Singleton));
    assert_eq!(services.len(), 2);
}

#[test]
fn test_try_add_keyed_skips_existing_target() {
    let mut services = ServiceCollection::new();
    services
        .try_add_keyed::<keys::Thingy, dyn IThing, Thing1>(Lifetime::Transient)
        .try_add_keyed::<keys::Thingy, dyn IThing, Thing2>(Lifetime::Transient)
        .try_add_keyed_factory::<keys::Thingy, dyn IThing, _>(Lifetime::Transient, |_| {
            Ok(Arc::new(Thing2) as Arc<dyn IThing>)
        });

    assert_eq!(services.len(), 2);
    assert_eq!(
        services.get(0).and_then(ServiceDescriptor::implementation_identity),
        Some(TypeIdentity::of::<Thing1>())
    );
}

#[test]
fn test_try_add_keyed_scoped_keeps_scoped_indirection() {
    let mut services = ServiceCollection::new();
    services.try_add_keyed::<keys::Thingy, dyn IThing, Thing1>(Lifetime::Scoped);

    assert_eq!(services.get(1).map(ServiceDescriptor::lifetime), Some(Lifetime::Scoped));
}

#[test]
fn test_try_add_keyed_enumerable_addresses_each_implementation() {
    let mut services = ServiceCollection::new();
    services
        .try_add_keyed_enumerable::<keys::Thingies, dyn IThing, Thing1>(Lifetime::Singleton)
        .try_add_keyed_enumerable::<keys::Thingies, dyn IThing, Thing2>(Lifetime::Singleton)
        .try_add_keyed_enumerable::<keys::Thingies, dyn IThing, Thing1>(Lifetime::Singleton);

    assert_eq!(
        service_types(&services),
        vec![
            ServiceType::keyed::<keys::Thingies, Thing1>(),
            ServiceType::indirection::<keys::Thingies, dyn IThing>(),
            ServiceType::keyed::<keys::Thingies, Thing2>(),
            ServiceType::indirection::<keys::Thingies, dyn IThing>(),
        ]
    );
    assert_eq!(
        services.get(3).and_then(ServiceDescriptor::implementation_identity),
        Some(TypeIdentity::of::<KeyedImpl<keys::Thingies, dyn IThing, Thing2>>())
    );
}

#[test]
fn test_provider_keyed_lookups() {
    let first: Arc<dyn IThing> = Arc::new(Thing1);
    let second: Arc<dyn IThing> = Arc::new(Thing2);
    let indirection = ServiceType::indirection::<keys::Thingies, dyn IThing>();
    let provider = MapProvider::new()
        .with(indirection, into_holder(KeyService::of::<keys::Thingies, dyn IThing>(first.clone())))
        .with(indirection, into_holder(KeyService::of::<keys::Thingies, dyn IThing>(second.clone())));

    let single = provider
        .get_keyed::<keys::Thingies, dyn IThing>()
        .expect("lookup")
        .expect("registered");
    let all = provider
        .get_all_keyed::<keys::Thingies, dyn IThing>()
        .expect("lookup");
    let absent = provider.get_keyed::<keys::Thingy, dyn IThing>().expect("lookup");

    assert!(Arc::ptr_eq(&single, &second));
    assert_eq!(all.len(), 2);
    assert!(Arc::ptr_eq(&all[0], &first));
    assert!(absent.is_none());
}

#[test]
fn test_required_keyed_lookup_names_key_and_service() {
    let err = MapProvider::new()
        .get_required_keyed::<keys::Thingy, dyn IThing>()
        .err()
        .expect("missing");

    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        "No service of type IThing with key Thingy could be found."
    );
}
