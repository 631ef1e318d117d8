//! Replays keyed buckets as natively keyed bindings

use keyed_application::visitor::KeyedServiceVisitor;
use keyed_application::{IdentityKey, KeyEncoding};
use keyed_domain::{KeyedType, Result, ServiceDescriptor};
use tracing::debug;

use super::accessor::{TypeKeyedKey2, TypeKeyedKey3};
use crate::container::{ContainerBuilder, Reuse};

/// Visitor registering keyed buckets under their composite identity
pub struct TypeKeyedServiceVisitor<'a> {
    builder: &'a mut ContainerBuilder<KeyedType>,
}

impl<'a> TypeKeyedServiceVisitor<'a> {
    /// Visitor writing into `builder`
    pub fn new(builder: &'a mut ContainerBuilder<KeyedType>) -> Self {
        Self { builder }
    }
}

impl KeyedServiceVisitor for TypeKeyedServiceVisitor<'_> {
    type Keyed2 = TypeKeyedKey2;
    type Keyed3 = TypeKeyedKey3;

    fn visit_interface(&mut self, descriptor: ServiceDescriptor) -> Result<()> {
        let reuse = Reuse::from_lifetime(descriptor.lifetime());
        self.builder.register_descriptor(descriptor, None, reuse);
        Ok(())
    }

    fn visit_service(&mut self, key: KeyedType, descriptor: ServiceDescriptor) -> Result<()> {
        let native = IdentityKey::encode(&key);
        debug!(key = ?native, service = %descriptor.service_type(), "Binding type-keyed service");

        let reuse = Reuse::from_lifetime(descriptor.lifetime());
        self.builder.register_descriptor(descriptor, Some(native), reuse);
        Ok(())
    }
}
