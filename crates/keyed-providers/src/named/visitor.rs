//! Replays keyed buckets as named bindings

use keyed_application::visitor::KeyedServiceVisitor;
use keyed_application::{KeyEncoding, StringKey};
use keyed_domain::{KeyedType, Result, ServiceDescriptor};
use tracing::debug;

use super::accessor::{NamedKey2, NamedKey3};
use super::named_reuse;
use crate::container::ContainerBuilder;

/// Visitor registering keyed buckets under their `Key+Service` name
pub struct NamedServiceVisitor<'a> {
    builder: &'a mut ContainerBuilder<String>,
}

impl<'a> NamedServiceVisitor<'a> {
    /// Visitor writing into `builder`
    pub fn new(builder: &'a mut ContainerBuilder<String>) -> Self {
        Self { builder }
    }
}

impl KeyedServiceVisitor for NamedServiceVisitor<'_> {
    type Keyed2 = NamedKey2;
    type Keyed3 = NamedKey3;

    fn visit_interface(&mut self, descriptor: ServiceDescriptor) -> Result<()> {
        let reuse = named_reuse(descriptor.lifetime());
        self.builder.register_descriptor(descriptor, None, reuse);
        Ok(())
    }

    fn visit_service(&mut self, key: KeyedType, descriptor: ServiceDescriptor) -> Result<()> {
        let name = StringKey::encode(&key);
        debug!(name = %name, "Binding named service");

        let reuse = named_reuse(descriptor.lifetime());
        self.builder.register_descriptor(descriptor, Some(name), reuse);
        Ok(())
    }
}
