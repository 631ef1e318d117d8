//! Registration extraction
//!
//! Pulls keyed registrations out of a flat [`ServiceCollection`] so a
//! container can bootstrap the remainder natively and replay the keyed
//! buckets with its own primitives.
//!
//! | Registration addressed by | Bucket | Entry |
//! |---------------------------|--------|-------|
//! | `Keyed(K, S)` | `(K, S)` | rewritten to plain `S` |
//! | `Indirection(K, S)` | `(K, K)` marker | unchanged |
//! | anything else | stays in the collection | unchanged |

use indexmap::IndexMap;
use keyed_domain::{KeyedType, ServiceCollection, ServiceDescriptor, ServiceType};
use tracing::{debug, info};

/// Keyed registrations grouped by composite identity, in first-seen order
#[derive(Debug, Clone, Default)]
pub struct KeyedServices {
    buckets: IndexMap<KeyedType, ServiceCollection>,
}

impl KeyedServices {
    /// Append `descriptor` to the bucket for `key`
    pub fn push(&mut self, key: KeyedType, descriptor: ServiceDescriptor) {
        self.buckets.entry(key).or_default().add(descriptor);
    }

    /// Number of buckets
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether no keyed registration was found
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of registrations across all buckets
    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(ServiceCollection::len).sum()
    }

    /// The bucket for `key`
    pub fn get(&self, key: &KeyedType) -> Option<&ServiceCollection> {
        self.buckets.get(key)
    }

    /// Iterate buckets in first-seen order
    pub fn iter(&self) -> indexmap::map::Iter<'_, KeyedType, ServiceCollection> {
        self.buckets.iter()
    }
}

impl IntoIterator for KeyedServices {
    type Item = (KeyedType, ServiceCollection);
    type IntoIter = indexmap::map::IntoIter<KeyedType, ServiceCollection>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

/// Remove keyed registrations from `services` into buckets
///
/// A registration addressed by a composite identity is re-addressed by the
/// wrapped service type and bucketed under the composite. An indirection
/// binding is bucketed under the self-keyed `(K, K)` marker with its own
/// identity intact. Everything else stays in `services`.
///
/// Single forward pass: `services` keeps the relative order of what is
/// left, and each bucket keeps registration order.
pub fn remove_keyed_services(services: &mut ServiceCollection) -> KeyedServices {
    let mut keyed = KeyedServices::default();

    for descriptor in std::mem::take(services) {
        match *descriptor.service_type() {
            ServiceType::Keyed(key) => {
                debug!(key = ?key, "Extracting keyed registration");
                let (_, implementation, lifetime) = descriptor.into_parts();
                keyed.push(
                    key,
                    ServiceDescriptor::from_parts(key.wrapped().into(), implementation, lifetime),
                );
            }
            ServiceType::Indirection(indirection) => {
                debug!(indirection = %indirection, "Extracting indirection binding");
                keyed.push(indirection.marker(), descriptor);
            }
            ServiceType::Type(_) => {
                services.add(descriptor);
            }
        }
    }

    if !keyed.is_empty() {
        info!(
            remaining = services.len(),
            buckets = keyed.len(),
            extracted = keyed.entry_count(),
            "Removed keyed services"
        );
    }

    keyed
}
