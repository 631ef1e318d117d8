//! Key encodings
//!
//! Target registries differ in the keying primitive they accept. A
//! [`KeyEncoding`] projects a composite identity onto that primitive.
//!
//! | Encoding | Native key | Used by |
//! |----------|------------|---------|
//! | [`IdentityKey`] | [`KeyedType`] | Registries keyed by arbitrary identities |
//! | [`StringKey`] | `String` | Registries keyed by name only |

use std::fmt::Debug;
use std::hash::{Hash, Hasher};

use keyed_domain::KeyedType;
use keyed_domain::constants::STRING_KEY_FINGERPRINT_SEPARATOR;
use seahash::SeaHasher;

/// Projection of a composite identity onto a registry's native key
///
/// Equal composite identities always encode to equal keys and unequal
/// ones to unequal keys.
pub trait KeyEncoding: Send + Sync + 'static {
    /// The native key primitive
    type Key: Clone + Eq + Hash + Debug + Send + Sync + 'static;

    /// Encode `keyed` as a native key
    fn encode(keyed: &KeyedType) -> Self::Key;
}

/// The composite identity is itself the key
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityKey;

impl KeyEncoding for IdentityKey {
    type Key = KeyedType;

    fn encode(keyed: &KeyedType) -> Self::Key {
        *keyed
    }
}

/// Canonical `Key+Service#fingerprint` text
///
/// Type names are not unique (two block-local `struct Key;` share one), so
/// the names are followed by a hash of both runtime type ids. The key is
/// only stable within one process.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringKey;

impl StringKey {
    /// Hash of the `(key, wrapped)` type ids
    pub fn fingerprint(keyed: &KeyedType) -> u64 {
        let mut hasher = SeaHasher::new();
        keyed.hash(&mut hasher);
        hasher.finish()
    }
}

impl KeyEncoding for StringKey {
    type Key = String;

    fn encode(keyed: &KeyedType) -> Self::Key {
        format!(
            "{}{}{:016x}",
            keyed.qualified_name(),
            STRING_KEY_FINGERPRINT_SEPARATOR,
            Self::fingerprint(keyed)
        )
    }
}
