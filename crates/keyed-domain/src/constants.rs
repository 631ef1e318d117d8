//! Domain constants

/// Separator between the key and service names in a string key
pub const STRING_KEY_SEPARATOR: &str = "+";

/// Separator between the names and the type-id fingerprint in a string key
pub const STRING_KEY_FINGERPRINT_SEPARATOR: &str = "#";

/// Number of type arguments of a plain indirection holder (`Keyed<K, S>`)
pub const INDIRECTION_ARITY: usize = 2;

/// Number of type arguments of an implementation-pinned holder (`KeyedImpl<K, S, I>`)
pub const INDIRECTION_IMPL_ARITY: usize = 3;
