//! Type identities
//!
//! Registries in this workspace only understand one dimension: the identity
//! of a type. A [`KeyedType`] entangles a second type (the key) with the
//! wrapped service type so that a `(key, service)` pair can travel through
//! such a registry while still looking like the plain service type to any
//! code that is unaware of keys.
//!
//! ```text
//! TypeIdentity(IThing)            ServiceType::Type
//! KeyedType(Thingy, IThing)       ServiceType::Keyed      == IThing for TypeInfo
//! IndirectionType(Thingy, IThing) ServiceType::Indirection
//! ```

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::constants::STRING_KEY_SEPARATOR;

/// Reflective contract shared by every identity that can stand in for a type
pub trait TypeInfo {
    /// Runtime identifier of the type
    fn id(&self) -> TypeId;

    /// Fully qualified type name (module path included)
    fn full_name(&self) -> &'static str;

    /// Unqualified type name, generic arguments included
    fn name(&self) -> &'static str {
        short_name(self.full_name())
    }

    /// Module path of the type, if it has one
    fn namespace(&self) -> Option<&'static str> {
        namespace_of(self.full_name())
    }

    /// Whether a value of `other` may be used where `self` is expected
    fn is_assignable_from(&self, other: &dyn TypeInfo) -> bool {
        self.id() == other.id()
    }
}

/// Opaque, comparable identity of a Rust type
#[derive(Clone, Copy)]
pub struct TypeIdentity {
    id: TypeId,
    name: &'static str,
}

impl TypeIdentity {
    /// Identity of `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Runtime identifier of the type
    pub fn type_id(&self) -> TypeId {
        self.id
    }
}

impl TypeInfo for TypeIdentity {
    fn id(&self) -> TypeId {
        self.id
    }

    fn full_name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeIdentity {}

impl Hash for TypeIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Debug for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Composite identity: a service type carrying a key type on the side
///
/// Equality and hashing cover the `(key, wrapped)` pair. Compared against a
/// bare [`TypeIdentity`], a keyed type degrades to comparing `wrapped` only,
/// and every [`TypeInfo`] query answers exactly as `wrapped` would.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyedType {
    key: TypeIdentity,
    wrapped: TypeIdentity,
}

impl KeyedType {
    /// Entangle `key` with `wrapped`
    pub fn create(key: TypeIdentity, wrapped: TypeIdentity) -> Self {
        Self { key, wrapped }
    }

    /// Keyed identity of `T` under the key type `K`
    pub fn of<K: ?Sized + 'static, T: ?Sized + 'static>() -> Self {
        Self::create(TypeIdentity::of::<K>(), TypeIdentity::of::<T>())
    }

    /// The key component
    pub fn key(&self) -> TypeIdentity {
        self.key
    }

    /// The wrapped service type
    pub fn wrapped(&self) -> TypeIdentity {
        self.wrapped
    }

    /// Split into `(key, wrapped)`
    pub fn deconstruct(self) -> (TypeIdentity, TypeIdentity) {
        (self.key, self.wrapped)
    }

    /// Whether `service_type` is a keyed type
    pub fn is_key(service_type: &ServiceType) -> bool {
        matches!(service_type, ServiceType::Keyed(_))
    }

    /// Split a keyed service type into `(key, wrapped)`
    pub fn try_deconstruct(service_type: &ServiceType) -> Option<(TypeIdentity, TypeIdentity)> {
        match service_type {
            ServiceType::Keyed(keyed) => Some(keyed.deconstruct()),
            _ => None,
        }
    }

    /// Canonical text form of both dimensions, `Key+Service`
    pub fn qualified_name(&self) -> String {
        format!(
            "{}{}{}",
            self.key.full_name(),
            STRING_KEY_SEPARATOR,
            self.wrapped.full_name()
        )
    }
}

impl TypeInfo for KeyedType {
    fn id(&self) -> TypeId {
        self.wrapped.id()
    }

    fn full_name(&self) -> &'static str {
        self.wrapped.full_name()
    }

    fn name(&self) -> &'static str {
        self.wrapped.name()
    }

    fn namespace(&self) -> Option<&'static str> {
        self.wrapped.namespace()
    }

    fn is_assignable_from(&self, other: &dyn TypeInfo) -> bool {
        self.wrapped.is_assignable_from(other)
    }
}

impl PartialEq<TypeIdentity> for KeyedType {
    fn eq(&self, other: &TypeIdentity) -> bool {
        self.wrapped == *other
    }
}

impl PartialEq<KeyedType> for TypeIdentity {
    fn eq(&self, other: &KeyedType) -> bool {
        *self == other.wrapped
    }
}

impl fmt::Display for KeyedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.wrapped, f)
    }
}

impl fmt::Debug for KeyedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedType")
            .field("key", &self.key)
            .field("wrapped", &self.wrapped)
            .finish()
    }
}

/// Identity of the indirection holder for `service` under `key`
///
/// Resolved by ordinary (unkeyed) lookup; the holder performs the keyed
/// lookup when it is constructed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndirectionType {
    key: TypeIdentity,
    service: TypeIdentity,
}

impl IndirectionType {
    /// Indirection of `service` under `key`
    pub fn new(key: TypeIdentity, service: TypeIdentity) -> Self {
        Self { key, service }
    }

    /// Indirection of `S` under `K`
    pub fn of<K: ?Sized + 'static, S: ?Sized + 'static>() -> Self {
        Self::new(TypeIdentity::of::<K>(), TypeIdentity::of::<S>())
    }

    /// The key type argument
    pub fn key(&self) -> TypeIdentity {
        self.key
    }

    /// The service type argument
    pub fn service(&self) -> TypeIdentity {
        self.service
    }

    /// The self-keyed composite used to mark this indirection during extraction
    pub fn marker(&self) -> KeyedType {
        KeyedType::create(self.key, self.key)
    }

    /// The composite identity the holder resolves
    pub fn target(&self) -> KeyedType {
        KeyedType::create(self.key, self.service)
    }
}

impl fmt::Display for IndirectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keyed<{}, {}>", self.key.name(), self.service.name())
    }
}

impl fmt::Debug for IndirectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndirectionType")
            .field("key", &self.key)
            .field("service", &self.service)
            .finish()
    }
}

/// The identity a registration is addressed by
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceType {
    /// A plain type
    Type(TypeIdentity),
    /// A composite `(key, service)` identity
    Keyed(KeyedType),
    /// An indirection holder resolved by ordinary lookup
    Indirection(IndirectionType),
}

impl ServiceType {
    /// Plain service type `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::Type(TypeIdentity::of::<T>())
    }

    /// Service `T` keyed by `K`
    pub fn keyed<K: ?Sized + 'static, T: ?Sized + 'static>() -> Self {
        Self::Keyed(KeyedType::of::<K, T>())
    }

    /// Indirection holder of `S` under `K`
    pub fn indirection<K: ?Sized + 'static, S: ?Sized + 'static>() -> Self {
        Self::Indirection(IndirectionType::of::<K, S>())
    }

    /// Drop the key dimension, yielding the type a key-unaware registry sees
    pub fn unkeyed(&self) -> ServiceType {
        match self {
            Self::Keyed(keyed) => Self::Type(keyed.wrapped()),
            other => *other,
        }
    }
}

impl From<TypeIdentity> for ServiceType {
    fn from(identity: TypeIdentity) -> Self {
        Self::Type(identity)
    }
}

impl From<KeyedType> for ServiceType {
    fn from(keyed: KeyedType) -> Self {
        Self::Keyed(keyed)
    }
}

impl From<IndirectionType> for ServiceType {
    fn from(indirection: IndirectionType) -> Self {
        Self::Indirection(indirection)
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(identity) => fmt::Display::fmt(identity, f),
            Self::Keyed(keyed) => f.write_str(&keyed.qualified_name()),
            Self::Indirection(indirection) => fmt::Display::fmt(indirection, f),
        }
    }
}

impl fmt::Debug for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(identity) => f.debug_tuple("Type").field(identity).finish(),
            Self::Keyed(keyed) => f.debug_tuple("Keyed").field(keyed).finish(),
            Self::Indirection(indirection) => {
                f.debug_tuple("Indirection").field(indirection).finish()
            }
        }
    }
}

/// Last path segment of a type name, keeping its generic arguments
pub fn short_name(full_name: &'static str) -> &'static str {
    let head_end = full_name.find('<').unwrap_or(full_name.len());
    match full_name[..head_end].rfind("::") {
        Some(separator) => &full_name[separator + 2..],
        None => full_name,
    }
}

fn namespace_of(full_name: &'static str) -> Option<&'static str> {
    let head_end = full_name.find('<').unwrap_or(full_name.len());
    let head = full_name[..head_end]
        .strip_prefix("dyn ")
        .unwrap_or(&full_name[..head_end]);
    head.rfind("::").map(|separator| &head[..separator])
}
