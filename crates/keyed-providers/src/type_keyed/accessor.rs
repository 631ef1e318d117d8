//! Native keyed lookup for indirection holders

use keyed_application::visitor::KeyedAccessor;
use keyed_application::{IdentityKey, KeyEncoding};
use keyed_domain::constants::{INDIRECTION_ARITY, INDIRECTION_IMPL_ARITY};
use keyed_domain::{Error, Instance, KeyedType, Result, ServiceProvider};

use crate::container::Scope;

/// Accessor replacing `Keyed<K, S>`
pub struct TypeKeyedKey2;

/// Accessor replacing `KeyedImpl<K, S, I>`
pub struct TypeKeyedKey3;

impl KeyedAccessor for TypeKeyedKey2 {
    const ARITY: usize = INDIRECTION_ARITY;

    fn resolve(provider: &dyn ServiceProvider, target: &KeyedType) -> Result<Option<Instance>> {
        resolve_by_identity(provider, target)
    }
}

impl KeyedAccessor for TypeKeyedKey3 {
    const ARITY: usize = INDIRECTION_IMPL_ARITY;

    fn resolve(provider: &dyn ServiceProvider, target: &KeyedType) -> Result<Option<Instance>> {
        resolve_by_identity(provider, target)
    }
}

fn resolve_by_identity(provider: &dyn ServiceProvider, target: &KeyedType) -> Result<Option<Instance>> {
    let scope = provider
        .downcast_ref::<Scope<KeyedType>>()
        .ok_or_else(|| Error::not_supported("Type-keyed holders must be resolved by a type-keyed container"))?;

    scope.resolve_keyed(&target.wrapped().into(), &IdentityKey::encode(target))
}
