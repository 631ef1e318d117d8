//! Name lookup for indirection holders

use keyed_application::visitor::KeyedAccessor;
use keyed_application::{KeyEncoding, StringKey};
use keyed_domain::constants::{INDIRECTION_ARITY, INDIRECTION_IMPL_ARITY};
use keyed_domain::{Error, Instance, KeyedType, Result, ServiceProvider};

use crate::container::Scope;

/// Accessor replacing `Keyed<K, S>`
pub struct NamedKey2;

/// Accessor replacing `KeyedImpl<K, S, I>`
pub struct NamedKey3;

impl KeyedAccessor for NamedKey2 {
    const ARITY: usize = INDIRECTION_ARITY;

    fn resolve(provider: &dyn ServiceProvider, target: &KeyedType) -> Result<Option<Instance>> {
        resolve_by_name(provider, target)
    }
}

impl KeyedAccessor for NamedKey3 {
    const ARITY: usize = INDIRECTION_IMPL_ARITY;

    fn resolve(provider: &dyn ServiceProvider, target: &KeyedType) -> Result<Option<Instance>> {
        resolve_by_name(provider, target)
    }
}

fn resolve_by_name(provider: &dyn ServiceProvider, target: &KeyedType) -> Result<Option<Instance>> {
    let scope = provider
        .downcast_ref::<Scope<String>>()
        .ok_or_else(|| Error::not_supported("Named holders must be resolved by a name-keyed container"))?;

    scope.resolve_keyed(&target.wrapped().into(), &StringKey::encode(target))
}
