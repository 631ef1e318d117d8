//! Adapter constants

/// Registry name of the unkeyed adapter
pub const DEFAULT_CONTAINER_NAME: &str = "default";

/// Registry name of the type-keyed adapter
pub const TYPE_KEYED_CONTAINER_NAME: &str = "type-keyed";

/// Registry name of the name-keyed adapter
pub const NAMED_CONTAINER_NAME: &str = "named";
