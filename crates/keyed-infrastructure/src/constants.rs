//! Infrastructure constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "keyed.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "keyed";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "KEYED";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Container adapter used when none is configured
pub const DEFAULT_CONTAINER_PROVIDER: &str = "default";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "KEYED_LOG";

/// File name stem for rolling log files
pub const LOG_FILE_STEM: &str = "keyed";
