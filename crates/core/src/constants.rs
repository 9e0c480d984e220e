/// Constants used throughout the kscp codebase

// Recognized configure() options
pub const NAMESPACE_OPTION: &str = "namespace";

// Host properties layout: config.providers.<alias>.param.<option>
pub const PROVIDERS_PREFIX: &str = "config.providers.";
pub const PARAM_SEGMENT: &str = ".param.";

// Environment variable names
pub const KSCP_NAMESPACE_VAR: &str = "KSCP_NAMESPACE";
pub const KSCP_LOG_VAR: &str = "KSCP_LOG";

// Default provider alias when none is given
pub const DEFAULT_PROVIDER_ALIAS: &str = "k8s";

// User-facing validation messages
pub const BLANK_SECRET_NAME_MESSAGE: &str =
    "secretName cannot be null or empty. Review your configuration.";
pub const MISSING_NAMESPACE_MESSAGE: &str = "No namespace specified. Review your configuration.";
