mod error;
mod loader;
pub mod types;
mod validation;


pub use error::ConfigError;
pub use loader::{CONFIG_FILE_NAME, load_config, parse_config};
pub use types::{MetricsKind, TunnelGateConfig, TunnelLimitConfig};
pub use validation::{ValidatedConfig, ValidationIssue, ValidationReport, validate_config};
