//! simhost configuration.
//!
//! TOML-based configuration for the stylesheet server. Every section uses
//! serde defaults, so a partial (or empty) file works out of the box.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{LoggingConfig, ServerConfig, SimHostConfig, SimhostConfig, ThemeConfig};
pub use toml_loader::{create_default_config, default_config_path, load_default, load_from_path};
pub use validation::validate;
