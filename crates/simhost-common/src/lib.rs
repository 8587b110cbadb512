pub mod errors;
pub mod fallback;
pub mod types;

pub use errors::{ConfigError, PlatformError, SimHostError, ThemeError};
pub use fallback::FallbackChain;
pub use types::{
    properties_for, theme_table, PropertyMap, StateMap, ThemeProperties, DEFAULT_ELEMENT,
    ELEMENT_STATES, STATELESS,
};

pub type Result<T> = std::result::Result<T, SimHostError>;
