//! Theme resolution for the simulator host UI.
//!
//! Merges an optional user theme with the host's schema defaults, renders
//! the flattened result as CSS and caches it under a content-hashed filename.

pub mod css;
pub mod hash;
pub mod host;
pub mod input;
pub mod resolve;
pub mod resolver;
pub mod schema;

pub use css::{format_selector, generate_css, render_css};
pub use hash::content_hash;
pub use host::SimHost;
pub use input::{ThemeInput, ThemeOverride};
pub use resolve::{resolve_theme, ResolvedElement, ResolvedTheme};
pub use resolver::ThemeResolver;
pub use schema::{DefaultSchema, FileSchema, ThemeSchema};
