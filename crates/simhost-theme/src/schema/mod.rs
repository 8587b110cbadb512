//! Host theme schemas.
//!
//! A schema names the themable elements of a simulator host (with the CSS
//! selectors they map to) and the default properties used when a theme
//! leaves them unset.

mod builtin;
mod file;
pub mod sizing;

pub use builtin::DefaultSchema;
pub use file::FileSchema;

use serde_json::json;
use simhost_common::ThemeProperties;

use crate::resolve::ResolvedTheme;

/// Theme description exported by a simulator host.
pub trait ThemeSchema: Send + Sync {
    /// Element name → CSS selector list, in output order.
    fn element_selectors(&self) -> &[(String, String)];

    /// Defaults for elements the theme leaves unset.
    fn default_properties(&self) -> &ThemeProperties;

    /// Extra CSS appended after the element blocks, derived from the
    /// resolved theme.
    fn custom_css(&self, _resolved: &ResolvedTheme) -> Option<String> {
        None
    }

    /// Everything that determines the generated CSS, hashed into the cache
    /// filename.
    fn fingerprint(&self) -> serde_json::Value {
        json!({
            "elementSelectors": self.element_selectors(),
            "defaultProperties": self.default_properties(),
        })
    }
}
