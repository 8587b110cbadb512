//! Schemas read from a sim host's `theme.json`.
//!
//! ```json
//! {
//!   "elementSelectors": { "default": "body", "button": "button" },
//!   "defaultProperties": { "default": { "": { "font-size": "13px" } } },
//!   "scaledStylesheet": "sim-host-sizes.css"
//! }
//! ```
//!
//! Element order in the generated CSS follows `elementSelectors` as written.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::json;
use simhost_common::{ThemeError, ThemeProperties};

use super::sizing::scaled_sizes_css;
use super::ThemeSchema;
use crate::resolve::ResolvedTheme;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SchemaFile {
    #[serde(deserialize_with = "ordered_selectors")]
    element_selectors: Vec<(String, String)>,
    #[serde(default)]
    default_properties: ThemeProperties,
    #[serde(default)]
    scaled_stylesheet: Option<PathBuf>,
}

/// A theme schema loaded from disk.
#[derive(Debug, Clone)]
pub struct FileSchema {
    path: PathBuf,
    selectors: Vec<(String, String)>,
    defaults: ThemeProperties,
    sizes_css: Option<String>,
}

impl FileSchema {
    /// Read and parse a schema file. A `scaledStylesheet` path is resolved
    /// relative to the schema file and read eagerly.
    pub async fn load(path: &Path) -> Result<Self, ThemeError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ThemeError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let file: SchemaFile = serde_json::from_str(&content)
            .map_err(|e| ThemeError::Schema(format!("{}: {e}", path.display())))?;

        let sizes_css = match file.scaled_stylesheet {
            Some(relative) => {
                let sizes_path = path.parent().unwrap_or(Path::new(".")).join(relative);
                let css = tokio::fs::read_to_string(&sizes_path).await;
                Some(css.map_err(|source| ThemeError::Read {
                    path: sizes_path,
                    source,
                })?)
            }
            None => None,
        };

        tracing::info!(
            path = %path.display(),
            elements = file.element_selectors.len(),
            "loaded theme schema"
        );

        Ok(Self {
            path: path.to_path_buf(),
            selectors: file.element_selectors,
            defaults: file.default_properties,
            sizes_css,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeSchema for FileSchema {
    fn element_selectors(&self) -> &[(String, String)] {
        &self.selectors
    }

    fn default_properties(&self) -> &ThemeProperties {
        &self.defaults
    }

    fn custom_css(&self, resolved: &ResolvedTheme) -> Option<String> {
        self.sizes_css
            .as_deref()
            .map(|css| scaled_sizes_css(css, resolved))
    }

    fn fingerprint(&self) -> serde_json::Value {
        json!({
            "elementSelectors": self.selectors,
            "defaultProperties": self.defaults,
            "scaledStylesheet": self.sizes_css,
        })
    }
}

/// Deserialize a JSON object into `(key, value)` pairs in document order.
fn ordered_selectors<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PairsVisitor;

    impl<'de> Visitor<'de> for PairsVisitor {
        type Value = Vec<(String, String)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of element names to CSS selectors")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((element, selector)) = map.next_entry::<String, String>()? {
                pairs.push((element, selector));
            }
            Ok(pairs)
        }
    }

    deserializer.deserialize_map(PairsVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn load_keeps_selector_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "theme.json",
            r#"{
                "elementSelectors": { "zeta": ".z", "default": "body", "alpha": ".a" },
                "defaultProperties": { "default": { "": { "font-size": "13px" } } }
            }"#,
        );

        let schema = FileSchema::load(&path).await.unwrap();
        let names: Vec<&str> = schema
            .element_selectors()
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(names, ["zeta", "default", "alpha"]);
        assert_eq!(schema.default_properties()["default"][""]["font-size"], "13px");
    }

    #[tokio::test]
    async fn load_reads_scaled_stylesheet_relative_to_schema() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "sizes.css", ".p { padding: 13px; }");
        let path = write(
            dir.path(),
            "theme.json",
            r#"{ "elementSelectors": { "default": "body" }, "scaledStylesheet": "sizes.css" }"#,
        );

        let schema = FileSchema::load(&path).await.unwrap();
        let css = schema.custom_css(&ResolvedTheme::default()).unwrap();
        // No resolved font size: falls back to 16px.
        assert_eq!(css, ".p { padding: 16px; }");
    }

    #[tokio::test]
    async fn missing_selectors_is_schema_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "theme.json", r#"{ "defaultProperties": {} }"#);
        assert!(matches!(
            FileSchema::load(&path).await.unwrap_err(),
            ThemeError::Schema(_)
        ));
    }

    #[tokio::test]
    async fn missing_scaled_stylesheet_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "theme.json",
            r#"{ "elementSelectors": {}, "scaledStylesheet": "nope.css" }"#,
        );
        assert!(matches!(
            FileSchema::load(&path).await.unwrap_err(),
            ThemeError::Read { .. }
        ));
    }

    #[tokio::test]
    async fn no_scaled_stylesheet_means_no_custom_css() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "theme.json", r#"{ "elementSelectors": {} }"#);
        let schema = FileSchema::load(&path).await.unwrap();
        assert!(schema.custom_css(&ResolvedTheme::default()).is_none());
    }
}
