//! CSS rendering of resolved themes.

use crate::resolve::{resolve_theme, ResolvedTheme};
use crate::schema::ThemeSchema;
use simhost_common::ThemeProperties;

// =============================================================================
// SELECTORS
// =============================================================================

/// Suffix each comma-separated selector with `:state`, one per line.
///
/// The stateless state leaves the selectors unchanged apart from trimming.
pub fn format_selector(selector: &str, state: &str) -> String {
    selector
        .split(',')
        .map(|part| {
            let part = part.trim();
            if state.is_empty() {
                part.to_string()
            } else {
                format!("{part}:{state}")
            }
        })
        .collect::<Vec<_>>()
        .join(",\n")
}

// =============================================================================
// RENDERING
// =============================================================================

/// Render every element/state block, then append `custom_css`.
pub fn render_css(resolved: &ResolvedTheme, custom_css: Option<String>) -> String {
    let mut lines: Vec<String> = Vec::new();

    for element in resolved.elements() {
        for (state, props) in &element.states {
            lines.push(format!("{} {{", format_selector(&element.selector, state)));
            for (name, value) in props {
                lines.push(format!("  {name}: {value};"));
            }
            lines.push("}\n".to_string());
        }
    }

    if let Some(css) = custom_css {
        lines.push(css);
    }

    lines.join("\n")
}

/// Resolve `theme` against `schema` and render the stylesheet.
pub fn generate_css(schema: &dyn ThemeSchema, theme: Option<&ThemeProperties>) -> String {
    let resolved = resolve_theme(schema, theme);
    let custom_css = schema.custom_css(&resolved);
    render_css(&resolved, custom_css)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::DefaultSchema;
    use simhost_common::theme_table;

    #[test]
    fn format_selector_stateless_trims() {
        assert_eq!(format_selector("body,  body p ", ""), "body,\nbody p");
    }

    #[test]
    fn format_selector_suffixes_each_part() {
        assert_eq!(
            format_selector("cordova-combo /deep/ select, body /deep/ textarea", "hover"),
            "cordova-combo /deep/ select:hover,\nbody /deep/ textarea:hover"
        );
    }

    #[test]
    fn render_blocks_are_separated_by_blank_lines() {
        let schema = DefaultSchema::new();
        let theme = theme_table(&[("panel", &[("", &[("border", "none")])])]);
        let css = render_css(&resolve_theme(&schema, Some(&theme)), None);

        assert!(css.starts_with("body,\nbody /deep/ p,"));
        assert!(css.contains("body /deep/ .cordova-panel-inner {\n  background: rgba(255,255,255,0.97);\n  border: none;\n"));
        assert!(css.contains("}\n\ncordova-button /deep/ button {"));
        assert!(css.contains("cordova-button /deep/ button:active {\n  background: #ffffff;\n  border: 1px solid #CCCCCC;\n  color: #212121;\n}"));
    }

    #[test]
    fn custom_css_is_appended_last() {
        let schema = DefaultSchema::new();
        let resolved = resolve_theme(&schema, None);
        let css = render_css(&resolved, Some("/* extra */".into()));
        assert!(css.ends_with("}\n\n/* extra */"));
    }

    #[test]
    fn generate_is_deterministic() {
        let schema = DefaultSchema::new();
        assert_eq!(generate_css(&schema, None), generate_css(&schema, None));
    }

    #[test]
    fn generate_every_element_present() {
        let schema = DefaultSchema::new();
        let css = generate_css(&schema, None);
        for (_, selector) in schema.element_selectors() {
            let first = format_selector(selector, "");
            assert!(css.contains(&first), "missing block for {selector}");
        }
    }

    #[test]
    fn generate_scales_sizes_with_font() {
        let schema = DefaultSchema::new();
        let baseline = generate_css(&schema, None);
        assert!(baseline.contains("height: 28px;"));

        let theme = theme_table(&[("default", &[("", &[("font-size", "26px")])])]);
        let css = generate_css(&schema, Some(&theme));
        assert!(css.contains("height: 56px;"));
        assert!(css.contains("padding: 16px 24px;"));
        assert!(!css.contains("height: 28px;"));
    }
}
