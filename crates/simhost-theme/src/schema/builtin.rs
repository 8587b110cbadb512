//! Schema of the built-in simulator host UI.

use serde_json::json;
use simhost_common::{theme_table, ThemeProperties, DEFAULT_ELEMENT, STATELESS};

use super::sizing::scaled_sizes_css;
use super::ThemeSchema;
use crate::resolve::ResolvedTheme;

const SIZES_CSS: &str = include_str!("../../../../assets/sim-host/sim-host-sizes.css");

const UI_FONT_FAMILY: &str = r#""Helvetica Neue", "Roboto", "Segoe UI", sans-serif"#;

const ELEMENT_SELECTORS: &[(&str, &str)] = &[
    (
        DEFAULT_ELEMENT,
        "body, body /deep/ p, body /deep/ .p, body /deep/ input[type^=range]",
    ),
    (
        "input",
        "cordova-combo /deep/ select, body /deep/ textarea, body /deep/ input[type^=text], \
         body /deep/ input[type^=number], input[type^=number]",
    ),
    ("button", "cordova-button /deep/ button"),
    ("label", "body /deep/ label"),
    ("value", "body /deep/ .cordova-value"),
    ("panel", "body /deep/ .cordova-panel-inner"),
    ("panel-caption", "body /deep/ .cordova-header"),
];

/// The built-in host's element selectors, defaults and size scaling.
///
/// Construct once at startup and share; the tables never change.
#[derive(Debug, Clone)]
pub struct DefaultSchema {
    selectors: Vec<(String, String)>,
    defaults: ThemeProperties,
}

impl DefaultSchema {
    pub fn new() -> Self {
        let selectors = ELEMENT_SELECTORS
            .iter()
            .map(|(element, selector)| (element.to_string(), selector.to_string()))
            .collect();

        Self {
            selectors,
            defaults: default_properties(),
        }
    }
}

impl Default for DefaultSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeSchema for DefaultSchema {
    fn element_selectors(&self) -> &[(String, String)] {
        &self.selectors
    }

    fn default_properties(&self) -> &ThemeProperties {
        &self.defaults
    }

    fn custom_css(&self, resolved: &ResolvedTheme) -> Option<String> {
        Some(scaled_sizes_css(SIZES_CSS, resolved))
    }

    fn fingerprint(&self) -> serde_json::Value {
        json!({
            "elementSelectors": self.selectors,
            "defaultProperties": self.defaults,
            "scaledStylesheet": SIZES_CSS,
        })
    }
}

fn default_properties() -> ThemeProperties {
    theme_table(&[
        (
            DEFAULT_ELEMENT,
            &[(
                STATELESS,
                &[
                    ("font-family", UI_FONT_FAMILY),
                    ("font-size", "13px"),
                    ("font-weight", "normal"),
                ],
            )],
        ),
        (
            "input",
            &[
                (
                    STATELESS,
                    &[
                        ("font-family", UI_FONT_FAMILY),
                        ("font-size", "13px"),
                        ("font-weight", "normal"),
                        ("color", "black"),
                        ("background", "#ffffff"),
                        ("border", "1px solid #d3d3d3"),
                    ],
                ),
                (
                    "hover",
                    &[
                        ("color", "#212121"),
                        ("background", "#ffffff"),
                        ("border", "1px solid #CCCCCC"),
                    ],
                ),
            ],
        ),
        (
            "button",
            &[
                (
                    STATELESS,
                    &[
                        ("font-family", UI_FONT_FAMILY),
                        ("font-size", "13px"),
                        ("font-weight", "normal"),
                        ("color", "black"),
                        ("background", "#ffffff"),
                        ("border", "1px solid #d3d3d3"),
                    ],
                ),
                (
                    "active",
                    &[
                        ("color", "#212121"),
                        ("background", "#ffffff"),
                        ("border", "1px solid #CCCCCC"),
                    ],
                ),
            ],
        ),
        (
            "label",
            &[(
                STATELESS,
                &[
                    ("font-family", UI_FONT_FAMILY),
                    ("font-size", "13px"),
                    ("font-weight", "normal"),
                    ("color", "rgba(0,0,0,0.95)"),
                ],
            )],
        ),
        (
            "value",
            &[(
                STATELESS,
                &[
                    ("font-family", UI_FONT_FAMILY),
                    ("font-size", "13px"),
                    ("font-weight", "normal"),
                    ("color", "black"),
                ],
            )],
        ),
        (
            "panel",
            &[(
                STATELESS,
                &[
                    ("border", "1px solid rgba(0, 0, 0, 0.785)"),
                    ("background", "rgba(255,255,255,0.97)"),
                ],
            )],
        ),
        (
            "panel-caption",
            &[(
                STATELESS,
                &[
                    ("background-color", "black"),
                    ("opacity", "0.7"),
                    ("color", "rgb(204,204,204)"),
                    ("font-size", "13px"),
                    ("text-transform", "uppercase"),
                    ("font-weight", "bold"),
                ],
            )],
        ),
    ])
}
