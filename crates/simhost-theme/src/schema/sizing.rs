//! Font-size driven scaling of host layout metrics.
//!
//! Hosts ship a stylesheet of panel and control sizes tuned for a 13px base
//! font. When a theme changes the base font size, every pixel value in that
//! stylesheet is scaled by the same ratio.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use simhost_common::{PropertyMap, DEFAULT_ELEMENT, STATELESS};

use crate::resolve::ResolvedTheme;

/// Font size the sizing stylesheets are authored against.
pub const BASELINE_FONT_SIZE: f64 = 13.0;

/// Size assumed when the theme's font size is missing or unparseable.
pub const FALLBACK_FONT_SIZE: f64 = 16.0;

static FONT_SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+)px\b|\b(\d+)pt\b|\b(\d+)em\b").unwrap());

static PIXEL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d+)px\b").unwrap());

/// Parse a font size in pixels from `font-size` (or the `font` shorthand).
///
/// The first `px`, `pt` or `em` length wins; points convert at 96/72 and
/// ems at 16px.
pub fn parse_font_size(props: &PropertyMap) -> Option<f64> {
    let value = props
        .get("font-size")
        .filter(|v| !v.is_empty())
        .or_else(|| props.get("font"))?;

    let caps = FONT_SIZE_RE.captures(value)?;
    let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<f64>().ok());

    let size = number(1)
        .or_else(|| number(2).map(|pt| pt * 96.0 / 72.0))
        .or_else(|| number(3).map(|em| em * 16.0))?;
    (size > 0.0).then_some(size)
}

/// The base font size of a resolved theme.
pub fn theme_font_size(resolved: &ResolvedTheme) -> f64 {
    resolved
        .properties(DEFAULT_ELEMENT, STATELESS)
        .and_then(parse_font_size)
        .unwrap_or(FALLBACK_FONT_SIZE)
}

/// Multiply every `Npx` value in `css` by `scale`, rounding to whole pixels.
pub fn scale_pixels(css: &str, scale: f64) -> String {
    PIXEL_RE
        .replace_all(css, |caps: &Captures<'_>| {
            let pixels: f64 = caps[1].parse().unwrap_or(0.0);
            format!("{}px", (pixels * scale).round() as i64)
        })
        .into_owned()
}

/// Scale a sizing stylesheet to the theme's base font size.
pub fn scaled_sizes_css(css: &str, resolved: &ResolvedTheme) -> String {
    let font_size = theme_font_size(resolved);
    if font_size == BASELINE_FONT_SIZE {
        return css.to_string();
    }

    tracing::debug!(font_size, "scaling sizing stylesheet");
    scale_pixels(css, font_size / BASELINE_FONT_SIZE)
}
