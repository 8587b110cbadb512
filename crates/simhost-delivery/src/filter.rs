//! Browser-specific stylesheet rewriting.

use crate::browser::Browser;
use crate::pipeline::Pipeline;
use crate::stage::{LiteralReplace, StripBlocks};
use crate::variables::CssVariableTable;

/// Marker label for blocks only Chrome should see.
pub const CHROME_ONLY: &str = "CHROME";

/// Marker label for blocks Chrome should not see.
pub const NOT_CHROME: &str = "!CHROME";

/// Shadow-DOM selector syntax replaced by a space for other browsers.
pub const SHADOW_TOKENS: [&str; 7] = [
    "^",
    "/shadow/",
    "/shadow-deep/",
    "::shadow",
    "/deep/",
    "::content",
    ">>>",
];

/// Build the rewrite pipeline for a request with `user_agent`.
///
/// Marker blocks are stripped first, then selectors are rewritten, then
/// variables substituted.
pub fn transform_for_request(user_agent: Option<&str>, variables: &CssVariableTable) -> Pipeline {
    let browser = Browser::classify(user_agent);
    tracing::debug!(?browser, "building stylesheet pipeline");

    let pipeline = match browser {
        Browser::Chrome => Pipeline::new().push(StripBlocks::marked(NOT_CHROME)),
        Browser::Other => Pipeline::new()
            .push(StripBlocks::marked(CHROME_ONLY))
            .push(LiteralReplace::new().rule("> ::content >", ">"))
            .push(LiteralReplace::new().any_of(&SHADOW_TOKENS, " ")),
    };

    pipeline.push(variables.substitution_stage())
}
