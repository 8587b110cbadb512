//! Per-request rewriting of the simulator host stylesheet.
//!
//! The stylesheet is streamed through a [`Pipeline`] of incremental text
//! stages chosen from the requesting browser: conditional comment blocks are
//! stripped, shadow-DOM selector syntax is removed for non-Chrome browsers,
//! and `var(--...)` references are replaced with concrete values.

pub mod browser;
pub mod filter;
pub mod pipeline;
pub mod stage;
pub mod stream;
pub mod variables;

pub use browser::Browser;
pub use filter::transform_for_request;
pub use pipeline::Pipeline;
pub use stage::{LiteralReplace, StripBlocks, TextStage};
pub use stream::transform_stream;
pub use variables::{builtin_variables, CssVariableTable};
