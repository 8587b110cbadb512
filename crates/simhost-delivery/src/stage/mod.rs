//! Incremental text stages.
//!
//! A stage consumes text in arbitrary chunks and emits rewritten text as soon
//! as it is certain no later input can change it. Feeding a text in any
//! chunking and then calling [`TextStage::finish`] yields the same output as
//! feeding it whole.

mod replace;
mod strip;

pub use replace::LiteralReplace;
pub use strip::StripBlocks;

/// A streaming text rewrite.
pub trait TextStage: Send {
    /// Consume `chunk`, returning whatever output is now final.
    fn feed(&mut self, chunk: &str) -> String;

    /// Flush held-back input at end of stream.
    fn finish(&mut self) -> String;
}

/// Largest char boundary of `text` at or below `index`.
fn floor_char_boundary(text: &str, index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    let mut index = index;
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}
