//! Ordered composition of text stages.

use crate::stage::TextStage;

/// Stages applied in insertion order, each seeing the previous one's output.
///
/// Byte input is decoded incrementally: a UTF-8 sequence split across chunks
/// is carried over until complete, and invalid bytes become U+FFFD.
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn TextStage>>,
    carry: Vec<u8>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage after every stage added so far.
    pub fn push(mut self, stage: impl TextStage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run a text chunk through every stage.
    pub fn feed(&mut self, chunk: &str) -> String {
        let mut text = chunk.to_string();
        for stage in &mut self.stages {
            if text.is_empty() {
                break;
            }
            text = stage.feed(&text);
        }
        text
    }

    /// Decode a byte chunk and run it through every stage.
    pub fn feed_bytes(&mut self, chunk: &[u8]) -> String {
        self.carry.extend_from_slice(chunk);
        let split = incomplete_tail_start(&self.carry);
        let tail = self.carry.split_off(split);
        let text = String::from_utf8_lossy(&self.carry).into_owned();
        self.carry = tail;
        self.feed(&text)
    }

    /// Flush every stage in order; earlier flushes feed later stages.
    pub fn finish(&mut self) -> String {
        let mut text = String::from_utf8_lossy(&self.carry).into_owned();
        self.carry.clear();

        for stage in &mut self.stages {
            let mut out = stage.feed(&text);
            out.push_str(&stage.finish());
            text = out;
        }
        text
    }

    /// Process a complete text in one go.
    pub fn apply(mut self, text: &str) -> String {
        let mut out = self.feed(text);
        out.push_str(&self.finish());
        out
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .field("carry", &self.carry.len())
            .finish()
    }
}

/// Start of a trailing UTF-8 sequence that is still missing bytes.
fn incomplete_tail_start(bytes: &[u8]) -> usize {
    let len = bytes.len();
    for back in 1..=len.min(3) {
        let byte = bytes[len - back];
        if byte & 0b1100_0000 == 0b1000_0000 {
            continue;
        }
        let needed = match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };
        return if needed > back { len - back } else { len };
    }
    len
}
