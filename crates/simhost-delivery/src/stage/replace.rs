use std::collections::HashMap;

use super::{floor_char_boundary, TextStage};

/// Replaces literal needles, leftmost match first.
///
/// When several needles match at the same position the one added first wins.
/// Replacement output is never rescanned.
#[derive(Debug, Clone, Default)]
pub struct LiteralReplace {
    rules: Vec<(String, String)>,
    /// Rule indices keyed by the needle's first byte, in insertion order.
    by_first_byte: HashMap<u8, Vec<usize>>,
    holdback: usize,
    pending: String,
}

impl LiteralReplace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule. Empty needles are ignored.
    pub fn rule(mut self, needle: impl Into<String>, replacement: impl Into<String>) -> Self {
        let needle = needle.into();
        if needle.is_empty() {
            return self;
        }
        self.holdback = self.holdback.max(needle.len() - 1);
        self.by_first_byte
            .entry(needle.as_bytes()[0])
            .or_default()
            .push(self.rules.len());
        self.rules.push((needle, replacement.into()));
        self
    }

    /// Replace every needle in `needles` with the same text.
    pub fn any_of(self, needles: &[&str], replacement: &str) -> Self {
        needles
            .iter()
            .fold(self, |stage, needle| stage.rule(*needle, replacement))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Leftmost match starting in `from..to` as (offset, rule index).
    ///
    /// Needles are valid UTF-8, so a match can only start on a char boundary.
    fn find(&self, text: &str, from: usize, to: usize) -> Option<(usize, usize)> {
        let bytes = text.as_bytes();
        (from..to).find_map(|at| {
            let candidates = self.by_first_byte.get(&bytes[at])?;
            candidates
                .iter()
                .copied()
                .find(|&index| bytes[at..].starts_with(self.rules[index].0.as_bytes()))
                .map(|index| (at, index))
        })
    }

    fn process(&mut self, last: bool) -> String {
        let len = self.pending.len();
        // A match starting before `limit` is complete whatever follows.
        let limit = if last {
            len
        } else {
            floor_char_boundary(&self.pending, len.saturating_sub(self.holdback))
        };

        let mut out = String::with_capacity(len);
        let mut pos = 0;
        while let Some((start, index)) = self.find(&self.pending, pos, limit) {
            let (needle, replacement) = &self.rules[index];
            out.push_str(&self.pending[pos..start]);
            out.push_str(replacement);
            pos = start + needle.len();
        }

        let emit_to = limit.max(pos);
        out.push_str(&self.pending[pos..emit_to]);
        self.pending.drain(..emit_to);
        out
    }
}

impl TextStage for LiteralReplace {
    fn feed(&mut self, chunk: &str) -> String {
        if self.rules.is_empty() {
            return chunk.to_string();
        }
        self.pending.push_str(chunk);
        self.process(false)
    }

    fn finish(&mut self) -> String {
        self.process(true)
    }
}
