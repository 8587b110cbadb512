use super::{floor_char_boundary, TextStage};

/// Default byte budget for a whole marker block.
pub const DEFAULT_WINDOW: usize = 1024;

/// Removes `begin ... end` marker blocks, markers included.
///
/// Each begin marker pairs with the nearest end marker after it. The block is
/// only removed when it fits within `window` bytes; otherwise the begin
/// marker is left in place and scanning continues after it.
#[derive(Debug, Clone)]
pub struct StripBlocks {
    begin: String,
    end: String,
    window: usize,
    pending: String,
}

impl StripBlocks {
    pub fn new(begin: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            begin: begin.into(),
            end: end.into(),
            window: DEFAULT_WINDOW,
            pending: String::new(),
        }
    }

    /// Strip blocks delimited by `/* BEGIN <label> */` and `/* END <label> */`.
    pub fn marked(label: &str) -> Self {
        Self::new(format!("/* BEGIN {label} */"), format!("/* END {label} */"))
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    fn process(&mut self, last: bool) -> String {
        let len = self.pending.len();
        let mut out = String::with_capacity(len);
        let mut pos = 0;

        loop {
            let Some(offset) = self.pending[pos..].find(self.begin.as_str()) else {
                // No begin marker left; keep a possible partial one.
                let holdback = self.begin.len().saturating_sub(1);
                let safe = if last {
                    len
                } else {
                    floor_char_boundary(&self.pending, len.saturating_sub(holdback))
                };
                let emit_to = safe.max(pos);
                out.push_str(&self.pending[pos..emit_to]);
                self.pending.drain(..emit_to);
                return out;
            };

            let block_start = pos + offset;
            let body_start = block_start + self.begin.len();
            let window_end = floor_char_boundary(&self.pending, block_start + self.window);

            let closing = self.pending[body_start.min(window_end)..window_end]
                .find(self.end.as_str())
                .map(|at| body_start + at + self.end.len());

            match closing {
                Some(block_end) => {
                    out.push_str(&self.pending[pos..block_start]);
                    pos = block_end;
                }
                None if !last && len < block_start + self.window => {
                    // The end marker may still arrive within the window.
                    out.push_str(&self.pending[pos..block_start]);
                    self.pending.drain(..block_start);
                    return out;
                }
                None => {
                    tracing::debug!(marker = %self.begin, "unterminated marker block left in place");
                    out.push_str(&self.pending[pos..body_start]);
                    pos = body_start;
                }
            }
        }
    }
}

impl TextStage for StripBlocks {
    fn feed(&mut self, chunk: &str) -> String {
        self.pending.push_str(chunk);
        self.process(false)
    }

    fn finish(&mut self) -> String {
        self.process(true)
    }
}
