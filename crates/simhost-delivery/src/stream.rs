//! Byte stream adapter for response bodies.

use std::io;

use bytes::Bytes;
use futures_util::{stream, Stream, StreamExt};

use crate::pipeline::Pipeline;

/// Rewrite a byte stream through `pipeline`, chunk by chunk.
///
/// Empty intermediate outputs are skipped; an upstream error is forwarded and
/// ends the stream.
pub fn transform_stream<S>(
    body: S,
    pipeline: Pipeline,
) -> impl Stream<Item = io::Result<Bytes>> + Send
where
    S: Stream<Item = io::Result<Bytes>> + Send + Unpin,
{
    stream::unfold(Some((body, pipeline)), |state| async move {
        let (mut body, mut pipeline) = state?;
        loop {
            match body.next().await {
                Some(Ok(chunk)) => {
                    let text = pipeline.feed_bytes(&chunk);
                    if !text.is_empty() {
                        return Some((Ok(Bytes::from(text)), Some((body, pipeline))));
                    }
                }
                Some(Err(e)) => {
                    tracing::warn!(error = %e, "stylesheet stream failed");
                    return Some((Err(e), None));
                }
                None => {
                    let text = pipeline.finish();
                    if text.is_empty() {
                        return None;
                    }
                    return Some((Ok(Bytes::from(text)), None));
                }
            }
        }
    })
}
