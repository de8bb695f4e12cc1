use crate::error::{ErrorBackend, Result};
use bytes::Bytes;
use futures::{Stream, StreamExt, stream};
use oc_core::error::ErrorCore;
use std::pin::Pin;

struct LineReader<S> {
    stream: Pin<Box<S>>,
    buffer: Vec<u8>,
    finished: bool,
}

/// Splits a chunked byte stream into its non-empty lines.
///
/// Transport chunks rarely line up with lines, so bytes are buffered until a
/// `\n` arrives. Buffering raw bytes keeps multi-byte characters that straddle
/// two chunks intact. A trailing line without `\n` is emitted when the
/// upstream ends. The first upstream error ends the stream.
pub fn ndjson_lines<S, E>(upstream: S) -> impl Stream<Item = Result<String>> + Send
where
    S: Stream<Item = std::result::Result<Bytes, E>> + Send + 'static,
    E: Into<ErrorBackend> + Send,
{
    let reader = LineReader {
        stream: Box::pin(upstream),
        buffer: Vec::new(),
        finished: false,
    };

    stream::unfold(reader, |mut reader| async move {
        loop {
            if let Some(pos) = reader.buffer.iter().position(|b| *b == b'\n') {
                let line: Vec<u8> = reader.buffer.drain(..=pos).collect();
                match decode_line(&line) {
                    Ok(Some(line)) => return Some((Ok(line), reader)),
                    Ok(None) => continue,
                    Err(e) => return Some((Err(e), reader.fail())),
                }
            }

            if reader.finished {
                let rest = std::mem::take(&mut reader.buffer);
                return match decode_line(&rest) {
                    Ok(Some(line)) => Some((Ok(line), reader)),
                    Ok(None) => None,
                    Err(e) => Some((Err(e), reader)),
                };
            }

            match reader.stream.next().await {
                Some(Ok(chunk)) => reader.buffer.extend_from_slice(&chunk),
                Some(Err(e)) => return Some((Err(e.into()), reader.fail())),
                None => reader.finished = true,
            }
        }
    })
}

impl<S> LineReader<S> {
    fn fail(mut self) -> Self {
        self.buffer.clear();
        self.finished = true;
        self
    }
}

fn decode_line(line: &[u8]) -> Result<Option<String>> {
    let line = std::str::from_utf8(line).map_err(ErrorCore::from)?.trim();
    if line.is_empty() {
        return Ok(None);
    }
    Ok(Some(line.to_string()))
}
