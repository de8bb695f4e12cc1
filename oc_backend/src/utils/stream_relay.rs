use crate::domain::history::store::HistoryStore;
use crate::domain::model::backend::FragmentStream;
use crate::error::{ErrorBackend, Result};
use axum::body::Body;
use axum::response::Response;
use bytes::Bytes;
use futures::StreamExt;
use http::header::{CACHE_CONTROL, CONTENT_TYPE};
use oc_core::types::turn::Turn;
use std::sync::Arc;
use tokio::sync::mpsc::{Sender, channel};
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, error, warn};

const RELAY_CHANNEL_CAPACITY: usize = 32;

/// How a relayed generation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Every fragment was delivered and the assistant turn was committed.
    Completed(String),
    /// The model backend failed; the client body was aborted.
    UpstreamFailed,
    /// The client went away; the generation was dropped.
    ClientGone,
}

/// Republishes a fragment stream as a chunked `text/plain` body and commits
/// the full text as an assistant turn once the stream completes.
///
/// Typical usage:
/// ```ignore
/// let relay = StreamRelay::new(history, "s1".into(), fragments);
/// let response = relay.build()?;
/// ```
pub struct StreamRelay {
    history: Arc<HistoryStore>,
    session_id: String,
    fragments: FragmentStream,
}

impl StreamRelay {
    pub fn new(history: Arc<HistoryStore>, session_id: String, fragments: FragmentStream) -> Self {
        Self {
            history,
            session_id,
            fragments,
        }
    }

    /// Spawns the relay task and returns the streaming response it feeds.
    ///
    /// Fragments are written to the body one by one, in the order the
    /// backend produced them. A backend failure aborts the body instead of
    /// closing it, so the client never mistakes a truncated answer for a
    /// complete one.
    pub fn build(self) -> Result<Response> {
        let (tx, rx) = channel::<Result<Bytes>>(RELAY_CHANNEL_CAPACITY);
        tokio::spawn(self.run(tx));

        let body = Body::from_stream(ReceiverStream::new(rx));
        Response::builder()
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .header(CACHE_CONTROL, "no-cache")
            .body(body)
            .map_err(|e| ErrorBackend::FailedBuildStreamResponse(e.to_string()))
    }

    /// Drives the fragment stream to the end, forwarding into `tx`.
    ///
    /// Nothing is committed unless the stream completes. Returning drops
    /// both `tx` (closing the body) and the fragment stream (cancelling the
    /// backend call if it is still running).
    pub async fn run(mut self, tx: Sender<Result<Bytes>>) -> RelayOutcome {
        let mut full_text = String::new();

        loop {
            let fragment = tokio::select! {
                _ = tx.closed() => {
                    warn!(
                        session_id = %self.session_id,
                        "client disconnected while waiting on the model, cancelling generation"
                    );
                    return RelayOutcome::ClientGone;
                }
                fragment = self.fragments.next() => fragment,
            };
            let Some(fragment) = fragment else {
                break;
            };
            match fragment {
                Ok(text) => {
                    full_text.push_str(&text);
                    if tx.send(Ok(Bytes::from(text))).await.is_err() {
                        warn!(
                            session_id = %self.session_id,
                            "client disconnected mid-stream, cancelling generation"
                        );
                        return RelayOutcome::ClientGone;
                    }
                }
                Err(e) => {
                    error!(session_id = %self.session_id, "Streaming error: {e}");
                    let _ = tx.send(Err(e)).await;
                    return RelayOutcome::UpstreamFailed;
                }
            }
        }

        debug!(
            session_id = %self.session_id,
            len = full_text.len(),
            "generation complete, committing assistant turn"
        );
        self.history
            .append(&self.session_id, Turn::assistant(full_text.clone()));
        RelayOutcome::Completed(full_text)
    }
}
