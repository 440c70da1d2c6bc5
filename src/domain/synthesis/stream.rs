use bytes::Bytes;
use futures::{Stream, StreamExt};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::time::{Instant, Sleep};

use crate::error::SpeechResult;
use crate::infrastructure::http::{BodyStream, TransportError};

/// Lazily read synthesized audio.
///
/// Chunks arrive as the service sends them; nothing is buffered beyond the
/// current chunk. The underlying connection is released when the stream ends,
/// fails, hits its deadline, or is dropped. [`AudioStream::close`] releases it
/// explicitly.
pub struct AudioStream {
    prefix: Option<Bytes>,
    body: Option<BodyStream>,
    deadline: Pin<Box<Sleep>>,
    content_length: Option<u64>,
}

impl AudioStream {
    pub(crate) fn new(
        prefix: Option<Bytes>,
        body: BodyStream,
        deadline: Instant,
        content_length: Option<u64>,
    ) -> Self {
        Self {
            prefix,
            body: Some(body),
            deadline: Box::pin(tokio::time::sleep_until(deadline)),
            content_length,
        }
    }

    /// Size announced by the service, when it sent one
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// Stop reading and release the connection
    pub fn close(self) {}

    fn release(&mut self) {
        self.body = None;
    }
}

impl fmt::Debug for AudioStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioStream")
            .field("content_length", &self.content_length)
            .field("open", &self.body.is_some())
            .finish()
    }
}

impl Stream for AudioStream {
    type Item = SpeechResult<Bytes>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if let Some(chunk) = this.prefix.take() {
            return Poll::Ready(Some(Ok(chunk)));
        }

        let Some(body) = this.body.as_mut() else {
            return Poll::Ready(None);
        };

        if this.deadline.as_mut().poll(cx).is_ready() {
            tracing::warn!("Audio stream exceeded its deadline");
            this.release();
            return Poll::Ready(Some(Err(TransportError::Timeout.into())));
        }

        match body.poll_next_unpin(cx) {
            Poll::Ready(Some(Ok(chunk))) => Poll::Ready(Some(Ok(chunk))),
            Poll::Ready(Some(Err(e))) => {
                this.release();
                Poll::Ready(Some(Err(e.into())))
            }
            Poll::Ready(None) => {
                this.release();
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
