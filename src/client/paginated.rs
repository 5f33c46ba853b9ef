//! Cursor-paginated stream for lazy iteration over API results.
//!
//! List endpoints return one page per response and point at the next page
//! through the envelope's `next` locator. [`PaginatedStream`] turns that chain
//! into a single ordered stream of records:
//!
//! - a background producer task owns the cursor chain and issues every
//!   request, one at a time
//! - records are handed over through a bounded channel, so the producer only
//!   fetches ahead as far as the channel capacity allows
//! - the first failure (transport, domain or decode) is delivered as the last
//!   item, after every record of the preceding pages
//! - dropping the stream stops the producer; no further pages are requested

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::stream::{FusedStream, Stream, TryStreamExt};
use serde::de::DeserializeOwned;
use tokio::sync::mpsc;

use super::config::DEFAULT_PAGE_BUFFER;
use super::envelope::Envelope;
use super::transport::{Request, Transport};
use crate::{Error, Result};

/// A stream that lazily follows the cursor chain of a list endpoint.
///
/// Yields `Ok(record)` in page order and, within a page, in array order. At
/// most one `Err` is ever yielded and it is always the final item.
///
/// Must be created from within a Tokio runtime.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
///
/// # async fn example(client: lemon_markets_rs::LemonClient) -> lemon_markets_rs::Result<()> {
/// let mut orders = client.orders().list_stream(None);
///
/// while let Some(result) = orders.next().await {
///     let order = result?;
///     println!("{:?} {:?}", order.id, order.status);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PaginatedStream<T> {
    receiver: mpsc::Receiver<Result<T>>,
    finished: bool,
}

impl<T> PaginatedStream<T>
where
    T: Send + 'static,
{
    /// Start streaming `request` through `transport`, decoding every page
    /// with `decode`.
    ///
    /// `capacity` is the number of records that may be buffered ahead of the
    /// consumer; it is raised to one if zero.
    pub fn spawn<R, D>(transport: R, request: Request, decode: D, capacity: usize) -> Self
    where
        R: Transport + 'static,
        D: Fn(&Envelope) -> Result<Vec<T>> + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        tokio::spawn(produce(transport, request, decode, sender));
        Self {
            receiver,
            finished: false,
        }
    }

    /// A stream that yields `error` and ends without contacting the server.
    pub fn failed(error: Error) -> Self {
        let (sender, receiver) = mpsc::channel(1);
        // capacity is one and the channel is fresh, so this cannot fail
        let _ = sender.try_send(Err(error));
        Self {
            receiver,
            finished: false,
        }
    }

    /// Stop the producer. Records already buffered can still be read.
    pub fn close(&mut self) {
        self.receiver.close();
    }

    /// Drain the stream into a `Vec`, stopping at the first error.
    pub async fn try_collect_all(self) -> Result<Vec<T>> {
        self.try_collect().await
    }
}

impl<T> PaginatedStream<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Start streaming `request`, decoding each page's `results` array as `T`.
    pub fn new<R>(transport: R, request: Request, capacity: usize) -> Self
    where
        R: Transport + 'static,
    {
        Self::spawn(transport, request, Envelope::decode_many::<T>, capacity)
    }
}

impl<T> Stream for PaginatedStream<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.finished {
            return Poll::Ready(None);
        }

        match self.receiver.poll_recv(cx) {
            Poll::Ready(Some(Err(e))) => {
                self.finished = true;
                self.receiver.close();
                Poll::Ready(Some(Err(e)))
            }
            Poll::Ready(None) => {
                self.finished = true;
                Poll::Ready(None)
            }
            other => other,
        }
    }
}

impl<T> Unpin for PaginatedStream<T> {}

impl<T> FusedStream for PaginatedStream<T> {
    fn is_terminated(&self) -> bool {
        self.finished
    }
}

/// Producer loop: fetch, decode, hand over, follow the cursor.
async fn produce<R, T, D>(
    transport: R,
    initial: Request,
    decode: D,
    sender: mpsc::Sender<Result<T>>,
) where
    R: Transport,
    D: Fn(&Envelope) -> Result<Vec<T>>,
{
    let mut request = initial;
    let mut fetched = 0usize;

    loop {
        let outcome = tokio::select! {
            biased;
            _ = sender.closed() => {
                tracing::debug!(locator = %request.target, pages = fetched, "consumer went away, stopping pagination");
                return;
            }
            outcome = transport.execute(&request) => outcome,
        };

        let envelope = match outcome {
            Ok(envelope) => envelope,
            Err(e) => {
                if let Some(api) = e.api_error() {
                    tracing::warn!(locator = %request.target, code = %api.code, "server rejected page request");
                }
                let _ = sender.send(Err(e)).await;
                return;
            }
        };
        fetched += 1;

        let records = match decode(&envelope) {
            Ok(records) => records,
            Err(e) => {
                tracing::debug!(locator = %request.target, error = %e, "page payload could not be decoded");
                let _ = sender.send(Err(e)).await;
                return;
            }
        };

        tracing::debug!(
            locator = %request.target,
            page = envelope.page,
            pages = envelope.pages,
            records = records.len(),
            has_next = envelope.next_cursor().is_some(),
            "fetched page"
        );

        for record in records {
            if sender.send(Ok(record)).await.is_err() {
                tracing::debug!(pages = fetched, "consumer went away, stopping pagination");
                return;
            }
        }

        match envelope.next_cursor() {
            Some(cursor) => request = Request::get(cursor),
            None => return,
        }
    }
}

/// Builder used by the services to create typed streams.
pub(crate) struct PaginatedStreamBuilder<T> {
    transport: Arc<dyn Transport>,
    request: Result<Request>,
    capacity: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T: DeserializeOwned + Send + 'static> PaginatedStreamBuilder<T> {
    /// Create a new builder.
    pub(crate) fn new(transport: Arc<dyn Transport>, request: Result<Request>) -> Self {
        Self {
            transport,
            request,
            capacity: DEFAULT_PAGE_BUFFER,
            _marker: std::marker::PhantomData,
        }
    }

    /// Set how many records may be buffered ahead of the consumer.
    pub(crate) fn buffer(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Build the stream. A request that failed to build yields its error.
    pub(crate) fn build(self) -> PaginatedStream<T> {
        match self.request {
            Ok(request) => PaginatedStream::new(self.transport, request, self.capacity),
            Err(e) => PaginatedStream::failed(e),
        }
    }
}
