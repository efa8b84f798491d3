//
//  travis-client
//  api/dispatch.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Background Requests and Completion Delivery
//!
//! Two ways to run a request without awaiting it inline:
//!
//! - [`TravisClient::spawn`] runs the request on the tokio runtime and
//!   returns a [`RequestHandle`] that can be awaited or cancelled.
//! - [`Dispatcher::submit`] runs the request in the background and hands
//!   the result to a callback. Callbacks never run on the worker that did
//!   the I/O; they are queued and run by whoever drives the matching
//!   [`CompletionQueue`], so every callback is observed on that one context
//!   (a UI loop, a dedicated task, ...).
//!
//! A cancelled request always completes with [`TravisError::Cancelled`];
//! callbacks are never silently dropped.
//!
//! ## Example
//!
//! ```rust,no_run
//! use travis_client::api::{completion_queue, Host, TravisClient};
//!
//! # async fn example() -> Result<(), travis_client::api::TravisError> {
//! let client = TravisClient::new("your-token", Host::Org)?;
//! let (dispatcher, mut queue) = completion_queue(client.clone());
//!
//! dispatcher.submit(client.request("/builds"), |result: Result<serde_json::Value, _>| {
//!     println!("builds: {:?}", result.is_ok());
//! });
//! drop(dispatcher);
//!
//! // Runs callbacks one by one on this task until every request finished.
//! queue.run().await;
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use serde::de::DeserializeOwned;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use super::common::{Result, TravisError};
use super::{RequestDescriptor, TravisClient};

type Completion = Box<dyn FnOnce() + Send + 'static>;

/// Runs `request` until it finishes or `cancel` fires.
///
/// Dropping the sender without sending does not cancel.
async fn run_cancellable<T: DeserializeOwned>(
    client: TravisClient,
    request: RequestDescriptor,
    mut cancel: oneshot::Receiver<()>,
) -> Result<T> {
    tokio::select! {
        result = client.execute(&request) => result,
        Ok(()) = &mut cancel => {
            tracing::debug!(path = request.path(), "Request cancelled");
            Err(TravisError::Cancelled)
        }
    }
}

/// Cancels one in-flight request.
#[derive(Debug)]
pub struct CancelHandle {
    tx: Option<oneshot::Sender<()>>,
}

impl CancelHandle {
    fn new() -> (Self, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx: Some(tx) }, rx)
    }

    /// Requests cancellation. Has no effect once the request finished.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(());
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.tx.is_none()
    }
}

/// A request running in the background.
///
/// Awaiting the handle yields the request's result. Dropping it lets the
/// request run to completion unobserved.
#[derive(Debug)]
pub struct RequestHandle<T> {
    task: JoinHandle<Result<T>>,
    cancel: CancelHandle,
}

impl<T> RequestHandle<T> {
    /// Cancels the request; awaiting the handle then yields
    /// [`TravisError::Cancelled`] unless the result was already produced.
    pub fn cancel(&mut self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl<T> Future for RequestHandle<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.task).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(e)) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Poll::Ready(Err(_)) => Poll::Ready(Err(TravisError::Cancelled)),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl TravisClient {
    /// Runs `request` on the tokio runtime.
    ///
    /// Must be called from within a runtime.
    pub fn spawn<T>(&self, request: RequestDescriptor) -> RequestHandle<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let (cancel, rx) = CancelHandle::new();
        let task = tokio::spawn(run_cancellable(self.clone(), request, rx));
        RequestHandle { task, cancel }
    }
}

/// Creates a dispatcher and the queue its completions are delivered to.
pub fn completion_queue(client: TravisClient) -> (Dispatcher, CompletionQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Dispatcher { client, tx }, CompletionQueue { rx })
}

/// Submits requests whose callbacks run on a [`CompletionQueue`].
#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: TravisClient,
    tx: mpsc::UnboundedSender<Completion>,
}

impl Dispatcher {
    pub fn client(&self) -> &TravisClient {
        &self.client
    }

    /// Runs `request` in the background and queues `completion` with its
    /// result.
    ///
    /// The callback is invoked exactly once, by the queue's consumer. If
    /// the queue has been dropped, the result is discarded.
    pub fn submit<T, F>(&self, request: RequestDescriptor, completion: F) -> CancelHandle
    where
        T: DeserializeOwned + Send + 'static,
        F: FnOnce(Result<T>) + Send + 'static,
    {
        let (cancel, rx) = CancelHandle::new();
        let client = self.client.clone();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let result = run_cancellable::<T>(client, request, rx).await;
            if tx.send(Box::new(move || completion(result))).is_err() {
                tracing::debug!("Completion queue closed, dropping result");
            }
        });

        cancel
    }
}

/// Single consumer of completions.
///
/// Whatever task or thread drives the queue is the one context on which
/// all callbacks of its [`Dispatcher`]s run.
pub struct CompletionQueue {
    rx: mpsc::UnboundedReceiver<Completion>,
}

impl std::fmt::Debug for CompletionQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionQueue").finish_non_exhaustive()
    }
}

impl CompletionQueue {
    /// Waits for the next completion and runs it.
    ///
    /// Returns `false` once every dispatcher is gone and no request is
    /// still in flight.
    pub async fn run_next(&mut self) -> bool {
        match self.rx.recv().await {
            Some(completion) => {
                completion();
                true
            }
            None => false,
        }
    }

    /// Runs completions until all dispatchers and requests are finished.
    pub async fn run(&mut self) {
        while self.run_next().await {}
    }

    /// Runs the completions that are ready without waiting.
    ///
    /// Suited to an event loop that polls once per frame.
    pub fn drain(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(completion) = self.rx.try_recv() {
            completion();
            ran += 1;
        }
        ran
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::thread::{self, ThreadId};
    use std::time::Duration;

    use super::*;
    use crate::api::transport::testing::StubTransport;
    use crate::api::Host;
    use crate::models::MinimalRepository;

    const REPO: &str = r#"{"id": 1, "name": "r", "slug": "o/r"}"#;

    fn client(stub: StubTransport) -> TravisClient {
        TravisClient::with_transport(Host::Org, Arc::new(stub))
    }

    #[tokio::test]
    async fn test_spawned_request_resolves() {
        let client = client(StubTransport::new().respond(200, REPO));
        let handle = client.spawn::<MinimalRepository>(client.request("/repo/1"));
        let repo = handle.await.unwrap();
        assert_eq!(repo.slug, "o/r");
    }

    #[tokio::test]
    async fn test_cancelled_request_yields_cancelled() {
        let stub = StubTransport::new()
            .respond(200, REPO)
            .with_delay(Duration::from_secs(30));
        let client = client(stub);

        let mut handle = client.spawn::<MinimalRepository>(client.request("/repo/1"));
        handle.cancel();
        assert!(matches!(handle.await, Err(TravisError::Cancelled)));
    }

    #[tokio::test]
    async fn test_dropping_cancel_handle_does_not_cancel() {
        let client = client(StubTransport::new().respond(200, REPO));
        let (dispatcher, mut queue) = completion_queue(client.clone());

        let seen = Arc::new(Mutex::new(None));
        let slot = seen.clone();
        drop(dispatcher.submit(client.request("/repo/1"), move |r: Result<MinimalRepository>| {
            *slot.lock().unwrap() = Some(r.is_ok());
        }));
        drop(dispatcher);

        queue.run().await;
        assert_eq!(*seen.lock().unwrap(), Some(true));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_completions_run_on_queue_context() {
        let stub = StubTransport::new()
            .respond(200, REPO)
            .respond(200, REPO)
            .respond(200, "")
            .respond(200, REPO);
        let client = client(stub);
        let (dispatcher, queue) = completion_queue(client.clone());

        let threads: Arc<Mutex<Vec<ThreadId>>> = Arc::new(Mutex::new(Vec::new()));
        for _ in 0..4 {
            let threads = threads.clone();
            dispatcher.submit(client.request("/repo/1"), move |_: Result<MinimalRepository>| {
                threads.lock().unwrap().push(thread::current().id());
            });
        }
        drop(dispatcher);

        // Drive the queue from a dedicated OS thread.
        let consumer = thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let mut queue = queue;
            runtime.block_on(queue.run());
            thread::current().id()
        });
        let consumer_id = tokio::task::spawn_blocking(move || consumer.join().unwrap())
            .await
            .unwrap();

        let threads = threads.lock().unwrap();
        assert_eq!(threads.len(), 4);
        assert!(threads.iter().all(|id| *id == consumer_id));
    }

    #[tokio::test]
    async fn test_cancelled_submission_still_completes() {
        let stub = StubTransport::new()
            .respond(200, REPO)
            .with_delay(Duration::from_secs(30));
        let client = client(stub);
        let (dispatcher, mut queue) = completion_queue(client.clone());

        let outcome = Arc::new(Mutex::new(None));
        let slot = outcome.clone();
        let mut cancel = dispatcher.submit(client.request("/repo/1"), move |r: Result<MinimalRepository>| {
            *slot.lock().unwrap() = Some(matches!(r, Err(TravisError::Cancelled)));
        });
        cancel.cancel();
        assert!(cancel.is_cancelled());

        assert!(queue.run_next().await);
        assert_eq!(*outcome.lock().unwrap(), Some(true));
    }

    #[tokio::test]
    async fn test_drain_runs_ready_completions() {
        let client = client(StubTransport::new().respond(200, REPO));
        let (dispatcher, mut queue) = completion_queue(client.clone());
        assert_eq!(queue.drain(), 0);

        let handle = client.spawn::<MinimalRepository>(client.request("/repo/1"));
        let repo = handle.await.unwrap();
        dispatcher.submit(client.request(format!("/repo/{}", repo.id)), |_: Result<serde_json::Value>| {});

        // The stub answers the second request with an empty body.
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(queue.drain(), 1);
    }
}
