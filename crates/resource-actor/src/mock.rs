//! # Mock Framework & Testing Guide
//!
//! The `MockClient<T>` type hands out a real `ResourceClient<T>` whose requests are answered
//! from a queue of expectations instead of a store. It lets you test the logic *around* a
//! client (error mapping, payload construction) without spawning an actor or touching disk.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor + MemoryStore | Real Actor + JsonFileStore |
//! |---------|------------|--------------------------|----------------------------|
//! | **State** | None (expectations) | In process | On disk |
//! | **Error Injection** | Easy (`return_err`) | Needs a failing store | Needs a broken file |
//! | **Use Case** | Client wrappers | Actor semantics | Persistence round-trips |
//!
//! ## Testing Failure Scenarios
//!
//! ```rust
//! use resource_actor::mock::MockClient;
//! use resource_actor::{ActorEntity, FrameworkError};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)] struct Tag { id: u32 }
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct TagError;
//!
//! impl ActorEntity for Tag {
//!     type Id = u32; type Create = (); type Update = (); type Error = TagError;
//!     const COLLECTION: &'static str = "tags";
//!     fn id(&self) -> u32 { self.id }
//!     fn set_id(&mut self, id: u32) { self.id = id; }
//!     fn from_create_params(id: u32, _: ()) -> Result<Self, TagError> { Ok(Self { id }) }
//!     fn on_update(&mut self, _: ()) -> Result<(), TagError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Tag>::new();
//!     let client = mock.client();
//!
//!     // Simulate a downstream failure
//!     mock.expect_get(1).return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.get(1).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and the raw receiver, or use the fluent
//! [`MockClient`] API.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response it should receive.
enum Expectation<T: ActorEntity> {
    List(Result<Vec<T>, FrameworkError>),
    Get(T::Id, Result<Option<T>, FrameworkError>),
    Create(Result<T, FrameworkError>),
    Update(T::Id, Result<T, FrameworkError>),
    Patch(T::Id, Result<T, FrameworkError>),
    Delete(T::Id, Result<(), FrameworkError>),
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were declared. A request that does not
/// match the next expectation (kind or id) panics the mock task, which the caller observes
/// as `FrameworkError::ActorDropped`.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();
                answer(request, next);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Box::new(Expectation::List))
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Box::new(move |r| Expectation::Get(id, r)))
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(Box::new(Expectation::Create))
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Box::new(move |r| Expectation::Update(id, r)))
    }

    pub fn expect_patch(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Box::new(move |r| Expectation::Patch(id, r)))
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(Box::new(move |r| Expectation::Delete(id, r)))
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    fn builder<R>(&self, wrap: Wrap<T, R>) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap,
        }
    }
}

type Wrap<T, R> = Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>;

/// Completes an expectation with the response it should produce.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Queue<T>,
    wrap: Wrap<T, R>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

fn reply<R>(respond_to: Response<R>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

fn check_id<Id: PartialEq + std::fmt::Debug>(op: &str, expected: Id, actual: Id) {
    if expected != actual {
        panic!("{op}: expected id {expected:?}, got {actual:?}");
    }
}

fn answer<T: ActorEntity>(request: ResourceRequest<T>, expectation: Option<Expectation<T>>) {
    match (request, expectation) {
        (ResourceRequest::List { respond_to }, Some(Expectation::List(response))) => {
            reply(respond_to, response)
        }
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get(expected, response))) => {
            check_id("get", expected, id);
            reply(respond_to, response)
        }
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(response))) => {
            reply(respond_to, response)
        }
        (
            ResourceRequest::Update { id, respond_to, .. },
            Some(Expectation::Update(expected, response)),
        ) => {
            check_id("update", expected, id);
            reply(respond_to, response)
        }
        (
            ResourceRequest::Patch { id, respond_to, .. },
            Some(Expectation::Patch(expected, response)),
        ) => {
            check_id("patch", expected, id);
            reply(respond_to, response)
        }
        (
            ResourceRequest::Delete { id, respond_to },
            Some(Expectation::Delete(expected, response)),
        ) => {
            check_id("delete", expected, id);
            reply(respond_to, response)
        }
        (request, _) => panic!("Unexpected request or expectation mismatch: {request:?}"),
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Useful when a test needs to inspect the payload a client wrapper built before deciding
/// how to answer.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Patch request
pub async fn expect_patch<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Patch {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}
