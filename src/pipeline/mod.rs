//! Concurrent retrieval/aggregation pipeline.
//!
//! The [`FetchRecord`] and [`RecordSink`] traits decouple the batching and
//! orchestration core from the HTTP fetcher on one side and the relational
//! store on the other. The runner is generic over both, so tests drive it
//! with fakes while `main` wires in [`crate::api::fetcher::PersonFetcher`]
//! and [`crate::persistence::person_repo::PersonRepo`].

pub mod batch;
pub mod fanout;
pub mod runner;

use std::future::Future;

use crate::models::person::Person;
use crate::Result;

/// Source of individual records, addressed by numeric ID.
pub trait FetchRecord {
    /// Fetch the record at `id`; `Ok(None)` means the ID does not exist
    /// upstream, which is a normal outcome rather than a failure.
    fn fetch(&self, id: u32) -> impl Future<Output = Result<Option<Person>>> + Send;
}

/// Destination accepting batches of fully resolved records.
pub trait RecordSink {
    /// Create underlying storage structures if absent. Idempotent.
    fn ensure_schema(&self) -> impl Future<Output = Result<()>> + Send;

    /// Commit one batch transactionally, all-or-nothing. An empty batch is
    /// a successful no-op, never an error.
    fn commit(&self, batch: Vec<Person>) -> impl Future<Output = Result<()>> + Send;
}
