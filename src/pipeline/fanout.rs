//! Bounded-concurrency fan-out over a contiguous ID range.

use futures_util::future::try_join_all;

use crate::models::person::Person;
use crate::pipeline::FetchRecord;
use crate::Result;

/// Pull-based stream of fixed-size batches over the ID range `[first, last)`.
///
/// Each pull fans out one chunk of at most `chunk_size` concurrent fetches
/// and waits for all of them, so the chunk size is also the bound on
/// in-flight primary fetches. Chunks are produced strictly one after
/// another, and results within a chunk follow ascending ID order regardless
/// of completion order. The stream is finite and not restartable; a fresh
/// one re-issues every request.
#[derive(Debug)]
pub struct ChunkStream<'a, F> {
    fetcher: &'a F,
    next_id: u32,
    last_id: u32,
    chunk_size: u32,
}

impl<'a, F: FetchRecord> ChunkStream<'a, F> {
    /// Create a stream over `[first, last)` with the given chunk size.
    ///
    /// An empty range yields no chunks. `chunk_size` must be at least 1;
    /// configuration validation enforces this before the pipeline runs.
    #[must_use]
    pub fn new(fetcher: &'a F, first: u32, last: u32, chunk_size: u32) -> Self {
        Self {
            fetcher,
            next_id: first,
            last_id: last,
            chunk_size: chunk_size.max(1),
        }
    }

    /// Produce the next batch, or `None` once the range is exhausted.
    ///
    /// Absent entries mark IDs the upstream reported as not found; they keep
    /// their position so the batch always mirrors the chunk's ID sub-range.
    ///
    /// # Errors
    ///
    /// The first fetch failure in the chunk fails the whole pull; in-flight
    /// siblings are dropped and the stream should not be pulled again.
    pub async fn next_chunk(&mut self) -> Result<Option<Vec<Option<Person>>>> {
        if self.next_id >= self.last_id {
            return Ok(None);
        }
        let end = self.last_id.min(self.next_id.saturating_add(self.chunk_size));
        let ids = self.next_id..end;
        self.next_id = end;

        let fetcher = self.fetcher;
        let batch = try_join_all(ids.map(|id| fetcher.fetch(id))).await?;
        Ok(Some(batch))
    }
}
