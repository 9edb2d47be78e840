//! End-to-end harvest orchestration.

use tracing::info;

use crate::pipeline::batch::compact;
use crate::pipeline::fanout::ChunkStream;
use crate::pipeline::{FetchRecord, RecordSink};
use crate::Result;

/// Counters reported after a completed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of batches committed, including empty ones.
    pub batches: usize,
    /// Records stored across all batches.
    pub stored: usize,
    /// IDs the upstream reported as not found.
    pub missing: usize,
}

/// Harvest `[first, last)` in chunks of `chunk_size` and commit each batch.
///
/// The schema is ensured exactly once before the first commit. Batches are
/// committed in the order they are produced, one at a time; commits never
/// overlap. Every spawned fetch is joined inside its chunk, so no background
/// work outlives this call.
///
/// # Errors
///
/// Any fetch or persistence failure aborts the run immediately; there is no
/// partial-success result and no resume point.
pub async fn run_harvest<F, S>(
    fetcher: &F,
    sink: &S,
    first: u32,
    last: u32,
    chunk_size: u32,
) -> Result<RunSummary>
where
    F: FetchRecord,
    S: RecordSink,
{
    sink.ensure_schema().await?;

    let mut chunks = ChunkStream::new(fetcher, first, last, chunk_size);
    let mut summary = RunSummary::default();
    while let Some(batch) = chunks.next_chunk().await? {
        let fetched = batch.len();
        let records = compact(batch);
        let absent = fetched - records.len();
        summary.batches += 1;
        summary.stored += records.len();
        summary.missing += absent;
        info!(
            batch = summary.batches,
            stored = records.len(),
            absent,
            "committing batch"
        );
        sink.commit(records).await?;
    }
    Ok(summary)
}
