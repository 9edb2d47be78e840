//! Unit tests for the chunked fan-out stream.

use star_census::pipeline::fanout::ChunkStream;
use star_census::AppError;

use super::helpers::ScriptedFetcher;

async fn collect_batches(
    fetcher: &ScriptedFetcher,
    first: u32,
    last: u32,
    chunk_size: u32,
) -> Vec<Vec<Option<i64>>> {
    let mut stream = ChunkStream::new(fetcher, first, last, chunk_size);
    let mut batches = Vec::new();
    while let Some(batch) = stream.next_chunk().await.expect("chunk") {
        batches.push(
            batch
                .into_iter()
                .map(|entry| entry.map(|person| person.id))
                .collect(),
        );
    }
    batches
}

#[tokio::test]
async fn batch_count_is_ceiling_of_range_over_chunk() {
    let fetcher = ScriptedFetcher::default();

    // (first, last, chunk, expected batch count, expected last batch size)
    let cases = [
        (1, 4, 2, 2, 1),
        (1, 84, 10, 9, 3),
        (1, 11, 10, 1, 10),
        (5, 6, 3, 1, 1),
        (1, 7, 2, 3, 2),
    ];
    for (first, last, chunk, count, last_len) in cases {
        let batches = collect_batches(&fetcher, first, last, chunk).await;
        assert_eq!(batches.len(), count, "range [{first},{last}) chunk {chunk}");
        assert_eq!(
            batches.last().map(Vec::len),
            Some(last_len),
            "range [{first},{last}) chunk {chunk}"
        );
        for batch in &batches[..batches.len() - 1] {
            assert_eq!(batch.len(), usize::try_from(chunk).expect("chunk fits"));
        }
    }
}

#[tokio::test]
async fn ids_ascend_within_batches_despite_completion_order() {
    let fetcher = ScriptedFetcher {
        stagger: true,
        ..ScriptedFetcher::default()
    };

    let batches = collect_batches(&fetcher, 1, 7, 3).await;
    assert_eq!(
        batches,
        vec![
            vec![Some(1), Some(2), Some(3)],
            vec![Some(4), Some(5), Some(6)],
        ]
    );
}

#[tokio::test]
async fn concurrency_matches_chunk_size() {
    let fetcher = ScriptedFetcher {
        stagger: true,
        ..ScriptedFetcher::default()
    };

    let batches = collect_batches(&fetcher, 1, 9, 4).await;
    assert_eq!(batches.len(), 2);
    // All fetches within one chunk are in flight together, and chunks never
    // overlap each other.
    assert_eq!(fetcher.max_in_flight(), 4);
    assert_eq!(fetcher.calls(), 8);
}

#[tokio::test]
async fn missing_ids_keep_their_batch_position() {
    let fetcher = ScriptedFetcher {
        missing: vec![2, 5],
        ..ScriptedFetcher::default()
    };

    let batches = collect_batches(&fetcher, 1, 7, 3).await;
    assert_eq!(
        batches,
        vec![
            vec![Some(1), None, Some(3)],
            vec![Some(4), None, Some(6)],
        ]
    );
}

#[tokio::test]
async fn single_fetch_failure_fails_the_chunk() {
    let fetcher = ScriptedFetcher {
        fail: Some(2),
        ..ScriptedFetcher::default()
    };

    let mut stream = ChunkStream::new(&fetcher, 1, 7, 3);
    let err = stream.next_chunk().await.expect_err("must fail");
    assert!(matches!(err, AppError::Http(_)));
}

#[tokio::test]
async fn failure_in_later_chunk_preserves_earlier_batches() {
    let fetcher = ScriptedFetcher {
        fail: Some(5),
        ..ScriptedFetcher::default()
    };

    let mut stream = ChunkStream::new(&fetcher, 1, 7, 3);
    let first = stream.next_chunk().await.expect("first chunk");
    assert!(first.is_some());
    assert!(stream.next_chunk().await.is_err());
}

#[tokio::test]
async fn empty_range_yields_no_chunks() {
    let fetcher = ScriptedFetcher::default();

    let mut stream = ChunkStream::new(&fetcher, 4, 4, 10);
    assert!(stream.next_chunk().await.expect("chunk").is_none());
    assert_eq!(fetcher.calls(), 0);
}
