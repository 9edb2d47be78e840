//! Batch filtering ahead of persistence.

use crate::models::person::Person;

/// Drop absent entries from one batch, preserving order.
///
/// The fan-out already yields fixed-size groups, so this stage is a pure
/// filter rather than a re-chunking buffer. An all-absent batch compacts to
/// an empty vec, which is still forwarded to the sink as a no-op commit.
#[must_use]
pub fn compact(batch: Vec<Option<Person>>) -> Vec<Person> {
    batch.into_iter().flatten().collect()
}
