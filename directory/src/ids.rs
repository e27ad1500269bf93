//! Id allocation for new directory entries.
//!
//! Ids carry a "milliseconds since the epoch" shape, so an entry's id reads
//! as its creation instant, but allocation is strictly monotonic: a burst of
//! inserts inside one millisecond, or a clock that jumps backwards, can
//! never repeat or reorder ids.

use chrono::Utc;
use entity::EmployeeId;

/// Allocate the id that follows `last`, biased to the wall clock.
pub fn next_id(last: EmployeeId) -> EmployeeId {
    next_id_at(last, Utc::now().timestamp_millis())
}

/// Clock-independent allocation rule: `max(last + 1, now_ms)`.
fn next_id_at(last: EmployeeId, now_ms: i64) -> EmployeeId {
    (last + 1).max(now_ms)
}
