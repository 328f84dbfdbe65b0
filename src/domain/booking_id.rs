//! Booking identifier generation.
//!
//! Booking ids have the form `BKG-<unix-nanoseconds>`, taken from the
//! moment the ticket is created.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

/// Prefix of every booking id.
pub const BOOKING_ID_PREFIX: &str = "BKG-";

/// Issues `BKG-<nanos>` booking ids.
///
/// Ids issued by one generator are strictly increasing: when the clock
/// reports a value at or below the last one handed out (coarse clocks,
/// concurrent creates in the same tick) the generator uses the next
/// nanosecond instead. Nothing is coordinated across processes and the
/// storage layer does not enforce uniqueness.
#[derive(Debug, Default)]
pub struct BookingIdGenerator {
    last: AtomicI64,
}

impl BookingIdGenerator {
    /// Creates a generator that has issued nothing yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    /// Returns the booking id for a ticket created at `now`.
    pub fn next_id(&self, now: DateTime<Utc>) -> String {
        // Out of range after the year 2262.
        let nanos = now.timestamp_nanos_opt().unwrap_or(i64::MAX);
        let bump = |prev: i64| nanos.max(prev.saturating_add(1));
        let prev = match self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |prev| Some(bump(prev)))
        {
            Ok(prev) | Err(prev) => prev,
        };
        format!("{BOOKING_ID_PREFIX}{}", bump(prev))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use chrono::TimeZone;

    use super::*;

    fn digits(id: &str) -> i64 {
        let Some(rest) = id.strip_prefix(BOOKING_ID_PREFIX) else {
            panic!("missing prefix: {id}");
        };
        assert!(rest.bytes().all(|b| b.is_ascii_digit()), "non-digit suffix: {id}");
        let Ok(n) = rest.parse() else {
            panic!("unparseable suffix: {id}");
        };
        n
    }

    #[test]
    fn uses_creation_nanoseconds() {
        let generator = BookingIdGenerator::new();
        let Some(now) = Utc.timestamp_opt(1_714_557_600, 123_456_789).single() else {
            panic!("bad fixture");
        };
        assert_eq!(generator.next_id(now), "BKG-1714557600123456789");
    }

    #[test]
    fn same_tick_still_unique() {
        let generator = BookingIdGenerator::new();
        let now = Utc::now();
        let a = generator.next_id(now);
        let b = generator.next_id(now);
        assert_ne!(a, b);
        assert_eq!(digits(&b), digits(&a) + 1);
    }

    #[test]
    fn clock_going_backwards_keeps_increasing() {
        let generator = BookingIdGenerator::new();
        let now = Utc::now();
        let later = generator.next_id(now);
        let earlier = generator.next_id(now - chrono::Duration::seconds(5));
        assert!(digits(&earlier) > digits(&later));
    }

    #[tokio::test]
    async fn concurrent_ids_are_distinct() {
        let generator = Arc::new(BookingIdGenerator::new());
        let now = Utc::now();
        let mut handles = Vec::new();
        for _ in 0..8 {
            let generator = Arc::clone(&generator);
            handles.push(tokio::spawn(async move {
                (0..100).map(|_| generator.next_id(now)).collect::<Vec<_>>()
            }));
        }
        let mut seen = HashSet::new();
        for handle in handles {
            let Ok(ids) = handle.await else {
                panic!("task failed");
            };
            for id in ids {
                assert!(seen.insert(id), "duplicate booking id");
            }
        }
        assert_eq!(seen.len(), 800);
    }
}
