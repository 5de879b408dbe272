use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;

/// Source of recipe identifiers
pub trait IdGenerator {
    fn next_id(&mut self) -> u64;
}

/// Millisecond timestamps that never repeat.
///
/// Each id is `max(now_ms, previous + 1)`, so two recipes created in the same
/// millisecond still get distinct, increasing ids.
#[derive(Debug, Default, Clone)]
pub struct MonotonicIds {
    last: u64,
}

impl MonotonicIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start after the largest id already in use.
    pub fn starting_after(last: u64) -> Self {
        MonotonicIds { last }
    }

    fn now_millis() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

impl IdGenerator for MonotonicIds {
    fn next_id(&mut self) -> u64 {
        let next = match self.last.checked_add(1) {
            Some(next) => next,
            None => {
                warn!("Recipe id space exhausted, reusing {}", self.last);
                self.last
            }
        };
        let id = Self::now_millis().max(next);
        self.last = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_strictly_increase() {
        let mut ids = MonotonicIds::new();
        let generated: Vec<u64> = (0..1000).map(|_| ids.next_id()).collect();

        for pair in generated.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_starting_after_future_id() {
        let far_future = u64::MAX / 2;
        let mut ids = MonotonicIds::starting_after(far_future);

        assert_eq!(ids.next_id(), far_future + 1);
        assert_eq!(ids.next_id(), far_future + 2);
    }

    #[test]
    fn test_largest_stored_id_does_not_overflow() {
        let mut ids = MonotonicIds::starting_after(u64::MAX);

        assert_eq!(ids.next_id(), u64::MAX);
        assert_eq!(ids.next_id(), u64::MAX);
    }

    #[test]
    fn test_ids_track_the_clock() {
        let mut ids = MonotonicIds::new();
        let before = MonotonicIds::now_millis();
        let id = ids.next_id();

        assert!(id >= before);
    }
}
