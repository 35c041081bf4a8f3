//! Pure interval math for booking windows.
//!
//! A booking occupies the half-open range `[start, end)`, so two ranges that
//! merely touch do not overlap.

use chrono::{DateTime, Duration, Utc};

/// A bounded time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// True iff the two half-open ranges intersect. Symmetric.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// True iff a booking starting at `next_start` falls inside the handover
/// buffer after `handover_at`. The boundary is exclusive on the conflict
/// side: a start exactly `buffer` after the handover is allowed.
pub fn starts_within_buffer(
    next_start: DateTime<Utc>,
    handover_at: DateTime<Utc>,
    buffer: Duration,
) -> bool {
    next_start < handover_at + buffer
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        chrono::NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
            .and_utc()
    }

    fn range(start: (u32, u32), end: (u32, u32)) -> TimeRange {
        TimeRange::new(at(start.0, start.1), at(end.0, end.1))
    }

    #[test]
    fn touching_ranges_do_not_overlap() {
        let a = range((10, 0), (11, 0));
        let b = range((11, 0), (12, 0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn one_minute_intrusion_overlaps() {
        let a = range((10, 59), (12, 0));
        let b = range((11, 0), (12, 0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn contained_range_overlaps() {
        let outer = range((9, 0), (13, 0));
        let inner = range((10, 0), (11, 0));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn disjoint_ranges_do_not_overlap() {
        let a = range((8, 0), (9, 0));
        let b = range((11, 0), (12, 0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn duration_is_end_minus_start() {
        assert_eq!(range((10, 0), (12, 30)).duration(), Duration::minutes(150));
    }

    #[test]
    fn buffer_boundary_is_exclusive() {
        let handover = at(14, 0);
        let buffer = Duration::hours(1);

        // starting exactly one buffer later is fine
        assert!(!starts_within_buffer(at(15, 0), handover, buffer));
        // one second earlier is not
        assert!(starts_within_buffer(
            at(15, 0) - Duration::seconds(1),
            handover,
            buffer
        ));
        // a start in the past is trivially inside the buffer
        assert!(starts_within_buffer(at(13, 0), handover, buffer));
    }
}
