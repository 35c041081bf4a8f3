//! Ride domain entity
//!
//! A ride is the physical-use period of a bike, opened by the handover gate
//! and closed when the bike is returned. Elapsed minutes are what the billing
//! collaborator consumes; the engine never prices them.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    pub id: Uuid,
    pub bike_id: Uuid,
    pub user_id: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl Ride {
    pub fn is_open(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Billable minutes, rounded up to the next whole minute. `None` while
    /// the ride is still open.
    pub fn elapsed_minutes(&self) -> Option<i64> {
        let ended_at = self.ended_at?;
        let seconds = (ended_at - self.started_at).num_seconds().max(0);
        Some((seconds + 59) / 60)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn ride_lasting(seconds: i64) -> Ride {
        let started_at = Utc::now();
        Ride {
            id: Uuid::new_v4(),
            bike_id: Uuid::new_v4(),
            user_id: "rider-1".into(),
            started_at,
            ended_at: Some(started_at + Duration::seconds(seconds)),
        }
    }

    #[test]
    fn open_ride_has_no_minutes() {
        let mut r = ride_lasting(0);
        r.ended_at = None;
        assert!(r.is_open());
        assert_eq!(r.elapsed_minutes(), None);
    }

    #[test]
    fn minutes_round_up() {
        assert_eq!(ride_lasting(0).elapsed_minutes(), Some(0));
        assert_eq!(ride_lasting(1).elapsed_minutes(), Some(1));
        assert_eq!(ride_lasting(60).elapsed_minutes(), Some(1));
        assert_eq!(ride_lasting(61).elapsed_minutes(), Some(2));
        assert_eq!(ride_lasting(45 * 60).elapsed_minutes(), Some(45));
    }
}
