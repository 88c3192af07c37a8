use chrono::{DateTime, TimeZone, Timelike, Utc};
use chrono_tz::Europe::London;

/// The single seam through which the engine reads wall-clock time. Everything
/// downstream of a `Clock` is deterministic, so tests pin "now" with
/// [`FixedClock`].
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Current hour of day in UK local time (handles BST/GMT).
    fn current_uk_hour(&self) -> u32 {
        self.now().with_timezone(&London).hour()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Test clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Frozen at the given UK local hour on an arbitrary winter date (GMT, so
    /// local hour equals UTC hour).
    pub fn at_uk_hour(hour: u32) -> Self {
        let local = London
            .with_ymd_and_hms(2026, 1, 15, hour, 0, 0)
            .single()
            .expect("unambiguous winter timestamp");
        Self(local.with_timezone(&Utc))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_requested_uk_hour() {
        for hour in [0, 9, 15, 23] {
            assert_eq!(FixedClock::at_uk_hour(hour).current_uk_hour(), hour);
        }
    }

    #[test]
    fn uk_hour_respects_bst_offset() {
        // 2026-07-01 13:00 UTC is 14:00 BST
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 7, 1, 13, 0, 0).unwrap());
        assert_eq!(clock.current_uk_hour(), 14);
    }
}
