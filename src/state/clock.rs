//! Time sources for date guards, payload timestamps and timers

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use std::time::Instant;
#[cfg(test)]
use std::{sync::Mutex, time::Duration};

pub trait Clock: Send + Sync {
    /// Local wall-clock time, used for "today" and "now" comparisons
    fn local_now(&self) -> NaiveDateTime;
    /// UTC wall-clock time, used for submission timestamps
    fn utc_now(&self) -> DateTime<Utc>;
    /// Monotonic time, used for scheduled UI reversions
    fn instant(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn local_now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn utc_now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn instant(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to
#[cfg(test)]
#[derive(Debug)]
pub struct ManualClock {
    local: NaiveDateTime,
    utc: DateTime<Utc>,
    start: Instant,
    elapsed: Mutex<Duration>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new(local: NaiveDateTime) -> Self {
        Self {
            local,
            utc: local.and_utc(),
            start: Instant::now(),
            elapsed: Mutex::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut elapsed = self.elapsed.lock().unwrap_or_else(|e| e.into_inner());
        *elapsed += by;
    }

    fn elapsed(&self) -> chrono::Duration {
        let elapsed = *self.elapsed.lock().unwrap_or_else(|e| e.into_inner());
        chrono::Duration::from_std(elapsed).unwrap_or_else(|_| chrono::Duration::zero())
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn local_now(&self) -> NaiveDateTime {
        self.local + self.elapsed()
    }

    fn utc_now(&self) -> DateTime<Utc> {
        self.utc + self.elapsed()
    }

    fn instant(&self) -> Instant {
        self.start + *self.elapsed.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_manual_clock_is_frozen() {
        let clock = ManualClock::new(noon());
        assert_eq!(clock.local_now(), noon());
        assert_eq!(clock.instant(), clock.instant());
    }

    #[test]
    fn test_manual_clock_advances_all_sources() {
        let clock = ManualClock::new(noon());
        let before = clock.instant();
        clock.advance(Duration::from_secs(90));
        assert_eq!(clock.instant() - before, Duration::from_secs(90));
        assert_eq!(
            clock.local_now(),
            noon() + chrono::Duration::seconds(90)
        );
        assert_eq!(clock.utc_now().timestamp() - noon().and_utc().timestamp(), 90);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock;
        let a = clock.instant();
        let b = clock.instant();
        assert!(b >= a);
    }
}
