//! Time sources for the timing core.
//!
//! Durations are always measured on the monotonic clock; the local wall
//! clock is carried alongside only so a lap can show when it started.

use std::cell::Cell;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

/// A single clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    monotonic: Instant,
    wall: DateTime<Local>,
}

impl Timestamp {
    pub fn new(monotonic: Instant, wall: DateTime<Local>) -> Self {
        Self { monotonic, wall }
    }

    /// Monotonic time elapsed since `earlier`, zero if `earlier` is later.
    pub fn duration_since(&self, earlier: &Timestamp) -> Duration {
        self.monotonic.saturating_duration_since(earlier.monotonic)
    }

    pub fn monotonic(&self) -> Instant {
        self.monotonic
    }

    /// Local time of day, for display only.
    pub fn wall(&self) -> DateTime<Local> {
        self.wall
    }
}

/// Supplies the current time to the timing core.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// The real clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::new(Instant::now(), Local::now())
    }
}

/// A clock that only moves when told to.
///
/// Clones share nothing; hand the core a reference (`&ManualClock`
/// implements `Clock`) and keep the owned clock to advance it.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Timestamp,
    offset: Cell<Duration>,
}

impl ManualClock {
    /// Starts at the current system time.
    pub fn new() -> Self {
        Self::starting_at(Local::now())
    }

    /// Starts at a fixed wall-clock time so lap start labels are predictable.
    pub fn starting_at(wall: DateTime<Local>) -> Self {
        Self {
            origin: Timestamp::new(Instant::now(), wall),
            offset: Cell::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    pub fn advance_secs_f64(&self, secs: f64) {
        self.advance(Duration::from_secs_f64(secs));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        let offset = self.offset.get();
        // Millisecond steps keep chrono's conversion lossless for test inputs
        let wall_offset = chrono::Duration::milliseconds(offset.as_millis() as i64);
        Timestamp::new(
            self.origin.monotonic + offset,
            self.origin.wall + wall_offset,
        )
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 12, 23, 12, 0, 0)
            .earliest()
            .expect("noon exists in every time zone")
    }

    #[test]
    fn test_manual_clock_does_not_move_by_itself() {
        let clock = ManualClock::new();
        let a = clock.now();
        let b = clock.now();
        assert_eq!(b.duration_since(&a), Duration::ZERO);
    }

    #[test]
    fn test_manual_clock_advances_both_readings() {
        let clock = ManualClock::starting_at(noon());
        let start = clock.now();
        clock.advance(Duration::from_secs(90));
        let later = clock.now();

        assert_eq!(later.duration_since(&start), Duration::from_secs(90));
        assert_eq!(later.wall().format("%H:%M:%S").to_string(), "12:01:30");
    }

    #[test]
    fn test_duration_since_saturates() {
        let clock = ManualClock::new();
        let early = clock.now();
        clock.advance(Duration::from_secs(1));
        let late = clock.now();
        assert_eq!(early.duration_since(&late), Duration::ZERO);
    }

    #[test]
    fn test_reference_is_a_clock() {
        fn read<C: Clock>(c: C) -> Timestamp {
            c.now()
        }
        let clock = ManualClock::new();
        let a = read(&clock);
        clock.advance(Duration::from_millis(250));
        let b = read(&clock);
        assert_eq!(b.duration_since(&a), Duration::from_millis(250));
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b.monotonic() >= a.monotonic());
    }
}
