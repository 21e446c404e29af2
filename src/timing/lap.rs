use std::time::Duration;

use super::format::{format_hms, format_time_of_day};
use crate::clock::Timestamp;

/// One completed timed segment. Never modified after it is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lap {
    number: usize,
    start: Timestamp,
    duration: Duration,
}

impl Lap {
    pub(crate) fn new(number: usize, start: Timestamp, duration: Duration) -> Self {
        Self {
            number,
            start,
            duration,
        }
    }

    /// 1-based position in the lap list.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn start(&self) -> &Timestamp {
        &self.start
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn view(&self) -> LapView {
        LapView {
            number: self.number,
            start_display: format_time_of_day(&self.start.wall()),
            duration_display: format_hms(self.duration),
        }
    }
}

/// What the presentation layer shows for a lap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LapView {
    pub number: usize,
    pub start_display: String,
    pub duration_display: String,
}
