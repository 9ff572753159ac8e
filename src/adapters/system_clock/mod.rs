// System clock adapter - chrono backed implementation of ClockPort

use chrono::Utc;

use crate::ports::ClockPort;

/// Reads the real wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for SystemClock {
    fn now_millis(&self) -> u64 {
        // Clocks set before 1970 collapse to zero.
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }
}
