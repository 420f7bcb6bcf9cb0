use chrono::{Local, NaiveTime};

/// Source of the current time of day.
pub trait Clock {
    fn now(&self) -> NaiveTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> NaiveTime,
{
    fn now(&self) -> NaiveTime {
        self()
    }
}

/// Parse a time of day as `HH:MM:SS`, falling back to `HH:MM`.
pub fn parse_time(input: &str) -> Option<NaiveTime> {
    let input = input.trim();
    NaiveTime::parse_from_str(input, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M"))
        .ok()
}
