use chrono::{Local, NaiveDateTime};

/// Source of the current local wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Year, unpadded month, padded day: `2024-3-07`.
pub fn format_date(now: &NaiveDateTime) -> String {
    now.format("%Y-%-m-%d").to_string()
}

/// Unpadded 24-hour hour and padded minute: `9:05`, `14:30`.
pub fn format_time(now: &NaiveDateTime) -> String {
    now.format("%-H:%M").to_string()
}
