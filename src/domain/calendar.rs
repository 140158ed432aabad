// src/domain/calendar.rs
use chrono::{Datelike, Days, NaiveDate, Utc, Weekday};

/// Source of "today" for the batch jobs.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the current calendar date in UTC, whatever the host's timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Moves a weekend date forward to the following Monday. Weekdays are
/// returned unchanged.
pub fn next_business_day(date: NaiveDate) -> NaiveDate {
    let skip = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date + Days::new(skip)
}

/// Payments fall due the day after `today`, pushed off the weekend.
pub fn payment_due_date(today: NaiveDate) -> NaiveDate {
    next_business_day(today + Days::new(1))
}
