//! Current-date providers
//!
//! Relative phrases ("tomorrow", "friday", "May 3rd") resolve against the date
//! returned by a [`Clock`]. The extractor reads it once per parse.

use chrono::{Local, NaiveDate};

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local calendar date from the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> NaiveDate,
{
    fn today(&self) -> NaiveDate {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2022, 4, 1).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn test_closure_clock() {
        let clock = || NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }
}
