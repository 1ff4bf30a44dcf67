//! Day/month/year triples that may not name a real calendar day
//!
//! Year inference compares a candidate such as February 29th against today
//! before knowing which year it lands in, so the comparison has to work on
//! triples chrono refuses to build.

use chrono::{Datelike, NaiveDate};

/// Ordered by year, then month, then day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PossiblyInvalidDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl PossiblyInvalidDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// The calendar date, if the triple names one
    pub fn to_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Resolve a month/day with no year to its next occurrence on or after `today`.
    ///
    /// The current year wins when the month/day has not passed yet, otherwise
    /// the following year is used. Only the final triple is validated, so
    /// `29/2` asked in a year whose successor is not a leap year yields `None`.
    pub fn infer_year(month: u32, day: u32, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = Self::new(today.year(), month, day);
        let year = if this_year >= Self::from(today) {
            today.year()
        } else {
            today.year() + 1
        };
        Self::new(year, month, day).to_date()
    }
}

impl From<NaiveDate> for PossiblyInvalidDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ordering_is_year_month_day() {
        assert!(PossiblyInvalidDate::new(2022, 2, 30) < PossiblyInvalidDate::new(2022, 3, 1));
        assert!(PossiblyInvalidDate::new(2021, 12, 31) < PossiblyInvalidDate::new(2022, 1, 1));
        assert!(PossiblyInvalidDate::new(2022, 4, 2) > PossiblyInvalidDate::new(2022, 4, 1));
    }

    #[test]
    fn test_invalid_triple_has_no_date() {
        assert_eq!(PossiblyInvalidDate::new(2021, 2, 29).to_date(), None);
        assert_eq!(
            PossiblyInvalidDate::new(2024, 2, 29).to_date(),
            Some(date(2024, 2, 29))
        );
    }

    #[test]
    fn test_infer_year_keeps_upcoming_dates_in_current_year() {
        let today = date(2022, 4, 1);
        assert_eq!(
            PossiblyInvalidDate::infer_year(8, 1, today),
            Some(date(2022, 8, 1))
        );
        assert_eq!(
            PossiblyInvalidDate::infer_year(4, 1, today),
            Some(date(2022, 4, 1))
        );
    }

    #[test]
    fn test_infer_year_rolls_past_dates_over() {
        let today = date(2022, 4, 1);
        assert_eq!(
            PossiblyInvalidDate::infer_year(3, 31, today),
            Some(date(2023, 3, 31))
        );
    }

    #[test]
    fn test_infer_year_rejects_missing_leap_day() {
        assert_eq!(PossiblyInvalidDate::infer_year(2, 29, date(2022, 4, 1)), None);
        assert_eq!(
            PossiblyInvalidDate::infer_year(2, 29, date(2023, 4, 1)),
            Some(date(2024, 2, 29))
        );
    }
}
