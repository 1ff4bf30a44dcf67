//! The date/time pattern table
//!
//! A pattern is a fixed sequence of [`Predicate`]s plus a builder that turns
//! the matched values into a date or a time. The builder may still refuse a
//! match (31st of April, a "friday 20" where the 20th is not a Friday), in
//! which case the extractor keeps trying the rest of the table.
//!
//! Table order is priority: the first pattern that matches and builds wins at
//! a position, even when a longer one further down would also match. More
//! specific shapes are therefore declared before the general ones they
//! extend ("7:30 pm" before "7:30", "May 3rd" before "May 3").
//!
//! The table is generated once: every time pattern also gets an `at`-prefixed
//! variant and every date pattern an `on`-prefixed one, each declared right
//! before its base pattern so the connective word is consumed with it.

use crate::datetime::possibly_invalid_date::PossiblyInvalidDate;
use crate::datetime::predicates::{Predicate, Value};
use crate::datetime::token::Token;
use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};
use once_cell::sync::Lazy;
use std::fmt;

/// What a successful pattern produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extracted {
    Date(NaiveDate),
    Time(NaiveTime),
}

pub type Builder = fn(&[Value], NaiveDate) -> Option<Extracted>;

#[derive(Debug, Clone)]
pub struct Pattern {
    name: &'static str,
    predicates: Vec<Predicate>,
    builder: Builder,
    // Leading connective predicates whose values the builder never sees
    prefix_len: usize,
}

const AT: &[&str] = &["at"];
const ON: &[&str] = &["on"];

const MERIDIEM: &[&str] = &["am", "pm"];
const TIME_SEPARATOR: &[&str] = &[":", "h"];
const HOUR_WORD: &[&str] = &["h", "hour", "hours"];
const NOON: &[&str] = &["noon", "midday"];
const MIDNIGHT: &[&str] = &["midnight"];

const DATE_SEPARATOR: &[&str] = &[".", "/", "-"];
const SHORT_DATE_SEPARATOR: &[&str] = &[".", "/"];
const ORDINAL: &[&str] = &["st", "nd", "rd", "th"];
const OF: &[&str] = &["of"];
const DAY: &[&str] = &["day"];
const AFTER: &[&str] = &["after"];
const TOMORROW: &[&str] = &["tomorrow"];
const TODAY: &[&str] = &["today", "tonight"];
const NEXT: &[&str] = &["next"];
const WEEK: &[&str] = &["week"];

static PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(generate);

/// The full pattern table, in priority order
pub fn patterns() -> &'static [Pattern] {
    &PATTERNS
}

fn generate() -> Vec<Pattern> {
    let times = time_patterns()
        .into_iter()
        .flat_map(|pattern| [pattern.prefixed(AT), pattern]);
    let dates = date_patterns()
        .into_iter()
        .flat_map(|pattern| [pattern.prefixed(ON), pattern]);
    times.chain(dates).collect()
}

fn time_patterns() -> Vec<Pattern> {
    use Predicate::*;
    vec![
        Pattern::new(
            "hour-minute-meridiem",
            vec![Hour12, OneOf(TIME_SEPARATOR), Minute, OneOf(MERIDIEM)],
            hour_minute_meridiem,
        ),
        Pattern::new(
            "hour-minute",
            vec![Hour24, OneOf(TIME_SEPARATOR), Minute],
            hour_minute,
        ),
        Pattern::new("hour-meridiem", vec![Hour12, OneOf(MERIDIEM)], hour_meridiem),
        Pattern::new("hour", vec![Hour24, OneOf(HOUR_WORD)], hour),
        Pattern::new("noon", vec![OneOf(NOON)], |_, _| time(12, 0)),
        Pattern::new("midnight", vec![OneOf(MIDNIGHT)], |_, _| time(0, 0)),
    ]
}

fn date_patterns() -> Vec<Pattern> {
    use Predicate::*;
    vec![
        Pattern::new(
            "year-month-day",
            vec![
                Year,
                OneOf(DATE_SEPARATOR),
                MonthNumber,
                OneOf(DATE_SEPARATOR),
                DayOfMonth,
            ],
            year_month_day,
        ),
        Pattern::new(
            "day-month-year",
            vec![
                DayOfMonth,
                OneOf(DATE_SEPARATOR),
                MonthNumber,
                OneOf(DATE_SEPARATOR),
                Year,
            ],
            day_month_year,
        ),
        Pattern::new(
            "day-month",
            vec![DayOfMonth, OneOf(SHORT_DATE_SEPARATOR), MonthNumber],
            day_month,
        ),
        Pattern::new(
            "month-name-day-year",
            vec![Month, DayOfMonth, OneOf(ORDINAL), Year],
            named_month,
        ),
        Pattern::new("month-name-day-year", vec![Month, DayOfMonth, Year], named_month),
        Pattern::new(
            "day-month-name-year",
            vec![DayOfMonth, OneOf(ORDINAL), Month, Year],
            named_month,
        ),
        Pattern::new("day-month-name-year", vec![DayOfMonth, Month, Year], named_month),
        Pattern::new(
            "month-name-day",
            vec![Month, DayOfMonth, OneOf(ORDINAL)],
            named_month,
        ),
        Pattern::new("month-name-day", vec![Month, DayOfMonth], named_month),
        Pattern::new(
            "month-name-day",
            vec![Month, OneOf(DATE_SEPARATOR), DayOfMonth],
            named_month,
        ),
        Pattern::new(
            "day-month-name",
            vec![DayOfMonth, OneOf(ORDINAL), OneOf(OF), Month],
            named_month,
        ),
        Pattern::new(
            "day-month-name",
            vec![DayOfMonth, OneOf(ORDINAL), Month],
            named_month,
        ),
        Pattern::new("day-month-name", vec![DayOfMonth, Month], named_month),
        Pattern::new(
            "day-month-name",
            vec![DayOfMonth, OneOf(DATE_SEPARATOR), Month],
            named_month,
        ),
        Pattern::new(
            "day-after-tomorrow",
            vec![OneOf(DAY), OneOf(AFTER), OneOf(TOMORROW)],
            |_, today| days_after(today, 2),
        ),
        Pattern::new("tomorrow", vec![OneOf(TOMORROW)], |_, today| {
            days_after(today, 1)
        }),
        Pattern::new("today", vec![OneOf(TODAY)], |_, today| {
            Some(Extracted::Date(today))
        }),
        Pattern::new("next-week", vec![OneOf(NEXT), OneOf(WEEK)], |_, today| {
            days_after(today, 7)
        }),
        Pattern::new("weekday-day", vec![DayOfWeek, DayOfMonth], weekday_day),
        Pattern::new("next-weekday", vec![OneOf(NEXT), DayOfWeek], next_weekday),
        Pattern::new("weekday", vec![DayOfWeek], next_weekday),
    ]
}

impl Pattern {
    pub fn new(name: &'static str, predicates: Vec<Predicate>, builder: Builder) -> Self {
        Self {
            name,
            predicates,
            builder,
            prefix_len: 0,
        }
    }

    /// The same pattern, additionally requiring one of `literals` in front
    pub fn prefixed(&self, literals: &'static [&'static str]) -> Self {
        let mut predicates = Vec::with_capacity(self.predicates.len() + 1);
        predicates.push(Predicate::OneOf(literals));
        predicates.extend_from_slice(&self.predicates);
        Self {
            name: self.name,
            predicates,
            builder: self.builder,
            prefix_len: self.prefix_len + 1,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Number of tokens the pattern consumes
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Match against the start of `tokens` and build the result.
    ///
    /// `tokens` must not contain whitespace; the extractor strips it first.
    pub fn try_match(&self, tokens: &[Token], today: NaiveDate) -> Option<Extracted> {
        if tokens.len() < self.predicates.len() {
            return None;
        }
        let values = self
            .predicates
            .iter()
            .zip(tokens)
            .map(|(predicate, token)| predicate.apply(token))
            .collect::<Option<Vec<_>>>()?;
        (self.builder)(&values[self.prefix_len..], today)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.name)?;
        for predicate in &self.predicates {
            write!(f, " {}", predicate)?;
        }
        Ok(())
    }
}

fn time(hour: u32, minute: u32) -> Option<Extracted> {
    NaiveTime::from_hms_opt(hour, minute, 0).map(Extracted::Time)
}

fn date(year: u32, month: u32, day: u32) -> Option<Extracted> {
    let year = i32::try_from(year).ok()?;
    NaiveDate::from_ymd_opt(year, month, day).map(Extracted::Date)
}

fn days_after(today: NaiveDate, days: u64) -> Option<Extracted> {
    today.checked_add_days(Days::new(days)).map(Extracted::Date)
}

fn to_24h(hour: u32, meridiem: &str) -> u32 {
    if meridiem == "pm" {
        hour % 12 + 12
    } else {
        hour % 12
    }
}

fn hour_minute_meridiem(values: &[Value], _: NaiveDate) -> Option<Extracted> {
    let [hour, _, minute, meridiem] = values else {
        return None;
    };
    time(to_24h(hour.number()?, meridiem.literal()?), minute.number()?)
}

fn hour_minute(values: &[Value], _: NaiveDate) -> Option<Extracted> {
    let [hour, _, minute] = values else {
        return None;
    };
    time(hour.number()?, minute.number()?)
}

fn hour_meridiem(values: &[Value], _: NaiveDate) -> Option<Extracted> {
    let [hour, meridiem] = values else {
        return None;
    };
    time(to_24h(hour.number()?, meridiem.literal()?), 0)
}

fn hour(values: &[Value], _: NaiveDate) -> Option<Extracted> {
    time(values.first()?.number()?, 0)
}

fn same_separator(first: &Value, second: &Value) -> bool {
    first.literal().is_some() && first.literal() == second.literal()
}

fn year_month_day(values: &[Value], _: NaiveDate) -> Option<Extracted> {
    let [year, first, month, second, day] = values else {
        return None;
    };
    if !same_separator(first, second) {
        return None;
    }
    date(year.number()?, month.number()?, day.number()?)
}

fn day_month_year(values: &[Value], _: NaiveDate) -> Option<Extracted> {
    let [day, first, month, second, year] = values else {
        return None;
    };
    if !same_separator(first, second) {
        return None;
    }
    date(year.number()?, month.number()?, day.number()?)
}

fn day_month(values: &[Value], today: NaiveDate) -> Option<Extracted> {
    let [day, _, month] = values else {
        return None;
    };
    PossiblyInvalidDate::infer_year(month.number()?, day.number()?, today).map(Extracted::Date)
}

/// Any shape with a month name: the first number is the day, a second one the year
fn named_month(values: &[Value], today: NaiveDate) -> Option<Extracted> {
    let month = values.iter().find_map(Value::month)?.number_from_month();
    let mut numbers = values.iter().filter_map(Value::number);
    let day = numbers.next()?;
    match numbers.next() {
        Some(year) => date(year, month, day),
        None => PossiblyInvalidDate::infer_year(month, day, today).map(Extracted::Date),
    }
}

/// The given day of the current month, only if it falls on the given weekday
fn weekday_day(values: &[Value], today: NaiveDate) -> Option<Extracted> {
    let [weekday, day] = values else {
        return None;
    };
    let candidate = NaiveDate::from_ymd_opt(today.year(), today.month(), day.number()?)?;
    (candidate.weekday() == weekday.weekday()?).then_some(Extracted::Date(candidate))
}

fn next_weekday(values: &[Value], today: NaiveDate) -> Option<Extracted> {
    let weekday = values.iter().find_map(Value::weekday)?;
    next_occurrence(today, weekday).map(Extracted::Date)
}

/// First date strictly after `today` falling on `weekday`
fn next_occurrence(today: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let ahead =
        (7 + weekday.num_days_from_monday() - today.weekday().num_days_from_monday()) % 7;
    let ahead = if ahead == 0 { 7 } else { ahead };
    today.checked_add_days(Days::new(ahead.into()))
}
