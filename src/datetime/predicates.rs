//! Token predicates
//!
//! Each predicate tries to read one token as a semantic value. `None` just
//! means "not this"; the pattern matcher moves on.

use crate::datetime::token::Token;
use chrono::{Month, Weekday};
use std::fmt;

/// A value read out of a single token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Number(u32),
    Month(Month),
    Weekday(Weekday),
    /// The literal a `OneOf` predicate matched, as declared
    Literal(&'static str),
}

impl Value {
    /// The number read by a numeric predicate
    pub fn number(&self) -> Option<u32> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The month read by `Predicate::Month`
    pub fn month(&self) -> Option<Month> {
        match self {
            Value::Month(m) => Some(*m),
            _ => None,
        }
    }

    /// The weekday read by `Predicate::DayOfWeek`
    pub fn weekday(&self) -> Option<Weekday> {
        match self {
            Value::Weekday(w) => Some(*w),
            _ => None,
        }
    }

    /// The literal matched by `Predicate::OneOf`
    pub fn literal(&self) -> Option<&'static str> {
        match self {
            Value::Literal(l) => Some(*l),
            _ => None,
        }
    }
}

/// Reads one token as a [`Value`]; patterns are sequences of these
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// 0..=23
    Hour24,
    /// 1..=12, only used next to am/pm
    Hour12,
    /// 00..=59, two digits
    Minute,
    /// 1..=31, checked against the month by the builder
    DayOfMonth,
    /// 1..=12
    MonthNumber,
    /// Four digits
    Year,
    Month,
    DayOfWeek,
    OneOf(&'static [&'static str]),
}

impl Predicate {
    pub fn apply(&self, token: &Token) -> Option<Value> {
        match self {
            Predicate::Hour24 => number_in(token, 0, 23),
            Predicate::Hour12 => number_in(token, 1, 12),
            Predicate::Minute => match token {
                Token::Numeric(text) if text.len() == 2 => number_in(token, 0, 59),
                _ => None,
            },
            Predicate::DayOfMonth => number_in(token, 1, 31),
            Predicate::MonthNumber => number_in(token, 1, 12),
            Predicate::Year => match token {
                Token::Numeric(text) if text.len() == 4 => number_in(token, 1000, 9999),
                _ => None,
            },
            Predicate::Month => as_month(token).map(Value::Month),
            Predicate::DayOfWeek => as_day_of_week(token).map(Value::Weekday),
            Predicate::OneOf(literals) => literals
                .iter()
                .find(|literal| token.matches_literal(literal))
                .map(|literal| Value::Literal(*literal)),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Hour24 => f.write_str("HOUR24"),
            Predicate::Hour12 => f.write_str("HOUR12"),
            Predicate::Minute => f.write_str("MINUTE"),
            Predicate::DayOfMonth => f.write_str("DAY"),
            Predicate::MonthNumber => f.write_str("MONTH#"),
            Predicate::Year => f.write_str("YEAR"),
            Predicate::Month => f.write_str("MONTH"),
            Predicate::DayOfWeek => f.write_str("WEEKDAY"),
            Predicate::OneOf(literals) => {
                for (i, literal) in literals.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    write!(f, "'{}'", literal)?;
                }
                Ok(())
            }
        }
    }
}

fn number_in(token: &Token, min: u32, max: u32) -> Option<Value> {
    token
        .number()
        .filter(|n| (min..=max).contains(n))
        .map(Value::Number)
}

fn as_month(token: &Token) -> Option<Month> {
    let Token::Alphabetic(text) = token else {
        return None;
    };
    let month = match text.to_lowercase().as_str() {
        "january" | "jan" => Month::January,
        "february" | "feb" => Month::February,
        "march" | "mar" => Month::March,
        "april" | "apr" => Month::April,
        "may" => Month::May,
        "june" | "jun" => Month::June,
        "july" | "jul" => Month::July,
        "august" | "aug" => Month::August,
        "september" | "sep" | "sept" => Month::September,
        "october" | "oct" => Month::October,
        "november" | "nov" => Month::November,
        "december" | "dec" => Month::December,
        _ => return None,
    };
    Some(month)
}

fn as_day_of_week(token: &Token) -> Option<Weekday> {
    let Token::Alphabetic(text) = token else {
        return None;
    };
    let weekday = match text.to_lowercase().as_str() {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tue" | "tues" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thu" | "thur" | "thurs" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => return None,
    };
    Some(weekday)
}
