//! Date/time extraction engine
//!
//! Scans the tokens of a title left to right. At each position the pattern
//! table is tried in order; the first pattern that matches and builds a value
//! for a still-empty slot consumes its tokens. Otherwise the token is kept in
//! the residual title and the cursor moves on by one. Once both a date and a
//! time are known, the rest of the title is copied untouched, so a second
//! time ("4pm 5pm") stays in the text.
//!
//! Whitespace never takes part in a pattern: the tokens are matched with
//! whitespace stripped, and only the spacing information is kept to rebuild
//! the residual title.

use crate::datetime::clock::{Clock, SystemClock};
use crate::datetime::lexer::tokenize;
use crate::datetime::patterns::{patterns, Extracted};
use crate::datetime::token::Token;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use tracing::{debug, trace};

/// Outcome of one extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    title: String,
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
}

impl Extraction {
    /// The input with the extracted phrases removed, whitespace normalized
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }
}

/// Extracts a date and a time from deadline titles
#[derive(Debug, Clone, Default)]
pub struct DateTimeExtractor<C = SystemClock> {
    clock: C,
}

impl DateTimeExtractor<SystemClock> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> DateTimeExtractor<C> {
    /// Resolve relative phrases against `clock` instead of the system date
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn parse(&self, input: &str) -> Extraction {
        parse_with_today(input, self.clock.today())
    }
}

/// Extract with an explicit current date
pub fn parse_with_today(input: &str, today: NaiveDate) -> Extraction {
    let (tokens, spaced) = strip_whitespace(tokenize(input));
    let mut residual = Residual::default();
    let mut date = None;
    let mut time = None;
    let mut cursor = 0;

    while cursor < tokens.len() {
        if date.is_some() && time.is_some() {
            for (token, &after_space) in tokens[cursor..].iter().zip(&spaced[cursor..]) {
                residual.keep(token, after_space);
            }
            break;
        }

        let hit = patterns().iter().find_map(|pattern| {
            let extracted = pattern.try_match(&tokens[cursor..], today)?;
            let free = match extracted {
                Extracted::Date(_) => date.is_none(),
                Extracted::Time(_) => time.is_none(),
            };
            free.then_some((pattern, extracted))
        });

        match hit {
            Some((pattern, extracted)) => {
                trace!(pattern = %pattern, position = cursor, ?extracted, "pattern matched");
                match extracted {
                    Extracted::Date(value) => date = Some(value),
                    Extracted::Time(value) => time = Some(value),
                }
                residual.drop_span();
                cursor += pattern.len();
            }
            None => {
                residual.keep(&tokens[cursor], spaced[cursor]);
                cursor += 1;
            }
        }
    }

    let extraction = Extraction {
        title: residual.text,
        date,
        time,
    };
    debug!(input, ?extraction, "extracted");
    extraction
}

/// Split off whitespace, recording for each remaining token whether
/// whitespace came right before it
fn strip_whitespace(tokens: Vec<Token>) -> (Vec<Token>, Vec<bool>) {
    let mut kept = Vec::with_capacity(tokens.len());
    let mut spaced = Vec::with_capacity(tokens.len());
    let mut after_whitespace = false;
    for token in tokens {
        if token.is_whitespace() {
            after_whitespace = true;
        } else {
            kept.push(token);
            spaced.push(after_whitespace);
            after_whitespace = false;
        }
    }
    (kept, spaced)
}

/// Residual title under construction
#[derive(Default)]
struct Residual {
    text: String,
    // Set by a dropped span; the next kept token is separated from what came before
    pending_space: bool,
}

impl Residual {
    fn keep(&mut self, token: &Token, spaced: bool) {
        if !self.text.is_empty() && (spaced || self.pending_space) {
            self.text.push(' ');
        }
        self.pending_space = false;
        self.text.push_str(&token.to_string());
    }

    fn drop_span(&mut self) {
        self.pending_space = true;
    }
}
