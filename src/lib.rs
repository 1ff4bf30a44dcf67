//! # multimatum-dates
//!
//! Pulls a date and a time out of free-form deadline titles, leaving the rest
//! of the title as plain text.
//!
//! ```text
//! "Report May 3rd"          -> "Report",     2022-05-03
//! "Aqua-pony at 10:00"      -> "Aqua-pony",  10:00
//! "History 4pm 5pm"         -> "History 5pm", 16:00
//! ```
//!
//! Start with [`datetime::DateTimeExtractor`].

pub mod datetime;

pub use datetime::{parse_with_today, DateTimeExtractor, Extraction};
