//! Date and time extraction from deadline titles
//!
//! Pipeline: title → [`lexer::tokenize`] → [`extractor`] (consulting the
//! [`patterns`] table and its [`predicates`]) → [`Extraction`].
//!
//! "Report May 3rd" yields the title "Report" and the 3rd of May;
//! "Apero at 7h27pm" yields "Apero" and 19:27. Phrases relative to today
//! resolve against an injected [`Clock`].

pub mod clock;
pub mod extractor;
pub mod lexer;
pub mod patterns;
pub mod possibly_invalid_date;
pub mod predicates;
pub mod token;

pub use clock::{Clock, FixedClock, SystemClock};
pub use extractor::{parse_with_today, DateTimeExtractor, Extraction};
pub use lexer::{detokenize, tokenize, tokenize_with_spans};
pub use patterns::{patterns, Extracted, Pattern};
pub use possibly_invalid_date::PossiblyInvalidDate;
pub use predicates::{Predicate, Value};
pub use token::{Token, TokenError};
