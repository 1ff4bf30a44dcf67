//! Token definitions for deadline titles
//!
//! A title is split by character class: runs of letters, runs of ASCII digits,
//! runs of whitespace, and every other character on its own. The classes are
//! disjoint, so the lexer is total over any input.
use logos::Logos;
use std::fmt;
use thiserror::Error;

/// All possible tokens in a deadline title
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    #[regex(r"\p{Alphabetic}+", |lex| lex.slice().to_owned())]
    Alphabetic(String),

    #[regex(r"[0-9]+", |lex| lex.slice().to_owned())]
    Numeric(String),

    // Any whitespace run collapses to one token
    #[regex(r"\s+")]
    Whitespace,

    // Catch-all for single characters outside the other classes
    #[regex(r"[^\p{Alphabetic}0-9\s]", |lex| lex.slice().chars().next())]
    Symbol(char),
}

/// Contract violations when building a token by hand
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token text must not be empty")]
    Empty,
    #[error("alphabetic token contains non-letter text: {0:?}")]
    NotAlphabetic(String),
    #[error("numeric token contains non-digit text: {0:?}")]
    NotNumeric(String),
    #[error("symbol token must be exactly one character, got {0:?}")]
    NotSingleChar(String),
    #[error("symbol token cannot hold a letter, digit or whitespace: {0:?}")]
    ClassifiedSymbol(char),
}

impl Token {
    /// Build an alphabetic token, checking that `text` is a non-empty run of letters
    pub fn alphabetic(text: impl Into<String>) -> Result<Self, TokenError> {
        let text = text.into();
        if text.is_empty() {
            return Err(TokenError::Empty);
        }
        if !text.chars().all(char::is_alphabetic) {
            return Err(TokenError::NotAlphabetic(text));
        }
        Ok(Token::Alphabetic(text))
    }

    /// Build a numeric token, checking that `text` is a non-empty run of ASCII digits
    pub fn numeric(text: impl Into<String>) -> Result<Self, TokenError> {
        let text = text.into();
        if text.is_empty() {
            return Err(TokenError::Empty);
        }
        if !text.chars().all(|c| c.is_ascii_digit()) {
            return Err(TokenError::NotNumeric(text));
        }
        Ok(Token::Numeric(text))
    }

    /// Build a symbol token from a string holding exactly one character
    pub fn symbol(text: &str) -> Result<Self, TokenError> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(TokenError::Empty),
            (Some(c), None) => {
                if c.is_alphabetic() || c.is_ascii_digit() || c.is_whitespace() {
                    Err(TokenError::ClassifiedSymbol(c))
                } else {
                    Ok(Token::Symbol(c))
                }
            }
            (Some(_), Some(_)) => Err(TokenError::NotSingleChar(text.to_owned())),
        }
    }

    /// Check if this token is whitespace
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }

    /// Integer value of a numeric token, if it fits
    pub fn number(&self) -> Option<u32> {
        match self {
            Token::Numeric(text) => text.parse().ok(),
            _ => None,
        }
    }

    /// Case-insensitive comparison against a literal
    pub fn matches_literal(&self, literal: &str) -> bool {
        match self {
            Token::Alphabetic(text) | Token::Numeric(text) => text.eq_ignore_ascii_case(literal),
            Token::Symbol(c) => {
                let mut chars = literal.chars();
                chars.next() == Some(*c) && chars.next().is_none()
            }
            Token::Whitespace => literal == " ",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Alphabetic(text) | Token::Numeric(text) => f.write_str(text),
            Token::Symbol(c) => write!(f, "{}", c),
            Token::Whitespace => f.write_str(" "),
        }
    }
}
