//! Convenience functions for tokenizing deadline titles
//!
//! The actual tokenization is handled entirely by logos. The catch-all symbol
//! rule means logos never reports an error in practice; if it ever does, the
//! offending character is kept as a symbol so no input is lost.

use crate::datetime::token::Token;
use logos::Logos;

/// Tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with_spans(source)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Tokenize a string and collect tokens with their byte spans
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                if let Some(c) = lexer.slice().chars().next() {
                    tokens.push((Token::Symbol(c), span));
                }
            }
        }
    }

    tokens
}

/// Re-join tokens into text, whitespace rendered as a single space
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(Token::to_string).collect()
}
