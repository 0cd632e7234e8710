//! Parser for the unrolled product expression.

use std::{error::Error, fmt::Display};

use chumsky::{
    prelude::{end, just, Simple},
    text::{self, TextParser},
    Parser,
};
use num_bigint::BigUint;

use crate::syntax::{BinaryOp, Expr};

/// Adapter to make `chumsky`'s parser errors usable as standard Rust errors.
#[derive(Debug)]
pub struct ParserError(pub Vec<Simple<char>>);

impl Display for ParserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for e in &self.0 {
            write!(f, "{}", e)?;
        }
        Ok(())
    }
}

impl Error for ParserError {}

/// Parser for a chain of decimal integers joined by `*` and `/`, with any whitespace (newlines
/// included) between tokens. Operators associate to the left, as in C.
pub fn parser() -> impl Parser<char, Expr, Error = Simple<char>> {
    let literal = text::int::<char, Simple<char>>(10)
        .try_map(|digits: String, span| {
            digits
                .parse::<BigUint>()
                .map_err(|e| Simple::custom(span, e.to_string()))
        })
        .padded();

    let op = just('*')
        .to(BinaryOp::Mul)
        .or(just('/').to(BinaryOp::Div))
        .padded();

    literal
        .clone()
        .then(op.then(literal).repeated())
        .map(|(first, rest)| Expr { first, rest })
        .then_ignore(end())
}

/// Parses `source` as a product expression.
pub fn parse_expression(source: &str) -> Result<Expr, ParserError> {
    parser().parse(source).map_err(ParserError)
}
