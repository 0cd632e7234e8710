//! Evaluation of product expressions with C integer semantics.

use num_bigint::BigInt;
use num_traits::{One, Zero};
use tracing::{debug, info};

use crate::{
    backends::c::expression,
    parser::parse_expression,
    syntax::{BinaryOp, Expr, TermSequence},
    Error, Result,
};

/// Evaluates an expression left to right; division truncates toward zero, like C's `/` on `int`.
pub fn evaluate(expr: &Expr) -> Result<BigInt> {
    expr.rest
        .iter()
        .try_fold(BigInt::from(expr.first.clone()), |acc, (op, n)| {
            let n = BigInt::from(n.clone());
            match op {
                BinaryOp::Mul => Ok(acc * n),
                BinaryOp::Div if n.is_zero() => Err(Error::DivisionByZero),
                BinaryOp::Div => Ok(acc / n),
            }
        })
}

/// Renders the product of `terms`, parses it back and checks that it evaluates to 1.
pub fn verify(terms: &TermSequence) -> Result<()> {
    let expr = parse_expression(&expression(terms))?;
    debug!(operands = expr.operands(), "parsed product");
    let value = evaluate(&expr)?;
    if !value.is_one() {
        return Err(Error::NotOne(value));
    }

    info!(terms = terms.len(), "product evaluates to 1");
    Ok(())
}
