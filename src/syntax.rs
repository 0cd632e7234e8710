//! Syntax of the generated product: the terms it is built from, and the tree it parses back into.

use std::fmt::Display;

use num_bigint::BigUint;

/// A self-division `k/k`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Term(pub u32);

impl Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, self.0)
    }
}

/// The terms `1/1`, `2/2`, ..., `N/N`, in ascending order. Only [`crate::terms::terms`] builds
/// these, so a sequence is never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermSequence(pub(crate) Vec<Term>);

impl TermSequence {
    /// The number of terms, `N`.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no terms. Never true for a built sequence.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The last term, `N/N`.
    pub fn last(&self) -> Term {
        // Non-empty by construction.
        self.0[self.0.len() - 1]
    }

    /// Iterates over the terms in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &Term> {
        self.0.iter()
    }
}

/// A complete program to generate: the unrolled product, and how many rows print it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    /// The terms of the product.
    pub terms: TermSequence,

    /// Upper bound of the row loop.
    pub rows: u32,
}

/// An integer expression built from `*` and `/`. Operators associate to the left, as C parses them,
/// so the chain is kept flat: `first op0 rest0 op1 rest1 ...` means `((first op0 rest0) op1 rest1)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expr {
    /// The leftmost literal.
    pub first: BigUint,

    /// Each following operator with its right operand, in source order.
    pub rest: Vec<(BinaryOp, BigUint)>,
}

impl Expr {
    /// Number of literals in the expression.
    pub fn operands(&self) -> usize {
        self.rest.len() + 1
    }
}

/// The operators that may appear in a product.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    /// `*`
    Mul,

    /// `/`, truncating toward zero.
    Div,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_renders_as_self_division() {
        assert_eq!(Term(1).to_string(), "1/1");
        assert_eq!(Term(10000).to_string(), "10000/10000");
    }
}
