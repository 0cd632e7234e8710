//! Construction of the term sequence.

use tracing::debug;

use crate::{
    syntax::{Program, Term, TermSequence},
    Error, Result,
};

/// Builds the sequence `1/1`, `2/2`, ..., `n/n`. Fails if `n` is zero, or too large for every
/// term to be a C `int` literal.
pub fn terms(n: u32) -> Result<TermSequence> {
    if n == 0 {
        return Err(Error::EmptySequence);
    }
    if n > i32::MAX as u32 {
        return Err(Error::TooManyTerms(n));
    }

    debug!(terms = n, "building term sequence");
    Ok(TermSequence((1..=n).map(Term).collect()))
}

/// Builds a program with `n` terms and `rows` rows; `rows` defaults to `n`.
pub fn program(n: u32, rows: Option<u32>) -> Result<Program> {
    let terms = terms(n)?;
    let rows = rows.unwrap_or(n);
    if rows > i32::MAX as u32 {
        return Err(Error::TooManyRows(rows));
    }

    Ok(Program { terms, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_terms() {
        let seq = terms(3).unwrap();
        let rendered: Vec<String> = seq.iter().map(Term::to_string).collect();
        assert_eq!(rendered, ["1/1", "2/2", "3/3"]);
    }

    #[test]
    fn kth_term_is_k_over_k() {
        for n in [1, 2, 17, 500] {
            let seq = terms(n).unwrap();
            assert_eq!(seq.len(), n as usize);
            assert!(!seq.is_empty());
            for (i, term) in seq.iter().enumerate() {
                let k = i + 1;
                assert_eq!(term.to_string(), format!("{k}/{k}"));
            }
            assert_eq!(seq.last(), Term(n));
        }
    }

    #[test]
    fn zero_terms_is_rejected() {
        assert!(matches!(terms(0), Err(Error::EmptySequence)));
    }

    #[test]
    fn terms_must_fit_in_c_int() {
        let n = i32::MAX as u32 + 1;
        assert!(matches!(terms(n), Err(Error::TooManyTerms(m)) if m == n));
    }

    #[test]
    fn rows_default_to_terms() {
        assert_eq!(program(7, None).unwrap().rows, 7);
        assert_eq!(program(7, Some(0)).unwrap().rows, 0);
        assert!(matches!(
            program(1, Some(u32::MAX)),
            Err(Error::TooManyRows(u32::MAX))
        ));
    }
}
