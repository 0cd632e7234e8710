//! Errors produced while generating and checking programs.

use std::process::ExitStatus;

use num_bigint::BigInt;
use thiserror::Error;

use crate::parser::ParserError;

/// Everything that can go wrong between choosing `N` and checking the compiled program's rows.
#[derive(Error, Debug)]
pub enum Error {
    /// A term sequence needs at least one term.
    #[error("the term sequence must contain at least one term")]
    EmptySequence,

    /// Every literal of the generated expression must fit in a C `int`.
    #[error("{0} terms requested, but at most {max} fit in a C int", max = i32::MAX)]
    TooManyTerms(u32),

    /// The loop bound must fit in a C `int`.
    #[error("{0} rows requested, but at most {max} fit in a C int", max = i32::MAX)]
    TooManyRows(u32),

    /// The product expression could not be parsed back.
    #[error("malformed product expression: {0}")]
    Parse(#[from] ParserError),

    /// A term divided by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The product did not evaluate to one.
    #[error("product evaluated to {0}, not 1")]
    NotOne(BigInt),

    /// Reading or writing a file, stream or child process failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The C compiler rejected the generated program.
    #[error("C compiler exited with {status}:\n{stderr}")]
    Compiler {
        /// Exit status of the compiler.
        status: ExitStatus,

        /// Whatever the compiler printed to stderr.
        stderr: String,
    },

    /// The compiled program exited unsuccessfully.
    #[error("generated program exited with {0}")]
    Program(ExitStatus),

    /// A printed row did not read `<i>: ... = 1`.
    #[error("row {line} is wrong: {text:?}")]
    BadRow {
        /// Zero-based index of the offending row.
        line: usize,

        /// The text that was printed instead.
        text: String,
    },

    /// The program printed the wrong number of rows.
    #[error("expected {expected} rows, found {found}")]
    RowCount {
        /// Number of rows the loop bound asks for.
        expected: usize,

        /// Number of rows actually printed.
        found: usize,
    },
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
