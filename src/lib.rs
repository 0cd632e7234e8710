//! Constant-sum generator.
//!
//! Emits a C program whose every printed row is the product `1/1*2/2*...*N/N`, unrolled term by
//! term, which always evaluates to 1.

#![deny(missing_docs)]

pub mod backends;
pub mod error;
pub mod eval;
pub mod parser;
pub mod syntax;
pub mod terms;
pub mod toolchain;

pub use error::{Error, Result};

/// Number of terms generated when none is requested.
pub const DEFAULT_TERMS: u32 = 10000;
