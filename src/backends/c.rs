//! Backend for direct generation of C code.

use std::io::Write;

use tracing::debug;

use crate::{
    syntax::{Program, TermSequence},
    Result,
};

/// Separator between consecutive terms of the unrolled product.
const TERM_SEPARATOR: &str = "*\n";

/// The full product `1/1*\n2/2*\n...*\nN/N`, one term per line.
pub fn expression(terms: &TermSequence) -> String {
    terms
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(TERM_SEPARATOR)
}

/// The abbreviated form shown in each printed row, e.g. `1/1*2/2*3/3* ... 3/3`.
pub fn documentation(terms: &TermSequence) -> String {
    format!("1/1*2/2*3/3* ... {}", terms.last())
}

/// Generates a C program that prints one row per loop iteration, each showing the documentation
/// text and the value of the unrolled product. Returns the source code without a trailing
/// newline; [`emit`] adds one.
pub fn generate_c(program: &Program) -> String {
    let source = format!(
        r#"
#include <stdio.h>
int main() {{
  for(int i = 0; i < {rows}; i++){{
    printf("%3d: {doc} = %d\n",
    i, {expr});
  }}
  return 0;
}}"#,
        rows = program.rows,
        doc = documentation(&program.terms),
        expr = expression(&program.terms),
    );

    debug!(
        terms = program.terms.len(),
        rows = program.rows,
        bytes = source.len(),
        "generated C source"
    );
    source
}

/// Writes the generated program to `out` in a single write, followed by a newline.
pub fn emit(program: &Program, mut out: impl Write) -> Result<()> {
    let mut source = generate_c(program);
    source.push('\n');
    out.write_all(source.as_bytes())?;
    out.flush()?;
    Ok(())
}
