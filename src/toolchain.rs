//! Driving the system C compiler, and checking what the compiled program prints.

use std::{
    ffi::OsString,
    fs,
    path::Path,
    process::{Command, Stdio},
};

use tracing::{debug, info};

use crate::{
    backends::c::{documentation, generate_c},
    syntax::Program,
    Error, Result,
};

/// Environment variable naming the C compiler, as `make` uses it.
pub const CC_VAR: &str = "CC";

/// A C compiler invocation: the executable plus any flags placed before the source file.
#[derive(Clone, Debug)]
pub struct CCompiler {
    command: OsString,
    flags: Vec<String>,
}

impl CCompiler {
    /// Uses `$CC`, or `cc` if it is unset.
    pub fn from_env() -> Self {
        let command = std::env::var_os(CC_VAR).unwrap_or_else(|| OsString::from("cc"));
        Self::new(command)
    }

    /// Uses the given compiler executable.
    pub fn new(command: impl Into<OsString>) -> Self {
        Self {
            command: command.into(),
            flags: Vec::new(),
        }
    }

    /// Adds a flag, e.g. `-O2`.
    pub fn flag(mut self, flag: impl Into<String>) -> Self {
        self.flags.push(flag.into());
        self
    }

    /// Whether the compiler can be launched at all.
    pub fn is_available(&self) -> bool {
        Command::new(&self.command)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Compiles C `source` into the executable `output`.
    pub fn compile(&self, source: &str, output: &Path) -> Result<()> {
        let dir = tempfile::tempdir()?;
        let source_path = dir.path().join("constsum.c");
        fs::write(&source_path, source)?;

        info!(
            compiler = ?self.command,
            flags = ?self.flags,
            output = %output.display(),
            "compiling generated program"
        );
        let out = Command::new(&self.command)
            .args(&self.flags)
            .arg(&source_path)
            .arg("-o")
            .arg(output)
            .output()?;

        if !out.status.success() {
            return Err(Error::Compiler {
                status: out.status,
                stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
            });
        }
        Ok(())
    }
}

/// Runs a compiled program to completion and returns what it printed.
pub fn run(executable: &Path) -> Result<String> {
    debug!(executable = %executable.display(), "running generated program");
    let out = Command::new(executable).stderr(Stdio::inherit()).output()?;
    if !out.status.success() {
        return Err(Error::Program(out.status));
    }
    Ok(String::from_utf8_lossy(&out.stdout).into_owned())
}

/// Checks that `stdout` holds exactly one `  i: 1/1*2/2*3/3* ... N/N = 1` line per row, with `i`
/// counting up from 0.
pub fn check_rows(stdout: &str, program: &Program) -> Result<()> {
    let doc = documentation(&program.terms);
    let expected = program.rows as usize;

    let mut found = 0;
    for (line, text) in stdout.lines().enumerate() {
        if text != format!("{:>3}: {} = 1", line, doc) {
            return Err(Error::BadRow {
                line,
                text: text.to_string(),
            });
        }
        found += 1;
    }

    if found != expected {
        return Err(Error::RowCount { expected, found });
    }
    Ok(())
}

/// Generates `program`, compiles it in a scratch directory, runs it and checks every row.
pub fn round_trip(compiler: &CCompiler, program: &Program) -> Result<()> {
    let dir = tempfile::tempdir()?;
    round_trip_at(compiler, program, &dir.path().join("constsum"))
}

/// Like [`round_trip`], but leaves the executable at `exe`.
pub fn round_trip_at(compiler: &CCompiler, program: &Program, exe: &Path) -> Result<()> {
    compiler.compile(&generate_c(program), exe)?;
    let stdout = run(exe)?;
    check_rows(&stdout, program)?;

    info!(rows = program.rows, "every row printed 1");
    Ok(())
}
