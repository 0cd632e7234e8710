//! Constant-sum generator CLI.

use std::{
    error::Error,
    fmt::Display,
    fs::File,
    io::{self, BufWriter},
    path::PathBuf,
    process::exit,
    str::FromStr,
};

use clap::Parser;
use constsum::{
    backends::c,
    eval, terms,
    toolchain::{self, CCompiler},
    DEFAULT_TERMS,
};
use tracing::info;

/// Optimization levels handed to the C compiler.
#[derive(Debug)]
enum Optimization {
    Numeric(usize),
    Size,
    Debugging,
    Speed,
}

impl Display for Optimization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Optimization::Numeric(n) => write!(f, "{}", n),
            Optimization::Size => write!(f, "s"),
            Optimization::Debugging => write!(f, "g"),
            Optimization::Speed => write!(f, "fast"),
        }
    }
}

impl FromStr for Optimization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Optimization::*;

        let levels = [
            ("0", "Disable all optimizations.", Numeric(0)),
            ("1", "Basic optimizations.", Numeric(1)),
            ("2", "Standard optimizations.", Numeric(2)),
            ("3", "Optimize for speed at the expense of size.", Numeric(3)),
            ("s", "Optimize for size rather than speed.", Size),
            ("g", "Optimizations that do not interfere with debugging.", Debugging),
            (
                "fast",
                "Optimize for speed at the expense of strict standards compliance.",
                Speed,
            ),
        ];

        if s == "list" {
            eprintln!(
                "{}",
                levels
                    .iter()
                    .map(|(name, description, _)| format!("\n    -O{name} : {description}"))
                    .fold("optimization levels:".to_string(), |s, line| s + &line)
            );
            exit(1)
        } else {
            levels
                .into_iter()
                .find(|(name, _, _)| name == &s)
                .map(|(_, _, opt)| opt)
                .ok_or_else(|| "use -Olist to list".to_string())
        }
    }
}

/// What to do with the generated program.
#[derive(Debug)]
enum Target {
    /// Emit the C source code.
    CSource,

    /// Pass the C source to the system C compiler and emit an executable.
    Executable,

    /// Compile the program, run it, and check that every row prints 1.
    Run,
}

impl Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Target::CSource => "c",
                Target::Executable => "exe",
                Target::Run => "run",
            }
        )
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Target::*;

        let targets = [
            ("c", "C source code.", CSource),
            ("exe", "Executable binary file.", Executable),
            ("run", "Compile, run and check every row.", Run),
        ];

        if s == "list" {
            eprintln!(
                "{}",
                targets
                    .iter()
                    .map(|(name, description, _)| format!("\n    -t{name} : {description}"))
                    .fold("targets:".to_string(), |s, line| s + &line)
            );
            exit(1)
        } else {
            targets
                .into_iter()
                .find(|(name, _, _)| name == &s)
                .map(|(_, _, target)| target)
                .ok_or_else(|| "use -tlist to list".to_string())
        }
    }
}

/// Generates a C program printing the product 1/1*2/2*...*N/N, which is always 1, once per row.
#[derive(Parser, Debug)]
#[clap(version = "0.1.0")]
struct Args {
    /// Number of terms in the product.
    #[clap(short = 'n', long, env = "CONSTSUM_TERMS", default_value_t = DEFAULT_TERMS)]
    terms: u32,

    /// Number of rows the program prints. Defaults to the number of terms.
    #[clap(short = 'r', long)]
    rows: Option<u32>,

    /// Target to generate. Use `-tlist` to list possible targets.
    #[clap(short = 't', default_value_t = Target::CSource)]
    target: Target,

    /// C compiler optimization level. Use `-Olist` to list possible optimization levels.
    #[clap(short = 'O', default_value_t = Optimization::Numeric(0))]
    optimization: Optimization,

    /// Output file to generate. C source goes to stdout and executables to `a.out` by default;
    /// the `run` target keeps its executable here when given.
    #[clap(short = 'o')]
    output: Option<PathBuf>,

    /// Check that the product evaluates to 1 before generating anything.
    #[clap(long)]
    check: bool,

    /// Log more; repeat for more detail.
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log nothing.
    #[clap(short, long)]
    quiet: bool,
}

impl Args {
    /// Logs go to stderr, so stdout carries only the generated program.
    fn init_logging(&self) {
        use tracing_subscriber::{fmt, EnvFilter};

        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
    }

    fn compiler(&self) -> CCompiler {
        CCompiler::from_env().flag(format!("-O{}", self.optimization))
    }
}

fn main() {
    fn main_e() -> Result<(), Box<dyn Error>> {
        let args = Args::parse();
        args.init_logging();

        let program = terms::program(args.terms, args.rows)?;
        if args.check {
            eval::verify(&program.terms)?;
        }

        info!(
            output_target = %args.target,
            terms = args.terms,
            rows = program.rows,
            "generating"
        );
        match args.target {
            Target::CSource => match &args.output {
                Some(path) => c::emit(&program, BufWriter::new(File::create(path)?))?,
                None => c::emit(&program, io::stdout().lock())?,
            },
            Target::Executable => {
                let output = args.output.clone().unwrap_or_else(|| PathBuf::from("a.out"));
                args.compiler().compile(&c::generate_c(&program), &output)?;
            }
            Target::Run => {
                match &args.output {
                    Some(exe) => toolchain::round_trip_at(&args.compiler(), &program, exe)?,
                    None => toolchain::round_trip(&args.compiler(), &program)?,
                }
                println!("{} rows checked, every product is 1", program.rows);
            }
        }

        Ok(())
    }

    match main_e() {
        Ok(()) => (),
        Err(e) => {
            eprintln!("constsum fatal error: {}", e);
            exit(1);
        }
    }
}
