use std::{fs, process::ExitCode};

use clap::Parser;
use mathfn::{Library, compile_declaration_with};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// mathfn compiles a one-line function declaration such as
/// `f(x)={x>=0}x^2+sin(x)` and evaluates it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells mathfn to read the declaration from a file.
    #[arg(short, long)]
    file: bool,

    /// Prints the generated source of the compiled function.
    #[arg(short, long)]
    source: bool,

    /// Prints the parsed declaration.
    #[arg(short, long)]
    ast: bool,

    /// Logs every compilation phase to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// The declaration, or its path with `--file`.
    declaration: String,

    /// Arguments, one per declared parameter.
    #[arg(allow_negative_numbers = true)]
    values: Vec<f64>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env()
                                                  .unwrap_or_else(|_| EnvFilter::new(default_level)))
                             .with_writer(std::io::stderr)
                             .init();

    let source = if args.file {
        match fs::read_to_string(&args.declaration) {
            Ok(contents) => contents,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.declaration);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.declaration
    };

    let function = match compile_declaration_with(source.trim(), &Library::standard()) {
        Ok(function) => function,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    if args.ast {
        println!("{:#?}", function.declaration());
    }
    if args.source {
        println!("{}", function.source());
    }

    if args.values.len() != function.arity() {
        eprintln!("'{}' expects {} argument(s), but found {}.",
                  function.name(),
                  function.arity(),
                  args.values.len());
        return ExitCode::FAILURE;
    }

    debug!(name = function.name(), values = ?args.values, "calling");
    match function.call(&args.values) {
        Some(value) => println!("{value}"),
        None => println!("undefined"),
    }
    ExitCode::SUCCESS
}
