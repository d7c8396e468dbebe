use std::{
    io::{self, BufRead, IsTerminal, Write},
    process::ExitCode,
};

use calcexpr::{
    Session, SessionConfig,
    interpreter::{evaluator::function::core::BUILTIN_FUNCTIONS, session::DEFAULT_MAX_DEPTH},
    util::num::{DISPLAY_PRECISION, format_general},
};
use clap::Parser;

/// calcexpr evaluates arithmetic and logical expressions with variables and
/// builtin functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for `rand`, `percent` and `roll`, for reproducible results.
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum nesting of parentheses, calls and unary operators.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Pre-loads a variable before evaluating, for example `--set rate=0.07`.
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    set: Vec<(String, f64)>,

    /// Lists the builtin functions and exits.
    #[arg(long)]
    functions: bool,

    /// Pipe mode prints only the value of each expression.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Expressions to evaluate in order. Lines are read from standard input
    /// when none are given.
    expressions: Vec<String>,
}

fn parse_assignment(text: &str) -> Result<(String, f64), String> {
    let (name, value) = text.split_once('=')
                            .ok_or_else(|| format!("expected NAME=VALUE, found '{text}'"))?;
    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("invalid value for '{}': {e}", name.trim()))?;
    Ok((name.trim().to_string(), value))
}

/// Installs a `tracing` subscriber when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr).with_target(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

/// Evaluates one expression and prints the outcome. Returns `false` on
/// failure.
fn run_line(session: &mut Session, expression: &str, pipe_mode: bool) -> bool {
    let value = session.evaluate(expression);
    let shown = format_general(value, DISPLAY_PRECISION);

    if pipe_mode {
        println!("{shown}");
    } else {
        println!("{expression} = {shown}");
    }

    let error = session.last_error();
    if error.is_empty() {
        true
    } else {
        eprintln!("{error}");
        false
    }
}

fn run_stdin(session: &mut Session, pipe_mode: bool) -> io::Result<bool> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal() && !pipe_mode;
    let mut all_ok = true;
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print!("? ");
            io::stdout().flush()?;
        }
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let expression = line.trim();
        if expression.is_empty() {
            break;
        }
        all_ok &= run_line(session, expression, pipe_mode);
    }
    Ok(all_ok)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    if args.functions {
        for name in BUILTIN_FUNCTIONS {
            println!("{name}");
        }
        return ExitCode::SUCCESS;
    }

    let mut session = Session::with_config(SessionConfig { seed:      args.seed,
                                                           max_depth: args.max_depth, });
    for (name, value) in &args.set {
        session.save_symbol(name, *value);
    }

    let all_ok = if args.expressions.is_empty() {
        match run_stdin(&mut session, args.pipe_mode) {
            Ok(all_ok) => all_ok,
            Err(e) => {
                eprintln!("Failed to read standard input: {e}");
                false
            },
        }
    } else {
        args.expressions
            .iter()
            .fold(true, |ok, expression| run_line(&mut session, expression, args.pipe_mode) && ok)
    };

    if all_ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
