use std::{fs, path::Path, process::ExitCode};

use anyhow::{Context as _, Result};
use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};
use scicalc::{AngleMode, Calculator, EvalError, util::display::format_result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// scicalc is a safe scientific calculator for the command line.
///
/// Without an expression it starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells scicalc to read expressions from a file, one per line.
    #[arg(short, long)]
    file: bool,

    /// Angle mode for trigonometric functions (`deg` or `rad`).
    #[arg(short, long, env = "SCICALC_ANGLE_MODE", default_value = "deg")]
    mode: AngleMode,

    /// Prints results with full precision instead of the display format.
    #[arg(short, long)]
    raw: bool,

    /// Enables debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,

    /// The expression to evaluate, or a file path with `--file`.
    contents: Option<String>,
}

const HELP: &str = "\
Enter an expression such as 2(3+4), 2π, sin(30) or √9.
Commands:
  deg    use degrees
  rad    use radians
  mode   toggle between degrees and radians
  help   show this message
  quit   leave (also: exit, Ctrl-D)";

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let calc = Calculator::with_mode(args.mode);
    let outcome = match (&args.contents, args.file) {
        (Some(path), true) => run_file(calc, Path::new(path), args.raw),
        (Some(expr), false) => Ok(print_result(&calc.evaluate(expr), args.raw)),
        (None, _) => repl(calc, args.raw).map(|()| true),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        },
    }
}

/// Logs go to stderr so results on stdout stay pipeable.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_target(false)
                             .with_writer(std::io::stderr)
                             .init();
}

fn render(value: f64, raw: bool) -> String {
    if raw { value.to_string() } else { format_result(value) }
}

/// Prints a result on stdout or its error on stderr. Returns whether the
/// evaluation succeeded.
fn print_result(result: &Result<f64, EvalError>, raw: bool) -> bool {
    match result {
        Ok(value) => {
            println!("{}", render(*value, raw));
            true
        },
        Err(e) => {
            eprintln!("Error: {e}");
            false
        },
    }
}

/// Evaluates every non-empty line of a file that does not start with `#`.
fn run_file(calc: Calculator, path: &Path, raw: bool) -> Result<bool> {
    let source = fs::read_to_string(path).with_context(|| {
                                              format!("failed to read the input file '{}'",
                                                      path.display())
                                          })?;

    let mut all_ok = true;
    for (number, line) in source.lines().enumerate() {
        let expr = line.trim();
        if expr.is_empty() || expr.starts_with('#') {
            continue;
        }
        match calc.evaluate(expr) {
            Ok(value) => println!("{expr} = {}", render(value, raw)),
            Err(e) => {
                eprintln!("Error: line {}: {e}", number + 1);
                all_ok = false;
            },
        }
    }

    Ok(all_ok)
}

fn repl(mut calc: Calculator, raw: bool) -> Result<()> {
    let mut rl = DefaultEditor::new().context("failed to initialize readline")?;
    println!("scicalc {}. Type 'help' for commands.", env!("CARGO_PKG_VERSION"));

    loop {
        match rl.readline(&format!("{}> ", calc.mode())) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                match line {
                    "quit" | "exit" => break,
                    "help" => println!("{HELP}"),
                    "deg" => calc.set_mode(AngleMode::Degrees),
                    "rad" => calc.set_mode(AngleMode::Radians),
                    "mode" => println!("{}", calc.toggle_mode()),
                    expr => {
                        print_result(&calc.evaluate(expr), raw);
                    },
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            },
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("failed to read input"),
        }
    }

    debug!("session ended");
    Ok(())
}
