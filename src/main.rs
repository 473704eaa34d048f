use std::io::{self, BufRead, Write};

use clap::Parser;
use tally::{
    error::RuntimeError,
    evaluate,
    interpreter::evaluator::core::Environment,
    ops::{self, Operation},
    util::format_number,
};

/// tally is an interactive command-line calculator with named operations
/// and a safe arithmetic expression evaluator.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a single expression and exit instead of starting the
    /// interactive session.
    expression: Option<String>,
}

const PROMPT: &str =
    "operation (add, subtract, multiply, divide, power(^), xor(^^), bitwise(&,|), sigma) or expression: ";

fn main() {
    let args = Args::parse();

    if let Some(expression) = args.expression {
        let mut env = Environment::new();
        match evaluate(&expression, &mut env) {
            Ok(None) => println!("OK"),
            Ok(Some(value)) => println!("{}", format_number(value)),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    println!("Simple calculator. Type 'q' or 'quit' to exit.");

    let mut env = Environment::new();
    let stdin = io::stdin();

    loop {
        let Some(input) = read_input(&stdin, PROMPT) else {
            break;
        };
        if is_quit(&input) {
            break;
        }

        // Recognized operation aliases take the two-number flow; everything
        // else goes to the expression evaluator with the session state.
        if Operation::resolve(&input).is_some() {
            let Some(first) = read_input(&stdin, "first number: ") else {
                break;
            };
            if is_quit(&first) {
                break;
            }
            let Some(second) = read_input(&stdin, "second number: ") else {
                break;
            };
            if is_quit(&second) {
                break;
            }

            let (a, b) = match (parse_number(&first), parse_number(&second)) {
                (Ok(a), Ok(b)) => (a, b),
                (Err(e), _) | (_, Err(e)) => {
                    println!("{e}");
                    continue;
                },
            };

            match ops::apply(&input, a, b) {
                Ok(result) => println!("{}", format_number(result)),
                Err(e) => println!("{e}"),
            }
        } else {
            match evaluate(&input, &mut env) {
                Ok(None) => println!("OK"),
                Ok(Some(value)) => println!("{}", format_number(value)),
                Err(e) => println!("{e}"),
            }
        }
    }

    println!("Bye.");
}

/// Prints a prompt, then reads and trims one line of input.
///
/// Returns `None` at end of input, which ends the session.
fn read_input(stdin: &io::Stdin, prompt: &str) -> Option<String> {
    print!("{prompt}");
    io::stdout().flush().ok()?;

    let mut line = String::new();
    if stdin.lock().read_line(&mut line).ok()? == 0 {
        return None;
    }
    Some(line.trim().to_string())
}

/// Returns `true` for session-termination keywords, case-insensitively.
fn is_quit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "q" | "quit" | "exit")
}

/// Parses numeric prompt input, carrying the original text on failure.
fn parse_number(text: &str) -> Result<f64, RuntimeError> {
    text.parse()
        .map_err(|_| RuntimeError::InvalidNumber { text: text.to_string() })
}
