//! REPL and file driver for the Hexa interpreter

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use hexa::{Evaluator, Parser, Scanner, Value};

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    match args.len() {
        1 => repl(),
        2 => run_file(&args[1]),
        _ => {
            eprintln!("Usage: hexa [script]");
            Ok(ExitCode::from(64))
        }
    }
}

/// Scans and parses a chunk of source into top-level expressions
fn parse_source(source: &str) -> hexa::Result<Vec<Value>> {
    let mut scanner = Scanner::new(source);
    let tokens = scanner.scan_tokens()?;
    Parser::new(tokens).parse()
}

/// Runs a script file: parse errors abort the run, runtime errors are
/// reported per expression and execution continues with the next one
fn run_file(path: &str) -> anyhow::Result<ExitCode> {
    let source =
        fs::read_to_string(path).with_context(|| format!("could not read file '{}'", path))?;

    let program = match parse_source(&source) {
        Ok(program) => program,
        Err(err) => {
            eprintln!("{}", err);
            return Ok(ExitCode::from(65));
        }
    };

    let mut evaluator = Evaluator::new();
    for expr in &program {
        match evaluator.eval(expr) {
            // Only non-nil results are echoed
            Ok(Value::Nil) => {}
            Ok(value) => println!("{}", value),
            Err(err) => eprintln!("Runtime error: {}", err),
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Interactive prompt; the environment persists across lines
fn repl() -> anyhow::Result<ExitCode> {
    println!("Hexa {} - Lisp-like expression language", hexa::VERSION);

    let mut evaluator = Evaluator::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let program = match parse_source(&line) {
            Ok(program) => program,
            Err(err) => {
                eprintln!("{}", err);
                continue;
            }
        };

        for expr in &program {
            match evaluator.eval(expr) {
                Ok(value) => println!("=> {}", value),
                Err(err) => eprintln!("Runtime error: {}", err),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
