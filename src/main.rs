use std::io;

use clap::Parser;
use simia::{eval_source, interpreter::environment::Environment, repl};

/// simia is a small, dynamically-typed, expression-oriented scripting
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// A program to evaluate directly. Without it, an interactive session
    /// starts.
    program: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(program) = args.program {
        let env = Environment::new();
        match eval_source(&program, &env) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    println!("Hello {}! This is the Simia programming language.", whoami::username());
    println!("Feel free to type in commands.");

    if let Err(e) = repl::start(&mut io::stdin().lock(), &mut io::stdout()) {
        eprintln!("Lost the terminal: {e}");
        std::process::exit(1);
    }
}
