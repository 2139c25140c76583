use std::io::{BufRead, Write};

use crate::interpreter::{
    environment::Environment, evaluator::core::eval_program, lexer::Lexer, parser::core::Parser,
};

/// The prompt printed before every input line.
pub const PROMPT: &str = ">> ";

const MASCOT: &str = r#"
            .-"-.
          _/_-.-_\_
         / __} {__ \
        / //  "  \\ \
       / / \'---'/ \ \
       \ \_/`"""`\_/ /
        \           /
"#;

/// Runs the read-eval-print loop until `input` is exhausted.
///
/// Each iteration prints the prompt, reads one line, and parses it. Parse
/// diagnostics are printed under the mascot, one per line; otherwise the
/// line is evaluated and the resulting value printed. Bindings live in one
/// environment for the whole session, so a `let` on one line is visible on
/// every later line.
///
/// # Errors
/// Returns any I/O error raised by `input` or `output`. Reaching end of
/// input is a normal exit, not an error.
pub fn start(input: &mut impl BufRead, output: &mut impl Write) -> std::io::Result<()> {
    let env = Environment::new();
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let mut parser = Parser::new(Lexer::new(&line));
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            write!(output, "{MASCOT}")?;
            writeln!(output, "Oops! The ape lost its grip on that one!")?;
            writeln!(output, "parser errors:")?;
            for error in parser.errors() {
                writeln!(output, "\t{error}")?;
            }
            continue;
        }

        match eval_program(&program, &env) {
            Ok(Some(value)) => writeln!(output, "{value}")?,
            Ok(None) => {},
            Err(error) => writeln!(output, "ERROR: {error}")?,
        }
    }
}
