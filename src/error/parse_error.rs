#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
///
/// The parser records every diagnostic it encounters and keeps going, so a
/// single parse may surface several of these. Token kinds are reported by
/// their diagnostic names (`IDENT`, `INT`, `=`, `(`, and so on).
pub enum ParseError {
    /// The token after the current one was not the expected kind.
    UnexpectedToken {
        /// The kind the grammar called for.
        expected: &'static str,
        /// The kind actually found.
        found:    &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A token that cannot begin an expression appeared in expression
    /// position.
    NoPrefixParseFunction {
        /// The kind of the offending token.
        kind: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal did not fit a 64-bit signed integer.
    InvalidIntegerLiteral {
        /// The literal text as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found, line } => write!(f,
                "Error on line {line}: expected next token to be {expected}, got {found} instead"),

            Self::NoPrefixParseFunction { kind, line } => {
                write!(f, "Error on line {line}: no prefix parse function for {kind} found")
            },

            Self::InvalidIntegerLiteral { literal, line } => {
                write!(f, "Error on line {line}: could not parse \"{literal}\" as integer")
            },
        }
    }
}

impl std::error::Error for ParseError {}
