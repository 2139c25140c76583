use std::fmt;

use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; binding or parameter names such as `x` or `adder`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),
    /// Integer literal tokens, such as `42`. The literal text is kept
    /// verbatim; the parser turns it into a number so an out-of-range
    /// literal is reported as a parse diagnostic, not a scan failure.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Int(String),
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `!`
    #[token("!")]
    Bang,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// Any character no other pattern claims, kept as its literal text.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 1)]
    Illegal(String),
    /// End of input. Emitted by the scanner forever once the source is
    /// exhausted.
    Eof,

    /// Newlines; counted for diagnostics, then skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Tabs, spaces and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the diagnostic name of this token's kind, as it appears in
    /// parser error messages: data-carrying kinds report their class
    /// (`IDENT`, `INT`, `ILLEGAL`), everything else its spelling.
    ///
    /// # Example
    /// ```
    /// use simia::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Assign.kind_name(), "=");
    /// assert_eq!(Token::Ident("x".to_string()).kind_name(), "IDENT");
    /// ```
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::Ident(_) => "IDENT",
            Self::Int(_) => "INT",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Bang => "!",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Illegal(_) => "ILLEGAL",
            Self::Eof => "EOF",
            // Both are consumed inside the scanner and never surface.
            Self::NewLine | Self::Ignored => unreachable!(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind_name())
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Streaming scanner over an input string.
///
/// Each call to [`next_token`](Self::next_token) yields the next token and
/// the line it starts on. Scanning never fails: unrecognized characters
/// come back as [`Token::Illegal`], and once the input is exhausted every
/// further call yields [`Token::Eof`].
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a scanner over `input`, positioned at its start.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { inner: Token::lexer_with_extras(input, LexerExtras { line: 1 }), }
    }

    /// Scans and returns the next token along with its source line.
    ///
    /// # Example
    /// ```
    /// use simia::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("let five = 5;");
    ///
    /// assert_eq!(lexer.next_token().0, Token::Let);
    /// assert_eq!(lexer.next_token().0, Token::Ident("five".to_string()));
    /// assert_eq!(lexer.next_token().0, Token::Assign);
    /// assert_eq!(lexer.next_token().0, Token::Int("5".to_string()));
    /// assert_eq!(lexer.next_token().0, Token::Semicolon);
    /// assert_eq!(lexer.next_token().0, Token::Eof);
    /// assert_eq!(lexer.next_token().0, Token::Eof);
    /// ```
    pub fn next_token(&mut self) -> (Token, usize) {
        let token = match self.inner.next() {
            Some(Ok(token)) => token,
            Some(Err(())) => Token::Illegal(self.inner.slice().to_string()),
            None => Token::Eof,
        };

        (token, self.inner.extras.line)
    }
}
