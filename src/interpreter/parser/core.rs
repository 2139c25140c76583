use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::lexer::{Lexer, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Binding strength of an operator position, ascending.
///
/// An infix token is consumed while its precedence is strictly greater
/// than the precedence the surrounding context is parsing at; equal
/// strength stops the loop, which is what makes the binary operators
/// left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Starting strength; binds nothing.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<`, `>`, `<=` and `>=`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Prefix `!x` and `-x`
    Prefix,
    /// Call arguments `f(x)`
    Call,
}

impl Precedence {
    /// The strength `token` binds with in infix position. Tokens that
    /// cannot continue an expression report [`Lowest`](Self::Lowest),
    /// which ends the climbing loop.
    pub(in crate::interpreter::parser) const fn of(token: &Token) -> Self {
        match token {
            Token::EqualEqual | Token::BangEqual => Self::Equals,
            Token::Less | Token::Greater | Token::LessEqual | Token::GreaterEqual => {
                Self::LessGreater
            },
            Token::Plus | Token::Minus => Self::Sum,
            Token::Star | Token::Slash => Self::Product,
            Token::LParen => Self::Call,
            _ => Self::Lowest,
        }
    }
}

/// Builds a syntax tree from the token stream of a [`Lexer`].
///
/// The parser keeps one token of lookahead (`cur` and `peek`) and never
/// fails outright: each statement that cannot be parsed records a
/// diagnostic, the parser skips to the next `;`, and parsing continues.
/// Callers must check [`errors`](Self::errors) before evaluating the
/// resulting tree; with diagnostics present the tree is best-effort only.
pub struct Parser<'a> {
    lexer:      Lexer<'a>,
    cur_token:  Token,
    cur_line:   usize,
    peek_token: Token,
    peek_line:  usize,
    errors:     Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Creates a parser consuming `lexer`, primed with one token of
    /// lookahead.
    #[must_use]
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut parser = Self { lexer,
                                cur_token: Token::Eof,
                                cur_line: 1,
                                peek_token: Token::Eof,
                                peek_line: 1,
                                errors: Vec::new() };

        // Load cur_token and peek_token.
        parser.advance();
        parser.advance();

        parser
    }

    /// Parses statements until end of input and returns the program.
    ///
    /// # Example
    /// ```
    /// use simia::interpreter::{lexer::Lexer, parser::core::Parser};
    ///
    /// let mut parser = Parser::new(Lexer::new("let x = 1 + 2;"));
    /// let program = parser.parse_program();
    ///
    /// assert!(parser.errors().is_empty());
    /// assert_eq!(program.to_string(), "let x = (1 + 2);");
    /// ```
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while self.cur_token != Token::Eof {
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(error) => {
                    self.errors.push(error);
                    self.synchronize();
                },
            }
            self.advance();
        }

        Program { statements }
    }

    /// The diagnostics collected so far. Empty if and only if every
    /// statement parsed cleanly.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Parses one expression at the given binding strength.
    ///
    /// Starts with the handler for the current token, then, while the next
    /// token is not `;` and binds tighter than `precedence`, folds the
    /// expression so far into that token's infix form.
    pub(in crate::interpreter::parser) fn parse_expression(&mut self,
                                                           precedence: Precedence)
                                                           -> ParseResult<Expr> {
        let mut left = self.parse_prefix()?;

        while self.peek_token != Token::Semicolon && precedence < Precedence::of(&self.peek_token)
        {
            self.advance();
            left = self.parse_infix(left)?;
        }

        Ok(left)
    }

    /// Shifts the lookahead window one token forward.
    pub(in crate::interpreter::parser) fn advance(&mut self) {
        self.cur_token = std::mem::replace(&mut self.peek_token, Token::Eof);
        self.cur_line = self.peek_line;
        (self.peek_token, self.peek_line) = self.lexer.next_token();
    }

    pub(in crate::interpreter::parser) const fn cur(&self) -> &Token {
        &self.cur_token
    }

    pub(in crate::interpreter::parser) const fn cur_line(&self) -> usize {
        self.cur_line
    }

    pub(in crate::interpreter::parser) fn peek_is(&self, token: &Token) -> bool {
        self.peek_token == *token
    }

    /// Consumes the next token if it is `expected`, or reports what was
    /// found instead. Only usable with payload-free kinds; identifiers go
    /// through [`expect_peek_ident`](Self::expect_peek_ident).
    pub(in crate::interpreter::parser) fn expect_peek(&mut self,
                                                      expected: &Token)
                                                      -> ParseResult<()> {
        if self.peek_token == *expected {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken { expected: expected.kind_name(),
                                              found:    self.peek_token.kind_name(),
                                              line:     self.peek_line, })
        }
    }

    /// Consumes the next token if it is an identifier and returns its
    /// name.
    pub(in crate::interpreter::parser) fn expect_peek_ident(&mut self) -> ParseResult<String> {
        if let Token::Ident(name) = &self.peek_token {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(ParseError::UnexpectedToken { expected: "IDENT",
                                              found:    self.peek_token.kind_name(),
                                              line:     self.peek_line, })
        }
    }

    /// Skips to the next statement boundary after a diagnostic, so one
    /// malformed statement does not cascade into spurious errors for the
    /// rest of the input.
    fn synchronize(&mut self) {
        while self.cur_token != Token::Semicolon && self.cur_token != Token::Eof {
            self.advance();
        }
    }
}
