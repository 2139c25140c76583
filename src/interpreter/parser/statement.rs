use crate::{
    ast::{Block, Statement},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a single statement, dispatching on the current token.
    ///
    /// A statement is one of:
    /// - a `let` binding,
    /// - a `return`,
    /// - an expression used as a statement.
    ///
    /// On return the current token is the last token of the statement (the
    /// trailing `;` when present); the program and block loops advance
    /// past it.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.cur() {
            Token::Let => self.parse_let_statement(),
            Token::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses a binding of the form `let <identifier> = <expression>`,
    /// with an optional trailing `;`.
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        let line = self.cur_line();

        let name = self.expect_peek_ident()?;
        self.expect_peek(&Token::Assign)?;
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(&Token::Semicolon) {
            self.advance();
        }

        Ok(Statement::Let { name, value, line })
    }

    /// Parses `return <expression>`, with an optional trailing `;`.
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        let line = self.cur_line();
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(&Token::Semicolon) {
            self.advance();
        }

        Ok(Statement::Return { value, line })
    }

    /// Parses a bare expression in statement position, with an optional
    /// trailing `;`.
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let line = self.cur_line();

        let expr = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(&Token::Semicolon) {
            self.advance();
        }

        Ok(Statement::Expression { expr, line })
    }

    /// Parses a block from its opening `{`: statements until the matching
    /// `}` or end of input.
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> ParseResult<Block> {
        let line = self.cur_line();
        let mut statements = Vec::new();

        self.advance();
        while *self.cur() != Token::RBrace && *self.cur() != Token::Eof {
            statements.push(self.parse_statement()?);
            self.advance();
        }

        Ok(Block { statements, line })
    }
}
