use crate::{
    ast::{Expr, InfixOperator, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

/// Maps a token to its corresponding infix operator.
///
/// Returns `None` for tokens that do not continue an expression. Note that
/// `(` is infix in the grammar (it forms a call) but maps to no operator;
/// the parser treats it separately.
#[must_use]
pub const fn infix_operator(token: &Token) -> Option<InfixOperator> {
    match token {
        Token::Plus => Some(InfixOperator::Add),
        Token::Minus => Some(InfixOperator::Sub),
        Token::Star => Some(InfixOperator::Mul),
        Token::Slash => Some(InfixOperator::Div),
        Token::Less => Some(InfixOperator::Less),
        Token::Greater => Some(InfixOperator::Greater),
        Token::LessEqual => Some(InfixOperator::LessEqual),
        Token::GreaterEqual => Some(InfixOperator::GreaterEqual),
        Token::EqualEqual => Some(InfixOperator::Equal),
        Token::BangEqual => Some(InfixOperator::NotEqual),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parses the expression form the current token can begin: a literal,
    /// an identifier, a prefix operation, a grouped expression, a
    /// conditional, or a function literal. Any other token has no business
    /// starting an expression and is reported.
    pub(in crate::interpreter::parser) fn parse_prefix(&mut self) -> ParseResult<Expr> {
        match self.cur() {
            Token::Ident(name) => Ok(Expr::Identifier { name: name.clone(),
                                                        line: self.cur_line(), }),
            Token::Int(_) => self.parse_integer_literal(),
            Token::True => Ok(Expr::BooleanLiteral { value: true,
                                                     line:  self.cur_line(), }),
            Token::False => Ok(Expr::BooleanLiteral { value: false,
                                                      line:  self.cur_line(), }),
            Token::Bang | Token::Minus => self.parse_prefix_expression(),
            Token::LParen => self.parse_grouped_expression(),
            Token::If => self.parse_if_expression(),
            Token::Function => self.parse_function_literal(),
            token => Err(ParseError::NoPrefixParseFunction { kind: token.kind_name(),
                                                            line: self.cur_line(), }),
        }
    }

    /// Folds `left` into the infix form of the current token: a call for
    /// `(`, a binary operation for the operator tokens. The climbing loop
    /// only steps onto tokens with a registered strength, so no other kind
    /// can reach this point.
    pub(in crate::interpreter::parser) fn parse_infix(&mut self, left: Expr) -> ParseResult<Expr> {
        if *self.cur() == Token::LParen {
            return self.parse_call_expression(left);
        }

        let Some(op) = infix_operator(self.cur()) else {
            unreachable!()
        };
        let line = self.cur_line();
        let precedence = Precedence::of(self.cur());

        self.advance();
        let right = self.parse_expression(precedence)?;

        Ok(Expr::Infix { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         line })
    }

    /// Parses an integer literal from its source text. The scanner only
    /// produces digit runs here, so the single failure mode is a value
    /// outside the 64-bit signed range.
    fn parse_integer_literal(&mut self) -> ParseResult<Expr> {
        let Token::Int(literal) = self.cur() else {
            unreachable!()
        };

        literal.parse::<i64>()
               .map(|value| Expr::IntegerLiteral { value,
                                                   line: self.cur_line() })
               .map_err(|_| ParseError::InvalidIntegerLiteral { literal: literal.clone(),
                                                                line:    self.cur_line(), })
    }

    /// Parses `!<operand>` or `-<operand>`. The operand is parsed at
    /// prefix strength, so `-a * b` negates `a`, not the product.
    fn parse_prefix_expression(&mut self) -> ParseResult<Expr> {
        let line = self.cur_line();
        let op = match self.cur() {
            Token::Bang => PrefixOperator::Not,
            Token::Minus => PrefixOperator::Negate,
            _ => unreachable!(),
        };

        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;

        Ok(Expr::Prefix { op,
                          right: Box::new(right),
                          line })
    }

    /// Parses a parenthesized expression. The parentheses only steer
    /// parsing; they leave no node behind.
    fn parse_grouped_expression(&mut self) -> ParseResult<Expr> {
        self.advance();

        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RParen)?;

        Ok(expr)
    }

    /// Parses a conditional with optional `else`:
    ///
    /// ```text
    ///     if (<condition>) { <consequence> }
    ///     if (<condition>) { <consequence> } else { <alternative> }
    /// ```
    fn parse_if_expression(&mut self) -> ParseResult<Expr> {
        let line = self.cur_line();

        self.expect_peek(&Token::LParen)?;
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RParen)?;

        self.expect_peek(&Token::LBrace)?;
        let consequence = self.parse_block()?;

        let alternative = if self.peek_is(&Token::Else) {
            self.advance();
            self.expect_peek(&Token::LBrace)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Expr::If { condition: Box::new(condition),
                      consequence,
                      alternative,
                      line })
    }

    /// Parses a function literal `fn(<params>) { <body> }` with a possibly
    /// empty, comma-separated parameter list.
    fn parse_function_literal(&mut self) -> ParseResult<Expr> {
        let line = self.cur_line();

        self.expect_peek(&Token::LParen)?;
        let params = self.parse_function_parameters()?;

        self.expect_peek(&Token::LBrace)?;
        let body = self.parse_block()?;

        Ok(Expr::FunctionLiteral { params, body, line })
    }

    fn parse_function_parameters(&mut self) -> ParseResult<Vec<String>> {
        let mut params = Vec::new();

        if self.peek_is(&Token::RParen) {
            self.advance();
            return Ok(params);
        }

        params.push(self.expect_peek_ident()?);
        while self.peek_is(&Token::Comma) {
            self.advance();
            params.push(self.expect_peek_ident()?);
        }

        self.expect_peek(&Token::RParen)?;
        Ok(params)
    }

    /// Parses the argument list of a call; the callee has already been
    /// parsed as the left-hand side.
    fn parse_call_expression(&mut self, callee: Expr) -> ParseResult<Expr> {
        let line = self.cur_line();
        let arguments = self.parse_call_arguments()?;

        Ok(Expr::Call { callee: Box::new(callee),
                        arguments,
                        line })
    }

    fn parse_call_arguments(&mut self) -> ParseResult<Vec<Expr>> {
        let mut arguments = Vec::new();

        if self.peek_is(&Token::RParen) {
            self.advance();
            return Ok(arguments);
        }

        self.advance();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(&Token::Comma) {
            self.advance();
            self.advance();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(&Token::RParen)?;
        Ok(arguments)
    }
}
