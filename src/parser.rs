use crate::ast::*;
use crate::error::*;
use crate::scanner::Scanner;
use crate::source_loc::*;
use crate::token::*;

// Scan and parse a whole program.
pub fn parse(code: &str) -> Result<Vec<Stmt>, ParseError> {
    let mut scanner = Scanner::new(code);
    let tokens = scanner.scan_tokens()?;
    let mut parser = Parser::new(tokens);

    parser.parse()
}

// Like parse(), but a trailing expression may omit its semicolon.  This is
// for the REPL so that you can evaluate "1 + 2" directly.
pub fn parse_repl_line(code: &str) -> Result<Vec<Stmt>, ParseError> {
    let mut scanner = Scanner::new(code);
    let tokens = scanner.scan_tokens()?;
    let mut parser = Parser::new_for_repl(tokens);

    parser.parse()
}

// Parse a single expression.  Used by tests and the AST printer.
pub fn parse_expression(code: &str) -> Result<Expr, ParseError> {
    let mut scanner = Scanner::new(code);
    let tokens = scanner.scan_tokens()?;
    let mut parser = Parser::new(tokens);

    parser.expression().map_err(ParseError::from)
}

pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    current: usize,
    for_repl: bool,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token<'a>>) -> Parser<'a> {
        Parser::with_repl_mode(tokens, false)
    }

    pub fn new_for_repl(tokens: Vec<Token<'a>>) -> Parser<'a> {
        Parser::with_repl_mode(tokens, true)
    }

    fn with_repl_mode(mut tokens: Vec<Token<'a>>, for_repl: bool) -> Parser<'a> {
        // The scanner always terminates its output with an end-of-input
        // token, but don't rely on callers having used it.
        if tokens.last().map(|token| token.token_type) != Some(TokenType::Eof) {
            let line = tokens.last().map(|token| token.line).unwrap_or(1);
            tokens.push(Token::new(TokenType::Eof, "", None, None, line));
        }

        Parser {
            tokens,
            current: 0,
            for_repl,
        }
    }

    // Parse declarations until end of input.  On a malformed declaration the
    // error is recorded and parsing resumes at the next statement boundary,
    // so a single pass reports every independent syntax error.
    pub fn parse(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();
        let mut errors = Vec::new();

        while ! self.is_at_end() {
            match self.declaration() {
                Ok(statement) => statements.push(statement),
                Err(cause) => {
                    errors.push(cause);
                    self.synchronize();
                }
            }
        }

        if errors.is_empty() {
            Ok(statements)
        } else {
            Err(ParseError::new(errors))
        }
    }

    fn declaration(&mut self) -> Result<Stmt, ParseErrorCause> {
        if self.matches(&[TokenType::Var]).is_some() {
            return self.var_declaration();
        }

        self.statement()
    }

    fn var_declaration(&mut self) -> Result<Stmt, ParseErrorCause> {
        let name = {
            let token = self.consume(TokenType::Identifier, "Expect variable name.")?;
            token.lexeme.to_string()
        };

        // The declared type is omitted for now; the initializer follows the
        // assignment operator directly.
        let initializer = match self.matches(&[TokenType::Assign]) {
            Some(_) => self.expression()?,
            None => Expr::LiteralNil,
        };

        self.consume(TokenType::Semicolon, "Expect ';' after variable declaration.")?;

        Ok(Stmt::Var(name, initializer))
    }

    fn statement(&mut self) -> Result<Stmt, ParseErrorCause> {
        if self.matches(&[TokenType::Print]).is_some() {
            return self.print_statement();
        }

        self.expression_statement()
    }

    fn print_statement(&mut self) -> Result<Stmt, ParseErrorCause> {
        let value = self.expression()?;
        self.consume(TokenType::Semicolon, "Expect ';' after value.")?;

        Ok(Stmt::Print(value))
    }

    fn expression_statement(&mut self) -> Result<Stmt, ParseErrorCause> {
        let expression = self.expression()?;
        if ! (self.for_repl && self.is_at_end()) {
            self.consume(TokenType::Semicolon, "Expect ';' after expression.")?;
        }

        Ok(Stmt::Expression(expression))
    }

    fn expression(&mut self) -> Result<Expr, ParseErrorCause> {
        self.assignment()
    }

    fn assignment(&mut self) -> Result<Expr, ParseErrorCause> {
        let expr = self.equality()?;

        match self.matches(&[TokenType::Assign]) {
            None => Ok(expr),
            Some((_, loc)) => {
                // Right-associative.
                let value = self.assignment()?;

                match expr {
                    Expr::Variable(name, _) => {
                        Ok(Expr::Assign(name, Box::new(value), loc))
                    }
                    _ => Err(ParseErrorCause::new_with_location(loc, ":=", "Invalid assignment target.")),
                }
            }
        }
    }

    fn equality(&mut self) -> Result<Expr, ParseErrorCause> {
        let mut expr = self.comparison()?;

        while let Some((_, loc)) = self.matches(&[TokenType::Equal]) {
            let right = self.comparison()?;
            expr = Expr::Binary(Box::new(expr), BinaryOperator::Equal, Box::new(right), loc);
        }

        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expr, ParseErrorCause> {
        let mut expr = self.term()?;

        while let Some((operator, loc)) = self.matches(&[TokenType::Less, TokenType::Greater]) {
            let right = self.term()?;
            let bin_op = match operator {
                TokenType::Less => BinaryOperator::Less,
                TokenType::Greater => BinaryOperator::Greater,
                _ => unreachable!(),
            };
            expr = Expr::Binary(Box::new(expr), bin_op, Box::new(right), loc);
        }

        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr, ParseErrorCause> {
        let mut expr = self.factor()?;

        while let Some((operator, loc)) = self.matches(&[TokenType::Minus, TokenType::Plus]) {
            let right = self.factor()?;
            let bin_op = match operator {
                TokenType::Minus => BinaryOperator::Minus,
                TokenType::Plus => BinaryOperator::Plus,
                _ => unreachable!(),
            };
            expr = Expr::Binary(Box::new(expr), bin_op, Box::new(right), loc);
        }

        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr, ParseErrorCause> {
        let mut expr = self.unary()?;

        while let Some((operator, loc)) = self.matches(&[TokenType::Slash, TokenType::Star]) {
            let right = self.unary()?;
            let bin_op = match operator {
                TokenType::Slash => BinaryOperator::Divide,
                TokenType::Star => BinaryOperator::Multiply,
                _ => unreachable!(),
            };
            expr = Expr::Binary(Box::new(expr), bin_op, Box::new(right), loc);
        }

        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr, ParseErrorCause> {
        match self.matches(&[TokenType::Bang, TokenType::Minus]) {
            None => self.primary(),
            Some((operator, loc)) => {
                let right = self.unary()?;
                let unary_op = match operator {
                    TokenType::Bang => UnaryOperator::Not,
                    TokenType::Minus => UnaryOperator::Minus,
                    _ => unreachable!(),
                };

                Ok(Expr::Unary(unary_op, Box::new(right), loc))
            }
        }
    }

    fn primary(&mut self) -> Result<Expr, ParseErrorCause> {
        let expr = {
            let token = self.peek();
            let loc = SourceLoc::from(token);

            match token.token_type {
                TokenType::False => Expr::LiteralBool(false),
                TokenType::True => Expr::LiteralBool(true),
                TokenType::Number => {
                    match token.float_literal {
                        Some(x) => Expr::LiteralNumber(x),
                        None => return Err(ParseErrorCause::new_with_location(loc, token.lexeme, "Number token is missing its value.")),
                    }
                }
                TokenType::StringLit => {
                    match token.string_literal {
                        Some(s) => Expr::LiteralString(s.to_string()),
                        None => return Err(ParseErrorCause::new_with_location(loc, token.lexeme, "String token is missing its value.")),
                    }
                }
                TokenType::Identifier => Expr::Variable(token.lexeme.to_string(), loc),
                TokenType::LeftParen => {
                    self.advance();
                    let expr = self.expression()?;
                    self.consume(TokenType::RightParen, "Expect ')' after expression.")?;

                    return Ok(Expr::Grouping(Box::new(expr)));
                }
                TokenType::Eof => {
                    return Err(ParseErrorCause::new(loc, "Expect expression."));
                }
                _ => {
                    return Err(ParseErrorCause::new_with_location(loc, token.lexeme, "Expect expression."));
                }
            }
        };
        self.advance();

        Ok(expr)
    }

    // Discard tokens until a statement boundary: just past a semicolon, or
    // just before a token that begins a new statement.  A "for" only counts
    // when the previous token was not "end", since "end for" closes a loop.
    fn synchronize(&mut self) {
        self.advance();

        while ! self.is_at_end() {
            if self.previous().map(|token| token.token_type) == Some(TokenType::Semicolon) {
                return;
            }

            match self.peek().token_type {
                TokenType::Var | TokenType::Print | TokenType::Assert => return,
                TokenType::For => {
                    if self.previous().map(|token| token.token_type) != Some(TokenType::End) {
                        return;
                    }
                }
                _ => (),
            }

            self.advance();
        }
    }

    fn matches(&mut self, token_types: &[TokenType]) -> Option<(TokenType, SourceLoc)> {
        let matched = {
            let token = self.peek();
            if token_types.contains(&token.token_type) {
                Some((token.token_type, SourceLoc::from(token)))
            } else {
                None
            }
        };

        if matched.is_some() {
            self.advance();
        }

        matched
    }

    fn consume(&mut self, token_type: TokenType, message: &str) -> Result<&Token<'a>, ParseErrorCause> {
        if self.check(token_type) {
            self.advance();

            return Ok(self.previous().unwrap_or_else(|| self.peek()));
        }

        let token = self.peek();
        let loc = SourceLoc::from(token);
        if token.token_type == TokenType::Eof {
            Err(ParseErrorCause::new(loc, message))
        } else {
            Err(ParseErrorCause::new_with_location(loc, token.lexeme, message))
        }
    }

    fn check(&self, token_type: TokenType) -> bool {
        self.peek().token_type == token_type
    }

    fn advance(&mut self) {
        if ! self.is_at_end() {
            self.current += 1;
        }
    }

    fn peek(&self) -> &Token<'a> {
        // The constructor guarantees a final Eof token, and advance() never
        // moves past it.
        &self.tokens[self.current]
    }

    fn previous(&self) -> Option<&Token<'a>> {
        match self.current {
            0 => None,
            _ => self.tokens.get(self.current - 1),
        }
    }

    fn is_at_end(&self) -> bool {
        self.peek().token_type == TokenType::Eof
    }
}
