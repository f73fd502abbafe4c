use std::collections::HashMap;
use std::iter::Peekable;
use std::mem;

use unicode_segmentation::{GraphemeIndices, UnicodeSegmentation};

use crate::error::*;
use crate::source_loc::*;
use crate::token::*;

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, TokenType> = {
        let mut m = HashMap::new();
        use crate::token::TokenType::*;
        m.insert("assert", Assert);
        m.insert("bool", Bool);
        m.insert("do", Do);
        m.insert("end", End);
        m.insert("false", False);
        m.insert("for", For);
        m.insert("in", In);
        m.insert("int", Int);
        m.insert("print", Print);
        m.insert("read", Read);
        m.insert("string", String);
        m.insert("true", True);
        m.insert("var", Var);

        m
    };
}

#[derive(Clone)]
pub struct Scanner<'source, 'g> {
    source: &'source str,
    tokens: Vec<Token<'source>>,
    errors: Vec<ParseErrorCause>,
    grapheme_indices: Peekable<GraphemeIndices<'g>>,
    start: usize,
    current: usize,
    line: u32,
    eof: bool,
}

impl<'source, 'g> Scanner<'source, 'g> where 'source: 'g {
    pub fn new(source: &'source str) -> Scanner<'source, 'g> {
        Scanner {
            source,
            grapheme_indices: source.grapheme_indices(true).peekable(),
            tokens: Vec::new(),
            errors: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            eof: false,
        }
    }

    // Lexical errors never abort the scan; every problem in the source is
    // collected and the whole batch is returned at the end.
    pub fn scan_tokens(&mut self) -> Result<Vec<Token<'source>>, ParseError> {
        while ! self.is_at_end() {
            // We are at the beginning of the next lexeme.
            self.start = self.peek_index();
            self.scan_token();
        }

        self.add_token(TokenType::Eof);

        let tokens = mem::replace(&mut self.tokens, Vec::new());
        let errors = mem::replace(&mut self.errors, Vec::new());

        if errors.is_empty() {
            Ok(tokens)
        } else {
            Err(ParseError::new(errors))
        }
    }

    fn scan_token(&mut self) {
        match self.advance() {
            None => (),
            Some((_, grapheme_cluster)) => {
                use crate::token::TokenType::*;
                match grapheme_cluster {
                    "(" => self.add_token(LeftParen),
                    ")" => self.add_token(RightParen),
                    "," => self.add_token(Comma),
                    "-" => self.add_token(Minus),
                    "+" => self.add_token(Plus),
                    ";" => self.add_token(Semicolon),
                    "/" => self.add_token(Slash),
                    "*" => self.add_token(Star),
                    "!" => self.add_token(Bang),
                    "=" => self.add_token(Equal),
                    "<" => self.add_token(Less),
                    ">" => self.add_token(Greater),
                    "." => {
                        if self.matches(".") {
                            self.add_token(Spread);
                        } else {
                            self.add_token(Dot);
                        }
                    }
                    ":" => {
                        if self.matches("=") {
                            self.add_token(Assign);
                        } else {
                            self.add_token(Colon);
                        }
                    }
                    " " | "\r" | "\t" => (), // Ignore whitespace.
                    "\n" => {
                        self.line = self.line.saturating_add(1);
                    }
                    "\"" => self.scan_string(),
                    _ => {
                        if is_digit(grapheme_cluster) {
                            self.scan_number();
                        }
                        else if is_lowercase_alpha(grapheme_cluster) {
                            self.scan_word();
                        }
                        else {
                            self.error(ParseErrorCause::new(SourceLoc::new(self.line), &format!("Unexpected token: {}", grapheme_cluster)));
                        }
                    }
                };
            }
        }
    }

    // Conditionally advance if the next grapheme cluster matches an expected
    // string.  Returns true if we matched.
    fn matches(&mut self, expected: &str) -> bool {
        if self.is_at_end() {
            return false;
        }

        match self.grapheme_indices.peek() {
            None => return false,
            Some((_, grapheme_cluster)) => {
                if *grapheme_cluster != expected {
                    return false;
                }
            }
        };

        // Consume this cluster when it's expected.
        self.advance();

        true
    }

    fn peek_index(&mut self) -> usize {
        match self.grapheme_indices.peek() {
            None => self.source.len(),
            Some((i, _)) => *i,
        }
    }

    fn is_match(&mut self, expected: &str) -> bool {
        match self.grapheme_indices.peek() {
            None => false,
            Some((_, grapheme_cluster)) => *grapheme_cluster == expected,
        }
    }

    // Advance the grapheme cluster iterator.
    fn advance(&mut self) -> Option<(usize, &'g str)> {
        match self.grapheme_indices.next() {
            None => {
                self.eof = true;

                None
            }
            Some((i, cluster)) => {
                self.current = i;

                Some((i, cluster))
            }
        }
    }

    fn scan_string(&mut self) {
        let start_index = self.peek_index();
        let start_line = self.line;

        while ! self.is_match("\"") && ! self.is_at_end() {
            match self.grapheme_indices.peek() {
                None => (),
                Some((_, grapheme_cluster)) => {
                    if *grapheme_cluster == "\n" {
                        self.line = self.line.saturating_add(1);
                    }
                }
            };
            self.advance();
        }

        // Unterminated string: report it and emit no token for this lexeme.
        if self.is_at_end() {
            self.error(ParseErrorCause::new(SourceLoc::new(self.line), "Unterminated string"));
            return;
        }

        // The closing quote.
        self.advance();

        // Trim the surrounding quotes.
        let value = &self.source[start_index..self.current];
        self.add_string_literal_token(value, start_line);
    }

    fn scan_number(&mut self) {
        loop {
            match self.grapheme_indices.peek() {
                None => break,
                Some((_, grapheme_cluster)) => {
                    if ! is_digit(grapheme_cluster) {
                        break;
                    }
                }
            };
            self.advance();
        }

        // Numbers are plain digit runs; there is no fractional or exponent
        // syntax in the language, but the runtime representation is a double.
        let value = &self.source[self.start..self.peek_index()];
        match value.parse::<f64>() {
            Ok(number) => self.add_number_literal_token(number),
            Err(_) => {
                self.error(ParseErrorCause::new(SourceLoc::new(self.line), &format!("Unable to parse number: {}", value)));
            }
        }
    }

    // A lowercase letter starts a keyword or an identifier.  Words not in
    // the keyword table fall back to identifiers.
    fn scan_word(&mut self) {
        loop {
            match self.grapheme_indices.peek() {
                None => break,
                Some((_, grapheme_cluster)) => {
                    if ! is_alphabetic(grapheme_cluster) {
                        break;
                    }
                }
            };
            self.advance();
        }

        let text = &self.source[self.start..self.peek_index()];

        let token_type = match KEYWORDS.get(text) {
            None => TokenType::Identifier,
            Some(token_type) => *token_type,
        };

        self.add_token(token_type);
    }

    fn is_at_end(&self) -> bool {
        self.eof
    }

    fn error(&mut self, error: ParseErrorCause) {
        self.errors.push(error);
    }

    // Add a token to the output.
    fn add_token(&mut self, token_type: TokenType) {
        let text = &self.source[self.start..self.peek_index()];
        let token = Token::new(token_type, text, None, None, self.line);
        self.tokens.push(token);
    }

    fn add_string_literal_token(&mut self, value: &'source str, start_line: u32) {
        let text = &self.source[self.start..self.peek_index()];
        let token = Token::new(TokenType::StringLit, text, Some(value), None, start_line);
        self.tokens.push(token);
    }

    fn add_number_literal_token(&mut self, value: f64) {
        let text = &self.source[self.start..self.peek_index()];
        let token = Token::new(TokenType::Number, text, None, Some(value), self.line);
        self.tokens.push(token);
    }
}

fn is_digit(grapheme: &str) -> bool {
    // Note: built-in is_numeric() uses a more complicated unicode definition
    // of numeric.
    match grapheme {
        "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" => true,
        _ => false,
    }
}

fn is_lowercase_alpha(grapheme: &str) -> bool {
    match grapheme.chars().next() {
        None => false,
        Some(c) => c.is_ascii_lowercase(),
    }
}

fn is_alphabetic(grapheme: &str) -> bool {
    // Only look at the first base character.
    match grapheme.chars().next() {
        None => false,
        Some(c) => c.is_ascii_alphabetic(),
    }
}
