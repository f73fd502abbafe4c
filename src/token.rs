#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TokenType {
    // Single-character tokens.
    LeftParen, RightParen,
    Comma, Dot, Colon, Minus, Plus, Semicolon, Slash, Star,
    Bang, Equal, Greater, Less,

    // Two-character tokens.
    Spread, Assign,

    // Literals.
    Identifier, StringLit, Number,

    // Keywords.
    Var, For, End, In, Do, Read, Print, Int, String, Bool, Assert,
    True, False,

    Eof,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token<'a> {
    pub token_type: TokenType,
    pub lexeme: &'a str,
    pub string_literal: Option<&'a str>,
    pub float_literal: Option<f64>,
    pub line: u32,
}

impl<'a> Token<'a> {
    pub fn new(token_type: TokenType,
               lexeme: &'a str,
               string_literal: Option<&'a str>,
               float_literal: Option<f64>,
               line: u32)
        -> Token<'a>
    {
        Token {
            token_type,
            lexeme,
            string_literal,
            float_literal,
            line,
        }
    }
}
