use crate::token::Token;

// Location in a source file.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SourceLoc {
    pub line: u32,
}

impl SourceLoc {
    pub fn new(line: u32) -> SourceLoc {
        SourceLoc {
            line,
        }
    }
}

impl Default for SourceLoc {
    fn default() -> SourceLoc {
        SourceLoc {
            line: 1,
        }
    }
}

impl<'a> From<&Token<'a>> for SourceLoc {
    fn from(token: &Token<'a>) -> SourceLoc {
        SourceLoc::new(token.line)
    }
}
