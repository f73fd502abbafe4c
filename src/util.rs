use crate::error::*;
use crate::source_loc::SourceLoc;

// Diagnostic rendering.  Everything goes to stderr so that program output
// on stdout stays clean.

pub fn error(loc: &SourceLoc, message: &str) {
    eprintln!("[line {}] Error: {}", loc.line, message);
}

pub fn parse_error_cause(cause: &ParseErrorCause) {
    match &cause.token {
        Some(lexeme) => eprintln!("[line {}] Error at '{}': {}", cause.source_loc.line, lexeme, cause.message),
        None => error(&cause.source_loc, &cause.message),
    }
}

pub fn runtime_error(err: &RuntimeError) {
    eprintln!("{}\n[line {}]", err.message, err.source_loc.line);
}
