use crate::source_loc::*;

#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Expression(Expr),
    Print(Expr),
    // A declaration without an initializer carries a nil literal.
    Var(String, Expr),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Assign(String, Box<Expr>, SourceLoc),
    Binary(Box<Expr>, BinaryOperator, Box<Expr>, SourceLoc),
    Grouping(Box<Expr>),
    LiteralBool(bool),
    LiteralNil,
    LiteralNumber(f64),
    LiteralString(String),
    Unary(UnaryOperator, Box<Expr>, SourceLoc),
    Variable(String, SourceLoc),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum UnaryOperator {
    Minus,
    Not,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,

    Equal,
    Less,
    Greater,
}
