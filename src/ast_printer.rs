use crate::ast::*;

// Renders an expression tree as a fully parenthesized prefix string so that
// operator precedence can be inspected: 1 + 2 * 3 => (+ 1 (* 2 3)).
pub fn print(expr: &Expr) -> String {
    match expr {
        Expr::Assign(name, value, _) => parenthesize(&format!(":= {}", name), &[value]),
        Expr::Binary(left, op, right, _) => parenthesize(binary_op_lexeme(*op), &[left, right]),
        Expr::Grouping(e) => parenthesize("group", &[e]),
        Expr::LiteralBool(b) => b.to_string(),
        Expr::LiteralNil => "null".to_string(),
        Expr::LiteralNumber(x) => x.to_string(),
        Expr::LiteralString(s) => format!("\"{}\"", s),
        Expr::Unary(op, e, _) => parenthesize(unary_op_lexeme(*op), &[e]),
        Expr::Variable(name, _) => name.clone(),
    }
}

pub fn print_stmt(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Expression(expr) => print(expr),
        Stmt::Print(expr) => parenthesize("print", &[expr]),
        Stmt::Var(name, initializer) => parenthesize(&format!("var {}", name), &[initializer]),
    }
}

fn parenthesize(name: &str, exprs: &[&Expr]) -> String {
    let mut out = String::new();

    out.push('(');
    out.push_str(name);
    for expr in exprs {
        out.push(' ');
        out.push_str(&print(expr));
    }
    out.push(')');

    out
}

fn binary_op_lexeme(op: BinaryOperator) -> &'static str {
    use crate::ast::BinaryOperator::*;
    match op {
        Plus => "+",
        Minus => "-",
        Multiply => "*",
        Divide => "/",
        Equal => "=",
        Less => "<",
        Greater => ">",
    }
}

fn unary_op_lexeme(op: UnaryOperator) -> &'static str {
    use crate::ast::UnaryOperator::*;
    match op {
        Minus => "-",
        Not => "!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_expression;

    fn printed(code: &str) -> String {
        let ast = parse_expression(code).expect("expected code to parse");
        print(&ast)
    }

    #[test]
    fn test_print_literals() {
        assert_eq!(printed("42"), "42");
        assert_eq!(printed("\"hi\""), "\"hi\"");
        assert_eq!(printed("true"), "true");
    }

    #[test]
    fn test_print_precedence() {
        assert_eq!(printed("1 + 2 * 3"), "(+ 1 (* 2 3))");
        assert_eq!(printed("(1 + 2) * 3"), "(* (group (+ 1 2)) 3)");
        assert_eq!(printed("10 - 3 - 2"), "(- (- 10 3) 2)");
    }

    #[test]
    fn test_print_statements() {
        let statements = crate::parser::parse("var x := 1 + 2; print x;")
            .expect("expected code to parse");
        let rendered: Vec<String> = statements.iter().map(print_stmt).collect();
        assert_eq!(rendered, vec!["(var x (+ 1 2))", "(print x)"]);
    }

    #[test]
    fn test_print_unary_and_assign() {
        assert_eq!(printed("-x"), "(- x)");
        assert_eq!(printed("!false"), "(! false)");
        assert_eq!(printed("x := 1 < 2"), "(:= x (< 1 2))");
    }
}
