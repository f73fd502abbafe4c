use crate::ast::*;
use crate::environment::*;
use crate::error::*;
use crate::value::*;

pub struct Interpreter {
    env: Environment,
}

impl Interpreter {
    pub fn new() -> Interpreter {
        Interpreter {
            env: Environment::new(),
        }
    }

    // The public interface to execute an entire program.  The first runtime
    // error aborts the rest of the run.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<Value, RuntimeError> {
        let mut value = Value::NilVal;
        for stmt in statements {
            value = self.execute(stmt)?;
        }

        Ok(value)
    }

    // Execute a single statement.  Expression statements yield their value
    // so that the REPL can echo it; the other statements yield nil.
    pub fn execute(&mut self, statement: &Stmt) -> Result<Value, RuntimeError> {
        match statement {
            Stmt::Expression(expr) => self.evaluate(expr),
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                println!("{}", value.to_runtime_string());

                Ok(Value::NilVal)
            }
            Stmt::Var(identifier, expr) => {
                let value = self.evaluate(expr)?;
                self.env.define(identifier, value);

                Ok(Value::NilVal)
            }
        }
    }

    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        use crate::value::Value::*;
        match expr {
            Expr::Assign(id, expr, loc) => {
                let value = self.evaluate(expr)?;
                self.env.assign(id, value.clone())
                    .map_err(|_| {
                        RuntimeError::new(*loc, &format!("Undefined variable: {}", id))
                    })?;

                Ok(value)
            }
            Expr::Binary(left, op, right, loc) => {
                // Operands evaluate left to right regardless of operator.
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;

                match op {
                    // Arithmetic operators.  Note there is no string
                    // concatenation; plus is numeric only.
                    BinaryOperator::Plus => {
                        match (left_val, right_val) {
                            (NumberVal(x1), NumberVal(x2)) => Ok(NumberVal(x1 + x2)),
                            _ => Err(RuntimeError::new(*loc, "Operands must be numbers.")),
                        }
                    },
                    BinaryOperator::Minus => {
                        match (left_val, right_val) {
                            (NumberVal(x1), NumberVal(x2)) => Ok(NumberVal(x1 - x2)),
                            _ => Err(RuntimeError::new(*loc, "Operands must be numbers.")),
                        }
                    },
                    BinaryOperator::Multiply => {
                        match (left_val, right_val) {
                            (NumberVal(x1), NumberVal(x2)) => Ok(NumberVal(x1 * x2)),
                            _ => Err(RuntimeError::new(*loc, "Operands must be numbers.")),
                        }
                    },
                    // Division by zero is not special-cased; it follows IEEE
                    // semantics and yields an infinity or NaN.
                    BinaryOperator::Divide => {
                        match (left_val, right_val) {
                            (NumberVal(x1), NumberVal(x2)) => Ok(NumberVal(x1 / x2)),
                            _ => Err(RuntimeError::new(*loc, "Operands must be numbers.")),
                        }
                    },
                    // Comparison operators.
                    BinaryOperator::Equal => Ok(BoolVal(left_val.is_equal(&right_val))),
                    BinaryOperator::Less => {
                        match (left_val, right_val) {
                            (NumberVal(x1), NumberVal(x2)) => Ok(BoolVal(x1 < x2)),
                            _ => Err(RuntimeError::new(*loc, "Operands must be numbers.")),
                        }
                    },
                    BinaryOperator::Greater => {
                        match (left_val, right_val) {
                            (NumberVal(x1), NumberVal(x2)) => Ok(BoolVal(x1 > x2)),
                            _ => Err(RuntimeError::new(*loc, "Operands must be numbers.")),
                        }
                    },
                }
            }
            Expr::Grouping(e) => self.evaluate(e),
            Expr::LiteralBool(b) => Ok(BoolVal(*b)),
            Expr::LiteralNil => Ok(NilVal),
            Expr::LiteralNumber(x) => Ok(NumberVal(*x)),
            Expr::LiteralString(s) => Ok(StringVal(s.clone())),
            Expr::Unary(op, e, loc) => {
                let v = self.evaluate(e)?;

                match op {
                    UnaryOperator::Minus => {
                        match v {
                            NumberVal(x) => Ok(NumberVal(-x)),
                            _ => Err(RuntimeError::new(*loc, "Operand must be a number.")),
                        }
                    },
                    UnaryOperator::Not => Ok(BoolVal(! v.is_truthy())),
                }
            }
            Expr::Variable(id, loc) => {
                self.env.get(id)
                    .ok_or_else(|| RuntimeError::new(*loc, &format!("Undefined variable: {}", id)))
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Interpreter {
        Interpreter::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::*;
    use crate::source_loc::*;
    use crate::value::Value::*;

    fn interpret(code: &str) -> Result<Value, RuntimeError> {
        let ast = parse(code)?;
        let mut interpreter = Interpreter::new();

        interpreter.interpret(&ast)
    }

    fn interpret_repl_line(code: &str) -> Result<Value, RuntimeError> {
        let ast = parse_repl_line(code)?;
        let mut interpreter = Interpreter::new();

        interpreter.interpret(&ast)
    }

    fn eval(code: &str) -> Result<Value, RuntimeError> {
        let ast = parse_expression(code)?;
        let mut interpreter = Interpreter::new();

        interpreter.evaluate(&ast)
    }

    #[test]
    fn test_eval_literals() {
        assert_eq!(eval("42"), Ok(NumberVal(42.0)));
        assert_eq!(eval("\"hello\""), Ok(StringVal("hello".to_string())));
        assert_eq!(eval("true"), Ok(BoolVal(true)));
        assert_eq!(eval("false"), Ok(BoolVal(false)));
    }

    #[test]
    fn test_eval_binary_ops() {
        assert_eq!(eval("40 + 2"), Ok(NumberVal(42.0)));
        assert_eq!(eval("40 - 10"), Ok(NumberVal(30.0)));
        assert_eq!(eval("7 * 3"), Ok(NumberVal(21.0)));
        assert_eq!(eval("10 / 2"), Ok(NumberVal(5.0)));
    }

    #[test]
    fn test_eval_precedence() {
        assert_eq!(eval("1 + 2 * 3"), Ok(NumberVal(7.0)));
        assert_eq!(eval("(1 + 2) * 3"), Ok(NumberVal(9.0)));
        assert_eq!(eval("10 - 3 - 2"), Ok(NumberVal(5.0)));
    }

    #[test]
    fn test_eval_divide_by_zero() {
        // No special case: IEEE division applies.
        assert_eq!(eval("1 / 0"), Ok(NumberVal(f64::INFINITY)));
    }

    #[test]
    fn test_eval_comparison() {
        assert_eq!(eval("true = true"), Ok(BoolVal(true)));
        assert_eq!(eval("true = 32"), Ok(BoolVal(false)));
        assert_eq!(eval("2 < 3"), Ok(BoolVal(true)));
        assert_eq!(eval("2 > 3"), Ok(BoolVal(false)));
    }

    #[test]
    fn test_eval_unary_ops() {
        assert_eq!(eval("-6"), Ok(NumberVal(-6.0)));
        assert_eq!(eval("! true"), Ok(BoolVal(false)));
        assert_eq!(eval("! false"), Ok(BoolVal(true)));
        // Only nil and false are falsy; zero and the empty string are not.
        assert_eq!(eval("! 0"), Ok(BoolVal(false)));
        assert_eq!(eval("! \"\""), Ok(BoolVal(false)));
    }

    #[test]
    fn test_eval_type_errors() {
        assert_eq!(eval("-\"a\""), Err(RuntimeError::new(SourceLoc::new(1), "Operand must be a number.")));
        assert_eq!(eval("1 < \"a\""), Err(RuntimeError::new(SourceLoc::new(1), "Operands must be numbers.")));
        // No string concatenation via plus.
        assert_eq!(eval("\"foo\" + \"bar\""), Err(RuntimeError::new(SourceLoc::new(1), "Operands must be numbers.")));
    }

    #[test]
    fn test_eval_type_error_line() {
        assert_eq!(interpret("var x := 1;\n-\"a\";"),
                   Err(RuntimeError::new(SourceLoc::new(2), "Operand must be a number.")));
    }

    #[test]
    fn test_interpret_literals() {
        assert_eq!(interpret("42;"), Ok(NumberVal(42.0)));
    }

    #[test]
    fn test_interpret_print() {
        assert_eq!(interpret("print \"print test\";"), Ok(NilVal));
    }

    #[test]
    fn test_interpret_var() {
        assert_eq!(interpret("var x;"), Ok(NilVal));
        assert_eq!(interpret("var x := 1;"), Ok(NilVal));
        // An uninitialized variable reads as nil.
        assert_eq!(interpret("var x; x;"), Ok(NilVal));
    }

    #[test]
    fn test_interpret_var_use() {
        assert_eq!(interpret("var x := 1; x;"), Ok(NumberVal(1.0)));
        assert_eq!(interpret("x;"), Err(RuntimeError::new(SourceLoc::new(1), "Undefined variable: x")));
        assert_eq!(interpret("var x := 1; y;"), Err(RuntimeError::new(SourceLoc::new(1), "Undefined variable: y")));
    }

    #[test]
    fn test_interpret_var_assign() {
        assert_eq!(interpret("var x := 1; x := 2; x;"), Ok(NumberVal(2.0)));
        assert_eq!(interpret("var x := 1; var y := 3; x := y := 5; x;"), Ok(NumberVal(5.0)));
        // Assignment never implicitly declares.
        assert_eq!(interpret("x := 1;"), Err(RuntimeError::new(SourceLoc::new(1), "Undefined variable: x")));
    }

    #[test]
    fn test_interpret_redeclaration_rebinds() {
        assert_eq!(interpret("var x := 1; var x := \"two\"; x;"), Ok(StringVal("two".to_string())));
    }

    #[test]
    fn test_interpret_nil_equality() {
        assert_eq!(interpret("var x; var y; x = y;"), Ok(BoolVal(true)));
        assert_eq!(interpret("var x; x = false;"), Ok(BoolVal(false)));
    }

    #[test]
    fn test_interpret_error_stops_run() {
        assert_eq!(interpret("var x := 1; -\"a\"; x := 2;"),
                   Err(RuntimeError::new(SourceLoc::new(1), "Operand must be a number.")));
    }

    #[test]
    fn test_interpret_repl_line() {
        assert_eq!(interpret_repl_line("1 + 2"), Ok(NumberVal(3.0)));
        assert_eq!(interpret_repl_line("1 + 2;"), Ok(NumberVal(3.0)));
        assert_eq!(interpret_repl_line("1 + 2; 10"), Ok(NumberVal(10.0)));
    }
}
