#[macro_use]
extern crate lazy_static;
extern crate unicode_segmentation;

mod ast;
mod ast_printer;
mod environment;
mod error;
mod interpreter;
mod parser;
mod scanner;
mod source_loc;
mod token;
mod util;
mod value;

use std::fs;
use std::io;
use std::io::prelude::*;
use std::process;

use argparse::{ArgumentParser, Print, Store, StoreTrue};

use crate::error::*;
use crate::interpreter::*;
use crate::value::*;

enum RunError {
    RunParseError(ParseError),
    RunRuntimeError(RuntimeError),
}

fn main() {
    let mut script_filename = "".to_string();
    let mut print_ast = false;
    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Mini-PL language interpreter");
        ap.add_option(
            &["--version"],
            Print(env!("CARGO_PKG_VERSION").to_string()),
            "Show version",
        );
        ap.refer(&mut print_ast)
            .add_option(&["--print-ast"], StoreTrue,
                        "Print the parsed syntax tree instead of executing.");
        ap.refer(&mut script_filename)
            .add_argument("script_filename", Store,
                          "Mini-PL file to execute.  Omit to run an interactive REPL.");
        ap.parse_args_or_exit();
    }
    if ! script_filename.is_empty() {
        let run_result = run_file(&script_filename, print_ast);

        match run_result {
            Ok(_) => (),
            Err(RunError::RunParseError(_)) => process::exit(65),
            Err(RunError::RunRuntimeError(_)) => process::exit(70),
        }
    }
    else {
        run_repl();
    }
}

fn run_repl() {
    let stdin = io::stdin();
    let mut interpreter = Interpreter::new();
    loop {
        print!("> ");
        io::stdout().flush().expect("run_repl: unable to flush stdout");

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => break, // End of input.
            Ok(_) => {
                let result = run_line(&mut interpreter, &input);
                print_result(&result, true);
            }
            Err(error) => {
                eprintln!("Error reading stdin: {:?}", error);
                break;
            }
        }
    }
}

fn run_file(file_path: &str, print_ast: bool) -> Result<Value, RunError> {
    let contents = match fs::read_to_string(file_path) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Unable to read file {}: {}", file_path, error);
            process::exit(66);
        }
    };

    let mut interpreter = Interpreter::new();
    let result = run(&mut interpreter, &contents, print_ast);
    print_result(&result, false);

    result
}

fn run(interpreter: &mut Interpreter, source: &str, print_ast: bool)
    -> Result<Value, RunError>
{
    // Interpretation is skipped entirely when scanning or parsing reported
    // any error.
    let ast = parser::parse(source)?;

    if print_ast {
        for statement in ast.iter() {
            println!("{}", ast_printer::print_stmt(statement));
        }

        return Ok(Value::NilVal);
    }

    interpreter.interpret(&ast).map_err(|err| err.into())
}

fn run_line(interpreter: &mut Interpreter, source: &str) -> Result<Value, RunError> {
    let ast = parser::parse_repl_line(source)?;

    interpreter.interpret(&ast).map_err(|err| err.into())
}

fn print_result(result: &Result<Value, RunError>, print_success: bool) {
    match result {
        Ok(value) => {
            if print_success {
                println!("{}", value);
            }
        }
        Err(e) => {
            match e {
                RunError::RunParseError(err) => {
                    // Print all causes.
                    for cause in err.causes.iter() {
                        util::parse_error_cause(cause);
                    }
                }
                RunError::RunRuntimeError(err) => {
                    util::runtime_error(err);
                }
            }
        }
    }
}

impl From<ParseError> for RunError {
    fn from(err: ParseError) -> RunError {
        RunError::RunParseError(err)
    }
}

impl From<RuntimeError> for RunError {
    fn from(err: RuntimeError) -> RunError {
        RunError::RunRuntimeError(err)
    }
}
