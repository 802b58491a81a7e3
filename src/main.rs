// minicc: minimal C front end (lex, parse, pretty-print)

mod parser;
mod printer;

use std::fs;
use std::process;

use parser::parser::Parser;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let progname = args.first().map(|s| s.as_str()).unwrap_or("minicc");

    if args.len() < 2 {
        eprintln!("usage: {} file", progname);
        process::exit(1);
    }

    let filename = &args[1];

    let source = match fs::read_to_string(filename) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{}: {}: {}", progname, filename, err);
            process::exit(1);
        }
    };

    let program = match Parser::new(filename, &source).parse_program() {
        Ok(program) => program,
        Err(err) => {
            // the error's Display already names the file and position
            eprintln!("{}: {}", progname, err);
            process::exit(1);
        }
    };

    print!("{}", printer::print_program(&program));
}
