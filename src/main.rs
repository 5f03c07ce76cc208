use std::fs;

use arithex::{Mode, evaluate_with};
use clap::Parser;

/// arithex evaluates arithmetic expressions made of integers, `+ - * /` and
/// parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells arithex to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Reject malformed input instead of recovering from it.
    #[arg(short, long)]
    strict: bool,

    contents: String,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mode = if args.strict { Mode::Strict } else { Mode::Lenient };

    match evaluate_with(&source, mode) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
