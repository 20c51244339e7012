use std::fs;

use clap::Parser;
use quill::run;

/// quill is an easy to use, dynamically typed scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the script to run.
    script: String,

    /// Prints the value returned by `main` after the script finishes.
    #[arg(short, long)]
    print_result: bool,
}

fn main() {
    let args = Args::parse();

    let source = fs::read_to_string(&args.script).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  &args.script);
        std::process::exit(1);
    });

    match run(&source) {
        Ok(result) => {
            if args.print_result {
                println!("{result}");
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
