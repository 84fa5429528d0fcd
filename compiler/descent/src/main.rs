//! Descent CLI
//!
//! Recognizes expressions read from a file or stdin.

use std::fs::File;
use std::io::{self, BufReader};

use descent::cli::{parse_args, usage, Command};
use descent::{init_tracing, run, TREE_ENV};
use descent_parse::ReaderSource;

fn main() {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Recognize(options)) => options,
        Ok(Command::Help) => {
            println!("{}", usage());
            return;
        }
        Ok(Command::Version) => {
            println!("descent {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            eprintln!("{}", usage());
            std::process::exit(1);
        }
    };

    let tree = options.trace || std::env::var(TREE_ENV).is_ok_and(|v| v == "1");
    init_tracing(tree);

    let stdout = io::stdout();
    let mut sink = stdout.lock();
    let result = match &options.input {
        Some(path) => {
            let file = match File::open(path) {
                Ok(file) => file,
                Err(e) => {
                    eprintln!("error: cannot open '{}': {e}", path.display());
                    std::process::exit(1);
                }
            };
            run(
                ReaderSource::new(BufReader::new(file)),
                &mut sink,
                &options.session,
            )
        }
        None => run(
            ReaderSource::new(io::stdin().lock()),
            &mut sink,
            &options.session,
        ),
    };

    match result {
        Ok(outcome) if options.session.strict && !outcome.is_success() => std::process::exit(1),
        Ok(_) => {}
        Err(e) => {
            eprintln!("error: cannot write status: {e}");
            std::process::exit(1);
        }
    }
}
