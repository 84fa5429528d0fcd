//! Command-line argument parsing for the `descent` binary.

use std::path::PathBuf;

use descent_parse::RecognizerConfig;

use crate::SessionConfig;

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Recognize(Options),
    Help,
    Version,
}

/// Options for a recognition run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Input file; stdin when `None`.
    pub input: Option<PathBuf>,
    pub session: SessionConfig,
    pub trace: bool,
}

/// Parse arguments, excluding the program name.
///
/// Flags may appear before or after the input path. `-` names stdin.
pub fn parse_args<I, A>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = A>,
    A: AsRef<str>,
{
    let mut options = Options::default();
    let mut input_seen = false;

    for arg in args {
        match arg.as_ref() {
            "-h" | "--help" | "help" => return Ok(Command::Help),
            "-V" | "--version" | "version" => return Ok(Command::Version),
            "--strict" => options.session.strict = true,
            "--keep-whitespace" => {
                options.session.recognizer = RecognizerConfig {
                    skip_whitespace: false,
                };
            }
            "--trace" => options.trace = true,
            _ if input_seen => {
                return Err(format!("unexpected argument '{}'", arg.as_ref()));
            }
            "-" => input_seen = true,
            flag if flag.starts_with('-') => return Err(format!("unknown option '{flag}'")),
            path => {
                options.input = Some(PathBuf::from(path));
                input_seen = true;
            }
        }
    }

    Ok(Command::Recognize(options))
}

pub fn usage() -> String {
    [
        "Descent - recursive descent expression recognizer",
        "",
        "Usage: descent [options] [FILE]",
        "",
        "Reads FILE (or stdin when FILE is absent or '-') and recognizes",
        "expressions of the grammar:",
        "",
        "  Expression := Term ( '+' Term )*",
        "  Term       := Factor ( '*' Factor )*",
        "  Factor     := '(' Expression ')' | '-' Factor | a | b | 5 | 3",
        "",
        "Options:",
        "  --strict            Print Success only when no error occurred; exit 1 on error",
        "  --keep-whitespace   Treat whitespace as significant input",
        "  --trace             Print the descent as a call tree on stderr",
        "  -h, --help          Show this help message",
        "  -V, --version       Show version information",
        "",
        "Environment:",
        "  RUST_LOG            Log filter, e.g. RUST_LOG=descent=debug",
        "  DESCENT_TREE=1      Same as --trace",
    ]
    .join("\n")
}
