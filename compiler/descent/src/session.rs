//! The top-level read loop and status sink.
//!
//! The loop primes the cursor and calls
//! [`Recognizer::recognize_expression`] until the source is exhausted.
//! The first error ends the whole run; there is no resynchronization.
//! Whatever character an expression leaves unconsumed starts the next
//! attempt.

use std::io::{self, Write};

use descent_parse::{CharSource, RecognizeError, Recognizer, RecognizerConfig};
use tracing::{debug, info};

/// Line written to the status sink when a run finishes.
pub const SUCCESS: &str = "Success";

/// Driver configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub recognizer: RecognizerConfig,
    /// Only report `Success` when the run had no error.
    ///
    /// Off by default: the status sink reports `Success` after every run,
    /// even one that stopped on an error.
    pub strict: bool,
}

/// Summary of one run over a character source.
#[derive(Debug)]
pub struct Outcome {
    /// Expressions recognized before the run ended.
    pub expressions: usize,
    /// The error that stopped the run, if any.
    pub error: Option<RecognizeError>,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Recognize expressions back to back until the source is exhausted or
/// one fails.
pub fn recognize_all<S: CharSource>(source: S, config: RecognizerConfig) -> Outcome {
    let mut recognizer = match Recognizer::with_config(source, config) {
        Ok(recognizer) => recognizer,
        Err(error) => {
            return Outcome {
                expressions: 0,
                error: Some(error),
            }
        }
    };

    let mut expressions = 0;
    while !recognizer.is_at_end() {
        let start = recognizer.offset();
        if let Err(error) = recognizer.recognize_expression() {
            debug!(expressions, kind = ?error.kind(), "recognition stopped");
            return Outcome {
                expressions,
                error: Some(error),
            };
        }
        expressions += 1;
        debug!(start, end = recognizer.offset(), "expression recognized");
    }

    Outcome {
        expressions,
        error: None,
    }
}

/// Run the read loop over `source` and report to `sink`.
///
/// On error the message is written on its own line. `Success` follows
/// unconditionally unless `config.strict` is set, in which case it is
/// written only when no error occurred. Only write failures on `sink`
/// surface as `Err`.
pub fn run<S, W>(source: S, sink: &mut W, config: &SessionConfig) -> io::Result<Outcome>
where
    S: CharSource,
    W: Write + ?Sized,
{
    let outcome = recognize_all(source, config.recognizer);
    info!(
        expressions = outcome.expressions,
        success = outcome.is_success(),
        "run finished"
    );

    if let Some(error) = &outcome.error {
        writeln!(sink, "{error}")?;
    }
    if outcome.is_success() || !config.strict {
        writeln!(sink, "{SUCCESS}")?;
    }
    sink.flush()?;
    Ok(outcome)
}
