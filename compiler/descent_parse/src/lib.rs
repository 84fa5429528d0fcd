//! Recursive descent recognizer for the Descent expression grammar.
//!
//! ```text
//! Expression := Term ( '+' Term )*
//! Term       := Factor ( '*' Factor )*
//! Factor     := '(' Expression ')' | '-' Factor | 'a' | 'b' | '5' | '3'
//! ```
//!
//! The recognizer accepts or rejects; it builds no tree. One procedure per
//! non-terminal, all sharing a single character of lookahead pulled on
//! demand from a [`CharSource`].

mod error;
mod recognizer;
mod source;

pub use error::{ErrorKind, RecognizeError};
pub use recognizer::{is_operand, Recognizer, RecognizerConfig, OPERANDS};
pub use source::{CharSource, ReaderSource, StrSource};
