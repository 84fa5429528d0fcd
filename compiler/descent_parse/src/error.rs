//! Errors raised while recognizing an expression.

use std::io;

/// First error encountered during recognition.
///
/// Raised deep in the recursion and carried unchanged to the caller of
/// the top-level operation. Offsets count raw input characters from zero,
/// whitespace included.
#[derive(Debug, thiserror::Error)]
pub enum RecognizeError {
    /// The character after a parenthesized expression is not `)`.
    #[error("Missing ')' at offset {offset} (opened at offset {open})")]
    UnmatchedParenthesis { open: usize, offset: usize },

    /// A factor was expected and `found` cannot start one.
    #[error("Invalid character '{found}' at offset {offset}")]
    InvalidCharacter { found: char, offset: usize },

    /// A factor was expected and the input is exhausted.
    #[error("Unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Field-less discriminant of [`RecognizeError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnmatchedParenthesis,
    InvalidCharacter,
    UnexpectedEof,
    Io,
}

impl RecognizeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnmatchedParenthesis { .. } => ErrorKind::UnmatchedParenthesis,
            Self::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            Self::UnexpectedEof { .. } => ErrorKind::UnexpectedEof,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// Offset of the offending character, or of end of input.
    ///
    /// `None` for I/O failures, which have no position in the input.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::UnmatchedParenthesis { offset, .. }
            | Self::InvalidCharacter { offset, .. }
            | Self::UnexpectedEof { offset } => Some(*offset),
            Self::Io(_) => None,
        }
    }

    /// Whether this is a grammar violation rather than a read failure.
    pub fn is_syntax(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
