//! The grammar recognizer.
//!
//! One method per non-terminal, all sharing the lookahead cursor held in
//! [`Recognizer`]. Each method returns with the cursor advanced past
//! everything it consumed, except [`Recognizer::recognize_factor`], which
//! leaves its own last character in the cursor.
//!
//! # Who advances the cursor
//!
//! A character of lookahead is consumed exactly once, by exactly one owner:
//!
//! - `Factor` never steps past its last character (the operand itself, or
//!   the closing `)`).
//! - `Term` steps past every `Factor` it recognizes, once, before looking
//!   for `*`. It is the only layer that does so.
//! - `Expression` steps only past the `+` it consumes; the `Term` it just
//!   recognized has already moved the cursor on.
//!
//! Getting this split wrong desynchronizes the cursor silently: a doubled
//! advance skips an operator, a missing one re-reads an operand.

use descent_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::{CharSource, RecognizeError};

/// The atomic operand alphabet.
pub const OPERANDS: [char; 4] = ['a', 'b', '5', '3'];

/// Whether `c` is an atomic operand.
#[inline]
pub fn is_operand(c: char) -> bool {
    OPERANDS.contains(&c)
}

/// Knobs for how characters are pulled from the source.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RecognizerConfig {
    /// Skip whitespace between significant characters.
    ///
    /// When off, whitespace reaches the grammar and is rejected wherever a
    /// factor is expected.
    pub skip_whitespace: bool,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        RecognizerConfig {
            skip_whitespace: true,
        }
    }
}

/// Recursive descent recognizer over a single character of lookahead.
pub struct Recognizer<S> {
    source: S,
    config: RecognizerConfig,
    /// Lookahead; `None` at end of input.
    current: Option<char>,
    /// Raw offset of `current`, or the input length at end of input.
    offset: usize,
    /// Raw characters pulled from `source` so far.
    consumed: usize,
}

impl<S: CharSource> Recognizer<S> {
    /// Create a recognizer with the cursor primed on the first character.
    pub fn new(source: S) -> Result<Self, RecognizeError> {
        Self::with_config(source, RecognizerConfig::default())
    }

    pub fn with_config(source: S, config: RecognizerConfig) -> Result<Self, RecognizeError> {
        let mut recognizer = Recognizer {
            source,
            config,
            current: None,
            offset: 0,
            consumed: 0,
        };
        recognizer.advance()?;
        Ok(recognizer)
    }

    /// The character in the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    pub fn config(&self) -> RecognizerConfig {
        self.config
    }

    /// Replace the cursor with the next significant character.
    pub fn advance(&mut self) -> Result<(), RecognizeError> {
        loop {
            let next = self.source.next_char()?;
            self.offset = self.consumed;
            match next {
                Some(c) if self.config.skip_whitespace && c.is_whitespace() => {
                    self.consumed += 1;
                }
                Some(c) => {
                    self.consumed += 1;
                    self.current = Some(c);
                    break;
                }
                None => {
                    self.current = None;
                    break;
                }
            }
        }
        trace!(offset = self.offset, current = ?self.current, "advance");
        Ok(())
    }

    /// `Expression := Term ( '+' Term )*`
    ///
    /// On success the cursor holds the first character past the
    /// expression, or end of input.
    #[tracing::instrument(level = "trace", skip(self), fields(offset = self.offset, current = ?self.current))]
    pub fn recognize_expression(&mut self) -> Result<(), RecognizeError> {
        ensure_sufficient_stack(|| {
            self.recognize_term()?;
            while self.current == Some('+') {
                self.advance()?;
                self.recognize_term()?;
            }
            Ok(())
        })
    }

    /// `Term := Factor ( '*' Factor )*`
    ///
    /// Steps past each recognized factor exactly once, then checks for `*`.
    /// On success the cursor holds the first character past the term.
    #[tracing::instrument(level = "trace", skip(self), fields(offset = self.offset, current = ?self.current))]
    pub fn recognize_term(&mut self) -> Result<(), RecognizeError> {
        ensure_sufficient_stack(|| {
            self.recognize_factor()?;
            loop {
                self.advance()?;
                if self.current != Some('*') {
                    return Ok(());
                }
                self.advance()?;
                self.recognize_factor()?;
            }
        })
    }

    /// `Factor := '(' Expression ')' | '-' Factor | operand`
    ///
    /// Leaves the factor's last character in the cursor: a bare operand is
    /// matched without advancing, and a parenthesized factor stops on its
    /// `)`. The enclosing [`recognize_term`](Self::recognize_term) advances
    /// past it.
    #[tracing::instrument(level = "trace", skip(self), fields(offset = self.offset, current = ?self.current))]
    pub fn recognize_factor(&mut self) -> Result<(), RecognizeError> {
        ensure_sufficient_stack(|| match self.current {
            Some('(') => {
                let open = self.offset;
                self.advance()?;
                self.recognize_expression()?;
                if self.current == Some(')') {
                    Ok(())
                } else {
                    self.fail(RecognizeError::UnmatchedParenthesis {
                        open,
                        offset: self.offset,
                    })
                }
            }
            Some('-') => {
                self.advance()?;
                self.recognize_factor()
            }
            Some(c) if is_operand(c) => Ok(()),
            Some(found) => self.fail(RecognizeError::InvalidCharacter {
                found,
                offset: self.offset,
            }),
            None => self.fail(RecognizeError::UnexpectedEof {
                offset: self.offset,
            }),
        })
    }

    fn fail(&self, error: RecognizeError) -> Result<(), RecognizeError> {
        debug!(kind = ?error.kind(), offset = self.offset, "{error}");
        Err(error)
    }
}
