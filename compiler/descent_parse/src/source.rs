//! Character sources feeding the recognizer's lookahead.
//!
//! A source hands out one character per call and reports end of input as
//! `Ok(None)`, distinct from any character. The recognizer never asks for
//! more than one character ahead.

use std::io::{self, Read};
use std::str::Chars;

/// Supplier of characters, read one at a time on demand.
pub trait CharSource {
    /// Read the next character, or `Ok(None)` once the input is exhausted.
    ///
    /// Calling again after `Ok(None)` keeps returning `Ok(None)`.
    fn next_char(&mut self) -> io::Result<Option<char>>;
}

impl<T: CharSource + ?Sized> CharSource for &mut T {
    #[inline]
    fn next_char(&mut self) -> io::Result<Option<char>> {
        (**self).next_char()
    }
}

/// In-memory source over a string slice. Never fails.
#[derive(Clone, Debug)]
pub struct StrSource<'a> {
    chars: Chars<'a>,
}

impl<'a> StrSource<'a> {
    pub fn new(input: &'a str) -> Self {
        StrSource {
            chars: input.chars(),
        }
    }
}

impl CharSource for StrSource<'_> {
    #[inline]
    fn next_char(&mut self) -> io::Result<Option<char>> {
        Ok(self.chars.next())
    }
}

/// Blocking source decoding UTF-8 from a byte reader.
///
/// Reads byte by byte, so wrap unbuffered readers (files, stdin) in a
/// `BufReader` first.
pub struct ReaderSource<R> {
    bytes: io::Bytes<R>,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        ReaderSource {
            bytes: reader.bytes(),
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        self.bytes.next().transpose()
    }
}

impl<R: Read> CharSource for ReaderSource<R> {
    fn next_char(&mut self) -> io::Result<Option<char>> {
        let Some(lead) = self.next_byte()? else {
            return Ok(None);
        };
        let width = utf8_width(lead);
        if width == 0 {
            return Err(invalid_utf8());
        }

        let mut buf = [lead, 0, 0, 0];
        for slot in &mut buf[1..width] {
            *slot = self.next_byte()?.ok_or_else(|| {
                io::Error::new(io::ErrorKind::UnexpectedEof, "truncated UTF-8 sequence")
            })?;
        }

        std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .map(Some)
            .ok_or_else(invalid_utf8)
    }
}

/// Encoded length implied by a UTF-8 lead byte; 0 if it cannot lead.
fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

fn invalid_utf8() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, "input is not valid UTF-8")
}
