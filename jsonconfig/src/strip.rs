//! Streaming removal of `//` line comments from JSON byte streams.
//!
//! [`CommentStripper`] wraps any [`Read`] source and filters it
//! incrementally, so it can sit directly in front of a JSON decoder without
//! the caller buffering the whole input first. String literals pass through
//! byte-for-byte, including any `//` they contain, and the newline ending a
//! comment is emitted so line positions in downstream parse diagnostics stay
//! meaningful.

use std::collections::VecDeque;
use std::io::{self, Read};

const CHUNK: usize = 8 * 1024;

/// Lexical state of the filter between bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Outside strings and comments.
    Normal,
    /// One `/` seen; the next byte decides between a comment and a literal
    /// slash.
    SeenSlash,
    /// Inside a double-quoted string; comment detection is disabled.
    InString,
    /// The byte after a backslash inside a string; copied unconditionally.
    Escape,
    /// Inside a `//` comment; bytes are discarded until the next newline.
    InLineComment,
}

/// A [`Read`] adapter that strips `//` line comments from JSON text.
///
/// # Examples
///
/// ```rust
/// use jsonconfig::CommentStripper;
/// use std::io::Read;
///
/// let source = "{\"pl//ace\": \"kept\"} // removed\n";
/// let mut stripped = String::new();
/// CommentStripper::new(source.as_bytes()).read_to_string(&mut stripped)?;
/// assert_eq!(stripped, "{\"pl//ace\": \"kept\"} \n");
/// # Ok::<_, std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct CommentStripper<R> {
    inner: R,
    state: State,
    ready: VecDeque<u8>,
}

impl<R: Read> CommentStripper<R> {
    /// Wraps `inner`, filtering comments out of everything read through it.
    #[must_use]
    pub const fn new(inner: R) -> Self {
        Self {
            inner,
            state: State::Normal,
            ready: VecDeque::new(),
        }
    }

    /// Unwraps the adapter, returning the underlying reader.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn step(&mut self, byte: u8) {
        match self.state {
            State::Normal => match byte {
                b'"' => {
                    self.ready.push_back(byte);
                    self.state = State::InString;
                }
                b'/' => self.state = State::SeenSlash,
                _ => self.ready.push_back(byte),
            },
            State::SeenSlash => {
                if byte == b'/' {
                    self.state = State::InLineComment;
                } else {
                    // Not a comment after all; release the held slash and
                    // reprocess the byte from the normal state.
                    self.ready.push_back(b'/');
                    self.state = State::Normal;
                    self.step(byte);
                }
            }
            State::InString => match byte {
                b'\\' => {
                    self.ready.push_back(byte);
                    self.state = State::Escape;
                }
                b'"' => {
                    self.ready.push_back(byte);
                    self.state = State::Normal;
                }
                _ => self.ready.push_back(byte),
            },
            State::Escape => {
                self.ready.push_back(byte);
                self.state = State::InString;
            }
            State::InLineComment => {
                if byte == b'\n' {
                    self.ready.push_back(byte);
                    self.state = State::Normal;
                }
            }
        }
    }
}

impl<R: Read> Read for CommentStripper<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        while self.ready.is_empty() {
            let mut chunk = [0_u8; CHUNK];
            let count = self.inner.read(&mut chunk)?;
            if count == 0 {
                if self.state == State::SeenSlash {
                    // A trailing lone slash is released for the parser to
                    // report as it sees fit.
                    self.ready.push_back(b'/');
                    self.state = State::Normal;
                    break;
                }
                return Ok(0);
            }
            for &byte in chunk.iter().take(count) {
                self.step(byte);
            }
        }
        let take = buf.len().min(self.ready.len());
        for (slot, byte) in buf.iter_mut().zip(self.ready.drain(..take)) {
            *slot = byte;
        }
        Ok(take)
    }
}
