//! Character streams
//!
//! A [`CharStream`] is a seekable cursor over source characters that keeps an
//! offset and a [`Location`] in step. Implementors supply four primitives;
//! reading, peeking and predicate-driven scanning are derived from them.

pub mod source;
pub mod string_stream;

pub use source::{load_source, SourceError, SourceFile};
pub use string_stream::StringStream;

use crate::utils::Location;

pub trait CharStream {
    /// Character at an absolute offset, `None` past the end.
    fn char_at(&self, offset: usize) -> Option<char>;

    /// Number of characters consumed so far.
    fn offset(&self) -> usize;

    /// Location of the next character to be read.
    fn location(&self) -> Location;

    /// Consume one character, advancing offset and location.
    fn bump(&mut self) -> Option<char>;

    fn line(&self) -> u32 {
        self.location().line
    }

    fn column(&self) -> u32 {
        self.location().column
    }

    /// True once every character has been consumed.
    fn ended(&self) -> bool {
        self.char_at(self.offset()).is_none()
    }

    /// Up to `n` characters starting at the cursor, without consuming them.
    fn peek(&self, n: usize) -> String {
        let start = self.offset();
        (start..start + n).map_while(|i| self.char_at(i)).collect()
    }

    /// Consume up to `n` characters. Near the end fewer are returned.
    fn read(&mut self, n: usize) -> String {
        let mut text = String::with_capacity(n);
        for _ in 0..n {
            match self.bump() {
                Some(ch) => text.push(ch),
                None => break,
            }
        }
        text
    }

    /// Consume characters until `until(previous, current)` holds for the
    /// current character or the stream ends. The matching character is left
    /// unconsumed.
    fn read_until<F>(&mut self, mut until: F) -> String
    where
        F: FnMut(Option<char>, char) -> bool,
    {
        let start = self.offset();
        let mut previous = None;
        let mut length = 0;

        while let Some(current) = self.char_at(start + length) {
            if until(previous, current) {
                break;
            }
            previous = Some(current);
            length += 1;
        }

        self.read(length)
    }

    /// Consume characters up to, not including, the first `c`.
    fn read_until_exactly(&mut self, c: char) -> String {
        self.read_until(|_, current| current == c)
    }
}
