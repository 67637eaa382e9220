//! In-memory character stream

use super::CharStream;
use crate::utils::Location;
use std::io::{self, Read};

/// A [`CharStream`] over text held in memory
#[derive(Debug, Clone)]
pub struct StringStream {
    chars: Vec<char>,
    offset: usize,
    location: Location,
}

impl StringStream {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            offset: 0,
            location: Location::start(),
        }
    }

    /// Read all of `reader` as UTF-8 text
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::new(&text))
    }

    /// Total number of characters in the stream
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl From<&str> for StringStream {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for StringStream {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

impl CharStream for StringStream {
    fn char_at(&self, offset: usize) -> Option<char> {
        self.chars.get(offset).copied()
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn location(&self) -> Location {
        self.location
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.get(self.offset).copied()?;
        self.offset += 1;
        self.location = self.location.advance(ch);
        Some(ch)
    }
}
