//! A single numbered file of an image sequence
//!
//! Frames are built from the three parts of a decomposed file name:
//! `shot_010.0042.exr` -> prefix `shot_010`, token `0042`, extension `exr`.

use std::fmt;

use serde::Serialize;

use crate::sequence::SequenceError;

/// One numbered file on disk
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Frame {
    prefix: String,
    /// Digit count of the numeric token as found on disk (`0007` -> 4)
    padding: usize,
    number: i64,
    ext: String,
}

impl Frame {
    /// Build a frame from the parts of a decomposed file name.
    ///
    /// The numeric token must be made only of ASCII digits. Its length becomes
    /// the padding, so `"0007"` yields padding 4 and number 7.
    pub fn new(prefix: &str, token: &str, ext: &str) -> Result<Self, SequenceError> {
        let (padding, number) = interpret_token(token)?;

        Ok(Self {
            prefix: prefix.to_string(),
            padding,
            number,
            ext: ext.to_string(),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn ext(&self) -> &str {
        &self.ext
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame {} from: {} ({})", self.number, self.prefix, self.ext)
    }
}

/// Split a numeric token into (padding, value)
///
/// '0000' -> (4, 0), '010' -> (3, 10), '200' -> (3, 200)
fn interpret_token(token: &str) -> Result<(usize, i64), SequenceError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SequenceError::MalformedInput(token.to_string()));
    }

    // All digits, so the only failure left is overflow
    let number = token
        .parse::<i64>()
        .map_err(|_| SequenceError::MalformedInput(token.to_string()))?;

    Ok((token.len(), number))
}
