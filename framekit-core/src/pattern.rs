//! Frame patterns from host file parameters
//!
//! Render and file nodes reference sequences with a frame token in place of
//! the number: `beauty.####.exr`, `beauty.$F4.exr` or `beauty.$F.exr`.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::path_utils::{join_file_name, split_file_name};
use crate::sequence::{frame_token, pad_frame_number, SequenceError};

fn pattern_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^(?P<prefix>.+?)(?P<sep>[.\-_])(?:(?P<hashes>#+)|\$F(?P<width>[0-9]*))\.(?P<ext>[^.]+)$",
        )
        .expect("frame pattern regex is valid")
    })
}

/// A parsed `<dir>/<prefix><sep><token>.<ext>` file parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePattern {
    dir: Option<PathBuf>,
    prefix: String,
    separator: char,
    padding: usize,
    ext: String,
}

impl FramePattern {
    /// Parse a file parameter.
    ///
    /// `#` tokens give one digit of padding per character, `$F4` gives 4 and
    /// a bare `$F` gives 1.
    pub fn parse(pattern: &str) -> Result<Self, SequenceError> {
        let invalid = || SequenceError::InvalidFramePattern(pattern.to_string());

        let (dir, file_name) = split_file_name(pattern);
        let caps = pattern_regex().captures(file_name).ok_or_else(invalid)?;

        let padding = match (caps.name("hashes"), caps.name("width")) {
            (Some(hashes), _) => hashes.as_str().len(),
            (None, Some(width)) if width.as_str().is_empty() => 1,
            (None, Some(width)) => width.as_str().parse::<usize>().map_err(|_| invalid())?,
            (None, None) => return Err(invalid()),
        };
        if padding == 0 {
            return Err(invalid());
        }

        let separator = caps["sep"].chars().next().ok_or_else(invalid)?;

        Ok(Self {
            dir: dir.map(|d| PathBuf::from(if d.is_empty() { "/" } else { d })),
            prefix: caps["prefix"].to_string(),
            separator,
            padding,
            ext: caps["ext"].to_string(),
        })
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    pub fn ext(&self) -> &str {
        &self.ext
    }

    /// Concrete file name for one frame: `beauty.$F4.exr` + 7 -> `beauty.0007.exr`
    pub fn render(&self, number: i64) -> String {
        format!(
            "{}{}{}.{}",
            self.prefix,
            self.separator,
            pad_frame_number(number, self.padding),
            self.ext
        )
    }

    /// Like [`render`](Self::render), with the pattern's directory in front
    pub fn render_path(&self, number: i64) -> String {
        let file_name = self.render(number);
        match &self.dir {
            Some(dir) => join_file_name(dir, &file_name),
            None => file_name,
        }
    }

    /// The pattern written with another frame token (`#` or `$F`)
    pub fn with_format(&self, format: &str) -> String {
        format!(
            "{}{}{}.{}",
            self.prefix,
            self.separator,
            frame_token(format, self.padding),
            self.ext
        )
    }
}
