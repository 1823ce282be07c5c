//! Frame sequence discovery
//!
//! A [`Sequence`] is the set of numbered files in one directory that share a
//! prefix, extension and padding width, e.g.
//! `beauty.1001.exr` .. `beauty.1100.exr`.
//!
//! Discovery works on file names only:
//! 1. Entries are listed and sorted by name so the result does not depend on
//!    platform enumeration order.
//! 2. Each name is decomposed as `<prefix><sep><digits>.<ext>` with `sep` one
//!    of `.`, `-` or `_`. Names that don't fit are ignored.
//! 3. The first name that decomposes locks in the family (prefix and
//!    extension). Any of the three separators still matches after that. The
//!    padding is locked by [`PaddingPolicy`].
//! 4. Frames with a different padding, or outside the optional range filter,
//!    are skipped. The rest are sorted by frame number. When two names carry
//!    the same number (`shot.0001.exr`, `shot_0001.exr`) the first by name is
//!    kept.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Serialize;

use crate::config::{PaddingPolicy, ScanOptions};
use crate::frame::Frame;
use crate::frame_range::pretty_print_runs;
use crate::path_utils::{join_file_name, path_to_string};
use crate::pattern::FramePattern;

/// Wildcard character used for padded frame numbers (`beauty.####.exr`)
pub const STANDARD_FRAME_FORMAT: &str = "#";

/// Houdini frame variable (`beauty.$F4.exr`)
pub const HOUDINI_FRAME_FORMAT: &str = "$F";

/// Errors that can occur while discovering or querying a sequence
#[derive(Debug, thiserror::Error)]
pub enum SequenceError {
    #[error("Failed to read directory {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed frame padding string: '{0}'")]
    MalformedInput(String),

    #[error("Sequence contains no frames")]
    EmptySequence,

    #[error("Invalid file name pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Invalid frame pattern: '{0}' (expected name.####.ext or name.$F4.ext)")]
    InvalidFramePattern(String),
}

/// The parts of a decomposed frame file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileNameParts<'a> {
    pub prefix: &'a str,
    pub separator: char,
    pub digits: &'a str,
    pub ext: &'a str,
}

/// Matches file names of the form `<prefix><sep><digits>.<ext>`
#[derive(Debug, Clone)]
pub struct FileNameMatcher {
    regex: Regex,
}

impl FileNameMatcher {
    /// Build a matcher from regex fragments for the prefix and extension
    pub fn new(prefix_pattern: &str, ext_pattern: &str) -> Result<Self, SequenceError> {
        Self::build(prefix_pattern, r"[.\-_]", ext_pattern)
    }

    /// Build a matcher for one exact prefix and extension. Any of the
    /// separators is still accepted.
    pub fn literal(prefix: &str, ext: &str) -> Result<Self, SequenceError> {
        Self::build(&regex::escape(prefix), r"[.\-_]", &regex::escape(ext))
    }

    fn build(prefix: &str, separator: &str, ext: &str) -> Result<Self, SequenceError> {
        let pattern = format!(
            r"^(?P<prefix>(?:{}))(?P<sep>{})(?P<digits>[0-9]+)\.(?P<ext>(?:{}))$",
            prefix, separator, ext
        );
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    /// Split a file name into its parts, or `None` if it doesn't fit
    pub fn decompose<'a>(&self, file_name: &'a str) -> Option<FileNameParts<'a>> {
        let caps = self.regex.captures(file_name)?;
        Some(FileNameParts {
            prefix: caps.name("prefix")?.as_str(),
            separator: caps.name("sep")?.as_str().chars().next()?,
            digits: caps.name("digits")?.as_str(),
            ext: caps.name("ext")?.as_str(),
        })
    }
}

/// Frames of one sequence found in a directory
#[derive(Debug, Clone)]
pub struct Sequence {
    dir: PathBuf,
    frames: Vec<Frame>,
    separator: char,
    range: Option<(i64, i64)>,
}

impl Sequence {
    /// Scan a directory with default options
    pub fn scan(dir: impl AsRef<Path>) -> Result<Self, SequenceError> {
        Self::scan_with(dir, &ScanOptions::default())
    }

    /// Scan a directory for the first sequence matching the options
    pub fn scan_with(dir: impl AsRef<Path>, options: &ScanOptions) -> Result<Self, SequenceError> {
        let matcher = FileNameMatcher::new(&options.prefix_pattern, &options.ext_pattern)?;
        Self::scan_matching(dir.as_ref(), &matcher, options, None)
    }

    /// Scan for the files described by a host file parameter such as
    /// `/renders/beauty.$F4.exr` or `beauty.####.exr`.
    ///
    /// Only files with exactly the pattern's prefix, extension and padding are
    /// collected. The separator on disk may differ from the pattern's, so the
    /// dotted name from [`formatted`](Self::formatted) finds `plate_0001.dpx`
    /// too. A pattern without a directory scans the current directory.
    pub fn scan_pattern(pattern: &str, range: Option<(i64, i64)>) -> Result<Self, SequenceError> {
        let pattern = FramePattern::parse(pattern)?;
        let matcher = FileNameMatcher::literal(pattern.prefix(), pattern.ext())?;
        let options = ScanOptions {
            range,
            ..Default::default()
        };
        let dir = pattern.dir().unwrap_or_else(|| Path::new("."));
        Self::scan_matching(dir, &matcher, &options, Some(pattern.padding()))
    }

    fn scan_matching(
        dir: &Path,
        matcher: &FileNameMatcher,
        options: &ScanOptions,
        exact_padding: Option<usize>,
    ) -> Result<Self, SequenceError> {
        let names = list_file_names(dir)?;

        let Some(first) = names.iter().find_map(|name| matcher.decompose(name)) else {
            tracing::debug!("No frame files found in {}", dir.display());
            return Ok(Self {
                dir: dir.to_path_buf(),
                frames: Vec::new(),
                separator: '.',
                range: None,
            });
        };

        let family = FileNameMatcher::literal(first.prefix, first.ext)?;
        let candidates: Vec<FileNameParts<'_>> =
            names.iter().filter_map(|name| family.decompose(name)).collect();

        let padding = match (exact_padding, options.padding_policy) {
            (Some(padding), _) => padding,
            (None, PaddingPolicy::FirstSeen) => first.digits.len(),
            (None, PaddingPolicy::MostCommon) => most_common_padding(&candidates),
        };

        let mut frames = Vec::with_capacity(candidates.len());
        let mut separator = None;
        for parts in candidates {
            if parts.digits.len() != padding {
                tracing::debug!(
                    "Skipping frame token '{}': padding {} does not match {}",
                    parts.digits,
                    parts.digits.len(),
                    padding
                );
                continue;
            }

            let frame = Frame::new(parts.prefix, parts.digits, parts.ext)?;
            if !options.in_range(frame.number()) {
                continue;
            }
            separator.get_or_insert(parts.separator);
            frames.push(frame);
        }

        // Stable sort, so the first name for a repeated number stays in front
        frames.sort_by_key(Frame::number);
        let before = frames.len();
        frames.dedup_by_key(|frame| frame.number());
        if frames.len() < before {
            tracing::debug!(
                "Dropped {} frames repeating a number under another separator",
                before - frames.len()
            );
        }

        let range = match (frames.first(), frames.last()) {
            (Some(first), Some(last)) => Some((first.number(), last.number())),
            _ => None,
        };

        tracing::info!(
            "Found {} frames of '{}' in {} (range {:?})",
            frames.len(),
            first.prefix,
            dir.display(),
            range
        );

        Ok(Self {
            dir: dir.to_path_buf(),
            frames,
            separator: separator.unwrap_or(first.separator),
            range,
        })
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    pub fn frame_numbers(&self) -> Vec<i64> {
        self.frames.iter().map(Frame::number).collect()
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// First and last frame numbers, `None` for an empty sequence
    pub fn range(&self) -> Option<(i64, i64)> {
        self.range
    }

    /// Span of the range including gaps (not the number of files).
    ///
    /// `None` for an empty sequence, or when the span does not fit in an `i64`.
    pub fn length(&self) -> Option<i64> {
        let (start, end) = self.range?;
        end.checked_sub(start)?.checked_add(1)
    }

    pub fn padding(&self) -> Option<usize> {
        self.frames.first().map(Frame::padding)
    }

    pub fn prefix(&self) -> Option<&str> {
        self.frames.first().map(Frame::prefix)
    }

    pub fn ext(&self) -> Option<&str> {
        self.frames.first().map(Frame::ext)
    }

    /// Separator between prefix and frame number on disk
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Frame numbers missing from the sequence.
    ///
    /// Only `[start, end)` is checked; the last frame of the range is never
    /// reported. Since the range is taken from the frames on disk the end
    /// frame always exists, so nothing is lost in practice.
    ///
    /// Every missing number is listed, so a huge gap gives a huge list. Use
    /// [`missing_runs`](Self::missing_runs) when gaps may be large.
    pub fn missing_frames(&self) -> Vec<i64> {
        self.missing_runs()
            .into_iter()
            .flat_map(|(start, end)| start..=end)
            .collect()
    }

    /// Gaps in the sequence as inclusive `(first, last)` runs of missing
    /// numbers. Cost depends on the number of frames, not the span.
    pub fn missing_runs(&self) -> Vec<(i64, i64)> {
        self.frames
            .windows(2)
            .filter_map(|pair| {
                let gap_start = pair[0].number().checked_add(1)?;
                let gap_end = pair[1].number().checked_sub(1)?;
                (gap_start <= gap_end).then_some((gap_start, gap_end))
            })
            .collect()
    }

    /// How many numbers are missing, saturating at `u64::MAX`
    pub fn missing_count(&self) -> u64 {
        self.missing_runs()
            .iter()
            .map(|&(start, end)| end.abs_diff(start).saturating_add(1))
            .fold(0u64, u64::saturating_add)
    }

    /// Missing frames as a compact string, e.g. `"3, 7-9"`
    pub fn missing_frames_pretty(&self) -> String {
        pretty_print_runs(&self.missing_runs())
    }

    /// Name that represents the whole sequence.
    ///
    /// `format` is repeated once per digit of padding (`beauty.####.exr`),
    /// except for [`HOUDINI_FRAME_FORMAT`] which becomes `$F4` (or plain `$F`
    /// when padding is 1). With `include_dir` the directory is joined in front.
    pub fn formatted(&self, format: &str, include_dir: bool) -> Result<String, SequenceError> {
        let (prefix, padding, ext) = self.family()?;

        let file_name = format!("{}.{}.{}", prefix, frame_token(format, padding), ext);

        if include_dir {
            Ok(join_file_name(&self.dir, &file_name))
        } else {
            Ok(file_name)
        }
    }

    /// File name a given frame number has (or would have) in this sequence.
    ///
    /// Uses the separator of the first file found. Negative numbers get the
    /// padding on their digits: `-0005`.
    pub fn frame_name(&self, number: i64) -> Result<String, SequenceError> {
        let (prefix, padding, ext) = self.family()?;
        Ok(format!(
            "{}{}{}.{}",
            prefix,
            self.separator,
            pad_frame_number(number, padding),
            ext
        ))
    }

    fn family(&self) -> Result<(&str, usize, &str), SequenceError> {
        let first = self.frames.first().ok_or(SequenceError::EmptySequence)?;
        Ok((first.prefix(), first.padding(), first.ext()))
    }

    /// Snapshot of the sequence for reporting
    pub fn summary(&self) -> SequenceSummary {
        SequenceSummary {
            dir: path_to_string(&self.dir),
            name: self.formatted(STANDARD_FRAME_FORMAT, false).ok(),
            houdini_name: self.formatted(HOUDINI_FRAME_FORMAT, false).ok(),
            range: self.range,
            length: self.length(),
            frame_count: self.frames.len(),
            missing_count: self.missing_count(),
            missing_pretty: self.missing_frames_pretty(),
        }
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// Serializable report of a scanned sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceSummary {
    pub dir: String,
    pub name: Option<String>,
    pub houdini_name: Option<String>,
    pub range: Option<(i64, i64)>,
    pub length: Option<i64>,
    pub frame_count: usize,
    pub missing_count: u64,
    pub missing_pretty: String,
}

/// Frame token for a padding width: `#` -> `####`, `$F` -> `$F4` (`$F` when
/// the padding is 1)
pub(crate) fn frame_token(format: &str, padding: usize) -> String {
    if format != HOUDINI_FRAME_FORMAT {
        return format.repeat(padding);
    }
    if padding > 1 {
        format!("{}{}", HOUDINI_FRAME_FORMAT, padding)
    } else {
        HOUDINI_FRAME_FORMAT.to_string()
    }
}

/// Zero-pad the digits of a frame number, keeping any sign in front
pub(crate) fn pad_frame_number(number: i64, padding: usize) -> String {
    if number < 0 {
        format!("-{:0width$}", number.unsigned_abs(), width = padding)
    } else {
        format!("{:0width$}", number, width = padding)
    }
}

/// List the file names in a directory, sorted. Subdirectories and names that
/// aren't valid UTF-8 are left out.
fn list_file_names(dir: &Path) -> Result<Vec<String>, SequenceError> {
    let entries = fs::read_dir(dir).map_err(|source| SequenceError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }

        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}

/// Most frequent digit count, ties going to the width seen first
fn most_common_padding(candidates: &[FileNameParts<'_>]) -> usize {
    let mut counts: HashMap<usize, usize> = HashMap::new();
    let mut order = Vec::new();

    for parts in candidates {
        let width = parts.digits.len();
        let count = counts.entry(width).or_insert(0);
        if *count == 0 {
            order.push(width);
        }
        *count += 1;
    }

    let mut best = (0, 0);
    for width in order {
        let count = counts[&width];
        if count > best.1 {
            best = (width, count);
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dir_with(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in files {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        dir
    }

    fn numbered(prefix: &str, ext: &str, numbers: impl IntoIterator<Item = i64>) -> Vec<String> {
        numbers
            .into_iter()
            .map(|n| format!("{}.{:04}.{}", prefix, n, ext))
            .collect()
    }

    fn dir_with_owned(files: &[String]) -> TempDir {
        let names: Vec<&str> = files.iter().map(String::as_str).collect();
        dir_with(&names)
    }

    #[test]
    fn test_decompose() {
        let matcher = FileNameMatcher::new(r"[\w\-\.]+", "[a-zA-Z]+").unwrap();

        let parts = matcher.decompose("comp.v002.1001.exr").unwrap();
        assert_eq!(parts.prefix, "comp.v002");
        assert_eq!(parts.separator, '.');
        assert_eq!(parts.digits, "1001");
        assert_eq!(parts.ext, "exr");

        let parts = matcher.decompose("plate_0042.dpx").unwrap();
        assert_eq!(parts.prefix, "plate");
        assert_eq!(parts.separator, '_');
        assert_eq!(parts.digits, "0042");

        let parts = matcher.decompose("shot-7.tif").unwrap();
        assert_eq!(parts.separator, '-');
        assert_eq!(parts.digits, "7");

        assert!(matcher.decompose("notes.txt").is_none());
        assert!(matcher.decompose("beauty.0001.exr.bak1").is_none());
        assert!(matcher.decompose("0001.exr").is_none());
        assert!(matcher.decompose("beauty.0001.mp4").is_none());
    }

    #[test]
    fn test_literal_matcher_escapes() {
        let matcher = FileNameMatcher::literal("comp.v2", "exr").unwrap();
        assert!(matcher.decompose("comp.v2.0001.exr").is_some());
        assert!(matcher.decompose("compXv2.0001.exr").is_none());
        assert!(matcher.decompose("comp.v2.0001.exrs").is_none());

        let parts = matcher.decompose("comp.v2_0001.exr").unwrap();
        assert_eq!(parts.separator, '_');
        assert_eq!(parts.prefix, "comp.v2");
    }

    #[test]
    fn test_full_sequence() {
        let dir = dir_with_owned(&numbered("beauty", "exr", 1..=10));
        let seq = Sequence::scan(dir.path()).unwrap();

        assert_eq!(seq.len(), 10);
        assert_eq!(seq.range(), Some((1, 10)));
        assert_eq!(seq.length(), Some(10));
        assert!(seq.missing_frames().is_empty());
        assert_eq!(seq.padding(), Some(4));
        assert_eq!(seq.prefix(), Some("beauty"));
        assert_eq!(seq.ext(), Some("exr"));
        assert_eq!(seq.frame_numbers(), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_missing_frames() {
        let dir = dir_with_owned(&numbered("beauty", "exr", [1, 2, 4, 7, 10]));
        let seq = Sequence::scan(dir.path()).unwrap();

        assert_eq!(seq.range(), Some((1, 10)));
        assert_eq!(seq.length(), Some(10));
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.missing_frames(), vec![3, 5, 6, 8, 9]);
        assert_eq!(seq.missing_frames_pretty(), "3, 5, 6, 8, 9");
    }

    #[test]
    fn test_missing_frames_pretty_collapses_runs() {
        let dir = dir_with_owned(&numbered("beauty", "exr", [1001, 1002, 1010]));
        let seq = Sequence::scan(dir.path()).unwrap();
        assert_eq!(seq.missing_frames_pretty(), "1003-1009");
    }

    #[test]
    fn test_ignores_unrelated_files() {
        let mut files = numbered("beauty", "exr", 1..=3);
        files.push("notes.txt".to_string());
        files.push("thumbs.db".to_string());
        files.push("readme".to_string());
        let dir = dir_with_owned(&files);

        let seq = Sequence::scan(dir.path()).unwrap();
        assert_eq!(seq.frame_numbers(), vec![1, 2, 3]);
    }

    #[test]
    fn test_first_family_wins() {
        let mut files = numbered("albedo", "exr", 1..=2);
        files.extend(numbered("beauty", "exr", 1..=5));
        let dir = dir_with_owned(&files);

        // "albedo" sorts first, so it becomes the sequence
        let seq = Sequence::scan(dir.path()).unwrap();
        assert_eq!(seq.prefix(), Some("albedo"));
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn test_mixed_padding_first_seen() {
        let dir = dir_with(&["shot.1.exr", "shot.0002.exr", "shot.3.exr"]);

        // "shot.0002.exr" sorts before "shot.1.exr" and locks padding 4
        let seq = Sequence::scan(dir.path()).unwrap();
        assert_eq!(seq.frame_numbers(), vec![2]);
        assert_eq!(seq.padding(), Some(4));
    }

    #[test]
    fn test_mixed_padding_most_common() {
        let dir = dir_with(&["shot.1.exr", "shot.0002.exr", "shot.3.exr"]);
        let options = ScanOptions::default().with_padding_policy(PaddingPolicy::MostCommon);

        let seq = Sequence::scan_with(dir.path(), &options).unwrap();
        assert_eq!(seq.frame_numbers(), vec![1, 3]);
        assert_eq!(seq.padding(), Some(1));
    }

    #[test]
    fn test_most_common_padding_tie_goes_to_first_seen() {
        let matcher = FileNameMatcher::new(r"\w+", "exr").unwrap();
        let names = ["a.0001.exr", "a.2.exr", "a.0003.exr", "a.4.exr"];
        let parts: Vec<_> = names.iter().filter_map(|n| matcher.decompose(n)).collect();
        assert_eq!(most_common_padding(&parts), 4);
    }

    #[test]
    fn test_mixed_separators_join_one_sequence() {
        let dir = dir_with(&["shot_0001.exr", "shot_0002.exr", "shot.0003.exr", "shot-0004.exr"]);

        let seq = Sequence::scan(dir.path()).unwrap();
        assert_eq!(seq.frame_numbers(), vec![1, 2, 3, 4]);
        assert!(seq.missing_frames().is_empty());
        // '-' sorts before '.' and '_'
        assert_eq!(seq.separator(), '-');
    }

    #[test]
    fn test_repeated_number_keeps_first_name() {
        let dir = dir_with(&["shot_0001.exr", "shot.0001.exr", "shot.0002.exr"]);

        let seq = Sequence::scan(dir.path()).unwrap();
        assert_eq!(seq.frame_numbers(), vec![1, 2]);
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.missing_count(), 0);
    }

    #[test]
    fn test_range_filter() {
        let dir = dir_with_owned(&numbered("beauty", "exr", 1..=20));
        let options = ScanOptions::default().with_range(5, 8);

        let seq = Sequence::scan_with(dir.path(), &options).unwrap();
        assert_eq!(seq.frame_numbers(), vec![5, 6, 7, 8]);
        assert_eq!(seq.range(), Some((5, 8)));
    }

    #[test]
    fn test_range_filter_excludes_everything() {
        let dir = dir_with_owned(&numbered("beauty", "exr", 1..=5));
        let options = ScanOptions::default().with_range(100, 200);

        let seq = Sequence::scan_with(dir.path(), &options).unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.range(), None);
    }

    #[test]
    fn test_prefix_and_ext_patterns() {
        let mut files = numbered("albedo", "exr", 1..=3);
        files.extend(numbered("beauty", "exr", 1..=3));
        files.extend(numbered("beauty", "png", 1..=3));
        let dir = dir_with_owned(&files);

        let options = ScanOptions::default()
            .with_prefix_pattern("beauty")
            .with_ext_pattern("png");
        let seq = Sequence::scan_with(dir.path(), &options).unwrap();
        assert_eq!(seq.prefix(), Some("beauty"));
        assert_eq!(seq.ext(), Some("png"));
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn test_invalid_prefix_pattern() {
        let dir = dir_with(&[]);
        let options = ScanOptions::default().with_prefix_pattern("(unclosed");
        assert!(matches!(
            Sequence::scan_with(dir.path(), &options),
            Err(SequenceError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        match Sequence::scan(&missing) {
            Err(SequenceError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected io error, got {:?}", other),
        }
    }

    #[test]
    fn test_skips_directories() {
        let dir = dir_with(&["beauty.0002.exr"]);
        fs::create_dir(dir.path().join("beauty.0001.exr")).unwrap();

        let seq = Sequence::scan(dir.path()).unwrap();
        assert_eq!(seq.frame_numbers(), vec![2]);
    }

    #[test]
    fn test_empty_sequence() {
        let dir = dir_with(&["notes.txt"]);
        let seq = Sequence::scan(dir.path()).unwrap();

        assert!(seq.is_empty());
        assert_eq!(seq.range(), None);
        assert_eq!(seq.length(), None);
        assert_eq!(seq.padding(), None);
        assert!(seq.missing_frames().is_empty());
        assert!(matches!(
            seq.formatted(STANDARD_FRAME_FORMAT, false),
            Err(SequenceError::EmptySequence)
        ));
        assert!(matches!(seq.frame_name(1), Err(SequenceError::EmptySequence)));
    }

    #[test]
    fn test_formatted() {
        let dir = dir_with_owned(&numbered("beauty", "exr", 1..=3));
        let seq = Sequence::scan(dir.path()).unwrap();

        assert_eq!(seq.formatted("#", false).unwrap(), "beauty.####.exr");
        assert_eq!(seq.formatted("@", false).unwrap(), "beauty.@@@@.exr");
        assert_eq!(seq.formatted("$F", false).unwrap(), "beauty.$F4.exr");

        let with_dir = seq.formatted("$F", true).unwrap();
        assert!(with_dir.ends_with("/beauty.$F4.exr"));
        assert!(!with_dir.contains('\\'));
    }

    #[test]
    fn test_formatted_houdini_unpadded() {
        let dir = dir_with(&["shot.1.exr", "shot.2.exr"]);
        let seq = Sequence::scan(dir.path()).unwrap();
        assert_eq!(seq.formatted(HOUDINI_FRAME_FORMAT, false).unwrap(), "shot.$F.exr");
        assert_eq!(seq.formatted(STANDARD_FRAME_FORMAT, false).unwrap(), "shot.#.exr");
    }

    #[test]
    fn test_frame_name() {
        let dir = dir_with(&["plate_0001.dpx", "plate_0003.dpx"]);
        let seq = Sequence::scan(dir.path()).unwrap();
        assert_eq!(seq.frame_name(2).unwrap(), "plate_0002.dpx");
        assert_eq!(seq.frame_name(12345).unwrap(), "plate_12345.dpx");
        assert_eq!(seq.frame_name(-5).unwrap(), "plate_-0005.dpx");
        assert_eq!(seq.frame_name(0).unwrap(), "plate_0000.dpx");
    }

    #[test]
    fn test_pad_frame_number() {
        assert_eq!(pad_frame_number(7, 4), "0007");
        assert_eq!(pad_frame_number(-7, 4), "-0007");
        assert_eq!(pad_frame_number(-12345, 3), "-12345");
        assert_eq!(pad_frame_number(i64::MIN, 1), i64::MIN.to_string());
    }

    #[test]
    fn test_huge_span_does_not_overflow() {
        let dir = dir_with(&["big.0000000000000000000.exr", "big.9223372036854775807.exr"]);
        let seq = Sequence::scan(dir.path()).unwrap();

        assert_eq!(seq.range(), Some((0, i64::MAX)));
        assert_eq!(seq.padding(), Some(19));
        assert_eq!(seq.length(), None);
        assert_eq!(seq.missing_runs(), vec![(1, i64::MAX - 1)]);
        assert_eq!(seq.missing_count(), (i64::MAX - 1) as u64);
        assert_eq!(seq.missing_frames_pretty(), format!("1-{}", i64::MAX - 1));

        let summary = seq.summary();
        assert_eq!(summary.length, None);
        assert_eq!(summary.frame_count, 2);
        assert_eq!(summary.missing_count, (i64::MAX - 1) as u64);
    }

    #[test]
    fn test_missing_runs() {
        let dir = dir_with_owned(&numbered("beauty", "exr", [1, 2, 4, 7, 8, 12]));
        let seq = Sequence::scan(dir.path()).unwrap();

        assert_eq!(seq.missing_runs(), vec![(3, 3), (5, 6), (9, 11)]);
        assert_eq!(seq.missing_count(), 6);
        assert_eq!(seq.missing_frames(), vec![3, 5, 6, 9, 10, 11]);
    }

    #[test]
    fn test_iteration() {
        let dir = dir_with_owned(&numbered("beauty", "exr", [3, 1, 2]));
        let seq = Sequence::scan(dir.path()).unwrap();

        let numbers: Vec<i64> = (&seq).into_iter().map(Frame::number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);

        let mut count = 0;
        for frame in &seq {
            assert_eq!(frame.padding(), 4);
            count += 1;
        }
        assert_eq!(count, 3);
    }

    #[test]
    fn test_scan_pattern() {
        let dir = dir_with(&[
            "beauty.0001.exr",
            "beauty.0002.exr",
            "beauty.03.exr",
            "albedo.0001.exr",
        ]);
        let pattern = format!("{}/beauty.$F4.exr", path_to_string(dir.path()));

        let seq = Sequence::scan_pattern(&pattern, None).unwrap();
        assert_eq!(seq.prefix(), Some("beauty"));
        assert_eq!(seq.frame_numbers(), vec![1, 2]);

        let seq = Sequence::scan_pattern(&pattern, Some((2, 2))).unwrap();
        assert_eq!(seq.frame_numbers(), vec![2]);
    }

    #[test]
    fn test_scan_pattern_exact_padding() {
        let dir = dir_with(&["beauty.03.exr", "beauty.0001.exr", "beauty.04.exr"]);
        let pattern = format!("{}/beauty.##.exr", path_to_string(dir.path()));

        // The padding comes from the pattern, not from the first file found
        let seq = Sequence::scan_pattern(&pattern, None).unwrap();
        assert_eq!(seq.frame_numbers(), vec![3, 4]);
    }

    #[test]
    fn test_summary_json() {
        let dir = dir_with_owned(&numbered("beauty", "exr", [1, 2, 5]));
        let seq = Sequence::scan(dir.path()).unwrap();

        let summary = seq.summary();
        assert_eq!(summary.name.as_deref(), Some("beauty.####.exr"));
        assert_eq!(summary.houdini_name.as_deref(), Some("beauty.$F4.exr"));
        assert_eq!(summary.frame_count, 3);
        assert_eq!(summary.missing_count, 2);
        assert_eq!(summary.missing_pretty, "3, 4");

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["frameCount"], 3);
        assert_eq!(json["houdiniName"], "beauty.$F4.exr");
        assert_eq!(json["range"], serde_json::json!([1, 5]));
    }
}
