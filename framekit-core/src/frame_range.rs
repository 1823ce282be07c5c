//! Frame range expressions
//!
//! Frame selections are written as comma separated blocks of
//! `start[-end][:step]`, for example `1-3, 5, 9, 10-20:2`.
//!
//! [`parse_frame_string`] expands such an expression into explicit frame
//! numbers and [`pretty_print_frame_list`] collapses a sorted list back into
//! the compact form.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

/// Errors raised while parsing a frame range expression
#[derive(Debug, thiserror::Error)]
pub enum RangeExprError {
    #[error("Invalid block in frame string: '{0}' (expected start[-end][:step])")]
    InvalidBlock(String),

    #[error("End frame {end} is smaller than start frame {start} (block: '{block}')")]
    ReversedRange { block: String, start: i64, end: i64 },

    #[error("Step must be at least 1 (block: '{0}')")]
    ZeroStep(String),
}

fn block_regex() -> &'static Regex {
    static BLOCK: OnceLock<Regex> = OnceLock::new();
    BLOCK.get_or_init(|| {
        Regex::new(r"^(?P<start>-?\d+)(?:-(?P<end>-?\d+))?(?::(?P<step>\d+))?$")
            .expect("block pattern is a valid regex")
    })
}

/// Expand a frame range expression into a sorted, deduplicated frame list.
///
/// `"1-3, 5, 9, 10-20:2"` -> `[1, 2, 3, 5, 9, 10, 12, 14, 16, 18, 20]`
///
/// A blank expression selects nothing. Any block that does not follow the
/// grammar fails the whole parse.
pub fn parse_frame_string(expr: &str) -> Result<Vec<i64>, RangeExprError> {
    if expr.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut frames = BTreeSet::new();

    for block in expr.split(',') {
        let block = block.trim();
        let caps = block_regex()
            .captures(block)
            .ok_or_else(|| RangeExprError::InvalidBlock(block.to_string()))?;

        let start = parse_bound(&caps["start"], block)?;
        let end = match caps.name("end") {
            Some(end) => parse_bound(end.as_str(), block)?,
            None => start,
        };
        let step = match caps.name("step") {
            Some(step) => step
                .as_str()
                .parse::<usize>()
                .map_err(|_| RangeExprError::InvalidBlock(block.to_string()))?,
            None => 1,
        };

        if step == 0 {
            return Err(RangeExprError::ZeroStep(block.to_string()));
        }
        if end < start {
            return Err(RangeExprError::ReversedRange {
                block: block.to_string(),
                start,
                end,
            });
        }

        frames.extend((start..=end).step_by(step));
    }

    Ok(frames.into_iter().collect())
}

fn parse_bound(value: &str, block: &str) -> Result<i64, RangeExprError> {
    value
        .parse::<i64>()
        .map_err(|_| RangeExprError::InvalidBlock(block.to_string()))
}

/// Collapse an ascending frame list into a compact string.
///
/// Runs of three or more consecutive frames become `start-end`; single frames
/// and runs of two are listed individually. `[1, 2, 3, 4, 5, 9, 10, 13, 15]`
/// becomes `"1-5, 9, 10, 13, 15"`.
pub fn pretty_print_frame_list(frames: &[i64]) -> String {
    pretty_print_runs(&consecutive_runs(frames))
}

/// Same output as [`pretty_print_frame_list`], from inclusive `(start, end)`
/// runs that are already collapsed
pub fn pretty_print_runs(runs: &[(i64, i64)]) -> String {
    let mut parts = Vec::new();
    for &(start, last) in runs {
        push_run(&mut parts, start, last);
    }
    parts.join(", ")
}

/// Group an ascending frame list into inclusive runs of consecutive frames
pub fn consecutive_runs(frames: &[i64]) -> Vec<(i64, i64)> {
    let mut runs = Vec::new();
    let mut iter = frames.iter().copied();

    let Some(first) = iter.next() else {
        return runs;
    };

    let mut run_start = first;
    let mut last = first;

    for frame in iter {
        if last.checked_add(1) == Some(frame) {
            last = frame;
            continue;
        }

        runs.push((run_start, last));
        run_start = frame;
        last = frame;
    }
    runs.push((run_start, last));

    runs
}

fn push_run(parts: &mut Vec<String>, start: i64, last: i64) {
    if last == start {
        parts.push(last.to_string());
    } else if last.checked_sub(1) == Some(start) {
        // Two frames read better listed than as a range
        parts.push(start.to_string());
        parts.push(last.to_string());
    } else {
        parts.push(format!("{}-{}", start, last));
    }
}
