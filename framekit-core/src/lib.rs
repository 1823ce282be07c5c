//! Framekit Core Library
//!
//! This crate discovers and describes numbered image sequences on disk:
//! - Frame file name decomposition and padding detection
//! - Sequence discovery, gap detection and formatted names
//! - Frame range expressions (`1-3, 5, 10-20:2`)
//! - Host frame patterns (`beauty.$F4.exr`, `beauty.####.exr`)
//! - Scan options and toolkit settings

pub mod config;
pub mod frame;
pub mod frame_range;
pub mod path_utils;
pub mod pattern;
pub mod sequence;
pub mod settings;

// Re-export commonly used types
pub use config::{PaddingPolicy, ScanOptions, DEFAULT_EXT_PATTERN, DEFAULT_PREFIX_PATTERN};
pub use frame::Frame;
pub use frame_range::{
    consecutive_runs, parse_frame_string, pretty_print_frame_list, pretty_print_runs,
    RangeExprError,
};
pub use path_utils::{join_file_name, normalize_path, path_to_string, split_file_name};
pub use pattern::FramePattern;
pub use sequence::{
    FileNameMatcher, FileNameParts, Sequence, SequenceError, SequenceSummary,
    HOUDINI_FRAME_FORMAT, STANDARD_FRAME_FORMAT,
};
pub use settings::ToolkitSettings;
