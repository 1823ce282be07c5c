//! Fixtures shared by the Framekit benchmarks

use std::fs;
use std::path::Path;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::TempDir;

/// Write empty `<prefix>.NNNN.<ext>` files for the given frame numbers
pub fn write_sequence(dir: &Path, prefix: &str, ext: &str, frames: &[i64]) -> Result<()> {
    for frame in frames {
        fs::write(dir.join(format!("{}.{:04}.{}", prefix, frame, ext)), b"")?;
    }
    Ok(())
}

/// A temp directory holding one sequence plus some unrelated files
pub fn render_dir(frames: &[i64]) -> Result<TempDir> {
    let dir = TempDir::new()?;
    write_sequence(dir.path(), "beauty", "exr", frames)?;
    write_sequence(dir.path(), "beauty", "jpg", &frames[..frames.len().min(10)])?;
    fs::write(dir.path().join("render.log"), b"")?;
    Ok(dir)
}

/// Frames `1..=count` with roughly `drop_ratio` of them removed, reproducible
/// for a given seed
pub fn gappy_frames(count: i64, drop_ratio: f64, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=count).filter(|_| !rng.gen_bool(drop_ratio)).collect()
}
