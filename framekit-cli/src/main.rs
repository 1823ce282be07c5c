//! Framekit CLI
//!
//! Command-line inspector for image sequences on disk.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use framekit_core::{
    parse_frame_string, pretty_print_frame_list, split_file_name, PaddingPolicy, ScanOptions,
    Sequence, HOUDINI_FRAME_FORMAT, STANDARD_FRAME_FORMAT,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "framekit")]
#[command(about = "Inspect numbered image sequences and frame ranges")]
#[command(version)]
struct Cli {
    /// Log skipped files and scan details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the sequence found in a directory
    Scan {
        /// Directory to scan, or a frame pattern like renders/beauty.$F4.exr
        target: String,

        #[command(flatten)]
        scan: ScanArgs,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// List frames missing from the sequence
    Missing {
        /// Directory to scan, or a frame pattern
        target: String,

        #[command(flatten)]
        scan: ScanArgs,

        /// Print the file name of each missing frame instead of a range string
        #[arg(long)]
        names: bool,
    },

    /// Print the name representing the whole sequence
    Format {
        /// Directory to scan, or a frame pattern
        target: String,

        #[command(flatten)]
        scan: ScanArgs,

        /// Use the Houdini frame variable ($F4) instead of '#' wildcards
        #[arg(long)]
        houdini: bool,

        /// Include the directory in the printed name
        #[arg(long)]
        include_dir: bool,
    },

    /// Expand a frame range expression such as "1-3, 5, 10-20:2"
    Expand {
        expr: String,
    },

    /// Collapse frame numbers into a range expression
    Collapse {
        #[arg(required = true, allow_negative_numbers = true)]
        frames: Vec<i64>,
    },
}

#[derive(Args)]
struct ScanArgs {
    /// Only keep frames in START-END (inclusive)
    #[arg(short, long, value_parser = parse_scan_range)]
    range: Option<(i64, i64)>,

    /// Regex the file name prefix must match
    #[arg(long)]
    prefix: Option<String>,

    /// Regex the file extension must match
    #[arg(long)]
    ext: Option<String>,

    /// Keep the most common padding instead of the first one found
    #[arg(long)]
    most_common_padding: bool,

    /// TOML file with scan options (flags override it)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ScanArgs {
    fn to_options(&self) -> Result<ScanOptions> {
        let mut options = match &self.config {
            Some(path) => ScanOptions::from_config_file(path)?,
            None => ScanOptions::default(),
        };

        if let Some((start, end)) = self.range {
            options = options.with_range(start, end);
        }
        if let Some(prefix) = &self.prefix {
            options = options.with_prefix_pattern(prefix.clone());
        }
        if let Some(ext) = &self.ext {
            options = options.with_ext_pattern(ext.clone());
        }
        if self.most_common_padding {
            options = options.with_padding_policy(PaddingPolicy::MostCommon);
        }

        Ok(options)
    }
}

/// Parse `START-END` (or a single frame) for `--range`
fn parse_scan_range(value: &str) -> Result<(i64, i64), String> {
    let value = value.trim();
    let split = value
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c == '-')
        .map(|(idx, _)| idx);

    let (start, end) = match split {
        Some(idx) => (&value[..idx], &value[idx + 1..]),
        None => (value, value),
    };

    let start: i64 = start
        .trim()
        .parse()
        .map_err(|_| format!("invalid start frame in '{}'", value))?;
    let end: i64 = end
        .trim()
        .parse()
        .map_err(|_| format!("invalid end frame in '{}'", value))?;

    if end < start {
        return Err(format!("end frame {} is before start frame {}", end, start));
    }
    Ok((start, end))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let directive = if cli.verbose { "framekit=debug" } else { "framekit=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Scan { target, scan, json } => cmd_scan(&target, &scan, json),
        Commands::Missing {
            target,
            scan,
            names,
        } => cmd_missing(&target, &scan, names),
        Commands::Format {
            target,
            scan,
            houdini,
            include_dir,
        } => cmd_format(&target, &scan, houdini, include_dir),
        Commands::Expand { expr } => cmd_expand(&expr),
        Commands::Collapse { mut frames } => {
            frames.sort_unstable();
            frames.dedup();
            println!("{}", pretty_print_frame_list(&frames));
            Ok(())
        }
    }
}

/// Scan a directory, or the directory of a frame pattern
fn load_sequence(target: &str, scan: &ScanArgs) -> Result<Sequence> {
    let options = scan.to_options()?;
    tracing::debug!("Scanning {} with {:?}", target, options);

    let sequence = if is_frame_pattern(target) {
        Sequence::scan_pattern(target, options.range)
    } else {
        Sequence::scan_with(Path::new(target), &options)
    };

    sequence.with_context(|| format!("Failed to scan {}", target))
}

/// A target is a frame pattern when its file name carries a frame token.
/// Existing directories are always scanned as directories, so `renders/take#2`
/// is not mistaken for a pattern.
fn is_frame_pattern(target: &str) -> bool {
    if Path::new(target).is_dir() {
        return false;
    }
    let (_, file_name) = split_file_name(target);
    file_name.contains(STANDARD_FRAME_FORMAT) || file_name.contains(HOUDINI_FRAME_FORMAT)
}

fn cmd_scan(target: &str, scan: &ScanArgs, json: bool) -> Result<()> {
    let sequence = load_sequence(target, scan)?;
    let summary = sequence.summary();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let (Some(name), Some((start, end))) = (&summary.name, summary.range) else {
        println!("No sequence found in {}", summary.dir);
        return Ok(());
    };

    println!("{}", name);
    if let Some(houdini) = &summary.houdini_name {
        println!("  houdini:  {}", houdini);
    }
    println!("  dir:      {}", summary.dir);
    println!("  range:    {}-{}", start, end);
    println!(
        "  frames:   {} of {}",
        summary.frame_count,
        summary.length.unwrap_or_default()
    );
    if summary.missing_count == 0 {
        println!("  missing:  none");
    } else {
        println!("  missing:  {}", summary.missing_pretty);
    }

    Ok(())
}

fn cmd_missing(target: &str, scan: &ScanArgs, names: bool) -> Result<()> {
    let sequence = load_sequence(target, scan)?;
    if sequence.is_empty() {
        bail!("No sequence found in {}", target);
    }

    if names {
        for (start, end) in sequence.missing_runs() {
            for number in start..=end {
                println!("{}", sequence.frame_name(number)?);
            }
        }
    } else {
        println!("{}", sequence.missing_frames_pretty());
    }

    Ok(())
}

fn cmd_format(target: &str, scan: &ScanArgs, houdini: bool, include_dir: bool) -> Result<()> {
    let sequence = load_sequence(target, scan)?;
    let format = if houdini {
        HOUDINI_FRAME_FORMAT
    } else {
        STANDARD_FRAME_FORMAT
    };

    let name = sequence
        .formatted(format, include_dir)
        .with_context(|| format!("No sequence found in {}", target))?;
    println!("{}", name);
    Ok(())
}

fn cmd_expand(expr: &str) -> Result<()> {
    let frames = parse_frame_string(expr).context("Invalid frame range expression")?;
    for frame in frames {
        println!("{}", frame);
    }
    Ok(())
}
