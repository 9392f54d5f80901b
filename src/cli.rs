use std::path::PathBuf;

use clap::Parser;

use crate::checker::{
    DEFAULT_FAIL_THRESHOLD, DEFAULT_HEADER_PATTERN, DEFAULT_WARN_THRESHOLD, TEST_DIR_EXCLUDE,
};

/// Directory scanned when no root argument is given.
pub const DEFAULT_ROOT: &str = "crates";

/// Extension scanned when no `--ext` is given.
pub const DEFAULT_EXTENSION: &str = "rs";

#[derive(Parser, Debug)]
#[command(name = "check-headers")]
#[command(author, version, about = "Verify that every source file carries a module header comment")]
#[command(long_about = "Scans a source tree and reports files missing the required\n\
    module header comment.\n\n\
    Exit codes:\n  \
    0 - All files compliant\n  \
    1 - Missing headers found\n  \
    2 - Usage or runtime error")]
pub struct HeadersCli {
    /// Root directory to scan
    #[arg(default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// File extensions to scan (comma-separated, e.g., rs,go)
    #[arg(long, value_delimiter = ',', default_value = DEFAULT_EXTENSION)]
    pub ext: Vec<String>,

    /// Required header pattern (regular expression, matched anywhere in the file)
    #[arg(long, default_value = DEFAULT_HEADER_PATTERN)]
    pub pattern: String,

    /// Fail on unreadable or non-UTF-8 files instead of scanning them as empty
    #[arg(long)]
    pub strict_decode: bool,
}

#[derive(Parser, Debug)]
#[command(name = "check-loc")]
#[command(author, version, about = "Enforce effective line-count limits on non-test source files")]
#[command(long_about = "Counts the effective lines of every non-test source file\n\
    (leading header block, blank lines and line comments excluded) and\n\
    classifies each file against the warn and fail thresholds.\n\n\
    Exit codes:\n  \
    0 - No file at or above the fail threshold (warnings allowed)\n  \
    1 - At least one file at or above the fail threshold\n  \
    2 - Usage or runtime error")]
pub struct LocCli {
    /// Root directory to scan
    #[arg(default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// File extensions to scan (comma-separated, e.g., rs,go)
    #[arg(long, value_delimiter = ',', default_value = DEFAULT_EXTENSION)]
    pub ext: Vec<String>,

    /// Warn threshold (counts strictly above this are warnings)
    #[arg(long, default_value_t = DEFAULT_WARN_THRESHOLD)]
    pub warn_threshold: usize,

    /// Fail threshold (counts at or above this fail the run)
    #[arg(long, default_value_t = DEFAULT_FAIL_THRESHOLD)]
    pub fail_threshold: usize,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x', default_value = TEST_DIR_EXCLUDE)]
    pub exclude: Vec<String>,

    /// Fail on unreadable or non-UTF-8 files instead of counting them as empty
    #[arg(long)]
    pub strict_decode: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
