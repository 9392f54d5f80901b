use std::path::PathBuf;

use crate::counter::EffectiveLocCounter;
use crate::error::Result;
use crate::source::{DecodePolicy, read_source};

pub const DEFAULT_WARN_THRESHOLD: usize = 200;
pub const DEFAULT_FAIL_THRESHOLD: usize = 300;

/// Glob matching files under any `tests` directory segment. Those files are
/// exempt from the size limit, but not from the header check.
pub const TEST_DIR_EXCLUDE: &str = "**/tests/**";

/// Effective-line-count boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocThresholds {
    /// Counts strictly above this are warnings.
    pub warn: usize,
    /// Counts at or above this are failures.
    pub fail: usize,
}

impl LocThresholds {
    #[must_use]
    pub const fn new(warn: usize, fail: usize) -> Self {
        Self { warn, fail }
    }

    #[must_use]
    pub const fn classify(&self, loc: usize) -> LocClass {
        if loc >= self.fail {
            LocClass::Error
        } else if loc > self.warn {
            LocClass::Warn
        } else {
            LocClass::Ok
        }
    }
}

impl Default for LocThresholds {
    fn default() -> Self {
        Self::new(DEFAULT_WARN_THRESHOLD, DEFAULT_FAIL_THRESHOLD)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocClass {
    Ok,
    Warn,
    Error,
}

/// One classified file: effective line count plus path.
///
/// The derived ordering compares `loc` first, so a reversed sort produces
/// the report order: descending count, ties by descending path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct LocEntry {
    pub loc: usize,
    pub path: PathBuf,
}

#[derive(Debug, Default)]
pub struct LocReport {
    pub warnings: Vec<LocEntry>,
    pub failures: Vec<LocEntry>,
}

impl LocReport {
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

pub struct LocChecker<'a> {
    counter: EffectiveLocCounter<'a>,
    thresholds: LocThresholds,
    decode_policy: DecodePolicy,
}

impl<'a> LocChecker<'a> {
    #[must_use]
    pub const fn new(
        counter: EffectiveLocCounter<'a>,
        thresholds: LocThresholds,
        decode_policy: DecodePolicy,
    ) -> Self {
        Self {
            counter,
            thresholds,
            decode_policy,
        }
    }

    /// Classify every candidate file. Files at `Ok` are dropped; `Warn` and
    /// `Error` entries are listed by descending count.
    ///
    /// # Errors
    /// Returns an error only under [`DecodePolicy::Strict`], when a file
    /// cannot be read as text.
    pub fn check(&self, files: &[PathBuf]) -> Result<LocReport> {
        let mut warnings = Vec::new();
        let mut failures = Vec::new();

        for path in files {
            let text = read_source(path, self.decode_policy)?;
            let loc = self.counter.count(&text);
            let entry = LocEntry {
                loc,
                path: path.clone(),
            };

            match self.thresholds.classify(loc) {
                LocClass::Error => failures.push(entry),
                LocClass::Warn => warnings.push(entry),
                LocClass::Ok => {}
            }
        }

        warnings.sort_by(|a, b| b.cmp(a));
        failures.sort_by(|a, b| b.cmp(a));
        Ok(LocReport { warnings, failures })
    }
}

#[cfg(test)]
#[path = "loc_tests.rs"]
mod tests;
