use std::path::PathBuf;

use regex::Regex;

use crate::error::{HygieneGuardError, Result};
use crate::source::{DecodePolicy, read_source};

/// A line whose content, after leading whitespace, opens a block comment
/// followed by `Module:` and at least one more character.
pub const DEFAULT_HEADER_PATTERN: &str = r"(?m)^\s*/\*\s*Module:\s*.+";

/// Predicate deciding whether a file's text carries the required header.
pub trait HeaderMatcher {
    /// A match anywhere in the text counts; position is not checked.
    fn is_compliant(&self, source: &str) -> bool;
}

pub struct RegexHeaderMatcher {
    pattern: Regex,
}

impl RegexHeaderMatcher {
    /// Compile a matcher from a regular expression.
    ///
    /// # Errors
    /// Returns an error if `pattern` is not a valid regular expression.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let pattern =
            Regex::new(pattern).map_err(|e| HygieneGuardError::InvalidHeaderPattern {
                pattern: pattern.to_string(),
                source: e,
            })?;
        Ok(Self { pattern })
    }
}

impl HeaderMatcher for RegexHeaderMatcher {
    fn is_compliant(&self, source: &str) -> bool {
        self.pattern.is_match(source)
    }
}

/// Files missing the required header, sorted for display.
#[derive(Debug, Default)]
pub struct HeaderReport {
    pub violations: Vec<PathBuf>,
}

impl HeaderReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

pub struct HeaderChecker<M: HeaderMatcher> {
    matcher: M,
    decode_policy: DecodePolicy,
}

impl<M: HeaderMatcher> HeaderChecker<M> {
    #[must_use]
    pub const fn new(matcher: M, decode_policy: DecodePolicy) -> Self {
        Self {
            matcher,
            decode_policy,
        }
    }

    /// Scan every candidate file and collect the non-compliant ones.
    ///
    /// Under the lossy decode policy an unreadable file scans as empty and
    /// is therefore reported as a violation.
    ///
    /// # Errors
    /// Returns an error only under [`DecodePolicy::Strict`], when a file
    /// cannot be read as text.
    pub fn check(&self, files: &[PathBuf]) -> Result<HeaderReport> {
        let mut violations = Vec::new();

        for path in files {
            let text = read_source(path, self.decode_policy)?;
            if !self.matcher.is_compliant(&text) {
                violations.push(path.clone());
            }
        }

        violations.sort();
        Ok(HeaderReport { violations })
    }
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
