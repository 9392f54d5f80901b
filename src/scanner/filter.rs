use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{HygieneGuardError, Result};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Keeps files whose extension is in the candidate set and which no
/// exclude glob matches. An empty extension set admits every file.
pub struct SourceFilter {
    extensions: Vec<String>,
    excludes: GlobSet,
}

impl SourceFilter {
    /// Create a filter from candidate extensions and exclude globs.
    ///
    /// # Errors
    /// Returns an error if an exclude pattern is not a valid glob.
    pub fn new(extensions: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| HygieneGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let excludes = builder
            .build()
            .map_err(|e| HygieneGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            extensions,
            excludes,
        })
    }

    fn has_candidate_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}

impl FileFilter for SourceFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_candidate_extension(path) && !self.excludes.is_match(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
