mod filter;

pub use filter::{FileFilter, SourceFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Trait for scanning directories and finding candidate files.
pub trait FileScanner {
    /// Scan a directory tree and return all matching file paths.
    ///
    /// A missing root yields an empty set rather than an error; walk
    /// failures on individual entries are skipped.
    ///
    /// # Errors
    /// Returns an error if the enumeration itself cannot proceed.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Ok(WalkDir::new(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file() && self.filter.should_include(e.path()))
            .map(walkdir::DirEntry::into_path)
            .collect())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
