use std::fs;
use std::path::Path;

use crate::error::{HygieneGuardError, Result};

/// Policy for files that cannot be read or decoded as UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Replace invalid UTF-8 sequences; an unreadable file scans as empty.
    #[default]
    Lossy,
    /// Surface read and decode failures as errors.
    Strict,
}

impl DecodePolicy {
    #[must_use]
    pub const fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Lossy }
    }
}

/// Read a file as text under the given decode policy.
///
/// Under [`DecodePolicy::Lossy`], a file that cannot be read yields empty
/// text: it can never satisfy a header pattern and counts zero lines.
///
/// # Errors
/// Returns an error only under [`DecodePolicy::Strict`], when the file
/// cannot be read or is not valid UTF-8.
pub fn read_source(path: &Path, policy: DecodePolicy) -> Result<String> {
    match policy {
        DecodePolicy::Lossy => Ok(fs::read(path)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_default()),
        DecodePolicy::Strict => {
            fs::read_to_string(path).map_err(|source| HygieneGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
