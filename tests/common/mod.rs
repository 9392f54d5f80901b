#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates a temporary source tree for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a Rust file with a module header and the given number of
    /// code lines.
    pub fn create_headed_file(&self, relative_path: &str, code_lines: usize) {
        let mut content = String::from("/* Module: fixture */\n");
        push_code_lines(&mut content, code_lines);
        self.create_file(relative_path, &content);
    }

    /// Creates a Rust file without a module header.
    pub fn create_headless_file(&self, relative_path: &str, code_lines: usize) {
        let mut content = String::new();
        push_code_lines(&mut content, code_lines);
        self.create_file(relative_path, &content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn push_code_lines(content: &mut String, count: usize) {
    for i in 0..count {
        let _ = writeln!(content, "let var_{i} = {i};");
    }
}
