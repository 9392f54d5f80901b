/// Comment markers driving header stripping and line exclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSyntax {
    /// Prefix of a single-line comment, tested after trimming whitespace.
    pub line_prefix: String,
    /// Marker opening a block comment.
    pub block_open: String,
    /// Marker closing a block comment.
    pub block_close: String,
}

impl CommentSyntax {
    #[must_use]
    pub fn rust() -> Self {
        Self {
            line_prefix: "//".to_string(),
            block_open: "/*".to_string(),
            block_close: "*/".to_string(),
        }
    }
}

impl Default for CommentSyntax {
    fn default() -> Self {
        Self::rust()
    }
}

/// Counts the effective lines of a source text: a leading header block is
/// stripped, then blank lines and single-line comments are excluded.
pub struct EffectiveLocCounter<'a> {
    syntax: &'a CommentSyntax,
}

impl<'a> EffectiveLocCounter<'a> {
    #[must_use]
    pub const fn new(syntax: &'a CommentSyntax) -> Self {
        Self { syntax }
    }

    #[must_use]
    pub fn count(&self, source: &str) -> usize {
        let lines: Vec<&str> = source.lines().collect();
        let start = self.header_end(&lines);

        lines[start..]
            .iter()
            .filter(|line| self.is_effective(line))
            .count()
    }

    /// Index of the first line after the leading header block.
    ///
    /// A header opens only when line 0, after trimming leading whitespace,
    /// begins with the opening marker; it ends at the first line containing
    /// the closing marker, inclusive. An unterminated header consumes the
    /// whole file. A block comment further down is NOT a header and its
    /// lines fall through to normal counting.
    fn header_end(&self, lines: &[&str]) -> usize {
        let Some(first) = lines.first() else {
            return 0;
        };
        if !first.trim_start().starts_with(&self.syntax.block_open) {
            return 0;
        }

        lines
            .iter()
            .position(|line| line.contains(&self.syntax.block_close))
            .map_or(lines.len(), |close| close + 1)
    }

    fn is_effective(&self, line: &str) -> bool {
        let trimmed = line.trim();
        !trimmed.is_empty() && !trimmed.starts_with(&self.syntax.line_prefix)
    }
}

#[cfg(test)]
#[path = "effective_tests.rs"]
mod tests;
