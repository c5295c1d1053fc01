//! Line-oriented lookups over a source buffer.

use memchr::memchr_iter;

/// Precomputed line starts for byte offset to line/column conversion.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<u32>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = Vec::with_capacity(source.len() / 32 + 1);
        line_starts.push(0);
        line_starts.extend(memchr_iter(b'\n', source.as_bytes()).map(|i| i as u32 + 1));
        Self { line_starts }
    }

    /// Number of lines in the buffer.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// 1-based `(line, column)` for a byte offset. Columns count bytes.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        (line as u32 + 1, offset - self.line_starts[line] + 1)
    }
}

/// Byte offset of the start of the line containing `offset`.
pub fn line_start(source: &str, offset: u32) -> u32 {
    let end = (offset as usize).min(source.len());
    source.as_bytes()[..end]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i as u32 + 1)
}

/// Leading whitespace of the line containing `offset`.
pub fn line_indent(source: &str, offset: u32) -> &str {
    let start = line_start(source, offset) as usize;
    let rest = &source[start..];
    let len = rest
        .bytes()
        .take_while(|&b| b == b' ' || b == b'\t')
        .count();
    &rest[..len]
}

/// Whether only spaces and tabs precede `offset` on its line.
pub fn is_line_leading(source: &str, offset: u32) -> bool {
    let start = line_start(source, offset) as usize;
    source[start..offset as usize]
        .bytes()
        .all(|b| b == b' ' || b == b'\t')
}
