//! Byte-range text edits.
//!
//! Every transformation in Gesso is expressed as a list of replacements over the
//! original buffer rather than as a regenerated AST. Offsets are byte offsets
//! into that buffer, matching `oxc_span::Span`.

use serde::Serialize;

/// A single replacement of `source[start..end]` with `new_text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEdit {
    /// Start byte offset (inclusive)
    pub start: u32,
    /// End byte offset (exclusive)
    pub end: u32,
    /// Replacement text
    pub new_text: String,
}

impl TextEdit {
    /// Create a new text edit.
    #[inline]
    pub fn new(start: u32, end: u32, new_text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            new_text: new_text.into(),
        }
    }

    /// Replace a range.
    #[inline]
    pub fn replace(start: u32, end: u32, new_text: impl Into<String>) -> Self {
        Self::new(start, end, new_text)
    }

    /// Insert text at a position.
    #[inline]
    pub fn insert(offset: u32, text: impl Into<String>) -> Self {
        Self::new(offset, offset, text)
    }

    /// Delete a range.
    #[inline]
    pub fn delete(start: u32, end: u32) -> Self {
        Self::new(start, end, "")
    }

    /// Whether this edit's range overlaps `other`'s.
    ///
    /// Two insertions at the same offset are considered overlapping since
    /// their relative order would be ambiguous.
    pub fn overlaps(&self, other: &TextEdit) -> bool {
        if self.start == self.end && other.start == other.end {
            return self.start == other.start;
        }
        self.start < other.end && other.start < self.end
    }
}

/// Apply edits to `source`.
///
/// Edits are applied from the highest start offset down so earlier offsets stay
/// valid. Edits whose range falls outside the buffer or off a char boundary
/// are skipped.
pub fn apply_edits(source: &str, edits: &[TextEdit]) -> String {
    let mut sorted: Vec<&TextEdit> = edits.iter().collect();
    sorted.sort_by(|a, b| b.start.cmp(&a.start).then(b.end.cmp(&a.end)));

    let mut result = source.to_string();
    for edit in sorted {
        let start = edit.start as usize;
        let end = edit.end as usize;
        if start > end
            || end > result.len()
            || !result.is_char_boundary(start)
            || !result.is_char_boundary(end)
        {
            continue;
        }
        result.replace_range(start..end, &edit.new_text);
    }
    result
}
