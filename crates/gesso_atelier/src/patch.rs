//! Rewrite patches.

use gesso_carton::{apply_edits, TextEdit};
use serde::Serialize;

/// An ordered set of non-overlapping edits against the original buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RewritePatch {
    edits: Vec<TextEdit>,
}

impl RewritePatch {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, edit: TextEdit) {
        tracing::trace!(start = edit.start, end = edit.end, "patch edit");
        self.edits.push(edit);
    }

    /// Sort edits by start offset and check they are disjoint.
    pub(crate) fn finish(mut self) -> Self {
        self.edits.sort_by_key(|edit| (edit.start, edit.end));
        debug_assert!(
            self.edits.windows(2).all(|pair| !pair[0].overlaps(&pair[1])),
            "overlapping rewrite edits: {:?}",
            self.edits
        );
        self
    }

    /// Edits in ascending start order.
    pub fn edits(&self) -> &[TextEdit] {
        &self.edits
    }

    pub fn into_edits(self) -> Vec<TextEdit> {
        self.edits
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Apply the patch to the buffer it was computed from.
    pub fn apply(&self, source: &str) -> String {
        apply_edits(source, &self.edits)
    }
}
