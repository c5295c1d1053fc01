//! Diagnostic types for gesso_patina linter.
//!
//! Uses `CompactString` for efficient small string storage.

use gesso_carton::{apply_edits, CompactString};
use oxc_diagnostics::OxcDiagnostic;
use oxc_span::Span;
use serde::Serialize;

pub use gesso_carton::TextEdit;

/// Lint diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A fix for a diagnostic, containing one or more text edits.
#[derive(Debug, Clone, Serialize)]
pub struct Fix {
    /// Description of the fix
    pub message: String,
    /// Non-overlapping text edits against the linted source
    pub edits: Vec<TextEdit>,
}

impl Fix {
    /// Create a new fix with a single edit
    #[inline]
    pub fn new(message: impl Into<String>, edit: TextEdit) -> Self {
        Self {
            message: message.into(),
            edits: vec![edit],
        }
    }

    /// Create a new fix with multiple edits
    #[inline]
    pub fn with_edits(message: impl Into<String>, edits: Vec<TextEdit>) -> Self {
        Self {
            message: message.into(),
            edits,
        }
    }

    /// Apply the fix to a source string
    #[inline]
    pub fn apply(&self, source: &str) -> String {
        apply_edits(source, &self.edits)
    }
}

/// A lint diagnostic with rich information for display.
///
/// Uses `CompactString` for message storage - strings up to 24 bytes
/// are stored inline without heap allocation.
#[derive(Debug, Clone)]
pub struct LintDiagnostic {
    /// Rule that triggered this diagnostic
    pub rule_name: &'static str,
    /// Stable identifier of the message, e.g. `propsNotSorted`
    pub message_id: &'static str,
    /// Severity level
    pub severity: Severity,
    /// Primary message (CompactString for efficiency)
    pub message: CompactString,
    /// Start byte offset in source
    pub start: u32,
    /// End byte offset in source
    pub end: u32,
    /// Help message for fixing (optional, CompactString)
    pub help: Option<CompactString>,
    /// Auto-fix for this diagnostic (optional)
    pub fix: Option<Fix>,
}

impl LintDiagnostic {
    #[inline]
    fn new(
        rule_name: &'static str,
        message_id: &'static str,
        severity: Severity,
        message: CompactString,
        span: Span,
    ) -> Self {
        Self {
            rule_name,
            message_id,
            severity,
            message,
            start: span.start,
            end: span.end,
            help: None,
            fix: None,
        }
    }

    /// Create a new error diagnostic
    #[inline]
    pub fn error(
        rule_name: &'static str,
        message_id: &'static str,
        message: impl Into<CompactString>,
        span: Span,
    ) -> Self {
        Self::new(rule_name, message_id, Severity::Error, message.into(), span)
    }

    /// Create a new warning diagnostic
    #[inline]
    pub fn warn(
        rule_name: &'static str,
        message_id: &'static str,
        message: impl Into<CompactString>,
        span: Span,
    ) -> Self {
        Self::new(rule_name, message_id, Severity::Warning, message.into(), span)
    }

    /// Add a help message
    #[inline]
    pub fn with_help(mut self, help: impl Into<CompactString>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Add a fix for this diagnostic
    #[inline]
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }

    /// Check if this diagnostic has a fix
    #[inline]
    pub fn has_fix(&self) -> bool {
        self.fix.is_some()
    }

    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// Convert to OxcDiagnostic for rich rendering
    pub fn into_oxc_diagnostic(self) -> OxcDiagnostic {
        let diag = match self.severity {
            Severity::Error => OxcDiagnostic::error(self.message.to_string()),
            Severity::Warning => OxcDiagnostic::warn(self.message.to_string()),
        };
        let diag = diag.with_label(Span::new(self.start, self.end));

        match self.help {
            Some(help) => diag.with_help(help.to_string()),
            None => diag,
        }
    }
}

/// Summary of lint results
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintSummary {
    pub error_count: usize,
    pub warning_count: usize,
    pub fixable_count: usize,
    pub file_count: usize,
}

impl LintSummary {
    #[inline]
    pub fn add(&mut self, diagnostic: &LintDiagnostic) {
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
        if diagnostic.has_fix() {
            self.fixable_count += 1;
        }
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}
