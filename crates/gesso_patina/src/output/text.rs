//! Terminal output: one block per file, each diagnostic headed by its
//! position and rule, followed by the code frame from `oxc_diagnostics`.
//!
//! ```text
//! src/Foo.jsx
//!   1:1  error  react/prefer-stateless-function(componentShouldBePure)  [fixable]
//!   × Component should be written as a pure function
//!    ╭─[src/Foo.jsx:1:1]
//!   ...
//! ```

use std::fmt::Write;
use std::sync::Arc;

use gesso_carton::{FxHashMap, LineIndex};
use oxc_diagnostics::{GraphicalReportHandler, GraphicalTheme, NamedSource};

use crate::diagnostic::{LintDiagnostic, LintSummary, Severity};
use crate::linter::LintResult;

/// Format lint results as terminal output.
pub fn format_text(results: &[LintResult], sources: &[(String, String)]) -> String {
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    let source_map: FxHashMap<&str, &str> = sources
        .iter()
        .map(|(f, s)| (f.as_str(), s.as_str()))
        .collect();

    let mut output = String::new();
    for result in results.iter().filter(|r| !r.diagnostics.is_empty()) {
        let source = source_map.get(result.filename.as_str()).copied().unwrap_or("");
        let index = LineIndex::new(source);
        let named_source = Arc::new(NamedSource::new(&result.filename, source.to_string()));

        output.push_str(&result.filename);
        output.push('\n');
        for diagnostic in &result.diagnostics {
            output.push_str(&heading(diagnostic, &index));

            let report = diagnostic
                .clone()
                .into_oxc_diagnostic()
                .with_source_code(Arc::clone(&named_source));
            let mut frame = String::new();
            if handler.render_report(&mut frame, report.as_ref()).is_ok() {
                output.push_str(&frame);
            }
            if let Some(fix) = &diagnostic.fix {
                let _ = writeln!(output, "  fix: {}", fix.message);
            }
            output.push('\n');
        }
    }

    output
}

/// `  3:5  warning  react/jsx-sort-default-props(propsNotSorted)`
fn heading(diagnostic: &LintDiagnostic, index: &LineIndex) -> String {
    let (line, column) = index.line_col(diagnostic.start);
    let severity = match diagnostic.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    };
    let mut heading = format!(
        "  {line}:{column}  {severity}  {}({})",
        diagnostic.rule_name, diagnostic.message_id
    );
    if diagnostic.has_fix() {
        heading.push_str("  [fixable]");
    }
    heading.push('\n');
    heading
}

/// Format a summary line, e.g. `2 errors, 1 warning in 2 files (1 fixable)`.
pub fn format_summary(summary: &LintSummary) -> String {
    let files = summary.file_count;
    let mut parts = Vec::new();
    if summary.error_count > 0 {
        parts.push(counted(summary.error_count, "error"));
    }
    if summary.warning_count > 0 {
        parts.push(counted(summary.warning_count, "warning"));
    }

    if parts.is_empty() {
        return format!("No problems found in {}", counted(files, "file"));
    }
    let mut line = format!("{} in {}", parts.join(", "), counted(files, "file"));
    if summary.fixable_count > 0 {
        let _ = write!(line, " ({} fixable)", summary.fixable_count);
    }
    line
}

#[inline]
fn counted(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
