//! ESLint-style JSON output.

use gesso_carton::{FxHashMap, LineIndex};
use serde::Serialize;

use crate::diagnostic::{Fix, Severity};
use crate::linter::LintResult;

/// JSON output structure for a single file
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonFileResult<'r> {
    pub file_path: &'r str,
    pub messages: Vec<JsonMessage<'r>>,
    pub error_count: usize,
    pub warning_count: usize,
}

/// JSON output structure for a single message
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonMessage<'r> {
    pub rule_id: &'static str,
    pub message_id: &'static str,
    /// `2` for errors, `1` for warnings
    pub severity: u8,
    pub message: &'r str,
    pub line: u32,
    pub column: u32,
    pub end_line: u32,
    pub end_column: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<&'r Fix>,
}

/// Format results as JSON, with 1-based line/column positions.
pub fn format_json(results: &[LintResult], sources: &[(String, String)]) -> String {
    let source_map: FxHashMap<&str, &str> = sources
        .iter()
        .map(|(f, s)| (f.as_str(), s.as_str()))
        .collect();

    let json_results: Vec<JsonFileResult<'_>> = results
        .iter()
        .map(|r| {
            let source = source_map.get(r.filename.as_str()).copied().unwrap_or("");
            let index = LineIndex::new(source);
            JsonFileResult {
                file_path: &r.filename,
                messages: r
                    .diagnostics
                    .iter()
                    .map(|d| {
                        let (line, column) = index.line_col(d.start);
                        let (end_line, end_column) = index.line_col(d.end);
                        JsonMessage {
                            rule_id: d.rule_name,
                            message_id: d.message_id,
                            severity: match d.severity {
                                Severity::Error => 2,
                                Severity::Warning => 1,
                            },
                            message: &d.message,
                            line,
                            column,
                            end_line,
                            end_column,
                            fix: d.fix.as_ref(),
                        }
                    })
                    .collect(),
                error_count: r.error_count,
                warning_count: r.warning_count,
            }
        })
        .collect();

    serde_json::to_string_pretty(&json_results).unwrap_or_else(|_| "[]".to_string())
}
