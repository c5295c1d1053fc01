//! # gesso_patina
//!
//! Patina - The quality checker for Gesso.
//! Linter for React components.
//!
//! ## Name Origin
//!
//! **Patina** (/ˈpætɪnə/) refers to the layer that forms on bronze and copper
//! over time. In art and antiques a patina is a mark of age and authenticity.
//! `gesso_patina` examines React components for the marks of older idioms,
//! such as stateless classes and unsorted defaults.
//!
//! ## Features
//!
//! - Rich diagnostic output with code snippets (via `oxc_diagnostics`)
//! - ESLint-style JSON output with line/column positions
//! - eslint-plugin-react compatible rule names, message ids and options
//! - Automatic fixes computed by `gesso_atelier`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gesso_patina::{format_results, Linter, OutputFormat};
//!
//! let linter = Linter::new();
//! let result = linter.lint_source(source, "Button.jsx");
//!
//! if result.has_diagnostics() {
//!     let sources = [("Button.jsx".to_string(), source.to_string())];
//!     println!("{}", format_results(&[result], &sources, OutputFormat::Text));
//! }
//! ```
//!
//! ## Rules
//!
//! - `react/jsx-sort-default-props` - Enforce default props alphabetical sorting
//! - `react/prefer-stateless-function` - Enforce stateless components to be written
//!   as a pure function (fixable)

mod context;
mod diagnostic;
mod error;
mod linter;
pub mod output;
mod rule;
pub mod rules;

pub use context::LintContext;
pub use diagnostic::{Fix, LintDiagnostic, LintSummary, Severity, TextEdit};
pub use error::ConfigError;
pub use linter::{LintResult, Linter};
pub use output::{format_results, format_summary, OutputFormat};
pub use rule::{parse_options, Rule, RuleCategory, RuleMeta, RuleRegistry};

/// Lint a source with the recommended rules
///
/// This is a convenience function for simple use cases.
/// For more control, use `Linter::new()` directly.
pub fn lint(source: &str, filename: &str) -> LintResult {
    Linter::new().lint_source(source, filename)
}
