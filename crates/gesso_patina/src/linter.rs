//! Main linter entry point.
//!
//! Parses a JavaScript/TypeScript source with `oxc_parser`, collects every
//! component definition and runs each enabled rule over it.

use gesso_carton::FxHashSet;
use gesso_croquis::{collect_components, SourceUnit};
use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::context::LintContext;
use crate::diagnostic::{LintDiagnostic, LintSummary};
use crate::rule::{Rule, RuleRegistry};

/// Lint result for a single file
#[derive(Debug, Clone)]
pub struct LintResult {
    /// Filename that was linted
    pub filename: String,
    /// Collected diagnostics
    pub diagnostics: Vec<LintDiagnostic>,
    /// Number of errors
    pub error_count: usize,
    /// Number of warnings
    pub warning_count: usize,
}

impl LintResult {
    fn empty(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            diagnostics: Vec::new(),
            error_count: 0,
            warning_count: 0,
        }
    }

    /// Check if there are any errors
    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Check if there are any diagnostics
    #[inline]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Main linter struct.
pub struct Linter {
    registry: RuleRegistry,
    /// Optional set of enabled rule names (if None, all rules are enabled)
    enabled_rules: Option<FxHashSet<String>>,
}

impl Linter {
    /// Create a new linter with recommended rules
    #[inline]
    pub fn new() -> Self {
        Self::with_registry(RuleRegistry::with_recommended())
    }

    /// Create a linter with a custom rule registry
    #[inline]
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self {
            registry,
            enabled_rules: None,
        }
    }

    /// Set enabled rules (if None, all rules are enabled)
    ///
    /// Pass a list of rule names to enable only those rules.
    /// Rules not in the list will be skipped during linting.
    #[inline]
    pub fn with_enabled_rules(mut self, rules: Option<Vec<String>>) -> Self {
        self.enabled_rules = rules.map(|r| r.into_iter().collect());
        self
    }

    /// Check if a rule is enabled
    #[inline]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        match &self.enabled_rules {
            Some(set) => set.contains(rule_name),
            None => true,
        }
    }

    /// Lint a JavaScript or TypeScript source.
    ///
    /// The source type comes from the filename extension, falling back to JSX.
    /// A source that does not parse cleanly produces no diagnostics.
    pub fn lint_source(&self, source: &str, filename: &str) -> LintResult {
        let allocator = Allocator::default();
        let source_type = SourceType::from_path(filename)
            .unwrap_or_else(|_| SourceType::default().with_jsx(true));
        let ret = Parser::new(&allocator, source, source_type).parse();
        if ret.panicked || !ret.errors.is_empty() {
            tracing::debug!(
                filename,
                errors = ret.errors.len(),
                panicked = ret.panicked,
                "skipping source that failed to parse"
            );
            return LintResult::empty(filename);
        }

        let program = allocator.alloc(ret.program);
        let unit = SourceUnit::new(program, source);
        let components = collect_components(&unit);
        tracing::trace!(filename, components = components.len(), "collected components");

        let rules: Vec<&dyn Rule> = self
            .registry
            .rules()
            .iter()
            .map(|rule| rule.as_ref())
            .filter(|rule| self.is_rule_enabled(rule.meta().name))
            .collect();

        let mut ctx = LintContext::new(source, filename);
        for descriptor in &components {
            for rule in &rules {
                ctx.current_rule = rule.meta().name;
                rule.check_component(&mut ctx, &unit, descriptor);
            }
        }

        let error_count = ctx.error_count();
        let warning_count = ctx.warning_count();
        LintResult {
            filename: filename.to_string(),
            diagnostics: ctx.into_diagnostics(),
            error_count,
            warning_count,
        }
    }

    /// Lint multiple files and aggregate results
    pub fn lint_files(&self, files: &[(String, String)]) -> (Vec<LintResult>, LintSummary) {
        let mut results = Vec::with_capacity(files.len());
        let mut summary = LintSummary::default();

        for (filename, source) in files {
            let result = self.lint_source(source, filename);
            for diagnostic in &result.diagnostics {
                summary.add(diagnostic);
            }
            results.push(result);
        }

        summary.file_count = files.len();
        (results, summary)
    }

    /// Get the rule registry
    #[inline]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Get the rule registry for configuration
    #[inline]
    pub fn registry_mut(&mut self) -> &mut RuleRegistry {
        &mut self.registry
    }

    /// Get all registered rules
    #[inline]
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        self.registry.rules()
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATELESS_UNSORTED: &str = r#"class Foo extends React.Component {
  static defaultProps = { b: 1, a: 2 };
  render() {
    return <div>{this.props.a}</div>;
  }
}"#;

    #[test]
    fn test_recommended_rules() {
        let result = Linter::new().lint_source(STATELESS_UNSORTED, "test.jsx");
        assert_eq!(result.error_count, 1);
        assert_eq!(result.warning_count, 1);
        // Ordered by start offset: the class comes before its defaults entry
        assert_eq!(result.diagnostics[0].rule_name, "react/prefer-stateless-function");
        assert_eq!(result.diagnostics[1].rule_name, "react/jsx-sort-default-props");
    }

    #[test]
    fn test_enabled_rules_filter() {
        let linter = Linter::new()
            .with_enabled_rules(Some(vec!["react/jsx-sort-default-props".to_string()]));
        assert!(!linter.is_rule_enabled("react/prefer-stateless-function"));

        let result = linter.lint_source(STATELESS_UNSORTED, "test.jsx");
        assert_eq!(result.error_count, 0);
        assert_eq!(result.warning_count, 1);
    }

    #[test]
    fn test_parse_error_yields_nothing() {
        let result = Linter::new().lint_source("class Foo extends {", "test.jsx");
        assert!(!result.has_diagnostics());
    }

    #[test]
    fn test_typescript_source() {
        let source = r#"class Foo extends React.Component<Props> {
  render() {
    return <div>{this.props.foo as string}</div>;
  }
}"#;
        let result = Linter::new().lint_source(source, "test.tsx");
        assert_eq!(result.error_count, 1);
    }

    #[test]
    fn test_lint_files_summary() {
        let files = vec![
            ("a.jsx".to_string(), STATELESS_UNSORTED.to_string()),
            ("b.jsx".to_string(), "const A = () => <div />;".to_string()),
        ];
        let (results, summary) = Linter::new().lint_files(&files);
        assert_eq!(results.len(), 2);
        assert_eq!(summary.file_count, 2);
        assert_eq!(summary.error_count, 1);
        assert_eq!(summary.warning_count, 1);
        assert_eq!(summary.fixable_count, 1);
    }
}
