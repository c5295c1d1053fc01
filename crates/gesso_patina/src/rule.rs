//! Rule trait and registry for lint rules.

use gesso_croquis::{ComponentDescriptor, SourceUnit};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::context::LintContext;
use crate::diagnostic::Severity;
use crate::error::ConfigError;

/// Rule category for organization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Patterns with a simpler equivalent
    BestPractices,
    /// Formatting and declaration order
    Stylistic,
}

/// Rule metadata
pub struct RuleMeta {
    /// Rule name (e.g., "react/prefer-stateless-function")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Rule category
    pub category: RuleCategory,
    /// Whether rule is auto-fixable
    pub fixable: bool,
    /// Default severity
    pub default_severity: Severity,
}

/// Rule trait for implementing lint rules
///
/// The linter calls [`Rule::check_component`] once for every component
/// definition found in a source unit.
pub trait Rule: Send + Sync {
    /// Get rule metadata
    fn meta(&self) -> &'static RuleMeta;

    /// Apply user options, given as the rule's JSON option value.
    #[allow(unused_variables)]
    fn configure(&mut self, options: &Value) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Check one component definition
    fn check_component<'a>(
        &self,
        ctx: &mut LintContext<'_>,
        unit: &SourceUnit<'a>,
        descriptor: &ComponentDescriptor<'a>,
    );
}

/// Deserialize rule options.
///
/// Accepts the options object itself or the ESLint-style array whose first
/// element is the object. `null` and an empty array give the defaults.
pub fn parse_options<T>(rule: &'static str, options: &Value) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Default,
{
    let value = match options {
        Value::Null => return Ok(T::default()),
        Value::Array(items) => match items.first() {
            Some(first) => first,
            None => return Ok(T::default()),
        },
        other => other,
    };
    T::deserialize(value).map_err(|source| ConfigError::InvalidOptions { rule, source })
}

/// Registry holding all enabled lint rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Configure a registered rule by name.
    pub fn configure(&mut self, name: &str, options: &Value) -> Result<(), ConfigError> {
        let rule = self
            .rules
            .iter_mut()
            .find(|rule| rule.meta().name == name)
            .ok_or_else(|| ConfigError::UnknownRule {
                name: name.to_string(),
            })?;
        rule.configure(options)
    }

    /// Create registry with all built-in rules enabled
    pub fn with_recommended() -> Self {
        let mut registry = Self::new();

        // ============================================
        // React Rules
        // ============================================

        registry.register(Box::new(crate::rules::react::JsxSortDefaultProps::default()));
        registry.register(Box::new(
            crate::rules::react::PreferStatelessFunction::default(),
        ));

        registry
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_recommended()
    }
}
