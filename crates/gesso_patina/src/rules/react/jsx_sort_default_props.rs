//! react/jsx-sort-default-props
//!
//! Enforce default props alphabetical sorting.
//!
//! Keys are compared within each run between spread elements, since a spread
//! may override anything before it.
//!
//! ## Examples
//!
//! ### Invalid
//! ```jsx
//! Hello.defaultProps = {
//!   b: "b",
//!   a: "a",
//! };
//! ```
//!
//! ### Valid
//! ```jsx
//! Hello.defaultProps = {
//!   a: "a",
//!   b: "b",
//!   ...defaults,
//!   c: "c",
//! };
//! ```
//!
//! ## Options
//!
//! - `ignoreCase` (default `false`): compare keys case-insensitively

use gesso_croquis::{check_ordering, ComponentDescriptor, OrderingOptions, SourceUnit};
use serde_json::Value;

use crate::context::LintContext;
use crate::diagnostic::{LintDiagnostic, Severity};
use crate::error::ConfigError;
use crate::rule::{parse_options, Rule, RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "react/jsx-sort-default-props",
    description: "Enforce default props alphabetical sorting",
    category: RuleCategory::Stylistic,
    fixable: false,
    default_severity: Severity::Warning,
};

const MESSAGE_ID: &str = "propsNotSorted";
const MESSAGE: &str = "Default prop types declarations should be sorted alphabetically";

/// Enforce default props alphabetical sorting
#[derive(Debug, Default)]
pub struct JsxSortDefaultProps {
    pub options: OrderingOptions,
}

impl JsxSortDefaultProps {
    pub fn new(options: OrderingOptions) -> Self {
        Self { options }
    }
}

impl Rule for JsxSortDefaultProps {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn configure(&mut self, options: &Value) -> Result<(), ConfigError> {
        self.options = parse_options(META.name, options)?;
        Ok(())
    }

    fn check_component<'a>(
        &self,
        ctx: &mut LintContext<'_>,
        _unit: &SourceUnit<'a>,
        descriptor: &ComponentDescriptor<'a>,
    ) {
        let violations = check_ordering(
            descriptor.properties.as_ref(),
            descriptor.defaults.as_ref(),
            self.options,
        );
        for violation in violations {
            let help = format!("Move `{}` before `{}`", violation.key, violation.previous);
            ctx.report(
                LintDiagnostic::warn(META.name, MESSAGE_ID, MESSAGE, violation.span)
                    .with_help(help),
            );
        }
    }
}
