//! react/prefer-stateless-function
//!
//! Enforce stateless components to be written as a pure function.
//!
//! A class component qualifies when it extends `Component` or `PureComponent`
//! and uses nothing a function component could not express: no state, refs,
//! lifecycle methods, extra instance members, decorators, child context or
//! constructor logic beyond forwarding props to `super`.
//!
//! `createReactClass` calls are held to the same standard: only `render` and
//! metadata such as `propTypes` or `getDefaultProps` may appear in the options
//! object, and `render` may not touch state or refs.
//!
//! ## Examples
//!
//! ### Invalid
//! ```jsx
//! class Foo extends React.Component {
//!   render() {
//!     return <div>{this.props.foo}</div>;
//!   }
//! }
//! ```
//!
//! ### Valid
//! ```jsx
//! function Foo({ foo }) {
//!   return <div>{foo}</div>;
//! }
//! ```
//!
//! ## Options
//!
//! - `ignorePureComponents` (default `false`): leave `PureComponent` subclasses alone
//!
//! ## Fix
//!
//! Named classes are rewritten in place. Anonymous class expressions, classes
//! whose statics cannot be hoisted, and factory calls are reported without a
//! fix.

use gesso_atelier::rewrite_component;
use gesso_croquis::{ComponentDescriptor, ComponentKind, EligibilityOptions, SourceUnit};
use serde_json::Value;

use crate::context::LintContext;
use crate::diagnostic::{Fix, LintDiagnostic, Severity};
use crate::error::ConfigError;
use crate::rule::{parse_options, Rule, RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "react/prefer-stateless-function",
    description: "Enforce stateless components to be written as a pure function",
    category: RuleCategory::BestPractices,
    fixable: true,
    default_severity: Severity::Error,
};

const MESSAGE_ID: &str = "componentShouldBePure";
const MESSAGE: &str = "Component should be written as a pure function";

/// Enforce stateless components to be written as a pure function
#[derive(Debug, Default)]
pub struct PreferStatelessFunction {
    pub options: EligibilityOptions,
}

impl PreferStatelessFunction {
    pub fn new(options: EligibilityOptions) -> Self {
        Self { options }
    }
}

impl Rule for PreferStatelessFunction {
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
        unit: &SourceUnit<'a>,
        descriptor: &ComponentDescriptor<'a>,
    ) {
        if !descriptor.should_be_function(&self.options) {
            return;
        }

        let help = match descriptor.kind() {
            ComponentKind::LegacyFactory => {
                "Replace the factory call with a function taking props as its parameter"
            }
            _ => "Rewrite the class as a function taking props as its parameter",
        };
        let diagnostic = LintDiagnostic::error(META.name, MESSAGE_ID, MESSAGE, descriptor.span())
            .with_help(help);
        let diagnostic = match rewrite_component(descriptor, unit, &self.options) {
            Ok(patch) => diagnostic.with_fix(Fix::with_edits(
                "Convert to a function component",
                patch.into_edits(),
            )),
            Err(_) => diagnostic,
        };
        ctx.report(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::Linter;
    use crate::rule::RuleRegistry;

    fn create_linter(options: EligibilityOptions) -> Linter {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(PreferStatelessFunction::new(options)));
        Linter::with_registry(registry)
    }

    #[test]
    fn test_valid_function_components() {
        let linter = create_linter(EligibilityOptions::default());
        let result = linter.lint_source(
            r#"const Foo = function(props) {
  return <div>{props.foo}</div>;
};
const Bar = ({ foo }) => <div>{foo}</div>;"#,
            "test.jsx",
        );
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_invalid_props_only() {
        let linter = create_linter(EligibilityOptions::default());
        let source = r#"class Foo extends React.Component {
  render() {
    return <div>{this.props.foo}</div>;
  }
}"#;
        let result = linter.lint_source(source, "test.jsx");
        assert_eq!(result.error_count, 1);

        let diagnostic = &result.diagnostics[0];
        assert_eq!(diagnostic.message_id, "componentShouldBePure");
        assert_eq!(diagnostic.message, MESSAGE);
        assert_eq!(diagnostic.start, 0);
        assert_eq!(diagnostic.end, source.len() as u32);

        let fix = diagnostic.fix.as_ref().expect("fix");
        assert_eq!(
            fix.apply(source),
            "function Foo({ foo }) {\n    return <div>{foo}</div>;\n}"
        );
    }

    #[test]
    fn test_ignore_pure_components() {
        let source = r#"class Foo extends React.PureComponent {
  render() {
    return <div>{this.props.foo}</div>;
  }
}"#;
        let result = create_linter(EligibilityOptions::default()).lint_source(source, "test.jsx");
        assert_eq!(result.error_count, 1);

        let result = create_linter(EligibilityOptions {
            ignore_pure_components: true,
        })
        .lint_source(source, "test.jsx");
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_anonymous_class_has_no_fix() {
        let linter = create_linter(EligibilityOptions::default());
        let result = linter.lint_source(
            r#"const Foo = class extends React.Component {
  render() {
    return <div>{this.props.foo}</div>;
  }
};"#,
            "test.jsx",
        );
        assert_eq!(result.error_count, 1);
        assert!(!result.diagnostics[0].has_fix());
    }

    #[test]
    fn test_legacy_factory_reported_without_fix() {
        let linter = create_linter(EligibilityOptions::default());
        let source = r#"var Foo = createReactClass({
  render: function() {
    return <div>{this.props.foo}</div>;
  }
});"#;
        let result = linter.lint_source(source, "test.jsx");
        assert_eq!(result.error_count, 1);

        let diagnostic = &result.diagnostics[0];
        assert_eq!(diagnostic.start, source.find("createReactClass").unwrap() as u32);
        assert!(!diagnostic.has_fix());

        let result = linter.lint_source(
            r#"var Foo = createReactClass({
  getInitialState: function() {
    return { open: false };
  },
  render: function() {
    return <div>{this.state.open}</div>;
  }
});"#,
            "test.jsx",
        );
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_stateful_class_is_valid() {
        let linter = create_linter(EligibilityOptions::default());
        let result = linter.lint_source(
            r#"class Foo extends React.Component {
  changeState() {
    this.setState({ foo: "clicked" });
  }
  render() {
    return <div onClick={this.changeState.bind(this)}>{this.state.foo || "bar"}</div>;
  }
}"#,
            "test.jsx",
        );
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_configure() {
        let mut rule = PreferStatelessFunction::default();
        rule.configure(&serde_json::json!([{ "ignorePureComponents": true }])).unwrap();
        assert!(rule.options.ignore_pure_components);
    }
}
