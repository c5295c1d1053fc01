//! Class component to function component rewriting.
//!
//! The rewrite is a handful of splices over the original buffer:
//!
//! ```text
//! class Foo extends Component {
//!   static displayName = "Foo";
//!   render() {
//!     return <div>{this.props.foo}</div>;
//!   }
//! }
//!
//! function Foo({ foo }) {
//!     return <div>{foo}</div>;
//! }
//! Foo.displayName = "Foo";
//! ```
//!
//! 1. the class header through the opening `{` of `render` becomes the
//!    function header,
//! 2. every `this.props`/`this.context` access inside `render` is replaced,
//! 3. the closing region from the `}` of `render` through the `}` of the class
//!    becomes a single `}` followed by the hoisted statics.
//!
//! Text outside those ranges is never touched.

use gesso_carton::{is_line_leading, line_indent, line_start, TextEdit};
use gesso_croquis::{
    render_method, ComponentDescriptor, EligibilityOptions, Placement, SourceUnit,
};
use oxc_span::Span;

use crate::hoist::hoist_statics;
use crate::signature::Signature;
use crate::{RewriteError, RewritePatch};

/// Compute the patch turning a class component into a function component.
pub fn rewrite_component<'a>(
    descriptor: &ComponentDescriptor<'a>,
    unit: &SourceUnit<'a>,
    options: &EligibilityOptions,
) -> Result<RewritePatch, RewriteError> {
    let result = rewrite(descriptor, unit, options);
    if let Err(err) = &result {
        tracing::debug!(
            name = descriptor.name.as_deref().unwrap_or("<anonymous>"),
            %err,
            "rewrite declined"
        );
    }
    result
}

fn rewrite<'a>(
    descriptor: &ComponentDescriptor<'a>,
    unit: &SourceUnit<'a>,
    options: &EligibilityOptions,
) -> Result<RewritePatch, RewriteError> {
    let class = descriptor.node.as_class().ok_or(RewriteError::NotAClass)?;
    let name = class
        .id
        .as_ref()
        .map(|id| id.name.as_str())
        .ok_or(RewriteError::AnonymousBinding)?;
    if !descriptor.is_rewrite_eligible(options) {
        return Err(RewriteError::Ineligible);
    }

    let source = unit.source;
    let indent = line_indent(source, class.span.start);
    let statics = hoist_statics(class, name, source)?;
    if !statics.is_empty() && descriptor.placement == Placement::Expression {
        return Err(RewriteError::UnplaceableStatics);
    }
    let tail: String = statics
        .iter()
        .map(|statement| format!("\n{indent}{statement}"))
        .collect();

    let mut patch = RewritePatch::new();

    let Some(render) = render_method(class) else {
        patch.push(TextEdit::replace(
            class.span.start,
            class.span.end,
            format!("function {name}(props) {{}}{tail}"),
        ));
        return Ok(patch.finish());
    };
    let body = render
        .value
        .body
        .as_ref()
        .ok_or(RewriteError::MissingRenderBody)?;

    let usage = &descriptor.usage;
    let signature = Signature::synthesize(usage, name)?;

    // Header through the opening brace of `render`
    patch.push(TextEdit::replace(
        class.span.start,
        body.span.start + 1,
        format!("function {name}({}) {{", signature.params()),
    ));

    for site in usage.sites.iter().filter(|site| contains(body.span, site.span)) {
        if let Some((span, text)) = signature.replacement(site) {
            patch.push(TextEdit::replace(span.start, span.end, text));
        }
    }

    for destructure in usage
        .destructures
        .iter()
        .filter(|destructure| contains(body.span, destructure.init))
    {
        if signature.is_consumed(destructure) {
            if let Some(statement) = destructure.statement {
                patch.push(remove_statement(source, statement));
            }
        } else {
            patch.push(TextEdit::replace(
                destructure.init.start,
                destructure.init.end,
                signature.instance_object(destructure),
            ));
        }
    }

    let close = body.span.end - 1;
    if is_line_leading(source, close) {
        patch.push(TextEdit::replace(
            line_start(source, close),
            class.span.end,
            format!("{indent}}}{tail}"),
        ));
    } else {
        patch.push(TextEdit::replace(close, class.span.end, format!("}}{tail}")));
    }

    Ok(patch.finish())
}

#[inline]
fn contains(outer: Span, inner: Span) -> bool {
    outer.start <= inner.start && inner.end <= outer.end
}

/// Remove a statement, taking its whole line when nothing else shares it.
fn remove_statement(source: &str, statement: Span) -> TextEdit {
    if is_line_leading(source, statement.start) {
        let rest = &source[statement.end as usize..];
        let line_end = rest.find('\n').map_or(rest.len(), |i| i + 1);
        if rest[..line_end].trim().is_empty() {
            return TextEdit::delete(
                line_start(source, statement.start),
                statement.end + line_end as u32,
            );
        }
    }
    // Take one trailing space along so `{ a; b; }` keeps single spacing
    let end = if source.as_bytes().get(statement.end as usize) == Some(&b' ') {
        statement.end + 1
    } else {
        statement.end
    };
    TextEdit::delete(statement.start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gesso_croquis::{collect_components, ComponentKind};
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    fn rewrite_with(
        source: &str,
        options: EligibilityOptions,
    ) -> Result<(String, RewritePatch), RewriteError> {
        let allocator = Allocator::default();
        let source_type = SourceType::from_path("component.jsx").unwrap();
        let ret = Parser::new(&allocator, source, source_type).parse();
        assert!(ret.errors.is_empty(), "{:?}", ret.errors);
        let program = allocator.alloc(ret.program);
        let unit = SourceUnit::new(program, source);
        let descriptor = collect_components(&unit)
            .into_iter()
            .find(|descriptor| descriptor.kind() == ComponentKind::Class)
            .expect("no class component");
        let patch = rewrite_component(&descriptor, &unit, &options)?;
        Ok((patch.apply(source), patch))
    }

    fn rewrite_source(source: &str) -> Result<String, RewriteError> {
        rewrite_with(source, EligibilityOptions::default()).map(|(output, _)| output)
    }

    #[test]
    fn test_single_prop_access() {
        let (output, patch) = rewrite_with(
            r#"class Foo extends React.Component {
  render() {
    return <div>{this.props.foo}</div>;
  }
}"#,
            EligibilityOptions::default(),
        )
        .unwrap();
        insta::assert_snapshot!(output, @r###"
        function Foo({ foo }) {
            return <div>{foo}</div>;
        }
        "###);
        // header, access site, closing region
        assert_eq!(patch.edits().len(), 3);
    }

    #[test]
    fn test_leaves_surrounding_text_alone() {
        let source = r#"import React from "react";

// Greeting
class Foo extends React.Component {
  render() {
    return <div>{this.props.foo}</div>;
  }
}

export default Foo;
"#;
        let output = rewrite_source(source).unwrap();
        assert!(output.starts_with("import React from \"react\";\n\n// Greeting\nfunction Foo"));
        assert!(output.ends_with("}\n\nexport default Foo;\n"));
    }

    #[test]
    fn test_statics_are_hoisted_in_order() {
        let output = rewrite_source(
            r#"export default class Foo extends Component {
  static propTypes = { foo: PropTypes.string };
  static get defaultProps() {
    return { foo: "bar" };
  }
  render() {
    const { props: { foo } } = this;
    return <span>{foo}</span>;
  }
  static displayName = "Foo";
}"#,
        )
        .unwrap();
        insta::assert_snapshot!(output, @r###"
        export default function Foo({ foo }) {
            return <span>{foo}</span>;
        }
        Foo.propTypes = { foo: PropTypes.string };
        Foo.defaultProps = { foo: "bar" };
        Foo.displayName = "Foo";
        "###);
    }

    #[test]
    fn test_hoisted_statics_follow_class_indentation() {
        let output = rewrite_source(
            r#"if (x) {
  class Foo extends Component {
    static displayName = "Foo";
    render() {
      return null;
    }
  }
}"#,
        )
        .unwrap();
        assert_eq!(
            output,
            "if (x) {\n  function Foo() {\n      return null;\n  }\n  Foo.displayName = \"Foo\";\n}"
        );
    }

    #[test]
    fn test_whole_props() {
        let output = rewrite_source(
            r#"class Foo extends Component {
  render() {
    return <Bar {...this.props} title={this.props.title} />;
  }
}"#,
        )
        .unwrap();
        insta::assert_snapshot!(output, @r###"
        function Foo(props) {
            return <Bar {...props} title={props.title} />;
        }
        "###);
    }

    #[test]
    fn test_context_parameter() {
        let output = rewrite_source(
            r#"class Foo extends Component {
  static contextTypes = { store: PropTypes.object };
  render() {
    return <div>{this.context.store.name}</div>;
  }
}"#,
        )
        .unwrap();
        insta::assert_snapshot!(output, @r###"
        function Foo(props, { store }) {
            return <div>{store.name}</div>;
        }
        Foo.contextTypes = { store: PropTypes.object };
        "###);
    }

    #[test]
    fn test_name_collision() {
        let output = rewrite_source(
            r#"class Foo extends Component {
  render() {
    const foo = 1;
    return <div title={this.props.foo}>{foo}</div>;
  }
}"#,
        )
        .unwrap();
        insta::assert_snapshot!(output, @r###"
        function Foo({ foo: foo2 }) {
            const foo = 1;
            return <div title={foo2}>{foo}</div>;
        }
        "###);
    }

    #[test]
    fn test_kept_destructure_reads_from_parameters() {
        let output = rewrite_source(
            r#"class Foo extends Component {
  render() {
    const { props } = this;
    return <div>{props.a}</div>;
  }
}"#,
        )
        .unwrap();
        insta::assert_snapshot!(output, @r###"
        function Foo(props2) {
            const { props } = { props: props2 };
            return <div>{props.a}</div>;
        }
        "###);
    }

    #[test]
    fn test_missing_render() {
        let output = rewrite_source(
            r#"class Foo extends Component {
  static displayName = "Foo";
}"#,
        )
        .unwrap();
        assert_eq!(output, "function Foo(props) {}\nFoo.displayName = \"Foo\";");
    }

    #[test]
    fn test_class_expression_in_place() {
        let output = rewrite_source(
            "const Bar = memo(class Foo extends Component { \
             render() { return <i>{this.props.a}</i>; } });",
        )
        .unwrap();
        assert_eq!(output, "const Bar = memo(function Foo({ a }) { return <i>{a}</i>; });");
    }

    #[test]
    fn test_class_expression_with_statics() {
        let err = rewrite_source(
            "export default connect()(class Foo extends Component { \
             static propTypes = {}; render() { return null; } });",
        )
        .unwrap_err();
        assert_eq!(err, RewriteError::UnplaceableStatics);
    }

    #[test]
    fn test_declined_rewrites() {
        let err = rewrite_source(
            "const Foo = class extends Component { render() { return null; } };",
        )
        .unwrap_err();
        assert_eq!(err, RewriteError::AnonymousBinding);

        let err = rewrite_source(
            "class Foo extends Component { render() { return <div>{this.state.a}</div>; } }",
        )
        .unwrap_err();
        assert_eq!(err, RewriteError::Ineligible);

        let err = rewrite_with(
            "class Foo extends PureComponent { render() { return null; } }",
            EligibilityOptions {
                ignore_pure_components: true,
            },
        )
        .unwrap_err();
        assert_eq!(err, RewriteError::Ineligible);
    }

    #[test]
    fn test_pure_component_rewritten_by_default() {
        let output = rewrite_source("class Foo extends PureComponent { render() { return null; } }")
            .unwrap();
        assert_eq!(output, "function Foo() { return null; }");
    }

    #[test]
    fn test_shared_line_destructure() {
        let output = rewrite_source(
            "class Foo extends Component { render() { const { props: { a } } = this; return a; } }",
        )
        .unwrap();
        assert_eq!(output, "function Foo({ a }) { return a; }");

        let output = rewrite_source(
            "class Foo extends Component { render() { const { props: { a } } = this;return a; } }",
        )
        .unwrap();
        assert_eq!(output, "function Foo({ a }) { return a; }");
    }

    #[test]
    fn test_nested_destructure_keeps_outer_binding() {
        let output = rewrite_source(
            r#"class Foo extends Component {
  render() {
    const foo = 'outer';
    const f = () => {
      const { props: { foo } } = this;
      return foo;
    };
    return <div>{f()}{foo}</div>;
  }
}"#,
        )
        .unwrap();
        insta::assert_snapshot!(output, @r###"
        function Foo(props) {
            const foo = 'outer';
            const f = () => {
              const { props: { foo } } = { props };
              return foo;
            };
            return <div>{f()}{foo}</div>;
        }
        "###);
    }

    #[test]
    fn test_super_call_in_render_declines() {
        let err = rewrite_source(
            "class Bar extends React.Component { render() { return super.render(); } }",
        )
        .unwrap_err();
        assert_eq!(err, RewriteError::Ineligible);
    }
}
