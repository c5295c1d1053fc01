//! Component discovery.
//!
//! Walks statements and the expression positions components realistically
//! appear in, keeping `&'a` borrows of every definition found. Bindings are
//! resolved on the way down: a variable initializer or default export hands its
//! name (and the outer call span, for higher-order wrappers) to the definition
//! it ends up at.

use gesso_carton::{CompactString, FxHashMap};
use oxc_ast::ast::{
    Argument, ArrowFunctionExpression, AssignmentTarget, BindingPatternKind, CallExpression, Class,
    ClassElement, Declaration, ExportDefaultDeclarationKind, Expression, Function, FunctionBody,
    ObjectExpression, ObjectPropertyKind, Statement, VariableDeclaration,
};
use oxc_span::{GetSpan, Span};

use crate::component::{ComponentDescriptor, ComponentNode, Placement};
use crate::unit::SourceUnit;

/// Every component definition in a source unit, in source order.
pub fn collect_components<'a>(unit: &SourceUnit<'a>) -> Vec<ComponentDescriptor<'a>> {
    let mut collector = Collector::default();
    collector.walk_statements(&unit.program.body);

    let mut candidates = collector.candidates;
    candidates.sort_by_key(|candidate| candidate.node.span().start);

    candidates
        .into_iter()
        .map(|candidate| {
            tracing::trace!(
                kind = ?candidate.node.kind(),
                name = ?candidate.name,
                "discovered component"
            );
            ComponentDescriptor::build(
                unit,
                candidate.node,
                candidate.name,
                candidate.alias,
                candidate.wrapper,
                candidate.placement,
            )
        })
        .collect()
}

struct Candidate<'a> {
    node: ComponentNode<'a>,
    name: Option<CompactString>,
    alias: Option<CompactString>,
    wrapper: Option<Span>,
    placement: Placement,
}

/// Name and wrapper handed down from a binding to the definition it resolves to.
#[derive(Clone, Default)]
struct Binding {
    name: Option<CompactString>,
    wrapper: Option<Span>,
}

#[derive(Default)]
struct Collector<'a> {
    candidates: Vec<Candidate<'a>>,
    /// Keyed by the definition's span
    bindings: FxHashMap<(u32, u32), Binding>,
}

impl<'a> Collector<'a> {
    fn walk_statements(&mut self, stmts: &'a [Statement<'a>]) {
        for stmt in stmts {
            self.walk_statement(stmt);
        }
    }

    fn walk_statement(&mut self, stmt: &'a Statement<'a>) {
        match stmt {
            Statement::ClassDeclaration(class) => {
                self.visit_class(class, None, Placement::Statement);
            }
            Statement::FunctionDeclaration(func) => {
                self.visit_function(func, None, Placement::Statement);
            }
            Statement::VariableDeclaration(decl) => self.walk_variable_declaration(decl),
            Statement::ExportNamedDeclaration(export) => match &export.declaration {
                Some(Declaration::ClassDeclaration(class)) => {
                    self.visit_class(class, None, Placement::Statement);
                }
                Some(Declaration::FunctionDeclaration(func)) => {
                    self.visit_function(func, None, Placement::Statement);
                }
                Some(Declaration::VariableDeclaration(decl)) => {
                    self.walk_variable_declaration(decl);
                }
                _ => {}
            },
            Statement::ExportDefaultDeclaration(export) => match &export.declaration {
                ExportDefaultDeclarationKind::ClassDeclaration(class) => {
                    self.visit_class(class, None, Placement::Statement);
                }
                ExportDefaultDeclarationKind::FunctionDeclaration(func) => {
                    self.visit_function(func, None, Placement::Statement);
                }
                kind => {
                    if let Some(expr) = kind.as_expression() {
                        self.walk_bound_expression(expr, None);
                    }
                }
            },
            Statement::ExpressionStatement(stmt) => self.walk_expression(&stmt.expression),
            Statement::BlockStatement(block) => self.walk_statements(&block.body),
            Statement::IfStatement(stmt) => {
                self.walk_statement(&stmt.consequent);
                if let Some(alternate) = &stmt.alternate {
                    self.walk_statement(alternate);
                }
            }
            Statement::ReturnStatement(stmt) => {
                if let Some(argument) = &stmt.argument {
                    self.walk_expression(argument);
                }
            }
            Statement::ForStatement(stmt) => self.walk_statement(&stmt.body),
            Statement::ForInStatement(stmt) => self.walk_statement(&stmt.body),
            Statement::ForOfStatement(stmt) => self.walk_statement(&stmt.body),
            Statement::WhileStatement(stmt) => self.walk_statement(&stmt.body),
            Statement::DoWhileStatement(stmt) => self.walk_statement(&stmt.body),
            Statement::LabeledStatement(stmt) => self.walk_statement(&stmt.body),
            Statement::TryStatement(stmt) => {
                self.walk_statements(&stmt.block.body);
                if let Some(handler) = &stmt.handler {
                    self.walk_statements(&handler.body.body);
                }
                if let Some(finalizer) = &stmt.finalizer {
                    self.walk_statements(&finalizer.body);
                }
            }
            Statement::SwitchStatement(stmt) => {
                for case in &stmt.cases {
                    self.walk_statements(&case.consequent);
                }
            }
            _ => {}
        }
    }

    fn walk_variable_declaration(&mut self, decl: &'a VariableDeclaration<'a>) {
        for declarator in &decl.declarations {
            let Some(init) = &declarator.init else {
                continue;
            };
            let name = match &declarator.id.kind {
                BindingPatternKind::BindingIdentifier(id) => {
                    Some(CompactString::new(id.name.as_str()))
                }
                _ => None,
            };
            self.walk_bound_expression(init, name);
        }
    }

    /// Walk an expression whose value is bound to `name`.
    ///
    /// The name goes to the definition the expression evaluates to, looking
    /// through higher-order calls such as `connect(a)(X)` or `React.memo(X)`.
    fn walk_bound_expression(&mut self, expr: &'a Expression<'a>, name: Option<CompactString>) {
        if let Some(definition) = innermost_definition(expr) {
            let outer = expr.get_inner_expression();
            let wrapper = match outer {
                Expression::CallExpression(_) if !is_legacy_factory_call(outer) => {
                    Some(outer.span())
                }
                _ => None,
            };
            self.bindings
                .insert(span_key(definition.span()), Binding { name, wrapper });
        }
        self.walk_expression(expr);
    }

    fn walk_expression(&mut self, expr: &'a Expression<'a>) {
        match expr {
            Expression::ClassExpression(class) => {
                let binding = self.take_binding(class.span);
                self.visit_class(class, binding, Placement::Expression);
            }
            Expression::FunctionExpression(func) => {
                let binding = self.take_binding(func.span);
                self.visit_function(func, binding, Placement::Expression);
            }
            Expression::ArrowFunctionExpression(arrow) => {
                let binding = self.take_binding(arrow.span);
                self.visit_arrow(arrow, binding);
            }
            Expression::CallExpression(call) => self.walk_call(call),
            Expression::ParenthesizedExpression(paren) => self.walk_expression(&paren.expression),
            Expression::SequenceExpression(seq) => {
                for expr in &seq.expressions {
                    self.walk_expression(expr);
                }
            }
            Expression::ConditionalExpression(cond) => {
                self.walk_expression(&cond.consequent);
                self.walk_expression(&cond.alternate);
            }
            Expression::LogicalExpression(logical) => {
                self.walk_expression(&logical.left);
                self.walk_expression(&logical.right);
            }
            Expression::AssignmentExpression(assign) => {
                let name = match &assign.left {
                    AssignmentTarget::AssignmentTargetIdentifier(id) => {
                        Some(CompactString::new(id.name.as_str()))
                    }
                    _ => None,
                };
                self.walk_bound_expression(&assign.right, name);
            }
            Expression::ArrayExpression(array) => {
                for element in &array.elements {
                    if let Some(expr) = element.as_expression() {
                        self.walk_expression(expr);
                    }
                }
            }
            Expression::ObjectExpression(object) => self.walk_object(object),
            Expression::NewExpression(new) => {
                for arg in &new.arguments {
                    if let Some(expr) = arg.as_expression() {
                        self.walk_expression(expr);
                    }
                }
            }
            Expression::TSAsExpression(ts) => self.walk_expression(&ts.expression),
            Expression::TSSatisfiesExpression(ts) => self.walk_expression(&ts.expression),
            Expression::TSNonNullExpression(ts) => self.walk_expression(&ts.expression),
            _ => {}
        }
    }

    fn walk_call(&mut self, call: &'a CallExpression<'a>) {
        if let Some(options) = legacy_factory_options(call) {
            let binding = self.take_binding(call.span).unwrap_or_default();
            self.candidates.push(Candidate {
                node: ComponentNode::LegacyFactory { call, options },
                name: binding.name,
                alias: None,
                wrapper: binding.wrapper,
                placement: Placement::Expression,
            });
            self.walk_object(options);
            return;
        }

        self.walk_expression(&call.callee);
        for arg in &call.arguments {
            if let Some(expr) = arg.as_expression() {
                self.walk_expression(expr);
            }
        }
    }

    fn walk_object(&mut self, object: &'a ObjectExpression<'a>) {
        for prop in &object.properties {
            match prop {
                ObjectPropertyKind::ObjectProperty(prop) => self.walk_expression(&prop.value),
                ObjectPropertyKind::SpreadProperty(spread) => {
                    self.walk_expression(&spread.argument);
                }
            }
        }
    }

    fn walk_body(&mut self, body: &'a FunctionBody<'a>) {
        self.walk_statements(&body.statements);
    }

    fn visit_class(
        &mut self,
        class: &'a Class<'a>,
        binding: Option<Binding>,
        placement: Placement,
    ) {
        if class.super_class.is_some() {
            let binding = binding.unwrap_or_default();
            let id = class.id.as_ref().map(|id| id.name.as_str());
            let (name, alias) = own_name(id, binding.name);
            self.candidates.push(Candidate {
                node: ComponentNode::Class(class),
                name,
                alias,
                wrapper: binding.wrapper,
                placement,
            });
        }

        for element in &class.body.body {
            match element {
                ClassElement::MethodDefinition(method) => {
                    if let Some(body) = &method.value.body {
                        self.walk_body(body);
                    }
                }
                ClassElement::PropertyDefinition(prop) => {
                    if let Some(value) = &prop.value {
                        self.walk_expression(value);
                    }
                }
                ClassElement::StaticBlock(block) => self.walk_statements(&block.body),
                _ => {}
            }
        }
    }

    fn visit_function(
        &mut self,
        func: &'a Function<'a>,
        binding: Option<Binding>,
        placement: Placement,
    ) {
        let Some(body) = &func.body else {
            return;
        };
        let binding = binding.unwrap_or_default();
        let (name, alias) = own_name(func.id.as_ref().map(|id| id.name.as_str()), binding.name);
        if name.is_some() && returns_markup(&body.statements) {
            self.candidates.push(Candidate {
                node: ComponentNode::Function(func),
                name,
                alias,
                wrapper: binding.wrapper,
                placement,
            });
        }
        self.walk_body(body);
    }

    fn visit_arrow(&mut self, arrow: &'a ArrowFunctionExpression<'a>, binding: Option<Binding>) {
        let binding = binding.unwrap_or_default();
        let returns = if arrow.expression {
            matches!(
                arrow.body.statements.first(),
                Some(Statement::ExpressionStatement(stmt)) if is_markup(&stmt.expression)
            )
        } else {
            returns_markup(&arrow.body.statements)
        };
        if binding.name.is_some() && returns {
            self.candidates.push(Candidate {
                node: ComponentNode::Arrow(arrow),
                name: binding.name,
                alias: None,
                wrapper: binding.wrapper,
                placement: Placement::Expression,
            });
        }
        self.walk_body(&arrow.body);
    }

    fn take_binding(&mut self, span: Span) -> Option<Binding> {
        self.bindings.remove(&span_key(span))
    }
}

/// A definition's own name wins over its binding, which is kept as an alias
/// when it differs.
fn own_name(
    id: Option<&str>,
    bound: Option<CompactString>,
) -> (Option<CompactString>, Option<CompactString>) {
    match (id, bound) {
        (Some(id), Some(bound)) if bound != id => (Some(CompactString::new(id)), Some(bound)),
        (Some(id), _) => (Some(CompactString::new(id)), None),
        (None, bound) => (bound, None),
    }
}

#[inline]
fn span_key(span: Span) -> (u32, u32) {
    (span.start, span.end)
}

/// The class or function a (possibly wrapped) expression evaluates to.
fn innermost_definition<'a>(expr: &'a Expression<'a>) -> Option<&'a Expression<'a>> {
    let expr = expr.get_inner_expression();
    match expr {
        Expression::ClassExpression(_)
        | Expression::FunctionExpression(_)
        | Expression::ArrowFunctionExpression(_) => Some(expr),
        Expression::CallExpression(call) => {
            if is_legacy_factory_call(expr) {
                return Some(expr);
            }
            call.arguments
                .iter()
                .filter_map(Argument::as_expression)
                .find_map(innermost_definition)
        }
        _ => None,
    }
}

fn is_legacy_factory_call(expr: &Expression<'_>) -> bool {
    matches!(expr, Expression::CallExpression(call) if legacy_factory_options(call).is_some())
}

/// Options object of `createReactClass({...})` and its older spellings.
fn legacy_factory_options<'a>(call: &'a CallExpression<'a>) -> Option<&'a ObjectExpression<'a>> {
    let callee = match call.callee.get_inner_expression() {
        Expression::Identifier(id) => id.name.as_str(),
        Expression::StaticMemberExpression(member) => member.property.name.as_str(),
        _ => return None,
    };
    if !matches!(callee, "createReactClass" | "createClass") {
        return None;
    }
    match call.arguments.first()?.as_expression()?.get_inner_expression() {
        Expression::ObjectExpression(object) => Some(object),
        _ => None,
    }
}

/// Whether a body returns markup from one of its own `return` statements.
fn returns_markup(stmts: &[Statement<'_>]) -> bool {
    stmts.iter().any(|stmt| match stmt {
        Statement::ReturnStatement(ret) => ret.argument.as_ref().is_some_and(is_markup),
        Statement::BlockStatement(block) => returns_markup(&block.body),
        Statement::IfStatement(stmt) => {
            returns_markup(std::slice::from_ref(&stmt.consequent))
                || stmt
                    .alternate
                    .as_ref()
                    .is_some_and(|alt| returns_markup(std::slice::from_ref(alt)))
        }
        Statement::SwitchStatement(stmt) => {
            stmt.cases.iter().any(|case| returns_markup(&case.consequent))
        }
        Statement::TryStatement(stmt) => {
            returns_markup(&stmt.block.body)
                || stmt
                    .handler
                    .as_ref()
                    .is_some_and(|handler| returns_markup(&handler.body.body))
        }
        Statement::ForStatement(stmt) => returns_markup(std::slice::from_ref(&stmt.body)),
        Statement::ForOfStatement(stmt) => returns_markup(std::slice::from_ref(&stmt.body)),
        Statement::ForInStatement(stmt) => returns_markup(std::slice::from_ref(&stmt.body)),
        Statement::WhileStatement(stmt) => returns_markup(std::slice::from_ref(&stmt.body)),
        _ => false,
    })
}

/// JSX, `null`, or a conditional/logical expression with such a branch.
fn is_markup(expr: &Expression<'_>) -> bool {
    match expr.get_inner_expression() {
        Expression::JSXElement(_) | Expression::JSXFragment(_) | Expression::NullLiteral(_) => true,
        Expression::ConditionalExpression(cond) => {
            is_markup(&cond.consequent) || is_markup(&cond.alternate)
        }
        Expression::LogicalExpression(logical) => {
            is_markup(&logical.left) || is_markup(&logical.right)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentKind;
    use crate::test_utils::with_unit;

    fn discovered(source: &str) -> Vec<(ComponentKind, Option<String>, bool)> {
        with_unit(source, |unit| {
            collect_components(unit)
                .iter()
                .map(|c| (c.kind(), c.name.as_ref().map(|n| n.to_string()), c.wrapper.is_some()))
                .collect()
        })
    }

    #[test]
    fn test_declaration_forms() {
        let found = discovered(
            r#"
export default class Hello extends React.Component {
    render() { return <div />; }
}
function Plain(props) { return <span />; }
const Arrow = () => <p />;
const Nothing = () => null;
const Maybe = ({ show }) => show ? <b /> : null;
function helper() { return 1; }
const anonymous = [() => <i />];
"#,
        );
        assert_eq!(
            found,
            vec![
                (ComponentKind::Class, Some("Hello".into()), false),
                (ComponentKind::Function, Some("Plain".into()), false),
                (ComponentKind::Arrow, Some("Arrow".into()), false),
                (ComponentKind::Arrow, Some("Nothing".into()), false),
                (ComponentKind::Arrow, Some("Maybe".into()), false),
            ]
        );
    }

    #[test]
    fn test_higher_order_wrappers() {
        let found = discovered(
            r#"
const Connected = connect(mapState)(class Inner extends Component {
    render() { return <div />; }
});
const Memo = React.memo(function Named() { return <div />; });
export default forwardRef((props, ref) => <input ref={ref} />);
"#,
        );
        assert_eq!(
            found,
            vec![
                (ComponentKind::Class, Some("Inner".into()), true),
                (ComponentKind::Function, Some("Named".into()), true),
            ]
        );
    }

    #[test]
    fn test_wrapped_anonymous_class_takes_binding_name() {
        let found = discovered(
            r#"
const Hoc = withRouter(class extends Component {
    render() { return <div />; }
});
"#,
        );
        assert_eq!(found, vec![(ComponentKind::Class, Some("Hoc".into()), true)]);
    }

    #[test]
    fn test_wrapped_named_class_keeps_binding_alias() {
        let source = r#"
const Hoc = withRouter(class Inner extends Component {
    render() { return <div />; }
});
Hoc.defaultProps = { b: 1, a: 2 };
const Same = memo(function Same() { return <div />; });
"#;
        with_unit(source, |unit| {
            let components = collect_components(unit);
            let [inner, same] = components.as_slice() else {
                panic!("expected two components");
            };
            assert_eq!(inner.name.as_deref(), Some("Inner"));
            assert_eq!(inner.alias.as_deref(), Some("Hoc"));
            let defaults = inner.defaults.as_ref().expect("defaults through the alias");
            assert_eq!(defaults.names(), vec!["b", "a"]);
            assert_eq!(same.name.as_deref(), Some("Same"));
            assert_eq!(same.alias, None);
        });
    }

    #[test]
    fn test_legacy_factory() {
        let found = discovered(
            r#"
var Hello = createReactClass({
    render: function() { return <div />; }
});
var Old = React.createClass({ render() { return <div />; } });
"#,
        );
        assert_eq!(
            found,
            vec![
                (ComponentKind::LegacyFactory, Some("Hello".into()), false),
                (ComponentKind::LegacyFactory, Some("Old".into()), false),
            ]
        );
    }

    #[test]
    fn test_nested_definitions() {
        let found = discovered(
            r#"
if (condition) {
    class Nested extends Component {
        render() {
            const Row = () => <tr />;
            return <table><Row /></table>;
        }
    }
}
"#,
        );
        assert_eq!(
            found,
            vec![
                (ComponentKind::Class, Some("Nested".into()), false),
                (ComponentKind::Arrow, Some("Row".into()), false),
            ]
        );
    }
}
