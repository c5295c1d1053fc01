//! Usage classification for class and legacy factory components.
//!
//! Walks the instance side of a class body, or a factory's options object, and
//! records which capabilities the component relies on (state, refs, lifecycle
//! methods, ...) and exactly how it reads `this.props` and `this.context`. The
//! latter drives the parameter list synthesized when a class is rewritten as a
//! function.

use gesso_carton::{bitflags, phf_set, CompactString, FxHashSet, PhfSet, SmallVec};
use oxc_ast::ast::{
    Argument, BindingIdentifier, BindingPatternKind, BindingProperty, Class, ClassElement,
    Expression, Function, FunctionBody, IdentifierReference, JSXAttribute, JSXAttributeName,
    MemberExpression, MethodDefinition, MethodDefinitionKind, ObjectExpression, ObjectPropertyKind,
    PropertyKind, Statement, Super, ThisExpression, VariableDeclaration, VariableDeclarator,
};
use oxc_ast::visit::walk::{
    walk_class, walk_function, walk_jsx_attribute, walk_member_expression,
    walk_variable_declaration,
};
use oxc_ast::Visit;
use oxc_span::{GetSpan, Span};
use oxc_syntax::scope::ScopeFlags;
use serde::Serialize;

use crate::keys::{member_property_name, property_key_name};

bitflags! {
    /// Behavioural capabilities of a component definition.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CapabilityFlags: u16 {
        /// `this.state`, `this.setState`, or a `state` field
        const USES_LOCAL_STATE = 1 << 0;
        /// `this.refs` or a JSX `ref` attribute
        const USES_REFS = 1 << 1;
        /// A constructor doing more than forwarding to `super`
        const HAS_NON_TRIVIAL_CONSTRUCTOR = 1 << 2;
        /// An instance method other than `render`
        const HAS_DISALLOWED_LIFECYCLE = 1 << 3;
        const USES_DECORATORS = 1 << 4;
        /// Class expression without its own name
        const IS_ANONYMOUS_BINDING = 1 << 5;
        const EXTENDS_PURE_BASE = 1 << 6;
        /// Any other use of `this`
        const USES_INSTANCE_MEMBERS = 1 << 7;
        /// Instance class fields with an initializer
        const HAS_INSTANCE_FIELDS = 1 << 8;
        /// `childContextTypes` is declared
        const DECLARES_CHILD_CONTEXT = 1 << 9;
    }
}

impl CapabilityFlags {
    /// Flags that rule out expressing the component as a function.
    pub const BLOCKING: Self = Self::USES_LOCAL_STATE
        .union(Self::USES_REFS)
        .union(Self::HAS_NON_TRIVIAL_CONSTRUCTOR)
        .union(Self::HAS_DISALLOWED_LIFECYCLE)
        .union(Self::USES_DECORATORS)
        .union(Self::USES_INSTANCE_MEMBERS)
        .union(Self::HAS_INSTANCE_FIELDS)
        .union(Self::DECLARES_CHILD_CONTEXT);
}

/// `this.props` or `this.context`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Container {
    Props,
    Context,
}

impl Container {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Props => "props",
            Self::Context => "context",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "props" => Some(Self::Props),
            "context" => Some(Self::Context),
            _ => None,
        }
    }
}

/// How a container is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContainerAccess {
    #[default]
    Unused,
    /// Only through static keys, listed in first-use order
    Keys(Vec<CompactString>),
    /// As a value: passed along, spread, indexed dynamically or aliased
    Whole,
}

impl ContainerAccess {
    #[inline]
    pub fn is_used(&self) -> bool {
        !matches!(self, Self::Unused)
    }

    fn add_key(&mut self, key: &str) {
        match self {
            Self::Unused => *self = Self::Keys(vec![CompactString::new(key)]),
            Self::Keys(keys) => {
                if !keys.iter().any(|k| k == key) {
                    keys.push(CompactString::new(key));
                }
            }
            Self::Whole => {}
        }
    }

    fn mark_whole(&mut self) {
        *self = Self::Whole;
    }
}

/// One occurrence of `this.props`/`this.context`, with or without a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessSite {
    /// The whole access: `this.props.foo` for keyed sites, `this.props` otherwise
    pub span: Span,
    /// The `this.props` part alone
    pub container_span: Span,
    pub container: Container,
    pub key: Option<CompactString>,
}

/// `let { props: { a }, context: { b } } = this;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThisDestructure {
    /// The declaration statement, when it sits directly in the `render` body
    /// and has no other declarators
    pub statement: Option<Span>,
    /// The `this` initializer
    pub init: Span,
    pub containers: SmallVec<[Container; 2]>,
    /// Keys bound by shorthand, when the pattern has nothing else
    pub bindings: Vec<(Container, CompactString)>,
    /// Whether the statement can be folded into the parameter list
    pub consumable: bool,
}

/// How a class body reads its instance.
#[derive(Debug, Clone, Default)]
pub struct InstanceUsage {
    pub props: ContainerAccess,
    pub context: ContainerAccess,
    pub sites: Vec<AccessSite>,
    pub destructures: Vec<ThisDestructure>,
    /// Every identifier referenced or declared by the instance members
    pub identifiers: FxHashSet<CompactString>,
}

impl InstanceUsage {
    pub fn access(&self, container: Container) -> &ContainerAccess {
        match container {
            Container::Props => &self.props,
            Container::Context => &self.context,
        }
    }

    fn access_mut(&mut self, container: Container) -> &mut ContainerAccess {
        match container {
            Container::Props => &mut self.props,
            Container::Context => &mut self.context,
        }
    }
}

/// The `render` method of a class, if it has one.
pub fn render_method<'a>(class: &'a Class<'a>) -> Option<&'a MethodDefinition<'a>> {
    class.body.body.iter().find_map(|element| match element {
        ClassElement::MethodDefinition(method) if is_render(method) => Some(&**method),
        _ => None,
    })
}

fn is_render(method: &MethodDefinition<'_>) -> bool {
    !method.r#static
        && method.kind == MethodDefinitionKind::Method
        && property_key_name(&method.key, method.computed).as_deref() == Some("render")
}

/// Classify the instance side of a class.
///
/// Static members are left to metadata extraction and hoisting.
pub fn classify_class(class: &Class<'_>) -> (CapabilityFlags, InstanceUsage) {
    let mut visitor = UsageVisitor::default();
    if !class.decorators.is_empty() {
        visitor.flags |= CapabilityFlags::USES_DECORATORS;
    }

    for element in &class.body.body {
        match element {
            ClassElement::MethodDefinition(method) => {
                if !method.decorators.is_empty() {
                    visitor.flags |= CapabilityFlags::USES_DECORATORS;
                }
                if method.r#static {
                    continue;
                }
                if method.kind == MethodDefinitionKind::Constructor {
                    if !is_trivial_constructor(&method.value) {
                        visitor.flags |= CapabilityFlags::HAS_NON_TRIVIAL_CONSTRUCTOR;
                    }
                    continue;
                }
                if !is_render(method) {
                    visitor.flags |= CapabilityFlags::HAS_DISALLOWED_LIFECYCLE;
                }
                if let Some(body) = &method.value.body {
                    visitor.visit_method_body(body);
                }
            }
            ClassElement::PropertyDefinition(prop) => {
                if !prop.decorators.is_empty() {
                    visitor.flags |= CapabilityFlags::USES_DECORATORS;
                }
                if prop.r#static {
                    continue;
                }
                if property_key_name(&prop.key, prop.computed).as_deref() == Some("state") {
                    visitor.flags |= CapabilityFlags::USES_LOCAL_STATE;
                }
                // `props: Props;` only declares a type
                if let Some(value) = &prop.value {
                    visitor.flags |= CapabilityFlags::HAS_INSTANCE_FIELDS;
                    visitor.visit_expression(value);
                }
            }
            ClassElement::AccessorProperty(accessor) => {
                if !accessor.decorators.is_empty() {
                    visitor.flags |= CapabilityFlags::USES_DECORATORS;
                }
                if !accessor.r#static {
                    visitor.flags |= CapabilityFlags::HAS_INSTANCE_FIELDS;
                }
            }
            ClassElement::StaticBlock(_) | ClassElement::TSIndexSignature(_) => {}
        }
    }

    tracing::trace!(flags = ?visitor.flags, sites = visitor.usage.sites.len(), "classified class");
    (visitor.flags, visitor.usage)
}

/// Options of a legacy factory that only declare metadata.
static FACTORY_METADATA_KEYS: PhfSet<&'static str> = phf_set! {
    "displayName",
    "propTypes",
    "contextTypes",
    "childContextTypes",
    "getDefaultProps",
    "defaultProps",
    "statics",
};

/// Classify the options object of a legacy factory call.
///
/// `render` is walked like a class `render` method. Any other option beyond
/// the metadata keys is behaviour a function component cannot carry.
pub fn classify_factory(options: &ObjectExpression<'_>) -> (CapabilityFlags, InstanceUsage) {
    let mut visitor = UsageVisitor::default();

    for property in &options.properties {
        let ObjectPropertyKind::ObjectProperty(prop) = property else {
            visitor.flags |= CapabilityFlags::HAS_DISALLOWED_LIFECYCLE;
            continue;
        };
        let name = property_key_name(&prop.key, prop.computed);
        match name.as_deref() {
            Some(key) if FACTORY_METADATA_KEYS.contains(key) => {}
            Some("getInitialState") => visitor.flags |= CapabilityFlags::USES_LOCAL_STATE,
            Some("render") if prop.kind == PropertyKind::Init => match &prop.value {
                Expression::FunctionExpression(func) => {
                    if let Some(body) = &func.body {
                        visitor.visit_method_body(body);
                    }
                }
                _ => visitor.flags |= CapabilityFlags::HAS_DISALLOWED_LIFECYCLE,
            },
            // `mixins`, lifecycle methods, helpers
            _ => visitor.flags |= CapabilityFlags::HAS_DISALLOWED_LIFECYCLE,
        }
    }

    tracing::trace!(
        flags = ?visitor.flags,
        sites = visitor.usage.sites.len(),
        "classified factory"
    );
    (visitor.flags, visitor.usage)
}

/// A constructor whose body is exactly one `super(...)` call forwarding its
/// own parameters or `...arguments`.
fn is_trivial_constructor(func: &Function<'_>) -> bool {
    let Some(body) = &func.body else {
        return false;
    };
    let [Statement::ExpressionStatement(stmt)] = body.statements.as_slice() else {
        return false;
    };
    let Expression::CallExpression(call) = stmt.expression.get_inner_expression() else {
        return false;
    };
    if !matches!(call.callee, Expression::Super(_)) {
        return false;
    }

    let params: SmallVec<[&str; 4]> = func
        .params
        .items
        .iter()
        .filter_map(|param| match &param.pattern.kind {
            BindingPatternKind::BindingIdentifier(id) => Some(id.name.as_str()),
            _ => None,
        })
        .collect();
    let rest = func.params.rest.as_ref().and_then(|rest| match &rest.argument.kind {
        BindingPatternKind::BindingIdentifier(id) => Some(id.name.as_str()),
        _ => None,
    });

    call.arguments.iter().all(|arg| match arg {
        Argument::SpreadElement(spread) => matches!(
            spread.argument.get_inner_expression(),
            Expression::Identifier(id)
                if id.name.as_str() == "arguments" || Some(id.name.as_str()) == rest
        ),
        _ => matches!(
            arg.as_expression().map(Expression::get_inner_expression),
            Some(Expression::Identifier(id)) if params.contains(&id.name.as_str())
        ),
    })
}

/// `this.props` / `this['context']`: the container and the access span.
fn this_container(expr: &Expression<'_>) -> Option<(Container, Span)> {
    let member = expr.get_inner_expression().as_member_expression()?;
    if !is_this(member.object()) {
        return None;
    }
    let container = Container::from_name(member_property_name(member)?)?;
    Some((container, member.span()))
}

#[inline]
fn is_this(expr: &Expression<'_>) -> bool {
    matches!(expr.get_inner_expression(), Expression::ThisExpression(_))
}

/// Key bound by a shorthand property such as `{ a }`.
fn shorthand_key(prop: &BindingProperty<'_>) -> Option<CompactString> {
    if !prop.shorthand || prop.computed {
        return None;
    }
    match &prop.value.kind {
        BindingPatternKind::BindingIdentifier(_) => property_key_name(&prop.key, false),
        _ => None,
    }
}

#[derive(Default)]
struct UsageVisitor {
    flags: CapabilityFlags,
    usage: InstanceUsage,
    /// Depth of nested non-arrow functions and classes, where `this` rebinds.
    rebound: u32,
    /// Start offsets of the statements directly in the method body. A folded
    /// destructure in a nested scope could clash with an outer declaration.
    top_level: FxHashSet<u32>,
}

impl UsageVisitor {
    fn visit_method_body<'a>(&mut self, body: &FunctionBody<'a>) {
        self.top_level = body.statements.iter().map(|s| s.span().start).collect();
        self.visit_function_body(body);
    }

    fn record_key(&mut self, container: Container, key: &str, span: Span, container_span: Span) {
        self.usage.access_mut(container).add_key(key);
        self.usage.sites.push(AccessSite {
            span,
            container_span,
            container,
            key: Some(CompactString::new(key)),
        });
    }

    fn record_whole(&mut self, container: Container, container_span: Span) {
        self.usage.access_mut(container).mark_whole();
        self.usage.sites.push(AccessSite {
            span: container_span,
            container_span,
            container,
            key: None,
        });
    }

    fn record_this_destructure<'a>(
        &mut self,
        declarator: &VariableDeclarator<'a>,
        statement: Option<Span>,
        init: Span,
    ) {
        let BindingPatternKind::ObjectPattern(pattern) = &declarator.id.kind else {
            // `const self = this`
            self.flags |= CapabilityFlags::USES_INSTANCE_MEMBERS;
            self.visit_binding_pattern(&declarator.id);
            return;
        };

        let mut containers = SmallVec::new();
        let mut bindings = Vec::new();
        let mut consumable = statement.is_some();
        if pattern.rest.is_some() {
            self.flags |= CapabilityFlags::USES_INSTANCE_MEMBERS;
            consumable = false;
        }

        for prop in &pattern.properties {
            let name = property_key_name(&prop.key, prop.computed);
            let Some(container) = name.as_deref().and_then(Container::from_name) else {
                self.flags |= match name.as_deref() {
                    Some("state") => CapabilityFlags::USES_LOCAL_STATE,
                    Some("refs") => CapabilityFlags::USES_REFS,
                    _ => CapabilityFlags::USES_INSTANCE_MEMBERS,
                };
                consumable = false;
                continue;
            };
            containers.push(container);
            match &prop.value.kind {
                BindingPatternKind::ObjectPattern(inner) if inner.rest.is_none() => {
                    for inner_prop in &inner.properties {
                        match shorthand_key(inner_prop) {
                            Some(key) => bindings.push((container, key)),
                            None => consumable = false,
                        }
                    }
                }
                // `{ props }`, `{ props: p }`, `{ props: { ...rest } }`
                _ => consumable = false,
            }
        }

        if consumable {
            for (container, key) in &bindings {
                self.usage.access_mut(*container).add_key(key);
            }
        } else {
            for container in &containers {
                self.usage.access_mut(*container).mark_whole();
            }
            self.visit_binding_pattern(&declarator.id);
        }

        self.usage.destructures.push(ThisDestructure {
            statement,
            init,
            containers,
            bindings,
            consumable,
        });
    }
}

impl<'a> Visit<'a> for UsageVisitor {
    fn visit_function(&mut self, it: &Function<'a>, flags: ScopeFlags) {
        self.rebound += 1;
        walk_function(self, it, flags);
        self.rebound -= 1;
    }

    fn visit_class(&mut self, it: &Class<'a>) {
        self.rebound += 1;
        walk_class(self, it);
        self.rebound -= 1;
    }

    fn visit_member_expression(&mut self, it: &MemberExpression<'a>) {
        if self.rebound > 0 {
            walk_member_expression(self, it);
            return;
        }

        // `this.props.foo`, `this.props['foo']`, `this.props[key]`
        if let Some((container, container_span)) = this_container(it.object()) {
            match member_property_name(it) {
                Some(key) => self.record_key(container, key, it.span(), container_span),
                None => {
                    self.record_whole(container, container_span);
                    if let MemberExpression::ComputedMemberExpression(computed) = it {
                        self.visit_expression(&computed.expression);
                    }
                }
            }
            return;
        }

        if is_this(it.object()) {
            let name = member_property_name(it);
            // `this.props` used as a value
            if let Some(container) = name.and_then(Container::from_name) {
                self.record_whole(container, it.span());
                return;
            }
            match name {
                Some("state" | "setState") => self.flags |= CapabilityFlags::USES_LOCAL_STATE,
                Some("refs") => self.flags |= CapabilityFlags::USES_REFS,
                _ => {
                    self.flags |= CapabilityFlags::USES_INSTANCE_MEMBERS;
                    if let MemberExpression::ComputedMemberExpression(computed) = it {
                        self.visit_expression(&computed.expression);
                    }
                }
            }
            return;
        }

        walk_member_expression(self, it);
    }

    fn visit_this_expression(&mut self, _it: &ThisExpression) {
        if self.rebound == 0 {
            self.flags |= CapabilityFlags::USES_INSTANCE_MEMBERS;
        }
    }

    fn visit_super(&mut self, _it: &Super) {
        if self.rebound == 0 {
            self.flags |= CapabilityFlags::USES_INSTANCE_MEMBERS;
        }
    }

    fn visit_variable_declaration(&mut self, it: &VariableDeclaration<'a>) {
        if self.rebound > 0 {
            walk_variable_declaration(self, it);
            return;
        }
        let statement = (it.declarations.len() == 1 && self.top_level.contains(&it.span.start))
            .then_some(it.span);
        for declarator in &it.declarations {
            match &declarator.init {
                Some(init) if is_this(init) => {
                    self.record_this_destructure(declarator, statement, init.span());
                }
                _ => self.visit_variable_declarator(declarator),
            }
        }
    }

    fn visit_jsx_attribute(&mut self, it: &JSXAttribute<'a>) {
        if let JSXAttributeName::Identifier(name) = &it.name {
            if name.name.as_str() == "ref" {
                self.flags |= CapabilityFlags::USES_REFS;
            }
        }
        walk_jsx_attribute(self, it);
    }

    fn visit_identifier_reference(&mut self, it: &IdentifierReference<'a>) {
        self.usage.identifiers.insert(CompactString::new(it.name.as_str()));
    }

    fn visit_binding_identifier(&mut self, it: &BindingIdentifier<'a>) {
        self.usage.identifiers.insert(CompactString::new(it.name.as_str()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::with_unit;

    fn classify(source: &str) -> (CapabilityFlags, InstanceUsage) {
        with_unit(source, |unit| {
            let class = unit
                .program
                .body
                .iter()
                .find_map(|stmt| match stmt {
                    Statement::ClassDeclaration(class) => Some(class),
                    _ => None,
                })
                .expect("class declaration");
            classify_class(class)
        })
    }

    fn keys(access: &ContainerAccess) -> Vec<&str> {
        match access {
            ContainerAccess::Keys(keys) => keys.iter().map(CompactString::as_str).collect(),
            _ => vec![],
        }
    }

    #[test]
    fn test_props_by_key() {
        let (flags, usage) = classify(
            r#"
class Foo extends React.Component {
    render() {
        return <div title={this.props['title']}>{this.props.foo}{this.props.foo}</div>;
    }
}
"#,
        );
        assert!(flags.is_empty());
        assert_eq!(keys(&usage.props), vec!["title", "foo"]);
        assert_eq!(usage.context, ContainerAccess::Unused);
        assert_eq!(usage.sites.len(), 3);
    }

    #[test]
    fn test_whole_props() {
        let (flags, usage) = classify(
            r#"
class Foo extends React.Component {
    render() {
        const { foo } = this.props;
        return <Bar {...this.props} foo={foo} />;
    }
}
"#,
        );
        assert!(flags.is_empty());
        assert_eq!(usage.props, ContainerAccess::Whole);
        assert!(usage.identifiers.contains("foo"));
        assert_eq!(usage.sites.len(), 2);
    }

    #[test]
    fn test_dynamic_key_is_whole() {
        let (_, usage) = classify(
            r#"
class Foo extends React.Component {
    render() {
        return <div>{this.props[this.constructor.key]}</div>;
    }
}
"#,
        );
        assert_eq!(usage.props, ContainerAccess::Whole);
    }

    #[test]
    fn test_this_destructure_is_consumable() {
        let (flags, usage) = classify(
            r#"
class Foo extends React.Component {
    render() {
        let {props:{foo}, context:{bar}} = this;
        return <div>{foo}{bar}</div>;
    }
}
"#,
        );
        assert!(flags.is_empty());
        assert_eq!(keys(&usage.props), vec!["foo"]);
        assert_eq!(keys(&usage.context), vec!["bar"]);
        let [destructure] = usage.destructures.as_slice() else {
            panic!("expected one destructure");
        };
        assert!(destructure.consumable);
        assert!(destructure.statement.is_some());
    }

    #[test]
    fn test_aliased_destructure_is_whole() {
        let (_, usage) = classify(
            r#"
class Foo extends React.Component {
    render() {
        let { props: { foo: renamed } } = this;
        return <div>{renamed}</div>;
    }
}
"#,
        );
        assert_eq!(usage.props, ContainerAccess::Whole);
        assert!(!usage.destructures[0].consumable);
        assert!(usage.identifiers.contains("renamed"));
    }

    #[test]
    fn test_state_and_refs() {
        let (flags, _) = classify(
            r#"
class Foo extends React.Component {
    render() {
        const { state } = this;
        return <div ref={this.refs.x}>{state.a}</div>;
    }
}
"#,
        );
        assert!(flags.contains(CapabilityFlags::USES_LOCAL_STATE));
        assert!(flags.contains(CapabilityFlags::USES_REFS));
    }

    #[test]
    fn test_nested_function_this_is_ignored() {
        let (flags, usage) = classify(
            r#"
class Foo extends React.Component {
    render() {
        const handler = function () { return this.value; };
        const arrow = () => this.props.foo;
        return <div onClick={handler}>{arrow()}</div>;
    }
}
"#,
        );
        assert!(flags.is_empty());
        assert_eq!(keys(&usage.props), vec!["foo"]);
    }

    #[test]
    fn test_instance_members_and_escaping_this() {
        let (flags, _) = classify(
            "class Foo extends Component { render() { return <div>{this.foo}</div>; } }",
        );
        assert!(flags.contains(CapabilityFlags::USES_INSTANCE_MEMBERS));

        let (flags, _) = classify(
            "class Foo extends Component { render() { return <div>{bar(this)}</div>; } }",
        );
        assert!(flags.contains(CapabilityFlags::USES_INSTANCE_MEMBERS));
    }

    #[test]
    fn test_super_in_render() {
        let (flags, _) =
            classify("class Bar extends React.Component { render() { return super.render(); } }");
        assert!(flags.contains(CapabilityFlags::USES_INSTANCE_MEMBERS));

        let (flags, _) = classify(
            r#"
class Bar extends React.Component {
    render() {
        const helper = { name() { return super.toString(); } };
        return <div>{helper.name()}</div>;
    }
}
"#,
        );
        assert!(flags.is_empty());
    }

    #[test]
    fn test_nested_destructure_is_not_consumable() {
        let (flags, usage) = classify(
            r#"
class Foo extends React.Component {
    render() {
        const foo = 'outer';
        const f = () => {
            const { props: { foo } } = this;
            return foo;
        };
        return <div>{f()}{foo}</div>;
    }
}
"#,
        );
        assert!(flags.is_empty());
        assert_eq!(usage.props, ContainerAccess::Whole);
        let [destructure] = usage.destructures.as_slice() else {
            panic!("expected one destructure");
        };
        assert!(!destructure.consumable);
        assert!(destructure.statement.is_none());
    }

    #[test]
    fn test_constructors() {
        let class_with = |constructor: &str| {
            format!("class Foo extends Component {{ {constructor} render() {{ return null; }} }}")
        };

        let trivial = [
            "constructor() { super(); }",
            "constructor(props, context) { super(props, context); }",
            "constructor() { super(...arguments); }",
            "constructor(...args) { super(...args); }",
        ];
        for constructor in trivial {
            let (flags, _) = classify(&class_with(constructor));
            assert!(!flags.contains(CapabilityFlags::HAS_NON_TRIVIAL_CONSTRUCTOR), "{constructor}");
        }

        let non_trivial = [
            "constructor() {}",
            "constructor(props) { super(props); doSomething(); }",
            "constructor(props) { super({ ...props }); }",
        ];
        for constructor in non_trivial {
            let (flags, _) = classify(&class_with(constructor));
            assert!(flags.contains(CapabilityFlags::HAS_NON_TRIVIAL_CONSTRUCTOR), "{constructor}");
        }
    }

    #[test]
    fn test_type_only_field_is_ignored() {
        let (flags, _) = classify(
            "class Foo extends Component { props; render() { return <div>{this.props.a}</div>; } }",
        );
        assert!(flags.is_empty());
    }

    #[test]
    fn test_static_members_are_not_instance_usage() {
        let (flags, _) = classify(
            r#"
class Foo extends Component {
    static defaultProps = { a: 1 };
    static helper() { return this.name; }
    render() { return <div>{this.props.a}</div>; }
}
"#,
        );
        assert!(flags.is_empty());
    }
}
