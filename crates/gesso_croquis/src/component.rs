//! Component descriptors.
//!
//! A [`ComponentDescriptor`] is the read-only summary every rule and the
//! rewriter work from: what kind of definition it is, where it sits, what it
//! is allowed to do as a function, and its normalized metadata groups.

use gesso_carton::{CompactString, SmallVec};
use oxc_ast::ast::{
    ArrowFunctionExpression, CallExpression, Class, Expression, Function, ObjectExpression,
};
use oxc_span::{GetSpan, Span};
use serde::{Deserialize, Serialize};

use crate::metadata::{extract_metadata, find_declarations, MetadataGroup, MetadataKind};
use crate::unit::SourceUnit;
use crate::usage::{classify_class, classify_factory, CapabilityFlags, InstanceUsage};

/// Structural shape of a component definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
    Function,
    Arrow,
    Class,
    LegacyFactory,
}

/// The class a class component extends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentBase {
    /// `Component` or `React.Component`
    Component,
    /// `PureComponent` or `React.PureComponent`
    PureComponent,
    /// Any other superclass, by source text
    Other(CompactString),
}

impl ComponentBase {
    pub fn from_super_class(super_class: &Expression<'_>, source: &str) -> Self {
        let name = match super_class.get_inner_expression() {
            Expression::Identifier(id) => Some(id.name.as_str()),
            Expression::StaticMemberExpression(member) => match &member.object {
                Expression::Identifier(object) if object.name.as_str() == "React" => {
                    Some(member.property.name.as_str())
                }
                _ => None,
            },
            _ => None,
        };
        match name {
            Some("Component") => Self::Component,
            Some("PureComponent") => Self::PureComponent,
            _ => Self::Other(CompactString::new(super_class.span().source_text(source))),
        }
    }

    #[inline]
    pub fn is_react_base(&self) -> bool {
        matches!(self, Self::Component | Self::PureComponent)
    }
}

/// Whether a definition is a statement or sits inside an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Placement {
    /// A class or function declaration, possibly under `export`
    Statement,
    /// A class/function expression, arrow, or a wrapped definition
    Expression,
}

/// Borrowed AST node of a component definition.
#[derive(Debug, Clone, Copy)]
pub enum ComponentNode<'a> {
    Class(&'a Class<'a>),
    Function(&'a Function<'a>),
    Arrow(&'a ArrowFunctionExpression<'a>),
    LegacyFactory {
        call: &'a CallExpression<'a>,
        options: &'a ObjectExpression<'a>,
    },
}

impl<'a> ComponentNode<'a> {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Class(_) => ComponentKind::Class,
            Self::Function(_) => ComponentKind::Function,
            Self::Arrow(_) => ComponentKind::Arrow,
            Self::LegacyFactory { .. } => ComponentKind::LegacyFactory,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::Class(class) => class.span,
            Self::Function(func) => func.span,
            Self::Arrow(arrow) => arrow.span,
            Self::LegacyFactory { call, .. } => call.span,
        }
    }

    #[inline]
    pub fn as_class(&self) -> Option<&'a Class<'a>> {
        match *self {
            Self::Class(class) => Some(class),
            _ => None,
        }
    }
}

/// Options that decide whether a class may become a function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EligibilityOptions {
    /// Leave `PureComponent` subclasses alone
    pub ignore_pure_components: bool,
}

/// Everything known about one component definition.
#[derive(Debug, Clone)]
pub struct ComponentDescriptor<'a> {
    /// Own name, or the name of the binding it is assigned to
    pub name: Option<CompactString>,
    /// Binding name of a named definition bound under another name, as in
    /// `const Hoc = withRouter(class Inner extends Component {})`
    pub alias: Option<CompactString>,
    pub node: ComponentNode<'a>,
    /// Outermost higher-order call wrapping the definition, e.g. `connect(a)(X)`
    pub wrapper: Option<Span>,
    pub placement: Placement,
    /// Superclass, for class components
    pub base: Option<ComponentBase>,
    pub flags: CapabilityFlags,
    pub usage: InstanceUsage,
    pub properties: Option<MetadataGroup<'a>>,
    pub defaults: Option<MetadataGroup<'a>>,
    pub context: Option<MetadataGroup<'a>>,
}

impl<'a> ComponentDescriptor<'a> {
    /// Build the descriptor of a discovered definition.
    pub fn build(
        unit: &SourceUnit<'a>,
        node: ComponentNode<'a>,
        name: Option<CompactString>,
        alias: Option<CompactString>,
        wrapper: Option<Span>,
        placement: Placement,
    ) -> Self {
        let mut flags = CapabilityFlags::empty();
        let mut usage = InstanceUsage::default();
        let mut base = None;

        match node {
            ComponentNode::Class(class) => {
                let (class_flags, class_usage) = classify_class(class);
                flags |= class_flags;
                usage = class_usage;
                if class.id.is_none() {
                    flags |= CapabilityFlags::IS_ANONYMOUS_BINDING;
                }
                if let Some(super_class) = &class.super_class {
                    let resolved = ComponentBase::from_super_class(super_class, unit.source);
                    if resolved == ComponentBase::PureComponent {
                        flags |= CapabilityFlags::EXTENDS_PURE_BASE;
                    }
                    base = Some(resolved);
                }
            }
            ComponentNode::LegacyFactory { options, .. } => {
                (flags, usage) = classify_factory(options);
            }
            ComponentNode::Function(_) | ComponentNode::Arrow(_) => {}
        }

        let lookup: SmallVec<[&str; 2]> =
            name.iter().chain(alias.iter()).map(CompactString::as_str).collect();
        if !find_declarations(unit, &node, &lookup, MetadataKind::ChildContext).is_empty() {
            flags |= CapabilityFlags::DECLARES_CHILD_CONTEXT;
        }
        let properties = extract_metadata(unit, &node, &lookup, MetadataKind::Properties);
        let defaults = extract_metadata(unit, &node, &lookup, MetadataKind::Defaults);
        let context = extract_metadata(unit, &node, &lookup, MetadataKind::Context);
        drop(lookup);

        Self {
            properties,
            defaults,
            context,
            name,
            alias,
            node,
            wrapper,
            placement,
            base,
            flags,
            usage,
        }
    }

    #[inline]
    pub fn kind(&self) -> ComponentKind {
        self.node.kind()
    }

    /// Span of the definition itself, excluding any wrapper.
    #[inline]
    pub fn span(&self) -> Span {
        self.node.span()
    }

    pub fn metadata(&self, kind: MetadataKind) -> Option<&MetadataGroup<'a>> {
        match kind {
            MetadataKind::Properties => self.properties.as_ref(),
            MetadataKind::Defaults => self.defaults.as_ref(),
            MetadataKind::Context => self.context.as_ref(),
            MetadataKind::ChildContext => None,
        }
    }

    /// Whether this class or factory component could be written as a plain
    /// function.
    ///
    /// Anonymous class expressions and factory calls qualify here even though
    /// they are never rewritten.
    pub fn should_be_function(&self, options: &EligibilityOptions) -> bool {
        match self.kind() {
            ComponentKind::Class => {
                if !self.base.as_ref().is_some_and(ComponentBase::is_react_base) {
                    return false;
                }
            }
            ComponentKind::LegacyFactory => {}
            ComponentKind::Function | ComponentKind::Arrow => return false,
        }
        if self.flags.intersects(CapabilityFlags::BLOCKING) {
            return false;
        }
        !(options.ignore_pure_components && self.flags.contains(CapabilityFlags::EXTENDS_PURE_BASE))
    }

    /// Whether the rewriter may turn this class into a function.
    pub fn is_rewrite_eligible(&self, options: &EligibilityOptions) -> bool {
        self.kind() == ComponentKind::Class
            && self.should_be_function(options)
            && !self.flags.contains(CapabilityFlags::IS_ANONYMOUS_BINDING)
    }
}
