//! Metadata extraction.
//!
//! A component's `propTypes`, `defaultProps` and `contextTypes` may be declared
//! in several styles, and the same declaration can be fragmented across spread
//! elements. Every style is normalized here into one [`MetadataGroup`]: an
//! ordered list of keys with [`MetadataEntry::Break`] markers wherever a spread
//! (or a computed key) interrupts the sequence.
//!
//! Declaration styles, checked for the component being analyzed:
//!
//! - inline: `static defaultProps = {...}`, or `propTypes: {...}` in a legacy
//!   factory options object
//! - getter: `static get defaultProps() { return {...}; }`, or a legacy
//!   `getDefaultProps() { return {...}; }`
//! - assignment: `Foo.defaultProps = {...}` anywhere in the unit's statement list
//! - reference: either of the above naming an identifier that is initialized
//!   with an object literal in the same unit
//!
//! When several declarations exist the last one in source order wins, which is
//! the one in effect at runtime.

use gesso_carton::CompactString;
use oxc_ast::ast::{
    ClassElement, Expression, Function, MethodDefinitionKind, ObjectExpression, ObjectPropertyKind,
    Statement,
};
use oxc_span::{GetSpan, Span};
use serde::Serialize;

use crate::component::ComponentNode;
use crate::keys::property_key_name;
use crate::unit::SourceUnit;

/// Which metadata declaration to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MetadataKind {
    /// `propTypes`
    Properties,
    /// `defaultProps`, or `getDefaultProps` on a legacy factory
    Defaults,
    /// `contextTypes`
    Context,
    /// `childContextTypes`
    ChildContext,
}

impl MetadataKind {
    /// Property name used on classes and in post-definition assignments.
    pub const fn property_name(self) -> &'static str {
        match self {
            Self::Properties => "propTypes",
            Self::Defaults => "defaultProps",
            Self::Context => "contextTypes",
            Self::ChildContext => "childContextTypes",
        }
    }

    /// Property name inside a legacy factory options object.
    pub const fn legacy_property_name(self) -> &'static str {
        match self {
            Self::Defaults => "getDefaultProps",
            other => other.property_name(),
        }
    }
}

/// How a metadata group was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MetadataSource {
    Inline,
    Getter,
    Assignment,
    Reference,
}

/// A named key inside a metadata group.
#[derive(Debug, Clone)]
pub struct MetadataKey<'a> {
    pub name: CompactString,
    /// Span of the whole property (`key: value`)
    pub span: Span,
    /// Span of the key alone
    pub key_span: Span,
    pub value: &'a Expression<'a>,
}

/// One entry of a metadata group.
#[derive(Debug, Clone)]
pub enum MetadataEntry<'a> {
    Key(MetadataKey<'a>),
    /// A spread element or computed key interrupting the sequence.
    Break { span: Span },
}

impl<'a> MetadataEntry<'a> {
    #[inline]
    pub fn as_key(&self) -> Option<&MetadataKey<'a>> {
        match self {
            Self::Key(key) => Some(key),
            Self::Break { .. } => None,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::Key(key) => key.span,
            Self::Break { span } => *span,
        }
    }
}

/// Normalized view of a metadata declaration.
#[derive(Debug, Clone)]
pub struct MetadataGroup<'a> {
    pub source: MetadataSource,
    /// Span of the object literal the entries were read from
    pub span: Span,
    pub entries: Vec<MetadataEntry<'a>>,
}

impl<'a> MetadataGroup<'a> {
    /// Build a group from an object literal.
    ///
    /// A key repeated within one run keeps its first position and takes the
    /// later value. Duplicates on either side of a break stay separate.
    pub fn from_object(object: &'a ObjectExpression<'a>, source: MetadataSource) -> Self {
        let mut entries: Vec<MetadataEntry<'a>> = Vec::with_capacity(object.properties.len());
        let mut run_start = 0;

        for property in &object.properties {
            match property {
                ObjectPropertyKind::SpreadProperty(spread) => {
                    entries.push(MetadataEntry::Break { span: spread.span });
                    run_start = entries.len();
                }
                ObjectPropertyKind::ObjectProperty(prop) => {
                    let Some(name) = property_key_name(&prop.key, prop.computed) else {
                        entries.push(MetadataEntry::Break { span: prop.span });
                        run_start = entries.len();
                        continue;
                    };
                    let existing = entries[run_start..].iter_mut().find_map(|entry| match entry {
                        MetadataEntry::Key(key) if key.name == name => Some(key),
                        _ => None,
                    });
                    match existing {
                        Some(key) => key.value = &prop.value,
                        None => entries.push(MetadataEntry::Key(MetadataKey {
                            name,
                            span: prop.span,
                            key_span: prop.key.span(),
                            value: &prop.value,
                        })),
                    }
                }
            }
        }

        Self {
            source,
            span: object.span,
            entries,
        }
    }

    /// Named keys in order, across all runs.
    pub fn keys(&self) -> impl Iterator<Item = &MetadataKey<'a>> + '_ {
        self.entries.iter().filter_map(MetadataEntry::as_key)
    }

    /// Contiguous key sequences between breaks.
    pub fn runs(&self) -> impl Iterator<Item = Vec<&MetadataKey<'a>>> + '_ {
        self.entries
            .split(|entry| matches!(entry, MetadataEntry::Break { .. }))
            .map(|run| run.iter().filter_map(MetadataEntry::as_key).collect())
    }

    /// Look up a key by name.
    pub fn get(&self, name: &str) -> Option<&MetadataKey<'a>> {
        self.keys().find(|key| key.name == name)
    }

    /// Key names in order, across all runs.
    pub fn names(&self) -> Vec<&str> {
        self.keys().map(|key| key.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A declaration of some metadata kind, before its value is interpreted.
#[derive(Debug, Clone, Copy)]
pub struct MetadataDeclaration<'a> {
    pub source: MetadataSource,
    /// Span of the declaring member, property or assignment
    pub span: Span,
    /// The object literal the declaration resolves to, or `None` when the value
    /// cannot be read statically
    pub object: Option<&'a ObjectExpression<'a>>,
}

/// Every declaration of `kind` for a component, in source order.
///
/// Assignments are looked up under each of `names`: the definition's own
/// name and the binding it is assigned to, when those differ.
pub fn find_declarations<'a>(
    unit: &SourceUnit<'a>,
    node: &ComponentNode<'a>,
    names: &[&str],
    kind: MetadataKind,
) -> Vec<MetadataDeclaration<'a>> {
    let mut found = Vec::new();
    let property = kind.property_name();

    match *node {
        ComponentNode::Class(class) => {
            for element in &class.body.body {
                match element {
                    ClassElement::PropertyDefinition(prop) if prop.r#static => {
                        let key = property_key_name(&prop.key, prop.computed);
                        if key.as_deref() != Some(property) {
                            continue;
                        }
                        let (source, object) = match &prop.value {
                            Some(value) => resolve_value(unit, value, MetadataSource::Inline),
                            None => (MetadataSource::Inline, None),
                        };
                        found.push(MetadataDeclaration {
                            source,
                            span: prop.span,
                            object,
                        });
                    }
                    ClassElement::MethodDefinition(method)
                        if method.r#static && method.kind == MethodDefinitionKind::Get =>
                    {
                        if property_key_name(&method.key, method.computed).as_deref()
                            != Some(property)
                        {
                            continue;
                        }
                        found.push(MetadataDeclaration {
                            source: MetadataSource::Getter,
                            span: method.span,
                            object: getter_object(&method.value),
                        });
                    }
                    _ => {}
                }
            }
        }
        ComponentNode::LegacyFactory { options, .. } => {
            let legacy = kind.legacy_property_name();
            for prop in &options.properties {
                let ObjectPropertyKind::ObjectProperty(prop) = prop else {
                    continue;
                };
                if property_key_name(&prop.key, prop.computed).as_deref() != Some(legacy) {
                    continue;
                }
                let (source, object) = if kind == MetadataKind::Defaults {
                    match prop.value.get_inner_expression() {
                        Expression::FunctionExpression(func) => {
                            (MetadataSource::Getter, getter_object(func))
                        }
                        _ => (MetadataSource::Getter, None),
                    }
                } else {
                    resolve_value(unit, &prop.value, MetadataSource::Inline)
                };
                found.push(MetadataDeclaration {
                    source,
                    span: prop.span,
                    object,
                });
            }
        }
        ComponentNode::Function(_) | ComponentNode::Arrow(_) => {}
    }

    for name in names {
        for assign in unit.member_assignments(name, property) {
            let (source, object) = resolve_value(unit, &assign.right, MetadataSource::Assignment);
            found.push(MetadataDeclaration {
                source,
                span: assign.span,
                object,
            });
        }
    }

    found.sort_by_key(|decl| decl.span.start);
    found
}

/// Extract the metadata group of `kind` in effect for a component.
///
/// Returns `None` when there is no declaration, or when the last declaration
/// cannot be read statically.
pub fn extract_metadata<'a>(
    unit: &SourceUnit<'a>,
    node: &ComponentNode<'a>,
    names: &[&str],
    kind: MetadataKind,
) -> Option<MetadataGroup<'a>> {
    let last = find_declarations(unit, node, names, kind).pop()?;
    let object = last.object?;
    tracing::trace!(kind = ?kind, source = ?last.source, "extracted metadata group");
    Some(MetadataGroup::from_object(object, last.source))
}

/// Resolve a declared value to an object literal, following one identifier.
fn resolve_value<'a>(
    unit: &SourceUnit<'a>,
    value: &'a Expression<'a>,
    direct: MetadataSource,
) -> (MetadataSource, Option<&'a ObjectExpression<'a>>) {
    match value.get_inner_expression() {
        Expression::ObjectExpression(object) => (direct, Some(object)),
        Expression::Identifier(id) => (
            MetadataSource::Reference,
            unit.resolve_object_binding(id.name.as_str()),
        ),
        _ => (direct, None),
    }
}

/// The object literal returned by a single-statement getter body.
fn getter_object<'a>(func: &'a Function<'a>) -> Option<&'a ObjectExpression<'a>> {
    let body = func.body.as_ref()?;
    let [Statement::ReturnStatement(ret)] = body.statements.as_slice() else {
        return None;
    };
    match ret.argument.as_ref()?.get_inner_expression() {
        Expression::ObjectExpression(object) => Some(object),
        _ => None,
    }
}
