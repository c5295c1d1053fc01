//! Static member hoisting.
//!
//! Static class members are re-emitted as assignments on the function after
//! its declaration. Values keep their source text byte for byte, including the
//! spacing around `=`.

use gesso_carton::{is_identifier_name, CompactString};
use oxc_ast::ast::{
    Class, ClassElement, MethodDefinition, MethodDefinitionKind, PropertyKey, Statement,
};
use oxc_span::GetSpan;

use crate::RewriteError;

/// Assignment statements for every static member of `class`, in source order.
pub(crate) fn hoist_statics(
    class: &Class<'_>,
    name: &str,
    source: &str,
) -> Result<Vec<String>, RewriteError> {
    let mut hoisted = Vec::new();
    for element in &class.body.body {
        match element {
            ClassElement::PropertyDefinition(prop) if prop.r#static => {
                let target = member_target(name, &prop.key, prop.computed, source)?;
                match &prop.value {
                    Some(value) => {
                        let separator_start = prop
                            .type_annotation
                            .as_ref()
                            .map_or(prop.key.span().end, |annotation| annotation.span.end);
                        let separator =
                            &source[separator_start as usize..value.span().start as usize];
                        let value = value.span().source_text(source);
                        hoisted.push(format!("{target}{separator}{value};"));
                    }
                    None => hoisted.push(format!("{target} = undefined;")),
                }
            }
            ClassElement::MethodDefinition(method) if method.r#static => {
                hoisted.push(hoist_method(name, method, source)?);
            }
            ClassElement::AccessorProperty(accessor) if accessor.r#static => {
                return Err(unsupported(&accessor.key, source));
            }
            ClassElement::StaticBlock(_) => {
                return Err(RewriteError::UnsupportedStatic {
                    name: CompactString::new("static {}"),
                });
            }
            _ => {}
        }
    }
    Ok(hoisted)
}

fn hoist_method(
    name: &str,
    method: &MethodDefinition<'_>,
    source: &str,
) -> Result<String, RewriteError> {
    let target = member_target(name, &method.key, method.computed, source)?;
    let func = &method.value;

    match method.kind {
        // `static get defaultProps() { return {...}; }`
        MethodDefinitionKind::Get => {
            let returned = func.body.as_ref().and_then(|body| match body.statements.as_slice() {
                [Statement::ReturnStatement(ret)] => ret.argument.as_ref(),
                _ => None,
            });
            match returned {
                Some(expr) => Ok(format!("{target} = {};", expr.span().source_text(source))),
                None => Err(unsupported(&method.key, source)),
            }
        }
        MethodDefinitionKind::Method => {
            let rest_start = func
                .type_parameters
                .as_ref()
                .map_or(func.params.span.start, |params| params.span.start);
            let rest = &source[rest_start as usize..method.span.end as usize];
            let mut head = String::new();
            if func.r#async {
                head.push_str("async ");
            }
            head.push_str("function");
            if func.generator {
                head.push('*');
            }
            if let PropertyKey::StaticIdentifier(id) = &method.key {
                if is_identifier_name(id.name.as_str()) {
                    head.push(' ');
                    head.push_str(id.name.as_str());
                }
            }
            Ok(format!("{target} = {head}{rest};"))
        }
        MethodDefinitionKind::Set | MethodDefinitionKind::Constructor => {
            Err(unsupported(&method.key, source))
        }
    }
}

/// `Name.key` or `Name["key"]`.
fn member_target(
    name: &str,
    key: &PropertyKey<'_>,
    computed: bool,
    source: &str,
) -> Result<String, RewriteError> {
    if computed {
        return Err(unsupported(key, source));
    }
    match key {
        PropertyKey::StaticIdentifier(id) => Ok(format!("{name}.{}", id.name)),
        PropertyKey::StringLiteral(_) | PropertyKey::NumericLiteral(_) => {
            Ok(format!("{name}[{}]", key.span().source_text(source)))
        }
        _ => Err(unsupported(key, source)),
    }
}

fn unsupported(key: &PropertyKey<'_>, source: &str) -> RewriteError {
    RewriteError::UnsupportedStatic {
        name: CompactString::new(key.span().source_text(source)),
    }
}
