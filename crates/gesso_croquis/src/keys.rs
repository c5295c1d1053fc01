//! Static key resolution for object properties, class members and member
//! expressions.

use gesso_carton::CompactString;
use oxc_ast::ast::{Expression, MemberExpression, PropertyKey};

/// Resolve an object/class key to its static name.
///
/// Computed keys are never static, even `['a']`, since they cannot be ordered
/// or hoisted by name.
pub fn property_key_name(key: &PropertyKey<'_>, computed: bool) -> Option<CompactString> {
    if computed {
        return None;
    }
    match key {
        PropertyKey::StaticIdentifier(id) => Some(CompactString::new(id.name.as_str())),
        PropertyKey::StringLiteral(lit) => Some(CompactString::new(lit.value.as_str())),
        PropertyKey::NumericLiteral(lit) => Some(CompactString::new(lit.value.to_string())),
        _ => None,
    }
}

/// Whether a non-computed key is written as a plain identifier.
#[inline]
pub fn is_identifier_key(key: &PropertyKey<'_>) -> bool {
    matches!(key, PropertyKey::StaticIdentifier(_))
}

/// Static property name of a member expression: `a.b` or `a['b']`.
pub fn member_property_name<'b>(member: &'b MemberExpression<'_>) -> Option<&'b str> {
    match member {
        MemberExpression::StaticMemberExpression(expr) => Some(expr.property.name.as_str()),
        MemberExpression::ComputedMemberExpression(expr) => match &expr.expression {
            Expression::StringLiteral(lit) => Some(lit.value.as_str()),
            _ => None,
        },
        MemberExpression::PrivateFieldExpression(_) => None,
    }
}

/// Property name of `object.<name>` when the object is the identifier `object`.
pub fn member_expression_name<'b>(
    member: &'b MemberExpression<'_>,
    object: &str,
) -> Option<&'b str> {
    match member.object().get_inner_expression() {
        Expression::Identifier(id) if id.name.as_str() == object => member_property_name(member),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::with_unit;
    use oxc_ast::ast::{ClassElement, Statement};

    #[test]
    fn test_class_member_keys() {
        let source = "class A { foo() {} 'bar'() {} 1() {} [baz]() {} ['qux']() {} }";
        with_unit(source, |unit| {
            let Statement::ClassDeclaration(class) = &unit.program.body[0] else {
                panic!("expected class");
            };
            let names: Vec<_> = class
                .body
                .body
                .iter()
                .map(|element| match element {
                    ClassElement::MethodDefinition(method) => {
                        property_key_name(&method.key, method.computed)
                    }
                    _ => None,
                })
                .collect();
            assert_eq!(
                names,
                vec![
                    Some("foo".into()),
                    Some("bar".into()),
                    Some("1".into()),
                    None,
                    None
                ]
            );
        });
    }

    #[test]
    fn test_member_names() {
        let source = "Foo.defaultProps; Foo['propTypes']; Foo[key]; Bar.defaultProps;";
        with_unit(source, |unit| {
            let names: Vec<_> = unit
                .program
                .body
                .iter()
                .map(|stmt| {
                    let Statement::ExpressionStatement(expr) = stmt else {
                        return None;
                    };
                    let member = expr.expression.as_member_expression()?;
                    member_expression_name(member, "Foo")
                })
                .collect();
            assert_eq!(names, vec![Some("defaultProps"), Some("propTypes"), None, None]);
        });
    }
}
