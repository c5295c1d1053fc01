//! A parsed source unit and the lookups shared by the analysis passes.

use oxc_ast::ast::{
    AssignmentExpression, BindingPatternKind, Declaration, Expression, ObjectExpression, Program,
    Statement, VariableDeclaration,
};
use oxc_span::Span;

use crate::keys::member_expression_name;

/// One parsed source buffer.
///
/// The program is borrowed from the caller's arena for `'a`; nothing here owns
/// or mutates AST nodes.
#[derive(Clone, Copy)]
pub struct SourceUnit<'a> {
    pub program: &'a Program<'a>,
    pub source: &'a str,
}

impl<'a> SourceUnit<'a> {
    pub fn new(program: &'a Program<'a>, source: &'a str) -> Self {
        Self { program, source }
    }

    /// Source text covered by `span`.
    #[inline]
    pub fn text(&self, span: Span) -> &'a str {
        span.source_text(self.source)
    }

    /// The statement list searched for post-definition declarations: top level
    /// statements, declarations inside `export` wrappers and the contents of
    /// plain blocks.
    pub fn statements(&self) -> Vec<&'a Statement<'a>> {
        let mut out = Vec::with_capacity(self.program.body.len());
        collect_statements(&self.program.body, &mut out);
        out
    }

    /// Every `object.property = <value>` assignment in the statement list, in
    /// source order.
    pub fn member_assignments(
        &self,
        object: &str,
        property: &str,
    ) -> Vec<&'a AssignmentExpression<'a>> {
        let mut out = Vec::new();
        for stmt in self.statements() {
            let Statement::ExpressionStatement(expr_stmt) = stmt else {
                continue;
            };
            collect_member_assignments(&expr_stmt.expression, object, property, &mut out);
        }
        out
    }

    /// Resolve `name` to the object literal it is initialized with, when a
    /// same-unit `const`/`let`/`var` declares it that way.
    ///
    /// This is a single lookup: an identifier bound to another identifier, a
    /// call or an import is not followed.
    pub fn resolve_object_binding(&self, name: &str) -> Option<&'a ObjectExpression<'a>> {
        let mut found = None;
        for stmt in self.statements() {
            let decl = match stmt {
                Statement::VariableDeclaration(decl) => decl,
                Statement::ExportNamedDeclaration(export) => match &export.declaration {
                    Some(Declaration::VariableDeclaration(decl)) => decl,
                    _ => continue,
                },
                _ => continue,
            };
            if let Some(init) = find_declarator_init(decl, name) {
                found = Some(init);
            }
        }
        match found?.get_inner_expression() {
            Expression::ObjectExpression(object) => Some(object),
            _ => None,
        }
    }
}

fn collect_statements<'a>(stmts: &'a [Statement<'a>], out: &mut Vec<&'a Statement<'a>>) {
    for stmt in stmts {
        match stmt {
            Statement::BlockStatement(block) => collect_statements(&block.body, out),
            _ => out.push(stmt),
        }
    }
}

fn find_declarator_init<'a>(
    decl: &'a VariableDeclaration<'a>,
    name: &str,
) -> Option<&'a Expression<'a>> {
    decl.declarations.iter().find_map(|declarator| {
        let BindingPatternKind::BindingIdentifier(id) = &declarator.id.kind else {
            return None;
        };
        if id.name.as_str() == name {
            declarator.init.as_ref()
        } else {
            None
        }
    })
}

fn collect_member_assignments<'a>(
    expr: &'a Expression<'a>,
    object: &str,
    property: &str,
    out: &mut Vec<&'a AssignmentExpression<'a>>,
) {
    match expr {
        Expression::AssignmentExpression(assign) => {
            if let Some(member) = assign.left.as_member_expression() {
                if member_expression_name(member, object) == Some(property) {
                    out.push(assign);
                }
            }
            // `A.defaultProps = B.defaultProps = {...}`
            collect_member_assignments(&assign.right, object, property, out);
        }
        Expression::SequenceExpression(seq) => {
            for expr in &seq.expressions {
                collect_member_assignments(expr, object, property, out);
            }
        }
        Expression::ParenthesizedExpression(paren) => {
            collect_member_assignments(&paren.expression, object, property, out);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use oxc_span::GetSpan;

    use crate::test_utils::with_unit;

    #[test]
    fn test_member_assignments_in_blocks_and_sequences() {
        let source = r#"
Foo.defaultProps = { a: 1 };
{
    Foo.defaultProps = { b: 1 };
}
Foo.propTypes = {}, Foo['defaultProps'] = { c: 1 };
Bar.defaultProps = {};
"#;
        with_unit(source, |unit| {
            let found = unit.member_assignments("Foo", "defaultProps");
            let texts: Vec<_> = found.iter().map(|a| unit.text(a.right.span())).collect();
            assert_eq!(texts, vec!["{ a: 1 }", "{ b: 1 }", "{ c: 1 }"]);
        });
    }

    #[test]
    fn test_resolve_object_binding() {
        let source = r#"
const defaults = { a: 1 };
export const exported = { b: 2 };
const other = defaults;
const called = require('./defaults');
"#;
        with_unit(source, |unit| {
            assert!(unit.resolve_object_binding("defaults").is_some());
            assert!(unit.resolve_object_binding("exported").is_some());
            assert!(unit.resolve_object_binding("other").is_none());
            assert!(unit.resolve_object_binding("called").is_none());
            assert!(unit.resolve_object_binding("missing").is_none());
        });
    }
}
