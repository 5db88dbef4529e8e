//! Static type names of identifiers and member accesses.
//!
//! Only two expression shapes are understood: identifiers and member
//! expressions. The completion dispatcher filters everything else out before
//! calling in here, so any other shape is reported as an internal error
//! rather than as "unknown type".

use cppac_parser::{NodeArena, NodeIndex, NodeKind};
use once_cell::unsync::OnceCell;

use crate::declarations::{DeclRef, PropertyInfo, outer_declarations, properties_in};
use crate::document::Document;
use crate::document_graph::DocumentGraph;
use crate::error::InternalError;
use crate::file_db::DocumentSource;
use crate::scope::find_variable;

/// Whether `node` occupies the property slot of its parent member expression
/// (`x` in `p.x`, but not `p`).
pub fn is_property(arena: &NodeArena, node: NodeIndex) -> bool {
    arena
        .get_member_expression(arena.parent(node))
        .is_some_and(|member| member.property == node)
}

/// Whether `expression` is a chain of member accesses rooted at an
/// identifier, i.e. a shape `type_of` can handle all the way down.
pub fn is_inferable(arena: &NodeArena, expression: NodeIndex) -> bool {
    let mut current = expression;
    loop {
        match arena.kind(current) {
            Some(NodeKind::Identifier(_)) => return true,
            Some(NodeKind::MemberExpression(member)) => current = member.object,
            _ => return false,
        }
    }
}

/// Declared type name of `expression`, `Ok(None)` when it cannot be
/// determined (undeclared variable, unknown member, unknown type).
pub fn type_of<S: DocumentSource>(
    graph: &DocumentGraph<S>,
    document: &Document,
    expression: NodeIndex,
) -> Result<Option<String>, InternalError> {
    TypeInference::new(graph, document).type_of(expression)
}

/// Type queries against one document for the duration of one request.
///
/// Cross-file declarations are aggregated on first use and shared by every
/// hop of a member chain and by the final member listing.
pub struct TypeInference<'g, S: DocumentSource> {
    graph: &'g DocumentGraph<S>,
    document: &'g Document,
    declarations: OnceCell<Vec<DeclRef<'g>>>,
}

impl<'g, S: DocumentSource> TypeInference<'g, S> {
    pub fn new(graph: &'g DocumentGraph<S>, document: &'g Document) -> Self {
        TypeInference {
            graph,
            document,
            declarations: OnceCell::new(),
        }
    }

    fn declarations(&self) -> &[DeclRef<'g>] {
        self.declarations
            .get_or_init(|| outer_declarations(self.graph, self.document))
    }

    /// Data members of the aggregate named `type_name`.
    pub fn properties_of(&self, type_name: &str) -> Vec<PropertyInfo> {
        properties_in(self.declarations(), type_name)
    }

    pub fn type_of(&self, expression: NodeIndex) -> Result<Option<String>, InternalError> {
        let arena = self.document.arena();
        match arena.kind(expression) {
            Some(NodeKind::MemberExpression(member)) => {
                if member.property.is_none() {
                    return Ok(None);
                }
                self.type_of_property(member.property)
            }
            Some(NodeKind::Identifier(_)) if is_property(arena, expression) => {
                self.type_of_property(expression)
            }
            Some(NodeKind::Identifier(identifier)) => Ok(type_of_variable(
                arena,
                expression,
                &identifier.name,
            )),
            Some(other) => Err(InternalError::UnsupportedExpression { kind: other.name() }),
            None => Err(InternalError::BrokenTree(format!(
                "expression node {} does not exist",
                expression.0
            ))),
        }
    }

    fn type_of_property(&self, identifier: NodeIndex) -> Result<Option<String>, InternalError> {
        let arena = self.document.arena();
        let Some(member) = arena.get_member_expression(arena.parent(identifier)) else {
            return Err(InternalError::BrokenTree(
                "property identifier outside a member expression".to_string(),
            ));
        };
        let Some(name) = arena.get_identifier(identifier).map(|id| id.name.as_str()) else {
            return Err(InternalError::BrokenTree(
                "member expression property is not an identifier".to_string(),
            ));
        };

        let Some(object_type) = self.type_of(member.object)? else {
            return Ok(None);
        };
        Ok(self
            .properties_of(&object_type)
            .into_iter()
            .find(|property| property.name == name)
            .map(|property| property.type_name))
    }
}

fn type_of_variable(arena: &NodeArena, identifier: NodeIndex, name: &str) -> Option<String> {
    let decl = find_variable(arena, identifier, name)?;
    let var = arena.get_variable(decl)?;
    Some(arena.type_name(var.ty).to_string()).filter(|name| !name.is_empty())
}

#[cfg(test)]
#[path = "../tests/type_inference_tests.rs"]
mod type_inference_tests;
