//! Completion dispatch.
//!
//! Given a caret position, decide whether the user is completing a plain
//! identifier or a member of some object, and route to the scope resolver or
//! to type inference and the property catalog respectively.

use cppac_common::{HostPosition, Position};
use cppac_parser::{NodeIndex, NodeKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::document::Document;
use crate::document_graph::DocumentGraph;
use crate::error::{CompletionError, DocumentError, InternalError};
use crate::file_db::DocumentSource;
use crate::position_resolver::{node_at, token_before};
use crate::scope::suggest_identifiers;
use crate::type_inference::{TypeInference, is_inferable, is_property};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompletionKind {
    Identifier,
}

/// One completion candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Text to insert.
    pub text: String,
    /// Number of characters before the caret that the text replaces.
    pub partial_input_length: usize,
    pub kind: CompletionKind,
}

/// What kind of completion a position calls for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionTarget {
    /// Complete a variable name; `node` is the identifier being typed.
    Identifier { node: NodeIndex },
    /// Complete a member of the object of `member_expression`.
    Property {
        member_expression: NodeIndex,
        partial: String,
    },
}

/// Classify the completion at `position` (the character before the caret).
///
/// 1. No node at the position: nothing to complete.
/// 2. A member expression whose operator is the character before the caret
///    (`p.` or `p->`): property completion with nothing typed yet. Any other
///    non-identifier: nothing to complete.
/// 3. An identifier in the property slot (`x` in `p.x`): property completion
///    with the identifier as the typed prefix.
/// 4. Any other identifier, including the object of a member access:
///    identifier completion.
pub fn classify(document: &Document, position: Position) -> Option<CompletionTarget> {
    let Some(node) = node_at(document, position) else {
        debug!(
            line = position.line,
            column = position.column,
            "no node at position"
        );
        return None;
    };
    let arena = document.arena();

    match arena.kind(node)? {
        NodeKind::Identifier(_) => {}
        NodeKind::MemberExpression(_) => {
            let after_operator = token_before(document, position)
                .is_some_and(|token| token.kind.is_member_access());
            return after_operator.then(|| CompletionTarget::Property {
                member_expression: node,
                partial: String::new(),
            });
        }
        other => {
            debug!(kind = other.name(), "no completion for node");
            return None;
        }
    }

    if is_property(arena, node) {
        return Some(CompletionTarget::Property {
            member_expression: arena.parent(node),
            partial: document.text_of(node).to_string(),
        });
    }

    Some(CompletionTarget::Identifier { node })
}

/// Member completions for the object of `member_expression`.
pub fn suggest_properties<S: DocumentSource>(
    graph: &DocumentGraph<S>,
    document: &Document,
    member_expression: NodeIndex,
    partial_text: &str,
) -> Result<Vec<Suggestion>, InternalError> {
    let arena = document.arena();
    let Some(member) = arena.get_member_expression(member_expression) else {
        return Err(InternalError::BrokenTree(
            "property completion target is not a member expression".to_string(),
        ));
    };

    // Only identifiers and member chains reach type inference.
    if !is_inferable(arena, member.object) {
        debug!("member access on an expression whose type is not tracked");
        return Ok(Vec::new());
    }

    let inference = TypeInference::new(graph, document);
    let Some(type_name) = inference.type_of(member.object)? else {
        debug!("could not infer type of object");
        return Ok(Vec::new());
    };

    let partial_input_length = partial_text.chars().count();
    Ok(inference
        .properties_of(&type_name)
        .into_iter()
        .filter(|property| property.name.starts_with(partial_text))
        .map(|property| Suggestion {
            text: property.name,
            partial_input_length,
            kind: CompletionKind::Identifier,
        })
        .collect())
}

/// Completion entry point for hosts. Owns the document graph.
pub struct CompletionEngine<S: DocumentSource> {
    graph: DocumentGraph<S>,
}

impl<S: DocumentSource> CompletionEngine<S> {
    pub fn new(graph: DocumentGraph<S>) -> Self {
        CompletionEngine { graph }
    }

    pub fn graph(&self) -> &DocumentGraph<S> {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut DocumentGraph<S> {
        &mut self.graph
    }

    /// Suggestions for the caret at `caret` in the document at `path`.
    ///
    /// Returns an empty list when there is nothing to complete, including when
    /// the document cannot be loaded. Errors are reserved for a caret in
    /// column zero and for internal defects.
    pub fn get_suggestions(
        &mut self,
        path: &str,
        caret: HostPosition,
    ) -> Result<Vec<Suggestion>, CompletionError> {
        let Some(position) = caret.to_internal() else {
            return Err(CompletionError::InvalidPosition {
                line: caret.line,
                column: caret.column,
            });
        };

        let key = match self.graph.ensure(path) {
            Ok(key) => key,
            Err(err) => {
                warn!(path, error = %err, "document unavailable for completion");
                return Ok(Vec::new());
            }
        };
        let Some(document) = self.graph.document(&key) else {
            return Ok(Vec::new());
        };

        debug!(
            path = %key,
            line = position.line,
            column = position.column,
            "completion request"
        );

        let suggestions = match classify(document, position) {
            None => Vec::new(),
            Some(CompletionTarget::Identifier { node }) => {
                suggest_identifiers(document, node, document.text_of(node))
            }
            Some(CompletionTarget::Property {
                member_expression,
                partial,
            }) => suggest_properties(&self.graph, document, member_expression, &partial)?,
        };

        debug!(count = suggestions.len(), "completion result");
        Ok(suggestions)
    }

    pub fn on_edit(&mut self, path: &str) -> Result<(), DocumentError> {
        self.graph.on_edit(path)
    }

    pub fn on_open(&mut self, path: &str) -> Result<(), DocumentError> {
        self.graph.on_open(path)
    }
}

#[cfg(test)]
#[path = "../tests/completions_tests.rs"]
mod completions_tests;
