//! Lexical scope resolution.
//!
//! Scopes are approximated by the ancestor chain of a node: every ancestor
//! contributes the declarations it introduces, innermost first. Declarations
//! later in the same scope than the cursor are visible too.

use cppac_parser::{NodeArena, NodeIndex};
use tracing::trace;

use crate::completions::{CompletionKind, Suggestion};
use crate::document::Document;

/// Names of the variables, parameters, members and enumerators visible from
/// `node`, innermost first, each name once.
pub fn visible_variable_names(arena: &NodeArena, node: NodeIndex) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for scope in arena.ancestors(node) {
        for &decl in arena.declarations(scope) {
            let Some(var) = arena.get_variable(decl) else {
                continue;
            };
            let name = var.name.as_str();
            if name.is_empty() || names.contains(&name) {
                continue;
            }
            names.push(name);
        }
    }
    names
}

/// The innermost variable or parameter declaration named `name` visible from
/// `node`.
pub fn find_variable(arena: &NodeArena, node: NodeIndex, name: &str) -> Option<NodeIndex> {
    arena.ancestors(node).find_map(|scope| {
        arena
            .declarations(scope)
            .iter()
            .copied()
            .find(|&decl| arena.get_variable(decl).is_some_and(|var| var.name == name))
    })
}

/// Identifier completions at `node` for the typed `partial_text`.
pub fn suggest_identifiers(
    document: &Document,
    node: NodeIndex,
    partial_text: &str,
) -> Vec<Suggestion> {
    let names = visible_variable_names(document.arena(), node);
    trace!(visible = names.len(), partial = partial_text, "scope walk");

    let partial_input_length = partial_text.chars().count();
    names
        .into_iter()
        .filter(|name| name.starts_with(partial_text))
        .map(|name| Suggestion {
            text: name.to_string(),
            partial_input_length,
            kind: CompletionKind::Identifier,
        })
        .collect()
}

#[cfg(test)]
#[path = "../tests/scope_tests.rs"]
mod scope_tests;
