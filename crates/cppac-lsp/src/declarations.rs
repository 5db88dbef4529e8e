//! Cross-file declaration aggregation and the property catalog.

use cppac_common::limits::{MAX_INCLUDE_DEPTH, MAX_TYPEDEF_CHAIN};
use cppac_parser::{NodeIndex, NodeKind};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::document::Document;
use crate::document_graph::DocumentGraph;
use crate::file_db::DocumentSource;

/// A declaration together with the document whose arena holds it.
#[derive(Clone, Copy, Debug)]
pub struct DeclRef<'a> {
    pub document: &'a Document,
    pub node: NodeIndex,
}

impl<'a> DeclRef<'a> {
    pub fn kind(&self) -> Option<&'a NodeKind> {
        self.document.arena().kind(self.node)
    }

    pub fn name(&self) -> Option<&'a str> {
        self.kind()?.declared_name()
    }
}

/// One data member of an aggregate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInfo {
    pub name: String,
    /// Base name of the member's declared type.
    pub type_name: String,
}

/// File-scope declarations of `document` and of every document it includes,
/// included documents first, depth-first in directive order.
///
/// Each document contributes its declarations once, at its first visit. A
/// document already on the current include path is skipped.
pub fn outer_declarations<'g, S: DocumentSource>(
    graph: &'g DocumentGraph<S>,
    document: &'g Document,
) -> Vec<DeclRef<'g>> {
    let mut out = Vec::new();
    let mut walk = IncludeWalk::default();
    collect_outer(graph, document, &mut walk, &mut out, 0);
    out
}

#[derive(Default)]
struct IncludeWalk<'g> {
    on_path: FxHashSet<&'g str>,
    finished: FxHashSet<&'g str>,
}

fn collect_outer<'g, S: DocumentSource>(
    graph: &'g DocumentGraph<S>,
    document: &'g Document,
    walk: &mut IncludeWalk<'g>,
    out: &mut Vec<DeclRef<'g>>,
    depth: usize,
) {
    let path = document.path();
    if walk.finished.contains(path) {
        return;
    }
    if !walk.on_path.insert(path) {
        trace!(path, "include cycle, skipping");
        return;
    }

    if depth < MAX_INCLUDE_DEPTH {
        for include in graph.includes_of(path) {
            match graph.document(include) {
                Some(included) => collect_outer(graph, included, walk, out, depth + 1),
                None => trace!(include = %include, "include not loaded"),
            }
        }
    }

    out.extend(
        document
            .root_declarations()
            .iter()
            .map(|&node| DeclRef { document, node }),
    );
    walk.on_path.remove(path);
    walk.finished.insert(path);
}

/// Data members of the aggregate named `type_name`, as visible from
/// `document`.
///
/// Uses the first definition in aggregation order; forward declarations are
/// not definitions. When no aggregate has the name, a typedef of that name is
/// followed to its target. Unknown types yield an empty list.
pub fn properties_of<S: DocumentSource>(
    graph: &DocumentGraph<S>,
    document: &Document,
    type_name: &str,
) -> Vec<PropertyInfo> {
    properties_in(&outer_declarations(graph, document), type_name)
}

/// `properties_of` over declarations that have already been aggregated.
pub fn properties_in(declarations: &[DeclRef<'_>], type_name: &str) -> Vec<PropertyInfo> {
    let mut wanted = type_name.to_string();

    for _ in 0..=MAX_TYPEDEF_CHAIN {
        if let Some(aggregate) = find_definition(declarations, &wanted) {
            return members_of(aggregate);
        }
        match follow_typedef(declarations, &wanted) {
            Some(TypedefTarget::Aggregate(aggregate)) => return members_of(aggregate),
            Some(TypedefTarget::Name(next)) if next != wanted => {
                trace!(from = %wanted, to = %next, "following typedef");
                wanted = next;
            }
            _ => break,
        }
    }

    Vec::new()
}

fn find_definition<'g>(declarations: &[DeclRef<'g>], name: &str) -> Option<DeclRef<'g>> {
    declarations.iter().copied().find(|decl| {
        matches!(
            decl.kind(),
            Some(NodeKind::StructOrClassDeclaration(data)) if data.has_body && data.name == name
        )
    })
}

enum TypedefTarget<'g> {
    Aggregate(DeclRef<'g>),
    Name(String),
}

fn follow_typedef<'g>(declarations: &[DeclRef<'g>], name: &str) -> Option<TypedefTarget<'g>> {
    declarations.iter().find_map(|decl| {
        let arena = decl.document.arena();
        let typedef = arena.get_typedef(decl.node)?;
        if typedef.name != name {
            return None;
        }
        let inline = arena
            .get_struct(typedef.aggregate)
            .filter(|data| data.has_body)
            .map(|_| DeclRef {
                document: decl.document,
                node: typedef.aggregate,
            });
        Some(match inline {
            Some(aggregate) => TypedefTarget::Aggregate(aggregate),
            None => TypedefTarget::Name(arena.type_name(typedef.ty).to_string()),
        })
    })
}

fn members_of(aggregate: DeclRef<'_>) -> Vec<PropertyInfo> {
    let arena = aggregate.document.arena();
    let Some(data) = arena.get_struct(aggregate.node) else {
        return Vec::new();
    };
    data.members
        .iter()
        .filter_map(|&member| {
            let var = arena.get_variable(member)?;
            (!var.name.is_empty()).then(|| PropertyInfo {
                name: var.name.clone(),
                type_name: arena.type_name(var.ty).to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../tests/declarations_tests.rs"]
mod declarations_tests;
