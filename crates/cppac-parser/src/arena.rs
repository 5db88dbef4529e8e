//! NodeArena storage and node creation.
//!
//! Nodes are created bottom-up: every child already exists when its parent is
//! added, so `add_node` can fill in the children's parent handles and compute
//! the parent's scope declarations in one step.

use cppac_common::Span;

use crate::base::NodeIndex;
use crate::node::{BlockData, Node, NodeKind, NodeList};

#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    pub(crate) nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a node, linking its children back to it.
    pub fn add_node(&mut self, kind: NodeKind, span: Span) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);

        for child in kind.children() {
            self.set_parent(child, index);
        }
        let declarations = self.scope_declarations(&kind);

        self.nodes.push(Node {
            kind,
            span,
            parent: NodeIndex::NONE,
            declarations,
        });
        index
    }

    /// Give an anonymous aggregate the name a typedef introduces for it
    /// (`typedef struct { ... } Point;`).
    pub(crate) fn name_anonymous_aggregate(&mut self, index: NodeIndex, name: &str) {
        if let Some(Node {
            kind: NodeKind::StructOrClassDeclaration(data),
            ..
        }) = self.nodes.get_mut(index.0 as usize)
            && data.name.is_empty()
        {
            data.name = name.to_string();
        }
    }

    #[inline]
    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if let Some(node) = self.nodes.get_mut(child.0 as usize) {
            node.parent = parent;
        }
    }

    /// Declarations a node of this kind introduces into the scope it forms.
    fn scope_declarations(&self, kind: &NodeKind) -> NodeList {
        match kind {
            NodeKind::TranslationUnit(BlockData { statements })
            | NodeKind::Block(BlockData { statements }) => self.hoist_declarations(statements),
            NodeKind::NamespaceDeclaration(data) => self.hoist_declarations(&data.statements),
            NodeKind::FunctionDeclaration(data) => data.parameters.iter().copied().collect(),
            NodeKind::StructOrClassDeclaration(data) => data.members.iter().copied().collect(),
            NodeKind::LoopStatement(data) => self.hoist_declarations(&data.initializer),
            _ => NodeList::new(),
        }
    }

    /// Declarations among `statements`, with the aggregates defined inline by
    /// typedefs and the enumerators of unscoped enums lifted alongside.
    fn hoist_declarations(&self, statements: &[NodeIndex]) -> NodeList {
        let mut out = NodeList::new();
        for &statement in statements {
            let Some(node) = self.nodes.get(statement.0 as usize) else {
                continue;
            };
            match &node.kind {
                NodeKind::TypedefDeclaration(data) => {
                    if let Some(aggregate) = data.aggregate.to_option() {
                        out.push(aggregate);
                        self.push_enumerators(aggregate, &mut out);
                    }
                    out.push(statement);
                }
                NodeKind::EnumDeclaration(_) => {
                    out.push(statement);
                    self.push_enumerators(statement, &mut out);
                }
                kind if kind.is_declaration() => out.push(statement),
                _ => {}
            }
        }
        out
    }

    fn push_enumerators(&self, index: NodeIndex, out: &mut NodeList) {
        if let Some(Node {
            kind: NodeKind::EnumDeclaration(data),
            ..
        }) = self.nodes.get(index.0 as usize)
        {
            out.extend(data.enumerators.iter().copied());
        }
    }
}
