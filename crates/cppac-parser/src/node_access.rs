//! NodeArena access methods and position queries.

use std::fmt::Write as _;

use cppac_scanner::Token;

use crate::arena::NodeArena;
use crate::base::NodeIndex;
use crate::node::*;

impl NodeArena {
    /// Get a node by index
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    #[inline]
    pub fn kind(&self, index: NodeIndex) -> Option<&NodeKind> {
        self.get(index).map(|node| &node.kind)
    }

    #[inline]
    pub fn parent(&self, index: NodeIndex) -> NodeIndex {
        self.get(index).map_or(NodeIndex::NONE, |node| node.parent)
    }

    /// Declarations `index` introduces into the scope it forms.
    pub fn declarations(&self, index: NodeIndex) -> &[NodeIndex] {
        self.get(index)
            .map(|node| node.declarations.as_slice())
            .unwrap_or(&[])
    }

    /// `index` followed by each of its ancestors up to the translation unit.
    pub fn ancestors(&self, index: NodeIndex) -> Ancestors<'_> {
        Ancestors {
            arena: self,
            current: index,
        }
    }

    /// Source text covered by a node.
    pub fn text_of<'a>(&self, index: NodeIndex, source: &'a str) -> &'a str {
        self.get(index).map_or("", |node| node.span.slice(source))
    }

    // ------------------------------------------------------------------
    // Kind accessors
    // ------------------------------------------------------------------

    pub fn get_identifier(&self, index: NodeIndex) -> Option<&IdentifierData> {
        match self.kind(index)? {
            NodeKind::Identifier(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_member_expression(&self, index: NodeIndex) -> Option<&MemberExprData> {
        match self.kind(index)? {
            NodeKind::MemberExpression(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_variable(&self, index: NodeIndex) -> Option<&VariableData> {
        match self.kind(index)? {
            NodeKind::VariableOrParameterDeclaration(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_struct(&self, index: NodeIndex) -> Option<&StructData> {
        match self.kind(index)? {
            NodeKind::StructOrClassDeclaration(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_typedef(&self, index: NodeIndex) -> Option<&TypedefData> {
        match self.kind(index)? {
            NodeKind::TypedefDeclaration(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_type(&self, index: NodeIndex) -> Option<&TypeData> {
        match self.kind(index)? {
            NodeKind::Type(data) => Some(data),
            _ => None,
        }
    }

    /// Base type name of a declaration's type node, or `""` when untyped.
    pub fn type_name(&self, type_index: NodeIndex) -> &str {
        self.get_type(type_index).map_or("", |ty| ty.name.as_str())
    }

    // ------------------------------------------------------------------
    // Position queries
    // ------------------------------------------------------------------

    /// The innermost node whose span contains the byte at `offset`.
    ///
    /// Among nodes with equally small spans (an expression statement without
    /// a semicolon and its expression, say) the deepest one wins.
    pub fn node_at_offset(&self, offset: u32) -> Option<NodeIndex> {
        let mut best: Option<(NodeIndex, u32, usize)> = None;

        for (i, node) in self.nodes.iter().enumerate() {
            if !node.span.contains(offset) {
                continue;
            }
            let index = NodeIndex(i as u32);
            let len = node.span.len();
            let better = match best {
                None => true,
                Some((_, best_len, _)) if len < best_len => true,
                Some((_, best_len, best_depth)) if len == best_len => {
                    self.depth(index) > best_depth
                }
                Some(_) => false,
            };
            if better {
                best = Some((index, len, self.depth(index)));
            }
        }

        best.map(|(index, _, _)| index)
    }

    fn depth(&self, index: NodeIndex) -> usize {
        self.ancestors(index).count()
    }

    /// Render the subtree under `root` as an indented outline.
    pub fn dump(&self, root: NodeIndex) -> String {
        let mut out = String::new();
        self.dump_node(root, 0, &mut out);
        out
    }

    fn dump_node(&self, index: NodeIndex, indent: usize, out: &mut String) {
        let Some(node) = self.get(index) else {
            return;
        };

        let detail = match &node.kind {
            NodeKind::Identifier(data) => format!(" {}", data.name),
            NodeKind::Type(data) => {
                let mut text = format!(" {}", data.name);
                text.push_str(&"*".repeat(data.pointer_depth as usize));
                if data.is_reference {
                    text.push('&');
                }
                text
            }
            NodeKind::Literal(data) => format!(" {}", data.text),
            NodeKind::MemberExpression(data) => {
                let op = if data.operator == cppac_scanner::SyntaxKind::Arrow {
                    "->"
                } else {
                    "."
                };
                format!(" {op}")
            }
            kind => match kind.declared_name() {
                Some(name) if !name.is_empty() => format!(" {name}"),
                _ => String::new(),
            },
        };

        let _ = writeln!(
            out,
            "{:indent$}{}{} [{}..{}]",
            "",
            node.kind.name(),
            detail,
            node.span.start,
            node.span.end,
            indent = indent * 2
        );

        let mut children = node.kind.children();
        children.sort_by_key(|child| self.get(*child).map_or(0, |c| c.span.start));
        for child in children {
            self.dump_node(child, indent + 1, out);
        }
    }
}

/// Iterator over a node and its ancestors.
pub struct Ancestors<'a> {
    arena: &'a NodeArena,
    current: NodeIndex,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        let current = self.current.to_option()?;
        self.current = self.arena.parent(current);
        Some(current)
    }
}

/// The token whose span contains the byte at `offset`.
pub fn token_at_offset(tokens: &[Token], offset: u32) -> Option<Token> {
    let idx = tokens.partition_point(|token| token.span.end <= offset);
    tokens
        .get(idx)
        .copied()
        .filter(|token| token.span.contains(offset))
}
