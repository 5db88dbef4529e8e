//! A parsed document: text, tokens, syntax tree and include directives.

use cppac_common::LineMap;
use cppac_parser::{NodeArena, NodeIndex, ParserState};
use cppac_scanner::{Preprocessor, Token};

/// One parsed document. Immutable; an edit replaces the whole value.
#[derive(Debug)]
pub struct Document {
    path: String,
    text: String,
    line_map: LineMap,
    tokens: Vec<Token>,
    arena: NodeArena,
    root: NodeIndex,
    include_directives: Vec<String>,
}

impl Document {
    /// Tokenize, preprocess and parse `text`.
    pub fn parse(path: impl Into<String>, text: impl Into<String>) -> Document {
        let text = text.into();
        let preprocessed = Preprocessor::new(&text).process();
        let (arena, root) = {
            let mut parser = ParserState::new(&text, &preprocessed.tokens);
            let root = parser.parse_translation_unit();
            (parser.into_arena(), root)
        };

        Document {
            path: path.into(),
            line_map: LineMap::build(&text),
            tokens: preprocessed.tokens,
            arena,
            root,
            include_directives: preprocessed.included_paths,
            text,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_map(&self) -> &LineMap {
        &self.line_map
    }

    /// Code tokens, directives removed.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    /// The translation unit node.
    pub fn root(&self) -> NodeIndex {
        self.root
    }

    /// `#include` arguments as written, in directive order.
    pub fn include_directives(&self) -> &[String] {
        &self.include_directives
    }

    /// Source text covered by a node.
    pub fn text_of(&self, node: NodeIndex) -> &str {
        self.arena.text_of(node, &self.text)
    }

    /// File-scope declarations of this document.
    pub fn root_declarations(&self) -> &[NodeIndex] {
        self.arena.declarations(self.root)
    }
}
