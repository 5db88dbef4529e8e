//! Parser state and token cursor helpers.
//!
//! `ParserState` is a recursive-descent parser over the preprocessed token
//! stream. It never fails: missing punctuation is tolerated, unexpected tokens
//! are skipped, and every loop makes progress, so a half-typed document still
//! yields a tree with parent links for the completion engine to walk.

use cppac_common::Span;
use cppac_common::limits::MAX_PARSE_DEPTH;
use cppac_scanner::{SyntaxKind, Token};
use tracing::trace;

use crate::arena::NodeArena;
use crate::base::NodeIndex;
use crate::node::{BlockData, NodeKind};

/// Where a declaration appears; decides how `name(` and members are read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DeclContext {
    File,
    Block,
    Member,
}

pub struct ParserState<'a> {
    pub(crate) source: &'a str,
    pub(crate) tokens: &'a [Token],
    pub(crate) pos: usize,
    pub(crate) arena: NodeArena,
    pub(crate) depth: u32,
}

impl<'a> ParserState<'a> {
    pub fn new(source: &'a str, tokens: &'a [Token]) -> Self {
        ParserState {
            source,
            tokens,
            pos: 0,
            arena: NodeArena::with_capacity(tokens.len()),
            depth: 0,
        }
    }

    pub fn get_arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn into_arena(self) -> NodeArena {
        self.arena
    }

    /// Parse the whole token stream. Returns the translation unit node.
    ///
    /// The translation unit spans from the first to the last token, so a
    /// position in trailing whitespace is not inside any node.
    pub fn parse_translation_unit(&mut self) -> NodeIndex {
        let mut statements = Vec::new();
        while !self.is_eof() {
            let before = self.pos;
            statements.extend(self.parse_statement(DeclContext::File));
            if self.pos == before {
                self.advance();
            }
        }

        let span = match (self.tokens.first(), self.tokens.last()) {
            (Some(first), Some(last)) => Span::new(first.span.start, last.span.end),
            _ => Span::default(),
        };
        let root = self
            .arena
            .add_node(NodeKind::TranslationUnit(BlockData { statements }), span);
        trace!(
            tokens = self.tokens.len(),
            nodes = self.arena.len(),
            "parsed translation unit"
        );
        root
    }

    // =========================================================================
    // Token cursor
    // =========================================================================

    #[inline]
    pub(crate) fn kind_at(&self, index: usize) -> SyntaxKind {
        self.tokens
            .get(index)
            .map_or(SyntaxKind::EndOfFile, |token| token.kind)
    }

    #[inline]
    pub(crate) fn current(&self) -> SyntaxKind {
        self.kind_at(self.pos)
    }

    #[inline]
    pub(crate) fn peek(&self, ahead: usize) -> SyntaxKind {
        self.kind_at(self.pos + ahead)
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(crate) fn text_at(&self, index: usize) -> &'a str {
        self.tokens
            .get(index)
            .map_or("", |token| token.text(self.source))
    }

    pub(crate) fn current_text(&self) -> &'a str {
        self.text_at(self.pos)
    }

    /// Start offset of the current token (end of text at EOF).
    pub(crate) fn current_start(&self) -> u32 {
        match self.tokens.get(self.pos) {
            Some(token) => token.span.start,
            None => self.prev_end(),
        }
    }

    /// End offset of the last consumed token.
    pub(crate) fn prev_end(&self) -> u32 {
        self.pos
            .checked_sub(1)
            .and_then(|idx| self.tokens.get(idx))
            .map_or(0, |token| token.span.end)
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Consume the current token if it has the given kind.
    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.current() == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Span from `start` to the end of the last consumed token.
    pub(crate) fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.prev_end().max(start))
    }

    pub(crate) fn node_start(&self, index: NodeIndex) -> u32 {
        self.arena
            .get(index)
            .map_or_else(|| self.current_start(), |node| node.span.start)
    }

    /// Skip a bracketed group starting at the current token, honoring nesting
    /// of the same bracket pair. Stops at EOF when the group is unterminated.
    pub(crate) fn skip_balanced(&mut self, open: SyntaxKind, close: SyntaxKind) {
        if self.current() != open {
            return;
        }
        let mut depth = 0usize;
        while !self.is_eof() {
            let kind = self.current();
            self.advance();
            if kind == open {
                depth += 1;
            } else if kind == close {
                depth -= 1;
                if depth == 0 {
                    return;
                }
            }
        }
    }

    /// Index just past a template argument list starting at `index` (which
    /// must be `<`), or `None` when the angle brackets do not close before a
    /// statement boundary.
    pub(crate) fn template_args_end(&self, index: usize) -> Option<usize> {
        let mut i = index;
        let mut depth = 0usize;
        loop {
            match self.kind_at(i) {
                SyntaxKind::Less => depth += 1,
                SyntaxKind::Greater => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i + 1);
                    }
                }
                SyntaxKind::GreaterGreater => {
                    if depth <= 2 {
                        return Some(i + 1);
                    }
                    depth -= 2;
                }
                SyntaxKind::Semicolon
                | SyntaxKind::OpenBrace
                | SyntaxKind::CloseBrace
                | SyntaxKind::EndOfFile => return None,
                _ => {}
            }
            i += 1;
        }
    }

    /// Index just past `Identifier (:: Identifier)*` starting at `index`.
    pub(crate) fn qualified_name_end(&self, index: usize) -> usize {
        let mut i = index;
        if self.kind_at(i) == SyntaxKind::ColonColon {
            i += 1;
        }
        if self.kind_at(i) != SyntaxKind::Identifier {
            return index;
        }
        i += 1;
        while self.kind_at(i) == SyntaxKind::ColonColon
            && self.kind_at(i + 1) == SyntaxKind::Identifier
        {
            i += 2;
        }
        i
    }

    /// Consume a possibly qualified name and return its text.
    pub(crate) fn parse_qualified_name(&mut self) -> String {
        let end = self.qualified_name_end(self.pos);
        let mut name = String::new();
        while self.pos < end {
            name.push_str(self.current_text());
            self.advance();
        }
        name
    }

    /// Run `f` one nesting level deeper, or return `None` once the nesting
    /// limit is reached.
    pub(crate) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> Option<T> {
        if self.depth >= MAX_PARSE_DEPTH {
            return None;
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        Some(result)
    }
}
