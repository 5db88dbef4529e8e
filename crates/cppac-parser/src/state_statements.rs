//! Statement parsing.

use cppac_scanner::SyntaxKind;

use crate::base::NodeIndex;
use crate::node::*;
use crate::state::{DeclContext, ParserState};

impl<'a> ParserState<'a> {
    /// Parse one statement. Declarations with several declarators, and
    /// aggregate definitions followed by declarators, produce several nodes;
    /// skipped input produces none.
    pub(crate) fn parse_statement(&mut self, ctx: DeclContext) -> Vec<NodeIndex> {
        match self.nested(|p| p.parse_statement_worker(ctx)) {
            Some(nodes) => nodes,
            None => {
                self.advance();
                Vec::new()
            }
        }
    }

    fn parse_statement_worker(&mut self, ctx: DeclContext) -> Vec<NodeIndex> {
        match self.current() {
            SyntaxKind::OpenBrace => vec![self.parse_block()],
            SyntaxKind::Semicolon => {
                self.advance();
                Vec::new()
            }
            SyntaxKind::IfKeyword => vec![self.parse_if_statement()],
            SyntaxKind::WhileKeyword => vec![self.parse_while_statement()],
            SyntaxKind::DoKeyword => vec![self.parse_do_statement()],
            SyntaxKind::ForKeyword => vec![self.parse_for_statement()],
            SyntaxKind::ReturnKeyword => vec![self.parse_return_statement()],
            SyntaxKind::BreakKeyword | SyntaxKind::ContinueKeyword => {
                vec![self.parse_jump_statement()]
            }
            SyntaxKind::TypedefKeyword => self.parse_typedef(),
            SyntaxKind::NamespaceKeyword => vec![self.parse_namespace()],
            SyntaxKind::EnumKeyword if self.enum_has_body() => self.parse_enum_statement(ctx),
            kind if kind.is_aggregate_keyword() && self.aggregate_has_definition() => {
                self.parse_aggregate_statement(ctx)
            }
            SyntaxKind::PublicKeyword
            | SyntaxKind::PrivateKeyword
            | SyntaxKind::ProtectedKeyword => {
                self.advance();
                self.eat(SyntaxKind::Colon);
                Vec::new()
            }
            // extern "C" { ... } contributes its declarations to the enclosing scope
            SyntaxKind::ExternKeyword if self.peek(1) == SyntaxKind::StringLiteral => {
                self.advance();
                self.advance();
                if self.eat(SyntaxKind::OpenBrace) {
                    let mut statements = Vec::new();
                    while !self.is_eof() && self.current() != SyntaxKind::CloseBrace {
                        let before = self.pos;
                        statements.extend(self.parse_statement(ctx));
                        if self.pos == before {
                            self.advance();
                        }
                    }
                    self.eat(SyntaxKind::CloseBrace);
                    statements
                } else {
                    self.parse_statement(ctx)
                }
            }
            SyntaxKind::Identifier if self.current_text() == "using" => {
                self.skip_to_semicolon();
                Vec::new()
            }
            SyntaxKind::Identifier if self.current_text() == "template" => {
                self.advance();
                if self.current() == SyntaxKind::Less
                    && let Some(end) = self.template_args_end(self.pos)
                {
                    self.pos = end;
                }
                Vec::new()
            }
            _ if self.looks_like_declaration() => self.parse_declaration(ctx),
            _ => self.parse_expression_statement(),
        }
    }

    fn skip_to_semicolon(&mut self) {
        while !matches!(
            self.current(),
            SyntaxKind::Semicolon | SyntaxKind::CloseBrace | SyntaxKind::EndOfFile
        ) {
            self.advance();
        }
        self.eat(SyntaxKind::Semicolon);
    }

    /// `{ statements }`. The cursor is at `{`; a missing `}` ends the block at
    /// end of input.
    pub(crate) fn parse_block(&mut self) -> NodeIndex {
        let start = self.current_start();
        self.advance();

        let mut statements = Vec::new();
        while !self.is_eof() && self.current() != SyntaxKind::CloseBrace {
            let before = self.pos;
            statements.extend(self.parse_statement(DeclContext::Block));
            if self.pos == before {
                self.advance();
            }
        }
        self.eat(SyntaxKind::CloseBrace);

        self.arena
            .add_node(NodeKind::Block(BlockData { statements }), self.span_from(start))
    }

    /// A statement in a position that holds exactly one (an `if` branch, a
    /// loop body). Several nodes are wrapped in a block.
    fn parse_embedded_statement(&mut self) -> NodeIndex {
        let mut nodes = self.parse_statement(DeclContext::Block);
        match nodes.len() {
            0 => NodeIndex::NONE,
            1 => nodes.pop().unwrap_or(NodeIndex::NONE),
            _ => {
                let start = self.node_start(nodes[0]);
                self.arena.add_node(
                    NodeKind::Block(BlockData { statements: nodes }),
                    self.span_from(start),
                )
            }
        }
    }

    /// `( expression )` of `if`, `while` and `do`.
    fn parse_condition(&mut self) -> NodeIndex {
        self.eat(SyntaxKind::OpenParen);
        let condition = if self.current() == SyntaxKind::CloseParen {
            NodeIndex::NONE
        } else {
            self.parse_expression()
        };
        self.eat(SyntaxKind::CloseParen);
        condition
    }

    fn parse_if_statement(&mut self) -> NodeIndex {
        let start = self.current_start();
        self.advance();
        let condition = self.parse_condition();
        let then_statement = self.parse_embedded_statement();
        let else_statement = if self.eat(SyntaxKind::ElseKeyword) {
            self.parse_embedded_statement()
        } else {
            NodeIndex::NONE
        };

        self.arena.add_node(
            NodeKind::IfStatement(IfStatementData {
                condition,
                then_statement,
                else_statement,
            }),
            self.span_from(start),
        )
    }

    fn parse_while_statement(&mut self) -> NodeIndex {
        let start = self.current_start();
        self.advance();
        let condition = self.parse_condition();
        let body = self.parse_embedded_statement();
        self.add_loop(LoopKind::While, Vec::new(), condition, NodeIndex::NONE, body, start)
    }

    fn parse_do_statement(&mut self) -> NodeIndex {
        let start = self.current_start();
        self.advance();
        let body = self.parse_embedded_statement();
        let condition = if self.eat(SyntaxKind::WhileKeyword) {
            self.parse_condition()
        } else {
            NodeIndex::NONE
        };
        self.eat(SyntaxKind::Semicolon);
        self.add_loop(LoopKind::DoWhile, Vec::new(), condition, NodeIndex::NONE, body, start)
    }

    /// `for (init; condition; incrementor) body` and the range form
    /// `for (decl : range) body`.
    fn parse_for_statement(&mut self) -> NodeIndex {
        let start = self.current_start();
        self.advance();
        self.eat(SyntaxKind::OpenParen);

        let initializer = match self.current() {
            SyntaxKind::Semicolon => {
                self.advance();
                Vec::new()
            }
            _ if self.looks_like_declaration() => {
                let init_start = self.current_start();
                let spec = self.parse_type_specifier();
                let declarations =
                    self.parse_declarators(&spec, DeclContext::Block, init_start, false);
                self.eat(SyntaxKind::Semicolon);
                declarations
            }
            _ => self.parse_expression_statement(),
        };

        let condition = if self.eat(SyntaxKind::Colon) {
            self.parse_expression()
        } else if matches!(
            self.current(),
            SyntaxKind::Semicolon | SyntaxKind::CloseParen
        ) {
            NodeIndex::NONE
        } else {
            self.parse_expression()
        };
        self.eat(SyntaxKind::Semicolon);

        let incrementor = if self.current() == SyntaxKind::CloseParen {
            NodeIndex::NONE
        } else {
            self.parse_expression()
        };
        self.eat(SyntaxKind::CloseParen);

        let body = self.parse_embedded_statement();
        self.add_loop(LoopKind::For, initializer, condition, incrementor, body, start)
    }

    fn add_loop(
        &mut self,
        kind: LoopKind,
        initializer: Vec<NodeIndex>,
        condition: NodeIndex,
        incrementor: NodeIndex,
        body: NodeIndex,
        start: u32,
    ) -> NodeIndex {
        self.arena.add_node(
            NodeKind::LoopStatement(LoopData {
                kind,
                initializer,
                condition,
                incrementor,
                body,
            }),
            self.span_from(start),
        )
    }

    fn parse_return_statement(&mut self) -> NodeIndex {
        let start = self.current_start();
        self.advance();
        let expression = match self.current() {
            SyntaxKind::Semicolon | SyntaxKind::CloseBrace | SyntaxKind::EndOfFile => {
                NodeIndex::NONE
            }
            _ => self.parse_expression(),
        };
        self.eat(SyntaxKind::Semicolon);
        self.arena.add_node(
            NodeKind::ReturnStatement(ReturnData { expression }),
            self.span_from(start),
        )
    }

    fn parse_jump_statement(&mut self) -> NodeIndex {
        let start = self.current_start();
        let keyword = self.current();
        self.advance();
        self.eat(SyntaxKind::Semicolon);
        self.arena
            .add_node(NodeKind::JumpStatement(keyword), self.span_from(start))
    }

    /// An expression followed by an optional `;`. Input that does not start
    /// an expression is skipped one token at a time by the caller.
    pub(crate) fn parse_expression_statement(&mut self) -> Vec<NodeIndex> {
        let start = self.current_start();
        let expression = self.parse_expression();
        if expression.is_none() {
            return Vec::new();
        }
        self.eat(SyntaxKind::Semicolon);
        vec![self.arena.add_node(
            NodeKind::ExpressionStatement(ExpressionStatementData { expression }),
            self.span_from(start),
        )]
    }
}
