//! Expression parsing: precedence climbing over the binary operators, with
//! prefix, postfix and primary expressions below it.
//!
//! A member access whose name has not been typed yet (`p.` at the end of a
//! line) still produces a `MemberExpression` with an absent property, which
//! is the shape the completion engine looks for.

use cppac_scanner::SyntaxKind;

use crate::base::NodeIndex;
use crate::node::*;
use crate::state::ParserState;

impl<'a> ParserState<'a> {
    /// `assignment (, assignment)*`
    pub(crate) fn parse_expression(&mut self) -> NodeIndex {
        let mut left = self.parse_assignment();
        if left.is_none() {
            return left;
        }
        while self.current() == SyntaxKind::Comma {
            self.advance();
            let right = self.parse_assignment();
            left = self.add_binary(SyntaxKind::Comma, left, right);
        }
        left
    }

    /// Right-associative assignment.
    pub(crate) fn parse_assignment(&mut self) -> NodeIndex {
        let left = self.parse_conditional();
        if left.is_none() || !self.current().is_assignment_operator() {
            return left;
        }
        let operator = self.current();
        self.advance();
        let right = if self.current() == SyntaxKind::OpenBrace {
            self.parse_initializer_list()
        } else {
            self.parse_assignment()
        };
        self.add_binary(operator, left, right)
    }

    /// `condition ? when_true : when_false`
    pub(crate) fn parse_conditional(&mut self) -> NodeIndex {
        let condition = self.parse_binary(1);
        if condition.is_none() || self.current() != SyntaxKind::Question {
            return condition;
        }
        let start = self.node_start(condition);
        self.advance();
        let when_true = self.parse_expression();
        self.eat(SyntaxKind::Colon);
        let when_false = self.parse_assignment();
        self.arena.add_node(
            NodeKind::ConditionalExpression(ConditionalExprData {
                condition,
                when_true,
                when_false,
            }),
            self.span_from(start),
        )
    }

    fn parse_binary(&mut self, min_precedence: u8) -> NodeIndex {
        let mut left = self.parse_unary();
        if left.is_none() {
            return left;
        }
        while let Some(precedence) = self.current().binary_precedence() {
            if precedence < min_precedence {
                break;
            }
            let operator = self.current();
            self.advance();
            let right = self.parse_binary(precedence + 1);
            left = self.add_binary(operator, left, right);
        }
        left
    }

    fn add_binary(&mut self, operator: SyntaxKind, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        let start = self.node_start(left);
        self.arena.add_node(
            NodeKind::BinaryExpression(BinaryExprData {
                operator,
                left,
                right,
            }),
            self.span_from(start),
        )
    }

    fn parse_unary(&mut self) -> NodeIndex {
        self.nested(|p| p.parse_unary_worker())
            .unwrap_or(NodeIndex::NONE)
    }

    fn parse_unary_worker(&mut self) -> NodeIndex {
        match self.current() {
            SyntaxKind::Exclamation
            | SyntaxKind::Tilde
            | SyntaxKind::Minus
            | SyntaxKind::Plus
            | SyntaxKind::Asterisk
            | SyntaxKind::Ampersand
            | SyntaxKind::PlusPlus
            | SyntaxKind::MinusMinus => {
                let start = self.current_start();
                let operator = self.current();
                self.advance();
                let operand = self.parse_unary();
                self.arena.add_node(
                    NodeKind::UnaryExpression(UnaryExprData {
                        operator,
                        operand,
                        postfix: false,
                    }),
                    self.span_from(start),
                )
            }
            SyntaxKind::OpenParen if self.is_cast() => {
                // the cast type does not matter for completion
                self.skip_balanced(SyntaxKind::OpenParen, SyntaxKind::CloseParen);
                self.parse_unary()
            }
            _ => self.parse_postfix(),
        }
    }

    /// `(int)`, `(const char *)`, `(Point *)` followed by an operand.
    fn is_cast(&self) -> bool {
        let first = self.peek(1);
        if first.is_type_keyword()
            || first.is_declaration_qualifier()
            || first.is_aggregate_keyword()
        {
            return true;
        }
        if first != SyntaxKind::Identifier {
            return false;
        }
        let mut i = self.qualified_name_end(self.pos + 1);
        let mut saw_pointer = false;
        while matches!(
            self.kind_at(i),
            SyntaxKind::Asterisk | SyntaxKind::Ampersand
        ) {
            saw_pointer = true;
            i += 1;
        }
        saw_pointer && self.kind_at(i) == SyntaxKind::CloseParen
    }

    fn parse_postfix(&mut self) -> NodeIndex {
        let mut expression = self.parse_primary();
        if expression.is_none() {
            return expression;
        }

        loop {
            let start = self.node_start(expression);
            expression = match self.current() {
                SyntaxKind::Dot | SyntaxKind::Arrow => {
                    let operator = self.current();
                    self.advance();
                    let property = if self.current() == SyntaxKind::Identifier {
                        self.parse_identifier()
                    } else {
                        NodeIndex::NONE
                    };
                    self.arena.add_node(
                        NodeKind::MemberExpression(MemberExprData {
                            object: expression,
                            property,
                            operator,
                        }),
                        self.span_from(start),
                    )
                }
                SyntaxKind::OpenParen => {
                    let arguments = self.parse_arguments();
                    self.arena.add_node(
                        NodeKind::CallExpression(CallExprData {
                            callee: expression,
                            arguments,
                        }),
                        self.span_from(start),
                    )
                }
                SyntaxKind::OpenBracket => {
                    self.advance();
                    let index = self.parse_expression();
                    self.eat(SyntaxKind::CloseBracket);
                    self.arena.add_node(
                        NodeKind::IndexExpression(IndexExprData {
                            object: expression,
                            index,
                        }),
                        self.span_from(start),
                    )
                }
                SyntaxKind::PlusPlus | SyntaxKind::MinusMinus => {
                    let operator = self.current();
                    self.advance();
                    self.arena.add_node(
                        NodeKind::UnaryExpression(UnaryExprData {
                            operator,
                            operand: expression,
                            postfix: true,
                        }),
                        self.span_from(start),
                    )
                }
                _ => break,
            };
        }

        expression
    }

    /// `( arguments )`. The cursor is at `(`.
    fn parse_arguments(&mut self) -> Vec<NodeIndex> {
        self.advance();
        let mut arguments = Vec::new();
        loop {
            match self.current() {
                SyntaxKind::CloseParen => {
                    self.advance();
                    break;
                }
                SyntaxKind::EndOfFile | SyntaxKind::Semicolon | SyntaxKind::CloseBrace => break,
                _ => {}
            }
            let before = self.pos;
            let argument = self.parse_assignment();
            if argument.is_some() {
                arguments.push(argument);
            }
            if !self.eat(SyntaxKind::Comma) && self.pos == before {
                self.advance();
            }
        }
        arguments
    }

    fn parse_primary(&mut self) -> NodeIndex {
        match self.current() {
            SyntaxKind::Identifier => self.parse_identifier(),
            SyntaxKind::ColonColon if self.peek(1) == SyntaxKind::Identifier => {
                self.parse_identifier()
            }
            SyntaxKind::NumericLiteral
            | SyntaxKind::CharLiteral
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::NullptrKeyword => {
                let start = self.current_start();
                let kind = self.current();
                let text = self.current_text().to_string();
                self.advance();
                self.arena.add_node(
                    NodeKind::Literal(LiteralData { kind, text }),
                    self.span_from(start),
                )
            }
            SyntaxKind::StringLiteral => {
                // adjacent literals concatenate
                let start = self.current_start();
                let mut text = String::new();
                while self.current() == SyntaxKind::StringLiteral {
                    text.push_str(self.current_text());
                    self.advance();
                }
                self.arena.add_node(
                    NodeKind::Literal(LiteralData {
                        kind: SyntaxKind::StringLiteral,
                        text,
                    }),
                    self.span_from(start),
                )
            }
            SyntaxKind::OpenParen => {
                let start = self.current_start();
                self.advance();
                let inner = self.parse_expression();
                self.eat(SyntaxKind::CloseParen);
                self.arena.add_node(
                    NodeKind::ParenthesizedExpression(inner),
                    self.span_from(start),
                )
            }
            SyntaxKind::OpenBrace => self.parse_initializer_list(),
            _ => NodeIndex::NONE,
        }
    }

    fn parse_identifier(&mut self) -> NodeIndex {
        let start = self.current_start();
        let name = self.parse_qualified_name();
        self.arena.add_node(
            NodeKind::Identifier(IdentifierData { name }),
            self.span_from(start),
        )
    }

    /// `{ element, ... }`. The cursor is at `{`.
    pub(crate) fn parse_initializer_list(&mut self) -> NodeIndex {
        let start = self.current_start();
        self.advance();
        let mut elements = Vec::new();
        while !self.is_eof() && self.current() != SyntaxKind::CloseBrace {
            if self.current() == SyntaxKind::Semicolon {
                break;
            }
            let before = self.pos;
            let element = self.parse_assignment();
            if element.is_some() {
                elements.push(element);
            }
            if !self.eat(SyntaxKind::Comma) && self.pos == before {
                self.advance();
            }
        }
        self.eat(SyntaxKind::CloseBrace);
        self.arena
            .add_node(NodeKind::InitializerList(elements), self.span_from(start))
    }
}
