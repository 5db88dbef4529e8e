//! Declaration parsing: aggregates, enums, typedefs, namespaces, functions and
//! variable declarators.

use cppac_common::Span;
use cppac_scanner::SyntaxKind;

use crate::base::NodeIndex;
use crate::node::*;
use crate::state::{DeclContext, ParserState};

/// Identifiers that start statements rather than declarations.
const NON_TYPE_WORDS: &[&str] = &[
    "case", "default", "delete", "friend", "goto", "new", "operator", "sizeof", "switch",
    "template", "throw", "typename", "using",
];

/// Trailing function specifiers written as plain identifiers.
const FUNCTION_SPECIFIERS: &[&str] = &["noexcept", "override", "final", "throw"];

/// The type part of a declaration, shared by all its declarators.
#[derive(Clone, Debug, Default)]
pub(crate) struct TypeSpec {
    pub(crate) name: String,
    pub(crate) is_const: bool,
    pub(crate) start: u32,
    pub(crate) end: u32,
}

impl<'a> ParserState<'a> {
    // =========================================================================
    // Lookahead
    // =========================================================================

    /// Whether the tokens at the cursor start a variable or function
    /// declaration (`const Point *p`, `unsigned long n`, `std::string s`).
    pub(crate) fn looks_like_declaration(&self) -> bool {
        let mut i = self.pos;
        while self.kind_at(i).is_declaration_qualifier() {
            i += 1;
        }

        let kind = self.kind_at(i);
        if kind.is_type_keyword()
            || kind.is_aggregate_keyword()
            || kind == SyntaxKind::EnumKeyword
        {
            return true;
        }
        if kind != SyntaxKind::Identifier || NON_TYPE_WORDS.contains(&self.text_at(i)) {
            return false;
        }

        i = self.qualified_name_end(i);
        if self.kind_at(i) == SyntaxKind::Less {
            match self.template_args_end(i) {
                Some(end) => i = end,
                None => return false,
            }
        }
        while matches!(
            self.kind_at(i),
            SyntaxKind::Asterisk
                | SyntaxKind::Ampersand
                | SyntaxKind::AmpersandAmpersand
                | SyntaxKind::ConstKeyword
                | SyntaxKind::VolatileKeyword
        ) {
            i += 1;
        }
        self.kind_at(i) == SyntaxKind::Identifier
    }

    /// Kind of the token after `struct [Name] [final]`.
    fn aggregate_head_follower(&self) -> SyntaxKind {
        let mut i = self.qualified_name_end(self.pos + 1);
        if self.kind_at(i) == SyntaxKind::Identifier && self.text_at(i) == "final" {
            i += 1;
        }
        self.kind_at(i)
    }

    /// `struct Name {`, `struct Name : Base {`, `struct {` or the forward
    /// declaration `struct Name;`.
    pub(crate) fn aggregate_has_definition(&self) -> bool {
        matches!(
            self.aggregate_head_follower(),
            SyntaxKind::OpenBrace | SyntaxKind::Colon | SyntaxKind::Semicolon
        )
    }

    /// `enum [class] [Name] [: base] {`
    pub(crate) fn enum_has_body(&self) -> bool {
        let mut i = self.pos + 1;
        loop {
            match self.kind_at(i) {
                SyntaxKind::OpenBrace => return true,
                SyntaxKind::Identifier
                | SyntaxKind::ClassKeyword
                | SyntaxKind::StructKeyword
                | SyntaxKind::Colon
                | SyntaxKind::ColonColon => i += 1,
                kind if kind.is_type_keyword() => i += 1,
                _ => return false,
            }
        }
    }

    /// Inside a block, `T name(` is a function prototype only when the
    /// parenthesized list reads like parameters; otherwise it is a variable
    /// constructed from arguments.
    fn paren_starts_parameter_list(&self) -> bool {
        let first = self.peek(1);
        if first.is_type_keyword()
            || first.is_declaration_qualifier()
            || first.is_aggregate_keyword()
            || matches!(first, SyntaxKind::CloseParen | SyntaxKind::Ellipsis)
        {
            return true;
        }
        first == SyntaxKind::Identifier
            && matches!(
                self.peek(2),
                SyntaxKind::Identifier | SyntaxKind::Asterisk | SyntaxKind::Ampersand
            )
    }

    // =========================================================================
    // Types
    // =========================================================================

    /// Parse qualifiers and the base type name. Consumes nothing when the
    /// cursor is not at a type.
    pub(crate) fn parse_type_specifier(&mut self) -> TypeSpec {
        let start = self.current_start();
        let mut is_const = false;

        while self.current().is_declaration_qualifier() {
            is_const |= self.current() == SyntaxKind::ConstKeyword;
            self.advance();
        }

        let name = if self.current().is_aggregate_keyword()
            || self.current() == SyntaxKind::EnumKeyword
        {
            self.advance();
            self.parse_qualified_name()
        } else if self.current().is_type_keyword() {
            let mut words: Vec<&str> = Vec::new();
            loop {
                let kind = self.current();
                if kind.is_type_keyword() {
                    words.push(self.current_text());
                } else if kind == SyntaxKind::ConstKeyword {
                    is_const = true;
                } else if kind != SyntaxKind::VolatileKeyword {
                    break;
                }
                self.advance();
            }
            words.join(" ")
        } else if self.current() == SyntaxKind::Identifier
            || (self.current() == SyntaxKind::ColonColon && self.peek(1) == SyntaxKind::Identifier)
        {
            let name = self.parse_qualified_name();
            if self.current() == SyntaxKind::Less
                && let Some(end) = self.template_args_end(self.pos)
            {
                self.pos = end;
            }
            name
        } else {
            String::new()
        };

        while matches!(
            self.current(),
            SyntaxKind::ConstKeyword | SyntaxKind::VolatileKeyword
        ) {
            is_const |= self.current() == SyntaxKind::ConstKeyword;
            self.advance();
        }

        TypeSpec {
            name,
            is_const,
            start,
            end: self.prev_end().max(start),
        }
    }

    /// `*`, `&`, `&&` and cv-qualifiers between the type and the declarator
    /// name. Returns (pointer depth, is reference, is const).
    fn parse_pointer_operators(&mut self) -> (u8, bool, bool) {
        let mut depth = 0u8;
        let mut is_reference = false;
        let mut is_const = false;
        loop {
            match self.current() {
                SyntaxKind::Asterisk => depth = depth.saturating_add(1),
                SyntaxKind::Ampersand | SyntaxKind::AmpersandAmpersand => is_reference = true,
                SyntaxKind::ConstKeyword => is_const = true,
                SyntaxKind::VolatileKeyword => {}
                _ => break,
            }
            self.advance();
        }
        (depth, is_reference, is_const)
    }

    fn add_type(
        &mut self,
        spec: &TypeSpec,
        pointer_depth: u8,
        is_reference: bool,
        is_const: bool,
    ) -> NodeIndex {
        let span = Span::new(spec.start, spec.end);
        self.arena.add_node(
            NodeKind::Type(TypeData {
                name: spec.name.clone(),
                pointer_depth,
                is_reference,
                is_const: spec.is_const || is_const,
            }),
            span,
        )
    }

    /// Declarator name, possibly qualified (`Point::length`). Empty when the
    /// declarator is abstract.
    fn parse_declarator_name(&mut self) -> String {
        let mut name = self.parse_qualified_name();
        // destructors: `~Point`, `Point::~Point`
        if !name.is_empty()
            && self.current() == SyntaxKind::ColonColon
            && self.peek(1) == SyntaxKind::Tilde
        {
            self.advance();
            name.push_str("::");
        }
        if self.current() == SyntaxKind::Tilde && self.peek(1) == SyntaxKind::Identifier {
            self.advance();
            name.push('~');
            name.push_str(self.current_text());
            self.advance();
        }
        name
    }

    fn skip_array_suffixes(&mut self) {
        while self.current() == SyntaxKind::OpenBracket {
            self.skip_balanced(SyntaxKind::OpenBracket, SyntaxKind::CloseBracket);
        }
    }

    // =========================================================================
    // Variables and functions
    // =========================================================================

    /// `qualifiers type declarator (, declarator)* ;` or a function
    /// declaration or definition.
    pub(crate) fn parse_declaration(&mut self, ctx: DeclContext) -> Vec<NodeIndex> {
        let start = self.current_start();
        let spec = self.parse_type_specifier();
        let out = self.parse_declarators(&spec, ctx, start, true);
        self.eat(SyntaxKind::Semicolon);
        out
    }

    /// Declarators following an already parsed type. When `allow_function`
    /// is set, a first declarator followed by `(` may become a function.
    pub(crate) fn parse_declarators(
        &mut self,
        spec: &TypeSpec,
        ctx: DeclContext,
        start: u32,
        allow_function: bool,
    ) -> Vec<NodeIndex> {
        let mut out = Vec::new();

        loop {
            let before = self.pos;
            let declarator_start = if out.is_empty() {
                start
            } else {
                self.current_start()
            };
            let (depth, is_reference, is_const) = self.parse_pointer_operators();
            let name = self.parse_declarator_name();

            if out.is_empty()
                && allow_function
                && self.current() == SyntaxKind::OpenParen
                && (ctx != DeclContext::Block || self.paren_starts_parameter_list())
            {
                let return_type = self.add_type(spec, depth, is_reference, is_const);
                out.push(self.parse_function_rest(start, name, return_type));
                return out;
            }

            self.skip_array_suffixes();
            // bit-field width
            if ctx == DeclContext::Member && self.eat(SyntaxKind::Colon) {
                self.parse_conditional();
            }

            let initializer = self.parse_initializer();
            if self.pos == before {
                break;
            }

            let ty = self.add_type(spec, depth, is_reference, is_const);
            let role = if ctx == DeclContext::Member {
                VariableRole::Member
            } else {
                VariableRole::Variable
            };
            out.push(self.arena.add_node(
                NodeKind::VariableOrParameterDeclaration(VariableData {
                    name,
                    ty,
                    initializer,
                    role,
                }),
                self.span_from(declarator_start),
            ));

            if !self.eat(SyntaxKind::Comma) {
                break;
            }
        }

        out
    }

    /// `= expr`, `= { ... }`, `(args)` or `{ ... }` after a declarator.
    fn parse_initializer(&mut self) -> NodeIndex {
        match self.current() {
            SyntaxKind::Equals => {
                self.advance();
                if self.current() == SyntaxKind::OpenBrace {
                    self.parse_initializer_list()
                } else {
                    self.parse_assignment()
                }
            }
            SyntaxKind::OpenParen => {
                let start = self.current_start();
                self.advance();
                let inner = if self.current() == SyntaxKind::CloseParen {
                    NodeIndex::NONE
                } else {
                    self.parse_expression()
                };
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

    /// Parameter list, trailing specifiers and optional body. The cursor is
    /// at the opening parenthesis.
    fn parse_function_rest(
        &mut self,
        start: u32,
        name: String,
        return_type: NodeIndex,
    ) -> NodeIndex {
        self.advance();
        let mut parameters = Vec::new();
        loop {
            match self.current() {
                SyntaxKind::CloseParen => {
                    self.advance();
                    break;
                }
                SyntaxKind::EndOfFile | SyntaxKind::OpenBrace | SyntaxKind::Semicolon => break,
                _ => {}
            }

            let before = self.pos;
            if self.current() == SyntaxKind::Ellipsis {
                self.advance();
            } else if self.current() == SyntaxKind::VoidKeyword
                && self.peek(1) == SyntaxKind::CloseParen
            {
                self.advance();
            } else if let Some(parameter) = self.parse_parameter() {
                parameters.push(parameter);
            }

            if self.eat(SyntaxKind::Comma) {
                continue;
            }
            if self.pos == before {
                self.advance();
            }
        }

        self.skip_function_specifiers();

        let body = if self.current() == SyntaxKind::OpenBrace {
            self.parse_block()
        } else {
            NodeIndex::NONE
        };

        self.arena.add_node(
            NodeKind::FunctionDeclaration(FunctionData {
                name,
                return_type,
                parameters,
                body,
            }),
            self.span_from(start),
        )
    }

    /// `const`, `noexcept(...)`, `override`, `-> T`, `= 0`, `= default` and
    /// constructor initializer lists.
    fn skip_function_specifiers(&mut self) {
        loop {
            match self.current() {
                SyntaxKind::ConstKeyword | SyntaxKind::VolatileKeyword => self.advance(),
                SyntaxKind::Ampersand | SyntaxKind::AmpersandAmpersand => self.advance(),
                SyntaxKind::Identifier if FUNCTION_SPECIFIERS.contains(&self.current_text()) => {
                    self.advance();
                    self.skip_balanced(SyntaxKind::OpenParen, SyntaxKind::CloseParen);
                }
                SyntaxKind::Arrow => {
                    self.advance();
                    self.parse_type_specifier();
                    self.parse_pointer_operators();
                }
                _ => break,
            }
        }

        if self.current() == SyntaxKind::Equals {
            self.advance();
            if matches!(
                self.current(),
                SyntaxKind::NumericLiteral | SyntaxKind::Identifier
            ) {
                self.advance();
            }
        }

        if self.current() == SyntaxKind::Colon {
            while !matches!(
                self.current(),
                SyntaxKind::OpenBrace | SyntaxKind::Semicolon | SyntaxKind::EndOfFile
            ) {
                if self.current() == SyntaxKind::OpenParen {
                    self.skip_balanced(SyntaxKind::OpenParen, SyntaxKind::CloseParen);
                } else {
                    self.advance();
                }
            }
        }
    }

    fn parse_parameter(&mut self) -> Option<NodeIndex> {
        let before = self.pos;
        let start = self.current_start();
        let spec = self.parse_type_specifier();
        let (depth, is_reference, is_const) = self.parse_pointer_operators();
        let name = if self.current() == SyntaxKind::Identifier {
            let name = self.current_text().to_string();
            self.advance();
            name
        } else {
            String::new()
        };
        self.skip_array_suffixes();
        if self.pos == before {
            return None;
        }

        let ty = self.add_type(&spec, depth, is_reference, is_const);
        let initializer = if self.eat(SyntaxKind::Equals) {
            self.parse_assignment()
        } else {
            NodeIndex::NONE
        };
        Some(self.arena.add_node(
            NodeKind::VariableOrParameterDeclaration(VariableData {
                name,
                ty,
                initializer,
                role: VariableRole::Parameter,
            }),
            self.span_from(start),
        ))
    }

    // =========================================================================
    // Aggregates
    // =========================================================================

    /// `struct Name [: bases] { members }` or a forward declaration. The
    /// cursor is at the aggregate keyword; a trailing `;` is not consumed.
    pub(crate) fn parse_aggregate(&mut self) -> NodeIndex {
        let start = self.current_start();
        let keyword = self.current();
        self.advance();

        let name = self.parse_qualified_name();
        if self.current() == SyntaxKind::Identifier && self.current_text() == "final" {
            self.advance();
        }
        if self.current() == SyntaxKind::Colon {
            while !matches!(
                self.current(),
                SyntaxKind::OpenBrace | SyntaxKind::Semicolon | SyntaxKind::EndOfFile
            ) {
                self.advance();
            }
        }

        let mut data = StructData {
            keyword,
            name,
            members: Vec::new(),
            methods: Vec::new(),
            nested: Vec::new(),
            has_body: false,
        };

        if self.eat(SyntaxKind::OpenBrace) {
            data.has_body = true;
            self.parse_member_list(&mut data);
            self.eat(SyntaxKind::CloseBrace);
        }

        self.arena.add_node(
            NodeKind::StructOrClassDeclaration(data),
            self.span_from(start),
        )
    }

    fn parse_member_list(&mut self, data: &mut StructData) {
        while !self.is_eof() && self.current() != SyntaxKind::CloseBrace {
            let before = self.pos;

            let parsed = match self.current() {
                SyntaxKind::PublicKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword => {
                    self.advance();
                    self.eat(SyntaxKind::Colon);
                    Vec::new()
                }
                SyntaxKind::Semicolon => {
                    self.advance();
                    Vec::new()
                }
                SyntaxKind::TypedefKeyword
                | SyntaxKind::StructKeyword
                | SyntaxKind::ClassKeyword
                | SyntaxKind::UnionKeyword
                | SyntaxKind::EnumKeyword => {
                    match self.nested(|p| p.parse_statement(DeclContext::Member)) {
                        Some(nodes) => nodes,
                        None => {
                            self.skip_member();
                            Vec::new()
                        }
                    }
                }
                _ if self.looks_like_declaration() => self.parse_declaration(DeclContext::Member),
                _ => {
                    self.skip_member();
                    Vec::new()
                }
            };

            for node in parsed {
                match self.arena.kind(node) {
                    Some(NodeKind::VariableOrParameterDeclaration(_)) => data.members.push(node),
                    Some(NodeKind::FunctionDeclaration(_)) => data.methods.push(node),
                    Some(_) => data.nested.push(node),
                    None => {}
                }
            }

            if self.pos == before {
                self.advance();
            }
        }
    }

    /// Skip a member this grammar does not model (constructors, operators,
    /// `using` declarations), up to its `;` or the end of its body.
    fn skip_member(&mut self) {
        loop {
            match self.current() {
                SyntaxKind::Semicolon => {
                    self.advance();
                    return;
                }
                SyntaxKind::OpenBrace => {
                    self.skip_balanced(SyntaxKind::OpenBrace, SyntaxKind::CloseBrace);
                    self.eat(SyntaxKind::Semicolon);
                    return;
                }
                SyntaxKind::CloseBrace | SyntaxKind::EndOfFile => return,
                SyntaxKind::OpenParen => {
                    self.skip_balanced(SyntaxKind::OpenParen, SyntaxKind::CloseParen)
                }
                SyntaxKind::OpenBracket => {
                    self.skip_balanced(SyntaxKind::OpenBracket, SyntaxKind::CloseBracket)
                }
                _ => self.advance(),
            }
        }
    }

    /// An aggregate definition used as a statement, with any declarators that
    /// follow it (`struct Point { ... } origin, *cursor;`).
    pub(crate) fn parse_aggregate_statement(&mut self, ctx: DeclContext) -> Vec<NodeIndex> {
        let start = self.current_start();
        let aggregate = self.parse_aggregate();
        let mut out = vec![aggregate];
        let name = self
            .arena
            .get_struct(aggregate)
            .map(|data| data.name.clone())
            .unwrap_or_default();
        out.extend(self.parse_trailing_declarators(name, ctx, start));
        self.eat(SyntaxKind::Semicolon);
        out
    }

    fn parse_trailing_declarators(
        &mut self,
        type_name: String,
        ctx: DeclContext,
        start: u32,
    ) -> Vec<NodeIndex> {
        if !matches!(
            self.current(),
            SyntaxKind::Identifier | SyntaxKind::Asterisk | SyntaxKind::Ampersand
        ) {
            return Vec::new();
        }
        let spec = TypeSpec {
            name: type_name,
            is_const: false,
            start,
            end: self.prev_end().max(start),
        };
        self.parse_declarators(&spec, ctx, self.current_start(), false)
    }

    // =========================================================================
    // Enums
    // =========================================================================

    /// `enum [class] Name [: base] { A, B = 2 }`. The cursor is at `enum`.
    pub(crate) fn parse_enum(&mut self) -> NodeIndex {
        let start = self.current_start();
        self.advance();
        if matches!(
            self.current(),
            SyntaxKind::ClassKeyword | SyntaxKind::StructKeyword
        ) {
            self.advance();
        }
        let name = self.parse_qualified_name();
        if self.eat(SyntaxKind::Colon) {
            self.parse_type_specifier();
        }

        let mut enumerators = Vec::new();
        if self.eat(SyntaxKind::OpenBrace) {
            while !self.is_eof() && self.current() != SyntaxKind::CloseBrace {
                let before = self.pos;
                if self.current() == SyntaxKind::Identifier {
                    let enumerator_start = self.current_start();
                    let enumerator = self.current_text().to_string();
                    self.advance();
                    let initializer = if self.eat(SyntaxKind::Equals) {
                        self.parse_conditional()
                    } else {
                        NodeIndex::NONE
                    };
                    enumerators.push(self.arena.add_node(
                        NodeKind::VariableOrParameterDeclaration(VariableData {
                            name: enumerator,
                            ty: NodeIndex::NONE,
                            initializer,
                            role: VariableRole::Enumerator,
                        }),
                        self.span_from(enumerator_start),
                    ));
                }
                if !self.eat(SyntaxKind::Comma) && self.pos == before {
                    self.advance();
                }
            }
            self.eat(SyntaxKind::CloseBrace);
        }

        self.arena.add_node(
            NodeKind::EnumDeclaration(EnumData { name, enumerators }),
            self.span_from(start),
        )
    }

    pub(crate) fn parse_enum_statement(&mut self, ctx: DeclContext) -> Vec<NodeIndex> {
        let start = self.current_start();
        let enumeration = self.parse_enum();
        let name = match self.arena.kind(enumeration) {
            Some(NodeKind::EnumDeclaration(data)) => data.name.clone(),
            _ => String::new(),
        };
        let mut out = vec![enumeration];
        out.extend(self.parse_trailing_declarators(name, ctx, start));
        self.eat(SyntaxKind::Semicolon);
        out
    }

    // =========================================================================
    // Typedefs and namespaces
    // =========================================================================

    /// `typedef <type or inline definition> A, *PA;`. The cursor is at
    /// `typedef`. An anonymous inline aggregate takes the first alias as its
    /// name.
    pub(crate) fn parse_typedef(&mut self) -> Vec<NodeIndex> {
        let start = self.current_start();
        self.advance();

        let (mut spec, mut aggregate) = if self.current().is_aggregate_keyword()
            && matches!(
                self.aggregate_head_follower(),
                SyntaxKind::OpenBrace | SyntaxKind::Colon
            )
        {
            let aggregate = self.parse_aggregate();
            let name = self
                .arena
                .get_struct(aggregate)
                .map(|data| data.name.clone())
                .unwrap_or_default();
            (self.spec_for(name, start), aggregate)
        } else if self.current() == SyntaxKind::EnumKeyword && self.enum_has_body() {
            let enumeration = self.parse_enum();
            let name = match self.arena.kind(enumeration) {
                Some(NodeKind::EnumDeclaration(data)) => data.name.clone(),
                _ => String::new(),
            };
            (self.spec_for(name, start), enumeration)
        } else {
            (self.parse_type_specifier(), NodeIndex::NONE)
        };

        let mut out = Vec::new();
        loop {
            let before = self.pos;
            let declarator_start = if out.is_empty() {
                start
            } else {
                self.current_start()
            };
            let (depth, is_reference, is_const) = self.parse_pointer_operators();

            let name = if self.current() == SyntaxKind::OpenParen {
                // function pointer: `typedef void (*callback)(int);`
                self.advance();
                while matches!(
                    self.current(),
                    SyntaxKind::Asterisk | SyntaxKind::Ampersand
                ) {
                    self.advance();
                }
                let name = self.parse_declarator_name();
                while !matches!(
                    self.current(),
                    SyntaxKind::CloseParen | SyntaxKind::Semicolon | SyntaxKind::EndOfFile
                ) {
                    self.advance();
                }
                self.eat(SyntaxKind::CloseParen);
                self.skip_balanced(SyntaxKind::OpenParen, SyntaxKind::CloseParen);
                name
            } else {
                self.parse_declarator_name()
            };
            self.skip_array_suffixes();

            if self.pos == before {
                break;
            }

            if spec.name.is_empty() && aggregate.is_some() && !name.is_empty() {
                self.arena.name_anonymous_aggregate(aggregate, &name);
                spec.name = name.clone();
            }

            let ty = self.add_type(&spec, depth, is_reference, is_const);
            out.push(self.arena.add_node(
                NodeKind::TypedefDeclaration(TypedefData { name, ty, aggregate }),
                self.span_from(declarator_start),
            ));
            // the inline definition belongs to the first alias only
            aggregate = NodeIndex::NONE;

            if !self.eat(SyntaxKind::Comma) {
                break;
            }
        }

        self.eat(SyntaxKind::Semicolon);
        out
    }

    fn spec_for(&self, name: String, start: u32) -> TypeSpec {
        TypeSpec {
            name,
            is_const: false,
            start,
            end: self.prev_end().max(start),
        }
    }

    /// `namespace [Name] { ... }` or a namespace alias. Cursor at `namespace`.
    pub(crate) fn parse_namespace(&mut self) -> NodeIndex {
        let start = self.current_start();
        self.advance();
        let name = self.parse_qualified_name();

        let mut statements = Vec::new();
        if self.eat(SyntaxKind::Equals) {
            self.parse_qualified_name();
            self.eat(SyntaxKind::Semicolon);
        } else if self.eat(SyntaxKind::OpenBrace) {
            while !self.is_eof() && self.current() != SyntaxKind::CloseBrace {
                let before = self.pos;
                if let Some(parsed) = self.nested(|p| p.parse_statement(DeclContext::File)) {
                    statements.extend(parsed);
                }
                if self.pos == before {
                    self.advance();
                }
            }
            self.eat(SyntaxKind::CloseBrace);
        } else {
            self.eat(SyntaxKind::Semicolon);
        }

        self.arena.add_node(
            NodeKind::NamespaceDeclaration(NamespaceData { name, statements }),
            self.span_from(start),
        )
    }
}
