//! AST node types.
//!
//! Every node lives in a `NodeArena` and refers to its children and parent by
//! `NodeIndex`. Kind-specific data is carried by the closed `NodeKind` enum, so
//! consumers pattern-match instead of downcasting.

use cppac_common::Span;
use cppac_scanner::SyntaxKind;
use smallvec::SmallVec;

use crate::base::NodeIndex;

/// Child or declaration lists attached to a node. Most nodes have a handful.
pub type NodeList = SmallVec<[NodeIndex; 4]>;

#[derive(Clone, Debug)]
pub struct Node {
    pub kind: NodeKind,
    /// Byte span in the document text.
    pub span: Span,
    /// Enclosing node; `NodeIndex::NONE` for the translation unit.
    pub parent: NodeIndex,
    /// Declarations this node introduces into the scope it forms, in source
    /// order.
    pub declarations: NodeList,
}

#[derive(Clone, Debug)]
pub enum NodeKind {
    TranslationUnit(BlockData),
    NamespaceDeclaration(NamespaceData),
    StructOrClassDeclaration(StructData),
    EnumDeclaration(EnumData),
    TypedefDeclaration(TypedefData),
    FunctionDeclaration(FunctionData),
    VariableOrParameterDeclaration(VariableData),
    Type(TypeData),

    Block(BlockData),
    ExpressionStatement(ExpressionStatementData),
    IfStatement(IfStatementData),
    LoopStatement(LoopData),
    ReturnStatement(ReturnData),
    /// `break;` / `continue;`
    JumpStatement(SyntaxKind),

    Identifier(IdentifierData),
    MemberExpression(MemberExprData),
    CallExpression(CallExprData),
    IndexExpression(IndexExprData),
    BinaryExpression(BinaryExprData),
    UnaryExpression(UnaryExprData),
    ConditionalExpression(ConditionalExprData),
    ParenthesizedExpression(NodeIndex),
    InitializerList(Vec<NodeIndex>),
    Literal(LiteralData),
}

#[derive(Clone, Debug, Default)]
pub struct BlockData {
    pub statements: Vec<NodeIndex>,
}

#[derive(Clone, Debug)]
pub struct NamespaceData {
    pub name: String,
    pub statements: Vec<NodeIndex>,
}

#[derive(Clone, Debug)]
pub struct StructData {
    /// `struct`, `class` or `union`.
    pub keyword: SyntaxKind,
    /// Empty for anonymous aggregates.
    pub name: String,
    /// Data members, each a `VariableOrParameterDeclaration`.
    pub members: Vec<NodeIndex>,
    /// Member function declarations.
    pub methods: Vec<NodeIndex>,
    /// Nested aggregates, enums and typedefs.
    pub nested: Vec<NodeIndex>,
    /// False for forward declarations (`struct Point;`).
    pub has_body: bool,
}

#[derive(Clone, Debug)]
pub struct EnumData {
    pub name: String,
    /// Enumerators, each a `VariableOrParameterDeclaration`.
    pub enumerators: Vec<NodeIndex>,
}

#[derive(Clone, Debug)]
pub struct TypedefData {
    pub name: String,
    pub ty: NodeIndex,
    /// Aggregate defined inline by this typedef, if any.
    pub aggregate: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct FunctionData {
    pub name: String,
    pub return_type: NodeIndex,
    pub parameters: Vec<NodeIndex>,
    /// Function body; `NodeIndex::NONE` for prototypes.
    pub body: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariableRole {
    Variable,
    Parameter,
    Member,
    Enumerator,
}

#[derive(Clone, Debug)]
pub struct VariableData {
    /// Empty for unnamed parameters.
    pub name: String,
    pub ty: NodeIndex,
    pub initializer: NodeIndex,
    pub role: VariableRole,
}

#[derive(Clone, Debug, Default)]
pub struct TypeData {
    /// Base type name without qualifiers, declarators or template arguments
    /// (`Point`, `unsigned int`, `std::string`).
    pub name: String,
    pub pointer_depth: u8,
    pub is_reference: bool,
    pub is_const: bool,
}

#[derive(Clone, Debug)]
pub struct ExpressionStatementData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct IfStatementData {
    pub condition: NodeIndex,
    pub then_statement: NodeIndex,
    pub else_statement: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopKind {
    While,
    DoWhile,
    For,
}

#[derive(Clone, Debug)]
pub struct LoopData {
    pub kind: LoopKind,
    /// `for` init clause: declarations or a single expression statement.
    pub initializer: Vec<NodeIndex>,
    pub condition: NodeIndex,
    pub incrementor: NodeIndex,
    pub body: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ReturnData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct IdentifierData {
    /// Identifier text; qualified names keep their `::` separators.
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct MemberExprData {
    pub object: NodeIndex,
    /// `NodeIndex::NONE` while the member name has not been typed yet.
    pub property: NodeIndex,
    /// `Dot` or `Arrow`.
    pub operator: SyntaxKind,
}

#[derive(Clone, Debug)]
pub struct CallExprData {
    pub callee: NodeIndex,
    pub arguments: Vec<NodeIndex>,
}

#[derive(Clone, Debug)]
pub struct IndexExprData {
    pub object: NodeIndex,
    pub index: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct BinaryExprData {
    pub operator: SyntaxKind,
    pub left: NodeIndex,
    pub right: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct UnaryExprData {
    pub operator: SyntaxKind,
    pub operand: NodeIndex,
    pub postfix: bool,
}

#[derive(Clone, Debug)]
pub struct ConditionalExprData {
    pub condition: NodeIndex,
    pub when_true: NodeIndex,
    pub when_false: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct LiteralData {
    pub kind: SyntaxKind,
    pub text: String,
}

impl NodeKind {
    /// Direct children. Absent children are omitted.
    pub fn children(&self) -> NodeList {
        let mut out = NodeList::new();
        let mut push = |idx: NodeIndex| {
            if idx.is_some() {
                out.push(idx);
            }
        };

        match self {
            NodeKind::TranslationUnit(block) | NodeKind::Block(block) => {
                block.statements.iter().copied().for_each(&mut push)
            }
            NodeKind::NamespaceDeclaration(ns) => ns.statements.iter().copied().for_each(&mut push),
            NodeKind::StructOrClassDeclaration(data) => {
                // Members, methods and nested declarations interleave in the
                // source, so this list is not in source order.
                data.members
                    .iter()
                    .chain(&data.methods)
                    .chain(&data.nested)
                    .copied()
                    .for_each(&mut push)
            }
            NodeKind::EnumDeclaration(data) => data.enumerators.iter().copied().for_each(&mut push),
            NodeKind::TypedefDeclaration(data) => {
                push(data.aggregate);
                push(data.ty);
            }
            NodeKind::FunctionDeclaration(data) => {
                push(data.return_type);
                data.parameters.iter().copied().for_each(&mut push);
                push(data.body);
            }
            NodeKind::VariableOrParameterDeclaration(data) => {
                push(data.ty);
                push(data.initializer);
            }
            NodeKind::Type(_) | NodeKind::JumpStatement(_) => {}
            NodeKind::ExpressionStatement(data) => push(data.expression),
            NodeKind::IfStatement(data) => {
                push(data.condition);
                push(data.then_statement);
                push(data.else_statement);
            }
            NodeKind::LoopStatement(data) => {
                data.initializer.iter().copied().for_each(&mut push);
                push(data.condition);
                push(data.incrementor);
                push(data.body);
            }
            NodeKind::ReturnStatement(data) => push(data.expression),
            NodeKind::Identifier(_) | NodeKind::Literal(_) => {}
            NodeKind::MemberExpression(data) => {
                push(data.object);
                push(data.property);
            }
            NodeKind::CallExpression(data) => {
                push(data.callee);
                data.arguments.iter().copied().for_each(&mut push);
            }
            NodeKind::IndexExpression(data) => {
                push(data.object);
                push(data.index);
            }
            NodeKind::BinaryExpression(data) => {
                push(data.left);
                push(data.right);
            }
            NodeKind::UnaryExpression(data) => push(data.operand),
            NodeKind::ConditionalExpression(data) => {
                push(data.condition);
                push(data.when_true);
                push(data.when_false);
            }
            NodeKind::ParenthesizedExpression(inner) => push(*inner),
            NodeKind::InitializerList(elements) => elements.iter().copied().for_each(&mut push),
        }

        out
    }

    /// Whether this node is a declaration of any kind.
    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            NodeKind::NamespaceDeclaration(_)
                | NodeKind::StructOrClassDeclaration(_)
                | NodeKind::EnumDeclaration(_)
                | NodeKind::TypedefDeclaration(_)
                | NodeKind::FunctionDeclaration(_)
                | NodeKind::VariableOrParameterDeclaration(_)
        )
    }

    /// Short human-readable kind name, used by `NodeArena::dump`.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::TranslationUnit(_) => "TranslationUnit",
            NodeKind::NamespaceDeclaration(_) => "NamespaceDeclaration",
            NodeKind::StructOrClassDeclaration(_) => "StructOrClassDeclaration",
            NodeKind::EnumDeclaration(_) => "EnumDeclaration",
            NodeKind::TypedefDeclaration(_) => "TypedefDeclaration",
            NodeKind::FunctionDeclaration(_) => "FunctionDeclaration",
            NodeKind::VariableOrParameterDeclaration(_) => "VariableOrParameterDeclaration",
            NodeKind::Type(_) => "Type",
            NodeKind::Block(_) => "Block",
            NodeKind::ExpressionStatement(_) => "ExpressionStatement",
            NodeKind::IfStatement(_) => "IfStatement",
            NodeKind::LoopStatement(_) => "LoopStatement",
            NodeKind::ReturnStatement(_) => "ReturnStatement",
            NodeKind::JumpStatement(_) => "JumpStatement",
            NodeKind::Identifier(_) => "Identifier",
            NodeKind::MemberExpression(_) => "MemberExpression",
            NodeKind::CallExpression(_) => "CallExpression",
            NodeKind::IndexExpression(_) => "IndexExpression",
            NodeKind::BinaryExpression(_) => "BinaryExpression",
            NodeKind::UnaryExpression(_) => "UnaryExpression",
            NodeKind::ConditionalExpression(_) => "ConditionalExpression",
            NodeKind::ParenthesizedExpression(_) => "ParenthesizedExpression",
            NodeKind::InitializerList(_) => "InitializerList",
            NodeKind::Literal(_) => "Literal",
        }
    }

    /// The declared name for declaration kinds.
    pub fn declared_name(&self) -> Option<&str> {
        match self {
            NodeKind::NamespaceDeclaration(data) => Some(&data.name),
            NodeKind::StructOrClassDeclaration(data) => Some(&data.name),
            NodeKind::EnumDeclaration(data) => Some(&data.name),
            NodeKind::TypedefDeclaration(data) => Some(&data.name),
            NodeKind::FunctionDeclaration(data) => Some(&data.name),
            NodeKind::VariableOrParameterDeclaration(data) => Some(&data.name),
            _ => None,
        }
    }
}
