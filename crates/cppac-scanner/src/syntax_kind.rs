//! Token kinds produced by the scanner.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntaxKind {
    // Names and literals
    Identifier,
    NumericLiteral,
    StringLiteral,
    CharLiteral,

    // Aggregate and scope keywords
    StructKeyword,
    ClassKeyword,
    UnionKeyword,
    EnumKeyword,
    NamespaceKeyword,
    TypedefKeyword,
    PublicKeyword,
    PrivateKeyword,
    ProtectedKeyword,

    // Statement keywords
    IfKeyword,
    ElseKeyword,
    ForKeyword,
    WhileKeyword,
    DoKeyword,
    ReturnKeyword,
    BreakKeyword,
    ContinueKeyword,

    // Builtin type keywords
    VoidKeyword,
    BoolKeyword,
    CharKeyword,
    ShortKeyword,
    IntKeyword,
    LongKeyword,
    FloatKeyword,
    DoubleKeyword,
    SignedKeyword,
    UnsignedKeyword,
    AutoKeyword,

    // Declaration qualifiers
    ConstKeyword,
    VolatileKeyword,
    StaticKeyword,
    ExternKeyword,
    InlineKeyword,
    ConstexprKeyword,
    VirtualKeyword,

    // Literal keywords
    TrueKeyword,
    FalseKeyword,
    NullptrKeyword,

    // Punctuation
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Semicolon,
    Comma,
    Colon,
    ColonColon,
    Question,
    Dot,
    Arrow,
    Ellipsis,

    // Operators
    Plus,
    PlusPlus,
    PlusEquals,
    Minus,
    MinusMinus,
    MinusEquals,
    Asterisk,
    AsteriskEquals,
    Slash,
    SlashEquals,
    Percent,
    PercentEquals,
    Ampersand,
    AmpersandAmpersand,
    AmpersandEquals,
    Bar,
    BarBar,
    BarEquals,
    Caret,
    CaretEquals,
    Tilde,
    Exclamation,
    ExclamationEquals,
    Equals,
    EqualsEquals,
    Less,
    LessEquals,
    LessLess,
    LessLessEquals,
    Greater,
    GreaterEquals,
    GreaterGreater,
    GreaterGreaterEquals,

    /// A whole preprocessor directive line (`#include <x>`, `#define ...`).
    Directive,
    /// Any character the scanner does not recognize.
    Unknown,
    EndOfFile,
}

impl SyntaxKind {
    /// Map an identifier-shaped word to its keyword kind.
    pub fn keyword(text: &str) -> Option<SyntaxKind> {
        let kind = match text {
            "struct" => SyntaxKind::StructKeyword,
            "class" => SyntaxKind::ClassKeyword,
            "union" => SyntaxKind::UnionKeyword,
            "enum" => SyntaxKind::EnumKeyword,
            "namespace" => SyntaxKind::NamespaceKeyword,
            "typedef" => SyntaxKind::TypedefKeyword,
            "public" => SyntaxKind::PublicKeyword,
            "private" => SyntaxKind::PrivateKeyword,
            "protected" => SyntaxKind::ProtectedKeyword,
            "if" => SyntaxKind::IfKeyword,
            "else" => SyntaxKind::ElseKeyword,
            "for" => SyntaxKind::ForKeyword,
            "while" => SyntaxKind::WhileKeyword,
            "do" => SyntaxKind::DoKeyword,
            "return" => SyntaxKind::ReturnKeyword,
            "break" => SyntaxKind::BreakKeyword,
            "continue" => SyntaxKind::ContinueKeyword,
            "void" => SyntaxKind::VoidKeyword,
            "bool" => SyntaxKind::BoolKeyword,
            "char" => SyntaxKind::CharKeyword,
            "short" => SyntaxKind::ShortKeyword,
            "int" => SyntaxKind::IntKeyword,
            "long" => SyntaxKind::LongKeyword,
            "float" => SyntaxKind::FloatKeyword,
            "double" => SyntaxKind::DoubleKeyword,
            "signed" => SyntaxKind::SignedKeyword,
            "unsigned" => SyntaxKind::UnsignedKeyword,
            "auto" => SyntaxKind::AutoKeyword,
            "const" => SyntaxKind::ConstKeyword,
            "volatile" => SyntaxKind::VolatileKeyword,
            "static" => SyntaxKind::StaticKeyword,
            "extern" => SyntaxKind::ExternKeyword,
            "inline" => SyntaxKind::InlineKeyword,
            "constexpr" => SyntaxKind::ConstexprKeyword,
            "virtual" => SyntaxKind::VirtualKeyword,
            "true" => SyntaxKind::TrueKeyword,
            "false" => SyntaxKind::FalseKeyword,
            "nullptr" => SyntaxKind::NullptrKeyword,
            _ => return None,
        };
        Some(kind)
    }

    /// Builtin type keywords (`int`, `unsigned`, `void`, ...).
    pub fn is_type_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::VoidKeyword
                | SyntaxKind::BoolKeyword
                | SyntaxKind::CharKeyword
                | SyntaxKind::ShortKeyword
                | SyntaxKind::IntKeyword
                | SyntaxKind::LongKeyword
                | SyntaxKind::FloatKeyword
                | SyntaxKind::DoubleKeyword
                | SyntaxKind::SignedKeyword
                | SyntaxKind::UnsignedKeyword
                | SyntaxKind::AutoKeyword
        )
    }

    /// Qualifiers and storage classes that may precede a declaration's type.
    pub fn is_declaration_qualifier(self) -> bool {
        matches!(
            self,
            SyntaxKind::ConstKeyword
                | SyntaxKind::VolatileKeyword
                | SyntaxKind::StaticKeyword
                | SyntaxKind::ExternKeyword
                | SyntaxKind::InlineKeyword
                | SyntaxKind::ConstexprKeyword
                | SyntaxKind::VirtualKeyword
        )
    }

    /// Keywords that introduce an aggregate type.
    pub fn is_aggregate_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::StructKeyword | SyntaxKind::ClassKeyword | SyntaxKind::UnionKeyword
        )
    }

    /// `.` and `->`.
    pub fn is_member_access(self) -> bool {
        matches!(self, SyntaxKind::Dot | SyntaxKind::Arrow)
    }

    pub fn is_assignment_operator(self) -> bool {
        matches!(
            self,
            SyntaxKind::Equals
                | SyntaxKind::PlusEquals
                | SyntaxKind::MinusEquals
                | SyntaxKind::AsteriskEquals
                | SyntaxKind::SlashEquals
                | SyntaxKind::PercentEquals
                | SyntaxKind::AmpersandEquals
                | SyntaxKind::BarEquals
                | SyntaxKind::CaretEquals
                | SyntaxKind::LessLessEquals
                | SyntaxKind::GreaterGreaterEquals
        )
    }

    /// Precedence of a binary operator; higher binds tighter.
    /// Returns `None` for tokens that are not binary operators.
    pub fn binary_precedence(self) -> Option<u8> {
        let precedence = match self {
            SyntaxKind::BarBar => 1,
            SyntaxKind::AmpersandAmpersand => 2,
            SyntaxKind::Bar => 3,
            SyntaxKind::Caret => 4,
            SyntaxKind::Ampersand => 5,
            SyntaxKind::EqualsEquals | SyntaxKind::ExclamationEquals => 6,
            SyntaxKind::Less
            | SyntaxKind::LessEquals
            | SyntaxKind::Greater
            | SyntaxKind::GreaterEquals => 7,
            SyntaxKind::LessLess | SyntaxKind::GreaterGreater => 8,
            SyntaxKind::Plus | SyntaxKind::Minus => 9,
            SyntaxKind::Asterisk | SyntaxKind::Slash | SyntaxKind::Percent => 10,
            _ => return None,
        };
        Some(precedence)
    }
}
