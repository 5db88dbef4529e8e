//! Error-tolerant C/C++ subset parser for the cppac completion engine.
//!
//! This crate provides:
//! - `NodeArena` - Arena storage for AST nodes with parent links and
//!   per-scope declaration lists
//! - `NodeIndex` - Handle to a node in the arena
//! - `ParserState` - Recursive-descent parser producing an arena-backed AST
//! - `token_at_offset` - Token lookup by byte offset

pub mod base;
pub use base::NodeIndex;

pub mod node;
pub use node::{Node, NodeKind, NodeList, VariableRole};

pub mod arena;
pub use arena::NodeArena;

pub mod node_access;
pub use node_access::{Ancestors, token_at_offset};

mod state;
pub use state::ParserState;
mod state_declarations;
mod state_expressions;
mod state_statements;

#[cfg(test)]
#[path = "../tests/parser_tests.rs"]
mod parser_tests;

#[cfg(test)]
#[path = "../tests/node_access_tests.rs"]
mod node_access_tests;
