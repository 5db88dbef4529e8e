//! Centralized limits and thresholds for the completion engine.
//!
//! Every recursive walk in the engine is bounded by one of these values so that
//! pathological input (deep include chains, deeply nested expressions, typedef
//! loops) degrades to "no suggestions" instead of overflowing the stack.

/// Maximum depth of a chain of `#include` directives followed while populating
/// the document graph.
///
/// Cycles are caught by the visited-path guard long before this limit; it only
/// bounds long acyclic chains of distinct headers.
pub const MAX_INCLUDE_DEPTH: usize = 64;

/// Maximum nesting depth accepted by the parser for statements and expressions.
///
/// When exceeded, the parser stops descending and skips the offending token,
/// so the rest of the document still produces a tree.
pub const MAX_PARSE_DEPTH: u32 = 128;

/// Maximum number of `typedef` hops followed when resolving an aggregate name.
///
/// ```c
/// typedef struct Point Point2;
/// typedef Point2 Point3;   // two hops from Point3 to Point
/// ```
pub const MAX_TYPEDEF_CHAIN: usize = 16;

/// Default root for system (`<...>`) includes.
pub const DEFAULT_SYSTEM_INCLUDE_ROOT: &str = "/usr/include";
