//! Position queries against a parsed document.

use cppac_common::Position;
use cppac_parser::{NodeIndex, token_at_offset};
use cppac_scanner::Token;

use crate::document::Document;

fn offset_of(document: &Document, position: Position) -> Option<u32> {
    document
        .line_map()
        .position_to_offset(position, document.text())
}

/// The innermost node whose span contains the character at `position`.
pub fn node_at(document: &Document, position: Position) -> Option<NodeIndex> {
    let offset = offset_of(document, position)?;
    document.arena().node_at_offset(offset)
}

/// The token covering the character at `position`, i.e. the token just
/// before the host's caret.
pub fn token_before(document: &Document, position: Position) -> Option<Token> {
    let offset = offset_of(document, position)?;
    token_at_offset(document.tokens(), offset)
}
