//! Position and location utilities.
//!
//! Hosts speak in line/column positions, while tokens and nodes carry byte
//! offsets. This module provides conversion utilities.

use serde::{Deserialize, Serialize};

/// A position in a document (0-indexed line and column).
///
/// The column counts Unicode scalar values and names a *character*, not a gap
/// between characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed character column
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

/// A caret position as reported by the host editor.
///
/// `line` is 0-indexed; `column` is the caret column, i.e. the number of
/// characters to the left of the caret on that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostPosition {
    pub line: u32,
    pub column: u32,
}

impl HostPosition {
    pub fn new(line: u32, column: u32) -> Self {
        HostPosition { line, column }
    }

    /// The position of the character immediately before the caret.
    ///
    /// Returns `None` for column zero, which has no such character.
    pub fn to_internal(self) -> Option<Position> {
        let column = self.column.checked_sub(1)?;
        Some(Position::new(self.line, column))
    }
}

/// Line map for efficient offset <-> position conversion.
/// Stores the starting offset of each line.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Starting offset of each line (line_starts[0] is always 0)
    line_starts: Vec<u32>,
}

impl LineMap {
    /// Build a line map from source text.
    pub fn build(source: &str) -> Self {
        let mut line_starts = vec![0u32];

        for (i, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push((i + 1) as u32);
            } else if ch == '\r' {
                // \r\n is a single line ending; the \n pushes the line start
                let next_idx = i + 1;
                if source.as_bytes().get(next_idx) != Some(&b'\n') {
                    line_starts.push(next_idx as u32);
                }
            }
        }

        LineMap { line_starts }
    }

    /// Convert a byte offset to a Position.
    pub fn offset_to_position(&self, offset: u32, source: &str) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert_point) => insert_point.saturating_sub(1),
        };

        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        let clamped_end = (offset as usize).min(source.len());
        let start = (line_start as usize).min(clamped_end);
        let slice = source.get(start..clamped_end).unwrap_or("");

        Position {
            line: line as u32,
            column: slice.chars().count() as u32,
        }
    }

    /// Convert a Position to a byte offset.
    ///
    /// A column equal to the line length maps to the line terminator (or the
    /// end of the text on the last line). Columns past that, and lines past the
    /// end of the document, yield `None`.
    pub fn position_to_offset(&self, position: Position, source: &str) -> Option<u32> {
        let line_idx = position.line as usize;
        let line_start = *self.line_starts.get(line_idx)?;
        let line_limit = self
            .line_starts
            .get(line_idx + 1)
            .copied()
            .unwrap_or(source.len() as u32);
        let line_text = source.get(line_start as usize..line_limit as usize)?;
        let line_text = line_text.trim_end_matches(['\n', '\r']);

        let mut column = 0u32;
        for (byte_idx, _) in line_text.char_indices() {
            if column == position.column {
                return Some(line_start + byte_idx as u32);
            }
            column += 1;
        }

        if column == position.column {
            Some(line_start + line_text.len() as u32)
        } else {
            None
        }
    }

    /// Get the number of lines.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
#[path = "../tests/position_tests.rs"]
mod position_tests;
