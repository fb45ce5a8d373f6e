//! Source positions, spans and delta arithmetic
//!
//! Positions are 1-indexed `(line, column)` pairs ordered lexicographically.
//! A [`DeltaPos`] is a position relative to the printing cursor: on the same
//! line it advances the column, on a later line it lands at a column measured
//! from the current layout offset.

use crate::error::PrintError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute source position, 1-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub line: u32,
    pub column: u32,
}

impl Pos {
    /// First column of the first line
    pub const START: Pos = Pos { line: 1, column: 1 };

    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Position reached after writing `text` starting here
    pub fn advance_over(self, text: &str) -> Pos {
        text.chars().fold(self, |pos, c| {
            if c == '\n' {
                Pos::new(pos.line + 1, 1)
            } else {
                Pos::new(pos.line, pos.column + 1)
            }
        })
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Relative offset from the cursor to a target position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeltaPos {
    pub lines: u32,
    pub column: i32,
}

impl DeltaPos {
    pub const ZERO: DeltaPos = DeltaPos { lines: 0, column: 0 };

    /// One column to the right on the same line
    pub const SPACE: DeltaPos = DeltaPos { lines: 0, column: 1 };

    pub const fn new(lines: u32, column: i32) -> Self {
        Self { lines, column }
    }

    pub fn is_same_line(&self) -> bool {
        self.lines == 0
    }

    /// Resolve this delta against `cursor`.
    ///
    /// Same-line deltas are column-relative. Deltas with `lines > 0` land at
    /// `1 + offset.column + column` on the target line. A column that would
    /// fall left of column 1 is reported as column 0, which no pad accepts.
    pub fn apply(self, cursor: Pos, offset: DeltaPos) -> Pos {
        if self.lines == 0 {
            Pos::new(cursor.line, shift(cursor.column, self.column))
        } else {
            let base = shift(1, offset.column);
            Pos::new(cursor.line + self.lines, shift(base, self.column))
        }
    }
}

impl fmt::Display for DeltaPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Δ({},{})", self.lines, self.column)
    }
}

fn shift(column: u32, by: i32) -> u32 {
    (i64::from(column) + i64::from(by)).max(0) as u32
}

/// Start/end pair delimiting a node or token in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    /// Zero-width span with no location; marks synthetic nodes and tokens
    pub const NULL: Span = Span {
        start: Pos { line: 0, column: 0 },
        end: Pos { line: 0, column: 0 },
    };

    pub const fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    /// Span from raw coordinates `(line, column)-(line, column)`
    pub const fn from_coords(
        start_line: u32,
        start_column: u32,
        end_line: u32,
        end_column: u32,
    ) -> Self {
        Self {
            start: Pos::new(start_line, start_column),
            end: Pos::new(end_line, end_column),
        }
    }

    /// Zero-width span at `pos`
    pub const fn empty_at(pos: Pos) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Zero extent: synthetic or absent token, never printed
    pub fn is_null(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Padding that moves the cursor from `cursor` to `target`.
///
/// Newlines are emitted when `target` is on a later line, followed by the
/// spaces needed to reach its column. Moving backwards is an error.
pub fn advance_to(cursor: Pos, target: Pos) -> Result<String, PrintError> {
    if target < cursor || target.column == 0 {
        return Err(PrintError::NonMonotonicPosition { cursor, target });
    }

    if target.line == cursor.line {
        return Ok(" ".repeat((target.column - cursor.column) as usize));
    }

    let mut padding = "\n".repeat((target.line - cursor.line) as usize);
    padding.push_str(&" ".repeat((target.column - 1) as usize));
    Ok(padding)
}
