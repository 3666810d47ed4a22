use std::cmp::Ordering;
use std::fmt;

/// A location in a document: line and column, both 0-indexed.
///
/// `col` counts chars from the start of the line. Positions order by line
/// first, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    pub fn is_before(&self, other: &Position) -> bool {
        self < other
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then(self.col.cmp(&other.col))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Selection state of an editor.
///
/// `anchor` stays put while `active` (the cursor) moves. The pair may be in
/// either document order; `start()`/`end()` give the normalized view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub anchor: Position,
    pub active: Position,
}

impl Selection {
    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// Cursor with nothing selected.
    pub fn collapsed(pos: Position) -> Self {
        Self {
            anchor: pos,
            active: pos,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    pub fn start(&self) -> Position {
        self.anchor.min(self.active)
    }

    pub fn end(&self) -> Position {
        self.anchor.max(self.active)
    }

    /// True when the cursor sits before the anchor.
    pub fn is_reversed(&self) -> bool {
        self.active < self.anchor
    }

    /// The same two endpoints with the cursor on the other end.
    ///
    /// Compares positions by value, so a cursor at `start()` always lands on
    /// `end()` and vice versa.
    pub fn exchanged(&self) -> Self {
        if self.is_empty() {
            return *self;
        }

        let (start, end) = (self.start(), self.end());
        if self.active == start {
            Selection::new(start, end)
        } else {
            Selection::new(end, start)
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.anchor, self.active)
    }
}
