//! The per-line scanning cursor.

use guidon_core::{advance_column, Column};

/// Capabilities the scanner needs from a host's line stream.
///
/// Columns are 0-based display columns with hard tab expansion: consuming
/// a tab advances the column to the next tab stop, anything else advances
/// it by one. `next` yields `None` at end of line and consumes nothing
/// there, so reading past the end is well defined rather than an error.
pub trait LineCursor {
    /// Current display column.
    fn column(&self) -> Column;

    /// Consume and return one character, or `None` at end of line.
    fn next(&mut self) -> Option<char>;

    /// Return the last `n` consumed characters to the stream.
    ///
    /// Only depth 1 is required: the scanner undoes at most the single
    /// read immediately behind it.
    fn backup(&mut self, n: usize);

    /// Consume the remainder of the line.
    fn skip_to_end(&mut self);
}

/// An in-memory, string-backed [`LineCursor`] over a single line.
///
/// Owns exactly one line (no terminators) and tracks tab-expanded columns
/// itself, so the scanner can be exercised without any host editor
/// present.
#[derive(Debug, Clone)]
pub struct StringCursor {
    chars: Vec<char>,
    /// Display column before each character, with one extra entry for the
    /// end-of-line position.
    columns: Vec<Column>,
    pos: usize,
}

impl StringCursor {
    /// Create a cursor over one line. `tab_width` must be positive.
    pub fn new(line: &str, tab_width: u32) -> Self {
        debug_assert!(tab_width > 0);
        let chars: Vec<char> = line.chars().collect();
        let mut columns = Vec::with_capacity(chars.len() + 1);
        let mut col = 0;
        for &ch in &chars {
            columns.push(col);
            col = advance_column(col, ch, tab_width);
        }
        columns.push(col);
        Self {
            chars,
            columns,
            pos: 0,
        }
    }

    /// How many characters have been consumed so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// Whether the cursor has reached the end of the line.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}

impl LineCursor for StringCursor {
    #[inline]
    fn column(&self) -> Column {
        self.columns[self.pos]
    }

    fn next(&mut self) -> Option<char> {
        let ch = self.chars.get(self.pos).copied();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn backup(&mut self, n: usize) {
        self.pos = self.pos.saturating_sub(n);
    }

    fn skip_to_end(&mut self) {
        self.pos = self.chars.len();
    }
}
