//! Column arithmetic with hard tab-stop expansion.
//!
//! Columns are 0-based display positions within a line. A tab does not
//! occupy a fixed number of columns; it snaps the position to the next
//! tab stop, so column arithmetic must go through [`advance_column`]
//! rather than counting characters.

/// A 0-based horizontal position within a line, measured in display columns.
pub type Column = u32;

/// Advance a column past one character.
///
/// A tab snaps to the next multiple of `tab_width`; every other character
/// occupies exactly one column. `tab_width` must be positive.
#[inline]
pub fn advance_column(col: Column, ch: char, tab_width: u32) -> Column {
    debug_assert!(tab_width > 0);
    if ch == '\t' {
        (col / tab_width + 1) * tab_width
    } else {
        col + 1
    }
}

/// The 0-based indentation depth of a column: the index of the tab-stop
/// cell the column falls within. `space_units` must be positive.
#[inline]
pub fn depth_at(col: Column, space_units: u32) -> u32 {
    debug_assert!(space_units > 0);
    col / space_units
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_column_space() {
        assert_eq!(advance_column(0, ' ', 4), 1);
        assert_eq!(advance_column(7, 'x', 4), 8);
    }

    #[test]
    fn test_advance_column_tab_snaps_to_next_stop() {
        assert_eq!(advance_column(0, '\t', 4), 4);
        assert_eq!(advance_column(1, '\t', 4), 4);
        assert_eq!(advance_column(3, '\t', 4), 4);
        assert_eq!(advance_column(4, '\t', 4), 8);
        assert_eq!(advance_column(5, '\t', 2), 6);
    }

    #[test]
    fn test_depth_at() {
        assert_eq!(depth_at(0, 4), 0);
        assert_eq!(depth_at(3, 4), 0);
        assert_eq!(depth_at(4, 4), 1);
        assert_eq!(depth_at(11, 4), 2);
        assert_eq!(depth_at(11, 1), 11);
    }
}
