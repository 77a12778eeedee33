//! Leading-whitespace classification.

use crate::cursor::LineCursor;
use guidon_core::depth_at;

/// The classification of one tab-stop cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// The position does not start in leading whitespace; the rest of the
    /// line has been consumed.
    None,
    /// Leading whitespace at the given 0-based indentation depth.
    Guide(u32),
}

impl Classification {
    /// Whether a guide should be drawn for this cell.
    #[inline]
    pub fn is_guide(self) -> bool {
        matches!(self, Classification::Guide(_))
    }

    /// The guide depth, if any.
    #[inline]
    pub fn depth(self) -> Option<u32> {
        match self {
            Classification::Guide(depth) => Some(depth),
            Classification::None => None,
        }
    }
}

/// Classify the tab-stop cell starting at the cursor's position.
///
/// Consumes up to `space_units` characters: a space counts off one column
/// of the cell, a tab fills the rest of the cell outright. When content
/// (or end of line) appears after some whitespace has been consumed, the
/// one content character already read is handed back to the cursor and
/// the whitespace seen still classifies as a guide cell. When content is
/// the very first character, the rest of the line is consumed and no
/// guide is reported.
///
/// `space_units` must be positive; callers clamp their configuration
/// before invoking (see `EditorSettings::space_units` in
/// `guidon_settings`) and must re-read it on every call rather than
/// caching it.
pub fn classify<C: LineCursor + ?Sized>(cursor: &mut C, space_units: u32) -> Classification {
    debug_assert!(space_units > 0, "space_units must be positive");

    let depth = depth_at(cursor.column(), space_units);
    let mut remaining = space_units;
    let mut first = true;

    // Entered at a tab stop: count off space_units columns, or until a
    // tab closes the cell.
    while remaining > 0 {
        match cursor.next() {
            Some('\t') => remaining = 0,
            Some(' ') => remaining -= 1,
            other => {
                if first {
                    cursor.skip_to_end();
                    return Classification::None;
                }
                // Whitespace ended mid-cell; hand the content character
                // back. The end-of-line sentinel consumed nothing, so
                // only a real read is undone.
                if other.is_some() {
                    cursor.backup(1);
                }
                remaining = 0;
            }
        }
        first = false;
    }

    Classification::Guide(depth)
}
