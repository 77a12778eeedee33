//! guidon_scanner: The indentation depth scanner.
//!
//! Classifies the leading whitespace of a line into tab-stop "depth
//! bands" so a renderer can draw a vertical guide at each indentation
//! level. Mixed tab/space indentation is handled cell by cell: spaces
//! count off one column each, and a tab always fills the rest of its
//! cell, matching hard tab-stop alignment.
//!
//! The scanner is stateless and re-entrant; all state lives in the
//! caller-owned [`LineCursor`].

mod classify;
mod cursor;

pub use classify::{classify, Classification};
pub use cursor::{LineCursor, StringCursor};
