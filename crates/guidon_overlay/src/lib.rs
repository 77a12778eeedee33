//! guidon_overlay: The indent guide rendering pipeline.
//!
//! Sits between the depth scanner and a host renderer: drives the scanner
//! across each line through the [`Overlay`] seam, maps classified cells
//! to render styles, and keeps the per-pane attach/detach state that the
//! persisted toggle controls.

mod pipeline;
mod style;

pub use pipeline::{
    scan_document, scan_line, GuideSpan, IndentGuideOverlay, Overlay, OverlayRegistry, PaneId,
};
pub use style::GuideStyle;
