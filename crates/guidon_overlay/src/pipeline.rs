//! The overlay tokenization pass and the pane registry.

use guidon_core::{Column, LineIndex};
use guidon_scanner::{classify, Classification, LineCursor, StringCursor};
use guidon_settings::{EditorSettings, Preferences};
use rustc_hash::FxHashMap;

use crate::style::GuideStyle;

/// A classifier attachable to a tokenization pass.
///
/// `token` is invoked at each unconsumed position of a line and either
/// claims a token, returning its render style, or declines, leaving the
/// cursor where default tokenization should resume.
pub trait Overlay {
    fn token(&self, cursor: &mut dyn LineCursor, settings: &EditorSettings) -> Option<GuideStyle>;
}

/// The indent guide overlay: the depth scanner behind the [`Overlay`] seam.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndentGuideOverlay;

impl Overlay for IndentGuideOverlay {
    fn token(&self, cursor: &mut dyn LineCursor, settings: &EditorSettings) -> Option<GuideStyle> {
        // The width is read fresh on every call; a settings change takes
        // effect from the next cell onward.
        match classify(cursor, settings.space_units()) {
            Classification::Guide(depth) => Some(GuideStyle::new(depth)),
            Classification::None => None,
        }
    }
}

/// One guide segment within a line: a vertical mark at `column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideSpan {
    /// Display column where the guide is drawn.
    pub column: Column,
    /// 0-based indentation depth of the cell.
    pub depth: u32,
}

/// Drive an overlay across one line, collecting a span per claimed cell.
pub fn scan_line(overlay: &dyn Overlay, line: &str, settings: &EditorSettings) -> Vec<GuideSpan> {
    let mut cursor = StringCursor::new(line, settings.space_units());
    let mut spans = Vec::new();
    loop {
        let column = cursor.column();
        match overlay.token(&mut cursor, settings) {
            Some(style) => spans.push(GuideSpan {
                column,
                depth: style.depth(),
            }),
            // Content follows, or the line is exhausted; nothing past
            // this point is leading whitespace.
            None => break,
        }
    }
    spans
}

/// Scan every line of a document, returning the spans per line.
pub fn scan_document(
    overlay: &dyn Overlay,
    text: &str,
    settings: &EditorSettings,
) -> Vec<Vec<GuideSpan>> {
    let index = LineIndex::new(text);
    (0..index.line_count())
        .map(|line| scan_line(overlay, index.line(text, line as u32), settings))
        .collect()
}

/// Identifier of an editor pane hosting a tokenization pass.
pub type PaneId = u32;

#[derive(Debug, Default)]
struct PaneState {
    attached: bool,
    refreshes: u64,
}

/// Attach/detach bookkeeping for the guide overlay across panes.
///
/// Mirrors an editor's overlay surface: attaching is idempotent,
/// detaching an absent overlay is a no-op, and `refresh` requests a
/// redraw of the pane's visible lines.
#[derive(Debug, Default)]
pub struct OverlayRegistry {
    panes: FxHashMap<PaneId, PaneState>,
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the guide overlay to a pane.
    pub fn add_overlay(&mut self, pane: PaneId) {
        self.panes.entry(pane).or_default().attached = true;
    }

    /// Detach the guide overlay from a pane.
    pub fn remove_overlay(&mut self, pane: PaneId) {
        if let Some(state) = self.panes.get_mut(&pane) {
            state.attached = false;
        }
    }

    /// Whether the overlay is attached to a pane.
    pub fn is_attached(&self, pane: PaneId) -> bool {
        self.panes.get(&pane).is_some_and(|state| state.attached)
    }

    /// Request a redraw of the pane's visible lines.
    pub fn refresh(&mut self, pane: PaneId) {
        self.panes.entry(pane).or_default().refreshes += 1;
    }

    /// How many redraws have been requested for a pane.
    pub fn refresh_count(&self, pane: PaneId) -> u64 {
        self.panes.get(&pane).map_or(0, |state| state.refreshes)
    }

    /// Apply the persisted toggle to a pane: detach, re-attach when
    /// enabled, then redraw.
    pub fn sync(&mut self, pane: PaneId, prefs: &Preferences) {
        self.remove_overlay(pane);
        if prefs.enabled {
            self.add_overlay(pane);
        }
        self.refresh(pane);
    }

    /// A change of active document re-applies the toggle to that pane.
    pub fn on_document_change(&mut self, pane: PaneId, prefs: &Preferences) {
        self.sync(pane, prefs);
    }
}
