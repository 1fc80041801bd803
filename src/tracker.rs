//! Active-section tracking for the outline pane.
//!
//! As the reader scrolls a long page, exactly one outline entry is "where
//! the reader is": the last heading in document order whose rendered top
//! sits at or above the scroll offset. The selection itself is a pure
//! function over a resolved position list, so it is testable without any
//! rendering surface; the surface only supplies anchor positions through
//! the [`AnchorSurface`] capability.
//!
//! A tracker is built when a page with a non-empty outline is opened and
//! dropped when the reader navigates away, so scroll events can only ever
//! reach positions resolved from the layout currently on screen.

use crate::toc::{self, TocEntry};

/// Resolved vertical position of one rendered heading.
///
/// `top` is in document coordinates (rendered line index), already reduced
/// by the heading's scroll margin so a heading sitting just under the
/// sticky header still counts as reached.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct HeadingPosition {
    /// Anchor identifier matching a [`TocEntry`] id.
    pub id: String,
    /// Margin-adjusted document offset where the heading begins.
    pub top: usize,
}

/// Anchor lookup capability provided by the rendering surface.
///
/// The tracker never touches the layout directly; anything that can map an
/// anchor id to a margin-adjusted document offset can drive it, including
/// the table-backed fake the tests use.
pub trait AnchorSurface {
    /// Margin-adjusted top of the rendered heading, or `None` if no element
    /// with this id is currently rendered.
    fn anchor_top(&self, id: &str) -> Option<usize>;
}

#[must_use]
/// Resolves an outline against a surface into document-order positions.
///
/// Ids with no rendered element are skipped rather than reported: a missing
/// anchor is expected (content not mounted) and never an error.
pub fn resolve_positions(entries: &[TocEntry], surface: &dyn AnchorSurface) -> Vec<HeadingPosition> {
    toc::flatten(entries)
        .into_iter()
        .filter_map(|entry| {
            surface.anchor_top(&entry.id).map(|top| HeadingPosition {
                id: entry.id.clone(),
                top,
            })
        })
        .collect()
}

#[must_use]
/// Selects the active heading for a scroll offset.
///
/// Returns the id of the last position in traversal order with
/// `top <= offset`, falling back to the first position when the reader is
/// above every heading. An offset exactly equal to a heading's top selects
/// that heading. Empty input yields `None`.
pub fn active_section(positions: &[HeadingPosition], offset: usize) -> Option<&str> {
    let mut current = positions.first()?;
    for position in positions {
        if offset >= position.top {
            current = position;
        } else {
            break;
        }
    }
    Some(current.id.as_str())
}

/// Tracks which outline entry is active while a page is mounted.
///
/// Construction resolves the position list once from the current layout and
/// performs an eager update at the current scroll offset; afterwards every
/// scroll event re-selects against the same resolved list. Replacing the
/// page replaces the tracker wholesale, so stale positions are never
/// consulted across a navigation.
pub struct SectionTracker {
    positions: Vec<HeadingPosition>,
    active: Option<String>,
}

impl SectionTracker {
    #[must_use]
    /// Starts tracking an outline against a rendering surface.
    ///
    /// Returns `None` for an empty outline: no tracker exists, so no scroll
    /// handling is attached and no active id is ever produced. For a
    /// non-empty outline the initial active entry is the first top-level
    /// entry, immediately refined by an eager pass at `offset`.
    pub fn track(
        entries: &[TocEntry],
        surface: &dyn AnchorSurface,
        offset: usize,
    ) -> Option<Self> {
        let first = entries.first()?;
        let mut tracker = Self {
            positions: resolve_positions(entries, surface),
            active: Some(first.id.clone()),
        };
        tracker.on_scroll(offset);
        Some(tracker)
    }

    /// Re-selects the active entry for a new scroll offset.
    ///
    /// Runs in one pass over the resolved positions with no allocation
    /// beyond the id swap, so it is safe to call on every scroll tick. When
    /// nothing resolved (all anchors missing), the initial entry stands.
    pub fn on_scroll(&mut self, offset: usize) {
        if let Some(id) = active_section(&self.positions, offset) {
            if self.active.as_deref() != Some(id) {
                self.active = Some(id.to_owned());
            }
        }
    }

    #[must_use]
    /// Currently active anchor id.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[must_use]
    /// Resolved positions in traversal order, for inspection.
    pub fn positions(&self) -> &[HeadingPosition] {
        &self.positions
    }
}

#[cfg(test)]
#[path = "tests/tracker.rs"]
mod tests;
