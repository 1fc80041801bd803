//! Table-of-contents representation for rendered documentation pages.
//!
//! A page's table of contents is a two-level tree of section headings: the
//! top-level entries are the page's major sections and each may carry a run
//! of subsection children. Entries hold the stable anchor id that the layout
//! uses to address the rendered heading, so the outline pane and the active
//! section highlight both key off the same identifiers.

#[derive(Clone, PartialEq, Eq, Debug)]
/// One heading in the page outline, with its nested subsections.
pub struct TocEntry {
    /// Stable anchor identifier matching the rendered heading.
    pub id: String,
    /// Heading text without markup symbols.
    pub title: String,
    /// Ordered subsection entries (one level of nesting).
    pub children: Vec<TocEntry>,
}

impl TocEntry {
    #[must_use]
    /// Builds a leaf entry with no subsections.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            children: Vec::new(),
        }
    }

    #[must_use]
    /// Whether this entry or any of its descendants carries the active id.
    ///
    /// A parent stays highlighted in the outline pane while the reader is
    /// inside one of its subsections.
    pub fn is_active(&self, active_id: Option<&str>) -> bool {
        let Some(active) = active_id else {
            return false;
        };
        if self.id == active {
            return true;
        }
        self.children.iter().any(|child| child.is_active(active_id))
    }
}

#[must_use]
/// Flattens a table of contents into document order.
///
/// Each top-level entry is followed by its children, matching the order the
/// headings appear on the rendered page. Position resolution and the active
/// section scan both traverse this order.
pub fn flatten(entries: &[TocEntry]) -> Vec<&TocEntry> {
    entries
        .iter()
        .flat_map(|entry| std::iter::once(entry).chain(entry.children.iter()))
        .collect()
}

#[cfg(test)]
#[path = "tests/toc.rs"]
mod tests;
