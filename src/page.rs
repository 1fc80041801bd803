//! Page representation: one route's worth of parsed content.
//!
//! A page couples a site route with its parsed markdown structure and the
//! outline derived from it. The outline is immutable for the life of the
//! page view; the tracker and the outline pane both read from it.

use crate::markdown::Document;
use crate::toc::TocEntry;

#[derive(Clone, Debug)]
/// One documentation page addressed by its site route.
pub struct Page {
    /// Site route, e.g. `/about/what-is-depin`.
    pub route: String,
    /// Display title (first level-1 heading, else derived from the file name).
    pub title: String,
    /// Parsed block structure.
    pub document: Document,
    /// Two-level outline for the "On this page" pane.
    pub toc: Vec<TocEntry>,
}

impl Page {
    #[must_use]
    /// Assembles a page, deriving its outline from the document.
    pub fn new(route: String, title: String, document: Document) -> Self {
        let toc = document.outline();
        Self {
            route,
            title,
            document,
            toc,
        }
    }
}
