//! The core state bridging loaded pages and the interactive browser.
//!
//! A TUI needs a single source of truth that can be interrogated and
//! mutated as the reader navigates and scrolls. The app owns the loaded
//! pages, the current route, the line-based scroll offset, and the
//! active-section tracker for the page on screen. Every scroll mutation
//! funnels through one dispatch point so the header elevation flag and the
//! tracker always observe the same offset; navigating to another page
//! rebuilds the layout and replaces the tracker wholesale.

use crate::config::Config;
use crate::layout::{self, CodeHighlighter, LayoutOptions, PageLayout};
use crate::nav::{NavLink, NavMap, HOME_ROUTE};
use crate::page::Page;
use crate::table::{RoleFilter, TeamMember};
use crate::theme::Theme;
use crate::tracker::SectionTracker;

/// Browser state for one session.
pub struct App {
    /// Static navigation map driving the sidebar and footer.
    pub nav: NavMap,
    /// Pages loaded from the content directory, sorted by route.
    pub pages: Vec<Page>,
    /// Index of the page on screen.
    pub current: usize,
    /// Scroll offset into the rendered document, in lines.
    pub scroll: usize,
    /// Whether the page is scrolled away from the top (header elevation).
    pub header_scrolled: bool,
    /// Active-section tracking for the current page; `None` while the
    /// page's outline is empty, so scroll events have nothing to reach.
    pub tracker: Option<SectionTracker>,
    /// Active color scheme.
    pub theme: Theme,
    /// Role filter applied to the team directory table.
    pub role_filter: RoleFilter,
    /// Team directory rows (sample data or loaded from JSON).
    pub members: Vec<TeamMember>,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    layout: PageLayout,
    highlighter: CodeHighlighter,
    scroll_margin: usize,
    wrap_width: usize,
    content_width: usize,
    content_height: usize,
}

impl App {
    #[must_use]
    /// Initialises the browser on the home route when it is loaded, else on
    /// the first page.
    ///
    /// # Panics
    ///
    /// Panics if `pages` is empty; the caller exits before constructing the
    /// app when no content was found.
    pub fn new(pages: Vec<Page>, config: &Config, members: Vec<TeamMember>) -> Self {
        assert!(!pages.is_empty(), "App requires at least one loaded page");
        let current = pages
            .iter()
            .position(|page| page.route == HOME_ROUTE)
            .unwrap_or(0);
        let mut app = Self {
            nav: NavMap::new(),
            pages,
            current,
            scroll: 0,
            header_scrolled: false,
            tracker: None,
            theme: Theme::default(),
            role_filter: RoleFilter::default(),
            members,
            message: None,
            layout: PageLayout::default(),
            highlighter: CodeHighlighter::new(&config.syntax_theme),
            scroll_margin: config.scroll_margin,
            wrap_width: config.wrap_width,
            content_width: config.wrap_width,
            content_height: 0,
        };
        app.mount();
        app
    }

    #[must_use]
    /// The page currently on screen.
    pub fn current_page(&self) -> &Page {
        &self.pages[self.current]
    }

    #[must_use]
    /// The current page's rendered layout.
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    #[must_use]
    /// The anchor id highlighted in the outline pane, if any.
    pub fn active_section(&self) -> Option<&str> {
        self.tracker.as_ref().and_then(SectionTracker::active)
    }

    #[must_use]
    /// Previous and next footer links for the current route.
    pub fn neighbors(&self) -> (Option<&NavLink>, Option<&NavLink>) {
        self.nav.adjacent(&self.pages[self.current].route)
    }

    #[must_use]
    /// Whether the current page renders the demo tables above its article.
    pub fn shows_tables(&self) -> bool {
        self.nav.shows_tables(&self.pages[self.current].route)
    }

    /// Opens a route if its page is loaded.
    pub fn open_route(&mut self, route: &str) -> bool {
        let Some(index) = self.pages.iter().position(|page| page.route == route) else {
            self.message = Some(format!("No content for {route}"));
            return false;
        };
        self.current = index;
        self.mount();
        true
    }

    /// Follows the footer's next link, if there is one.
    pub fn next_page(&mut self) {
        let next = self.neighbors().1.map(|link| link.route);
        match next {
            Some(route) => {
                self.open_route(route);
            }
            None => self.message = Some("No next page".to_string()),
        }
    }

    /// Follows the footer's previous link, if there is one.
    pub fn prev_page(&mut self) {
        let previous = self.neighbors().0.map(|link| link.route);
        match previous {
            Some(route) => {
                self.open_route(route);
            }
            None => self.message = Some("No previous page".to_string()),
        }
    }

    /// Records the content viewport measured during drawing.
    ///
    /// A width change reflows the document and re-resolves heading
    /// positions; the scroll offset is clamped into the new document.
    pub fn set_viewport(&mut self, width: usize, height: usize) {
        self.content_height = height;
        if width != self.content_width {
            self.content_width = width;
            self.relayout();
            self.clamp_scroll();
            self.retrack();
        }
    }

    /// Scrolls by a signed number of lines, clamped to the document.
    pub fn scroll_by(&mut self, delta: i64) {
        let magnitude = usize::try_from(delta.unsigned_abs()).unwrap_or(usize::MAX);
        let target = if delta.is_negative() {
            self.scroll.saturating_sub(magnitude)
        } else {
            self.scroll.saturating_add(magnitude)
        };
        self.scroll_to(target);
    }

    /// Scrolls by one viewport height in the given direction.
    pub fn scroll_page(&mut self, forward: bool) {
        let step = i64::try_from(self.content_height.max(1)).unwrap_or(i64::MAX);
        self.scroll_by(if forward { step } else { -step });
    }

    /// Jumps to the top of the document.
    pub fn scroll_top(&mut self) {
        self.scroll_to(0);
    }

    /// Jumps to the bottom of the document.
    pub fn scroll_bottom(&mut self) {
        self.scroll_to(self.max_scroll());
    }

    /// Sets the scroll offset and dispatches the scroll event.
    pub fn scroll_to(&mut self, offset: usize) {
        self.scroll = offset.min(self.max_scroll());
        self.on_scroll();
    }

    /// Switches between the dark and light palettes.
    ///
    /// Styles are baked into the rendered lines, so the document reflows
    /// under the new palette at the same scroll position.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.relayout();
        self.retrack();
    }

    /// Advances the directory table's role filter.
    pub fn cycle_role_filter(&mut self) {
        self.role_filter = self.role_filter.next();
    }

    #[must_use]
    /// Furthest valid scroll offset for the current layout.
    pub fn max_scroll(&self) -> usize {
        self.layout.height().saturating_sub(self.content_height)
    }

    /// One dispatch point for every scroll event: the header elevation
    /// flag and the tracker (when one is mounted) observe each offset.
    fn on_scroll(&mut self) {
        self.header_scrolled = self.scroll > 0;
        if let Some(tracker) = self.tracker.as_mut() {
            tracker.on_scroll(self.scroll);
        }
    }

    /// Mounts the current page: top of document, fresh layout, fresh
    /// tracker. Positions from a previous page are unreachable from here on.
    fn mount(&mut self) {
        self.scroll = 0;
        self.header_scrolled = false;
        self.message = None;
        self.relayout();
        self.retrack();
    }

    fn relayout(&mut self) {
        let page = &self.pages[self.current];
        let palette = self.theme.palette();
        let options = LayoutOptions {
            width: self.wrap_width.min(self.content_width),
            scroll_margin: self.scroll_margin,
            palette: &palette,
            highlighter: &self.highlighter,
            show_hero: page.route == HOME_ROUTE,
        };
        self.layout = layout::layout_page(page, &options);
    }

    fn retrack(&mut self) {
        self.tracker =
            SectionTracker::track(&self.pages[self.current].toc, &self.layout, self.scroll);
    }

    fn clamp_scroll(&mut self) {
        if self.scroll > self.max_scroll() {
            self.scroll = self.max_scroll();
        }
        self.header_scrolled = self.scroll > 0;
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
