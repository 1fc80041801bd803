use super::App;
use crate::config::Config;
use crate::markdown;
use crate::nav::HOME_ROUTE;
use crate::page::Page;

fn config() -> Config {
    facet_toml::from_str::<Config>("").unwrap()
}

fn page(route: &str, source: &str) -> Page {
    let document = markdown::parse(source).unwrap();
    let title = document
        .title()
        .map_or_else(|| "Untitled".to_string(), ToString::to_string);
    Page::new(route.to_string(), title, document)
}

/// A page long enough that its second section sits well below one viewport.
fn long_page(route: &str) -> Page {
    let mut source = String::from("# Long\n\n## Alpha\n\n");
    for _ in 0..30 {
        source.push_str("Alpha body paragraph with enough words in it to wrap once the column narrows.\n\n");
    }
    source.push_str("## Omega\n\n");
    for _ in 0..30 {
        source.push_str("Omega body paragraph with enough words in it to wrap once the column narrows.\n\n");
    }
    page(route, &source)
}

#[test]
fn test_starts_on_the_home_route_when_loaded() {
    let pages = vec![
        page("/miner-networks/dimo", "# DIMO\n\nCars.\n"),
        page(HOME_ROUTE, "# What is DePIN\n\nIntro.\n"),
    ];
    let app = App::new(pages, &config(), Vec::new());
    assert_eq!(app.current_page().route, HOME_ROUTE);
}

#[test]
fn test_scrolling_elevates_the_header() {
    let mut app = App::new(
        vec![long_page("/categories/energy-networks")],
        &config(),
        Vec::new(),
    );
    app.set_viewport(100, 10);

    assert!(!app.header_scrolled);
    app.scroll_by(3);
    assert_eq!(app.scroll, 3);
    assert!(app.header_scrolled);

    app.scroll_to(0);
    assert!(!app.header_scrolled);
}

#[test]
fn test_active_section_follows_the_scroll() {
    let mut app = App::new(
        vec![long_page("/categories/energy-networks")],
        &config(),
        Vec::new(),
    );
    app.set_viewport(100, 10);

    assert_eq!(app.active_section(), Some("alpha"));
    app.scroll_bottom();
    assert_eq!(app.active_section(), Some("omega"));
    app.scroll_top();
    assert_eq!(app.active_section(), Some("alpha"));
}

#[test]
fn test_page_without_sections_mounts_no_tracker() {
    let mut app = App::new(
        vec![page("/about/what-is-depindd", "# Flat\n\nOnly prose here.\n")],
        &config(),
        Vec::new(),
    );
    app.set_viewport(100, 10);

    assert!(app.tracker.is_none());
    assert_eq!(app.active_section(), None);
    app.scroll_by(5);
    assert_eq!(app.active_section(), None);
}

#[test]
fn test_navigation_replaces_the_tracker() {
    let pages = vec![
        long_page("/about/what-is-depin"),
        page(
            "/about/what-is-depindd",
            "# Other\n\n## Setup\n\nBody.\n\n## Usage\n\nBody.\n",
        ),
    ];
    let mut app = App::new(pages, &config(), Vec::new());
    app.set_viewport(100, 10);
    app.scroll_bottom();
    assert_eq!(app.active_section(), Some("omega"));

    assert!(app.open_route("/about/what-is-depindd"));

    // Fresh page: scroll is back at the top and only the new outline's ids
    // can ever be active.
    assert_eq!(app.scroll, 0);
    assert_eq!(app.active_section(), Some("setup"));
    let tracker = app.tracker.as_ref().unwrap();
    assert!(tracker
        .positions()
        .iter()
        .all(|p| p.id == "setup" || p.id == "usage"));
}

#[test]
fn test_unknown_route_is_reported_not_opened() {
    let mut app = App::new(vec![long_page(HOME_ROUTE)], &config(), Vec::new());
    let before = app.current;

    assert!(!app.open_route("/blog/unlisted"));
    assert_eq!(app.current, before);
    assert!(app
        .message
        .as_deref()
        .unwrap_or_default()
        .contains("/blog/unlisted"));
}

#[test]
fn test_scroll_clamps_to_the_document() {
    let mut app = App::new(vec![long_page(HOME_ROUTE)], &config(), Vec::new());
    app.set_viewport(100, 10);

    app.scroll_to(usize::MAX);
    assert_eq!(app.scroll, app.max_scroll());

    app.scroll_by(-1_000_000);
    assert_eq!(app.scroll, 0);
}

#[test]
fn test_footer_neighbors_come_from_the_navigation_map() {
    let pages = vec![
        page(HOME_ROUTE, "# Home\n\nIntro.\n"),
        page("/about/what-is-depindd", "# DD\n\nBody.\n"),
    ];
    let mut app = App::new(pages, &config(), Vec::new());

    let (previous, next) = app.neighbors();
    assert!(previous.is_none());
    assert_eq!(next.map(|l| l.route), Some("/about/what-is-depindd"));

    app.next_page();
    assert_eq!(app.current_page().route, "/about/what-is-depindd");

    app.prev_page();
    assert_eq!(app.current_page().route, HOME_ROUTE);
}

#[test]
fn test_navigating_past_the_map_edge_reports_a_message() {
    let mut app = App::new(
        vec![page(HOME_ROUTE, "# Home\n\nIntro.\n")],
        &config(),
        Vec::new(),
    );
    app.prev_page();
    assert_eq!(app.message.as_deref(), Some("No previous page"));
}

#[test]
fn test_theme_toggle_preserves_position() {
    let mut app = App::new(vec![long_page(HOME_ROUTE)], &config(), Vec::new());
    app.set_viewport(100, 10);
    app.scroll_to(5);

    let theme = app.theme;
    app.toggle_theme();
    assert_ne!(app.theme, theme);
    assert_eq!(app.scroll, 5);
    assert_eq!(app.current_page().route, HOME_ROUTE);
}

#[test]
fn test_tables_render_only_on_leaderboard_routes() {
    let pages = vec![
        page(HOME_ROUTE, "# Home\n\nIntro.\n"),
        page("/leaderboards/miner-payback-time", "# Payback\n\nBody.\n"),
    ];
    let mut app = App::new(pages, &config(), Vec::new());

    assert!(!app.shows_tables());
    app.open_route("/leaderboards/miner-payback-time");
    assert!(app.shows_tables());
}

#[test]
fn test_resize_reflows_and_retracks() {
    let mut app = App::new(vec![long_page(HOME_ROUTE)], &config(), Vec::new());
    app.set_viewport(100, 10);
    let wide_height = app.layout().height();

    app.set_viewport(40, 10);
    assert!(
        app.layout().height() > wide_height,
        "narrower content must wrap onto more lines"
    );
    assert_eq!(app.active_section(), Some("alpha"));
}
