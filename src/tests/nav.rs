use super::{NavMap, HOME_ROUTE};

#[test]
fn test_home_route_is_mapped() {
    let nav = NavMap::new();
    assert!(nav.all_links().iter().any(|l| l.route == HOME_ROUTE));
}

#[test]
fn test_flattened_links_keep_group_order() {
    let nav = NavMap::new();
    let links = nav.all_links();
    assert_eq!(links.len(), 13);
    assert_eq!(links[0].route, "/about/what-is-depin");
    assert_eq!(links[12].route, "/miner-networks/xnet");
}

#[test]
fn test_adjacent_crosses_group_boundaries() {
    let nav = NavMap::new();
    // Last link of "About" neighbors the first link of "Leaderboard".
    let (previous, next) = nav.adjacent("/about/what-is-depindd");
    assert_eq!(previous.map(|l| l.route), Some("/about/what-is-depin"));
    assert_eq!(
        next.map(|l| l.route),
        Some("/leaderboards/miner-payback-time")
    );
}

#[test]
fn test_first_link_has_no_previous() {
    let nav = NavMap::new();
    let (previous, next) = nav.adjacent("/about/what-is-depin");
    assert!(previous.is_none());
    assert_eq!(next.map(|l| l.route), Some("/about/what-is-depindd"));
}

#[test]
fn test_last_link_has_no_next() {
    let nav = NavMap::new();
    let (previous, next) = nav.adjacent("/miner-networks/xnet");
    assert_eq!(previous.map(|l| l.route), Some("/miner-networks/hivemapper"));
    assert!(next.is_none());
}

#[test]
fn test_unmapped_route_has_no_neighbors() {
    let nav = NavMap::new();
    let (previous, next) = nav.adjacent("/blog/unlisted");
    assert!(previous.is_none());
    assert!(next.is_none());
}

#[test]
fn test_group_lookup() {
    let nav = NavMap::new();
    assert_eq!(
        nav.group_of("/categories/sensor-networks").map(|g| g.title),
        Some("Network categories")
    );
    assert!(nav.group_of("/blog/unlisted").is_none());
}

#[test]
fn test_only_leaderboard_routes_show_tables() {
    let nav = NavMap::new();
    assert!(nav.shows_tables("/leaderboards/miner-payback-time"));
    assert!(nav.shows_tables("/leaderboards/network-size"));
    assert!(!nav.shows_tables("/about/what-is-depin"));
    assert!(!nav.shows_tables("/blog/unlisted"));
}
