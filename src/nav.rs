//! The site navigation map: ordered groups of links to every page.
//!
//! The map is fixed configuration data. It drives the sidebar, the eyebrow
//! label above each article (the containing group's title), and the
//! previous/next footer, which walks the flattened link list.

/// One destination in the navigation map.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NavLink {
    /// Display label for the link.
    pub title: &'static str,
    /// Site route the link points at.
    pub route: &'static str,
}

/// Ordered run of links under a group heading.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NavGroup {
    /// Group heading shown in the sidebar.
    pub title: &'static str,
    /// Links in reading order.
    pub links: Vec<NavLink>,
}

/// Route treated as the site's landing page (gets the hero banner).
pub const HOME_ROUTE: &str = "/about/what-is-depin";

const fn link(title: &'static str, route: &'static str) -> NavLink {
    NavLink { title, route }
}

#[must_use]
/// Builds the site's navigation map.
pub fn site_navigation() -> Vec<NavGroup> {
    vec![
        NavGroup {
            title: "About",
            links: vec![
                link("What is DePIN", "/about/what-is-depin"),
                link("What is DePIN DD", "/about/what-is-depindd"),
            ],
        },
        NavGroup {
            title: "Leaderboard",
            links: vec![
                link("Miner payback time", "/leaderboards/miner-payback-time"),
                link("Network size", "/leaderboards/network-size"),
            ],
        },
        NavGroup {
            title: "Network categories",
            links: vec![
                link("Energy", "/categories/energy-networks"),
                link("Sensor", "/categories/sensor-networks"),
                link("Server", "/categories/server-networks"),
                link("Wireless", "/categories/wireless-networks"),
            ],
        },
        NavGroup {
            title: "Miner networks",
            links: vec![
                link("DIMO", "/miner-networks/dimo"),
                link("Helium IOT", "/miner-networks/helium-iot"),
                link("Helium MOBILE", "/miner-networks/helium-mobile"),
                link("Hivemapper", "/miner-networks/hivemapper"),
                link("XNET", "/miner-networks/xnet"),
            ],
        },
    ]
}

/// Lookup operations over the navigation map.
pub struct NavMap {
    groups: Vec<NavGroup>,
}

impl NavMap {
    #[must_use]
    /// Wraps the site navigation for lookups.
    pub fn new() -> Self {
        Self {
            groups: site_navigation(),
        }
    }

    #[must_use]
    /// Groups in sidebar order.
    pub fn groups(&self) -> &[NavGroup] {
        &self.groups
    }

    #[must_use]
    /// All links flattened in reading order.
    pub fn all_links(&self) -> Vec<&NavLink> {
        self.groups.iter().flat_map(|group| &group.links).collect()
    }

    #[must_use]
    /// The group containing a route, if the route is mapped.
    pub fn group_of(&self, route: &str) -> Option<&NavGroup> {
        self.groups
            .iter()
            .find(|group| group.links.iter().any(|l| l.route == route))
    }

    #[must_use]
    /// Previous and next links relative to a route in reading order.
    ///
    /// Either side is `None` at the ends of the map; a route absent from
    /// the map has no neighbors at all.
    pub fn adjacent(&self, route: &str) -> (Option<&NavLink>, Option<&NavLink>) {
        let links = self.all_links();
        let Some(index) = links.iter().position(|l| l.route == route) else {
            return (None, None);
        };
        let previous = index.checked_sub(1).and_then(|i| links.get(i).copied());
        let next = links.get(index + 1).copied();
        (previous, next)
    }

    #[must_use]
    /// Whether a route renders the data-table demo above its article.
    pub fn shows_tables(&self, route: &str) -> bool {
        self.group_of(route)
            .is_some_and(|group| group.title == "Leaderboard")
    }
}

impl Default for NavMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/nav.rs"]
mod tests;
