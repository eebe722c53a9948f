// =============================================================================
// Timeless Web - Navigation Structure
// =============================================================================
// Static menu table shared by the desktop bar, the mobile drawer, the footer
// and the router.
// =============================================================================

/// A single navigable destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}

/// A top-level menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEntry {
    /// Direct link.
    Link(NavLink),
    /// Labelled dropdown holding an ordered list of links.
    Group {
        label: &'static str,
        children: &'static [NavLink],
    },
}

impl NavEntry {
    pub fn label(&self) -> &'static str {
        match self {
            NavEntry::Link(link) => link.label,
            NavEntry::Group { label, .. } => *label,
        }
    }

    /// Whether this entry is marked active for `current_path`.
    ///
    /// Links match on exact path equality. Groups never match, whatever
    /// their children's paths are.
    pub fn is_active(&self, current_path: &str) -> bool {
        match self {
            NavEntry::Link(link) => is_active(link.path, current_path),
            NavEntry::Group { .. } => false,
        }
    }
}

/// Exact-match active check; no prefix matching.
pub fn is_active(path: &str, current_path: &str) -> bool {
    path == current_path
}

pub const SERVICE_LINKS: &[NavLink] = &[
    NavLink { path: "/internet-services", label: "Internet Services" },
    NavLink { path: "/cloud-services", label: "Cloud Services" },
    NavLink { path: "/connectivity", label: "Connectivity" },
    NavLink { path: "/services", label: "All we do" },
];

/// Site menu, in display order.
pub const NAV_ITEMS: &[NavEntry] = &[
    NavEntry::Link(NavLink { path: "/", label: "Home" }),
    NavEntry::Link(NavLink { path: "/about", label: "About" }),
    NavEntry::Group { label: "Services", children: SERVICE_LINKS },
    NavEntry::Link(NavLink { path: "/portfolio", label: "Portfolio" }),
    NavEntry::Link(NavLink { path: "/contact", label: "Contact" }),
];

/// Every link reachable from the menu, groups flattened in order.
pub fn all_links() -> impl Iterator<Item = NavLink> {
    NAV_ITEMS.iter().flat_map(|entry| match entry {
        NavEntry::Link(link) => std::slice::from_ref(link).iter().copied(),
        NavEntry::Group { children, .. } => children.iter().copied(),
    })
}

/// Look up the menu link for a route path.
pub fn find_link(path: &str) -> Option<NavLink> {
    all_links().find(|link| link.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_exact_path_is_active() {
        let active: Vec<&str> = NAV_ITEMS
            .iter()
            .filter(|entry| entry.is_active("/about"))
            .map(|entry| entry.label())
            .collect();
        assert_eq!(active, vec!["About"]);
    }

    #[test]
    fn test_no_prefix_matching() {
        assert!(!is_active("/", "/about"));
        assert!(!is_active("/services", "/services/cloud"));
        assert!(is_active("/", "/"));
    }

    #[test]
    fn test_group_never_active() {
        let services = NAV_ITEMS
            .iter()
            .find(|entry| entry.label() == "Services")
            .unwrap();

        for link in SERVICE_LINKS {
            assert!(!services.is_active(link.path));
        }
        assert!(!services.is_active("/services"));
    }

    #[test]
    fn test_all_links_flattens_groups_in_order() {
        let paths: Vec<&str> = all_links().map(|link| link.path).collect();
        assert_eq!(
            paths,
            vec![
                "/",
                "/about",
                "/internet-services",
                "/cloud-services",
                "/connectivity",
                "/services",
                "/portfolio",
                "/contact",
            ]
        );
    }

    #[test]
    fn test_find_link() {
        assert_eq!(find_link("/connectivity").unwrap().label, "Connectivity");
        assert!(find_link("/nowhere").is_none());
    }
}
