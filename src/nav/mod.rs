//! Site navigation
//!
//! A link is active only when its path equals the current route path
//! exactly; `/posts` is not active on `/posts/1` and `/` is not active on
//! `/posts`.

use serde::Serialize;

use crate::config::SiteConfig;
use crate::helpers::route_href;

pub const ACTIVE_CLASS: &str = "text-blue-600 bg-blue-50";
pub const INACTIVE_CLASS: &str = "text-gray-700 hover:text-blue-600 hover:bg-gray-50";

/// A navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub path: &'static str,
}

pub static NAVIGATION_ITEMS: &[NavItem] = &[
    NavItem {
        name: "Home",
        path: "/",
    },
    NavItem {
        name: "Posts",
        path: "/posts",
    },
    NavItem {
        name: "Projects",
        path: "/projects",
    },
    NavItem {
        name: "Testing Strategy",
        path: "/testing-strategy",
    },
];

/// Whether a link to `path` is active while `current` is displayed
pub fn is_active(current: &str, path: &str) -> bool {
    current == path
}

/// Rendered navigation link
#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub name: String,
    pub href: String,
    pub active: bool,
    pub class: &'static str,
}

/// Navigation links for a page showing `current`
pub fn nav_links(config: &SiteConfig, current: &str) -> Vec<NavLink> {
    NAVIGATION_ITEMS
        .iter()
        .map(|item| {
            let active = is_active(current, item.path);
            NavLink {
                name: item.name.to_string(),
                href: route_href(config, item.path),
                active,
                class: if active { ACTIVE_CLASS } else { INACTIVE_CLASS },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        assert!(is_active("/posts", "/posts"));
        assert!(!is_active("/posts/1", "/posts"));
        assert!(!is_active("/", "/posts"));
        assert!(!is_active("/posts/", "/posts"));
        assert!(!is_active("/posts", "/"));
    }

    #[test]
    fn test_navigation_order() {
        let names: Vec<_> = NAVIGATION_ITEMS.iter().map(|i| i.name).collect();
        assert_eq!(names, ["Home", "Posts", "Projects", "Testing Strategy"]);
    }

    #[test]
    fn test_nav_links_mark_one_active() {
        let links = nav_links(&SiteConfig::default(), "/posts");
        let active: Vec<_> = links.iter().filter(|l| l.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Posts");
        assert_eq!(active[0].class, ACTIVE_CLASS);

        let home = &links[0];
        assert_eq!(home.href, "/");
        assert!(home.class.starts_with("text-gray-700"));
    }

    #[test]
    fn test_nav_links_under_mount() {
        let config = SiteConfig {
            root: "/WebTestingProject".to_string(),
            ..SiteConfig::default()
        };
        let links = nav_links(&config, "/");
        assert_eq!(links[0].href, "/WebTestingProject");
        assert!(links[0].active);
        assert_eq!(links[1].href, "/WebTestingProject/posts");
    }

    #[test]
    fn test_unknown_route_has_no_active_link() {
        let links = nav_links(&SiteConfig::default(), "/unknown-route");
        assert!(links.iter().all(|l| !l.active));
    }
}
