//! URL helper functions

use crate::config::SiteConfig;

/// Default dimensions of project card images
pub const PLACEHOLDER_WIDTH: u32 = 400;
pub const PLACEHOLDER_HEIGHT: u32 = 250;

/// Generate an asset URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/js/checklist.js") // -> "/blog/js/checklist.js"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate the href of a route link
///
/// Under a non-root mount the home route is the bare mount point without a
/// trailing slash, matching how client-side routers render links.
///
/// # Examples
/// ```ignore
/// route_href(&config, "/")      // -> "/WebTestingProject"
/// route_href(&config, "/posts") // -> "/WebTestingProject/posts"
/// ```
pub fn route_href(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    if root.is_empty() {
        return path.to_string();
    }

    if path == "/" || path.is_empty() {
        root.to_string()
    } else {
        format!("{}/{}", root, path.trim_start_matches('/'))
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Placeholder image used by project cards
pub fn placeholder_image(width: u32, height: u32) -> String {
    format!(
        "https://via.placeholder.com/{}x{}/4F46E5/FFFFFF?text=Project+Image",
        width, height
    )
}
