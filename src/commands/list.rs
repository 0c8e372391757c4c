//! List site content

use anyhow::Result;
use indexmap::IndexMap;

use crate::checklist::Checklist;
use crate::content::strategy;
use crate::content::{ALL_POSTS, PROJECTS};
use crate::helpers::route_href;
use crate::router::Route;
use crate::{Blog, BlogError};

/// List site content by type
pub fn run(blog: &Blog, content_type: &str) -> Result<()> {
    for line in lines(blog, content_type)? {
        println!("{}", line);
    }
    Ok(())
}

/// Lines printed by `list`
pub fn lines(blog: &Blog, content_type: &str) -> Result<Vec<String>, BlogError> {
    let mut out = Vec::new();

    match content_type {
        "post" | "posts" => {
            out.push(format!("Posts ({}):", ALL_POSTS.len()));
            for post in ALL_POSTS {
                out.push(format!("  {} - {} [{}]", post.date, post.title, post.category));
            }
        }
        "project" | "projects" => {
            out.push(format!("Projects ({}):", PROJECTS.len()));
            for project in PROJECTS {
                out.push(format!("  {} ({}) [{}]", project.title, project.status, project.category));
            }
        }
        "route" | "routes" => {
            out.push(format!("Routes ({}):", Route::ALL.len()));
            for route in Route::ALL {
                out.push(format!(
                    "  {} -> {}",
                    route_href(&blog.config, route.path()),
                    route.output_path()
                ));
            }
        }
        "category" | "categories" => {
            let mut categories: IndexMap<&str, usize> = IndexMap::new();
            for post in ALL_POSTS {
                *categories.entry(post.category).or_insert(0) += 1;
            }
            out.push(format!("Categories ({}):", categories.len()));
            for (category, count) in categories {
                out.push(format!("  {} ({})", category, count));
            }
        }
        "checklist" => {
            let checklist =
                Checklist::new(strategy::CHECKLIST_TITLE, strategy::testing_checklist_items());
            out.push(format!("{} ({} items):", checklist.title(), checklist.total()));
            for group in checklist.groups() {
                out.push(format!("  {} ({})", group.category, group.items.len()));
                for item in group.items {
                    out.push(format!("    [ ] {}", item.text));
                }
            }
        }
        _ => return Err(BlogError::UnknownListType(content_type.to_string())),
    }

    Ok(out)
}
