//! Content module - the compiled-in posts, projects and article data

mod post;
pub mod store;
pub mod strategy;

pub use post::{status_class, Post, Project, ProjectLinks, ProjectStatus};
pub use store::{recent_posts, ALL_POSTS, POST_CATEGORIES, PROJECTS, PROJECT_CATEGORIES};
