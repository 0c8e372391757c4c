//! Post and Project models

use serde::Serialize;

use crate::helpers;

/// A blog post
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// Publication date, `YYYY-MM-DD`
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
}

impl Post {
    /// Route of the post detail link
    pub fn path(&self) -> String {
        format!("/posts/{}", self.id)
    }

    /// Element id of the post's card on the posts page
    pub fn anchor(&self) -> String {
        format!("post-{}", self.id)
    }

    /// Location of the post's card on the posts page, e.g. "/posts#post-1"
    pub fn listing_path(&self) -> String {
        format!("/posts#{}", self.anchor())
    }

    /// Card meta line, e.g. "1/15/2024 • 5 min read"
    pub fn meta_line(&self) -> String {
        format!("{} • {}", helpers::short_date(self.date), self.read_time)
    }
}

/// Delivery status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    Planning,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Planning => "Planning",
        }
    }

    /// Badge colour classes for the status pill
    pub fn badge_class(&self) -> &'static str {
        status_class(self.label())
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Badge colour classes for a status label; unknown labels fall back to gray
pub fn status_class(status: &str) -> &'static str {
    match status {
        "Completed" => "bg-green-100 text-green-800",
        "In Progress" => "bg-yellow-100 text-yellow-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

/// Outbound links of a project card
#[derive(Debug, Clone, Serialize)]
pub struct ProjectLinks {
    pub github: &'static str,
    pub demo: &'static str,
}

/// A portfolio project
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub category: &'static str,
    pub status: ProjectStatus,
    pub links: ProjectLinks,
    /// Card image; `None` uses the 400x250 placeholder
    pub image: Option<&'static str>,
    pub features: &'static [&'static str],
}

impl Project {
    pub fn image_url(&self) -> String {
        match self.image {
            Some(url) => url.to_string(),
            None => helpers::placeholder_image(
                helpers::PLACEHOLDER_WIDTH,
                helpers::PLACEHOLDER_HEIGHT,
            ),
        }
    }
}
