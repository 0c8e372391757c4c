//! Built-in site templates using the Tera template engine
//!
//! All templates are embedded directly in the binary. Autoescaping is on
//! for every `.html` template and uses [`helpers::html_escape`], which
//! leaves `/` alone so paths such as "CI/CD" survive unchanged.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::checklist::ChecklistView;
use crate::config::SiteConfig;
use crate::content::{Post, Project};
use crate::helpers;

/// Template renderer with the embedded site theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.set_escape_fn(escape_html);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("home.html", include_str!("site/home.html")),
            ("posts.html", include_str!("site/posts.html")),
            ("projects.html", include_str!("site/projects.html")),
            (
                "testing_strategy.html",
                include_str!("site/testing_strategy.html"),
            ),
            ("not_found.html", include_str!("site/not_found.html")),
            // Partials
            (
                "partials/header.html",
                include_str!("site/partials/header.html"),
            ),
            (
                "partials/footer.html",
                include_str!("site/partials/footer.html"),
            ),
            (
                "partials/post_card.html",
                include_str!("site/partials/post_card.html"),
            ),
            (
                "partials/filter.html",
                include_str!("site/partials/filter.html"),
            ),
            (
                "partials/checklist.html",
                include_str!("site/partials/checklist.html"),
            ),
        ])?;

        tera.register_filter("truncate_text", truncate_text_filter);
        tera.register_filter("long_date", long_date_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Render the checklist widget on its own
    pub fn render_checklist(&self, checklist: &ChecklistView) -> Result<String> {
        let mut context = Context::new();
        context.insert("checklist", checklist);
        self.render("partials/checklist.html", &context)
    }
}

fn escape_html(input: &str) -> String {
    helpers::html_escape(input)
}

/// Tera filter: truncate by character count, appending "..."
fn truncate_text_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_text", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_text", "length", isize, val),
        None => 150,
    };
    Ok(tera::Value::String(helpers::truncate_text(&s, length)))
}

/// Tera filter: "2024-01-15" -> "January 15, 2024"
fn long_date_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("long_date", "value", String, value);
    Ok(tera::Value::String(helpers::format_date(&s)))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub url: String,
    pub root: String,
    pub home_href: String,
    pub mailto: String,
    pub github: String,
    pub linkedin: String,
    pub footer_note: String,
    pub year: i32,
}

impl ConfigData {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            language: config.language.clone(),
            url: config.url.clone(),
            root: config.root.clone(),
            home_href: helpers::route_href(config, "/"),
            mailto: config.mailto(),
            github: config.social.github.clone(),
            linkedin: config.social.linkedin.clone(),
            footer_note: config.footer_note.clone(),
            year: helpers::current_year(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostData {
    pub id: u32,
    pub anchor: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub meta: String,
    pub category: String,
    pub tags: Vec<String>,
    pub href: String,
}

impl PostData {
    pub fn new(config: &SiteConfig, post: &Post) -> Self {
        Self {
            id: post.id,
            anchor: post.anchor(),
            title: post.title.to_string(),
            excerpt: post.excerpt.to_string(),
            date: post.date.to_string(),
            meta: post.meta_line(),
            category: post.category.to_string(),
            tags: post.tags.iter().map(|t| t.to_string()).collect(),
            href: helpers::route_href(config, &post.path()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectData {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub category: String,
    pub status: String,
    pub status_class: String,
    pub github: String,
    pub demo: String,
    pub image: String,
    pub features: Vec<String>,
}

impl From<&Project> for ProjectData {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            title: project.title.to_string(),
            description: project.description.to_string(),
            technologies: project.technologies.iter().map(|t| t.to_string()).collect(),
            category: project.category.to_string(),
            status: project.status.label().to_string(),
            status_class: project.status.badge_class().to_string(),
            github: project.links.github.to_string(),
            demo: project.links.demo.to_string(),
            image: project.image_url(),
            features: project.features.iter().map(|f| f.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolData {
    pub name: String,
    pub purpose: String,
    pub tier: String,
    pub badge_class: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolCategoryData {
    pub category: String,
    pub tools: Vec<ToolData>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::{Checklist, ChecklistItem};

    #[test]
    fn test_templates_load() {
        assert!(TemplateRenderer::new().is_ok());
    }

    #[test]
    fn test_escape_keeps_slashes() {
        assert_eq!(escape_html("CI/CD & <b>"), "CI/CD &amp; &lt;b&gt;");
    }

    #[test]
    fn test_render_checklist_partial() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut checklist = Checklist::new(
            "Test Checklist",
            vec![
                ChecklistItem::new("a", "Coverage > 80%", "Build"),
                ChecklistItem::new("b", "Review", "Build"),
            ],
        );
        checklist.toggle("a");

        let html = renderer.render_checklist(&checklist.view()).unwrap();
        assert!(html.contains("1 / 2 completed (50%)"));
        assert!(html.contains(r#"style="width: 50%""#));
        assert!(html.contains("Coverage &gt; 80%"));
        assert!(html.contains("line-through text-gray-500"));
        assert!(html.contains("Reset checklist"));
    }

    #[test]
    fn test_filters() {
        let mut args = HashMap::new();
        args.insert("length".to_string(), tera::Value::from(5));
        let out = truncate_text_filter(&tera::Value::from("Hello world"), &args).unwrap();
        assert_eq!(out, tera::Value::from("Hello..."));

        let out = long_date_filter(&tera::Value::from("2024-01-01"), &HashMap::new()).unwrap();
        assert_eq!(out, tera::Value::from("January 1, 2024"));
    }
}
