//! Generator module - renders every route to static HTML using the built-in templates

use anyhow::Result;
use std::fs;
use std::path::Path;

use tera::Context;
use walkdir::WalkDir;

use crate::checklist::Checklist;
use crate::content::strategy::{
    self, BEST_PRACTICES, IMPLEMENTATION_STATUS, QUALITY_GATES, TESTING_PHASES, TESTING_PYRAMID,
    TESTING_TOOLS,
};
use crate::content::{recent_posts, ALL_POSTS, POST_CATEGORIES, PROJECTS, PROJECT_CATEGORIES};
use crate::helpers::{self, favicon_tag, full_url_for, js, meta_generator, route_href};
use crate::nav::nav_links;
use crate::router::Route;
use crate::templates::{
    ConfigData, PostData, ProjectData, TemplateRenderer, ToolCategoryData, ToolData,
};
use crate::Blog;

/// Output file of the not-found document
pub const NOT_FOUND_FILE: &str = "404.html";

/// Browser-side checklist behaviour: toggle, reset and progress readout.
/// Empty lists report 0%, and state is lost on reload.
const CHECKLIST_SCRIPT: &str = r#"(function () {
  var COMPLETED = ['line-through', 'text-gray-500'];
  var OPEN = ['text-gray-700'];

  document.querySelectorAll('[data-checklist]').forEach(function (root) {
    var boxes = root.querySelectorAll('[data-checklist-item]');
    var summary = root.querySelector('[data-checklist-summary]');
    var bar = root.querySelector('[data-checklist-bar]');

    function update() {
      var total = boxes.length;
      var checked = 0;
      boxes.forEach(function (box) {
        var text = box.nextElementSibling;
        if (box.checked) checked++;
        COMPLETED.forEach(function (c) { text.classList.toggle(c, box.checked); });
        OPEN.forEach(function (c) { text.classList.toggle(c, !box.checked); });
      });
      var progress = total === 0 ? 0 : (checked / total) * 100;
      summary.textContent = checked + ' / ' + total + ' completed (' + Math.round(progress) + '%)';
      bar.style.width = (Math.round(progress * 100) / 100) + '%';
    }

    boxes.forEach(function (box) { box.addEventListener('change', update); });
    root.querySelector('[data-checklist-reset]').addEventListener('click', function () {
      boxes.forEach(function (box) { box.checked = false; });
      update();
    });
  });
})();
"#;

/// Static site generator using Tera templates
pub struct Generator {
    blog: Blog,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(blog: &Blog) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;

        Ok(Self {
            blog: blog.clone(),
            renderer,
        })
    }

    /// Generate the entire site
    pub fn generate(&self) -> Result<()> {
        fs::create_dir_all(&self.blog.public_dir)?;

        // Copy static assets (images, favicon, etc.)
        self.copy_source_assets()?;

        for route in Route::ALL {
            let html = self.render_route(route)?;
            self.write_output(&route.output_path(), &html)?;
        }

        let not_found = self.render_not_found("/404")?;
        self.write_output(NOT_FOUND_FILE, &not_found)?;

        self.write_output("js/checklist.js", CHECKLIST_SCRIPT)?;
        self.generate_search_index()?;

        tracing::info!(
            "Generated {} pages, {} posts indexed",
            Route::ALL.len() + 1,
            ALL_POSTS.len()
        );
        Ok(())
    }

    /// Render the document served at `path`, falling back to the not-found page
    pub fn render_path(&self, path: &str) -> Result<String> {
        match Route::resolve(path) {
            Some(route) => self.render_route(route),
            None => self.render_not_found(path),
        }
    }

    /// Render one route to a complete HTML document
    pub fn render_route(&self, route: Route) -> Result<String> {
        let mut context = self.create_base_context(route.path(), route.title());

        match route {
            Route::Home => self.fill_home(&mut context),
            Route::Posts => self.fill_posts(&mut context),
            Route::Projects => self.fill_projects(&mut context),
            Route::TestingStrategy => {
                let checklist =
                    Checklist::new(strategy::CHECKLIST_TITLE, strategy::testing_checklist_items());
                self.fill_testing_strategy(&mut context, &checklist)
            }
        }

        self.renderer.render(route.template(), &context)
    }

    /// Render the testing-strategy page with a checklist in a given state
    pub fn render_testing_strategy(&self, checklist: &Checklist) -> Result<String> {
        let route = Route::TestingStrategy;
        let mut context = self.create_base_context(route.path(), route.title());
        self.fill_testing_strategy(&mut context, checklist);
        self.renderer.render(route.template(), &context)
    }

    /// Render the layout around an empty-state main area
    pub fn render_not_found(&self, current_path: &str) -> Result<String> {
        let context = self.create_base_context(current_path, "Page Not Found");
        self.renderer.render("not_found.html", &context)
    }

    /// Render only the checklist widget
    pub fn render_checklist(&self, checklist: &Checklist) -> Result<String> {
        self.renderer.render_checklist(&checklist.view())
    }

    /// Create a base context with common variables
    fn create_base_context(&self, current_path: &str, page_title: &str) -> Context {
        let config = &self.blog.config;

        let mut context = Context::new();
        context.insert("config", &ConfigData::new(config));
        context.insert("nav_links", &nav_links(config, current_path));
        context.insert("current_path", current_path);
        context.insert("page_title", page_title);
        context.insert("meta_generator", &meta_generator());

        let links = serde_json::json!({
            "home": route_href(config, Route::Home.path()),
            "posts": route_href(config, Route::Posts.path()),
            "projects": route_href(config, Route::Projects.path()),
            "testing_strategy": route_href(config, Route::TestingStrategy.path()),
        });
        context.insert("links", &links);

        if self.blog.source_dir.join("favicon.ico").exists() {
            context.insert("favicon", &favicon_tag(config, "favicon.ico"));
        } else {
            context.insert("favicon", &false);
        }

        context
    }

    fn fill_home(&self, context: &mut Context) {
        let posts: Vec<PostData> = recent_posts()
            .iter()
            .map(|p| PostData::new(&self.blog.config, p))
            .collect();
        context.insert("posts", &posts);
    }

    fn fill_posts(&self, context: &mut Context) {
        let posts: Vec<PostData> = ALL_POSTS
            .iter()
            .map(|p| PostData::new(&self.blog.config, p))
            .collect();
        context.insert("posts", &posts);
        context.insert("categories", POST_CATEGORIES);
    }

    fn fill_projects(&self, context: &mut Context) {
        let projects: Vec<ProjectData> = PROJECTS.iter().map(ProjectData::from).collect();
        context.insert("projects", &projects);
        context.insert("categories", PROJECT_CATEGORIES);
    }

    fn fill_testing_strategy(&self, context: &mut Context, checklist: &Checklist) {
        let tools: Vec<ToolCategoryData> = TESTING_TOOLS
            .iter()
            .map(|group| ToolCategoryData {
                category: group.category.to_string(),
                tools: group
                    .tools
                    .iter()
                    .map(|tool| ToolData {
                        name: tool.name.to_string(),
                        purpose: tool.purpose.to_string(),
                        tier: tool.tier.label().to_string(),
                        badge_class: tool.tier.badge_class().to_string(),
                    })
                    .collect(),
            })
            .collect();

        // Two columns, left one takes the extra entry
        let split = BEST_PRACTICES.len().div_ceil(2);
        let best_practices = vec![&BEST_PRACTICES[..split], &BEST_PRACTICES[split..]];

        context.insert("checklist", &checklist.view());
        context.insert("pyramid", TESTING_PYRAMID);
        context.insert("implementation_status", IMPLEMENTATION_STATUS);
        context.insert("phases", TESTING_PHASES);
        context.insert("tools", &tools);
        context.insert("quality_gates", QUALITY_GATES);
        context.insert("best_practices", &best_practices);
        context.insert("checklist_script", &js(&self.blog.config, "checklist"));
    }

    /// Write a file below the public directory
    fn write_output(&self, relative: &str, contents: &str) -> Result<()> {
        let output_path = self.blog.public_dir.join(relative);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| anyhow::anyhow!("Failed to create dir {:?}: {}", parent, e))?;
        }
        fs::write(&output_path, contents)
            .map_err(|e| anyhow::anyhow!("Failed to write {:?}: {}", output_path, e))?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }

    /// Generate search index (JSON)
    fn generate_search_index(&self) -> Result<()> {
        let config = &self.blog.config;
        let search_data: Vec<serde_json::Value> = ALL_POSTS
            .iter()
            .map(|p| {
                serde_json::json!({
                    "title": p.title,
                    "url": full_url_for(config, &p.listing_path()),
                    "excerpt": helpers::strip_html(p.excerpt),
                    "category": p.category,
                    "tags": p.tags,
                    "date": p.date,
                })
            })
            .collect();

        let json = serde_json::to_string_pretty(&search_data)?;
        self.write_output("search.json", &json)?;
        tracing::info!("Generated search.json");

        Ok(())
    }

    /// Copy source assets (images, etc.) to public directory
    fn copy_source_assets(&self) -> Result<()> {
        let source_dir = &self.blog.source_dir;
        if !source_dir.exists() {
            return Ok(());
        }

        let mut copied = 0;
        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || is_hidden(path, source_dir) {
                continue;
            }

            let relative = path.strip_prefix(source_dir)?;
            let dest = self.blog.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)?;
            copied += 1;
        }

        tracing::debug!("Copied {} source assets", copied);
        Ok(())
    }
}

/// Skip dotfiles and `_`-prefixed directories
fn is_hidden(path: &Path, base: &Path) -> bool {
    path.strip_prefix(base)
        .map(|relative| {
            relative.components().any(|c| {
                c.as_os_str()
                    .to_str()
                    .map(|s| s.starts_with('_') || s.starts_with('.'))
                    .unwrap_or(false)
            })
        })
        .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn generator() -> Generator {
        let blog = Blog::with_config("/tmp/qa-blog-unit", SiteConfig::default()).unwrap();
        Generator::new(&blog).unwrap()
    }

    #[test]
    fn test_every_route_renders_layout() {
        let generator = generator();
        for route in Route::ALL {
            let html = generator.render_route(route).unwrap();
            assert!(html.contains("<nav"), "{} lacks nav", route);
            assert!(html.contains("<main class=\"max-w-4xl mx-auto"));
            assert!(html.contains("<footer"));
        }
    }

    #[test]
    fn test_unknown_path_renders_not_found() {
        let html = generator().render_path("/unknown-route").unwrap();
        assert!(html.contains("Page Not Found"));
        assert!(html.contains("<nav"));
        assert!(!html.contains("aria-current"));
    }

    #[test]
    fn test_empty_path_renders_home() {
        let html = generator().render_path("").unwrap();
        assert!(html.contains("Welcome to My Software Testing Blog"));
    }

    #[test]
    fn test_is_hidden() {
        let base = Path::new("/src");
        assert!(is_hidden(Path::new("/src/.DS_Store"), base));
        assert!(is_hidden(Path::new("/src/_drafts/a.png"), base));
        assert!(!is_hidden(Path::new("/src/images/a.png"), base));
    }

    #[test]
    fn test_best_practice_columns() {
        let html = generator().render_route(Route::TestingStrategy).unwrap();
        for practice in BEST_PRACTICES {
            assert!(html.contains(practice), "missing {}", practice);
        }
    }
}
