use std::fs;

use qa_blog::checklist::{Checklist, ChecklistItem};
use qa_blog::config::SiteConfig;
use qa_blog::generator::Generator;
use qa_blog::router::Route;
use qa_blog::Blog;

fn generated_site(config: SiteConfig) -> (tempfile::TempDir, Blog) {
    let dir = tempfile::tempdir().unwrap();
    let blog = Blog::with_config(dir.path(), config).unwrap();
    blog.generate().unwrap();
    (dir, blog)
}

fn read(blog: &Blog, relative: &str) -> String {
    fs::read_to_string(blog.public_dir.join(relative)).unwrap()
}

#[test]
fn generates_every_route() {
    let (_dir, blog) = generated_site(SiteConfig::default());

    for route in Route::ALL {
        assert!(
            blog.public_dir.join(route.output_path()).is_file(),
            "missing output for {}",
            route
        );
    }
    assert!(blog.public_dir.join("404.html").is_file());
    assert!(blog.public_dir.join("js/checklist.js").is_file());
    assert!(blog.public_dir.join("search.json").is_file());
}

#[test]
fn home_page_content() {
    let (_dir, blog) = generated_site(SiteConfig::default());
    let html = read(&blog, "index.html");

    assert!(html.contains("Welcome to My Software Testing Blog"));
    assert!(html.contains("About Me"));
    assert!(html.contains("Recent Posts"));
    assert!(html.contains("Getting Started with Playwright Testing"));
    assert!(html.contains("<title>Home | Software Testing Blog</title>"));
    assert!(html.contains("©"));
    assert!(html.contains("Built with"));
}

#[test]
fn posts_link_is_active_on_posts_page() {
    let (_dir, blog) = generated_site(SiteConfig::default());
    let html = read(&blog, "posts/index.html");

    assert!(html.contains("text-blue-600 bg-blue-50\" aria-current=\"page\">Posts</a>"));
    assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
    assert!(html.contains("Blog Posts"));
    assert!(html.contains("Categories"));
}

#[test]
fn projects_page_lists_projects() {
    let (_dir, blog) = generated_site(SiteConfig::default());
    let html = read(&blog, "projects/index.html");

    assert!(html.contains("Filter by Category"));
    assert!(html.contains("E-commerce Test Automation Suite"));
    assert!(html.contains("In Progress"));
}

#[test]
fn testing_strategy_page_starts_unchecked() {
    let (_dir, blog) = generated_site(SiteConfig::default());
    let html = read(&blog, "testing-strategy/index.html");

    assert!(html.contains("Front-End Testing Strategy"));
    assert!(html.contains("0 / 21 completed (0%)"));
    assert!(html.contains("style=\"width: 0%\""));
    assert!(html.contains("Pre-Development"));
    assert!(html.contains("Post-Release"));
    assert!(html.contains("Testing Tools &amp; Technologies"));
    assert!(html.contains("js/checklist.js"));
    assert!(!html.contains(" checked "));
}

#[test]
fn checklist_progress_after_toggles() {
    let dir = tempfile::tempdir().unwrap();
    let blog = Blog::with_config(dir.path(), SiteConfig::default()).unwrap();
    let generator = Generator::new(&blog).unwrap();

    let mut checklist = Checklist::new(
        "Release Checklist",
        vec![
            ChecklistItem::new("a", "Write unit tests", "Development"),
            ChecklistItem::new("b", "Run linter", "Development"),
            ChecklistItem::new("c", "Smoke test", "Release"),
            ChecklistItem::new("d", "Tag release", "Release"),
        ],
    );
    checklist.toggle("a");
    checklist.toggle("c");

    let html = generator.render_checklist(&checklist).unwrap();
    assert!(html.contains("2 / 4 completed (50%)"));
    assert!(html.contains("style=\"width: 50%\""));
    assert_eq!(html.matches("line-through text-gray-500").count(), 2);

    let development = html.find(">Development</h4>").unwrap();
    let release = html.find(">Release</h4>").unwrap();
    assert!(development < release);

    checklist.reset();
    let html = generator.render_testing_strategy(&checklist).unwrap();
    assert!(html.contains("0 / 4 completed (0%)"));
    assert!(html.contains("aria-current=\"page\">Testing Strategy</a>"));
}

#[test]
fn empty_checklist_reports_zero() {
    let dir = tempfile::tempdir().unwrap();
    let blog = Blog::with_config(dir.path(), SiteConfig::default()).unwrap();
    let generator = Generator::new(&blog).unwrap();

    let html = generator
        .render_checklist(&Checklist::new("Empty", Vec::new()))
        .unwrap();
    assert!(html.contains("0 / 0 completed (0%)"));
    assert!(html.contains("style=\"width: 0%\""));
    assert!(!html.contains("<h4"));
}

#[test]
fn links_respect_mount_root() {
    let config = SiteConfig {
        root: "/WebTestingProject".to_string(),
        ..SiteConfig::default()
    };
    let (_dir, blog) = generated_site(config);
    let html = read(&blog, "index.html");

    assert!(html.contains("href=\"/WebTestingProject\""));
    assert!(html.contains("href=\"/WebTestingProject/posts\""));
    assert!(html.contains("href=\"/WebTestingProject/testing-strategy\""));

    let strategy = read(&blog, "testing-strategy/index.html");
    assert!(strategy.contains("src=\"/WebTestingProject/js/checklist.js\""));
}

#[test]
fn invalid_root_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = SiteConfig {
        root: "WebTestingProject".to_string(),
        ..SiteConfig::default()
    };
    assert!(Blog::with_config(dir.path(), config).is_err());
}

#[test]
fn search_index_lists_all_posts() {
    let (_dir, blog) = generated_site(SiteConfig::default());
    let index: Vec<serde_json::Value> =
        serde_json::from_str(&read(&blog, "search.json")).unwrap();

    assert_eq!(index.len(), 6);
    assert_eq!(index[0]["title"], "Getting Started with Playwright Testing");
    assert_eq!(index[0]["url"], "http://localhost:4000/posts#post-1");
    assert_eq!(index[0]["category"], "Automation");

    // Every entry points at a generated page holding the post's anchor
    for entry in &index {
        let url = entry["url"].as_str().unwrap();
        let path = url.strip_prefix("http://localhost:4000/").unwrap();
        let (page, anchor) = path.split_once('#').unwrap();
        let html = read(&blog, &format!("{}/index.html", page));
        assert!(html.contains(&format!("id=\"{}\"", anchor)), "{} has no target", url);
    }
}

#[test]
fn header_nav_holds_logo_and_route_links() {
    let (_dir, blog) = generated_site(SiteConfig::default());

    for route in Route::ALL {
        let html = read(&blog, &route.output_path());
        assert_eq!(html.matches("<nav").count(), 1);
        let start = html.find("<nav").unwrap();
        let end = html.find("</nav>").unwrap();
        let nav = &html[start..end];
        assert_eq!(nav.matches("<a ").count(), 5, "{}", route);
        assert!(nav.contains(">Software Testing Blog</a>"));
    }
}

#[test]
fn project_cards_use_placeholder_image() {
    let (_dir, blog) = generated_site(SiteConfig::default());
    let html = read(&blog, "projects/index.html");

    assert_eq!(
        html.matches("https://via.placeholder.com/400x250/4F46E5/FFFFFF?text=Project+Image")
            .count(),
        4
    );
}

#[test]
fn browser_script_rounds_bar_width_like_the_page() {
    let (_dir, blog) = generated_site(SiteConfig::default());
    let script = read(&blog, "js/checklist.js");

    assert!(script.contains("Math.round(progress * 100) / 100"));
    assert!(!script.contains("bar.style.width = progress + '%'"));
}

#[test]
fn not_found_page_has_layout_without_active_link() {
    let (_dir, blog) = generated_site(SiteConfig::default());
    let html = read(&blog, "404.html");

    assert!(html.contains("Page Not Found"));
    assert!(html.contains("<nav"));
    assert!(!html.contains("aria-current"));
}

#[test]
fn source_assets_are_copied() {
    let dir = tempfile::tempdir().unwrap();
    let blog = Blog::with_config(dir.path(), SiteConfig::default()).unwrap();
    fs::create_dir_all(blog.source_dir.join("images")).unwrap();
    fs::write(blog.source_dir.join("images/logo.svg"), "<svg/>").unwrap();
    fs::write(blog.source_dir.join(".hidden"), "x").unwrap();
    fs::write(blog.source_dir.join("favicon.ico"), "ico").unwrap();

    blog.generate().unwrap();

    assert!(blog.public_dir.join("images/logo.svg").is_file());
    assert!(!blog.public_dir.join(".hidden").exists());
    assert!(read(&blog, "index.html").contains("favicon.ico"));
}

#[test]
fn clean_removes_output() {
    let (_dir, blog) = generated_site(SiteConfig::default());
    assert!(blog.public_dir.exists());

    blog.clean().unwrap();
    assert!(!blog.public_dir.exists());
}

#[test]
fn config_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    qa_blog::commands::init::init_site(dir.path()).unwrap();
    fs::write(
        dir.path().join("_config.yml"),
        "title: QA Notes\nroot: /qa/\n",
    )
    .unwrap();

    let blog = Blog::new(dir.path()).unwrap();
    assert_eq!(blog.config.title, "QA Notes");
    assert_eq!(blog.config.public_dir, "public");

    blog.generate().unwrap();
    let html = read(&blog, "index.html");
    assert!(html.contains("QA Notes"));
    assert!(html.contains("href=\"/qa/posts\""));
}
