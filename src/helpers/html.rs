//! HTML helper functions

use super::url::url_for;
use crate::config::SiteConfig;

/// Generate a JavaScript script tag
///
/// # Examples
/// ```ignore
/// js(&config, "checklist") // -> <script src="/blog/js/checklist.js" defer></script>
/// ```
pub fn js(config: &SiteConfig, path: &str) -> String {
    let path =
        if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
            path.to_string()
        } else {
            let path = if path.ends_with(".js") {
                path.to_string()
            } else {
                format!("{}.js", path)
            };
            url_for(config, &format!("js/{}", path.trim_start_matches('/')))
        };

    format!(r#"<script src="{}" defer></script>"#, path)
}

/// Generate a favicon link tag
pub fn favicon_tag(config: &SiteConfig, path: &str) -> String {
    let href = url_for(config, path);
    format!(r#"<link rel="icon" href="{}">"#, href)
}

/// Generate meta generator tag
pub fn meta_generator() -> String {
    format!(
        r#"<meta name="generator" content="qa-blog {}">"#,
        env!("CARGO_PKG_VERSION")
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Truncate text to `max_len` characters and append "..."
///
/// A negative `max_len` counts back from the end of the text, so `-1`
/// drops the last character before the ellipsis.
pub fn truncate_text(text: &str, max_len: isize) -> String {
    let len = text.chars().count() as isize;
    if len <= max_len {
        return text.to_string();
    }

    let keep = if max_len < 0 {
        (len + max_len).max(0)
    } else {
        max_len
    };
    let truncated: String = text.chars().take(keep as usize).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            root: "/WebTestingProject/".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_js() {
        let config = test_config();
        assert_eq!(
            js(&config, "checklist"),
            r#"<script src="/WebTestingProject/js/checklist.js" defer></script>"#
        );
        assert!(js(&config, "https://cdn.example.com/x.js").contains("https://cdn.example.com"));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("Code coverage > 80%"), "Code coverage &gt; 80%");
        assert_eq!(html_escape("Tools & \"Tech\""), "Tools &amp; &quot;Tech&quot;");
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Hello <b>World</b></p>"), "Hello World");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_text("Hello world", 5), "Hello...");
        assert_eq!(truncate_text("Hello world test", 8), "Hello wo...");
    }

    #[test]
    fn test_truncate_short_text() {
        assert_eq!(truncate_text("Hi", 10), "Hi");
        assert_eq!(truncate_text("Hello", 5), "Hello");
        assert_eq!(truncate_text("", 5), "");
    }

    #[test]
    fn test_truncate_zero_and_negative() {
        assert_eq!(truncate_text("Hello", 0), "...");
        assert_eq!(truncate_text("Hello", -1), "Hell...");
        assert_eq!(truncate_text("Hi", -10), "...");
    }
}
