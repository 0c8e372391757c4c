//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::Blog;

const DEFAULT_CONFIG: &str = r#"# Site
title: Software Testing Blog
description: A modern, responsive blog website showcasing software testing expertise and serving as a professional portfolio.
author: Your Name
email: your.email@example.com
language: en

# URL
## Set root to the sub-path the site is served from, e.g. /WebTestingProject
url: http://localhost:4000
root: /

# Directory
## Files in source_dir are copied into public_dir unchanged
source_dir: source
public_dir: public

# Footer
footer_note: Built with Rust and Tailwind CSS
social:
  github: https://github.com/ZLamb101
  linkedin: https://linkedin.com/in/yourprofile
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join("source"))?;

    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("File already exists: {:?}", config_path);
    }
    fs::write(&config_path, DEFAULT_CONFIG)?;
    tracing::debug!("Wrote {:?}", config_path);

    Ok(())
}

/// Run the init command with an existing Blog instance
pub fn run(blog: &Blog) -> Result<()> {
    init_site(&blog.base_dir)
}
