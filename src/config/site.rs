//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::BlogError;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub email: String,
    pub language: String,

    // URL
    pub url: String,
    /// Base path the site is mounted under, e.g. "/" or "/WebTestingProject"
    pub root: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,

    // Footer
    pub footer_note: String,
    #[serde(default)]
    pub social: SocialLinks,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Software Testing Blog".to_string(),
            description: "A modern, responsive blog website showcasing software testing \
                          expertise and serving as a professional portfolio."
                .to_string(),
            author: "Your Name".to_string(),
            email: "your.email@example.com".to_string(),
            language: "en".to_string(),

            url: "http://localhost:4000".to_string(),
            root: "/".to_string(),

            source_dir: "source".to_string(),
            public_dir: "public".to_string(),

            footer_note: "Built with Rust and Tailwind CSS".to_string(),
            social: SocialLinks::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }

    /// Check values that the generator relies on
    pub fn validate(&self) -> Result<(), BlogError> {
        if !self.root.starts_with('/') {
            return Err(BlogError::InvalidRoot(self.root.clone()));
        }
        Ok(())
    }

    /// The `mailto:` link used by contact buttons
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Social profile links shown in the footer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            github: "https://github.com/ZLamb101".to_string(),
            linkedin: "https://linkedin.com/in/yourprofile".to_string(),
        }
    }
}
