//! Typed errors surfaced by the library

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlogError {
    /// `root` in `_config.yml` must be an absolute URL path
    #[error("invalid root {0:?}: must start with '/'")]
    InvalidRoot(String),

    #[error("unknown type: {0}. Available: post, project, route, category, checklist")]
    UnknownListType(String),

    #[error("no route matches {0:?}")]
    UnknownRoute(String),
}
