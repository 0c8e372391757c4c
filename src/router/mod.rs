//! Route table

use std::fmt;
use std::str::FromStr;

use crate::BlogError;

/// A page of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Posts,
    Projects,
    TestingStrategy,
}

impl Route {
    pub const ALL: [Route; 4] = [
        Route::Home,
        Route::Posts,
        Route::Projects,
        Route::TestingStrategy,
    ];

    /// Match a path exactly; the empty path is treated as `/`
    pub fn resolve(path: &str) -> Option<Route> {
        match path {
            "" | "/" => Some(Route::Home),
            "/posts" => Some(Route::Posts),
            "/projects" => Some(Route::Projects),
            "/testing-strategy" => Some(Route::TestingStrategy),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Posts => "/posts",
            Route::Projects => "/projects",
            Route::TestingStrategy => "/testing-strategy",
        }
    }

    /// Document title suffix
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Posts => "Blog Posts",
            Route::Projects => "Projects",
            Route::TestingStrategy => "Front-End Testing Strategy",
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            Route::Home => "home.html",
            Route::Posts => "posts.html",
            Route::Projects => "projects.html",
            Route::TestingStrategy => "testing_strategy.html",
        }
    }

    /// Output file relative to the public directory
    pub fn output_path(&self) -> String {
        let path = self.path().trim_start_matches('/');
        if path.is_empty() {
            "index.html".to_string()
        } else {
            format!("{}/index.html", path)
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = BlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::resolve(s).ok_or_else(|| BlogError::UnknownRoute(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact() {
        assert_eq!(Route::resolve("/"), Some(Route::Home));
        assert_eq!(Route::resolve("/posts"), Some(Route::Posts));
        assert_eq!(Route::resolve("/projects"), Some(Route::Projects));
        assert_eq!(
            Route::resolve("/testing-strategy"),
            Some(Route::TestingStrategy)
        );
        assert_eq!(Route::resolve("/posts/1"), None);
        assert_eq!(Route::resolve("/unknown-route"), None);
    }

    #[test]
    fn test_empty_path_is_home() {
        assert_eq!(Route::resolve(""), Some(Route::Home));
    }

    #[test]
    fn test_output_paths() {
        assert_eq!(Route::Home.output_path(), "index.html");
        assert_eq!(
            Route::TestingStrategy.output_path(),
            "testing-strategy/index.html"
        );
    }

    #[test]
    fn test_round_trip_paths() {
        for route in Route::ALL {
            assert_eq!(route.path().parse::<Route>().unwrap(), route);
        }
        assert!("/nope".parse::<Route>().is_err());
    }
}
