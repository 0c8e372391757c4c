//! Compiled-in content store

use super::{Post, Project, ProjectLinks, ProjectStatus};

/// Number of posts featured on the home page
pub const RECENT_POST_COUNT: usize = 3;

const NO_LINKS: ProjectLinks = ProjectLinks {
    github: "#",
    demo: "#",
};

/// All posts, newest first
pub static ALL_POSTS: &[Post] = &[
    Post {
        id: 1,
        title: "Getting Started with Playwright Testing",
        excerpt: "Learn the fundamentals of automated testing with Playwright and how to set up your first test suite.",
        date: "2024-01-15",
        read_time: "5 min read",
        category: "Automation",
        tags: &["Playwright", "E2E Testing", "JavaScript"],
    },
    Post {
        id: 2,
        title: "Best Practices for API Testing",
        excerpt: "Discover essential strategies for testing REST APIs effectively and avoiding common pitfalls.",
        date: "2024-01-10",
        read_time: "7 min read",
        category: "API Testing",
        tags: &["REST API", "Postman", "Testing Strategies"],
    },
    Post {
        id: 3,
        title: "Test Automation in CI/CD Pipelines",
        excerpt: "Integrate automated tests into your continuous integration workflow for better quality assurance.",
        date: "2024-01-05",
        read_time: "6 min read",
        category: "DevOps",
        tags: &["CI/CD", "Jenkins", "Quality Gates"],
    },
    Post {
        id: 4,
        title: "Mobile App Testing Strategies",
        excerpt: "Comprehensive guide to testing mobile applications across different platforms and devices.",
        date: "2024-01-01",
        read_time: "8 min read",
        category: "Mobile Testing",
        tags: &["Mobile Apps", "iOS", "Android"],
    },
    Post {
        id: 5,
        title: "Performance Testing Fundamentals",
        excerpt: "Understanding load testing, stress testing, and performance optimization techniques.",
        date: "2023-12-28",
        read_time: "9 min read",
        category: "Performance",
        tags: &["Load Testing", "JMeter", "Performance"],
    },
    Post {
        id: 6,
        title: "Security Testing Best Practices",
        excerpt: "Essential security testing techniques to protect your applications from vulnerabilities.",
        date: "2023-12-20",
        read_time: "6 min read",
        category: "Security",
        tags: &["Security Testing", "OWASP", "Penetration Testing"],
    },
];

/// Posts featured on the home page
pub fn recent_posts() -> &'static [Post] {
    &ALL_POSTS[..RECENT_POST_COUNT.min(ALL_POSTS.len())]
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-commerce Test Automation Suite",
        description: "Comprehensive test automation framework for e-commerce platforms using Playwright and TypeScript. Includes UI tests, API tests, and performance tests.",
        technologies: &["Playwright", "TypeScript", "Jest", "Docker"],
        category: "Test Automation",
        status: ProjectStatus::Completed,
        links: NO_LINKS,
        image: None,
        features: &[
            "Cross-browser testing",
            "API integration testing",
            "Performance monitoring",
            "CI/CD integration",
        ],
    },
    Project {
        id: 2,
        title: "API Testing Framework",
        description: "A robust API testing framework built with Postman and Newman, featuring automated test execution and comprehensive reporting.",
        technologies: &["Postman", "Newman", "JavaScript", "Jenkins"],
        category: "API Testing",
        status: ProjectStatus::InProgress,
        links: NO_LINKS,
        image: None,
        features: &[
            "Automated test execution",
            "Dynamic test data generation",
            "Comprehensive reporting",
            "Environment management",
        ],
    },
    Project {
        id: 3,
        title: "Mobile App Testing Toolkit",
        description: "A comprehensive testing toolkit for mobile applications, supporting both iOS and Android platforms with Appium and TestNG.",
        technologies: &["Appium", "TestNG", "Java", "Selenium Grid"],
        category: "Mobile Testing",
        status: ProjectStatus::Completed,
        links: NO_LINKS,
        image: None,
        features: &[
            "Cross-platform testing",
            "Real device testing",
            "Parallel execution",
            "Detailed reporting",
        ],
    },
    Project {
        id: 4,
        title: "Performance Testing Dashboard",
        description: "A web-based dashboard for monitoring and analyzing performance test results using JMeter and custom reporting tools.",
        technologies: &["JMeter", "React", "Node.js", "MongoDB"],
        category: "Performance Testing",
        status: ProjectStatus::Planning,
        links: NO_LINKS,
        image: None,
        features: &[
            "Real-time monitoring",
            "Historical data analysis",
            "Custom metrics",
            "Alert system",
        ],
    },
];

/// Filter buttons on the posts page (not wired to any filtering)
pub static POST_CATEGORIES: &[&str] = &[
    "All",
    "Automation",
    "API Testing",
    "DevOps",
    "Mobile Testing",
    "Performance",
    "Security",
];

/// Filter buttons on the projects page (not wired to any filtering)
pub static PROJECT_CATEGORIES: &[&str] = &[
    "All",
    "Test Automation",
    "API Testing",
    "Mobile Testing",
    "Performance Testing",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_posts_are_first_three() {
        let recent = recent_posts();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].title, "Getting Started with Playwright Testing");
        assert_eq!(recent[2].id, 3);
    }

    #[test]
    fn test_posts_are_newest_first() {
        assert!(ALL_POSTS.windows(2).all(|w| w[0].date > w[1].date));
    }

    #[test]
    fn test_post_categories_are_listed() {
        for post in ALL_POSTS {
            assert!(POST_CATEGORIES.contains(&post.category), "{}", post.category);
        }
    }

    #[test]
    fn test_project_categories_are_listed() {
        for project in PROJECTS {
            assert!(PROJECT_CATEGORIES.contains(&project.category));
        }
    }
}
