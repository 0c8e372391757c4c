//! Content of the testing-strategy article

use serde::Serialize;

use crate::checklist::ChecklistItem;

/// Title of the checklist widget on the strategy page
pub const CHECKLIST_TITLE: &str = "Front-End Testing Checklist";

/// (id, text, category)
static CHECKLIST_ITEMS: &[(&str, &str, &str)] = &[
    ("req-analysis", "Web requirements analysis completed", "Pre-Development"),
    ("test-plan", "Front-end test plan created", "Pre-Development"),
    ("env-setup", "Testing environment setup", "Pre-Development"),
    ("tool-selection", "Web testing tools selected", "Pre-Development"),
    ("team-training", "Team training completed", "Pre-Development"),
    ("unit-tests", "Unit tests written (TDD approach)", "During Development"),
    ("component-tests", "React component tests implemented", "During Development"),
    ("visual-tests", "Visual regression tests added", "During Development"),
    ("code-coverage", "Code coverage > 80%", "During Development"),
    ("code-reviews", "Code reviews include test review", "During Development"),
    ("e2e-tests", "E2E tests executed", "Pre-Release"),
    ("cross-browser", "Cross-browser testing completed", "Pre-Release"),
    ("performance", "Core Web Vitals testing done", "Pre-Release"),
    ("accessibility", "Accessibility testing verified", "Pre-Release"),
    ("responsive", "Responsive design testing completed", "Pre-Release"),
    ("regression", "Regression testing passed", "Pre-Release"),
    ("monitoring", "Production monitoring active", "Post-Release"),
    ("error-tracking", "Error tracking configured", "Post-Release"),
    ("performance-monitoring", "Performance monitoring setup", "Post-Release"),
    ("user-feedback", "User feedback collection", "Post-Release"),
    ("metrics-analysis", "Test metrics analysis", "Post-Release"),
];

/// Items of the strategy page checklist, in display order
pub fn testing_checklist_items() -> Vec<ChecklistItem> {
    CHECKLIST_ITEMS
        .iter()
        .map(|(id, text, category)| ChecklistItem::new(*id, *text, *category))
        .collect()
}

/// How strongly a tool is recommended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ToolTier {
    Essential,
    Advanced,
    Alternative,
    Legacy,
}

impl ToolTier {
    pub fn label(&self) -> &'static str {
        match self {
            ToolTier::Essential => "Essential",
            ToolTier::Advanced => "Advanced",
            ToolTier::Alternative => "Alternative",
            ToolTier::Legacy => "Legacy",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ToolTier::Essential => "bg-green-100 text-green-800",
            ToolTier::Advanced => "bg-blue-100 text-blue-800",
            ToolTier::Alternative | ToolTier::Legacy => "bg-gray-100 text-gray-800",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    pub name: &'static str,
    pub purpose: &'static str,
    pub tier: ToolTier,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolCategory {
    pub category: &'static str,
    pub tools: &'static [Tool],
}

const fn tool(name: &'static str, purpose: &'static str, tier: ToolTier) -> Tool {
    Tool {
        name,
        purpose,
        tier,
    }
}

pub static TESTING_TOOLS: &[ToolCategory] = &[
    ToolCategory {
        category: "Unit Testing",
        tools: &[
            tool("Vitest", "Fast unit testing", ToolTier::Essential),
            tool("Jest", "JavaScript testing framework", ToolTier::Alternative),
            tool("Testing Library", "Component testing utilities", ToolTier::Essential),
        ],
    },
    ToolCategory {
        category: "Component Testing",
        tools: &[
            tool("React Testing Library", "User-centric component tests", ToolTier::Essential),
            tool("Storybook", "Isolated component development", ToolTier::Advanced),
        ],
    },
    ToolCategory {
        category: "E2E Testing",
        tools: &[
            tool("Playwright", "Cross-browser automation", ToolTier::Essential),
            tool("Cypress", "Developer-friendly E2E testing", ToolTier::Essential),
            tool("Selenium", "Web browser automation", ToolTier::Legacy),
        ],
    },
    ToolCategory {
        category: "Visual Testing",
        tools: &[
            tool("Percy", "Visual regression testing", ToolTier::Essential),
            tool("Chromatic", "Component visual testing", ToolTier::Essential),
            tool("Applitools", "AI-powered visual testing", ToolTier::Advanced),
        ],
    },
    ToolCategory {
        category: "Performance Testing",
        tools: &[
            tool("Lighthouse", "Performance auditing", ToolTier::Essential),
            tool("K6", "Modern load testing", ToolTier::Essential),
            tool("JMeter", "Load testing", ToolTier::Advanced),
        ],
    },
    ToolCategory {
        category: "Accessibility Testing",
        tools: &[
            tool("axe-core", "Accessibility testing engine", ToolTier::Essential),
            tool("WAVE", "Web accessibility evaluation", ToolTier::Essential),
            tool("Lighthouse", "Accessibility auditing", ToolTier::Essential),
        ],
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct Phase {
    pub phase: &'static str,
    pub duration: &'static str,
    pub activities: &'static [&'static str],
}

pub static TESTING_PHASES: &[Phase] = &[
    Phase {
        phase: "Requirements Analysis & Test Planning",
        duration: "1-2 weeks",
        activities: &[
            "Analyze functional and non-functional requirements",
            "Create comprehensive test plan",
            "Define test scope and strategy",
            "Allocate resources and timelines",
            "Assess risks and critical areas",
        ],
    },
    Phase {
        phase: "Test Design & Development",
        duration: "2-3 weeks",
        activities: &[
            "Design test cases and scenarios",
            "Set up test automation framework",
            "Create test data management strategy",
            "Implement CI/CD integration",
            "Establish reporting mechanisms",
        ],
    },
    Phase {
        phase: "Test Environment Setup",
        duration: "1 week",
        activities: &[
            "Configure testing environments",
            "Set up browser and device testing",
            "Implement monitoring tools",
            "Create test data sets",
            "Establish access controls",
        ],
    },
    Phase {
        phase: "Test Execution",
        duration: "Ongoing",
        activities: &[
            "Execute automated test suites",
            "Perform manual testing activities",
            "Conduct exploratory testing",
            "Monitor test results and metrics",
            "Manage defect lifecycle",
        ],
    },
    Phase {
        phase: "Defect Management",
        duration: "Ongoing",
        activities: &[
            "Track and prioritize defects",
            "Coordinate with development team",
            "Verify defect fixes",
            "Analyze defect trends",
            "Implement preventive measures",
        ],
    },
    Phase {
        phase: "Test Reporting & Analysis",
        duration: "Ongoing",
        activities: &[
            "Generate test execution reports",
            "Analyze quality metrics",
            "Provide release recommendations",
            "Identify process improvements",
            "Share insights with stakeholders",
        ],
    },
];

/// One layer of the testing pyramid, top to bottom
#[derive(Debug, Clone, Serialize)]
pub struct PyramidLayer {
    pub label: &'static str,
    pub share: u8,
    pub scope: &'static str,
    pub class: &'static str,
}

pub static TESTING_PYRAMID: &[PyramidLayer] = &[
    PyramidLayer {
        label: "E2E Tests",
        share: 15,
        scope: "Critical user journeys, cross-browser testing",
        class: "w-32 h-16 bg-blue-100 border-2 border-blue-300 rounded-t-lg text-blue-800",
    },
    PyramidLayer {
        label: "Component Tests",
        share: 25,
        scope: "React components, props, user interactions",
        class: "w-48 h-20 bg-green-100 border-2 border-green-300 text-green-800",
    },
    PyramidLayer {
        label: "Unit Tests",
        share: 60,
        scope: "Utility functions, hooks, pure functions",
        class: "w-64 h-24 bg-purple-100 border-2 border-purple-300 rounded-b-lg text-purple-800",
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct QualityGate {
    pub value: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

pub static QUALITY_GATES: &[QualityGate] = &[
    QualityGate {
        value: "80%",
        name: "Code Coverage",
        description: "Minimum test coverage requirement",
        color: "green",
    },
    QualityGate {
        value: "5%",
        name: "Defect Escape Rate",
        description: "Maximum acceptable defect escape rate",
        color: "blue",
    },
    QualityGate {
        value: "90%",
        name: "Accessibility Score",
        description: "Minimum accessibility compliance",
        color: "purple",
    },
];

pub static BEST_PRACTICES: &[&str] = &[
    "Start testing early in the development cycle",
    "Follow the testing pyramid principle",
    "Automate repetitive testing tasks",
    "Integrate testing into CI/CD pipeline",
    "Test React components in isolation",
    "Focus on risk-based testing approach",
    "Involve entire team in quality assurance",
    "Continuously improve testing process",
    "Measure and track testing effectiveness",
];

/// "Current Implementation Status" section
#[derive(Debug, Clone, Serialize)]
pub struct StatusColumn {
    pub heading: &'static str,
    pub entries: &'static [&'static str],
}

pub static IMPLEMENTATION_STATUS: &[StatusColumn] = &[
    StatusColumn {
        heading: "✅ Implemented",
        entries: &[
            "Vitest setup with V8 coverage & happy-dom",
            "44 tests across 4 test files (97.63% coverage)",
            "Component tests for layout and checklist",
            "Utility function unit tests",
        ],
    },
    StatusColumn {
        heading: "🔄 Next Steps",
        entries: &[
            "E2E tests with Playwright",
            "Visual regression testing",
            "Accessibility audits in CI",
            "Performance budgets",
        ],
    },
];
