//! Required external tools
//!
//! The test tool runs on the JVM and renders its reports with graphviz and
//! gnuplot, so all three must be reachable on the search path.

use std::fmt;

/// An external tool the test tool depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRequirement {
    /// Default executable name looked up on PATH
    pub name: &'static str,
    /// What the tool is, for diagnostics (e.g. "graphviz")
    pub description: &'static str,
    /// Minimum major version, if one is enforced
    pub min_version: Option<u32>,
    /// Whether this is the runtime that launches the test tool, which the
    /// configuration may point at a different executable
    pub test_runtime: bool,
}

impl ToolRequirement {
    /// Executable to check, given the configured test tool runtime
    pub fn program<'a>(&'a self, runtime: &'a str) -> &'a str {
        if self.test_runtime {
            runtime
        } else {
            self.name
        }
    }
}

impl fmt::Display for ToolRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.min_version {
            Some(v) => write!(f, "{} {}+", self.description, v),
            None => write!(f, "{}", self.description),
        }
    }
}

/// All required tools, checked in this order
static REQUIREMENTS: &[ToolRequirement] = &[
    ToolRequirement {
        name: "java",
        description: "java",
        min_version: Some(11),
        test_runtime: true,
    },
    ToolRequirement {
        name: "dot",
        description: "graphviz",
        min_version: None,
        test_runtime: false,
    },
    ToolRequirement {
        name: "gnuplot",
        description: "gnuplot",
        min_version: None,
        test_runtime: false,
    },
];

/// Get all required tools
pub fn all_requirements() -> &'static [ToolRequirement] {
    REQUIREMENTS
}
