//! Audit result document model
//!
//! Mirrors the wire shape produced by the in-page audit engine: a root
//! document with `violations` and `passes` arrays. Documents are immutable
//! once ingested; every downstream component reads them as-is. Fields beyond
//! the two root arrays are deliberately lenient — a missing `impact` means
//! unknown, missing `tags`/`nodes` mean empty.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Severity classification of a violation
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Critical,
    Serious,
    Moderate,
    Minor,
    /// Impact label the audit engine did not recognize or left unset
    #[serde(other)]
    Unknown,
}

impl Impact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::Critical => "critical",
            Impact::Serious => "serious",
            Impact::Moderate => "moderate",
            Impact::Minor => "minor",
            Impact::Unknown => "unknown",
        }
    }

    /// All labels in display order, most severe first
    pub fn all() -> [Impact; 5] {
        [
            Impact::Critical,
            Impact::Serious,
            Impact::Moderate,
            Impact::Minor,
            Impact::Unknown,
        ]
    }
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Impact {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "critical" => Impact::Critical,
            "serious" => Impact::Serious,
            "moderate" => Impact::Moderate,
            "minor" => Impact::Minor,
            _ => Impact::Unknown,
        })
    }
}

/// A single element matched by a violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AffectedNode {
    /// HTML snippet of the offending element
    #[serde(default)]
    pub html: String,
    /// Selector chain identifying the matched elements
    #[serde(default)]
    pub target: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_summary: Option<String>,
}

/// A single accessibility rule failure with its affected elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Rule identifier, e.g. `color-contrast`
    pub id: String,
    /// Absent or null means unknown severity
    #[serde(default)]
    pub impact: Option<Impact>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub help: String,
    #[serde(default)]
    pub help_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub nodes: Vec<AffectedNode>,
}

impl Violation {
    /// Effective impact with the unknown fallback applied
    pub fn impact_or_unknown(&self) -> Impact {
        self.impact.unwrap_or(Impact::Unknown)
    }
}

/// A rule the page passed; kept only for counting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PassRecord {
    pub id: String,
    #[serde(default)]
    pub impact: Option<Impact>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub help: String,
    #[serde(default)]
    pub help_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Root document produced by the audit engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    #[serde(default)]
    pub url: String,
    /// ISO-8601 timestamp of the audit run
    #[serde(default)]
    pub timestamp: String,
    pub violations: Vec<Violation>,
    pub passes: Vec<PassRecord>,
}
